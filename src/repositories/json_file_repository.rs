use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::repositories::traits::BookRepository;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

/// Address book repository backed by a single JSON file.
///
/// The whole book is read at once and written at once. Writes truncate the
/// file in place.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository storing the book at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No saved address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book: AddressBook = serde_json::from_reader(BufReader::new(file))?;
        tracing::info!(
            path = %self.path.display(),
            records = book.len(),
            "Address book loaded"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, book)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        tracing::info!(
            path = %self.path.display(),
            records = book.len(),
            "Address book saved"
        );
        Ok(())
    }
}
