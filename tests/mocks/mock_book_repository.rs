use contact_assistant::error::{StorageError, StorageResult};
use contact_assistant::models::AddressBook;
use contact_assistant::repositories::BookRepository;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock address book repository for testing.
///
/// Keeps the book in memory, can be told to fail loads or saves, and
/// tracks method calls for verification. Clones share state.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookRepository {
    stored: Arc<Mutex<Option<AddressBook>>>,
    fail_load: Arc<Mutex<bool>>,
    fail_save: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a repository with nothing stored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository already holding `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(book);
        repo
    }

    /// Make every load fail as if the file were corrupt.
    pub fn fail_loads(&self) {
        *self.fail_load.lock().unwrap() = true;
    }

    /// Make every save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_save.lock().unwrap() = true;
    }

    /// The last saved book, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl BookRepository for MockBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");

        if *self.fail_load.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                "corrupt address book",
            )));
        }

        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_save.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only file system",
            )));
        }

        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
