use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book.
///
/// Provides abstraction over where the book lives between sessions,
/// enabling different implementations (JSON file, in-memory mock).
pub trait BookRepository {
    /// Load the stored address book.
    ///
    /// Returns an empty book when nothing has been stored yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored address book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
