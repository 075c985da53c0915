use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::AddressBookStore;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Where the address book is stored when nothing else is configured.
pub const DEFAULT_STORAGE_PATH: &str = "addressbook.json";

/// Address book store backed by a single JSON file.
///
/// Every save rewrites the whole file. The new content is written to a
/// temporary file next to the target and renamed over it, so an interrupted
/// save leaves the previous book readable. A failed save removes its
/// temporary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the target; the temporary file must live on the
    /// same filesystem for the final rename.
    fn staging_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_PATH)
    }
}

impl AddressBookStore for JsonFileStore {
    fn load(&self) -> StorageResult<AddressBook> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No stored address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book: AddressBook =
            serde_json::from_str(&text).map_err(|source| StorageError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        info!(path = %self.path.display(), contacts = book.len(), "Loaded address book");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let mut staging = NamedTempFile::new_in(self.staging_dir())?;
        debug!(path = %staging.path().display(), "Writing address book");

        {
            let mut writer = BufWriter::new(staging.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, book).map_err(StorageError::Encode)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        staging.as_file().sync_all()?;

        // On failure the returned handle is dropped, which deletes the file.
        staging.persist(&self.path).map_err(|e| e.error)?;
        info!(path = %self.path.display(), contacts = book.len(), "Saved address book");
        Ok(())
    }
}
