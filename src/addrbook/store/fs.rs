use super::{ContactMap, StorageBackend};
use crate::error::{BookError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_CONTACTS_FILE: &str = "contacts.json";

pub struct FileBackend {
    root: PathBuf,
    file_name: String,
}

impl FileBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: DEFAULT_CONTACTS_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    fn data_file(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn load_contacts(&self) -> Result<ContactMap> {
        let data_file = self.data_file();
        // Only a missing file means an empty book.
        let content = match fs::read_to_string(&data_file) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %data_file.display(), "no contacts file yet");
                return Ok(ContactMap::new());
            }
            Err(e) => return Err(e.into()),
        };
        let contacts: ContactMap =
            serde_json::from_str(&content).map_err(|e| BookError::CorruptData(e.to_string()))?;
        debug!(path = %data_file.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn save_contacts(&self, contacts: &ContactMap) -> Result<()> {
        self.ensure_dir()?;

        let data_file = self.data_file();
        let mut content = serde_json::to_string_pretty(contacts).map_err(std::io::Error::from)?;
        content.push('\n');

        // Temp file beside the target, then rename over it.
        let tmp_file = self.root.join(format!(".contacts-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content)?;
        if let Err(e) = fs::rename(&tmp_file, &data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(e.into());
        }

        debug!(path = %data_file.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.data_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoredRecord;
    use tempfile::TempDir;

    fn sample() -> ContactMap {
        let mut contacts = ContactMap::new();
        contacts.insert(
            "Bill".into(),
            StoredRecord {
                name: "Bill".into(),
                phones: vec!["1234567890".into()],
                birthday: Some("1990-05-01".into()),
            },
        );
        contacts
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("nested"));
        assert!(backend.load_contacts().unwrap().is_empty());
    }

    #[test]
    fn save_creates_dir_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("nested"));
        backend.save_contacts(&sample()).unwrap();
        assert!(dir.path().join("nested").join(DEFAULT_CONTACTS_FILE).exists());
        assert_eq!(backend.load_contacts().unwrap(), sample());
    }

    #[test]
    fn custom_file_name_is_used() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().to_path_buf()).with_file_name("book.json");
        backend.save_contacts(&sample()).unwrap();
        assert_eq!(backend.location(), dir.path().join("book.json"));
        assert!(dir.path().join("book.json").exists());
    }

    #[test]
    fn malformed_json_is_corrupt_data() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_CONTACTS_FILE), "{ not json").unwrap();
        let backend = FileBackend::new(dir.path().to_path_buf());
        assert!(matches!(
            backend.load_contacts(),
            Err(BookError::CorruptData(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_file_is_an_error_not_an_empty_book() {
        let dir = TempDir::new().unwrap();
        let data_file = dir.path().join(DEFAULT_CONTACTS_FILE);
        // A self-referencing symlink: `exists()` says no, reading fails with ELOOP.
        std::os::unix::fs::symlink(&data_file, &data_file).unwrap();

        let backend = FileBackend::new(dir.path().to_path_buf());
        assert!(matches!(
            backend.load_contacts(),
            Err(BookError::Persistence(_))
        ));
    }
}
