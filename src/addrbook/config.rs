use crate::error::{BookError, Result};
use crate::store::fs::DEFAULT_CONTACTS_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_BIRTHDAY_WINDOW: u32 = 7;

/// Configuration for addrbook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// File the contacts are kept in, relative to the data dir
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,

    /// Contacts per page for paged listing
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// How far ahead `birthdays` looks when no window is given
    #[serde(default = "default_birthday_window")]
    pub birthday_window_days: u32,
}

fn default_contacts_file() -> String {
    DEFAULT_CONTACTS_FILE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_birthday_window() -> u32 {
    DEFAULT_BIRTHDAY_WINDOW
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            page_size: DEFAULT_PAGE_SIZE,
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW,
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        let config: BookConfig = serde_json::from_str(&content)
            .map_err(|e| BookError::Config(format!("{}: {}", config_path.display(), e)))?;
        if config.page_size == 0 {
            return Err(BookError::Config(format!(
                "{}: page_size must be at least 1",
                config_path.display()
            )));
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        fs::create_dir_all(config_dir)?;

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(std::io::Error::from)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}
