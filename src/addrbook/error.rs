use thiserror::Error;

/// A field value that does not meet its format rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Invalid birthday (expected YYYY-MM-DD): {0}")]
    InvalidBirthday(String),
}

#[derive(Error, Debug)]
pub enum BookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("Corrupt contacts file: {0}")]
    CorruptData(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BookError>;
