use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed instance: {0}")]
    Format(#[from] FormatError),
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("invalid assignment: {reason}")]
    InvalidAssignment { reason: String },
    #[error("facility #{facility:02} found no available location")]
    Exhausted { facility: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum FormatError {
    #[error("missing instance size")]
    MissingSize,
    #[error("instance size must be a positive integer, got {token:?}")]
    BadSize { token: String },
    #[error("line {line} has a non-numeric token {token:?}")]
    BadToken { line: usize, token: String },
    #[error("expected {expected} numbers in row {row} of {matrix} matrix, got {found}")]
    RowWidth { matrix: &'static str, row: usize, expected: usize, found: usize },
    #[error("expected {expected} rows of {matrix} matrix, got {found}")]
    MissingRows { matrix: &'static str, expected: usize, found: usize },
}

impl Error {
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter { name, reason: reason.into() }
    }
    pub fn invalid_assignment(reason: impl Into<String>) -> Self {
        Error::InvalidAssignment { reason: reason.into() }
    }
}
