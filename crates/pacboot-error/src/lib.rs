use std::fmt;

#[derive(Debug)]
pub enum BootstrapError {
    Network(String),
    MalformedFileName(String),
    MalformedTimestamp(String),
    InvalidRecord(String),
    InvalidPattern(String),
    UnresolvedPackage(String),
    UnknownPackageFormat(String),
    ExtractionFailed(String, String),
    SnapshotError(String),
    Io(String),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => {
                write!(f, "Network error: {msg}")
            }
            Self::MalformedFileName(name) => {
                write!(f, "Cannot parse package file name '{name}'")
            }
            Self::MalformedTimestamp(line) => {
                write!(f, "Cannot parse package update time, line is: {line}")
            }
            Self::InvalidRecord(reason) => {
                write!(f, "Invalid package record: {reason}")
            }
            Self::InvalidPattern(msg) => {
                write!(f, "Invalid index pattern: {msg}")
            }
            Self::UnresolvedPackage(name) => {
                write!(f, "Package '{name}' not found in core repository")
            }
            Self::UnknownPackageFormat(file) => {
                write!(f, "Unknown package format: {file}")
            }
            Self::ExtractionFailed(file, reason) => {
                write!(f, "Failed to extract {file}: {reason}")
            }
            Self::SnapshotError(msg) => {
                write!(f, "Index snapshot error: {msg}")
            }
            Self::Io(msg) => {
                write!(f, "IO error: {msg}")
            }
        }
    }
}

impl std::error::Error for BootstrapError {}

impl From<std::io::Error> for BootstrapError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BootstrapError>;
