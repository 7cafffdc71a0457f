//! Custom error types for FGDC record processing

use std::fmt;
use std::io;
use std::path::PathBuf;

/// FGDC processing error types
#[derive(Debug)]
pub enum FgdcError {
    /// I/O error
    IoError(io::Error),
    /// The record could not be parsed as XML
    MalformedXml(String),
    /// An element the layout requires is absent
    MissingElement(String),
    /// A dataset identifier appeared before any collection identifier in the same record
    DatasetWithoutCollection { record: String, dataset: String },
    /// A record carries no dataset identifier at all
    MissingDataset(String),
    /// A record carries more than one dataset identifier
    MultipleDatasets { record: String, count: usize },
    /// Identifier value cannot be used as a directory name
    InvalidIdentifier(String),
    /// Dataset directory already exists inside the collection
    DuplicateDataset(PathBuf),
    /// Directory could not be created
    DirectoryCreation { path: PathBuf, source: io::Error },
    /// Zip archive could not be written
    ArchiveError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for FgdcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FgdcError::IoError(e) => write!(f, "I/O error: {}", e),
            FgdcError::MalformedXml(msg) => write!(f, "Malformed XML: {}", msg),
            FgdcError::MissingElement(name) => write!(f, "Missing element: {}", name),
            FgdcError::DatasetWithoutCollection { record, dataset } => write!(
                f,
                "Dataset identifier '{}' in {} has no preceding collection identifier",
                dataset, record
            ),
            FgdcError::MissingDataset(record) => write!(f, "No dataset identifier found in {}", record),
            FgdcError::MultipleDatasets { record, count } => {
                write!(f, "{} carries {} dataset identifiers, expected one", record, count)
            }
            FgdcError::InvalidIdentifier(value) => write!(f, "Invalid identifier: {:?}", value),
            FgdcError::DuplicateDataset(path) => {
                write!(f, "Dataset directory already exists: {}", path.display())
            }
            FgdcError::DirectoryCreation { path, source } => {
                write!(f, "Cannot create directory {}: {}", path.display(), source)
            }
            FgdcError::ArchiveError(msg) => write!(f, "Archive error: {}", msg),
            FgdcError::GenericError(msg) => write!(f, "FGDC error: {}", msg),
        }
    }
}

impl std::error::Error for FgdcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FgdcError::IoError(e) => Some(e),
            FgdcError::DirectoryCreation { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for FgdcError {
    fn from(error: io::Error) -> Self {
        FgdcError::IoError(error)
    }
}

impl From<quick_xml::Error> for FgdcError {
    fn from(error: quick_xml::Error) -> Self {
        FgdcError::MalformedXml(error.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for FgdcError {
    fn from(error: quick_xml::events::attributes::AttrError) -> Self {
        FgdcError::MalformedXml(error.to_string())
    }
}

impl From<std::str::Utf8Error> for FgdcError {
    fn from(error: std::str::Utf8Error) -> Self {
        FgdcError::MalformedXml(error.to_string())
    }
}

impl From<zip::result::ZipError> for FgdcError {
    fn from(error: zip::result::ZipError) -> Self {
        FgdcError::ArchiveError(error.to_string())
    }
}

impl From<String> for FgdcError {
    fn from(msg: String) -> Self {
        FgdcError::GenericError(msg)
    }
}

/// Result type for FGDC operations
pub type FgdcResult<T> = Result<T, FgdcError>;
