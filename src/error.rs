//! Error types for the deck-weights library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deck-weights operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the weight table.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input workbook does not exist.
    #[error("{} not found in project root", .0.display())]
    WorkbookNotFound(PathBuf),

    /// Error reading ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// Invalid or malformed data in the workbook.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A required package part is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// No sheet with the requested name exists in the workbook.
    #[error("Sheet '{0}' not found")]
    SheetNotFound(String),

    /// The sheet's relationship id does not resolve to a part.
    #[error("Relationship for sheet '{0}' not found")]
    RelationshipNotFound(String),

    /// No row carries all of the header tokens.
    #[error("Could not locate header row containing CONCAT/UNC/G30/G60/G90")]
    HeaderRowNotFound,

    /// The header row lacks one or more required columns.
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Error while rendering the output script.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::SheetNotFound("Canam Deck Catalog".to_string());
        assert_eq!(err.to_string(), "Sheet 'Canam Deck Catalog' not found");

        let err = Error::MissingColumns(vec!["G60".to_string(), "PROFILE".to_string()]);
        assert_eq!(err.to_string(), "Missing required columns: G60, PROFILE");

        let err = Error::WorkbookNotFound(PathBuf::from("Deck Weights.xlsx"));
        assert_eq!(err.to_string(), "Deck Weights.xlsx not found in project root");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
