use std::error::Error;
use std::fmt;
use std::fmt::Formatter;
use std::io;
use std::path::PathBuf;

/// Raised when an input document cannot be turned into a usable sequence of
/// records. Every variant carries the path of the offending document.
#[derive(Debug)]
pub enum LoadError {
    Io(PathBuf, io::Error),
    Parse(PathBuf, serde_json::Error),
    NotASequence(PathBuf),
}

/// A recoverable problem with a single sale record. These are collected
/// while computing totals and never abort the run.
#[derive(Debug, PartialEq)]
pub enum SaleError {
    MissingKey(&'static str, String),
    IncorrectDataType(String),
    ProductNotFound(String),
}

#[derive(Debug)]
pub enum ReportError {
    WriteError(PathBuf, io::Error),
}

impl LoadError {
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Io(path, _) => path,
            LoadError::Parse(path, _) => path,
            LoadError::NotASequence(path) => path,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(path, err) => write!(f, "Error loading {}: {}", path.display(), err),
            LoadError::Parse(path, err) => write!(f, "Error loading {}: {}", path.display(), err),
            LoadError::NotASequence(path) => write!(
                f,
                "Error loading {}: expected a JSON array of records at the top level",
                path.display()
            ),
        }
    }
}

impl fmt::Display for SaleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SaleError::MissingKey(key, record) => write!(
                f,
                "Invalid sale record: Missing key '{}' in {}.",
                key, record
            ),
            SaleError::IncorrectDataType(record) => {
                write!(f, "Invalid sale record: Incorrect data type in {}.", record)
            }
            SaleError::ProductNotFound(product) => write!(
                f,
                "Product '{}' was not found in price catalogue.",
                product
            ),
        }
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::WriteError(path, err) => {
                write!(f, "failed to write report to {}: {}", path.display(), err)
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io(_, err) => Some(err),
            LoadError::Parse(_, err) => Some(err),
            LoadError::NotASequence(_) => None,
        }
    }
}

impl Error for SaleError {}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReportError::WriteError(_, err) => Some(err),
        }
    }
}
