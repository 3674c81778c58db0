use std::{io, path::Path};

use thiserror::Error;

#[derive(Error, Debug)]
/// Conversion error
pub enum ConvertError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "csv")]
    #[error("CSV parse error: {0}")]
    Csv(csv::Error),

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: u64,
        found: u64,
    },

    #[error("invalid XML template: {0}")]
    Template(String),
}

#[cfg(feature = "csv")]
impl From<csv::Error> for ConvertError {
    /// Unwraps I/O failures raised inside the CSV parser so they surface as
    /// [`ConvertError::Io`], and turns record length mismatches into
    /// [`ConvertError::FieldCount`].
    fn from(error: csv::Error) -> Self {
        if let csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } = error.kind()
        {
            return ConvertError::FieldCount {
                line: pos.as_ref().map_or(0, |p| p.line()),
                expected: *expected_len,
                found: *len,
            };
        }
        if error.is_io_error() {
            return match error.into_kind() {
                csv::ErrorKind::Io(err) => ConvertError::Io(err),
                kind => ConvertError::Io(io::Error::other(format!("{:?}", kind))),
            };
        }
        ConvertError::Csv(error)
    }
}

#[derive(Error, Debug)]
/// Command-line error
pub enum CliError {
    #[error("Need a single command line argument: trajectory CSV file.")]
    Usage,

    #[error("Command line argument is not valid UTF-8: {0}")]
    InvalidArgument(String),

    #[error("CSV/XML file error: {0}")]
    Conversion(#[from] ConvertError),
}

impl CliError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Prefixes an I/O error message with the path it concerns, keeping its kind.
pub(crate) fn with_path(error: io::Error, path: &Path) -> io::Error {
    io::Error::new(error.kind(), format!("{}: {}", path.display(), error))
}
