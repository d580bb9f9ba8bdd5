// ---------------------------------------------------------------------------
// DataError: typed errors for election data ingestion and lookup
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while loading or validating election data.
///
/// Every numeric cell is parsed explicitly; a malformed cell produces
/// [`DataError::BadField`] naming the state, column, and offending text
/// instead of silently coercing to zero and corrupting classification.
#[derive(Debug)]
pub enum DataError {
    /// I/O error (file not found, permission denied, etc.)
    Io(std::io::Error),
    /// CSV-level error (malformed record, missing column).
    Csv(csv::Error),
    /// A required numeric field held text that does not parse.
    BadField {
        state: String,
        field: &'static str,
        value: String,
    },
    /// The year index named a party code other than D/R/I.
    BadParty { value: String },
    /// The year index held a non-numeric year.
    BadYear { value: String },
    /// The tile layout table listed the same abbreviation twice.
    DuplicateGridKey { abbr: String },
    /// A state abbreviation has no slot in the tile layout table.
    MissingGridSlot { abbr: String },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "I/O error: {e}"),
            DataError::Csv(e) => write!(f, "CSV error: {e}"),
            DataError::BadField {
                state,
                field,
                value,
            } => write!(f, "{state}: field {field} is not numeric: {value:?}"),
            DataError::BadParty { value } => {
                write!(f, "Unknown party code in year index: {value:?}")
            }
            DataError::BadYear { value } => {
                write!(f, "Non-numeric year in year index: {value:?}")
            }
            DataError::DuplicateGridKey { abbr } => {
                write!(f, "Tile layout table lists {abbr} twice")
            }
            DataError::MissingGridSlot { abbr } => {
                write!(f, "No tile layout slot for state {abbr}")
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io(e) => Some(e),
            DataError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e)
    }
}

impl From<csv::Error> for DataError {
    fn from(e: csv::Error) -> Self {
        DataError::Csv(e)
    }
}
