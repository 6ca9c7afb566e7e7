//! Crate-level error types.

use std::fmt;

/// Errors produced by the molgeom crate.
///
/// Parse failures are terminal for the load that raised them: no partially
/// built atom or vertex data is ever returned alongside one of these.
#[derive(Debug)]
pub enum MolgeomError {
    /// A required numeric column of a structural record was unparsable.
    MalformedRecord {
        /// 1-based line number of the offending record.
        line: usize,
        /// Human-readable field description (e.g. `"x coordinate"`).
        field: &'static str,
        /// The raw text found in the field's column range.
        value: String,
    },
    /// A face referenced a vertex or normal index that is zero, negative,
    /// or beyond the declared list.
    UnsupportedReference {
        /// 1-based line number of the offending face record.
        line: usize,
        /// Description of the bad reference.
        detail: String,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for MolgeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRecord { line, field, value } => {
                write!(f, "malformed record at line {line}: {field} ({value:?})")
            }
            Self::UnsupportedReference { line, detail } => {
                write!(f, "unsupported reference at line {line}: {detail}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for MolgeomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MolgeomError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
