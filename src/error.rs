//! Error types shared across the crate.

use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::feature_code::FeatureCode;

/// A single malformed line in a user-defined feature definition.
///
/// Line numbers are 1-based. A line number of zero marks a whole-file
/// condition (a missing mandatory field, or no feature blocks at all).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number, or 0 for a whole-file condition.
    pub line: usize,
    /// Description of what was wrong.
    pub message: String,
}

impl LineError {
    pub(crate) fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "line {}: {}", self.line, self.message)
        }
    }
}

impl error::Error for LineError {}

/// Errors produced by metadata resolution, feature-set construction, and
/// user-defined feature loading.
#[derive(Debug)]
pub enum Error {
    /// The feature code is absent from both the override record and the
    /// registry, and synthesis was not requested.
    UnknownFeature(FeatureCode),
    /// No user-defined feature file exists for the model.
    ///
    /// Recoverable: the caller caches a placeholder record marked
    /// "confirmed absent" so the lookup is not repeated.
    FileNotFound(PathBuf),
    /// A user-defined feature definition was malformed.
    ///
    /// Carries every line-level cause collected during the parse; parsing
    /// never stops at the first error.
    BadData {
        /// Identifies the definition source (model file stem).
        source_name: String,
        /// All line-level errors, in input order.
        causes: Vec<LineError>,
    },
    /// A registry entry violated an internal invariant: version-sensitive
    /// flag resolution found no populated row. Indicates a registry
    /// authoring defect, not a runtime condition.
    InternalInconsistency(String),
    /// An I/O error occurred while reading a definition file.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownFeature(code) => {
                write!(f, "unknown VCP feature code {}", code)
            }
            Error::FileNotFound(path) => {
                write!(f, "no user-defined feature file: {}", path.display())
            }
            Error::BadData { source_name, causes } => {
                write!(
                    f,
                    "invalid feature definition {}: {} error{}",
                    source_name,
                    causes.len(),
                    if causes.len() == 1 { "" } else { "s" }
                )?;
                for cause in causes {
                    write!(f, "\n  {}", cause)?;
                }
                Ok(())
            }
            Error::InternalInconsistency(msg) => {
                write!(f, "internal inconsistency: {}", msg)
            }
            Error::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_error_display() {
        let e = LineError::new(12, "unexpected field: BOGUS");
        assert_eq!(e.to_string(), "line 12: unexpected field: BOGUS");

        let whole_file = LineError::new(0, "missing required field MFG_ID");
        assert_eq!(whole_file.to_string(), "missing required field MFG_ID");
    }

    #[test]
    fn test_bad_data_display_lists_causes() {
        let e = Error::BadData {
            source_name: "ACI-VG248-1427".to_string(),
            causes: vec![
                LineError::new(3, "invalid feature code: 0xzz"),
                LineError::new(7, "ATTRS before FEATURE_CODE"),
            ],
        };
        let text = e.to_string();
        assert!(text.contains("2 errors"));
        assert!(text.contains("line 3"));
        assert!(text.contains("line 7"));
    }
}
