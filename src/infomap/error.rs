//! Custom error types for the infomap-reader crate.

use thiserror::Error;

/// The primary error type for all parse operations in this crate.
///
/// Only structural failures are reported through this type; defective data
/// rows are dropped silently so that one bad line cannot discard the rest of
/// a large result file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input has fewer lines than the shortest valid result file.
    #[error("Input too short: {found} lines, but a result file has at least 8")]
    TooShort { found: usize },

    /// The first line is not a `# v<major>.<minor>.<patch>` version tag.
    #[error("Missing version tag on the first line")]
    MissingVersion,

    /// The second line does not carry the engine invocation string.
    #[error("Missing invocation arguments on the second line")]
    MissingArguments,

    /// No column header line was found before the data section.
    #[error("No column header line found before the data section")]
    MissingSchema,

    /// A column header line was found but matches no known layout family.
    #[error("Column header {0:?} matches no known layout")]
    UnrecognizedSchema(String),
}

/// A convenience `Result` type alias using the crate's `ParseError` type.
pub type Result<T> = std::result::Result<T, ParseError>;
