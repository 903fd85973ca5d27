#![forbid(unsafe_code)]

//! Errors raised by table construction.

use std::fmt;

/// Caller-usage errors detected while building a table.
///
/// All of them reject the offending call before it touches the model, so a
/// table never ends up with misaligned geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// A value was set while no row was under construction.
    InvalidState,
    /// A value carried an unrecognized type tag, or a payload that does not
    /// match its tag.
    InvalidType {
        /// The offending tag.
        tag: u32,
    },
    /// A row disagreed with the locked column count.
    ColumnCountMismatch {
        /// Locked column count.
        expected: usize,
        /// Number of values the row supplied (or tried to supply).
        found: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState => write!(f, "value set before begin_row()"),
            Self::InvalidType { tag } => write!(f, "invalid value type tag {tag}"),
            Self::ColumnCountMismatch { expected, found } => write!(
                f,
                "row supplies {found} values but the table has {expected} columns"
            ),
        }
    }
}

impl std::error::Error for TableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            TableError::InvalidState.to_string(),
            "value set before begin_row()"
        );
        assert_eq!(
            TableError::InvalidType { tag: 7 }.to_string(),
            "invalid value type tag 7"
        );
        assert_eq!(
            TableError::ColumnCountMismatch {
                expected: 2,
                found: 3
            }
            .to_string(),
            "row supplies 3 values but the table has 2 columns"
        );
    }

    #[test]
    fn is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&TableError::InvalidState);
    }
}
