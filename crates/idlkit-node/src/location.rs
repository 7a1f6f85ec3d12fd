//! Source locations attached to nodes for diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a value in the file it was parsed from.
///
/// Locations are carried for error reporting only. They never take part in
/// equality or hashing of the values that carry them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// File path as reported by the parser (empty when unknown)
    pub filename: String,
    /// Line number (1-indexed, 0 when unknown)
    pub line: u32,
    /// Column number (1-indexed, 0 when unknown)
    pub column: u32,
}

impl SourceLocation {
    /// Create a location with file, line, and column.
    pub fn new(filename: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            filename: filename.into(),
            line,
            column,
        }
    }

    /// The unknown location.
    pub fn none() -> Self {
        Self::default()
    }

    /// True when no parser supplied this location.
    pub fn is_none(&self) -> bool {
        self.filename.is_empty() && self.line == 0 && self.column == 0
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("<unknown>")
        } else {
            write!(f, "{} [{}, {}]", self.filename, self.line, self.column)
        }
    }
}

/// Anything that can report where it came from.
///
/// Builders accept `impl FromSourceLocation` so callers can pass either a
/// location or the node a value was decoded from.
pub trait FromSourceLocation {
    fn source_location(&self) -> SourceLocation;
}

impl FromSourceLocation for SourceLocation {
    fn source_location(&self) -> SourceLocation {
        self.clone()
    }
}

impl<T: FromSourceLocation + ?Sized> FromSourceLocation for &T {
    fn source_location(&self) -> SourceLocation {
        (**self).source_location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_known_and_unknown() {
        assert_eq!(
            SourceLocation::new("main.smithy", 3, 7).to_string(),
            "main.smithy [3, 7]"
        );
        assert_eq!(SourceLocation::none().to_string(), "<unknown>");
        assert!(SourceLocation::none().is_none());
    }
}
