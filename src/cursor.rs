//! Cursor and selection coordinates exchanged with the host.
//!
//! Lines and columns are 0-indexed, matching the line list handed to the engine.

use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
/// A point in the document.
pub struct Position {
    /// Line index into the document.
    pub line: usize,
    /// Character offset within the line.
    pub column: usize,
}

impl Position {
    #[must_use]
    /// A position at `line`, `column`.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// An ordered range between two positions; `from` never follows `to`.
pub struct Selection {
    /// Start of the range.
    pub from: Position,
    /// End of the range.
    pub to: Position,
}

impl Selection {
    #[must_use]
    /// Builds a selection from two anchors given in either order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { from: a, to: b }
        } else {
            Self { from: b, to: a }
        }
    }

    #[must_use]
    /// An empty selection sitting at `position`.
    pub fn caret(position: Position) -> Self {
        Self {
            from: position,
            to: position,
        }
    }
}
