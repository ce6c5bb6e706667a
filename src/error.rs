//! Error types for outline operations and host access.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why an outline operation refused to run.
///
/// Every variant is recoverable and reported to the user through the host's
/// notification sink; its `Display` text is the notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A selected heading is already as deep as an outline allows.
    #[error("Max heading reached!")]
    MaxDepth,

    /// A selected heading is already top level.
    #[error("Min heading reached!")]
    MinDepth,

    /// The operation inserts at the cursor and needs a body line there.
    #[error("Put the cursor on a non-heading line")]
    CursorOnHeading,

    /// Scratchpads do not nest.
    #[error("Cannot create scratchpad for scratchpad")]
    ScratchpadInScratchpad,

    /// The section already owns a scratchpad.
    #[error("Scratchpad already exists")]
    ScratchpadExists,

    /// End markers close a section, not a scratchpad.
    #[error("Cannot create EOL for scratchpad")]
    EolInScratchpad,

    /// End markers are only placed after a scratchpad.
    #[error("Create scratchpad first")]
    MissingScratchpad,

    /// The cursor points past the end of the document.
    #[error("Cursor line {line} is outside the document ({len} lines)")]
    CursorOutOfRange {
        /// Requested line.
        line: usize,
        /// Lines in the document.
        len: usize,
    },
}

/// Failures talking to the editing surface or its storage.
#[derive(Error, Debug)]
pub enum HostError {
    /// No document is open at the given location.
    #[error("No document at {}", .0.display())]
    NoDocument(PathBuf),

    /// Reading or writing the document failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// An edit plan could not be encoded or decoded.
    #[error("Edit plan error: {0}")]
    Plan(#[from] serde_json::Error),
}
