//! The edit plan records document replacements produced by outline operations.
//!
//! An operation never patches lines in place on the host: it produces a whole new
//! line list plus the selection to restore. A plan collects those replacements for
//! one file so a dry run can be inspected as JSON and applied later.

use crate::cursor::Selection;
use crate::error::HostError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Line terminator written after every line of a document.
pub enum LineEnding {
    /// Unix `\n`.
    #[default]
    Lf,
    /// Windows `\r\n`.
    CrLf,
}

impl LineEnding {
    #[must_use]
    /// The terminator used by `content`; documents with any `\r\n` count as CRLF.
    pub fn detect(content: &str) -> Self {
        if content.contains("\r\n") {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    #[must_use]
    /// The terminator itself.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Result of one successful operation: the full replacement document.
pub struct Edit {
    /// Every line of the new document, without line terminators.
    pub lines: Vec<String>,
    /// Selection to restore once the document is replaced.
    pub selection: Selection,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Serialisable sequence of replacements for a single file.
pub struct EditPlan {
    /// Target file path for this plan.
    pub file_name: String,
    /// Replacements in the order they were committed.
    pub edits: Vec<Edit>,
    /// Notifications raised while the plan was recorded.
    pub messages: Vec<String>,
    /// Terminator the target file uses.
    #[serde(default)]
    pub line_ending: LineEnding,
}

impl EditPlan {
    #[must_use]
    /// An empty plan for `file_name`.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    /// Reads a plan previously written as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid plan.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HostError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    #[must_use]
    /// Lines of the document after every recorded replacement.
    pub fn final_lines(&self) -> Option<&[String]> {
        self.edits.last().map(|edit| edit.lines.as_slice())
    }

    /// Write the last recorded replacement to disk.
    ///
    /// Replacements are whole documents, so only the final one matters.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn apply(&self) -> Result<(), HostError> {
        let Some(lines) = self.final_lines() else {
            return Ok(());
        };
        fs::write(&self.file_name, render_document(lines, self.line_ending))?;
        info!(file = %self.file_name, lines = lines.len(), "applied edit plan");
        Ok(())
    }
}

#[must_use]
/// Joins lines into file content, each line followed by `line_ending`.
pub fn render_document(lines: &[String], line_ending: LineEnding) -> String {
    let eol = line_ending.as_str();
    let mut content = String::with_capacity(lines.iter().map(|l| l.len() + eol.len()).sum());
    for line in lines {
        content.push_str(line);
        content.push_str(eol);
    }
    content
}

#[must_use]
/// Splits file content into lines; a final line break adds no empty line.
///
/// Both `\n` and `\r\n` terminate a line, see [`LineEnding::detect`] to keep
/// the original terminator when writing back.
pub fn split_document(content: &str) -> Vec<String> {
    content.lines().map(ToString::to_string).collect()
}

#[cfg(test)]
#[path = "tests/edit_plan.rs"]
mod tests;
