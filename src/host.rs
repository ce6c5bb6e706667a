//! The editing surface an outline operation reads from and writes back to.
//!
//! The engine never holds on to a document. A [`Host`] hands over a fresh snapshot
//! for every operation and accepts exactly one whole-document replacement when the
//! operation succeeds. Two hosts ship with the crate: [`FileHost`] backs the
//! command line on top of a file, and [`MemoryHost`] keeps everything in memory
//! for embedding and tests.

use crate::commands::CommandSpec;
use crate::cursor::{Position, Selection};
use crate::edit_plan::{render_document, split_document, Edit, EditPlan, LineEnding};
use crate::error::HostError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Request/response contract between the outline core and an editing surface.
pub trait Host {
    /// Current document content split on line breaks.
    ///
    /// # Errors
    ///
    /// Returns an error if no document is available.
    fn document_lines(&self) -> Result<Vec<String>, HostError>;

    /// Current selection, ordered so that `from` precedes `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if no document is available.
    fn selection(&self) -> Result<Selection, HostError>;

    /// Current cursor, the start of the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if no document is available.
    fn cursor(&self) -> Result<Position, HostError> {
        Ok(self.selection()?.from)
    }

    /// Replaces the whole document with `lines`.
    ///
    /// # Errors
    ///
    /// Returns an error if the replacement could not be persisted.
    fn commit(&mut self, lines: &[String]) -> Result<(), HostError>;

    /// Moves the selection.
    fn set_selection(&mut self, selection: Selection);

    /// Collapses the selection onto `position`.
    fn set_cursor(&mut self, position: Position) {
        self.set_selection(Selection::caret(position));
    }

    /// Shows a short message to the user.
    fn notify(&mut self, message: &str);

    /// Exposes an operation as a user-invokable action.
    fn register_command(&mut self, command: &CommandSpec);
}

/// In-memory document with a selection, message log and command list.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    /// Current document lines.
    pub lines: Vec<String>,
    /// Current selection.
    pub selection: Selection,
    /// Every notification shown so far.
    pub messages: Vec<String>,
    /// Every command registered so far.
    pub commands: Vec<CommandSpec>,
    /// Number of replacements committed.
    pub commits: usize,
}

impl MemoryHost {
    #[must_use]
    /// A document of `lines` with the cursor at the start.
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    /// Places the selection before the first operation.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    #[must_use]
    /// Places a caret before the first operation.
    pub fn with_cursor(self, position: Position) -> Self {
        self.with_selection(Selection::caret(position))
    }
}

impl Host for MemoryHost {
    fn document_lines(&self) -> Result<Vec<String>, HostError> {
        Ok(self.lines.clone())
    }

    fn selection(&self) -> Result<Selection, HostError> {
        Ok(self.selection)
    }

    fn commit(&mut self, lines: &[String]) -> Result<(), HostError> {
        self.lines = lines.to_vec();
        self.commits += 1;
        Ok(())
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn register_command(&mut self, command: &CommandSpec) {
        self.commands.push(command.clone());
    }
}

/// A document backed by a file on disk.
///
/// Every commit is recorded in an [`EditPlan`]. Outside dry-run mode it is also
/// written straight back to the file; in dry-run mode the file is never touched
/// and later reads see the pending content instead. Writes keep the line ending
/// the file had when it was opened.
#[derive(Debug)]
pub struct FileHost {
    path: PathBuf,
    selection: Selection,
    dry_run: bool,
    pending: Option<Vec<String>>,
    plan: EditPlan,
    commands: Vec<CommandSpec>,
}

impl FileHost {
    /// Opens `path` with the given selection.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::NoDocument`] if the path is not a file, or an I/O
    /// error if it cannot be read.
    pub fn open(path: impl AsRef<Path>, selection: Selection) -> Result<Self, HostError> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(HostError::NoDocument(path));
        }
        let line_ending = LineEnding::detect(&fs::read_to_string(&path)?);
        debug!(path = %path.display(), ?line_ending, "opened document");
        Ok(Self {
            plan: EditPlan {
                line_ending,
                ..EditPlan::new(path.to_string_lossy())
            },
            path,
            selection,
            dry_run: false,
            pending: None,
            commands: Vec::new(),
        })
    }

    #[must_use]
    /// Records replacements in the plan without writing them.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    /// Replacements and notifications recorded so far.
    pub fn plan(&self) -> &EditPlan {
        &self.plan
    }

    #[must_use]
    /// Consumes the host, returning its recorded plan.
    pub fn into_plan(self) -> EditPlan {
        self.plan
    }

    #[must_use]
    /// Commands registered on this host.
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }
}

impl Host for FileHost {
    fn document_lines(&self) -> Result<Vec<String>, HostError> {
        if let Some(lines) = &self.pending {
            return Ok(lines.clone());
        }
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(split_document(&content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(HostError::NoDocument(self.path.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn selection(&self) -> Result<Selection, HostError> {
        Ok(self.selection)
    }

    fn commit(&mut self, lines: &[String]) -> Result<(), HostError> {
        if self.dry_run {
            debug!(path = %self.path.display(), "dry run, keeping replacement in memory");
            self.pending = Some(lines.to_vec());
        } else {
            fs::write(&self.path, render_document(lines, self.plan.line_ending))?;
            info!(path = %self.path.display(), lines = lines.len(), "document replaced");
        }
        self.plan.edits.push(Edit {
            lines: lines.to_vec(),
            selection: self.selection,
        });
        Ok(())
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
        if let Some(edit) = self.plan.edits.last_mut() {
            edit.selection = selection;
        }
    }

    fn notify(&mut self, message: &str) {
        self.plan.messages.push(message.to_string());
    }

    fn register_command(&mut self, command: &CommandSpec) {
        self.commands.push(command.clone());
    }
}

#[cfg(test)]
#[path = "tests/host.rs"]
mod tests;
