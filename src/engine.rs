//! Outline operations over a document snapshot.
//!
//! The engine is stateless between calls. Each operation takes the current lines
//! and cursor, and either returns the full replacement document with the selection
//! to restore, or an [`EngineError`] explaining why nothing changed. Rejections
//! always happen before any line is touched.

use crate::cursor::{Position, Selection};
use crate::datestamp::date_stamp;
use crate::edit_plan::Edit;
use crate::error::EngineError;
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::heading::{Classifier, MAX_DEPTH, MIN_DEPTH};
use crate::section::{child_sections, find_enclosing_heading, find_section_end, Parent, Scope};
use chrono::NaiveDate;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shift {
    Deeper,
    Shallower,
}

/// Heading-hierarchy operations for one outline format.
pub struct HeadingEngine<F: Format = MarkdownFormat> {
    format: F,
    classifier: Classifier,
}

impl<F: Format> HeadingEngine<F> {
    /// Builds an engine that reads and writes headings in `format`.
    ///
    /// # Errors
    ///
    /// Returns an error if the heading patterns cannot be compiled for the
    /// format's marker.
    pub fn new(format: F) -> Result<Self, regex::Error> {
        let classifier = Classifier::new(format.marker())?;
        Ok(Self { format, classifier })
    }

    #[must_use]
    /// Matching rules used to classify lines.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Adds one marker to every heading in the selected lines.
    ///
    /// The selection end column moves right by one to follow the marker.
    ///
    /// # Errors
    ///
    /// [`EngineError::MaxDepth`] if any selected heading is already at the
    /// maximum depth; the document is left unchanged.
    pub fn increase_heading(
        &self,
        lines: &[String],
        selection: Selection,
    ) -> Result<Edit, EngineError> {
        self.shift_headings(lines, selection, Shift::Deeper)
    }

    /// Removes one marker from every heading in the selected lines.
    ///
    /// The selection end column moves left by one to follow the marker.
    ///
    /// # Errors
    ///
    /// [`EngineError::MinDepth`] if any selected heading is already top level;
    /// the document is left unchanged.
    pub fn decrease_heading(
        &self,
        lines: &[String],
        selection: Selection,
    ) -> Result<Edit, EngineError> {
        self.shift_headings(lines, selection, Shift::Shallower)
    }

    fn shift_headings(
        &self,
        lines: &[String],
        selection: Selection,
        shift: Shift,
    ) -> Result<Edit, EngineError> {
        check_line(lines, selection.from.line)?;
        let end = (selection.to.line + 1).min(lines.len());
        let range = selection.from.line.min(end)..end;

        for line in &lines[range.clone()] {
            if !self.classifier.is_heading(line) {
                continue;
            }
            let depth = self.classifier.depth(line);
            match shift {
                Shift::Deeper if depth >= MAX_DEPTH => return Err(EngineError::MaxDepth),
                Shift::Shallower if depth <= MIN_DEPTH => return Err(EngineError::MinDepth),
                _ => {}
            }
        }

        let marker = self.classifier.marker();
        let mut new_lines = lines.to_vec();
        for line in &mut new_lines[range] {
            if !self.classifier.is_heading(line) {
                continue;
            }
            match shift {
                Shift::Deeper => line.insert(0, marker),
                Shift::Shallower => {
                    line.remove(0);
                }
            }
        }

        let mut to = selection.to;
        to.column = match shift {
            Shift::Deeper => to.column + 1,
            Shift::Shallower => to.column.saturating_sub(1),
        };
        Ok(Edit {
            lines: new_lines,
            selection: Selection {
                from: selection.from,
                to,
            },
        })
    }

    #[must_use]
    /// Whether `position` lies inside a scratchpad section.
    ///
    /// Scans upward to the first heading. A scratchpad heading answers yes, a
    /// date-stamp heading is skipped since date stamps only nest inside
    /// scratchpads, and any other heading answers no.
    pub fn is_cursor_in_scratchpad(&self, lines: &[String], position: Position) -> bool {
        let Some(last) = lines.len().checked_sub(1) else {
            return false;
        };
        for line in lines[..=position.line.min(last)].iter().rev() {
            if !self.classifier.is_heading(line) {
                continue;
            }
            if self.classifier.is_scratchpad(line) {
                return true;
            }
            if !self.classifier.is_date_stamp(line) {
                return false;
            }
        }
        false
    }

    fn has_scratchpad(&self, lines: &[String], parent: &Parent) -> bool {
        child_sections(lines, parent, self.classifier.marker())
            .iter()
            .any(|section| self.classifier.is_scratchpad(&lines[section.line]))
    }

    /// Appends a scratchpad heading and a dated entry to the cursor's section.
    ///
    /// The scratchpad goes at the end of the enclosing section, one level below
    /// it, followed by a date-stamp heading one level deeper again. The cursor is
    /// left where it was.
    ///
    /// # Errors
    ///
    /// [`EngineError::ScratchpadInScratchpad`] if the cursor is already inside a
    /// scratchpad, [`EngineError::ScratchpadExists`] if the section owns one.
    pub fn create_scratchpad(
        &self,
        lines: &[String],
        cursor: Position,
        today: NaiveDate,
    ) -> Result<Edit, EngineError> {
        check_line(lines, cursor.line)?;
        let marker = self.classifier.marker();
        let parent = self.enclosing_heading(lines, cursor);

        if self.is_cursor_in_scratchpad(lines, cursor) {
            return Err(EngineError::ScratchpadInScratchpad);
        }
        let end = find_section_end(lines, &parent, marker);
        if self.has_scratchpad(lines, &parent) {
            return Err(EngineError::ScratchpadExists);
        }

        let title = if parent.title.is_empty() {
            "First Scratchpad".to_string()
        } else {
            format!("scratchpad / {} scratchpad", parent.title)
        };
        let heading = format!("{} {title}", self.classifier.prefix(parent.child_depth()));
        let stamp = format!(
            "{} {}",
            self.classifier.prefix(parent.depth + 2),
            date_stamp(today)
        );
        debug!(?parent, end, %heading, "inserting scratchpad");

        let mut new_lines = lines.to_vec();
        new_lines.splice(end..end, [heading, stamp]);
        Ok(Edit {
            lines: new_lines,
            selection: Selection::caret(cursor),
        })
    }

    #[must_use]
    /// Heading that owns `cursor`, counting a heading on the cursor line itself.
    pub fn enclosing_heading(&self, lines: &[String], cursor: Position) -> Parent {
        find_enclosing_heading(lines, cursor.line, Scope::Inclusive, self.classifier.marker())
    }

    /// Closes the cursor's section with a bold end marker.
    ///
    /// The marker is inserted where the section ends and the cursor moves onto it.
    ///
    /// # Errors
    ///
    /// [`EngineError::EolInScratchpad`] if the cursor is inside a scratchpad,
    /// [`EngineError::MissingScratchpad`] if the section has no scratchpad yet.
    pub fn create_eol(&self, lines: &[String], cursor: Position) -> Result<Edit, EngineError> {
        check_line(lines, cursor.line)?;
        if self.is_cursor_in_scratchpad(lines, cursor) {
            return Err(EngineError::EolInScratchpad);
        }
        self.close_section(lines, &self.enclosing_heading(lines, cursor))
    }

    /// Closes `parent`'s section with a bold end marker.
    ///
    /// `parent` must have been resolved against `lines`, or against an earlier
    /// snapshot that only changed below the heading line.
    ///
    /// # Errors
    ///
    /// [`EngineError::MissingScratchpad`] if the section has no scratchpad yet.
    pub fn close_section(&self, lines: &[String], parent: &Parent) -> Result<Edit, EngineError> {
        if !self.has_scratchpad(lines, parent) {
            return Err(EngineError::MissingScratchpad);
        }
        let end = find_section_end(lines, parent, self.classifier.marker());

        let label = if parent.title.is_empty() {
            "First EOL".to_string()
        } else {
            format!("{} EOL", parent.title)
        };
        let mut new_lines = lines.to_vec();
        new_lines.insert(end, self.format.bold(&label));
        Ok(Edit {
            lines: new_lines,
            selection: Selection::caret(Position::new(end, 0)),
        })
    }

    /// Lists the titles of the enclosing section's direct children at the cursor.
    ///
    /// One bullet line per child heading is inserted above the cursor line, in
    /// document order. The cursor keeps its coordinates and so lands on the
    /// first bullet. A section without sub-headings comes back unchanged.
    ///
    /// # Errors
    ///
    /// [`EngineError::CursorOnHeading`] if the cursor sits on a heading.
    pub fn list_headings(&self, lines: &[String], cursor: Position) -> Result<Edit, EngineError> {
        let parent = self.body_parent(lines, cursor)?;
        let bullets: Vec<String> = child_sections(lines, &parent, self.classifier.marker())
            .into_iter()
            .map(|section| format!("{}{}", self.format.bullet(), section.title))
            .collect();

        let mut new_lines = lines.to_vec();
        new_lines.splice(cursor.line..cursor.line, bullets);
        Ok(Edit {
            lines: new_lines,
            selection: Selection::caret(cursor),
        })
    }

    /// Inserts a heading titled with `today`'s stamp at the cursor line.
    ///
    /// The heading sits one level below the enclosing section.
    ///
    /// # Errors
    ///
    /// [`EngineError::CursorOnHeading`] if the cursor sits on a heading.
    pub fn insert_date_section(
        &self,
        lines: &[String],
        cursor: Position,
        today: NaiveDate,
    ) -> Result<Edit, EngineError> {
        let parent = self.body_parent(lines, cursor)?;
        let heading = format!(
            "{} {}",
            self.classifier.prefix(parent.child_depth()),
            date_stamp(today)
        );

        let mut new_lines = lines.to_vec();
        new_lines.insert(cursor.line, heading);
        Ok(Edit {
            lines: new_lines,
            selection: Selection::caret(cursor),
        })
    }

    /// Enclosing heading of a cursor that must rest on a body line.
    fn body_parent(&self, lines: &[String], cursor: Position) -> Result<Parent, EngineError> {
        check_line(lines, cursor.line)?;
        if lines
            .get(cursor.line)
            .is_some_and(|line| self.classifier.is_heading(line))
        {
            return Err(EngineError::CursorOnHeading);
        }
        Ok(find_enclosing_heading(
            lines,
            cursor.line,
            Scope::Exclusive,
            self.classifier.marker(),
        ))
    }
}

/// Cursor lines may point one past the last line, never further.
fn check_line(lines: &[String], line: usize) -> Result<(), EngineError> {
    if line > lines.len() {
        return Err(EngineError::CursorOutOfRange {
            line,
            len: lines.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/engine.rs"]
mod tests;
