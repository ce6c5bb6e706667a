//! Section resolution over a flat list of lines.
//!
//! A section is the run of lines owned by a heading: everything after the heading
//! line up to the next heading that is as shallow or shallower. There is no parse
//! tree; boundaries come purely from comparing marker depths, never from titles.

use crate::heading::{heading_depth, heading_title, is_heading};
use tracing::debug;

/// Heading that owns a position, or the document root when none precedes it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parent {
    /// Marker count of the heading (0 for the document root).
    pub depth: usize,
    /// Line index of the heading, `None` for the document root.
    pub line: Option<usize>,
    /// Heading text without markup symbols (empty for the document root).
    pub title: String,
}

impl Parent {
    #[must_use]
    /// Sentinel for positions above the first heading.
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    /// True when no heading encloses the position.
    pub fn is_root(&self) -> bool {
        self.line.is_none()
    }

    #[must_use]
    /// First line belonging to the section body.
    pub fn body_start(&self) -> usize {
        self.line.map_or(0, |line| line + 1)
    }

    #[must_use]
    /// Depth of headings that are direct children of this one.
    pub fn child_depth(&self) -> usize {
        self.depth + 1
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A child heading found inside a section.
pub struct Section {
    /// Section heading text without markup symbols.
    pub title: String,
    /// Line holding the heading itself.
    pub line: usize,
}

/// Whether the scan starting line may itself be the enclosing heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// A heading on the starting line encloses itself.
    Inclusive,
    /// Start looking on the line above.
    Exclusive,
}

#[must_use]
/// Finds the nearest heading at or above `from_line`.
///
/// Starting lines past the end of the document are clamped to the last line.
pub fn find_enclosing_heading(
    lines: &[String],
    from_line: usize,
    scope: Scope,
    marker: char,
) -> Parent {
    let Some(last) = lines.len().checked_sub(1) else {
        return Parent::root();
    };
    let start = match scope {
        Scope::Inclusive => Some(from_line.min(last)),
        Scope::Exclusive => from_line.min(lines.len()).checked_sub(1),
    };
    let Some(start) = start else {
        return Parent::root();
    };

    let found = (0..=start)
        .rev()
        .find(|&i| is_heading(&lines[i], marker))
        .map_or_else(Parent::root, |i| Parent {
            depth: heading_depth(&lines[i], marker),
            line: Some(i),
            title: heading_title(&lines[i], marker).to_string(),
        });
    debug!(from_line, ?found, "resolved enclosing heading");
    found
}

#[must_use]
/// Index of the first heading after `parent` at its depth or shallower.
///
/// Returns `lines.len()` when the section runs to the end of the document.
pub fn find_section_end(lines: &[String], parent: &Parent, marker: char) -> usize {
    let start = parent.body_start();
    lines
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, line)| is_heading(line, marker) && heading_depth(line, marker) <= parent.depth)
        .map_or(lines.len(), |(i, _)| i)
}

#[must_use]
/// Direct child headings of `parent`, in document order.
///
/// Only headings exactly one level deeper are returned; deeper descendants are
/// part of their own child's section.
pub fn child_sections(lines: &[String], parent: &Parent, marker: char) -> Vec<Section> {
    let end = find_section_end(lines, parent, marker);
    let child_depth = parent.child_depth();

    (parent.body_start()..end)
        .filter(|&i| heading_depth(&lines[i], marker) == child_depth)
        .map(|i| Section {
            title: heading_title(&lines[i], marker).to_string(),
            line: i,
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
