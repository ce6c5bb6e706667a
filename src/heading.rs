//! Line classification for heading outlines.
//!
//! Everything that decides what a line *is* lives here: how deep a heading sits,
//! what its title reads, and whether it names a scratchpad or a date stamp. The
//! rest of the crate asks these questions through [`Classifier`] so the matching
//! rules stay in one place and can be swapped for a real tokenizer.

use regex::Regex;

/// Deepest heading an outline may contain.
pub const MAX_DEPTH: usize = 6;
/// Shallowest heading an outline may contain.
pub const MIN_DEPTH: usize = 1;

#[must_use]
/// Counts the leading run of `marker` characters (0 for a non-heading line).
pub fn heading_depth(line: &str, marker: char) -> usize {
    line.chars().take_while(|&c| c == marker).count()
}

#[must_use]
/// Builds the marker run for a heading of the given depth.
pub fn heading_prefix(depth: usize, marker: char) -> String {
    std::iter::repeat_n(marker, depth).collect()
}

#[must_use]
/// Whether the line opens with at least one marker character.
pub fn is_heading(line: &str, marker: char) -> bool {
    line.starts_with(marker)
}

#[must_use]
/// Heading text with the marker run and one separating space removed.
pub fn heading_title(line: &str, marker: char) -> &str {
    let rest = line.trim_start_matches(marker);
    rest.strip_prefix(' ').unwrap_or(rest)
}

/// Compiled matching rules for one heading marker.
#[derive(Clone, Debug)]
pub struct Classifier {
    marker: char,
    scratchpad: Regex,
    date_stamp: Regex,
}

impl Classifier {
    /// Compiles the scratchpad and date-stamp patterns for `marker`.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn new(marker: char) -> Result<Self, regex::Error> {
        let run = format!("(?:{})+", regex::escape(&marker.to_string()));
        Ok(Self {
            marker,
            scratchpad: Regex::new(&format!("^{run} (?i:scratchpad /|first scratchpad)"))?,
            date_stamp: Regex::new(&format!(r"^{run} \d{{4}}-\d{{2}}-\d{{2}}"))?,
        })
    }

    #[must_use]
    /// The heading marker these rules were compiled for.
    pub fn marker(&self) -> char {
        self.marker
    }

    #[must_use]
    /// See [`heading_depth`].
    pub fn depth(&self, line: &str) -> usize {
        heading_depth(line, self.marker)
    }

    #[must_use]
    /// See [`is_heading`].
    pub fn is_heading(&self, line: &str) -> bool {
        is_heading(line, self.marker)
    }

    #[must_use]
    /// See [`heading_title`].
    pub fn title<'a>(&self, line: &'a str) -> &'a str {
        heading_title(line, self.marker)
    }

    #[must_use]
    /// See [`heading_prefix`].
    pub fn prefix(&self, depth: usize) -> String {
        heading_prefix(depth, self.marker)
    }

    #[must_use]
    /// Heading titled `scratchpad /...` or `first scratchpad`, any case.
    pub fn is_scratchpad(&self, line: &str) -> bool {
        self.scratchpad.is_match(line)
    }

    #[must_use]
    /// Heading whose title opens with an ISO `YYYY-MM-DD` date.
    pub fn is_date_stamp(&self, line: &str) -> bool {
        self.date_stamp.is_match(line)
    }
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
