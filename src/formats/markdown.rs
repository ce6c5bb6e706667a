//! Markdown format implementation for ATX-style headings (# syntax).
//!
//! The marker and bullet can be overridden so that notes written with a
//! different repeated marker still resolve their outline.

use crate::formats::Format;

/// Conventions for ATX-style markdown headings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkdownFormat {
    marker: char,
    bullet: String,
}

impl MarkdownFormat {
    #[must_use]
    /// Markdown with a custom heading marker in place of `#`.
    pub fn with_marker(marker: char) -> Self {
        Self {
            marker,
            ..Self::default()
        }
    }

    #[must_use]
    /// Replaces the list item prefix used for generated bullet lines.
    pub fn bullet_prefix(mut self, bullet: impl Into<String>) -> Self {
        self.bullet = bullet.into();
        self
    }
}

impl Default for MarkdownFormat {
    fn default() -> Self {
        Self {
            marker: '#',
            bullet: "- ".to_string(),
        }
    }
}

impl Format for MarkdownFormat {
    fn marker(&self) -> char {
        self.marker
    }

    fn bullet(&self) -> &str {
        &self.bullet
    }

    fn bold(&self, text: &str) -> String {
        format!("**{text}**")
    }
}
