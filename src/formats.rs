//! Format trait and implementations for different outline conventions.
//!
//! This module defines the `Format` trait which abstracts over the textual
//! conventions a heading outline is written in: which character encodes heading
//! depth, how list items are prefixed, and how a line is emphasised.

pub mod markdown;

/// Line-level conventions of a plain-text outline.
pub trait Format {
    /// Character repeated at the start of a line to encode heading depth.
    fn marker(&self) -> char;
    /// Prefix placed in front of each generated list item.
    fn bullet(&self) -> &str;
    /// Wraps `text` in the format's strong emphasis.
    fn bold(&self, text: &str) -> String;
}
