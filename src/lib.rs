//! scratchmark: heading outline manipulation for plain-text notes.
//!
//! Documents are flat lists of lines whose headings are marked by a repeated
//! leading character. The [`engine::HeadingEngine`] rewrites that outline:
//! shifting heading depth, adding scratchpads with dated entries, closing
//! sections with end markers, and listing sub-headings. A [`host::Host`] supplies
//! the document and receives the replacement.

pub mod commands;
pub mod config;
pub mod cursor;
pub mod datestamp;
pub mod edit_plan;
pub mod engine;
pub mod error;
pub mod formats;
pub mod heading;
pub mod host;
pub mod logging;
pub mod section;

pub use engine::HeadingEngine;
