//! Content module - section documents, where they come from, and loading

pub mod document;
pub mod loader;
pub mod source;

pub use document::*;
pub use loader::load_document;
pub use source::{DocumentSource, FsSource, HttpSource};
