//! Helper functions shared by the DOM model, renderers and sources

mod html;
mod url;

pub use html::*;
pub use url::*;
