//! Error types at the library seams

use thiserror::Error;

/// A section's content document could not be obtained
///
/// Network failures, non-success statuses, IO errors and malformed bodies
/// all fold into this one kind.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("{section} document unavailable ({path}): {reason}")]
    Unavailable {
        section: &'static str,
        path: String,
        reason: String,
    },
}

impl DocumentError {
    pub fn section(&self) -> &'static str {
        match self {
            Self::Unavailable { section, .. } => section,
        }
    }
}

/// A section's fragments could not be built from its document
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to render fragment {template}: {source}")]
    Template {
        template: String,
        #[source]
        source: tera::Error,
    },
}

/// Why a section did not update the page
#[derive(Error, Debug)]
pub enum SectionError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// The contact form submission did not go through
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// Transport error or non-success status
    #[error("submission failed: {0}")]
    Failed(String),

    #[error("contact form #{0} not found in page")]
    MissingForm(String),
}
