//! Assignments computed by section renderers and applied to the DOM

use super::Dom;

/// A single mutation of the host page, addressed by element id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// Replace the element's children with text
    Text { id: String, text: String },
    /// Replace the element's children with an HTML fragment
    Html { id: String, html: String },
    /// Set an attribute on the element
    Attribute {
        id: String,
        name: String,
        value: String,
    },
    /// Set the document title
    Title(String),
    /// Set the `content` of `<meta name="...">`
    Meta { name: String, content: String },
}

impl Assignment {
    pub fn text(id: &str, text: impl Into<String>) -> Self {
        Self::Text {
            id: id.to_string(),
            text: text.into(),
        }
    }

    pub fn html(id: &str, html: impl Into<String>) -> Self {
        Self::Html {
            id: id.to_string(),
            html: html.into(),
        }
    }

    pub fn attribute(id: &str, name: &str, value: impl Into<String>) -> Self {
        Self::Attribute {
            id: id.to_string(),
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn meta(name: &str, content: impl Into<String>) -> Self {
        Self::Meta {
            name: name.to_string(),
            content: content.into(),
        }
    }
}

/// Counts of applied and skipped assignments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Applied {
    pub applied: usize,
    pub skipped: usize,
}

impl Dom {
    /// Apply assignments in order; missing targets are skipped silently
    pub fn apply(&mut self, assignments: &[Assignment]) -> Applied {
        let mut counts = Applied::default();

        for assignment in assignments {
            let done = match assignment {
                Assignment::Text { id, text } => self
                    .get_element_by_id(id)
                    .map(|el| self.set_text(el, text))
                    .is_some(),
                Assignment::Html { id, html } => self
                    .get_element_by_id(id)
                    .map(|el| self.set_inner_html(el, html))
                    .is_some(),
                Assignment::Attribute { id, name, value } => self
                    .get_element_by_id(id)
                    .map(|el| self.set_attribute(el, name, value))
                    .is_some(),
                Assignment::Title(title) => {
                    self.set_title(title);
                    true
                }
                Assignment::Meta { name, content } => self
                    .meta(name)
                    .map(|el| self.set_attribute(el, "content", content))
                    .is_some(),
            };

            if done {
                counts.applied += 1;
            } else {
                tracing::debug!("Skipping assignment, target not in page: {:?}", assignment);
                counts.skipped += 1;
            }
        }

        counts
    }
}
