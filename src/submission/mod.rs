//! Contact form submission flow
//!
//! Runs against the rendered page: the submit control is disabled and
//! relabelled while the request is in flight, the configured success or
//! error message is shown afterwards, and the control is always restored.

mod http;

pub use http::{HttpSubmitter, Submitter};

use crate::content::FormSpec;
use crate::dom::{Dom, NodeId};
use crate::error::SubmissionError;

/// Label shown on the submit control while a submission is in flight
pub const SENDING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;

/// How a submission ended, as shown to the visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent,
    Failed(String),
}

/// Submit handler wired to a rendered contact form
#[derive(Debug, Clone)]
pub struct ContactForm {
    form_id: String,
    spec: FormSpec,
    /// Submit control label as rendered into the page
    submit_label: String,
}

impl ContactForm {
    pub fn new(form_id: &str, spec: FormSpec, submit_label: String) -> Self {
        Self {
            form_id: form_id.to_string(),
            spec,
            submit_label,
        }
    }

    fn form(&self, dom: &Dom) -> Result<NodeId, SubmissionError> {
        dom.get_element_by_id(&self.form_id)
            .ok_or_else(|| SubmissionError::MissingForm(self.form_id.clone()))
    }

    /// `input` and `textarea` controls of the form, in document order
    fn controls(dom: &Dom, form: NodeId) -> Vec<NodeId> {
        dom.elements_by_tags(form, &["input", "textarea"])
    }

    /// Type a value into the named control
    pub fn fill(&self, dom: &mut Dom, name: &str, value: &str) -> Result<bool, SubmissionError> {
        let form = self.form(dom)?;
        let Some(control) = Self::controls(dom, form)
            .into_iter()
            .find(|c| dom.attribute(*c, "name") == Some(name))
        else {
            return Ok(false);
        };

        if dom.tag_name(control) == Some("textarea") {
            dom.set_text(control, value);
        } else {
            dom.set_attribute(control, "value", value);
        }
        Ok(true)
    }

    /// Current `(name, value)` pairs of the form's named controls
    pub fn values(&self, dom: &Dom) -> Result<Vec<(String, String)>, SubmissionError> {
        let form = self.form(dom)?;
        Ok(Self::controls(dom, form)
            .into_iter()
            .filter_map(|c| {
                let name = dom.attribute(c, "name")?.to_string();
                let value = if dom.tag_name(c) == Some("textarea") {
                    dom.text_content(c)
                } else {
                    dom.attribute(c, "value").unwrap_or_default().to_string()
                };
                Some((name, value))
            })
            .collect())
    }

    /// Clear every control back to its rendered (empty) state
    fn reset(dom: &mut Dom, form: NodeId) {
        for control in Self::controls(dom, form) {
            if dom.tag_name(control) == Some("textarea") {
                dom.set_text(control, "");
            } else {
                dom.remove_attribute(control, "value");
            }
        }
    }

    /// Text of the form's message element, once one has been shown
    pub fn message(&self, dom: &Dom) -> Option<String> {
        let form = dom.get_element_by_id(&self.form_id)?;
        let message = dom.query_class(form, "form-message")?;
        let text = dom.text_content(message);
        (!text.is_empty()).then_some(text)
    }

    /// Disable the submit control and collect what will be sent
    pub fn begin(&self, dom: &mut Dom) -> Result<Pending, SubmissionError> {
        let form = self.form(dom)?;
        let button = dom.query_class(form, "form-submit");
        let message = dom.query_class(form, "form-message");

        if let Some(button) = button {
            dom.set_attribute(button, "disabled", "");
            dom.set_inner_html(button, SENDING_LABEL);
        }

        let action = dom.attribute(form, "action").unwrap_or_default().to_string();
        // Missing or unknown methods submit as GET
        let method = dom
            .attribute(form, "method")
            .filter(|m| m.eq_ignore_ascii_case("post") || m.eq_ignore_ascii_case("get"))
            .unwrap_or("get")
            .to_string();
        let fields = self.values(dom)?;

        Ok(Pending {
            action,
            method,
            fields,
            form,
            button,
            message,
        })
    }

    /// Show the outcome of a delivery and restore the submit control
    pub fn finish(
        &self,
        dom: &mut Dom,
        pending: Pending,
        result: Result<(), SubmissionError>,
    ) -> SubmissionOutcome {
        let outcome = match result {
            Ok(()) => {
                tracing::info!("Contact form submitted to {}", pending.action);
                if let Some(message) = pending.message {
                    show_message(dom, message, &self.spec.success_message, "success");
                }
                Self::reset(dom, pending.form);
                SubmissionOutcome::Sent
            }
            Err(e) => {
                tracing::error!("Contact form submission failed: {}", e);
                if let Some(message) = pending.message {
                    show_message(dom, message, &self.spec.error_message, "error");
                }
                SubmissionOutcome::Failed(e.to_string())
            }
        };

        // Restored on every path
        if let Some(button) = pending.button {
            dom.remove_attribute(button, "disabled");
            dom.set_inner_html(button, &self.submit_label);
        }

        outcome
    }

    /// Run one submission against the page
    ///
    /// Returns [`SubmissionError::MissingForm`] only when the form is not in
    /// the page; delivery failures are reported through the outcome and the
    /// configured error message.
    pub async fn submit(
        &self,
        dom: &mut Dom,
        submitter: &dyn Submitter,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        let pending = self.begin(dom)?;
        let result = submitter
            .submit(&pending.action, &pending.method, &pending.fields)
            .await;
        Ok(self.finish(dom, pending, result))
    }
}

/// A submission between [`ContactForm::begin`] and [`ContactForm::finish`]
#[derive(Debug)]
pub struct Pending {
    pub action: String,
    pub method: String,
    pub fields: Vec<(String, String)>,
    form: NodeId,
    button: Option<NodeId>,
    message: Option<NodeId>,
}

fn show_message(dom: &mut Dom, message: NodeId, text: &str, kind: &str) {
    dom.set_text(message, text);
    dom.set_attribute(message, "class", &format!("form-message {}", kind));
    dom.set_attribute(message, "style", "display: block");
}
