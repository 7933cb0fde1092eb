//! Contact section: info cards, the form, and social links

use super::{push_list, push_text, Section};
use crate::content::ContactDocument;
use crate::dom::Assignment;
use crate::error::RenderError;
use crate::submission::ContactForm;
use crate::templates::FragmentRenderer;

#[derive(Debug, Clone)]
pub struct Contact {
    pub title: String,
    pub subtitle: String,
    pub info: String,
    pub form: String,
    pub social: String,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            title: "contact-title".to_string(),
            subtitle: "contact-subtitle".to_string(),
            info: "contact-info".to_string(),
            form: "contact-form".to_string(),
            social: "contact-social".to_string(),
        }
    }
}

impl Contact {
    /// The submit handler for the rendered form, when the document has one
    pub fn form_handler(
        &self,
        doc: &ContactDocument,
        fragments: &FragmentRenderer,
    ) -> Result<Option<ContactForm>, RenderError> {
        doc.form
            .as_ref()
            .map(|spec| {
                let label = fragments.render("contact/submit_label.html", "form", spec)?;
                Ok(ContactForm::new(&self.form, spec.clone(), label))
            })
            .transpose()
    }
}

impl Section for Contact {
    type Document = ContactDocument;
    const NAME: &'static str = "contact";
    const PATH: &'static str = "data/contact.json";

    fn assignments(
        &self,
        doc: &ContactDocument,
        fragments: &FragmentRenderer,
    ) -> Result<Vec<Assignment>, RenderError> {
        let mut out = Vec::new();

        push_text(&mut out, &self.title, doc.section_title.as_ref());
        push_text(&mut out, &self.subtitle, doc.subtitle.as_ref());
        push_list(
            &mut out,
            fragments,
            &self.info,
            "contact/info.html",
            "contact_info",
            doc.contact_info.as_ref(),
        )?;

        if let Some(form) = &doc.form {
            out.push(Assignment::attribute(&self.form, "action", form.action.as_str()));
            out.push(Assignment::attribute(&self.form, "method", form.method.as_str()));
            out.push(Assignment::html(
                &self.form,
                fragments.render("contact/form.html", "form", form)?,
            ));
        }

        push_list(
            &mut out,
            fragments,
            &self.social,
            "partials/social.html",
            "links",
            doc.social_media.as_ref(),
        )?;

        Ok(out)
    }
}
