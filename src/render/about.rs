//! About section

use super::{push_list, push_text, Section};
use crate::content::AboutDocument;
use crate::dom::Assignment;
use crate::error::RenderError;
use crate::templates::FragmentRenderer;

#[derive(Debug, Clone)]
pub struct About {
    pub title: String,
    pub text: String,
    pub stats: String,
    pub actions: String,
}

impl Default for About {
    fn default() -> Self {
        Self {
            title: "about-title".to_string(),
            text: "about-text".to_string(),
            stats: "about-stats".to_string(),
            actions: "about-actions".to_string(),
        }
    }
}

impl Section for About {
    type Document = AboutDocument;
    const NAME: &'static str = "about";
    const PATH: &'static str = "data/about.json";

    fn assignments(
        &self,
        doc: &AboutDocument,
        fragments: &FragmentRenderer,
    ) -> Result<Vec<Assignment>, RenderError> {
        let mut out = Vec::new();

        push_text(&mut out, &self.title, doc.section_title.as_ref());
        push_list(
            &mut out,
            fragments,
            &self.text,
            "about/paragraphs.html",
            "paragraphs",
            doc.paragraphs.as_ref(),
        )?;
        push_list(
            &mut out,
            fragments,
            &self.stats,
            "about/stats.html",
            "statistics",
            doc.statistics.as_ref(),
        )?;

        if let Some(cv) = &doc.download_cv {
            out.push(Assignment::html(
                &self.actions,
                fragments.render("about/actions.html", "cv", cv)?,
            ));
        }

        Ok(out)
    }
}
