//! Education and certifications

use super::{push_list, push_text, Section};
use crate::content::EducationDocument;
use crate::dom::Assignment;
use crate::error::RenderError;
use crate::templates::FragmentRenderer;

#[derive(Debug, Clone)]
pub struct Education {
    pub title: String,
    pub grid: String,
    pub certifications_title: String,
    pub certifications_grid: String,
}

impl Default for Education {
    fn default() -> Self {
        Self {
            title: "education-title".to_string(),
            grid: "education-grid".to_string(),
            certifications_title: "certifications-title".to_string(),
            certifications_grid: "certifications-grid".to_string(),
        }
    }
}

impl Section for Education {
    type Document = EducationDocument;
    const NAME: &'static str = "education";
    const PATH: &'static str = "data/education.json";

    fn assignments(
        &self,
        doc: &EducationDocument,
        fragments: &FragmentRenderer,
    ) -> Result<Vec<Assignment>, RenderError> {
        let mut out = Vec::new();

        push_text(&mut out, &self.title, doc.section_title.as_ref());
        push_list(
            &mut out,
            fragments,
            &self.grid,
            "education/grid.html",
            "education",
            doc.education.as_ref(),
        )?;

        push_text(
            &mut out,
            &self.certifications_title,
            doc.certifications_title.as_ref(),
        );
        push_list(
            &mut out,
            fragments,
            &self.certifications_grid,
            "education/certifications.html",
            "certifications",
            doc.certifications.as_ref(),
        )?;

        Ok(out)
    }
}
