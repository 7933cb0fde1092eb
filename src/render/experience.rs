//! Experience timeline

use super::{push_list, push_text, Section};
use crate::content::ExperienceDocument;
use crate::dom::Assignment;
use crate::error::RenderError;
use crate::templates::FragmentRenderer;

#[derive(Debug, Clone)]
pub struct Experience {
    pub title: String,
    pub timeline: String,
}

impl Default for Experience {
    fn default() -> Self {
        Self {
            title: "experience-title".to_string(),
            timeline: "experience-timeline".to_string(),
        }
    }
}

impl Section for Experience {
    type Document = ExperienceDocument;
    const NAME: &'static str = "experience";
    const PATH: &'static str = "data/experience.json";

    fn assignments(
        &self,
        doc: &ExperienceDocument,
        fragments: &FragmentRenderer,
    ) -> Result<Vec<Assignment>, RenderError> {
        let mut out = Vec::new();
        push_text(&mut out, &self.title, doc.section_title.as_ref());
        push_list(
            &mut out,
            fragments,
            &self.timeline,
            "experience/timeline.html",
            "experiences",
            doc.experiences.as_ref(),
        )?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::render_into_host;

    const DOC: &str = r##"{"sectionTitle":"Work","experiences":[
        {"title":"Lead","company":"Acme","location":"Remote","period":"2021","type":"Full-time",
         "description":"d","color":"#000","icon":"i","technologies":["Rust","Kafka"]},
        {"title":"Dev","company":"Initech","period":"2017","description":"d","color":"#111","icon":"i",
         "technologies":[]}]}"##;

    #[test]
    fn test_timeline_items_in_order() {
        let dom = render_into_host(&Experience::default(), DOC);
        let timeline = dom.get_element_by_id("experience-timeline").unwrap();
        let titles: Vec<_> = dom
            .elements_by_class(timeline, "experience-title")
            .into_iter()
            .map(|t| dom.text_content(t))
            .collect();
        assert_eq!(titles, vec!["Lead", "Dev"]);
    }

    #[test]
    fn test_optional_subfragments() {
        let dom = render_into_host(&Experience::default(), DOC);
        let timeline = dom.get_element_by_id("experience-timeline").unwrap();
        let items = dom.elements_by_class(timeline, "timeline-item");
        assert_eq!(items.len(), 2);

        // First item: location, type and two tech tags
        let company = dom.query_class(items[0], "experience-company").unwrap();
        assert!(dom.text_content(company).contains("• Remote"));
        assert!(dom.query_class(items[0], "experience-type").is_some());
        assert_eq!(dom.elements_by_class(items[0], "tech-tag").len(), 2);
        assert!(dom.query_class(items[0], "experience-responsibilities").is_none());

        // Second item: no location, no type, empty tech list omitted
        let company = dom.query_class(items[1], "experience-company").unwrap();
        assert!(!dom.text_content(company).contains('•'));
        assert!(dom.query_class(items[1], "experience-type").is_none());
        assert!(dom.query_class(items[1], "experience-tech").is_none());
    }
}
