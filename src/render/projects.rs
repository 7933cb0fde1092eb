//! Projects grid

use super::{push_list, push_text, Section};
use crate::content::ProjectsDocument;
use crate::dom::Assignment;
use crate::error::RenderError;
use crate::templates::FragmentRenderer;

#[derive(Debug, Clone)]
pub struct Projects {
    pub title: String,
    pub grid: String,
}

impl Default for Projects {
    fn default() -> Self {
        Self {
            title: "projects-title".to_string(),
            grid: "projects-grid".to_string(),
        }
    }
}

impl Section for Projects {
    type Document = ProjectsDocument;
    const NAME: &'static str = "projects";
    const PATH: &'static str = "data/projects.json";

    fn assignments(
        &self,
        doc: &ProjectsDocument,
        fragments: &FragmentRenderer,
    ) -> Result<Vec<Assignment>, RenderError> {
        let mut out = Vec::new();
        push_text(&mut out, &self.title, doc.section_title.as_ref());
        push_list(
            &mut out,
            fragments,
            &self.grid,
            "projects/grid.html",
            "projects",
            doc.projects.as_ref(),
        )?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::render_into_host;

    #[test]
    fn test_links_and_stats() {
        let dom = render_into_host(
            &Projects::default(),
            r#"{"projects":[
                {"title":"kv","description":"store","color":"c","icon":"i",
                 "links":{"github":"https://github.com/x/kv"},
                 "stats":{"Stars":320,"Forks":21}},
                {"title":"plain","description":"d","color":"c","icon":"i"}]}"#,
        );
        let grid = dom.get_element_by_id("projects-grid").unwrap();
        let cards = dom.elements_by_class(grid, "project-card");
        assert_eq!(cards.len(), 2);

        let links = dom.elements_by_class(cards[0], "project-link");
        assert_eq!(links.len(), 1);
        assert_eq!(dom.attribute(links[0], "href"), Some("https://github.com/x/kv"));

        let labels: Vec<_> = dom
            .elements_by_class(cards[0], "project-stat-label")
            .into_iter()
            .map(|l| dom.text_content(l))
            .collect();
        assert_eq!(labels, vec!["Stars", "Forks"]);
        let values: Vec<_> = dom
            .elements_by_class(cards[0], "project-stat-value")
            .into_iter()
            .map(|l| dom.text_content(l))
            .collect();
        assert_eq!(values, vec!["320", "21"]);

        assert!(dom.query_class(cards[1], "project-links").is_none());
        assert!(dom.query_class(cards[1], "project-stats").is_none());
        assert!(dom.query_class(cards[1], "project-tech").is_none());
    }
}
