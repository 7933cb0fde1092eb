//! Skills grid

use super::{push_list, push_text, Section};
use crate::content::SkillsDocument;
use crate::dom::Assignment;
use crate::error::RenderError;
use crate::templates::FragmentRenderer;

#[derive(Debug, Clone)]
pub struct Skills {
    pub title: String,
    pub grid: String,
}

impl Default for Skills {
    fn default() -> Self {
        Self {
            title: "skills-title".to_string(),
            grid: "skills-grid".to_string(),
        }
    }
}

impl Section for Skills {
    type Document = SkillsDocument;
    const NAME: &'static str = "skills";
    const PATH: &'static str = "data/skills.json";

    fn assignments(
        &self,
        doc: &SkillsDocument,
        fragments: &FragmentRenderer,
    ) -> Result<Vec<Assignment>, RenderError> {
        let mut out = Vec::new();
        push_text(&mut out, &self.title, doc.section_title.as_ref());
        push_list(
            &mut out,
            fragments,
            &self.grid,
            "skills/grid.html",
            "categories",
            doc.categories.as_ref(),
        )?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Dom;
    use crate::render::test_support::{render_into, render_into_host};

    const DOC: &str = r##"{"sectionTitle":"Skills","categories":[{"category":"Languages","icon":"x","color":"#fff","skills":["Go","Rust"]}]}"##;

    #[test]
    fn test_one_category_two_tags() {
        let dom = render_into_host(&Skills::default(), DOC);
        let title = dom.get_element_by_id("skills-title").unwrap();
        assert_eq!(dom.text_content(title), "Skills");

        let grid = dom.get_element_by_id("skills-grid").unwrap();
        let categories = dom.elements_by_class(grid, "skill-category");
        assert_eq!(categories.len(), 1);

        let tags: Vec<_> = dom
            .elements_by_class(categories[0], "skill-tag")
            .into_iter()
            .map(|t| dom.text_content(t))
            .collect();
        assert_eq!(tags, vec!["Go", "Rust"]);
    }

    #[test]
    fn test_render_twice_is_identical() {
        let once = render_into_host(&Skills::default(), DOC);
        let mut twice = once.clone();
        render_into(&Skills::default(), DOC, &mut twice);
        assert_eq!(once.to_html(), twice.to_html());
    }

    #[test]
    fn test_missing_containers_do_not_fail() {
        let mut dom = Dom::parse("<main><p>no skills here</p></main>");
        render_into(&Skills::default(), DOC, &mut dom);
        assert_eq!(dom.to_html(), "<main><p>no skills here</p></main>");
    }

    #[test]
    fn test_injected_targets() {
        let skills = Skills {
            title: "t".to_string(),
            grid: "g".to_string(),
        };
        let mut dom = Dom::parse(r#"<h2 id="t"></h2><div id="g"></div>"#);
        render_into(&skills, DOC, &mut dom);
        let grid = dom.get_element_by_id("g").unwrap();
        assert_eq!(dom.elements_by_class(grid, "skill-tag").len(), 2);
    }

    #[test]
    fn test_non_string_skills_still_render() {
        let dom = render_into_host(
            &Skills::default(),
            r#"{"categories":[{"category":null,"skills":["Go",3]}]}"#,
        );
        let grid = dom.get_element_by_id("skills-grid").unwrap();
        let tags: Vec<_> = dom
            .elements_by_class(grid, "skill-tag")
            .into_iter()
            .map(|t| dom.text_content(t))
            .collect();
        assert_eq!(tags, vec!["Go", "3"]);
    }
}
