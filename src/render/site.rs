//! Site configuration: document title and meta tags

use super::Section;
use crate::content::SiteDocument;
use crate::dom::Assignment;
use crate::error::RenderError;
use crate::templates::FragmentRenderer;

/// The only section that writes document metadata instead of containers
#[derive(Debug, Clone, Default)]
pub struct Site;

impl Section for Site {
    type Document = SiteDocument;
    const NAME: &'static str = "site";
    const PATH: &'static str = "data/site-config.json";

    fn assignments(
        &self,
        doc: &SiteDocument,
        _fragments: &FragmentRenderer,
    ) -> Result<Vec<Assignment>, RenderError> {
        let mut out = vec![Assignment::Title(doc.title.clone())];

        let metas = [
            ("description", &doc.description),
            ("keywords", &doc.keywords),
            ("author", &doc.author),
        ];
        for (name, value) in metas {
            if let Some(value) = value {
                out.push(Assignment::meta(name, value.as_str()));
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::render_into_host;

    #[test]
    fn test_site_meta() {
        let dom = render_into_host(
            &Site,
            r#"{"title":"Jane Doe | Portfolio","description":"Hi","author":"Jane Doe"}"#,
        );
        assert_eq!(dom.title().as_deref(), Some("Jane Doe | Portfolio"));
        let author = dom.meta("author").unwrap();
        assert_eq!(dom.attribute(author, "content"), Some("Jane Doe"));
        // Absent keywords leave the placeholder alone
        let keywords = dom.meta("keywords").unwrap();
        assert_eq!(dom.attribute(keywords, "content"), Some(""));
    }
}
