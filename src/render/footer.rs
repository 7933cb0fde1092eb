//! Footer

use super::{push_list, push_text, Section};
use crate::content::FooterDocument;
use crate::dom::Assignment;
use crate::error::RenderError;
use crate::templates::FragmentRenderer;

#[derive(Debug, Clone)]
pub struct Footer {
    pub tagline: String,
    pub social: String,
    pub copyright: String,
    pub links: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            tagline: "footer-tagline".to_string(),
            social: "footer-social".to_string(),
            copyright: "footer-copyright".to_string(),
            links: "footer-links".to_string(),
        }
    }
}

impl Section for Footer {
    type Document = FooterDocument;
    const NAME: &'static str = "footer";
    const PATH: &'static str = "data/footer.json";

    fn assignments(
        &self,
        doc: &FooterDocument,
        fragments: &FragmentRenderer,
    ) -> Result<Vec<Assignment>, RenderError> {
        let mut out = Vec::new();

        push_text(&mut out, &self.tagline, doc.tagline.as_ref());
        push_list(
            &mut out,
            fragments,
            &self.social,
            "partials/social.html",
            "links",
            doc.social_links.as_ref(),
        )?;
        if let Some(copyright) = &doc.copyright {
            out.push(Assignment::text(&self.copyright, copyright.text.as_str()));
        }
        push_list(
            &mut out,
            fragments,
            &self.links,
            "footer/links.html",
            "links",
            doc.links.as_ref(),
        )?;

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::render_into_host;

    #[test]
    fn test_footer() {
        let dom = render_into_host(
            &Footer::default(),
            r##"{"tagline":"Bye","copyright":{"text":"© 2026 Jane"},
                "socialLinks":[{"platform":"GitHub","url":"https://github.com/j","icon":"fab fa-github"}],
                "links":[{"href":"#home","text":"Home"},{"href":"#contact","text":"Contact"}]}"##,
        );
        let copyright = dom.get_element_by_id("footer-copyright").unwrap();
        assert_eq!(dom.text_content(copyright), "© 2026 Jane");

        let social = dom.get_element_by_id("footer-social").unwrap();
        let link = dom.elements_by_class(social, "social-link")[0];
        assert_eq!(dom.attribute(link, "aria-label"), Some("GitHub"));
        assert_eq!(dom.attribute(link, "target"), Some("_blank"));

        let links = dom.get_element_by_id("footer-links").unwrap();
        let texts: Vec<_> = dom
            .elements_by_tag(links, "a")
            .into_iter()
            .map(|a| dom.text_content(a))
            .collect();
        assert_eq!(texts, vec!["Home", "Contact"]);
    }
}
