//! Section renderers
//!
//! Each section owns the ids of the containers it fills (injected, with the
//! host page's ids as defaults) and turns its typed document into a list of
//! [`Assignment`]s. Building the assignments is pure; nothing touches the
//! page until the whole list is ready, so a section either updates all of
//! its containers or none of them.

mod about;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod navigation;
mod projects;
mod site;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use education::Education;
pub use experience::Experience;
pub use footer::Footer;
pub use hero::Hero;
pub use navigation::Navigation;
pub use projects::Projects;
pub use site::Site;
pub use skills::Skills;

use serde::de::DeserializeOwned;

use crate::content::{load_document, DocumentSource};
use crate::dom::Assignment;
use crate::error::{RenderError, SectionError};
use crate::templates::FragmentRenderer;

/// A page section backed by one content document
pub trait Section: Send + Sync {
    type Document: DeserializeOwned + Send;

    /// Section name used in logs and reports
    const NAME: &'static str;

    /// Document path relative to the data root
    const PATH: &'static str;

    /// Derive the page assignments for a document, in field order
    fn assignments(
        &self,
        doc: &Self::Document,
        fragments: &FragmentRenderer,
    ) -> Result<Vec<Assignment>, RenderError>;
}

/// A fetched document together with the assignments derived from it
#[derive(Debug)]
pub struct Prepared<D> {
    pub document: D,
    pub assignments: Vec<Assignment>,
}

/// Fetch, parse and render one section without touching the page
pub async fn prepare<S: Section>(
    section: &S,
    source: &dyn DocumentSource,
    fragments: &FragmentRenderer,
) -> Result<Prepared<S::Document>, SectionError> {
    let document: S::Document = load_document(source, S::NAME, S::PATH).await?;
    let assignments = section.assignments(&document, fragments)?;
    tracing::debug!(
        "Prepared {} section: {} assignments",
        S::NAME,
        assignments.len()
    );
    Ok(Prepared {
        document,
        assignments,
    })
}

/// Push a text assignment when the optional value is present
pub(crate) fn push_text(out: &mut Vec<Assignment>, id: &str, value: Option<&String>) {
    if let Some(value) = value {
        out.push(Assignment::text(id, value.as_str()));
    }
}

/// Push an HTML assignment rendered from a list when the list is present
pub(crate) fn push_list<T: serde::Serialize>(
    out: &mut Vec<Assignment>,
    fragments: &FragmentRenderer,
    id: &str,
    template: &str,
    key: &str,
    items: Option<&Vec<T>>,
) -> Result<(), RenderError> {
    if let Some(items) = items {
        out.push(Assignment::html(id, fragments.render(template, key, items)?));
    }
    Ok(())
}

/// All ten sections with their target ids
#[derive(Debug, Clone, Default)]
pub struct Sections {
    pub site: Site,
    pub navigation: Navigation,
    pub hero: Hero,
    pub about: About,
    pub experience: Experience,
    pub skills: Skills,
    pub projects: Projects,
    pub education: Education,
    pub contact: Contact,
    pub footer: Footer,
}

/// Name and document path of every section, in page order
pub const SECTION_PATHS: &[(&str, &str)] = &[
    (Site::NAME, Site::PATH),
    (Navigation::NAME, Navigation::PATH),
    (Hero::NAME, Hero::PATH),
    (About::NAME, About::PATH),
    (Experience::NAME, Experience::PATH),
    (Skills::NAME, Skills::PATH),
    (Projects::NAME, Projects::PATH),
    (Education::NAME, Education::PATH),
    (Contact::NAME, Contact::PATH),
    (Footer::NAME, Footer::PATH),
];

#[cfg(test)]
pub(crate) mod test_support {
    use crate::dom::Dom;
    use crate::templates::{FragmentRenderer, HOST_PAGE};

    use super::Section;

    /// Render `json` with `section` into a fresh host page
    pub fn render_into_host<S: Section>(section: &S, json: &str) -> Dom {
        let mut dom = Dom::parse(HOST_PAGE);
        render_into(section, json, &mut dom);
        dom
    }

    pub fn render_into<S: Section>(section: &S, json: &str, dom: &mut Dom) {
        let fragments = FragmentRenderer::new().unwrap();
        let doc: S::Document = serde_json::from_str(json).unwrap();
        let assignments = section.assignments(&doc, &fragments).unwrap();
        dom.apply(&assignments);
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::render_into_host;
    use super::*;
    use crate::dom::Dom;
    use crate::templates::HOST_PAGE;

    /// Every section target in the host page, in page order
    const TARGETS: &[&str] = &[
        "nav-brand",
        "nav-menu",
        "hero-greeting",
        "hero-name",
        "hero-title",
        "hero-tagline",
        "hero-summary",
        "hero-highlights",
        "hero-cta",
        "hero-social",
        "scroll-indicator",
        "about-title",
        "about-text",
        "about-stats",
        "about-actions",
        "experience-title",
        "experience-timeline",
        "skills-title",
        "skills-grid",
        "projects-title",
        "projects-grid",
        "education-title",
        "education-grid",
        "certifications-title",
        "certifications-grid",
        "contact-title",
        "contact-subtitle",
        "contact-info",
        "contact-form",
        "contact-social",
        "footer-tagline",
        "footer-social",
        "footer-links",
        "footer-copyright",
    ];

    /// Targets whose element differs from the untouched host page
    fn changed<S: Section>(section: &S, json: &str) -> Vec<&'static str> {
        let host = Dom::parse(HOST_PAGE);
        let dom = render_into_host(section, json);
        TARGETS
            .iter()
            .copied()
            .filter(|id| {
                let before = host.get_element_by_id(id).map(|el| host.outer_html(el));
                let after = dom.get_element_by_id(id).map(|el| dom.outer_html(el));
                before != after
            })
            .collect()
    }

    #[test]
    fn test_empty_documents_leave_placeholders() {
        let cases = vec![
            ("hero", changed(&Hero::default(), "{}")),
            ("about", changed(&About::default(), "{}")),
            ("experience", changed(&Experience::default(), "{}")),
            ("skills", changed(&Skills::default(), "{}")),
            ("projects", changed(&Projects::default(), "{}")),
            ("education", changed(&Education::default(), "{}")),
            ("contact", changed(&Contact::default(), "{}")),
            ("footer", changed(&Footer::default(), "{}")),
        ];
        for (name, changed) in cases {
            assert!(changed.is_empty(), "{} changed {:?}", name, changed);
        }
    }

    #[test]
    fn test_sparse_items_only_touch_their_container() {
        let cases = vec![
            (
                changed(&Hero::default(), r#"{"highlights":[{}],"cta":{}}"#),
                vec!["hero-highlights"],
            ),
            (
                changed(&About::default(), r#"{"statistics":[{}]}"#),
                vec!["about-stats"],
            ),
            (
                changed(&Experience::default(), r#"{"experiences":[{}]}"#),
                vec!["experience-timeline"],
            ),
            (
                changed(&Skills::default(), r#"{"categories":[{}]}"#),
                vec!["skills-grid"],
            ),
            (
                changed(&Projects::default(), r#"{"projects":[{}]}"#),
                vec!["projects-grid"],
            ),
            (
                changed(
                    &Education::default(),
                    r#"{"education":[{}],"certifications":[{}]}"#,
                ),
                vec!["education-grid", "certifications-grid"],
            ),
            (
                changed(&Contact::default(), r#"{"contactInfo":[{}],"form":{}}"#),
                vec!["contact-info", "contact-form"],
            ),
            (
                changed(&Footer::default(), r#"{"links":[{}]}"#),
                vec!["footer-links"],
            ),
        ];
        for (changed, expected) in cases {
            assert_eq!(changed, expected);
        }
    }
}
