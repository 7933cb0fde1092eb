//! Built-in fragment templates using Tera template engine
//!
//! Every repeated or structured fragment a section renders is an embedded
//! template, so the binary needs no theme directory. The starter site
//! written by `init` is embedded here too.

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::RenderError;

/// Renders HTML fragments for section containers
pub struct FragmentRenderer {
    tera: Tera,
}

impl FragmentRenderer {
    /// Create a new renderer with all fragment templates loaded
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();

        // Values are interpolated verbatim, the same as assigning innerHTML
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            (
                "partials/social.html",
                include_str!("fragments/partials/social.html"),
            ),
            (
                "navigation/menu.html",
                include_str!("fragments/navigation/menu.html"),
            ),
            ("hero/name.html", include_str!("fragments/hero/name.html")),
            (
                "hero/highlights.html",
                include_str!("fragments/hero/highlights.html"),
            ),
            ("hero/cta.html", include_str!("fragments/hero/cta.html")),
            (
                "hero/scroll_indicator.html",
                include_str!("fragments/hero/scroll_indicator.html"),
            ),
            (
                "about/paragraphs.html",
                include_str!("fragments/about/paragraphs.html"),
            ),
            ("about/stats.html", include_str!("fragments/about/stats.html")),
            (
                "about/actions.html",
                include_str!("fragments/about/actions.html"),
            ),
            (
                "experience/timeline.html",
                include_str!("fragments/experience/timeline.html"),
            ),
            ("skills/grid.html", include_str!("fragments/skills/grid.html")),
            (
                "projects/grid.html",
                include_str!("fragments/projects/grid.html"),
            ),
            (
                "education/grid.html",
                include_str!("fragments/education/grid.html"),
            ),
            (
                "education/certifications.html",
                include_str!("fragments/education/certifications.html"),
            ),
            ("contact/info.html", include_str!("fragments/contact/info.html")),
            ("contact/form.html", include_str!("fragments/contact/form.html")),
            (
                "contact/submit_label.html",
                include_str!("fragments/contact/submit_label.html"),
            ),
            ("footer/links.html", include_str!("fragments/footer/links.html")),
        ])
        .map_err(|source| RenderError::Template {
            template: "<builtin>".to_string(),
            source,
        })?;

        Ok(Self { tera })
    }

    /// Render a template with a context built by the caller
    pub fn render_context(&self, template: &str, context: &Context) -> Result<String, RenderError> {
        self.tera
            .render(template, context)
            .map(|html| html.trim().to_string())
            .map_err(|source| RenderError::Template {
                template: template.to_string(),
                source,
            })
    }

    /// Render a template whose context is a single named value
    pub fn render<T: Serialize + ?Sized>(
        &self,
        template: &str,
        key: &str,
        value: &T,
    ) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert(key, value);
        self.render_context(template, &context)
    }
}

/// Host page written by `init`
pub const HOST_PAGE: &str = include_str!("site/index.html");

/// Starter content documents written by `init`, as (relative path, body)
pub const STARTER_DOCUMENTS: &[(&str, &str)] = &[
    ("data/site-config.json", include_str!("site/data/site-config.json")),
    ("data/navigation.json", include_str!("site/data/navigation.json")),
    ("data/hero.json", include_str!("site/data/hero.json")),
    ("data/about.json", include_str!("site/data/about.json")),
    ("data/experience.json", include_str!("site/data/experience.json")),
    ("data/skills.json", include_str!("site/data/skills.json")),
    ("data/projects.json", include_str!("site/data/projects.json")),
    ("data/education.json", include_str!("site/data/education.json")),
    ("data/contact.json", include_str!("site/data/contact.json")),
    ("data/footer.json", include_str!("site/data/footer.json")),
];
