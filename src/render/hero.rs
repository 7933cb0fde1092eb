//! Hero banner

use tera::Context;

use super::{push_list, push_text, Section};
use crate::content::HeroDocument;
use crate::dom::Assignment;
use crate::error::RenderError;
use crate::templates::FragmentRenderer;

#[derive(Debug, Clone)]
pub struct Hero {
    pub greeting: String,
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub summary: String,
    pub highlights: String,
    pub cta: String,
    pub social: String,
    pub scroll_indicator: String,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            greeting: "hero-greeting".to_string(),
            name: "hero-name".to_string(),
            title: "hero-title".to_string(),
            tagline: "hero-tagline".to_string(),
            summary: "hero-summary".to_string(),
            highlights: "hero-highlights".to_string(),
            cta: "hero-cta".to_string(),
            social: "hero-social".to_string(),
            scroll_indicator: "scroll-indicator".to_string(),
        }
    }
}

/// Split a display name into the first word and the rest
fn split_name(name: &str) -> (&str, String) {
    let mut words = name.split(' ');
    let first = words.next().unwrap_or_default();
    (first, words.collect::<Vec<_>>().join(" "))
}

impl Section for Hero {
    type Document = HeroDocument;
    const NAME: &'static str = "hero";
    const PATH: &'static str = "data/hero.json";

    fn assignments(
        &self,
        doc: &HeroDocument,
        fragments: &FragmentRenderer,
    ) -> Result<Vec<Assignment>, RenderError> {
        let mut out = Vec::new();

        push_text(&mut out, &self.greeting, doc.greeting.as_ref());

        if let Some(name) = &doc.name {
            let (first, rest) = split_name(name);
            let mut context = Context::new();
            context.insert("first", first);
            context.insert("rest", &rest);
            out.push(Assignment::html(
                &self.name,
                fragments.render_context("hero/name.html", &context)?,
            ));
        }

        push_text(&mut out, &self.title, doc.title.as_ref());
        push_text(&mut out, &self.tagline, doc.tagline.as_ref());
        push_text(&mut out, &self.summary, doc.summary.as_ref());

        push_list(
            &mut out,
            fragments,
            &self.highlights,
            "hero/highlights.html",
            "highlights",
            doc.highlights.as_ref(),
        )?;

        let buttons = doc.cta.as_ref().and_then(|cta| cta.buttons.as_ref());
        push_list(
            &mut out,
            fragments,
            &self.cta,
            "hero/cta.html",
            "buttons",
            buttons,
        )?;

        push_list(
            &mut out,
            fragments,
            &self.social,
            "partials/social.html",
            "links",
            doc.social_links.as_ref(),
        )?;

        if let Some(indicator) = &doc.scroll_indicator {
            out.push(Assignment::html(
                &self.scroll_indicator,
                fragments.render("hero/scroll_indicator.html", "indicator", indicator)?,
            ));
        }

        Ok(out)
    }
}
