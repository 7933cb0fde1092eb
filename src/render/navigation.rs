//! Navigation bar: brand link and menu

use super::{push_list, Section};
use crate::content::NavigationDocument;
use crate::dom::Assignment;
use crate::error::RenderError;
use crate::templates::FragmentRenderer;

#[derive(Debug, Clone)]
pub struct Navigation {
    pub brand: String,
    pub menu: String,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            brand: "nav-brand".to_string(),
            menu: "nav-menu".to_string(),
        }
    }
}

impl Section for Navigation {
    type Document = NavigationDocument;
    const NAME: &'static str = "navigation";
    const PATH: &'static str = "data/navigation.json";

    fn assignments(
        &self,
        doc: &NavigationDocument,
        fragments: &FragmentRenderer,
    ) -> Result<Vec<Assignment>, RenderError> {
        let mut out = vec![
            Assignment::text(&self.brand, doc.brand.name.as_str()),
            Assignment::attribute(&self.brand, "href", doc.brand.href.as_str()),
        ];
        push_list(
            &mut out,
            fragments,
            &self.menu,
            "navigation/menu.html",
            "items",
            doc.menu_items.as_ref(),
        )?;
        Ok(out)
    }
}
