//! Generator module - renders every section into the host page and writes the site

use anyhow::{Context, Result};
use std::fs;
use std::sync::Arc;

use walkdir::WalkDir;

use crate::content::DocumentSource;
use crate::dom::{Applied, Dom};
use crate::error::SectionError;
use crate::render::{prepare, Prepared, Section, Sections};
use crate::render::{
    About, Contact, Education, Experience, Footer, Hero, Navigation, Projects, Site, Skills,
};
use crate::submission::ContactForm;
use crate::templates::FragmentRenderer;
use crate::Folio;

/// What happened to one section during a render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionStatus {
    Rendered(Applied),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct SectionOutcome {
    pub name: &'static str,
    pub status: SectionStatus,
}

/// Per-section results of rendering the page, in page order
#[derive(Debug, Default)]
pub struct RenderReport {
    pub sections: Vec<SectionOutcome>,
    /// Submit handler for the contact form, when the contact section rendered one
    pub contact_form: Option<ContactForm>,
}

impl RenderReport {
    pub fn status(&self, name: &str) -> Option<&SectionStatus> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| &s.status)
    }

    /// Number of sections that updated the page
    pub fn rendered(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| matches!(s.status, SectionStatus::Rendered(_)))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &SectionOutcome> {
        self.sections
            .iter()
            .filter(|s| matches!(s.status, SectionStatus::Failed(_)))
    }

    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Apply a prepared section to the page, or record why it was skipped
    fn record<D>(
        &mut self,
        name: &'static str,
        result: Result<Prepared<D>, SectionError>,
        dom: &mut Dom,
    ) -> Option<D> {
        match result {
            Ok(prepared) => {
                let applied = dom.apply(&prepared.assignments);
                tracing::debug!(
                    "Rendered {} section ({} applied, {} skipped)",
                    name,
                    applied.applied,
                    applied.skipped
                );
                self.sections.push(SectionOutcome {
                    name,
                    status: SectionStatus::Rendered(applied),
                });
                Some(prepared.document)
            }
            Err(e) => {
                tracing::error!("Error loading {} section: {}", name, e);
                self.sections.push(SectionOutcome {
                    name,
                    status: SectionStatus::Failed(e.to_string()),
                });
                None
            }
        }
    }
}

/// Renders the portfolio page from its section documents
pub struct Generator {
    folio: Folio,
    source: Arc<dyn DocumentSource>,
    fragments: FragmentRenderer,
    sections: Sections,
}

impl Generator {
    /// Create a generator reading documents from the site's configured source
    pub fn new(folio: &Folio) -> Result<Self> {
        Self::with_source(folio, folio.document_source())
    }

    pub fn with_source(folio: &Folio, source: Arc<dyn DocumentSource>) -> Result<Self> {
        let fragments = FragmentRenderer::new()?;

        Ok(Self {
            folio: folio.clone(),
            source,
            fragments,
            sections: Sections::default(),
        })
    }

    /// Use different target ids for the sections
    pub fn with_sections(mut self, sections: Sections) -> Self {
        self.sections = sections;
        self
    }

    /// Fetch every section document concurrently and write the results into `dom`
    ///
    /// A section whose document cannot be fetched, parsed or rendered leaves
    /// its containers untouched; the other sections are unaffected.
    pub async fn render(&self, dom: &mut Dom) -> RenderReport {
        let source = self.source.as_ref();
        let fragments = &self.fragments;
        let s = &self.sections;

        tracing::debug!("Loading section documents from {}", source.describe());

        let (site, navigation, hero, about, experience, skills, projects, education, contact, footer) = tokio::join!(
            prepare(&s.site, source, fragments),
            prepare(&s.navigation, source, fragments),
            prepare(&s.hero, source, fragments),
            prepare(&s.about, source, fragments),
            prepare(&s.experience, source, fragments),
            prepare(&s.skills, source, fragments),
            prepare(&s.projects, source, fragments),
            prepare(&s.education, source, fragments),
            prepare(&s.contact, source, fragments),
            prepare(&s.footer, source, fragments),
        );

        let mut report = RenderReport::default();
        if report.record(Site::NAME, site, dom).is_none() {
            dom.set_title(&self.folio.config.title);
        }
        report.record(Navigation::NAME, navigation, dom);
        report.record(Hero::NAME, hero, dom);
        report.record(About::NAME, about, dom);
        report.record(Experience::NAME, experience, dom);
        report.record(Skills::NAME, skills, dom);
        report.record(Projects::NAME, projects, dom);
        report.record(Education::NAME, education, dom);
        if let Some(doc) = report.record(Contact::NAME, contact, dom) {
            match s.contact.form_handler(&doc, fragments) {
                Ok(form) => report.contact_form = form,
                Err(e) => tracing::error!("Contact form cannot be submitted: {}", e),
            }
        }
        report.record(Footer::NAME, footer, dom);

        tracing::info!(
            "Rendered {}/{} sections",
            report.rendered(),
            report.sections.len()
        );

        report
    }

    /// Read the host page and render every section into it
    pub async fn render_page(&self) -> Result<(Dom, RenderReport)> {
        let html = fs::read_to_string(&self.folio.host_page)
            .with_context(|| format!("failed to read host page {:?}", self.folio.host_page))?;

        let mut dom = Dom::parse(&html);
        let report = self.render(&mut dom).await;
        Ok((dom, report))
    }

    /// Render the page and write the site to the public directory
    pub async fn generate(&self) -> Result<RenderReport> {
        let (dom, report) = self.render_page().await?;

        // Ensure public directory exists
        fs::create_dir_all(&self.folio.public_dir)?;

        // Copy source assets (styles, images, documents)
        self.copy_source_assets()?;

        let output_path = self.folio.public_dir.join(&self.folio.config.host_page);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, dom.to_html())?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(report)
    }

    fn copy_source_assets(&self) -> Result<()> {
        let source_dir = &self.folio.source_dir;
        if !source_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if path.is_file() {
                // Written rendered, never copied
                if path == self.folio.host_page {
                    continue;
                }

                let relative = path.strip_prefix(source_dir)?;
                if self.folio.config.skips(relative) {
                    tracing::debug!("Skipping {:?}", relative);
                    continue;
                }

                let dest = self.folio.public_dir.join(relative);

                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }

                fs::copy(path, &dest)?;
            }
        }

        Ok(())
    }
}
