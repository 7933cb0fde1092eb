//! folio-rs: a data-driven portfolio page renderer
//!
//! A host page declares empty containers by id; ten JSON content documents
//! describe what goes in them. Documents are fetched concurrently, rendered
//! into HTML fragments with Tera, and written into the page as static HTML.

pub mod commands;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod render;
pub mod submission;
pub mod templates;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use content::{DocumentSource, FsSource, HttpSource};

/// The main Folio application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source directory
    pub source_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
    /// Host page inside the source directory
    pub host_page: std::path::PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let host_page = source_dir.join(&config.host_page);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            public_dir,
            host_page,
        })
    }

    /// Where section documents are read from
    ///
    /// Over HTTP when `data_url` is configured, otherwise from the source
    /// directory.
    pub fn document_source(&self) -> Arc<dyn DocumentSource> {
        match &self.config.data_url {
            Some(url) => Arc::new(HttpSource::new(url.clone())),
            None => Arc::new(FsSource::new(&self.source_dir)),
        }
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Generate the static site
    pub async fn generate(&self) -> Result<generator::RenderReport> {
        commands::generate::run(self).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
