//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    /// Page title used when the site document cannot be loaded
    pub title: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,
    /// Host page, relative to `source_dir`
    pub host_page: String,
    /// Paths relative to `source_dir` that are not copied to `public_dir`
    #[serde(default)]
    pub skip_copy: Vec<String>,

    // Content
    /// Base URL documents are fetched from; local `source_dir` when unset
    pub data_url: Option<String>,

    // Contact
    pub submit_timeout_secs: Option<u64>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),
            host_page: "index.html".to_string(),
            skip_copy: Vec::new(),

            data_url: None,

            submit_timeout_secs: None,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Timeout for contact submissions, if one is configured
    pub fn submit_timeout(&self) -> Option<Duration> {
        self.submit_timeout_secs.map(Duration::from_secs)
    }

    /// Whether `relative` (a path under `source_dir`) is excluded from copying
    pub fn skips(&self, relative: &Path) -> bool {
        self.skip_copy
            .iter()
            .any(|skip| relative.starts_with(skip.trim_start_matches("./")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.source_dir, "source");
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.host_page, "index.html");
        assert!(config.data_url.is_none());
        assert!(config.submit_timeout().is_none());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Jane Doe
data_url: https://cdn.example.com/site/
submit_timeout_secs: 10
skip_copy:
  - drafts
deploy:
  type: git
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Jane Doe");
        assert_eq!(config.public_dir, "public");
        assert_eq!(
            config.data_url.as_deref(),
            Some("https://cdn.example.com/site/")
        );
        assert_eq!(config.submit_timeout(), Some(Duration::from_secs(10)));
        assert!(config.extra.contains_key("deploy"));
    }

    #[test]
    fn test_skip_copy() {
        let config = SiteConfig {
            skip_copy: vec!["drafts".to_string(), "./notes.txt".to_string()],
            ..Default::default()
        };
        assert!(config.skips(Path::new("drafts/a.json")));
        assert!(config.skips(Path::new("notes.txt")));
        assert!(!config.skips(Path::new("css/style.css")));
    }
}
