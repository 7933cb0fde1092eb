//! Initialize a new portfolio site

use anyhow::Result;
use chrono::Datelike;
use std::fs;
use std::path::Path;

use crate::templates::{HOST_PAGE, STARTER_DOCUMENTS};
use crate::Folio;

const CONFIG: &str = r#"# Folio Configuration

# Site
title: Jane Doe

# Directory
source_dir: source
public_dir: public
host_page: index.html
skip_copy: []

# Content
## Fetch section documents from a remote base URL instead of source/
# data_url: https://cdn.example.com/portfolio/

# Contact
# submit_timeout_secs: 15
"#;

/// Initialize a new site in the given directory
///
/// Existing files are left alone, so running it again only fills in what is
/// missing.
pub fn init_site(target_dir: &Path) -> Result<()> {
    let source_dir = target_dir.join("source");
    fs::create_dir_all(source_dir.join("data"))?;

    write_new(&target_dir.join("_config.yml"), CONFIG)?;
    write_new(&source_dir.join("index.html"), HOST_PAGE)?;

    let year = chrono::Local::now().year().to_string();
    for (path, body) in STARTER_DOCUMENTS {
        write_new(&source_dir.join(path), &body.replace("{{ year }}", &year))?;
    }

    Ok(())
}

fn write_new(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::warn!("Skipping existing file {:?}", path);
        return Ok(());
    }
    fs::write(path, content)?;
    tracing::debug!("Created: {:?}", path);
    Ok(())
}

/// Run the init command with an existing Folio instance
pub fn run(folio: &Folio) -> Result<()> {
    init_site(&folio.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_init_site() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        let config = SiteConfig::load(dir.path().join("_config.yml")).unwrap();
        assert_eq!(config.title, "Jane Doe");
        assert!(config.data_url.is_none());

        assert!(dir.path().join("source/index.html").exists());
        for (path, _) in STARTER_DOCUMENTS {
            assert!(dir.path().join("source").join(path).exists(), "{}", path);
        }

        let footer = fs::read_to_string(dir.path().join("source/data/footer.json")).unwrap();
        let year = chrono::Local::now().year().to_string();
        assert!(footer.contains(&year));
        assert!(!footer.contains("{{ year }}"));
    }

    #[test]
    fn test_init_keeps_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("source/data")).unwrap();
        fs::write(dir.path().join("source/data/hero.json"), "{}").unwrap();

        init_site(dir.path()).unwrap();
        let hero = fs::read_to_string(dir.path().join("source/data/hero.json")).unwrap();
        assert_eq!(hero, "{}");
    }
}
