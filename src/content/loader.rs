//! Fetch-and-parse of a single content document

use serde::de::DeserializeOwned;

use super::DocumentSource;
use crate::error::DocumentError;

/// Fetch the document at `path` and parse it into the section's schema
///
/// Retrieval and parse failures both become [`DocumentError::Unavailable`];
/// callers do not distinguish transient from permanent failures.
pub async fn load_document<D: DeserializeOwned>(
    source: &dyn DocumentSource,
    section: &'static str,
    path: &str,
) -> Result<D, DocumentError> {
    let unavailable = |reason: String| DocumentError::Unavailable {
        section,
        path: path.to_string(),
        reason,
    };

    let body = source
        .fetch(path)
        .await
        .map_err(|e| unavailable(format!("{:#}", e)))?;

    serde_json::from_str(&body).map_err(|e| unavailable(format!("invalid document: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FsSource, SiteDocument, SkillsDocument};

    fn source_with(path: &str, body: &str) -> (tempfile::TempDir, FsSource) {
        let dir = tempfile::tempdir().unwrap();
        let full = dir.path().join(path);
        std::fs::create_dir_all(full.parent().unwrap()).unwrap();
        std::fs::write(full, body).unwrap();
        let source = FsSource::new(dir.path());
        (dir, source)
    }

    #[tokio::test]
    async fn test_load_document() {
        let (_dir, source) = source_with(
            "data/skills.json",
            r#"{"sectionTitle":"Skills","categories":[]}"#,
        );
        let doc: SkillsDocument = load_document(&source, "skills", "data/skills.json")
            .await
            .unwrap();
        assert_eq!(doc.section_title.as_deref(), Some("Skills"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_unavailable() {
        let (_dir, source) = source_with("data/site-config.json", "{ not json");
        let err = load_document::<SiteDocument>(&source, "site", "data/site-config.json")
            .await
            .unwrap_err();
        assert_eq!(err.section(), "site");
        assert!(err.to_string().contains("invalid document"));
    }

    #[tokio::test]
    async fn test_missing_required_field_is_unavailable() {
        let (_dir, source) = source_with("data/site-config.json", r#"{"author":"Jane"}"#);
        let result = load_document::<SiteDocument>(&source, "site", "data/site-config.json").await;
        assert!(matches!(result, Err(DocumentError::Unavailable { .. })));
    }
}
