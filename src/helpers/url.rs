//! URL helper functions

/// Join a relative document path onto a base URL
///
/// # Examples
/// ```ignore
/// join_url("https://example.com/site/", "data/hero.json") // -> "https://example.com/site/data/hero.json"
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches("./").trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://example.com/site/", "data/hero.json"),
            "https://example.com/site/data/hero.json"
        );
        assert_eq!(
            join_url("http://localhost:8080", "./data/skills.json"),
            "http://localhost:8080/data/skills.json"
        );
        assert_eq!(
            join_url("http://localhost", "https://cdn.example.com/x.json"),
            "https://cdn.example.com/x.json"
        );
    }
}
