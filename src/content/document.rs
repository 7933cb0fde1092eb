//! Typed content documents, one per page section
//!
//! Field names follow the JSON documents (camelCase). Every list item field
//! defaults to an empty string so a sparse item still renders, and text
//! written as a number, boolean or `null` is read as text; only the fields a
//! section cannot do without are required.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A scalar that documents write either as a string or as a number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scalar(pub String);

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(s) => Ok(Scalar(s)),
            serde_json::Value::Number(n) => Ok(Scalar(n.to_string())),
            serde_json::Value::Bool(b) => Ok(Scalar(b.to_string())),
            serde_json::Value::Null => Ok(Scalar::default()),
            other => Err(serde::de::Error::custom(format!(
                "expected a string or number, found {}",
                other
            ))),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Text that documents may write as a number, a boolean or `null`
fn any_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Scalar::deserialize(deserializer).map(|s| s.0)
}

fn opt_any_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Option::<Scalar>::deserialize(deserializer).map(|s| s.map(|s| s.0))
}

/// A list that may be written as `null`
fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A flag read by truthiness, as the page templates test it
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

// ---------------------------------------------------------------------------
// Shared item records
// ---------------------------------------------------------------------------

/// An icon link to a social profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLink {
    #[serde(deserialize_with = "any_text")]
    pub platform: String,
    #[serde(deserialize_with = "any_text")]
    pub url: String,
    #[serde(deserialize_with = "any_text")]
    pub icon: String,
}

/// A plain `href` + `text` link
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Link {
    #[serde(deserialize_with = "any_text")]
    pub href: String,
    #[serde(deserialize_with = "any_text")]
    pub text: String,
}

// ---------------------------------------------------------------------------
// site-config.json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDocument {
    pub title: String,
    #[serde(default, deserialize_with = "opt_any_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "opt_any_text")]
    pub keywords: Option<String>,
    #[serde(default, deserialize_with = "opt_any_text")]
    pub author: Option<String>,
}

// ---------------------------------------------------------------------------
// navigation.json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationDocument {
    pub brand: Brand,
    #[serde(default)]
    pub menu_items: Option<Vec<MenuItem>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Brand {
    #[serde(deserialize_with = "any_text")]
    pub name: String,
    #[serde(deserialize_with = "any_text")]
    pub href: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(deserialize_with = "any_text")]
    pub href: String,
    #[serde(deserialize_with = "any_text")]
    pub icon: String,
    #[serde(deserialize_with = "any_text")]
    pub text: String,
}

// ---------------------------------------------------------------------------
// hero.json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroDocument {
    #[serde(deserialize_with = "opt_any_text")]
    pub greeting: Option<String>,
    #[serde(deserialize_with = "opt_any_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "opt_any_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "opt_any_text")]
    pub tagline: Option<String>,
    #[serde(deserialize_with = "opt_any_text")]
    pub summary: Option<String>,
    pub highlights: Option<Vec<Highlight>>,
    pub cta: Option<CallToAction>,
    pub social_links: Option<Vec<SocialLink>>,
    pub scroll_indicator: Option<ScrollIndicator>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Highlight {
    #[serde(deserialize_with = "any_text")]
    pub icon: String,
    #[serde(deserialize_with = "any_text")]
    pub color: String,
    #[serde(deserialize_with = "any_text")]
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallToAction {
    pub buttons: Option<Vec<Button>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Button {
    #[serde(deserialize_with = "any_text")]
    pub href: String,
    /// Button style, e.g. `primary` or `secondary`
    #[serde(rename = "type")]
    #[serde(deserialize_with = "any_text")]
    pub kind: String,
    #[serde(deserialize_with = "opt_any_text")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "any_text")]
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollIndicator {
    #[serde(deserialize_with = "any_text")]
    pub text: String,
    #[serde(deserialize_with = "any_text")]
    pub icon: String,
}

// ---------------------------------------------------------------------------
// about.json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutDocument {
    #[serde(deserialize_with = "opt_any_text")]
    pub section_title: Option<String>,
    pub paragraphs: Option<Vec<Scalar>>,
    pub statistics: Option<Vec<Statistic>>,
    #[serde(rename = "downloadCV")]
    pub download_cv: Option<DownloadLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Statistic {
    #[serde(deserialize_with = "any_text")]
    pub icon: String,
    #[serde(deserialize_with = "any_text")]
    pub color: String,
    pub value: Scalar,
    #[serde(deserialize_with = "any_text")]
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DownloadLink {
    #[serde(deserialize_with = "any_text")]
    pub href: String,
    #[serde(deserialize_with = "any_text")]
    pub icon: String,
    #[serde(deserialize_with = "any_text")]
    pub text: String,
}

// ---------------------------------------------------------------------------
// experience.json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceDocument {
    #[serde(deserialize_with = "opt_any_text")]
    pub section_title: Option<String>,
    pub experiences: Option<Vec<Experience>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    #[serde(deserialize_with = "any_text")]
    pub title: String,
    #[serde(deserialize_with = "any_text")]
    pub company: String,
    #[serde(deserialize_with = "opt_any_text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "any_text")]
    pub period: String,
    /// Employment type, e.g. `Full-time`
    #[serde(rename = "type")]
    #[serde(deserialize_with = "opt_any_text")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "any_text")]
    pub description: String,
    #[serde(deserialize_with = "any_text")]
    pub color: String,
    #[serde(deserialize_with = "any_text")]
    pub icon: String,
    pub responsibilities: Option<Vec<Scalar>>,
    pub technologies: Option<Vec<Scalar>>,
}

// ---------------------------------------------------------------------------
// skills.json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillsDocument {
    #[serde(deserialize_with = "opt_any_text")]
    pub section_title: Option<String>,
    pub categories: Option<Vec<SkillCategory>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillCategory {
    #[serde(deserialize_with = "any_text")]
    pub category: String,
    #[serde(deserialize_with = "any_text")]
    pub icon: String,
    #[serde(deserialize_with = "any_text")]
    pub color: String,
    #[serde(deserialize_with = "nullable_list")]
    pub skills: Vec<Scalar>,
}

// ---------------------------------------------------------------------------
// projects.json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectsDocument {
    #[serde(deserialize_with = "opt_any_text")]
    pub section_title: Option<String>,
    pub projects: Option<Vec<Project>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "any_text")]
    pub title: String,
    #[serde(deserialize_with = "any_text")]
    pub description: String,
    #[serde(deserialize_with = "any_text")]
    pub color: String,
    #[serde(deserialize_with = "any_text")]
    pub icon: String,
    pub technologies: Option<Vec<Scalar>>,
    pub links: Option<ProjectLinks>,
    /// Label -> value, rendered in document order
    pub stats: Option<IndexMap<String, Scalar>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectLinks {
    #[serde(deserialize_with = "opt_any_text")]
    pub github: Option<String>,
    #[serde(deserialize_with = "opt_any_text")]
    pub demo: Option<String>,
}

// ---------------------------------------------------------------------------
// education.json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationDocument {
    #[serde(deserialize_with = "opt_any_text")]
    pub section_title: Option<String>,
    pub education: Option<Vec<Education>>,
    #[serde(deserialize_with = "opt_any_text")]
    pub certifications_title: Option<String>,
    pub certifications: Option<Vec<Certification>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    #[serde(deserialize_with = "any_text")]
    pub degree: String,
    #[serde(deserialize_with = "any_text")]
    pub institution: String,
    #[serde(deserialize_with = "any_text")]
    pub period: String,
    #[serde(deserialize_with = "any_text")]
    pub description: String,
    #[serde(deserialize_with = "any_text")]
    pub color: String,
    #[serde(deserialize_with = "any_text")]
    pub icon: String,
    pub achievements: Option<Vec<Scalar>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    #[serde(deserialize_with = "any_text")]
    pub title: String,
    #[serde(deserialize_with = "any_text")]
    pub issuer: String,
    #[serde(deserialize_with = "any_text")]
    pub date: String,
    #[serde(deserialize_with = "any_text")]
    pub color: String,
    #[serde(deserialize_with = "any_text")]
    pub icon: String,
}

// ---------------------------------------------------------------------------
// contact.json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactDocument {
    #[serde(deserialize_with = "opt_any_text")]
    pub section_title: Option<String>,
    #[serde(deserialize_with = "opt_any_text")]
    pub subtitle: Option<String>,
    pub contact_info: Option<Vec<ContactInfo>>,
    pub form: Option<FormSpec>,
    pub social_media: Option<Vec<SocialLink>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfo {
    /// `email`, `phone`, `location`, ...
    #[serde(rename = "type")]
    #[serde(deserialize_with = "any_text")]
    pub kind: String,
    #[serde(deserialize_with = "any_text")]
    pub href: String,
    #[serde(deserialize_with = "any_text")]
    pub label: String,
    #[serde(deserialize_with = "any_text")]
    pub value: String,
    #[serde(deserialize_with = "any_text")]
    pub color: String,
    #[serde(deserialize_with = "any_text")]
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormSpec {
    #[serde(deserialize_with = "any_text")]
    pub action: String,
    #[serde(deserialize_with = "any_text")]
    pub method: String,
    #[serde(deserialize_with = "nullable_list")]
    pub fields: Vec<FormField>,
    #[serde(deserialize_with = "any_text")]
    pub submit_text: String,
    #[serde(deserialize_with = "any_text")]
    pub submit_icon: String,
    #[serde(deserialize_with = "any_text")]
    pub success_message: String,
    #[serde(deserialize_with = "any_text")]
    pub error_message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormField {
    #[serde(deserialize_with = "any_text")]
    pub name: String,
    /// Input type; `textarea` renders a multi-line field
    #[serde(rename = "type")]
    #[serde(deserialize_with = "any_text")]
    pub kind: String,
    #[serde(deserialize_with = "any_text")]
    pub label: String,
    #[serde(deserialize_with = "any_text")]
    pub icon: String,
    #[serde(deserialize_with = "any_text")]
    pub placeholder: String,
    #[serde(deserialize_with = "truthy")]
    pub required: bool,
    pub rows: Option<Scalar>,
}

// ---------------------------------------------------------------------------
// footer.json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterDocument {
    #[serde(deserialize_with = "opt_any_text")]
    pub tagline: Option<String>,
    pub social_links: Option<Vec<SocialLink>>,
    pub copyright: Option<Copyright>,
    pub links: Option<Vec<Link>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Copyright {
    #[serde(deserialize_with = "any_text")]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skills() {
        let json = r##"{"sectionTitle":"Skills","categories":[{"category":"Languages","icon":"x","color":"#fff","skills":["Go","Rust"]}]}"##;
        let doc: SkillsDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.section_title.as_deref(), Some("Skills"));
        let categories = doc.categories.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(
            categories[0].skills,
            vec![Scalar("Go".to_string()), Scalar("Rust".to_string())]
        );
    }

    #[test]
    fn test_site_requires_title() {
        assert!(serde_json::from_str::<SiteDocument>(r#"{"description":"x"}"#).is_err());
        let doc: SiteDocument = serde_json::from_str(r#"{"title":"Jane"}"#).unwrap();
        assert!(doc.author.is_none());
    }

    #[test]
    fn test_scalar_accepts_numbers() {
        let doc: AboutDocument = serde_json::from_str(
            r#"{"statistics":[{"value":12,"label":"Years"},{"value":"50+","label":"Projects"}]}"#,
        )
        .unwrap();
        let stats = doc.statistics.unwrap();
        assert_eq!(stats[0].value.0, "12");
        assert_eq!(stats[1].value.0, "50+");
    }

    #[test]
    fn test_project_stats_keep_order() {
        let doc: ProjectsDocument = serde_json::from_str(
            r#"{"projects":[{"title":"p","stats":{"stars":120,"forks":8,"users":"1k"}}]}"#,
        )
        .unwrap();
        let stats = doc.projects.unwrap()[0].stats.clone().unwrap();
        let keys: Vec<_> = stats.keys().cloned().collect();
        assert_eq!(keys, vec!["stars", "forks", "users"]);
    }

    #[test]
    fn test_type_fields_are_renamed() {
        let doc: ContactDocument = serde_json::from_str(
            r#"{"contactInfo":[{"type":"location","label":"Where"}],
               "form":{"fields":[{"name":"message","type":"textarea","required":true}]}}"#,
        )
        .unwrap();
        assert_eq!(doc.contact_info.unwrap()[0].kind, "location");
        let field = &doc.form.unwrap().fields[0];
        assert_eq!(field.kind, "textarea");
        assert!(field.required);
        assert_eq!(field.rows, None);
    }

    #[test]
    fn test_download_cv_name() {
        let doc: AboutDocument =
            serde_json::from_str(r#"{"downloadCV":{"href":"/cv.pdf","any_text":"CV"}}"#).unwrap();
        assert_eq!(doc.download_cv.unwrap().href, "/cv.pdf");
    }

    #[test]
    fn test_item_text_accepts_null_and_numbers() {
        let doc: ProjectsDocument = serde_json::from_str(
            r#"{"projects":[{"title":"a","description":null},{"title":2024,"icon":true}]}"#,
        )
        .unwrap();
        let projects = doc.projects.unwrap();
        assert_eq!(projects[0].description, "");
        assert_eq!(projects[1].title, "2024");
        assert_eq!(projects[1].icon, "true");
    }

    #[test]
    fn test_string_lists_accept_scalars() {
        let doc: SkillsDocument =
            serde_json::from_str(r#"{"categories":[{"category":"Go","skills":["Go",3,null]}]}"#)
                .unwrap();
        let skills: Vec<String> = doc.categories.unwrap()[0]
            .skills
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(skills, vec!["Go", "3", ""]);

        let doc: ExperienceDocument = serde_json::from_str(
            r#"{"experiences":[{"title":"t","location":null,"responsibilities":[1],"technologies":[true]}]}"#,
        )
        .unwrap();
        let experience = &doc.experiences.unwrap()[0];
        assert!(experience.location.is_none());
        assert_eq!(experience.responsibilities.as_ref().unwrap()[0].0, "1");

        let doc: AboutDocument = serde_json::from_str(r#"{"paragraphs":["one",2]}"#).unwrap();
        assert_eq!(doc.paragraphs.unwrap()[1].0, "2");

        let doc: EducationDocument =
            serde_json::from_str(r#"{"education":[{"degree":"BSc","achievements":[null]}]}"#)
                .unwrap();
        assert_eq!(doc.education.unwrap()[0].achievements.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_null_lists_and_flags() {
        let doc: SkillsDocument =
            serde_json::from_str(r#"{"categories":[{"category":"Go","skills":null}]}"#).unwrap();
        assert!(doc.categories.unwrap()[0].skills.is_empty());

        let doc: ContactDocument = serde_json::from_str(
            r#"{"contactInfo":[{"type":null,"value":5551234}],
               "form":{"fields":[{"name":"a","required":null,"rows":"8"},{"name":"b","required":1}]}}"#,
        )
        .unwrap();
        assert_eq!(doc.contact_info.unwrap()[0].value, "5551234");
        let form = doc.form.unwrap();
        assert!(!form.fields[0].required);
        assert_eq!(form.fields[0].rows, Some(Scalar("8".to_string())));
        assert!(form.fields[1].required);

        let doc: ContactDocument = serde_json::from_str(r#"{"form":{"fields":null}}"#).unwrap();
        assert!(doc.form.unwrap().fields.is_empty());
    }
}
