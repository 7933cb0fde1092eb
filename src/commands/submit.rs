//! Submit the contact form from the command line

use anyhow::{anyhow, Result};

use crate::generator::Generator;
use crate::submission::{HttpSubmitter, SubmissionOutcome};
use crate::Folio;

/// Parse a `name=value` form field argument
pub fn parse_field(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected name=value, got {:?}", arg))
}

/// Render the page, fill in the contact form and submit it
///
/// Returns the outcome together with the message the page displays.
pub async fn run(
    folio: &Folio,
    fields: &[(String, String)],
) -> Result<(SubmissionOutcome, Option<String>)> {
    let generator = Generator::new(folio)?;
    let (mut dom, report) = generator.render_page().await?;

    let form = report
        .contact_form
        .ok_or_else(|| anyhow!("the contact section did not render a form"))?;

    for (name, value) in fields {
        if !form.fill(&mut dom, name, value)? {
            tracing::warn!("The contact form has no field named {:?}", name);
        }
    }

    let submitter = match folio.config.submit_timeout() {
        Some(timeout) => HttpSubmitter::with_timeout(timeout)?,
        None => HttpSubmitter::new(),
    };

    let outcome = form.submit(&mut dom, &submitter).await?;
    Ok((outcome, form.message(&dom)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("email=a@b.c"),
            Ok(("email".to_string(), "a@b.c".to_string()))
        );
        assert_eq!(
            parse_field("message=x=y"),
            Ok(("message".to_string(), "x=y".to_string()))
        );
        assert_eq!(parse_field("name="), Ok(("name".to_string(), String::new())));
        assert!(parse_field("novalue").is_err());
        assert!(parse_field("=value").is_err());
    }
}
