//! Check that every section document loads and renders

use anyhow::{bail, Result};

use crate::generator::{Generator, SectionStatus};
use crate::render::SECTION_PATHS;
use crate::Folio;

/// Render the page in memory and print the status of each section
///
/// Nothing is written. Fails when any section could not be rendered.
pub async fn run(folio: &Folio) -> Result<()> {
    let generator = Generator::new(folio)?;
    let (_, report) = generator.render_page().await?;

    println!("{:<12} {:<26} STATUS", "SECTION", "DOCUMENT");
    for outcome in &report.sections {
        let path = SECTION_PATHS
            .iter()
            .find(|(name, _)| *name == outcome.name)
            .map(|(_, path)| *path)
            .unwrap_or_default();

        let status = match &outcome.status {
            SectionStatus::Rendered(applied) if applied.skipped > 0 => format!(
                "ok ({} applied, {} targets missing from page)",
                applied.applied, applied.skipped
            ),
            SectionStatus::Rendered(applied) => format!("ok ({} applied)", applied.applied),
            SectionStatus::Failed(reason) => format!("FAILED: {}", reason),
        };
        println!("{:<12} {:<26} {}", outcome.name, path, status);
    }

    let failed = report.failures().count();
    if failed > 0 {
        bail!("{} of {} sections failed", failed, report.sections.len());
    }

    Ok(())
}
