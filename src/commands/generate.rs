//! Generate static files

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode, DebounceEventResult};
use std::time::Duration;

use crate::generator::{Generator, RenderReport};
use crate::Folio;

/// Render the page and write the site
///
/// Sections that fail are logged and reported; the page is still written
/// with their containers left as they were.
pub async fn run(folio: &Folio) -> Result<RenderReport> {
    let start = std::time::Instant::now();

    let generator = Generator::new(folio)?;
    let report = generator.generate().await?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(report)
}

/// Watch the source directory and config file and regenerate on change
pub async fn watch(folio: &Folio) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    // Create debouncer to avoid multiple rapid rebuilds
    let mut debouncer = new_debouncer(
        Duration::from_millis(500),
        move |res: DebounceEventResult| {
            let _ = tx.send(res);
        },
    )?;

    // Watch source directory
    if folio.source_dir.exists() {
        debouncer
            .watcher()
            .watch(&folio.source_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", folio.source_dir);
    }

    // Watch config file
    let config_path = folio.base_dir.join("_config.yml");
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    while let Some(res) = rx.recv().await {
        match res {
            Ok(events) => {
                let relevant = events.iter().any(|e| {
                    let path_str = e.path.to_string_lossy();
                    !path_str.contains(".git")
                        && !path_str.contains(".DS_Store")
                        && !path_str.ends_with('~')
                });
                if !relevant {
                    continue;
                }

                for event in &events {
                    tracing::info!("File changed: {}", event.path.display());
                }

                // Reload so config edits take effect
                let result = match Folio::new(&folio.base_dir) {
                    Ok(current) => run(&current).await,
                    Err(e) => Err(e),
                };
                if let Err(e) = result {
                    tracing::error!("Generation failed: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Watch error: {:?}", e);
            }
        }
    }

    Ok(())
}
