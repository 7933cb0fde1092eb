//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::submission::SubmissionOutcome;

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(author = "Yukang Chen")]
#[command(version = "0.1.0")]
#[command(about = "Render a portfolio page from JSON content documents", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new portfolio site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Load and render every section without writing anything
    Check,

    /// Fill in and submit the contact form
    Submit {
        /// Form field value, repeatable
        #[arg(short, long = "field", value_name = "NAME=VALUE", value_parser = folio_rs::commands::submit::parse_field)]
        fields: Vec<(String, String)>,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing portfolio site in {:?}", target_dir);
            folio_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized portfolio site in {:?}", target_dir);
        }

        Commands::Generate { watch } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Generating static files...");

            let report = folio.generate().await?;
            if report.is_complete() {
                println!("Generated successfully!");
            } else {
                println!(
                    "Generated with {} of {} sections missing",
                    report.failures().count(),
                    report.sections.len()
                );
            }

            if watch {
                tracing::info!("Watching for file changes...");
                folio_rs::commands::generate::watch(&folio).await?;
            }
        }

        Commands::Check => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::check::run(&folio).await?;
        }

        Commands::Submit { fields } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            let (outcome, message) = folio_rs::commands::submit::run(&folio, &fields).await?;
            if let Some(message) = message {
                println!("{}", message);
            }
            if let SubmissionOutcome::Failed(reason) = outcome {
                anyhow::bail!(reason);
            }
        }

        Commands::Clean => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            folio.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
