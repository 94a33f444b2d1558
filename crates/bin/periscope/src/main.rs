//! # periscope — console dashboard for a remote assistant node
//!
//! Composition root that wires the adapters together and runs one
//! dashboard action per invocation.
//!
//! ## Responsibilities
//! - Parse CLI arguments and configuration (TOML file, env vars)
//! - Initialise tracing on stderr, so stdout stays a clean output region
//! - Construct the reqwest backend and the console output regions
//! - Dispatch the requested dashboard action and set the exit code
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use periscope_adapter_backend_reqwest::ReqwestBackend;
use periscope_adapter_console::{ConsolePanel, ImageFileRegion};
use periscope_app::services::dashboard::Dashboard;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "periscope",
    version,
    about = "Console dashboard for a remote assistant node"
)]
struct Cli {
    /// Path to the configuration file (defaults to `periscope.toml`).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides configuration).
    #[arg(long)]
    backend: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check that the backend API is reachable
    Test,
    /// Run visual detection on an image file
    Detect {
        /// Image to analyse (jpeg or png)
        image: Option<PathBuf>,

        /// Where to write the processed image (overrides configuration)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fetch and render the device status report
    Status,
    /// Run an OSINT lookup for a target domain
    Osint {
        /// Domain, IP, or email to look up
        target: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(backend) = cli.backend {
        config.backend.base_url = backend;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.logging.filter)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(backend = %config.backend.base_url, "configuration loaded");

    let dashboard = Dashboard::new(ReqwestBackend::new(config.backend.base_url));
    let mut panel = ConsolePanel;

    let outcome = match cli.command {
        Command::Test => dashboard.connectivity_test(&mut panel).await,
        Command::Detect { image, output } => {
            let mut image_region =
                ImageFileRegion::new(output.unwrap_or(config.detection.output));
            dashboard
                .visual_detection(&mut panel, &mut image_region, image.as_deref())
                .await
        }
        Command::Status => dashboard.device_status(&mut panel).await,
        Command::Osint { target } => {
            dashboard
                .osint_lookup(&mut panel, target.as_deref().unwrap_or_default())
                .await
        }
    };

    // The handler has already rendered any failure; only the exit code
    // remains to be set.
    if outcome.is_err() {
        std::process::exit(1);
    }
    Ok(())
}
