//! adforge - Generate a marketing campaign from a website or a pitch deck
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;
use std::sync::Arc;

use adforge_app::config::{self, StartupOptions};
use adforge_app::{AppState, Route};
use adforge_client::GenerationClient;
use adforge_core::prelude::*;
use clap::{Parser, ValueEnum};

/// adforge - Generate a marketing campaign from a website or a pitch deck
#[derive(Parser, Debug)]
#[command(name = "adforge", version)]
#[command(about = "Generate marketing assets from a website URL and/or a .pptx deck", long_about = None)]
struct Args {
    /// Path to a config file (default: <config dir>/adforge/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Backend origin, e.g. http://localhost:5000 (overrides the config file)
    #[arg(long, value_name = "ORIGIN")]
    backend: Option<String>,

    /// Pre-fill the website URL field
    #[arg(long)]
    url: Option<String>,

    /// Pre-fill the presentation field
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Screen to open first
    #[arg(long, value_enum, default_value_t = StartRoute::Submission)]
    route: StartRoute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StartRoute {
    Submission,
    Results,
}

impl From<StartRoute> for Route {
    fn from(route: StartRoute) -> Self {
        match route {
            StartRoute::Submission => Route::Submission,
            StartRoute::Results => Route::Results,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    adforge_core::logging::init()?;

    let options = StartupOptions {
        backend_origin: args.backend,
        prefill_url: args.url,
        prefill_file: args.file,
        initial_route: args.route.into(),
    };

    let mut settings = config::load_settings(args.config.as_deref()).context("Loading settings")?;
    settings.apply_overrides(&options);

    let endpoints = config::resolve_endpoints(&settings).context("Resolving backend endpoints")?;
    info!("Backend: {}", endpoints.generate_url());

    let client =
        Arc::new(GenerationClient::new(endpoints.clone()).context("Building HTTP client")?);
    let state = AppState::with_startup(settings, endpoints, &options);

    let result = adforge_tui::run(state, client).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("adforge exiting");
    result
}
