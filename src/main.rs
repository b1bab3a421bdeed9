//! Web Preview - a browser-like preview host for the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{error, info, warn};
use wpv_app::config::{self, Settings};
use wpv_app::demo::{DemoApp, DEMO_SOURCE};
use wpv_app::{Console, HostedApplication, PreviewHost};

/// Web Preview - a browser-like preview host for the terminal
#[derive(Parser, Debug)]
#[command(name = "wpv")]
#[command(about = "Preview a hosted page with history, console and source view", long_about = None)]
struct Args {
    /// Path the navigation history starts at
    #[arg(long, value_name = "PATH")]
    initial_path: Option<String>,

    /// File shown in the code view
    #[arg(long, value_name = "FILE")]
    source: Option<PathBuf>,

    /// Open the console pane at startup
    #[arg(long)]
    console: bool,

    /// Directory holding config.toml (defaults to ./.wpv)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> Settings {
        let mut settings = match &self.config_dir {
            Some(dir) => config::load_settings_from_dir(dir),
            None => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                config::load_settings(&cwd)
            }
        };

        if let Some(path) = &self.initial_path {
            settings.preview.initial_path = path.clone();
        }
        if let Some(source) = &self.source {
            settings.preview.source_file = Some(source.clone());
        }
        if self.console {
            settings.console.show_on_start = true;
        }
        settings
    }
}

/// Source text for the code view: the configured file, else the demo's own
fn load_source(settings: &Settings) -> Result<String> {
    match &settings.preview.source_file {
        Some(path) => config::load_source_file(path)
            .wrap_err_with(|| format!("could not load --source {}", path.display())),
        None => Ok(DEMO_SOURCE.to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = wpv_core::logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let settings = args.settings();
    let source = load_source(&settings)?;
    info!(
        "Starting preview at {} (source: {})",
        settings.preview.initial_path,
        settings
            .preview
            .source_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "bundled demo".to_string())
    );

    let host = PreviewHost::new(
        Console::new(),
        Box::new(|| Box::new(DemoApp::new()) as Box<dyn HostedApplication>),
    );

    if let Err(e) = wpv_tui::run(settings, host, Some(source)).await {
        if e.is_fatal() {
            error!("Preview could not start: {}", e);
        } else {
            warn!("Preview exited with error: {}", e);
        }
        return Err(e.into());
    }
    Ok(())
}
