//! DraftSmith - AI-assisted blog drafting studio
//!
//! A desktop editor with an AI toolbar for organizing, expanding, and
//! polishing blog drafts against a remote text-generation service.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use draftsmith::gui::{DraftsmithApp, Launch};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Override the configured AI service URL
    #[arg(long)]
    backend_url: Option<String>,

    /// Draft file to open at startup
    draft: Option<PathBuf>,
}

fn main() -> iced::Result {
    let args = Args::parse();

    // Setup logging (RUST_LOG wins over --verbose)
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("✍️ DraftSmith v{} starting...", env!("CARGO_PKG_VERSION"));

    let launch = Launch {
        backend_url: args.backend_url,
        draft: args.draft,
    };

    iced::application("DraftSmith", DraftsmithApp::update, DraftsmithApp::view)
        .theme(DraftsmithApp::theme)
        .subscription(DraftsmithApp::subscription)
        .run_with(move || DraftsmithApp::new(launch.clone()))
}
