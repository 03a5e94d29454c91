#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::Content;
use tracing_subscriber::EnvFilter;

use crate::context::{Background, PageConfig};

/// Page configuration, set once from the command line before launch
static PAGE_CONFIG: OnceLock<PageConfig> = OnceLock::new();

/// Get the page configuration (set from command line or built-in default)
pub fn get_page_config() -> PageConfig {
    PAGE_CONFIG.get().cloned().unwrap_or_default()
}

/// Single-page portfolio
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio with an animated particle background")]
struct Args {
    /// JSON content file (defaults to <config dir>/portfolio/content.json if present)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Subtitle caption; repeat to cycle through several
    #[arg(long = "caption")]
    captions: Vec<String>,

    /// Disable the animated particle background
    #[arg(long)]
    no_particles: bool,

    /// Seed for the particle layout (random if omitted)
    #[arg(long)]
    particle_seed: Option<u64>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

/// Default content file location under the platform config dir
fn default_content_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("portfolio").join("content.json"))
        .filter(|path| path.exists())
}

fn load_content(args: &Args) -> anyhow::Result<Content> {
    let mut content = match args.content.clone().or_else(default_content_path) {
        Some(path) => Content::load(&path)
            .with_context(|| format!("failed to load content from {}", path.display()))?,
        None => {
            tracing::info!("No content file given, using built-in content");
            Content::builtin()
        }
    };

    if !args.captions.is_empty() {
        content.captions = args.captions.clone();
    }

    Ok(content)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let content = load_content(&args)?;

    let background = if args.no_particles {
        Background::Disabled
    } else {
        Background::Particles {
            seed: args.particle_seed,
        }
    };

    let title = format!("{} - Portfolio", content.profile.name);

    tracing::info!(
        projects = content.projects.len(),
        captions = content.captions.len(),
        ?background,
        "Starting portfolio"
    );

    let _ = PAGE_CONFIG.set(PageConfig {
        content,
        background,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
