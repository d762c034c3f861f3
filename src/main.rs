// src/main.rs
// hero-carousel - render and play hero carousels from the terminal

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hero_carousel::{
    CarouselConfig, Container, HeroSlider, Page,
    config::{CarouselFileConfig, EnvOverrides},
    http::create_shared_client,
    slides::normalize_slides,
    source::SlideSource,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;
use url::Url;

#[derive(Parser)]
#[command(name = "hero-carousel")]
#[command(about = "Data-driven hero carousel renderer")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load, normalize and mount slides, then print the container HTML
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Write HTML here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the normalized slide records as JSON
    Normalize {
        /// Slide data URL or file path
        #[arg(short, long)]
        data: String,

        /// Base URL for relative references
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Run the carousel in the terminal, printing each active slide
    Play {
        #[command(flatten)]
        source: SourceArgs,

        /// Auto-advance delay in milliseconds
        #[arg(long)]
        auto_ms: Option<u64>,

        /// Pause after manual navigation in milliseconds
        #[arg(long)]
        manual_ms: Option<u64>,

        /// Stop after this many slide changes
        #[arg(long, default_value = "5")]
        advances: usize,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Slide data URL or file path
    #[arg(short, long)]
    data: Option<String>,

    /// Base URL for relative references
    #[arg(long)]
    base_url: Option<String>,

    /// Config file (default: ~/.config/hero-carousel/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// CLI flags first, then HERO_* env vars, then the config file
fn build_config(args: &SourceArgs, auto_ms: Option<u64>, manual_ms: Option<u64>) -> Result<CarouselConfig> {
    let mut config = CarouselConfig::new();
    config.data_url = args.data.clone();
    config.base_url = args.base_url.clone();
    config.auto_advance_delay = auto_ms.map(Duration::from_millis);
    config.manual_pause_delay = manual_ms.map(Duration::from_millis);

    let file = match &args.config {
        Some(path) => CarouselFileConfig::load_from(path)?,
        None => CarouselFileConfig::load(),
    };

    Ok(config.apply_env(&EnvOverrides::from_env()).apply_file(&file))
}

async fn run_render(source: SourceArgs, out: Option<PathBuf>) -> Result<()> {
    let config = build_config(&source, None, None)?;
    let page = Page::default();
    let mut slider = HeroSlider::new(Container::new(), config, &page);

    if !slider.init().await {
        warn!("No slides to render");
    }
    let html = slider.container().to_html();
    slider.destroy();

    match out {
        Some(path) => {
            tokio::fs::write(&path, html).await?;
            info!("Wrote carousel to {}", path.display());
        }
        None => println!("{}", html),
    }
    Ok(())
}

async fn run_normalize(data: String, base_url: Option<String>) -> Result<()> {
    let base = base_url.as_deref().map(Url::parse).transpose()?;
    let source = SlideSource::new(create_shared_client(), data).with_base(base);
    let payload = source.load_payload().await?;
    let records = normalize_slides(&payload);
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

async fn run_play(
    source: SourceArgs,
    auto_ms: Option<u64>,
    manual_ms: Option<u64>,
    advances: usize,
) -> Result<()> {
    let config = build_config(&source, auto_ms, manual_ms)?;
    let page = Page::default();
    let mut slider = HeroSlider::new(Container::new(), config, &page);

    if !slider.init().await {
        println!("No slides to play");
        return Ok(());
    }

    let labels: Vec<String> = slider
        .container()
        .slides()
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            slide
                .attribute("aria-label")
                .map(str::to_string)
                .unwrap_or_else(|| format!("Slide {}", i + 1))
        })
        .collect();
    let total = labels.len();
    let print_active = |index: usize| {
        let label = labels.get(index).map(String::as_str).unwrap_or("");
        println!("[{}/{}] {}", index + 1, total, label);
    };

    let handle = slider.spawn();
    let mut status = handle.status();
    let mut last = status.borrow_and_update().active_index;
    print_active(last);

    let mut seen = 0;
    while seen < advances {
        tokio::select! {
            changed = status.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = status.borrow_and_update().active_index;
                if current != last {
                    last = current;
                    seen += 1;
                    print_active(current);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }

    handle.destroy().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv(); // Load .env from current directory

    let cli = Cli::parse();

    // Quiet for output-producing commands
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        match &cli.command {
            Commands::Render { .. } | Commands::Normalize { .. } => Level::WARN,
            Commands::Play { .. } => Level::INFO,
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render { source, out } => {
            run_render(source, out).await?;
        }
        Commands::Normalize { data, base_url } => {
            run_normalize(data, base_url).await?;
        }
        Commands::Play {
            source,
            auto_ms,
            manual_ms,
            advances,
        } => {
            run_play(source, auto_ms, manual_ms, advances).await?;
        }
    }

    Ok(())
}
