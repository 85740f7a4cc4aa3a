//! bubblekit - Entry Point

use bubblekit::measure::GridTextEngine;
use bubblekit::model::error::AppError;
use bubblekit::sizing::CellSizer;
use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// bubblekit - size chat bubbles from a JSONL file of chat items
#[derive(Parser, Debug)]
#[command(name = "bubblekit")]
#[command(version)]
#[command(about = "Compute chat bubble sizes for a JSONL stream of chat items")]
pub struct Args {
    /// Path to JSONL chat item file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Width of the list the bubbles are laid out in, in points
    #[arg(short, long)]
    pub width: f32,

    /// Size the bubbles in their selected state
    #[arg(long)]
    pub selected: bool,

    /// Layout cache capacity per message kind
    #[arg(long)]
    pub cache_capacity: Option<usize>,

    /// Pixel density sizes are rounded to
    #[arg(long)]
    pub scale: Option<f32>,

    /// Path to log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// One line of output.
#[derive(Debug, Serialize)]
struct SizeRecord {
    index: usize,
    kind: &'static str,
    width: f32,
    height: f32,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = bubblekit::config::load_config_with_precedence(args.config.clone())?;
        let merged = bubblekit::config::merge_config(config_file);
        let with_env = bubblekit::config::apply_env_overrides(merged);
        bubblekit::config::apply_cli_overrides(
            with_env,
            args.cache_capacity,
            args.scale,
            args.log_file.clone(),
        )
    };

    bubblekit::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let source = bubblekit::source::detect_input_source(args.file.clone())?;
    let outcome = bubblekit::source::read_chat_items(source.open()?)?;
    for skipped in &outcome.skipped {
        eprintln!("bubblekit: skipping {skipped}");
    }

    let sizer = CellSizer::new(GridTextEngine::default(), &config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for entry in &outcome.items {
        let size = sizer.size(&entry.item, args.width, args.selected);
        let record = SizeRecord {
            index: entry.index,
            kind: entry.item.kind(),
            width: size.width,
            height: size.height,
        };
        serde_json::to_writer(&mut out, &record)
            .map_err(|e| AppError::Output(e.into()))?;
        writeln!(out).map_err(AppError::Output)?;
    }
    out.flush().map_err(AppError::Output)?;

    let stats = sizer.stats();
    info!(
        items = outcome.items.len(),
        skipped = outcome.skipped.len(),
        text_hits = stats.text.hits,
        text_misses = stats.text.misses,
        photo_hits = stats.photo.hits,
        photo_misses = stats.photo.misses,
        "Sizing pass complete"
    );

    Ok(())
}
