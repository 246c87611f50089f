use std::path::PathBuf;

use clap::Parser;
use vidwall_common::types::LayoutMode;

/// vidwall — lay out a wall of video streams and print the placement as JSON.
#[derive(Parser, Debug)]
#[command(name = "vidwall", version, about)]
pub struct Args {
    /// Viewport width (defaults to the configured viewport).
    #[arg(long)]
    pub width: Option<f64>,

    /// Viewport height (defaults to the configured viewport).
    #[arg(long)]
    pub height: Option<f64>,

    /// A stream as `ID` or `ID:RATIO`, e.g. `lobby:16/9`. Repeatable.
    #[arg(short = 'i', long = "item", value_name = "ID[:RATIO]")]
    pub items: Vec<String>,

    /// JSON file holding an array of `{ "id": ..., "aspect_ratio": ... }`.
    #[arg(long = "items", value_name = "FILE")]
    pub items_file: Option<PathBuf>,

    /// Layout mode override (standard, tetris, carousel).
    #[arg(short = 'm', long)]
    pub mode: Option<LayoutMode>,

    /// Carousel selection (carousel mode only).
    #[arg(long, value_name = "INDEX")]
    pub select: Option<usize>,

    /// Also print every packing strategy's result.
    #[arg(long)]
    pub compare: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (tracing filter directive, e.g. `vidwall=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
