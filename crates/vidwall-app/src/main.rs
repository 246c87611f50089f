mod cli;
mod items;
mod report;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use vidwall_common::types::Size;
use vidwall_common::{Result, VidwallError};
use vidwall_config::VidwallConfig;
use vidwall_layout::{LayoutItem, WallCommand, WallSession};

use crate::cli::Args;
use crate::report::Report;

const DEFAULT_LOG_DIRECTIVE: &str = "vidwall=info";

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Config first: its logging section feeds the subscriber below
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("vidwall: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&args, &config);
    tracing::info!(mode = %config.layout.mode, "vidwall starting");

    if let Err(e) = run(&args, &config) {
        eprintln!("vidwall: {e}");
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<VidwallConfig> {
    let config = match &args.config {
        Some(path) => vidwall_config::load_config_from(path)?,
        None => vidwall_config::load_config()?,
    };
    Ok(config)
}

/// Logs go to stderr so stdout stays pure JSON.
fn init_logging(args: &Args, config: &VidwallConfig) {
    let directive = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| config.logging.level.directive());
    let filter = match directive.parse() {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => {
            eprintln!("vidwall: ignoring bad log directive '{directive}'");
            EnvFilter::from_default_env().add_directive(
                DEFAULT_LOG_DIRECTIVE
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            )
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args, config: &VidwallConfig) -> Result<()> {
    let container = Size::new(
        args.width.unwrap_or(config.layout.viewport_width),
        args.height.unwrap_or(config.layout.viewport_height),
    );
    if !container.is_drawable() {
        return Err(VidwallError::Input(format!(
            "viewport {}x{} has no drawable area",
            container.width, container.height
        )));
    }

    let items = collect_items(args, config.layout.default_aspect_ratio)?;
    tracing::debug!(count = items.len(), "streams loaded");

    let mut session = WallSession::with_mode(args.mode.unwrap_or(config.layout.mode));
    if let Some(index) = args.select {
        if !session.execute(WallCommand::CarouselSelect(index), items.len())
            && index >= items.len()
        {
            return Err(VidwallError::Input(format!(
                "carousel selection {index} is out of range for {} streams",
                items.len()
            )));
        }
    }

    let report = Report {
        mode: session.mode(),
        container,
        arrangement: session.arrange(container, &items),
        candidates: if args.compare {
            report::candidates(container, &items)
        } else {
            Vec::new()
        },
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn collect_items(args: &Args, default_ratio: f64) -> Result<Vec<LayoutItem>> {
    let mut items = match &args.items_file {
        Some(path) => items::load_items_file(path, default_ratio)?,
        None => Vec::new(),
    };
    for spec in &args.items {
        items.push(items::parse_item(spec, default_ratio)?);
    }
    items::ensure_unique(&items)?;
    Ok(items)
}
