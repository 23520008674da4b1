//! tabstrip - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tabstrip::config::{CliOverrides, ResolvedConfig};
use tabstrip::model::AppError;
use tabstrip::report::LayoutReport;
use tabstrip::view_state::{Size, TabBar, TabBarBuilder};
use tracing::info;

/// tabstrip - lay out a tab bar and print its geometry
#[derive(Parser, Debug)]
#[command(name = "tabstrip")]
#[command(version)]
#[command(about = "Compute tab bar item geometry for a row of titles")]
pub struct Args {
    /// Tab titles in display order
    pub titles: Vec<String>,

    /// Container width
    #[arg(long, default_value_t = 375.0)]
    pub width: f64,

    /// Container height (defaults to the configured bar height)
    #[arg(long)]
    pub height: Option<f64>,

    /// Scroll the row instead of dividing the container
    #[arg(long)]
    pub scroll: bool,

    /// Snap scrolling to pages
    #[arg(long)]
    pub paging: bool,

    /// Items visible per page while scrolling
    #[arg(long)]
    pub items_per_page: Option<f64>,

    /// Upper bound on self-sized item widths
    #[arg(long)]
    pub max_width: Option<f64>,

    /// Tab to select (zero-based)
    #[arg(long)]
    pub select: Option<usize>,

    /// Horizontal scroll offset to apply before reporting
    #[arg(long, allow_negative_numbers = true)]
    pub offset: Option<f64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Flags that override the resolved configuration. Unset switches override nothing.
    pub fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            scroll_enabled: self.scroll.then_some(true),
            paging_enabled: self.paging.then_some(true),
            items_per_page: self.items_per_page,
            max_item_width: self.max_width,
            default_select_page: self.select,
        }
    }
}

/// Build the bar, self-size it, and apply the requested scroll offset.
fn lay_out(args: &Args, config: &ResolvedConfig) -> TabBar {
    let height = args.height.unwrap_or(config.tab_bar.tab_bar_height);
    let scroll = config.scroll;

    let (mut bar, selection) = TabBarBuilder::new()
        .items(args.titles.iter().map(String::as_str))
        .config(config.tab_bar)
        .scrollable(
            scroll.scrollable,
            scroll.paging,
            scroll.items_in_page,
            scroll.max_width,
        )
        .build(Size::new(args.width, height));
    info!(?selection, "initial selection");

    bar.self_size_visible();

    if let Some(offset) = args.offset {
        bar.set_content_offset(offset);
        bar.settle_scroll();
        bar.self_size_visible();
    }

    bar
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = tabstrip::config::load_config_with_precedence(args.config.clone())?;
        let merged = tabstrip::config::merge_config(config_file);
        let with_env = tabstrip::config::apply_env_overrides(merged);
        tabstrip::config::apply_cli_overrides(with_env, args.cli_overrides())
    };

    tabstrip::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let bar = lay_out(&args, &config);
    let report = LayoutReport::from_tab_bar(&bar);

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}
