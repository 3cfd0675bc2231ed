//! Command-line argument definition.

use clap::{Parser, ValueEnum};
use newsq::app::LaunchOptions;
use newsq::state::{CATEGORIES, Screen, category_index};

/// newsq - A fast, friendly TUI for world headlines, section browsing and news search
#[derive(Parser, Debug)]
#[command(name = "newsq")]
#[command(version)]
#[command(about = "A fast, friendly TUI for world headlines, section browsing and news search", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Tab to open on start
    #[arg(long, value_enum)]
    pub screen: Option<ScreenArg>,

    /// Preselect a Browse category by label or section (e.g. Science, technology)
    #[arg(long, value_parser = parse_category)]
    pub category: Option<usize>,

    /// Search for stories on start
    #[arg(short, long)]
    pub search: Option<String>,

    /// Fetch the selected tab once, print the stories and exit
    #[arg(long)]
    pub print: bool,

    /// Skip the short delay shown before each fetch
    #[arg(long)]
    pub no_delay: bool,
}

/// Tab names accepted by `--screen`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScreenArg {
    /// World headlines.
    World,
    /// Section browsing.
    Browse,
    /// Free-text search.
    Search,
}

impl From<ScreenArg> for Screen {
    fn from(s: ScreenArg) -> Self {
        match s {
            ScreenArg::World => Self::World,
            ScreenArg::Browse => Self::Browse,
            ScreenArg::Search => Self::Search,
        }
    }
}

/// What: Validate a `--category` value.
///
/// Output:
/// - Index into the category table, or an error listing the valid names.
fn parse_category(s: &str) -> Result<usize, String> {
    category_index(s).ok_or_else(|| {
        let names: Vec<&str> = CATEGORIES.iter().map(|c| c.label).collect();
        format!("unknown category '{s}' (expected one of: {})", names.join(", "))
    })
}

impl Args {
    /// What: Convert parsed flags into runtime launch options.
    #[must_use]
    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            screen: self.screen.map(Screen::from),
            category: self.category,
            search: self.search.clone(),
            no_delay: self.no_delay,
        }
    }
}
