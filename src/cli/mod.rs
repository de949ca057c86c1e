//! Command-line interface parsing and dispatch.

use std::error::Error;
use std::time::Duration;

use clap::Parser;

use crate::core::config::Config;
use crate::core::constants::{DEFAULT_API_BASE, DEFAULT_REFRESH_SECONDS};
use crate::ui::dashboard_loop::{run_dashboard, RuntimeOptions};
use crate::utils::logging::init_logging;

#[derive(Parser)]
#[command(name = "matchday")]
#[command(about = "A terminal dashboard for live football scores")]
#[command(
    long_about = "Matchday is a full-screen terminal dashboard that follows live football \
matches: a selectable scoreboard on the left, match details on the right, and a \
gradient glyph-wave animation while data loads.\n\n\
Environment Variables:\n\
  MATCHDAY_API_BASE  Feed base URL override\n\
  MATCHDAY_COLOR     Force color depth (truecolor, 256, 16)\n\
  MATCHDAY_LOG       Log filter when --log is set (EnvFilter syntax)\n\n\
Controls:\n\
  j/k, Up/Down      Select a match\n\
  Tab               Switch between live and stats views\n\
  h/l               Stats date range (Today / 3d)\n\
  r                 Refresh the current view\n\
  ?                 Toggle help\n\
  q, Esc, Ctrl+C    Quit"
)]
pub struct Args {
    /// League filter for the scoreboard (e.g. premier-league)
    #[arg(short = 'L', long)]
    pub league: Option<String>,

    /// Scoreboard refresh interval in seconds
    #[arg(short, long)]
    pub refresh: Option<u64>,

    /// Theme: auto, light, or dark
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Write diagnostics to the given file
    #[arg(short, long)]
    pub log: Option<String>,
}

pub fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args = Args::parse();
    init_logging(args.log.as_deref())?;

    let config = Config::load().unwrap_or_default();
    let opts = RuntimeOptions {
        theme: args.theme.or(config.theme),
        league: args.league.or(config.league),
        refresh: Duration::from_secs(
            args.refresh
                .or(config.refresh_seconds)
                .unwrap_or(DEFAULT_REFRESH_SECONDS)
                .max(1),
        ),
        api_base: std::env::var("MATCHDAY_API_BASE")
            .ok()
            .or(config.api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
    };

    run_dashboard(opts).await
}
