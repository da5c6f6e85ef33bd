// src/config.rs

use clap::Parser;
use std::{path::PathBuf, time::Duration};

pub const DEFAULT_URL: &str = "https://cube20.org/qtm/";
pub const DEFAULT_INPUT: &str = "rubikCubeGodNumber.html";
pub const DEFAULT_CSV: &str = "positions.csv";
pub const DEFAULT_PLOT: &str = "rubikCubePositions.png";
pub const MAX_RETRIES: u32 = 10;

/// Scrape the quarter-turn God's number table, save it as CSV and plot it.
#[derive(Parser, Debug, Clone)]
#[command(name = "godnumber", version, about, long_about = None)]
pub struct Config {
    /// Fetch the page over HTTP instead of reading `--input`.
    /// `GODNUMBER_ONLINE` takes a boolean word (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`).
    #[arg(long, env = "GODNUMBER_ONLINE")]
    pub online: bool,

    /// Page to fetch when online
    #[arg(long, env = "GODNUMBER_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Local copy of the page
    #[arg(long, env = "GODNUMBER_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// CSV destination
    #[arg(long = "csv", env = "GODNUMBER_CSV", default_value = DEFAULT_CSV)]
    pub csv_path: PathBuf,

    /// PNG destination
    #[arg(long = "plot-path", env = "GODNUMBER_PLOT", default_value = DEFAULT_PLOT)]
    pub plot_path: PathBuf,

    /// Skip rendering the chart
    #[arg(long = "no-plot", action = clap::ArgAction::SetFalse)]
    pub plot: bool,

    /// When online, also write the fetched page to `--input`
    #[arg(long)]
    pub save_html: bool,

    /// HTTP request timeout in seconds
    #[arg(long, env = "GODNUMBER_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Extra attempts after a failed fetch (0-10)
    #[arg(
        long,
        env = "GODNUMBER_RETRIES",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(0..=MAX_RETRIES as i64)
    )]
    pub retries: u32,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            online: false,
            url: DEFAULT_URL.to_string(),
            input: PathBuf::from(DEFAULT_INPUT),
            csv_path: PathBuf::from(DEFAULT_CSV),
            plot_path: PathBuf::from(DEFAULT_PLOT),
            plot: true,
            save_html: false,
            timeout_secs: 30,
            retries: 1,
        }
    }
}
