use anyhow::{Context, Result};
use clap::Parser;
use godnumber::{pipeline, Config};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();

    // ─── 2) config ───────────────────────────────────────────────────
    let config = Config::parse();
    info!(?config, "startup");

    // ─── 3) run ──────────────────────────────────────────────────────
    let source = if config.online {
        config.url.clone()
    } else {
        config.input.display().to_string()
    };
    let summary = pipeline::run(&config)
        .await
        .with_context(|| format!("scraping God's number table from {}", source))?;

    info!(
        rows = summary.rows,
        points = summary.points,
        nan_cells = summary.nan_cells,
        csv = %config.csv_path.display(),
        plotted = summary.plotted,
        "all done"
    );
    Ok(())
}
