// src/fetch/mod.rs

use reqwest::Client;
use scraper::Html;
use std::{fs, path::Path, time::Duration};
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};

use crate::{config::Config, error::Error, Result};

const BACKOFF_MS: u64 = 500;
const MAX_BACKOFF_MS: u64 = 30_000;

/// Delay before retry number `attempt` (1-based): doubles each time, capped at 30s.
pub fn backoff_delay(attempt: u32) -> Duration {
    let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
    Duration::from_millis(BACKOFF_MS.saturating_mul(factor).min(MAX_BACKOFF_MS))
}

/// Build the HTTP client used for the online fetch.
pub fn build_client(config: &Config) -> Result<Client> {
    Client::builder()
        .timeout(config.timeout())
        .build()
        .map_err(|source| Error::Fetch {
            url: config.url.clone(),
            source,
        })
}

async fn get_text_core(client: &Client, url: &str) -> Result<String> {
    debug!("Fetching text from {}", url);
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status,
        });
    }

    resp.text().await.map_err(|source| Error::Fetch {
        url: url.to_string(),
        source,
    })
}

/// GET `url`, retrying up to `max_retries` extra times with exponential backoff.
pub async fn get_text_with_retry(client: &Client, url: &str, max_retries: u32) -> Result<String> {
    let mut attempts = 0;
    loop {
        match get_text_core(client, url).await {
            Ok(t) => return Ok(t),
            Err(e) if attempts < max_retries => {
                attempts += 1;
                let backoff = backoff_delay(attempts);
                warn!(%url, attempt = attempts, delay = ?backoff, error = %e, "Retrying");
                sleep(backoff).await;
            }
            Err(e) => {
                error!(%url, error = %e, "Exhausted retries");
                return Err(e);
            }
        }
    }
}

/// Read a previously saved copy of the page.
pub fn read_page(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Produce the parsed page, either from `config.url` or from `config.input`.
#[instrument(level = "info", skip(config), fields(online = config.online))]
pub async fn load_document(config: &Config) -> Result<Html> {
    let html = if config.online {
        let client = build_client(config)?;
        let text = get_text_with_retry(&client, &config.url, config.retries).await?;
        info!(url = %config.url, bytes = text.len(), "fetched page");

        if config.save_html {
            fs::write(&config.input, &text).map_err(|e| Error::io(&config.input, e))?;
            info!("saved page to {}", config.input.display());
        }
        text
    } else {
        let text = read_page(&config.input)?;
        info!(path = %config.input.display(), bytes = text.len(), "read page");
        text
    };

    Ok(Html::parse_document(&html))
}
