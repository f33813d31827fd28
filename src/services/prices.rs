// src/services/prices.rs
use chrono::{Datelike, NaiveDate};
use log::{debug, error, info};
use reqwest::{Client, StatusCode};
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::models::{DisplayRow, PriceRecord, PriceZone};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The pricing API answered with something other than 200.
    Status(u16),
    /// The request never completed or the body could not be decoded.
    Transport(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "API Request Failed (Status Code {})", code),
            FetchError::Transport(description) => write!(f, "Error: {}", description),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<PriceRecord>, FetchError>> + Send + 'a>>;

/// Source of spot prices for one zone and day.
///
/// Implementations make at most one upstream call per `fetch` and never retry.
pub trait PriceSource: Send + Sync {
    fn fetch<'a>(&'a self, date: NaiveDate, zone: PriceZone) -> FetchFuture<'a>;
}

/// `{base}/api/v1/prices/{YYYY}/{MM}-{DD}_{ZONE}.json`
pub fn price_url(base_url: &str, date: NaiveDate, zone: PriceZone) -> String {
    format!(
        "{}/api/v1/prices/{}/{:02}-{:02}_{}.json",
        base_url.trim_end_matches('/'),
        date.year(),
        date.month(),
        date.day(),
        zone.code()
    )
}

/// Client for the elprisetjustnu.se pricing API.
#[derive(Debug, Clone)]
pub struct ElprisClient {
    client: Client,
    base_url: String,
}

impl ElprisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ElprisClient::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        ElprisClient {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_prices(&self, date: NaiveDate, zone: PriceZone) -> Result<Vec<PriceRecord>, FetchError> {
        let url = price_url(&self.base_url, date, zone);
        info!("Fetching spot prices from URL: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("Request to pricing API failed: {}", e);
            FetchError::from(e)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("Pricing API returned status {} for {}", status, url);
            return Err(FetchError::Status(status.as_u16()));
        }

        let records: Vec<PriceRecord> = response.json().await.map_err(|e| {
            error!("Failed to decode pricing API response: {}", e);
            FetchError::from(e)
        })?;
        debug!("Received {} price records for {} {}", records.len(), zone, date);
        Ok(records)
    }
}

impl PriceSource for ElprisClient {
    fn fetch<'a>(&'a self, date: NaiveDate, zone: PriceZone) -> FetchFuture<'a> {
        Box::pin(self.fetch_prices(date, zone))
    }
}

/// Time of day ("HH:MM") from an upstream `time_start`.
///
/// Takes what follows the first `T`, cut to five characters. A timestamp with
/// no `T` yields an empty string.
pub fn time_of_day(time_start: &str) -> String {
    match time_start.split_once('T') {
        Some((_, time)) => time.chars().take(5).collect(),
        None => String::new(),
    }
}

/// Reshapes upstream records into table rows, keeping upstream order.
pub fn normalize(records: &[PriceRecord], zone: PriceZone) -> Vec<DisplayRow> {
    records
        .iter()
        .map(|record| DisplayRow {
            sek_per_kwh: record.sek_per_kwh,
            eur_per_kwh: record.eur_per_kwh,
            time_of_day: time_of_day(&record.time_start),
            zone_label: zone.label(),
        })
        .collect()
}

/// Fetch followed by normalization; a failed fetch skips normalization.
pub async fn lookup_prices(
    source: &dyn PriceSource,
    date: NaiveDate,
    zone: PriceZone,
) -> Result<Vec<DisplayRow>, FetchError> {
    let records = source.fetch(date, zone).await?;
    Ok(normalize(&records, zone))
}
