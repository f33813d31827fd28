// src/bin/test_prices.rs
//
// Usage: test_prices [ZONE] [YYYY-MM-DD]
use anyhow::{anyhow, Result};
use chrono::Local;
use dotenv::dotenv;
use env_logger;
use log::{error, info};
use std::env;

use elpris_web::config::Config;
use elpris_web::models::PriceZone;
use elpris_web::services::prices::{lookup_prices, ElprisClient};
use elpris_web::services::validation::{parse_date, validate_date};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let mut args = env::args().skip(1);
    let zone_code = args.next().unwrap_or_else(|| "SE3".to_string());
    let zone = PriceZone::from_code(&zone_code)
        .ok_or_else(|| anyhow!("unknown price zone '{}'", zone_code))?;
    let date = match args.next() {
        Some(text) => parse_date(&text).ok_or_else(|| anyhow!("could not parse date '{}'", text))?,
        None => Local::now().date_naive(),
    };
    if !validate_date(date) {
        return Err(anyhow!("{} is outside the range the pricing API covers", date));
    }

    let config = Config::from_env()?;
    let client = ElprisClient::new(config.price_api_base_url);
    info!("Testing spot price fetching for {} {} against {}", zone, date, client.base_url());

    match lookup_prices(&client, date, zone).await {
        Ok(rows) => {
            info!("SUCCESS: {} rows", rows.len());
            for row in rows {
                println!("{}  {:>8.4} SEK  {:>8.4} EUR  {}", row.time_of_day, row.sek_per_kwh, row.eur_per_kwh, row.zone_label);
            }
            Ok(())
        }
        Err(e) => {
            error!("ERROR: Failed to fetch spot prices: {}", e);
            Err(e.into())
        }
    }
}
