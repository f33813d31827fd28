// src/handlers/prices.rs
use log::{error, info, warn};
use std::sync::Arc;
use warp::reply::Html;
use warp::Rejection;

use crate::models::PriceForm;
use crate::services::prices::{lookup_prices, PriceSource};
use crate::services::render::{render_form, render_result};
use crate::services::validation::{parse_date, validate_request, DateWindow};

pub async fn show_form() -> Result<Html<String>, Rejection> {
    let window = DateWindow::current();
    Ok(warp::reply::html(render_form(None, None, window.max_date)))
}

pub async fn submit_form(form: PriceForm, source: Arc<dyn PriceSource>) -> Result<Html<String>, Rejection> {
    info!(
        "Handling price request for date '{}' and zone '{}'",
        form.selected_date, form.price_class
    );
    let window = DateWindow::current();

    let (date, zone) = match validate_request(&form.selected_date, &form.price_class) {
        Ok(valid) => valid,
        Err(e) => {
            warn!("Rejected price request: {}", e);
            let message = e.to_string();
            let selected = parse_date(&form.selected_date);
            return Ok(warp::reply::html(render_form(Some(message.as_str()), selected, window.max_date)));
        }
    };

    match lookup_prices(source.as_ref(), date, zone).await {
        Ok(rows) => {
            info!("Rendering {} price rows for {} {}", rows.len(), zone, date);
            Ok(warp::reply::html(render_result(&rows, window.max_date)))
        }
        Err(e) => {
            error!("Failed to fetch prices for {} {}: {}", zone, date, e);
            let message = e.to_string();
            Ok(warp::reply::html(render_form(Some(message.as_str()), Some(date), window.max_date)))
        }
    }
}
