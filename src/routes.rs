// src/routes.rs
use std::convert::Infallible;
use std::sync::Arc;
use log::{info, warn};
use warp::http::StatusCode;
use warp::reject::Rejection;
use warp::{Filter, Reply};

use crate::handlers::prices::{show_form, submit_form};
use crate::models::PriceForm;
use crate::services::prices::PriceSource;

const MAX_FORM_BYTES: u64 = 16 * 1024;

pub const NOT_FOUND_MESSAGE: &str = "Sidan kunde inte hittas.";

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if err.is_not_found() {
        code = StatusCode::NOT_FOUND;
        message = NOT_FOUND_MESSAGE;
    } else if err.find::<warp::body::BodyDeserializeError>().is_some()
        || err.find::<warp::reject::PayloadTooLarge>().is_some()
        || err.find::<warp::reject::UnsupportedMediaType>().is_some()
        || err.find::<warp::reject::LengthRequired>().is_some()
    {
        // Checked before MethodNotAllowed: a bad POST body also carries the GET branch's rejection
        code = StatusCode::BAD_REQUEST;
        message = "Bad Request";
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        code = StatusCode::METHOD_NOT_ALLOWED;
        message = "Method Not Allowed";
    } else {
        warn!("Unhandled rejection: {:?}", err);
        code = StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error";
    }

    Ok(warp::reply::with_status(message, code))
}

pub fn routes(source: Arc<dyn PriceSource>) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let source_filter = warp::any().map(move || source.clone());

    let form_route = warp::path::end()
        .and(warp::get())
        .and_then(show_form);

    let submit_route = warp::path::end()
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_FORM_BYTES))
        .and(warp::body::form::<PriceForm>())
        .and(source_filter)
        .and_then(submit_form);

    info!("All routes configured successfully.");

    form_route
        .or(submit_route)
        .recover(handle_rejection)
}
