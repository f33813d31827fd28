//! Exercises the reqwest client against a local fake of the pricing API.

use chrono::NaiveDate;
use elpris_web::models::PriceZone;
use elpris_web::services::prices::{lookup_prices, ElprisClient, FetchError};
use std::net::SocketAddr;
use warp::http::StatusCode;
use warp::Filter;

const DAY_BODY: &str = r#"[
    {"SEK_per_kWh":0.71,"EUR_per_kWh":0.062,"EXR":11.4,"time_start":"2023-01-05T00:00:00+01:00","time_end":"2023-01-05T01:00:00+01:00"},
    {"SEK_per_kWh":0.65,"EUR_per_kWh":0.057,"EXR":11.4,"time_start":"2023-01-05T01:00:00+01:00","time_end":"2023-01-05T02:00:00+01:00"}
]"#;

fn fake_pricing_api() -> SocketAddr {
    let prices = warp::path!("api" / "v1" / "prices" / String / String).map(|year: String, file: String| {
        let (status, body) = match (year.as_str(), file.as_str()) {
            ("2023", "01-05_SE3.json") => (StatusCode::OK, DAY_BODY),
            ("2023", "01-05_SE2.json") => (StatusCode::OK, "[]"),
            ("2023", "01-05_SE4.json") => (StatusCode::OK, "<html>maintenance</html>"),
            ("2023", "01-05_SE1.json") => (StatusCode::INTERNAL_SERVER_ERROR, ""),
            _ => (StatusCode::NOT_FOUND, ""),
        };
        warp::reply::with_status(body, status)
    });
    let (addr, server) = warp::serve(prices).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

fn jan_5() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 5).unwrap()
}

#[tokio::test]
async fn ok_response_is_returned_as_records() {
    let client = ElprisClient::new(format!("http://{}", fake_pricing_api()));
    let records = client.fetch_prices(jan_5(), PriceZone::Se3).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].sek_per_kwh, 0.71);
    assert_eq!(records[1].time_start, "2023-01-05T01:00:00+01:00");
}

#[tokio::test]
async fn lookup_normalizes_fetched_records() {
    let client = ElprisClient::new(format!("http://{}", fake_pricing_api()));
    let rows = lookup_prices(&client, jan_5(), PriceZone::Se3).await.unwrap();

    let times: Vec<&str> = rows.iter().map(|row| row.time_of_day.as_str()).collect();
    assert_eq!(times, vec!["00:00", "01:00"]);
    assert!(rows.iter().all(|row| row.zone_label == "Stockholm / Södra Mellansverige"));
}

#[tokio::test]
async fn empty_array_is_not_an_error() {
    let client = ElprisClient::new(format!("http://{}", fake_pricing_api()));
    let rows = lookup_prices(&client, jan_5(), PriceZone::Se2).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn non_200_status_becomes_status_error() {
    let client = ElprisClient::new(format!("http://{}", fake_pricing_api()));
    let err = client.fetch_prices(jan_5(), PriceZone::Se1).await.unwrap_err();

    assert_eq!(err, FetchError::Status(500));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn missing_day_reports_404() {
    let client = ElprisClient::new(format!("http://{}", fake_pricing_api()));
    let date = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
    let err = lookup_prices(&client, date, PriceZone::Se3).await.unwrap_err();
    assert_eq!(err, FetchError::Status(404));
}

#[tokio::test]
async fn undecodable_body_becomes_transport_error() {
    let client = ElprisClient::new(format!("http://{}", fake_pricing_api()));
    let err = client.fetch_prices(jan_5(), PriceZone::Se4).await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
    assert!(err.to_string().starts_with("Error: "));
}

#[tokio::test]
async fn unreachable_host_becomes_transport_error() {
    // Bind and immediately drop a listener to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let client = ElprisClient::new(format!("http://{}", addr));
    let err = client.fetch_prices(jan_5(), PriceZone::Se3).await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}
