// src/services/validation.rs
use chrono::{Duration, Local, NaiveDate};
use std::fmt;

use crate::models::PriceZone;

/// Accepted input layouts for the date field, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidDate,
    InvalidZone,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::InvalidDate => {
                write!(f, "Ogiltigt datum. Ange ett giltigt datum inom gränserna.")
            }
            ValidationError::InvalidZone => write!(f, "Ogiltig prisklass."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Inclusive range of dates the pricing API has data for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

impl DateWindow {
    /// First day of the upstream data series.
    pub fn floor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 11, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Window ending the day after `today`.
    pub fn ending_tomorrow_of(today: NaiveDate) -> DateWindow {
        DateWindow {
            min_date: DateWindow::floor(),
            max_date: today + Duration::days(1),
        }
    }

    /// Window as of the current local date.
    pub fn current() -> DateWindow {
        DateWindow::ending_tomorrow_of(Local::now().date_naive())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min_date <= date && date <= self.max_date
    }
}

pub fn validate_date(candidate: NaiveDate) -> bool {
    DateWindow::current().contains(candidate)
}

pub fn validate_zone(code: &str) -> bool {
    PriceZone::from_code(code).is_some()
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// Parses and checks both form fields; the date is checked first.
pub fn validate_request(date_text: &str, zone_code: &str) -> Result<(NaiveDate, PriceZone), ValidationError> {
    let date = parse_date(date_text)
        .filter(|date| validate_date(*date))
        .ok_or(ValidationError::InvalidDate)?;
    if !validate_zone(zone_code) {
        return Err(ValidationError::InvalidZone);
    }
    let zone = PriceZone::from_code(zone_code).ok_or(ValidationError::InvalidZone)?;
    Ok((date, zone))
}
