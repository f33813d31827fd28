// src/models.rs
use serde::Deserialize;
use std::fmt;

/// Swedish electricity price zones ("prisklass").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceZone {
    Se1,
    Se2,
    Se3,
    Se4,
}

impl PriceZone {
    pub const ALL: [PriceZone; 4] = [PriceZone::Se1, PriceZone::Se2, PriceZone::Se3, PriceZone::Se4];

    /// Exact, case-sensitive lookup of a zone code.
    pub fn from_code(code: &str) -> Option<PriceZone> {
        PriceZone::ALL.into_iter().find(|zone| zone.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            PriceZone::Se1 => "SE1",
            PriceZone::Se2 => "SE2",
            PriceZone::Se3 => "SE3",
            PriceZone::Se4 => "SE4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceZone::Se1 => "Luleå / Norra Sverige",
            PriceZone::Se2 => "Sundsvall / Norra Mellansverige",
            PriceZone::Se3 => "Stockholm / Södra Mellansverige",
            PriceZone::Se4 => "Malmö / Södra Sverige",
        }
    }
}

impl fmt::Display for PriceZone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One interval of spot prices as returned by the pricing API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "SEK_per_kWh")]
    pub sek_per_kwh: f64,
    #[serde(rename = "EUR_per_kWh")]
    pub eur_per_kwh: f64,
    #[serde(rename = "EXR", default)]
    pub exchange_rate: Option<f64>,
    pub time_start: String,
    #[serde(default)]
    pub time_end: Option<String>,
}

/// A table row as shown to the user, one field per result column.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub sek_per_kwh: f64,
    pub eur_per_kwh: f64,
    pub time_of_day: String,
    pub zone_label: &'static str,
}

/// Fields posted by the price form. Missing fields come through empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceForm {
    #[serde(default)]
    pub selected_date: String,
    #[serde(default)]
    pub price_class: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_lookup_is_exact() {
        assert_eq!(PriceZone::from_code("SE3"), Some(PriceZone::Se3));
        assert_eq!(PriceZone::from_code("se3"), None);
        assert_eq!(PriceZone::from_code(" SE3"), None);
        assert_eq!(PriceZone::from_code("SE5"), None);
    }

    #[test]
    fn record_parses_upstream_payload() {
        let body = r#"[{"SEK_per_kWh":0.5617,"EUR_per_kWh":0.04925,"EXR":11.405,
            "time_start":"2023-01-01T00:00:00+01:00","time_end":"2023-01-01T01:00:00+01:00"}]"#;
        let records: Vec<PriceRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sek_per_kwh, 0.5617);
        assert_eq!(records[0].exchange_rate, Some(11.405));
        assert_eq!(records[0].time_start, "2023-01-01T00:00:00+01:00");
    }

    #[test]
    fn record_needs_only_prices_and_start() {
        let body = r#"{"SEK_per_kWh":1.23,"EUR_per_kWh":0.11,"time_start":"2023-01-01T05:00:00"}"#;
        let record: PriceRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.exchange_rate, None);
        assert_eq!(record.time_end, None);
    }
}
