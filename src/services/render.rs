// src/services/render.rs
use chrono::NaiveDate;
use std::fmt::Write;

use crate::models::{DisplayRow, PriceZone};
use crate::services::validation::DateWindow;

const TABLE_COLUMNS: [&str; 4] = ["SEK per KWh", "EUR per KWh", "timestamp", "PRISKLASS"];

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"sv\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{}</title>\n</head>\n<body>\n<main class=\"container\">\n{}</main>\n</body>\n</html>\n",
        escape_html(title),
        body
    )
}

fn price_form(selected_date: Option<NaiveDate>, max_date: NaiveDate) -> String {
    let mut form = String::from("<form method=\"post\" action=\"/\">\n");
    let _ = writeln!(form, "<label for=\"price_class\">Prisklass</label>");
    let _ = writeln!(form, "<select id=\"price_class\" name=\"price_class\">");
    for zone in PriceZone::ALL {
        let _ = writeln!(
            form,
            "<option value=\"{}\">{} - {}</option>",
            zone.code(),
            zone.code(),
            escape_html(zone.label())
        );
    }
    let _ = writeln!(form, "</select>");
    let _ = writeln!(form, "<label for=\"selected_date\">Datum</label>");
    let value = selected_date
        .map(|date| format!(" value=\"{}\"", date.format("%Y-%m-%d")))
        .unwrap_or_default();
    let _ = writeln!(
        form,
        "<input type=\"date\" id=\"selected_date\" name=\"selected_date\" min=\"{}\" max=\"{}\"{} required>",
        DateWindow::floor().format("%Y-%m-%d"),
        max_date.format("%Y-%m-%d"),
        value
    );
    let _ = writeln!(form, "<button type=\"submit\">Hämta priser</button>");
    form.push_str("</form>\n");
    form
}

/// Form page, optionally showing an error from the previous submission.
pub fn render_form(error_message: Option<&str>, selected_date: Option<NaiveDate>, max_date: NaiveDate) -> String {
    let mut body = String::from("<h1>Elpriser</h1>\n");
    if let Some(message) = error_message {
        let _ = writeln!(body, "<p class=\"alert alert-danger\">{}</p>", escape_html(message));
    }
    body.push_str(&price_form(selected_date, max_date));
    page("Elpriser", &body)
}

/// Result page with one table row per price interval.
pub fn render_result(rows: &[DisplayRow], max_date: NaiveDate) -> String {
    let mut table = String::from("<table class=\"table table-striped table-hover mt-4\">\n<thead>\n<tr>");
    for column in TABLE_COLUMNS {
        let _ = write!(table, "<th>{}</th>", column);
    }
    table.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in rows {
        let _ = writeln!(
            table,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            row.sek_per_kwh,
            row.eur_per_kwh,
            escape_html(&row.time_of_day),
            escape_html(row.zone_label)
        );
    }
    table.push_str("</tbody>\n</table>\n");

    let mut body = String::from("<h1>Elpriser</h1>\n");
    body.push_str(&table);
    body.push_str(&price_form(None, max_date));
    page("Elpriser", &body)
}
