//! Calendar-date rendering for store timestamps.
//!
//! The store stamps posts in nanoseconds since the Unix epoch. Cards show
//! only a calendar date: in the browser it is formatted in the viewer's
//! locale via `Date.toLocaleDateString`; on the server (and in tests) a
//! plain UTC `YYYY-MM-DD` fallback is used.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

const NANOS_PER_MILLI: f64 = 1_000_000.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Convert a store timestamp to milliseconds since the epoch.
pub fn ns_to_millis(timestamp_ns: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        timestamp_ns as f64 / NANOS_PER_MILLI
    }
}

/// Calendar date for a post's store timestamp, in the viewer's locale where
/// a browser is available.
pub fn post_date(timestamp_ns: u64) -> String {
    let millis = ns_to_millis(timestamp_ns);
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis));
        String::from(date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        utc_date(millis)
    }
}

/// UTC calendar date (`YYYY-MM-DD`) for a millisecond timestamp.
pub fn utc_date(millis: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let days = (millis / MILLIS_PER_DAY).floor() as i64;
    let (year, month, day) = civil_from_days(days);
    format!("{year:04}-{month:02}-{day:02}")
}

/// Proleptic Gregorian date for a day count relative to 1970-01-01.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let month = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month as u32, day as u32)
}
