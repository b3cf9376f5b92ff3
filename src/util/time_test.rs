use super::*;

#[test]
fn one_million_nanos_is_one_milli() {
    let millis = ns_to_millis(1_000_000);
    assert!((millis - 1.0).abs() < f64::EPSILON);
}

#[test]
fn epoch_millisecond_falls_on_first_day_of_1970() {
    assert_eq!(utc_date(1.0), "1970-01-01");
}

#[test]
fn day_boundary_rolls_over_at_midnight() {
    assert_eq!(utc_date(86_399_999.0), "1970-01-01");
    assert_eq!(utc_date(86_400_000.0), "1970-01-02");
}

#[test]
fn modern_timestamp_maps_to_expected_date() {
    // 2023-11-14T22:13:20Z
    assert_eq!(utc_date(1_700_000_000_000.0), "2023-11-14");
}

#[test]
fn leap_day_is_preserved() {
    // 2024-02-29T00:00:00Z
    assert_eq!(utc_date(1_709_164_800_000.0), "2024-02-29");
}

#[test]
fn post_date_uses_store_nanosecond_resolution() {
    assert_eq!(post_date(1_000_000), "1970-01-01");
}
