//! Deterministic Spanish date formatting and validity arithmetic.
//!
//! Records carry UTC timestamps; documents show Colombian local time.
//! Bogotá has sat at UTC-05:00 with no daylight saving since 1993, so a fixed
//! offset is correct and keeps output independent of host tzdata. Weekday and
//! month names come from fixed tables rather than a locale library, so the
//! same record renders identically on every machine.

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, Timelike, Utc};

/// Fixed Colombian offset (UTC-05:00).
pub fn bogota_offset() -> FixedOffset {
    FixedOffset::west_opt(5 * 3600).expect("5h is a valid offset")
}

const DIAS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const MESES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Format a UTC instant as Bogotá local time, spelled out in Spanish:
/// `"lunes, enero 5 2026 14:03:22"`.
pub fn spanish_local_datetime(utc: DateTime<Utc>) -> String {
    let local = utc.with_timezone(&bogota_offset());
    let dia = DIAS[local.weekday().num_days_from_monday() as usize];
    let mes = MESES[local.month0() as usize];
    format!(
        "{dia}, {mes} {} {} {:02}:{:02}:{:02}",
        local.day(),
        local.year(),
        local.hour(),
        local.minute(),
        local.second()
    )
}

/// Footer print timestamp, `YYYY-MM-DD HH:MM:SS` in Bogotá local time.
pub fn print_timestamp(now: DateTime<Utc>) -> String {
    now.with_timezone(&bogota_offset())
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Bogotá calendar date of a UTC instant.
pub fn local_date(utc: DateTime<Utc>) -> NaiveDate {
    utc.with_timezone(&bogota_offset()).date_naive()
}

/// Quotes are valid for three calendar days after creation.
pub const QUOTE_VALIDITY_DAYS: u64 = 3;

/// Whole days left in the validity window, comparing calendar dates only
/// (time of day is ignored). Zero or negative means expired.
pub fn validity_days_remaining(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let expires = local_date(created_at) + Days::new(QUOTE_VALIDITY_DAYS);
    (expires - local_date(now)).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn formats_in_spanish_bogota_time() {
        // 2026-01-05 19:03:22 UTC is 14:03:22 on Monday in Bogotá
        let s = spanish_local_datetime(utc(2026, 1, 5, 19, 3, 22));
        assert_eq!(s, "lunes, enero 5 2026 14:03:22");
    }

    #[test]
    fn utc_midnight_rolls_back_a_day() {
        // 01:30 UTC on a Sunday is still Saturday evening in Bogotá
        let s = spanish_local_datetime(utc(2026, 3, 1, 1, 30, 0));
        assert!(s.starts_with("sábado, febrero 28 2026"));
    }

    #[test]
    fn validity_window_boundaries() {
        let created = utc(2026, 6, 10, 15, 0, 0);
        assert_eq!(validity_days_remaining(created, created), 3);
        assert_eq!(validity_days_remaining(created, utc(2026, 6, 12, 9, 0, 0)), 1);
        // day 3: window exhausted
        assert_eq!(validity_days_remaining(created, utc(2026, 6, 13, 9, 0, 0)), 0);
        assert_eq!(
            validity_days_remaining(created, utc(2026, 6, 20, 9, 0, 0)),
            -7
        );
    }

    #[test]
    fn time_of_day_is_ignored() {
        // created late at night, checked early morning: still whole-day math
        let created = utc(2026, 6, 11, 4, 59, 0); // 23:59 June 10 in Bogotá
        let now = utc(2026, 6, 11, 5, 1, 0); // 00:01 June 11 in Bogotá
        assert_eq!(validity_days_remaining(created, now), 2);
    }
}
