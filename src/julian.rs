//! Julian Day Number arithmetic for the proleptic Gregorian calendar.
//!
//! All divisions are floor divisions, so the formulas hold for dates before
//! the common era as well. No validation happens here: `gregorian_to_jdn`
//! accepts any triple, including month 13.

use chrono::{Datelike, NaiveDate};

/// Converts a proleptic Gregorian date to its Julian Day Number.
pub const fn gregorian_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Converts a Julian Day Number back to `(year, month, day)`.
pub const fn jdn_to_gregorian(jdn: i64) -> (i64, i64, i64) {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);

    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);

    (year, month, day)
}

/// Julian Day Number of a calendar date.
pub fn date_to_jdn(date: NaiveDate) -> i64 {
    gregorian_to_jdn(
        i64::from(date.year()),
        i64::from(date.month()),
        i64::from(date.day()),
    )
}

/// Calendar date of a Julian Day Number, `None` if chrono cannot represent it.
pub fn jdn_to_date(jdn: i64) -> Option<NaiveDate> {
    let (year, month, day) = jdn_to_gregorian(jdn);
    NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )
}
