//! Hijri conversion algorithms.
//!
//! Two strategies share the [`HijriAlgorithm`] contract:
//!
//! - [`UmAlQuraAlgorithm`]: table-backed, valid for 1318–1500 AH. Years missing
//!   from its month-length table fall back to the tabular pattern.
//! - [`TabularIslamicAlgorithm`]: the 30-year arithmetic cycle, valid for
//!   1–9999 AH. It may differ by a day from observation-based calendars.
//!
//! Both count days from the civil Hijri epoch (JDN 1948440) and apply a
//! [`Adjustment`](crate::Adjustment) of at most one day.

mod tabular;
mod um_al_qura;

pub use tabular::TabularIslamicAlgorithm;
pub use um_al_qura::UmAlQuraAlgorithm;

use crate::error::{Calendar, ConversionError};
use crate::hijri::HijriDate;
use crate::julian;
use crate::types::HijriMonth;
use chrono::NaiveDate;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

/// Converts between Gregorian dates and Hijri dates.
///
/// Implementations must be free of mutable state so a single instance can be
/// shared across threads.
pub trait HijriAlgorithm: fmt::Debug + Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &'static str;

    /// Converts a Gregorian date to a Hijri date
    fn to_hijri(&self, date: NaiveDate) -> HijriDate;

    /// Converts Hijri components to a Gregorian date
    ///
    /// # Errors
    /// Returns `ConversionError` if the year is not supported by this algorithm.
    fn to_gregorian(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate, ConversionError>;

    /// Whether `to_gregorian` accepts the given Hijri year
    fn supports(&self, hijri_year: i32) -> bool;
}

impl<A: HijriAlgorithm + ?Sized> HijriAlgorithm for Arc<A> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn to_hijri(&self, date: NaiveDate) -> HijriDate {
        (**self).to_hijri(date)
    }

    fn to_gregorian(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate, ConversionError> {
        (**self).to_gregorian(year, month, day)
    }

    fn supports(&self, hijri_year: i32) -> bool {
        (**self).supports(hijri_year)
    }
}

impl<A: HijriAlgorithm + ?Sized> HijriAlgorithm for Box<A> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn to_hijri(&self, date: NaiveDate) -> HijriDate {
        (**self).to_hijri(date)
    }

    fn to_gregorian(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate, ConversionError> {
        (**self).to_gregorian(year, month, day)
    }

    fn supports(&self, hijri_year: i32) -> bool {
        (**self).supports(hijri_year)
    }
}

// chrono keeps dates within roughly ±262_000 years, so every Hijri year derived
// from a `NaiveDate` fits in an i32.
#[allow(clippy::cast_possible_truncation)]
const fn narrow_year(year: i64) -> i32 {
    year as i32
}

/// Finds the month containing `day_of_year` (1-based) and the day within it.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn resolve_month(lengths: &[u32; 12], day_of_year: i64) -> (HijriMonth, u32) {
    let mut remaining = day_of_year;
    for (month, length) in HijriMonth::ALL.iter().zip(lengths).take(11) {
        let length = i64::from(*length);
        if remaining <= length {
            return (*month, remaining as u32);
        }
        remaining -= length;
    }
    (HijriMonth::DhulHijjah, remaining as u32)
}

/// Days in the months preceding `month`.
fn days_before_month(lengths: &[u32; 12], month: HijriMonth) -> i64 {
    lengths
        .iter()
        .take(month.number() as usize - 1)
        .map(|length| i64::from(*length))
        .sum()
}

fn unsupported_year(year: i32, range: &RangeInclusive<i32>) -> ConversionError {
    ConversionError::failed_to_convert(
        Calendar::Hijri,
        Calendar::Gregorian,
        format!(
            "Year {year} is outside supported range ({}-{} AH)",
            range.start(),
            range.end()
        ),
    )
}

fn invalid_month(month: u32) -> ConversionError {
    ConversionError::failed_to_convert(
        Calendar::Hijri,
        Calendar::Gregorian,
        format!("Month {month} is outside 1-12"),
    )
}

fn gregorian_from_jdn(jdn: i64) -> Result<NaiveDate, ConversionError> {
    julian::jdn_to_date(jdn).ok_or_else(|| {
        ConversionError::failed_to_convert(
            Calendar::Hijri,
            Calendar::Gregorian,
            format!("Julian day {jdn} is outside the representable Gregorian range"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Adjustment;

    #[test]
    fn test_resolve_month_boundaries() {
        let lengths = [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 30];
        assert_eq!(resolve_month(&lengths, 1), (HijriMonth::Muharram, 1));
        assert_eq!(resolve_month(&lengths, 30), (HijriMonth::Muharram, 30));
        assert_eq!(resolve_month(&lengths, 31), (HijriMonth::Safar, 1));
        assert_eq!(resolve_month(&lengths, 355), (HijriMonth::DhulHijjah, 30));
    }

    #[test]
    fn test_days_before_month() {
        let lengths = [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29];
        assert_eq!(days_before_month(&lengths, HijriMonth::Muharram), 0);
        assert_eq!(days_before_month(&lengths, HijriMonth::Rajab), 177);
        assert_eq!(days_before_month(&lengths, HijriMonth::DhulHijjah), 325);
    }

    #[test]
    fn test_shared_algorithm_delegates() {
        let shared: Arc<dyn HijriAlgorithm> =
            Arc::new(TabularIslamicAlgorithm::new(Adjustment::NONE));
        let date = NaiveDate::from_ymd_opt(2025, 1, 4).unwrap();
        assert_eq!(shared.name(), "tabular");
        assert_eq!(shared.to_hijri(date).to_columns(), (1446, 7, 4));
        assert_eq!(shared.to_gregorian(1446, 7, 4).unwrap(), date);
        assert!(shared.supports(1));
        assert!(!shared.supports(10_000));

        let boxed: Box<dyn HijriAlgorithm> = Box::new(UmAlQuraAlgorithm::default());
        assert_eq!(boxed.name(), "um_al_qura");
        assert!(!boxed.supports(1317));
    }

    #[test]
    fn test_strategies_agree_outside_table() {
        // Non-tabulated years use the same arithmetic in both strategies
        let table = UmAlQuraAlgorithm::default();
        let tabular = TabularIslamicAlgorithm::default();
        let mut date = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        while date < end {
            assert_eq!(table.to_hijri(date), tabular.to_hijri(date), "{date}");
            date = date + chrono::Duration::days(3);
        }
    }
}
