use super::{
    HijriAlgorithm, days_before_month, gregorian_from_jdn, invalid_month, narrow_year,
    resolve_month, unsupported_year,
};
use crate::consts::{
    COMMON_MONTH_LENGTHS, COMMON_YEAR_DAYS, CYCLE_DAYS, CYCLE_YEARS, HIJRI_EPOCH_JDN,
    LEAP_LAST_MONTH_DAYS, LEAP_YEAR_DAYS, LEAP_YEARS_IN_CYCLE, TABULAR_MAX_YEAR,
    TABULAR_MIN_YEAR,
};
use crate::error::ConversionError;
use crate::hijri::HijriDate;
use crate::julian;
use crate::types::{Adjustment, HijriMonth};
use chrono::NaiveDate;
use std::ops::RangeInclusive;
use tracing::trace;

/// The arithmetic (tabular) Islamic calendar.
///
/// Built on a 30-year cycle of 10631 days in which 11 years have 355 days.
/// Needs no lookup data and works for any year in `1..=9999`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabularIslamicAlgorithm {
    adjustment: Adjustment,
}

impl TabularIslamicAlgorithm {
    pub const SUPPORTED_YEARS: RangeInclusive<i32> = TABULAR_MIN_YEAR..=TABULAR_MAX_YEAR;

    pub const fn new(adjustment: Adjustment) -> Self {
        Self { adjustment }
    }

    pub const fn adjustment(&self) -> Adjustment {
        self.adjustment
    }
}

/// Whether the year has 355 days in the tabular scheme.
pub(crate) fn is_leap_year(year: i64) -> bool {
    LEAP_YEARS_IN_CYCLE.contains(&year.rem_euclid(CYCLE_YEARS))
}

pub(crate) fn year_length(year: i64) -> i64 {
    if is_leap_year(year) {
        LEAP_YEAR_DAYS
    } else {
        COMMON_YEAR_DAYS
    }
}

pub(crate) fn month_lengths(year: i64) -> [u32; 12] {
    let mut lengths = COMMON_MONTH_LENGTHS;
    if is_leap_year(year) {
        lengths[11] = LEAP_LAST_MONTH_DAYS;
    }
    lengths
}

/// Days from the Hijri epoch to 1 Muharram of `year`.
pub(crate) fn days_before_year(year: i64) -> i64 {
    let complete_years = year - 1;
    let cycles = complete_years.div_euclid(CYCLE_YEARS);
    let years_in_cycle = complete_years.rem_euclid(CYCLE_YEARS);

    cycles * CYCLE_DAYS + (1..=years_in_cycle).map(year_length).sum::<i64>()
}

/// Finds the year position (1..=30) holding `remaining` days into a cycle,
/// along with the days elapsed in the cycle before that year starts.
fn locate_year_in_cycle(remaining: i64) -> (i64, i64) {
    let mut elapsed = 0;
    for position in 1..CYCLE_YEARS {
        let length = year_length(position);
        if elapsed + length > remaining {
            return (position, elapsed);
        }
        elapsed += length;
    }
    (CYCLE_YEARS, elapsed)
}

impl HijriAlgorithm for TabularIslamicAlgorithm {
    fn name(&self) -> &'static str {
        "tabular"
    }

    fn to_hijri(&self, date: NaiveDate) -> HijriDate {
        let jdn = julian::date_to_jdn(date) + self.adjustment.days();
        let days_since_epoch = jdn - HIJRI_EPOCH_JDN;

        let cycle = days_since_epoch.div_euclid(CYCLE_DAYS);
        let remaining = days_since_epoch.rem_euclid(CYCLE_DAYS);
        let (year_in_cycle, elapsed) = locate_year_in_cycle(remaining);

        let year = CYCLE_YEARS * cycle + year_in_cycle;
        let day_of_year = remaining - elapsed + 1;
        let (month, day) = resolve_month(&month_lengths(year), day_of_year);
        trace!(jdn, cycle, year, day_of_year, "tabular year resolved");

        HijriDate::from_resolved(narrow_year(year), month, day)
    }

    fn to_gregorian(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate, ConversionError> {
        if !self.supports(year) {
            return Err(unsupported_year(year, &Self::SUPPORTED_YEARS));
        }
        let month_name = HijriMonth::from_month(month).ok_or_else(|| invalid_month(month))?;

        let year = i64::from(year);
        let days_since_epoch = days_before_year(year)
            + days_before_month(&month_lengths(year), month_name)
            + i64::from(day)
            - 1;
        let jdn = HIJRI_EPOCH_JDN + days_since_epoch - self.adjustment.days();

        gregorian_from_jdn(jdn)
    }

    fn supports(&self, hijri_year: i32) -> bool {
        Self::SUPPORTED_YEARS.contains(&hijri_year)
    }
}
