use super::{
    HijriAlgorithm, days_before_month, gregorian_from_jdn, invalid_month, narrow_year,
    resolve_month, tabular, unsupported_year,
};
use crate::consts::{
    CYCLE_DAYS, CYCLE_YEARS, HIJRI_EPOCH_JDN, UM_AL_QURA_EPOCH_JDN, UM_AL_QURA_MAX_YEAR,
    UM_AL_QURA_MIN_YEAR,
};
use crate::error::ConversionError;
use crate::hijri::HijriDate;
use crate::julian;
use crate::types::{Adjustment, HijriMonth};
use chrono::NaiveDate;
use std::ops::RangeInclusive;
use tracing::trace;

/// Month lengths published for individual years.
///
/// Only a few years are tabulated. Every other year in the window uses the
/// tabular 30/29 pattern, so results there carry the same ±1 day uncertainty
/// as [`TabularIslamicAlgorithm`](super::TabularIslamicAlgorithm).
const MONTH_LENGTH_TABLE: [(i32, [u32; 12]); 3] = [
    (1446, [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29]),
    (1447, [30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30]),
    (1448, [29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29]),
];

/// Table-backed conversion in the style of the Saudi Um Al-Qura calendar.
///
/// Conversions to Gregorian are limited to 1318–1500 AH (1900–2077 CE).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UmAlQuraAlgorithm {
    adjustment: Adjustment,
}

impl UmAlQuraAlgorithm {
    pub const SUPPORTED_YEARS: RangeInclusive<i32> = UM_AL_QURA_MIN_YEAR..=UM_AL_QURA_MAX_YEAR;

    pub const fn new(adjustment: Adjustment) -> Self {
        Self { adjustment }
    }

    pub const fn adjustment(&self) -> Adjustment {
        self.adjustment
    }

    /// Years with published month lengths
    pub fn tabulated_years() -> impl Iterator<Item = i32> {
        MONTH_LENGTH_TABLE.iter().map(|(year, _)| *year)
    }

    /// Whether `year` uses published month lengths rather than the fallback
    pub fn is_tabulated(year: i32) -> bool {
        MONTH_LENGTH_TABLE.iter().any(|(y, _)| *y == year)
    }

    /// Month lengths for `year`, from the table when available
    pub fn month_lengths(year: i32) -> [u32; 12] {
        MONTH_LENGTH_TABLE
            .iter()
            .find(|(y, _)| *y == year)
            .map_or_else(|| tabular::month_lengths(i64::from(year)), |(_, lengths)| *lengths)
    }

    fn year_length(year: i32) -> i64 {
        Self::month_lengths(year).iter().map(|l| i64::from(*l)).sum()
    }

    /// Days from the Hijri epoch to 1 Muharram of `year`.
    ///
    /// Up to the window start this is the tabular count; later years are
    /// accumulated one by one so tabulated lengths are honoured.
    fn days_before_year(year: i32) -> i64 {
        if year <= UM_AL_QURA_MIN_YEAR {
            return tabular::days_before_year(i64::from(year));
        }
        (UM_AL_QURA_MIN_YEAR..year).fold(UM_AL_QURA_EPOCH_JDN - HIJRI_EPOCH_JDN, |days, y| {
            days + Self::year_length(y)
        })
    }
}

impl HijriAlgorithm for UmAlQuraAlgorithm {
    fn name(&self) -> &'static str {
        "um_al_qura"
    }

    fn to_hijri(&self, date: NaiveDate) -> HijriDate {
        let jdn = julian::date_to_jdn(date) + self.adjustment.days();
        let days_since_epoch = jdn - HIJRI_EPOCH_JDN;

        // Completed years at the mean length of 10631/30 days; close enough
        // that at most one step back is ever needed.
        let mut year = narrow_year((days_since_epoch * CYCLE_YEARS).div_euclid(CYCLE_DAYS));
        let mut year_start = Self::days_before_year(year);
        while year_start > days_since_epoch {
            year -= 1;
            year_start = Self::days_before_year(year);
        }
        loop {
            let length = Self::year_length(year);
            if year_start + length > days_since_epoch {
                break;
            }
            year_start += length;
            year += 1;
        }

        let day_of_year = days_since_epoch - year_start + 1;
        let (month, day) = resolve_month(&Self::month_lengths(year), day_of_year);
        trace!(
            jdn,
            year,
            day_of_year,
            tabulated = Self::is_tabulated(year),
            "um al-qura year resolved"
        );

        HijriDate::from_resolved(year, month, day)
    }

    fn to_gregorian(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate, ConversionError> {
        if !self.supports(year) {
            return Err(unsupported_year(year, &Self::SUPPORTED_YEARS));
        }
        let month_name = HijriMonth::from_month(month).ok_or_else(|| invalid_month(month))?;

        let mut jdn = UM_AL_QURA_EPOCH_JDN;
        for y in UM_AL_QURA_MIN_YEAR..year {
            jdn += Self::year_length(y);
        }
        jdn += days_before_month(&Self::month_lengths(year), month_name);
        jdn += i64::from(day) - 1;
        jdn -= self.adjustment.days();

        gregorian_from_jdn(jdn)
    }

    fn supports(&self, hijri_year: i32) -> bool {
        Self::SUPPORTED_YEARS.contains(&hijri_year)
    }
}
