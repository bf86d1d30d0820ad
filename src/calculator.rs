//! Weton, Pasaran and Neptu calculators.
//!
//! The Pasaran cycle runs independently of the Gregorian week. It is located
//! by counting whole days from a reference date known to be Kliwon, which is
//! why no Julian-day or Hijri arithmetic is involved here.

use crate::consts::{PASARAN_CYCLE, PASARAN_EPOCH, PASARAN_EPOCH_VALUE};
use crate::javanese::Weton;
use crate::types::{JavaneseDay, PasaranDay};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasaranCalculator;

impl PasaranCalculator {
    pub fn calculate(&self, date: NaiveDate) -> PasaranDay {
        let (year, month, day) = PASARAN_EPOCH;
        let days_since_epoch = NaiveDate::from_ymd_opt(year, month, day)
            .map_or(0, |epoch| (date - epoch).num_days());
        PasaranDay::from_day_number(Self::cycle_position(days_since_epoch))
    }

    /// 1-based position in the five-day cycle for a day offset from the
    /// Kliwon reference date. Offsets before the reference wrap backwards.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn cycle_position(days_since_epoch: i64) -> u32 {
        let index = ((days_since_epoch % PASARAN_CYCLE) + PASARAN_EPOCH_VALUE) % PASARAN_CYCLE;
        if index == 0 {
            PASARAN_CYCLE as u32
        } else {
            index as u32
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WetonCalculator {
    pasaran: PasaranCalculator,
}

impl WetonCalculator {
    pub const fn new() -> Self {
        Self {
            pasaran: PasaranCalculator,
        }
    }

    pub fn calculate(&self, date: NaiveDate) -> Weton {
        let day = JavaneseDay::from(date.weekday());
        let pasaran = self.pasaran.calculate(date);
        Weton::new(day, pasaran)
    }
}

/// Traditional reading of a Neptu value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NeptuInterpretation {
    /// 9 and below
    Sri,
    /// 10 to 12
    Lungguh,
    /// 13 to 15
    Lara,
    /// 16 to 18
    Pati,
}

impl NeptuInterpretation {
    /// Classifies a Neptu value.
    ///
    /// # Panics
    /// Neptu above 18 cannot come from a valid [`Weton`]; passing one panics.
    pub fn from_neptu(neptu: u8) -> Self {
        match neptu {
            0..=9 => Self::Sri,
            10..=12 => Self::Lungguh,
            13..=15 => Self::Lara,
            16..=18 => Self::Pati,
            _ => unreachable!("neptu {neptu} exceeds the largest day and pasaran weights"),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sri => "Sri (Makmur/Prosperous)",
            Self::Lungguh => "Lungguh (Tenang/Calm)",
            Self::Lara => "Lara (Sengsara/Suffering)",
            Self::Pati => "Pati (Kematian/Death)",
        }
    }
}

impl fmt::Display for NeptuInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A Neptu value with its interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NeptuReading {
    pub neptu: u8,
    pub interpretation: NeptuInterpretation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeptuCalculator;

impl NeptuCalculator {
    pub const fn calculate(&self, weton: &Weton) -> u8 {
        weton.neptu()
    }

    pub fn calculate_with_interpretation(&self, weton: &Weton) -> NeptuReading {
        let neptu = self.calculate(weton);
        NeptuReading {
            neptu,
            interpretation: NeptuInterpretation::from_neptu(neptu),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_reference_date_is_kliwon() {
        let (y, m, d) = PASARAN_EPOCH;
        assert_eq!(PasaranCalculator.calculate(ymd(y, m, d)), PasaranDay::Kliwon);
        assert_eq!(PasaranCalculator.calculate(ymd(1970, 1, 3)), PasaranDay::Legi);
        assert_eq!(PasaranCalculator.calculate(ymd(1970, 1, 1)), PasaranDay::Wage);
    }

    #[test]
    fn test_cycle_position_totality() {
        for delta in -1000..=1000 {
            let position = PasaranCalculator::cycle_position(delta);
            assert!((1..=5).contains(&position), "delta {delta}");
            let next = PasaranCalculator::cycle_position(delta + 1);
            assert_eq!(next, position % 5 + 1, "delta {delta}");
        }
        assert_eq!(PasaranCalculator::cycle_position(0), 5);
        assert_eq!(PasaranCalculator::cycle_position(-1), 4);
        assert_eq!(PasaranCalculator::cycle_position(-5), 5);
        assert_eq!(PasaranCalculator::cycle_position(1), 1);
    }

    #[test]
    fn test_pasaran_advances_daily_across_reference() {
        let mut date = ymd(1960, 1, 1);
        let mut previous = PasaranCalculator.calculate(date);
        while date < ymd(1980, 1, 1) {
            date = date + Duration::days(1);
            let current = PasaranCalculator.calculate(date);
            let expected = PasaranDay::from_day_number(previous.number() + 1);
            assert_eq!(current, expected, "{date}");
            previous = current;
        }
    }

    #[test]
    fn test_weton_scenarios() {
        let calculator = WetonCalculator::new();
        let cases = [
            (ymd(2024, 1, 1), "Senin Pahing", 13),
            (ymd(2025, 1, 4), "Sabtu Legi", 14),
            (ymd(2025, 1, 1), "Rabu Pon", 14),
            (ymd(1945, 8, 17), "Jumat Legi", 11),
        ];
        for (date, weton, neptu) in cases {
            let result = calculator.calculate(date);
            assert_eq!(result.to_string(), weton, "{date}");
            assert_eq!(result.neptu(), neptu, "{date}");
        }
    }

    #[test]
    fn test_weton_repeats_every_35_days() {
        let calculator = WetonCalculator::new();
        let start = ymd(1899, 1, 1);
        for offset in 0..400 {
            let date = start + Duration::days(offset);
            assert_eq!(
                calculator.calculate(date),
                calculator.calculate(date + Duration::days(35))
            );
        }
    }

    #[test]
    fn test_neptu_calculation() {
        let weton = Weton::new(JavaneseDay::Sabtu, PasaranDay::Pon);
        assert_eq!(NeptuCalculator.calculate(&weton), 16);
    }

    #[test]
    fn test_neptu_interpretation_bands() {
        assert_eq!(NeptuInterpretation::from_neptu(7), NeptuInterpretation::Sri);
        assert_eq!(NeptuInterpretation::from_neptu(9), NeptuInterpretation::Sri);
        assert_eq!(NeptuInterpretation::from_neptu(10), NeptuInterpretation::Lungguh);
        assert_eq!(NeptuInterpretation::from_neptu(12), NeptuInterpretation::Lungguh);
        assert_eq!(NeptuInterpretation::from_neptu(13), NeptuInterpretation::Lara);
        assert_eq!(NeptuInterpretation::from_neptu(15), NeptuInterpretation::Lara);
        assert_eq!(NeptuInterpretation::from_neptu(16), NeptuInterpretation::Pati);
        assert_eq!(NeptuInterpretation::from_neptu(18), NeptuInterpretation::Pati);
    }

    #[test]
    fn test_every_weton_has_an_interpretation() {
        for weton in Weton::all() {
            let reading = NeptuCalculator.calculate_with_interpretation(&weton);
            assert_eq!(reading.neptu, weton.neptu());
        }
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_neptu_above_maximum_is_unreachable() {
        let _ = NeptuInterpretation::from_neptu(19);
    }

    #[test]
    fn test_reading_serialize() {
        let weton = Weton::new(JavaneseDay::Senin, PasaranDay::Pahing);
        let reading = NeptuCalculator.calculate_with_interpretation(&weton);
        assert_eq!(reading.interpretation.to_string(), "Lara (Sengsara/Suffering)");
        assert_eq!(
            serde_json::to_value(reading).unwrap(),
            serde_json::json!({"neptu": 13, "interpretation": "Lara"})
        );
    }
}
