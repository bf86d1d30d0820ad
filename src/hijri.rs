use crate::consts::{DEFAULT_HIJRI_PATTERN, HIJRI_ERA_MARKER, MAX_HIJRI_DAY, MIN_DAY};
use crate::error::InvalidDateError;
use crate::types::{HijriMonth, Locale};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A date in the Hijri calendar.
///
/// Month and day are range checked on construction; whether the day exists in
/// that particular month depends on the algorithm and is not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "RawHijriDate")]
pub struct HijriDate {
    year: i32,
    month: HijriMonth,
    day: u32,
}

#[derive(Deserialize)]
struct RawHijriDate {
    year: i32,
    month: u32,
    day: u32,
}

impl TryFrom<RawHijriDate> for HijriDate {
    type Error = InvalidDateError;

    fn try_from(raw: RawHijriDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl HijriDate {
    /// Creates a new Hijri date
    ///
    /// # Errors
    /// Returns `InvalidDateError::Hijri` if the month is outside `1..=12` or
    /// the day is outside `1..=30`.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, InvalidDateError> {
        let month_name =
            HijriMonth::from_month(month).ok_or(InvalidDateError::hijri(year, month, day))?;
        if !(MIN_DAY..=MAX_HIJRI_DAY).contains(&day) {
            return Err(InvalidDateError::hijri(year, month, day));
        }
        Ok(Self {
            year,
            month: month_name,
            day,
        })
    }

    /// Builds a date from components an algorithm has already resolved.
    pub(crate) fn from_resolved(year: i32, month: HijriMonth, day: u32) -> Self {
        debug_assert!((MIN_DAY..=MAX_HIJRI_DAY).contains(&day));
        Self { year, month, day }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the 1-based month number
    pub const fn month(&self) -> u32 {
        self.month.number()
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    pub const fn month_name(&self) -> HijriMonth {
        self.month
    }

    /// Formats the date by substituting pattern characters:
    /// `d` day, `F` localized month name, `Y` year, `H` the Hijri era marker.
    /// Every other character is copied as is.
    pub fn format(&self, pattern: &str, locale: Locale) -> String {
        let mut out = String::with_capacity(pattern.len() + 16);
        for c in pattern.chars() {
            match c {
                'd' => out.push_str(&self.day.to_string()),
                'F' => out.push_str(self.month.name(locale)),
                'Y' => out.push_str(&self.year.to_string()),
                'H' => out.push_str(HIJRI_ERA_MARKER),
                other => out.push(other),
            }
        }
        out
    }

    /// Converts to columns: (year, month, day)
    pub const fn to_columns(&self) -> (i32, u32, u32) {
        (self.year, self.month.number(), self.day)
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_HIJRI_PATTERN, Locale::default()))
    }
}

impl Serialize for HijriDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("HijriDate", 4)?;
        state.serialize_field("year", &self.year)?;
        state.serialize_field("month", &self.month.number())?;
        state.serialize_field("day", &self.day)?;
        state.serialize_field("month_name", self.month.indonesian_name())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let date = HijriDate::new(1446, 7, 4).unwrap();
        assert_eq!(date.year(), 1446);
        assert_eq!(date.month(), 7);
        assert_eq!(date.day(), 4);
        assert_eq!(date.month_name(), HijriMonth::Rajab);
        assert_eq!(date.to_columns(), (1446, 7, 4));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        for (month, day) in [(0, 1), (13, 1), (1, 0), (1, 31)] {
            let result = HijriDate::new(1446, month, day);
            assert!(
                matches!(result, Err(InvalidDateError::Hijri { .. })),
                "{month}/{day} should be rejected"
            );
        }
        assert!(HijriDate::new(1446, 12, 30).is_ok());
    }

    #[test]
    fn test_format_default() {
        let date = HijriDate::new(1446, 7, 4).unwrap();
        assert_eq!(date.to_string(), "4 Rajab 1446 H");
        assert_eq!(date.format("d F Y H", Locale::Indonesian), "4 Rajab 1446 H");
    }

    #[test]
    fn test_format_locales() {
        let date = HijriDate::new(1445, 6, 19).unwrap();
        assert_eq!(
            date.format("d F Y H", Locale::Indonesian),
            "19 Jumadil Akhir 1445 H"
        );
        assert_eq!(
            date.format("d F Y", Locale::English),
            "19 Jumada al-Akhirah 1445"
        );
        let arabic = date.format("d F Y", Locale::Arabic);
        assert!(arabic.contains("جُمَادَىٰ ٱلثَّانِيَة"));
    }

    #[test]
    fn test_format_keeps_month_name_letters() {
        // English name contains an `H`, which must not be substituted again
        let date = HijriDate::new(1445, 12, 24).unwrap();
        assert_eq!(
            date.format("d F Y H", Locale::English),
            "24 Dhu al-Hijjah 1445 H"
        );
        assert_eq!(date.format("Y/d", Locale::Indonesian), "1445/24");
    }

    #[test]
    fn test_ordering() {
        let a = HijriDate::new(1445, 12, 29).unwrap();
        let b = HijriDate::new(1446, 1, 1).unwrap();
        let c = HijriDate::new(1446, 1, 2).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_serde() {
        let date = HijriDate::new(1446, 9, 1).unwrap();
        let json = serde_json::to_value(date).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "year": 1446,
                "month": 9,
                "day": 1,
                "month_name": "Ramadan",
            })
        );
        let parsed: HijriDate = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_serde_validation() {
        let json = r#"{"year": 1446, "month": 13, "day": 1}"#;
        assert!(serde_json::from_str::<HijriDate>(json).is_err());

        let json = r#"{"year": 1446, "month": 1, "day": 31}"#;
        assert!(serde_json::from_str::<HijriDate>(json).is_err());
    }
}
