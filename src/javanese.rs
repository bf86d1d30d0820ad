use crate::error::InvalidDateError;
use crate::types::{JavaneseDay, Locale, PasaranDay};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use serde::ser::SerializeStruct;
use std::fmt;

/// The pairing of a weekday with a Pasaran day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Weton {
    day: JavaneseDay,
    pasaran: PasaranDay,
}

impl Weton {
    pub const fn new(day: JavaneseDay, pasaran: PasaranDay) -> Self {
        Self { day, pasaran }
    }

    pub const fn day(&self) -> JavaneseDay {
        self.day
    }

    pub const fn pasaran(&self) -> PasaranDay {
        self.pasaran
    }

    /// Sum of the day and Pasaran weights, always within `7..=18`
    pub const fn neptu(&self) -> u8 {
        self.day.neptu() + self.pasaran.neptu()
    }

    /// `"{day name} {pasaran name}"` in the given locale
    pub fn format(&self, locale: Locale) -> String {
        format!("{} {}", self.day.name(locale), self.pasaran.name())
    }

    /// Every weton of the 35-day cycle
    pub fn all() -> impl Iterator<Item = Self> {
        JavaneseDay::ALL
            .into_iter()
            .flat_map(|day| PasaranDay::ALL.into_iter().map(move |p| Self::new(day, p)))
    }
}

impl fmt::Display for Weton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Locale::default()))
    }
}

impl Serialize for Weton {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Weton", 4)?;
        state.serialize_field("day", self.day.indonesian_name())?;
        state.serialize_field("day_javanese", self.day.javanese_name())?;
        state.serialize_field("pasaran", self.pasaran.name())?;
        state.serialize_field("neptu", &self.neptu())?;
        state.end()
    }
}

/// A Gregorian date together with its Javanese weton.
///
/// The weekday part of the weton always matches the Gregorian weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JavaneseDate {
    gregorian_date: NaiveDate,
    weton: Weton,
}

impl JavaneseDate {
    /// Creates a Javanese date
    ///
    /// # Errors
    /// Returns `InvalidDateError::Javanese` if `day` is not the weekday of
    /// `gregorian_date`.
    pub fn new(
        gregorian_date: NaiveDate,
        day: JavaneseDay,
        pasaran: PasaranDay,
    ) -> Result<Self, InvalidDateError> {
        Self::from_weton(gregorian_date, Weton::new(day, pasaran))
    }

    /// Creates a Javanese date from an existing weton
    ///
    /// # Errors
    /// Returns `InvalidDateError::Javanese` if the weton's day is not the
    /// weekday of `gregorian_date`.
    pub fn from_weton(gregorian_date: NaiveDate, weton: Weton) -> Result<Self, InvalidDateError> {
        let expected = JavaneseDay::from(gregorian_date.weekday());
        if weton.day() != expected {
            return Err(InvalidDateError::Javanese(format!(
                "{gregorian_date} is {expected}, not {}",
                weton.day()
            )));
        }
        Ok(Self {
            gregorian_date,
            weton,
        })
    }

    pub const fn gregorian_date(&self) -> NaiveDate {
        self.gregorian_date
    }

    pub const fn weton(&self) -> Weton {
        self.weton
    }

    pub const fn day(&self) -> JavaneseDay {
        self.weton.day()
    }

    pub const fn pasaran(&self) -> PasaranDay {
        self.weton.pasaran()
    }

    pub const fn neptu(&self) -> u8 {
        self.weton.neptu()
    }

    pub fn format(&self, locale: Locale) -> String {
        self.weton.format(locale)
    }
}

impl fmt::Display for JavaneseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.weton, f)
    }
}

impl Serialize for JavaneseDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("JavaneseDate", 5)?;
        state.serialize_field("gregorian_date", &self.gregorian_date.format("%Y-%m-%d").to_string())?;
        state.serialize_field("weton", &self.weton.to_string())?;
        state.serialize_field("day", self.day().indonesian_name())?;
        state.serialize_field("pasaran", self.pasaran().name())?;
        state.serialize_field("neptu", &self.neptu())?;
        state.end()
    }
}
