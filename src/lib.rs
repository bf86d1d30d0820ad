//! Gregorian, Hijri and Javanese calendar conversions.
//!
//! Hijri dates come from one of two [`HijriAlgorithm`]s: a table-backed
//! Um Al-Qura style calendar (the default) or the arithmetic Tabular Islamic
//! calendar. Javanese dates pair the weekday with the five-day Pasaran cycle to
//! give a [`Weton`] and its Neptu weight.
//!
//! ```
//! use tanggalan::Tanggalan;
//!
//! let tanggalan = Tanggalan::default();
//! let hijri = tanggalan.to_hijri("2025-01-04").unwrap();
//! assert_eq!(hijri.to_string(), "4 Rajab 1446 H");
//!
//! let weton = tanggalan.get_weton("2024-01-01").unwrap();
//! assert_eq!(weton.to_string(), "Senin Pahing");
//! assert_eq!(weton.neptu(), 13);
//! ```

mod consts;
mod prelude;

pub mod algorithm;
pub mod cache;
pub mod calculator;
pub mod config;
pub mod converter;
mod error;
mod hijri;
mod javanese;
pub mod julian;
mod types;

pub use algorithm::{HijriAlgorithm, TabularIslamicAlgorithm, UmAlQuraAlgorithm};
pub use calculator::{NeptuCalculator, NeptuInterpretation, NeptuReading, PasaranCalculator, WetonCalculator};
pub use config::{AlgorithmKind, CacheConfig, Config};
pub use consts::DEFAULT_HIJRI_PATTERN;
pub use converter::{GregorianInput, GregorianToHijriConverter, GregorianToJavaneseConverter, HijriToGregorianConverter};
pub use error::{Calendar, ConfigError, ConversionError, Error, InvalidDateError};
pub use hijri::HijriDate;
pub use javanese::{JavaneseDate, Weton};
pub use types::{Adjustment, HijriMonth, JavaneseDay, Locale, PasaranDay};

use crate::cache::Cache;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;

type SharedAlgorithm = Arc<dyn HijriAlgorithm>;

/// Entry point bundling the converters around one Hijri algorithm.
///
/// Holds no mutable state; clone it or share it behind an `Arc` freely.
#[derive(Debug, Clone)]
pub struct Tanggalan {
    hijri: GregorianToHijriConverter<SharedAlgorithm>,
    gregorian: HijriToGregorianConverter<SharedAlgorithm>,
    javanese: GregorianToJavaneseConverter,
    weton: WetonCalculator,
    locale: Locale,
}

impl Default for Tanggalan {
    fn default() -> Self {
        Self::with_adjustment(Adjustment::NONE)
    }
}

impl Tanggalan {
    /// Um Al-Qura algorithm without adjustment
    pub fn new() -> Self {
        Self::default()
    }

    /// Um Al-Qura algorithm shifted by `adjustment` days
    pub fn with_adjustment(adjustment: Adjustment) -> Self {
        Self::with_algorithm(UmAlQuraAlgorithm::new(adjustment))
    }

    /// Tabular Islamic algorithm shifted by `adjustment` days
    pub fn with_tabular_algorithm(adjustment: Adjustment) -> Self {
        Self::with_algorithm(TabularIslamicAlgorithm::new(adjustment))
    }

    /// Uses a caller-supplied algorithm for both Hijri directions
    pub fn with_algorithm(algorithm: impl HijriAlgorithm + 'static) -> Self {
        let algorithm: SharedAlgorithm = Arc::new(algorithm);
        let weton = WetonCalculator::new();
        Self {
            hijri: GregorianToHijriConverter::new(Arc::clone(&algorithm)),
            gregorian: HijriToGregorianConverter::new(algorithm),
            javanese: GregorianToJavaneseConverter::new(weton),
            weton,
            locale: Locale::default(),
        }
    }

    /// Sets the locale used by [`format_hijri`](Self::format_hijri) and
    /// [`format_weton`](Self::format_weton)
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    pub fn algorithm(&self) -> &dyn HijriAlgorithm {
        &**self.hijri.algorithm()
    }

    /// # Errors
    /// Returns `Error::InvalidDate` if `date` is a string that cannot be parsed.
    pub fn to_hijri(&self, date: impl GregorianInput) -> Result<HijriDate, Error> {
        Ok(self.hijri.convert(date)?)
    }

    /// # Errors
    /// Returns `Error::InvalidDate` if `date` is a string that cannot be parsed.
    pub fn to_javanese(&self, date: impl GregorianInput) -> Result<JavaneseDate, Error> {
        Ok(self.javanese.convert(date)?)
    }

    /// # Errors
    /// Returns `Error::InvalidDate` if `date` is a string that cannot be parsed.
    pub fn get_weton(&self, date: impl GregorianInput) -> Result<Weton, Error> {
        let date = date.into_gregorian()?;
        Ok(self.weton.calculate(date))
    }

    /// Neptu of the date's weton with its traditional reading
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` if `date` is a string that cannot be parsed.
    pub fn neptu(&self, date: impl GregorianInput) -> Result<NeptuReading, Error> {
        let weton = self.get_weton(date)?;
        Ok(NeptuCalculator.calculate_with_interpretation(&weton))
    }

    /// # Errors
    /// Returns `Error::InvalidDate` for a month outside `1..=12` or a day
    /// outside `1..=30`, and `Error::Conversion` if the algorithm does not
    /// support `year`.
    pub fn from_hijri(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate, Error> {
        self.gregorian.convert(year, month, day)
    }

    /// Hijri date rendered with [`DEFAULT_HIJRI_PATTERN`] in this instance's locale
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` if `date` is a string that cannot be parsed.
    pub fn format_hijri(&self, date: impl GregorianInput) -> Result<String, Error> {
        let hijri = self.to_hijri(date)?;
        Ok(hijri.format(DEFAULT_HIJRI_PATTERN, self.locale))
    }

    /// Weton rendered in this instance's locale
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` if `date` is a string that cannot be parsed.
    pub fn format_weton(&self, date: impl GregorianInput) -> Result<String, Error> {
        Ok(self.get_weton(date)?.format(self.locale))
    }

    /// Like [`to_hijri`](Self::to_hijri), memoized in `cache` for `ttl`.
    ///
    /// Entries are keyed by algorithm name and Gregorian date, so one cache
    /// must not be shared between instances with different adjustments.
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` if `date` is a string that cannot be parsed.
    pub fn to_hijri_cached<C>(&self, cache: &mut C, date: impl GregorianInput, ttl: Duration) -> Result<HijriDate, Error>
    where
        C: Cache<HijriDate> + ?Sized,
    {
        let date = date.into_gregorian()?;
        let key = format!("hijri:{}:{date}", self.algorithm().name());
        crate::cache::remember(cache, &key, ttl, || self.to_hijri(date))
    }
}

/// Converts with the default [`Tanggalan`].
///
/// # Errors
/// Returns `Error::InvalidDate` if `date` is a string that cannot be parsed.
pub fn to_hijri(date: impl GregorianInput) -> Result<HijriDate, Error> {
    Tanggalan::default().to_hijri(date)
}

/// Converts with the default [`Tanggalan`].
///
/// # Errors
/// Returns `Error::InvalidDate` if `date` is a string that cannot be parsed.
pub fn to_javanese(date: impl GregorianInput) -> Result<JavaneseDate, Error> {
    Tanggalan::default().to_javanese(date)
}

/// Converts with the default [`Tanggalan`].
///
/// # Errors
/// Returns `Error::InvalidDate` if `date` is a string that cannot be parsed.
pub fn get_weton(date: impl GregorianInput) -> Result<Weton, Error> {
    Tanggalan::default().get_weton(date)
}

/// Converts with the default [`Tanggalan`].
///
/// # Errors
/// See [`Tanggalan::from_hijri`].
pub fn from_hijri(year: i32, month: u32, day: u32) -> Result<NaiveDate, Error> {
    Tanggalan::default().from_hijri(year, month, day)
}
