use crate::algorithm::HijriAlgorithm;
use crate::calculator::WetonCalculator;
use crate::consts::{MAX_HIJRI_DAY, MIN_DAY, MONTHS_PER_YEAR};
use crate::error::{Error, InvalidDateError};
use crate::hijri::HijriDate;
use crate::javanese::JavaneseDate;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses a Gregorian calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, a date with a `HH:MM:SS` time, or an
/// RFC 3339 timestamp (whose local date is used).
///
/// # Errors
/// Returns `InvalidDateError::Gregorian` if none of the forms match or the
/// date does not exist.
pub fn parse_gregorian(input: &str) -> Result<NaiveDate, InvalidDateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InvalidDateError::gregorian(input));
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
                .map(|date_time| date_time.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|date_time| date_time.date_naive())
        })
        .ok_or_else(|| InvalidDateError::gregorian(input))
}

/// Anything that can be read as a Gregorian date: chrono values or strings.
pub trait GregorianInput {
    /// # Errors
    /// Returns `InvalidDateError::Gregorian` for unparseable strings.
    fn into_gregorian(self) -> Result<NaiveDate, InvalidDateError>;
}

impl GregorianInput for NaiveDate {
    fn into_gregorian(self) -> Result<NaiveDate, InvalidDateError> {
        Ok(self)
    }
}

impl GregorianInput for &NaiveDate {
    fn into_gregorian(self) -> Result<NaiveDate, InvalidDateError> {
        Ok(*self)
    }
}

impl GregorianInput for NaiveDateTime {
    fn into_gregorian(self) -> Result<NaiveDate, InvalidDateError> {
        Ok(self.date())
    }
}

impl GregorianInput for &str {
    fn into_gregorian(self) -> Result<NaiveDate, InvalidDateError> {
        parse_gregorian(self)
    }
}

impl GregorianInput for String {
    fn into_gregorian(self) -> Result<NaiveDate, InvalidDateError> {
        parse_gregorian(&self)
    }
}

impl GregorianInput for &String {
    fn into_gregorian(self) -> Result<NaiveDate, InvalidDateError> {
        parse_gregorian(self)
    }
}

/// Converts Gregorian dates to Hijri dates with the given algorithm.
#[derive(Debug, Clone, Default)]
pub struct GregorianToHijriConverter<A> {
    algorithm: A,
}

impl<A: HijriAlgorithm> GregorianToHijriConverter<A> {
    pub const fn new(algorithm: A) -> Self {
        Self { algorithm }
    }

    pub const fn algorithm(&self) -> &A {
        &self.algorithm
    }

    /// # Errors
    /// Returns `InvalidDateError` if `date` is a string that cannot be parsed.
    pub fn convert(&self, date: impl GregorianInput) -> Result<HijriDate, InvalidDateError> {
        let date = date.into_gregorian()?;
        let hijri = self.algorithm.to_hijri(date);
        debug!(
            %date,
            algorithm = self.algorithm.name(),
            year = hijri.year(),
            month = hijri.month(),
            day = hijri.day(),
            "converted gregorian to hijri"
        );
        Ok(hijri)
    }
}

/// Converts Hijri components to Gregorian dates with the given algorithm.
#[derive(Debug, Clone, Default)]
pub struct HijriToGregorianConverter<A> {
    algorithm: A,
}

impl<A: HijriAlgorithm> HijriToGregorianConverter<A> {
    pub const fn new(algorithm: A) -> Self {
        Self { algorithm }
    }

    pub const fn algorithm(&self) -> &A {
        &self.algorithm
    }

    /// # Errors
    /// Returns `Error::InvalidDate` if the month is outside `1..=12` or the day
    /// outside `1..=30`, and `Error::Conversion` if the algorithm does not
    /// support the year.
    pub fn convert(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate, Error> {
        if !(1..=MONTHS_PER_YEAR).contains(&month) || !(MIN_DAY..=MAX_HIJRI_DAY).contains(&day) {
            return Err(InvalidDateError::hijri(year, month, day).into());
        }
        let date = self.algorithm.to_gregorian(year, month, day)?;
        debug!(
            year,
            month,
            day,
            algorithm = self.algorithm.name(),
            %date,
            "converted hijri to gregorian"
        );
        Ok(date)
    }
}

/// Converts Gregorian dates to Javanese dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct GregorianToJavaneseConverter {
    weton_calculator: WetonCalculator,
}

impl GregorianToJavaneseConverter {
    pub const fn new(weton_calculator: WetonCalculator) -> Self {
        Self { weton_calculator }
    }

    /// # Errors
    /// Returns `InvalidDateError` if `date` is a string that cannot be parsed.
    pub fn convert(&self, date: impl GregorianInput) -> Result<JavaneseDate, InvalidDateError> {
        let date = date.into_gregorian()?;
        let weton = self.weton_calculator.calculate(date);
        debug!(%date, %weton, neptu = weton.neptu(), "converted gregorian to javanese");
        JavaneseDate::from_weton(date, weton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{TabularIslamicAlgorithm, UmAlQuraAlgorithm};
    use crate::types::{JavaneseDay, PasaranDay};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_gregorian_forms() {
        let expected = ymd(2025, 1, 4);
        for input in [
            "2025-01-04",
            " 2025-01-04 ",
            "2025/01/04",
            "2025-01-04 13:45:00",
            "2025-01-04T13:45:00",
            "2025-01-04T23:30:00+07:00",
        ] {
            assert_eq!(parse_gregorian(input).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_parse_gregorian_rejects_garbage() {
        for input in ["invalid-date", "", "   ", "2025-02-30", "2025-13-01", "04/01/2025x"] {
            let result = parse_gregorian(input);
            assert!(
                matches!(result, Err(InvalidDateError::Gregorian(ref s)) if s == input),
                "{input}"
            );
        }
    }

    #[test]
    fn test_gregorian_input_impls() {
        let date = ymd(2024, 2, 29);
        assert_eq!(date.into_gregorian().unwrap(), date);
        assert_eq!((&date).into_gregorian().unwrap(), date);
        assert_eq!("2024-02-29".into_gregorian().unwrap(), date);
        assert_eq!(String::from("2024-02-29").into_gregorian().unwrap(), date);
        let owned = String::from("2024-02-29");
        assert_eq!((&owned).into_gregorian().unwrap(), date);
        let date_time = date.and_hms_opt(8, 0, 0).unwrap();
        assert_eq!(date_time.into_gregorian().unwrap(), date);
    }

    #[test]
    fn test_gregorian_to_hijri() {
        let converter = GregorianToHijriConverter::new(UmAlQuraAlgorithm::default());
        let hijri = converter.convert("2025-01-04").unwrap();
        assert_eq!(hijri.to_columns(), (1446, 7, 4));
        assert_eq!(hijri.to_string(), "4 Rajab 1446 H");

        let hijri = converter.convert(ymd(2025, 1, 4)).unwrap();
        assert_eq!(hijri.year(), 1446);
        assert_eq!(hijri.month(), 7);
    }

    #[test]
    fn test_gregorian_to_hijri_invalid_string() {
        let converter = GregorianToHijriConverter::new(UmAlQuraAlgorithm::default());
        let result = converter.convert("invalid-date");
        assert!(matches!(result, Err(InvalidDateError::Gregorian(_))));
    }

    #[test]
    fn test_hijri_to_gregorian() {
        let converter = HijriToGregorianConverter::new(UmAlQuraAlgorithm::default());
        assert_eq!(converter.convert(1446, 7, 4).unwrap(), ymd(2025, 1, 4));
    }

    #[test]
    fn test_hijri_to_gregorian_structural_check() {
        let converter = HijriToGregorianConverter::new(TabularIslamicAlgorithm::default());
        for (month, day) in [(0, 1), (13, 1), (1, 0), (1, 31)] {
            let result = converter.convert(1446, month, day);
            assert!(
                matches!(result, Err(Error::InvalidDate(InvalidDateError::Hijri { .. }))),
                "{month}/{day}"
            );
        }
    }

    #[test]
    fn test_hijri_to_gregorian_unsupported_year() {
        let converter = HijriToGregorianConverter::new(UmAlQuraAlgorithm::default());
        let result = converter.convert(1600, 1, 1);
        match result {
            Err(Error::Conversion(err)) => {
                assert!(err.to_string().contains("1600"));
                assert!(err.to_string().starts_with("Failed to convert from Hijri to Gregorian"));
            }
            other => panic!("expected conversion error, got {other:?}"),
        }

        // Structural check runs before the range check
        let result = converter.convert(1600, 13, 1);
        assert!(matches!(result, Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_gregorian_to_javanese() {
        let converter = GregorianToJavaneseConverter::default();
        let javanese = converter.convert("2024-01-01").unwrap();
        assert_eq!(javanese.gregorian_date(), ymd(2024, 1, 1));
        assert_eq!(javanese.day(), JavaneseDay::Senin);
        assert_eq!(javanese.pasaran(), PasaranDay::Pahing);
        assert_eq!(javanese.neptu(), 13);

        assert!(converter.convert("not a date").is_err());
    }
}
