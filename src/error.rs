use crate::prelude::*;

/// Calendar systems named in conversion failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Calendar {
    Gregorian,
    Hijri,
    Javanese,
}

/// Malformed input: an unparseable Gregorian date or out-of-range components.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InvalidDateError {
    #[display(fmt = "Invalid Gregorian date: {_0}")]
    Gregorian(String),
    #[display(fmt = "Invalid Hijri date: {year}-{month}-{day}")]
    Hijri { year: i32, month: u32, day: u32 },
    #[display(fmt = "Invalid Javanese date: {_0}")]
    Javanese(String),
}

impl std::error::Error for InvalidDateError {}

impl InvalidDateError {
    pub(crate) fn gregorian(input: impl Into<String>) -> Self {
        Self::Gregorian(input.into())
    }

    pub(crate) const fn hijri(year: i32, month: u32, day: u32) -> Self {
        Self::Hijri { year, month, day }
    }
}

/// A structurally valid date the selected algorithm cannot convert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to convert from {from} to {to}: {reason}")]
pub struct ConversionError {
    pub from: Calendar,
    pub to: Calendar,
    pub reason: String,
}

impl ConversionError {
    pub fn failed_to_convert(from: Calendar, to: Calendar, reason: impl Into<String>) -> Self {
        Self {
            from,
            to,
            reason: reason.into(),
        }
    }
}

/// Error type for the public conversion API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidDate(#[from] InvalidDateError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Error type for configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Adjustment outside `-1..=1`.
    #[error("Invalid Hijri adjustment: {0} (must be -1, 0 or 1)")]
    InvalidAdjustment(i64),

    /// Unknown locale code.
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Unknown algorithm name.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// A value that could not be parsed for the given key.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_message() {
        let err = ConversionError::failed_to_convert(
            Calendar::Hijri,
            Calendar::Gregorian,
            "Year 1600 is outside supported range (1318-1500 AH)",
        );
        assert_eq!(
            err.to_string(),
            "Failed to convert from Hijri to Gregorian: Year 1600 is outside supported range (1318-1500 AH)"
        );
    }

    #[test]
    fn test_invalid_date_messages() {
        assert_eq!(
            InvalidDateError::gregorian("invalid-date").to_string(),
            "Invalid Gregorian date: invalid-date"
        );
        assert_eq!(
            InvalidDateError::hijri(1446, 13, 1).to_string(),
            "Invalid Hijri date: 1446-13-1"
        );
    }

    #[test]
    fn test_error_is_transparent() {
        let err: Error = InvalidDateError::hijri(1446, 0, 1).into();
        assert_eq!(err.to_string(), "Invalid Hijri date: 1446-0-1");
        assert!(matches!(err, Error::InvalidDate(_)));

        let err: Error =
            ConversionError::failed_to_convert(Calendar::Hijri, Calendar::Gregorian, "nope").into();
        assert!(matches!(err, Error::Conversion(_)));
    }
}
