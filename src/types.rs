use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language for month and day names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Indonesian (`id`)
    #[default]
    #[serde(rename = "id")]
    Indonesian,
    /// English (`en`)
    #[serde(rename = "en")]
    English,
    /// Arabic (`ar`)
    #[serde(rename = "ar")]
    Arabic,
    /// Javanese (`jv`)
    #[serde(rename = "jv")]
    Javanese,
}

impl Locale {
    /// Returns the two-letter language code
    pub const fn code(self) -> &'static str {
        match self {
            Self::Indonesian => "id",
            Self::English => "en",
            Self::Arabic => "ar",
            Self::Javanese => "jv",
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Indonesian),
            "en" => Ok(Self::English),
            "ar" => Ok(Self::Arabic),
            "jv" => Ok(Self::Javanese),
            _ => Err(ConfigError::UnsupportedLocale(s.to_owned())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A regional moon-sighting correction guaranteed to be in `-1..=1` days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub struct Adjustment(i8);

impl Adjustment {
    pub const NONE: Self = Self(0);
    pub const MINUS_ONE: Self = Self(-1);
    pub const PLUS_ONE: Self = Self(1);

    /// Creates a new Adjustment, validating that it's within `-1..=1`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidAdjustment` for any other value.
    pub fn new(days: i64) -> Result<Self, ConfigError> {
        match days {
            -1..=1 => i8::try_from(days)
                .map(Self)
                .map_err(|_| ConfigError::InvalidAdjustment(days)),
            _ => Err(ConfigError::InvalidAdjustment(days)),
        }
    }

    /// Returns the adjustment in days
    #[inline]
    pub const fn days(self) -> i64 {
        self.0 as i64
    }
}

impl TryFrom<i8> for Adjustment {
    type Error = ConfigError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Adjustment> for i8 {
    fn from(adjustment: Adjustment) -> Self {
        adjustment.0
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

/// The twelve months of the Hijri year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HijriMonth {
    Muharram = 1,
    Safar = 2,
    RabiulAwal = 3,
    RabiulAkhir = 4,
    JumadilAwal = 5,
    JumadilAkhir = 6,
    Rajab = 7,
    Shaban = 8,
    Ramadan = 9,
    Shawwal = 10,
    DhulQadah = 11,
    DhulHijjah = 12,
}

impl HijriMonth {
    pub const ALL: [Self; 12] = [
        Self::Muharram,
        Self::Safar,
        Self::RabiulAwal,
        Self::RabiulAkhir,
        Self::JumadilAwal,
        Self::JumadilAkhir,
        Self::Rajab,
        Self::Shaban,
        Self::Ramadan,
        Self::Shawwal,
        Self::DhulQadah,
        Self::DhulHijjah,
    ];

    /// Looks up a month by its 1-based ordinal
    pub fn from_month(month: u32) -> Option<Self> {
        let index = usize::try_from(month.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    /// Returns the 1-based ordinal
    #[inline]
    pub const fn number(self) -> u32 {
        self as u32
    }

    pub const fn arabic_name(self) -> &'static str {
        match self {
            Self::Muharram => "مُحَرَّم",
            Self::Safar => "صَفَر",
            Self::RabiulAwal => "رَبِيع ٱلْأَوَّل",
            Self::RabiulAkhir => "رَبِيع ٱلثَّانِي",
            Self::JumadilAwal => "جُمَادَىٰ ٱلْأُولَىٰ",
            Self::JumadilAkhir => "جُمَادَىٰ ٱلثَّانِيَة",
            Self::Rajab => "رَجَب",
            Self::Shaban => "شَعْبَان",
            Self::Ramadan => "رَمَضَان",
            Self::Shawwal => "شَوَّال",
            Self::DhulQadah => "ذُو ٱلْقَعْدَة",
            Self::DhulHijjah => "ذُو ٱلْحِجَّة",
        }
    }

    pub const fn indonesian_name(self) -> &'static str {
        match self {
            Self::Muharram => "Muharram",
            Self::Safar => "Safar",
            Self::RabiulAwal => "Rabiul Awal",
            Self::RabiulAkhir => "Rabiul Akhir",
            Self::JumadilAwal => "Jumadil Awal",
            Self::JumadilAkhir => "Jumadil Akhir",
            Self::Rajab => "Rajab",
            Self::Shaban => "Syakban",
            Self::Ramadan => "Ramadan",
            Self::Shawwal => "Syawal",
            Self::DhulQadah => "Dzulkaidah",
            Self::DhulHijjah => "Dzulhijah",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Muharram => "Muharram",
            Self::Safar => "Safar",
            Self::RabiulAwal => "Rabi' al-Awwal",
            Self::RabiulAkhir => "Rabi' al-Akhir",
            Self::JumadilAwal => "Jumada al-Ula",
            Self::JumadilAkhir => "Jumada al-Akhirah",
            Self::Rajab => "Rajab",
            Self::Shaban => "Sha'ban",
            Self::Ramadan => "Ramadan",
            Self::Shawwal => "Shawwal",
            Self::DhulQadah => "Dhu al-Qa'dah",
            Self::DhulHijjah => "Dhu al-Hijjah",
        }
    }

    /// Month name for a locale. There is no Javanese table; it uses Indonesian.
    pub const fn name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Arabic => self.arabic_name(),
            Locale::English => self.english_name(),
            Locale::Indonesian | Locale::Javanese => self.indonesian_name(),
        }
    }
}

impl fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.indonesian_name())
    }
}

/// The seven-day Javanese week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JavaneseDay {
    Senin = 1,
    Selasa = 2,
    Rabu = 3,
    Kamis = 4,
    Jumat = 5,
    Sabtu = 6,
    Minggu = 7,
}

impl JavaneseDay {
    pub const ALL: [Self; 7] = [
        Self::Senin,
        Self::Selasa,
        Self::Rabu,
        Self::Kamis,
        Self::Jumat,
        Self::Sabtu,
        Self::Minggu,
    ];

    /// Looks up a day by ISO weekday (1 = Monday … 7 = Sunday). 0 is also Sunday.
    pub const fn from_day_of_week(day_of_week: u8) -> Option<Self> {
        match day_of_week {
            1 => Some(Self::Senin),
            2 => Some(Self::Selasa),
            3 => Some(Self::Rabu),
            4 => Some(Self::Kamis),
            5 => Some(Self::Jumat),
            6 => Some(Self::Sabtu),
            0 | 7 => Some(Self::Minggu),
            _ => None,
        }
    }

    /// Neptu weight
    pub const fn neptu(self) -> u8 {
        match self {
            Self::Senin => 4,
            Self::Selasa => 3,
            Self::Rabu => 7,
            Self::Kamis => 8,
            Self::Jumat => 6,
            Self::Sabtu => 9,
            Self::Minggu => 5,
        }
    }

    pub const fn indonesian_name(self) -> &'static str {
        match self {
            Self::Senin => "Senin",
            Self::Selasa => "Selasa",
            Self::Rabu => "Rabu",
            Self::Kamis => "Kamis",
            Self::Jumat => "Jumat",
            Self::Sabtu => "Sabtu",
            Self::Minggu => "Minggu",
        }
    }

    pub const fn javanese_name(self) -> &'static str {
        match self {
            Self::Senin => "Senén",
            Self::Selasa => "Selasa",
            Self::Rabu => "Rebo",
            Self::Kamis => "Kemis",
            Self::Jumat => "Jumungah",
            Self::Sabtu => "Setu",
            Self::Minggu => "Ngahad",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Senin => "Monday",
            Self::Selasa => "Tuesday",
            Self::Rabu => "Wednesday",
            Self::Kamis => "Thursday",
            Self::Jumat => "Friday",
            Self::Sabtu => "Saturday",
            Self::Minggu => "Sunday",
        }
    }

    /// Day name for a locale. There is no Arabic table; it uses Indonesian.
    pub const fn name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Javanese => self.javanese_name(),
            Locale::English => self.english_name(),
            Locale::Indonesian | Locale::Arabic => self.indonesian_name(),
        }
    }
}

impl From<chrono::Weekday> for JavaneseDay {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Self::Senin,
            chrono::Weekday::Tue => Self::Selasa,
            chrono::Weekday::Wed => Self::Rabu,
            chrono::Weekday::Thu => Self::Kamis,
            chrono::Weekday::Fri => Self::Jumat,
            chrono::Weekday::Sat => Self::Sabtu,
            chrono::Weekday::Sun => Self::Minggu,
        }
    }
}

impl fmt::Display for JavaneseDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.indonesian_name())
    }
}

/// The five-day Pasaran market week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PasaranDay {
    Legi = 1,
    Pahing = 2,
    Pon = 3,
    Wage = 4,
    Kliwon = 5,
}

impl PasaranDay {
    pub const ALL: [Self; 5] = [
        Self::Legi,
        Self::Pahing,
        Self::Pon,
        Self::Wage,
        Self::Kliwon,
    ];

    /// Looks up a Pasaran by 1-based cycle position. Positions past 5 wrap,
    /// so 6 is Legi again; 0 is treated as 5 (Kliwon).
    pub const fn from_day_number(day_number: u32) -> Self {
        match day_number % 5 {
            1 => Self::Legi,
            2 => Self::Pahing,
            3 => Self::Pon,
            4 => Self::Wage,
            _ => Self::Kliwon,
        }
    }

    /// Returns the 1-based cycle position
    #[inline]
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// Neptu weight
    pub const fn neptu(self) -> u8 {
        match self {
            Self::Legi => 5,
            Self::Pahing => 9,
            Self::Pon => 7,
            Self::Wage => 4,
            Self::Kliwon => 8,
        }
    }

    /// Pasaran names are the same in every supported language
    pub const fn name(self) -> &'static str {
        match self {
            Self::Legi => "Legi",
            Self::Pahing => "Pahing",
            Self::Pon => "Pon",
            Self::Wage => "Wage",
            Self::Kliwon => "Kliwon",
        }
    }
}

impl fmt::Display for PasaranDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
