/// Number of months in a Hijri year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Longest possible Hijri month, used for structural validation
pub const MAX_HIJRI_DAY: u32 = 30;

/// First day of month / first month of year
pub const MIN_DAY: u32 = 1;

/// Julian Day Number of 1 Muharram 1 AH (civil epoch, 16 July 622 Julian)
pub const HIJRI_EPOCH_JDN: i64 = 1_948_440;

/// Years in one tabular leap cycle
pub const CYCLE_YEARS: i64 = 30;

/// Days in one tabular leap cycle (19 common years + 11 leap years)
pub const CYCLE_DAYS: i64 = 10_631;

/// Days in a common Hijri year
pub const COMMON_YEAR_DAYS: i64 = 354;

/// Days in a leap Hijri year
pub const LEAP_YEAR_DAYS: i64 = 355;

/// Positions within the 30-year cycle that are leap years
pub const LEAP_YEARS_IN_CYCLE: [i64; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// Month lengths for a common year (odd months 30, even months 29)
pub const COMMON_MONTH_LENGTHS: [u32; 12] = [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29];

/// Dhu al-Hijjah gains a day in leap years
pub const LEAP_LAST_MONTH_DAYS: u32 = 30;

/// Lowest year covered by the table-backed algorithm (inclusive)
pub const UM_AL_QURA_MIN_YEAR: i32 = 1318;

/// Highest year covered by the table-backed algorithm (inclusive)
pub const UM_AL_QURA_MAX_YEAR: i32 = 1500;

/// Julian Day Number of 1 Muharram 1318 AH, the table-backed window start
pub const UM_AL_QURA_EPOCH_JDN: i64 = 2_415_141;

/// Lowest year accepted by the tabular algorithm (inclusive)
pub const TABULAR_MIN_YEAR: i32 = 1;

/// Highest year accepted by the tabular algorithm (inclusive)
pub const TABULAR_MAX_YEAR: i32 = 9999;

/// Length of the Pasaran market week
pub const PASARAN_CYCLE: i64 = 5;

/// Reference date (as year, month, day) that fell on Kliwon
pub const PASARAN_EPOCH: (i32, u32, u32) = (1970, 1, 2);

/// Cycle position of the reference date (Kliwon)
pub const PASARAN_EPOCH_VALUE: i64 = 5;

/// Default `HijriDate` format pattern
pub const DEFAULT_HIJRI_PATTERN: &str = "d F Y H";

/// Hijri era marker substituted for `H` in format patterns
pub const HIJRI_ERA_MARKER: &str = "H";

/// Default cache entry lifetime in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
