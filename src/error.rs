//! Error type shared by the resolver, the serializer and the file writer.

use thiserror::Error;

/// Failures that abort calendar generation.
///
/// A lunar date that simply does not exist in a given year is not an error
/// here: the resolver reports it as `None`.
#[derive(Debug, Error)]
pub enum Error {
    /// The lunar year is outside [`crate::chinese::SUPPORTED_YEARS`].
    #[error("lunar year {0} out of supported range")]
    LunarYearOutOfRange(i32),

    /// The Chinese calendar rejected a date it was asked to build.
    #[error("lunisolar conversion failed: {0}")]
    Calendar(icu_calendar::CalendarError),

    /// A lunar month number outside `1..=12`.
    #[error("invalid lunar month {0}")]
    InvalidLunarMonth(u32),

    /// A Gregorian year/month/day triple that names no day.
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Gregorian year.
        year: i32,
        /// Gregorian month.
        month: i32,
        /// Day of month.
        day: i32,
    },

    /// A date before the first day [`crate::Date`] can represent.
    #[error("date {0} out of supported range")]
    DateOutOfRange(chrono::NaiveDate),

    /// The month has fewer than `ordinal` occurrences of the weekday.
    #[error("no weekday #{ordinal} in {year:04}-{month:02}")]
    WeekdayOrdinalOutOfRange {
        /// Gregorian year.
        year: i32,
        /// Gregorian month.
        month: i32,
        /// Requested ordinal, counted from 1.
        ordinal: u32,
    },

    /// Writing the output document failed.
    #[error("failed to write calendar: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand `Result` type used throughout festkalendaro.
pub type Result<T, E = Error> = std::result::Result<T, E>;
