//! Turns holiday rules into concrete Gregorian dates.
//!
//! A date that does not exist in some year (a 30th day of a 29-day lunar
//! month, a fifth Sunday in a month with four) is reported as `None`. `Err`
//! is kept for input the calendar cannot handle at all.

use chrono::{NaiveDate, Weekday};

use crate::catalog::{CalendarSystem, HolidayDefinition};
use crate::chinese::LunarMonth;
use crate::date::Date;
use crate::error::{Error, Result};

/// One holiday placed on one day.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResolvedOccurrence {
    pub name: &'static str,
    pub date: Date,
    pub uid: String,
}

/// Finds the `ordinal`-th `weekday` of a Gregorian month, counting from 1.
///
/// Returns `None` if the month has fewer such weekdays, or if `month` is not
/// in `1..=12`.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use festkalendaro::resolve::resolve_floating_weekday;
///
/// let date = resolve_floating_weekday(2024, 5, Weekday::Sun, 2).unwrap();
/// assert_eq!("2024-05-12", date.iso_gregorian());
/// assert_eq!(None, resolve_floating_weekday(2024, 2, Weekday::Sun, 5));
/// ```
pub fn resolve_floating_weekday(
    year: i32,
    month: i32,
    weekday: Weekday,
    ordinal: u32,
) -> Option<Date> {
    let month = u32::try_from(month).ok()?;
    let ordinal = u8::try_from(ordinal).ok()?;
    let date = NaiveDate::from_weekday_of_month_opt(year, month, weekday, ordinal)?;
    Date::try_from(date).ok()
}

/// Converts a day of a common lunar month into its Gregorian date.
///
/// `Ok(None)` means the day does not exist in that month of that year.
///
/// # Errors
///
/// [`Error::InvalidLunarMonth`] if `lunar_month` is not in `1..=12`,
/// [`Error::LunarYearOutOfRange`] if `lunar_year` is outside
/// [`crate::chinese::SUPPORTED_YEARS`].
///
/// # Example
///
/// ```
/// use festkalendaro::resolve::resolve_lunisolar;
///
/// let date = resolve_lunisolar(2024, 8, 15).unwrap().unwrap();
/// assert_eq!("2024-09-17", date.iso_gregorian());
/// assert_eq!(None, resolve_lunisolar(2024, 12, 30).unwrap());
/// ```
pub fn resolve_lunisolar(lunar_year: i32, lunar_month: u32, lunar_day: u32) -> Result<Option<Date>> {
    Ok(LunarMonth::new(lunar_year, lunar_month)?.date_for(lunar_day))
}

/// Finds 除夕, the last day of 臘月: day 30, or day 29 when 臘月 is short.
///
/// # Example
///
/// ```
/// use festkalendaro::resolve::resolve_new_years_eve;
///
/// assert_eq!("2025-01-28", resolve_new_years_eve(2024).unwrap().unwrap().iso_gregorian());
/// assert_eq!("2030-02-02", resolve_new_years_eve(2029).unwrap().unwrap().iso_gregorian());
/// ```
pub fn resolve_new_years_eve(lunar_year: i32) -> Result<Option<Date>> {
    let month = LunarMonth::new(lunar_year, 12)?;
    Ok(month.date_for(30).or_else(|| month.date_for(29)))
}

/// Places `holiday` in `year`.
///
/// The Gregorian `year` doubles as the lunar year for lunisolar holidays, so
/// the 臘月 holidays of `year` fall in January or February of `year + 1`.
/// Lunisolar occurrences get the year appended to their UID to keep the
/// yearly instances apart.
///
/// # Errors
///
/// [`Error::InvalidDate`] for a fixed holiday that does not exist in `year`,
/// and the errors of [`resolve_lunisolar`].
pub fn resolve_occurrence(holiday: &HolidayDefinition, year: i32) -> Result<Option<ResolvedOccurrence>> {
    let (date, uid) = match holiday.rule {
        CalendarSystem::Fixed { month, day } => {
            let date = Date::from_gregorian(year, month, day).ok_or(Error::InvalidDate {
                year,
                month,
                day,
            })?;
            (Some(date), holiday.uid.to_owned())
        }
        CalendarSystem::Floating {
            month,
            ordinal,
            weekday,
        } => (
            resolve_floating_weekday(year, month, weekday, ordinal),
            holiday.uid.to_owned(),
        ),
        CalendarSystem::Lunisolar { month, day } => {
            let date = if holiday.is_new_years_eve() {
                resolve_new_years_eve(year)?
            } else {
                resolve_lunisolar(year, month, day)?
            };
            (date, format!("{}{}", holiday.uid, year))
        }
    };
    Ok(date.map(|date| ResolvedOccurrence {
        name: holiday.name,
        date,
        uid,
    }))
}
