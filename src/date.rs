//! Calendar-independant date.

use std::ops::{Add, Sub};

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if `month` or `day` does not name a day of that year,
    /// or if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use festkalendaro::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert_eq!(None, Date::from_gregorian(2023, 2, 29));
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        let month = u32::try_from(month).ok()?;
        let day = u32::try_from(day).ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        Self::try_from(date).ok()
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use festkalendaro::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = i32::try_from(self.jdn).expect("jdn >= 2**31 not supported");
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year, month, day)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use festkalendaro::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }
    /// Formats the date in ISO 8601 basic format, as used by iCalendar
    /// `DATE` values.
    ///
    /// # Example
    ///
    /// ```
    /// use festkalendaro::Date;
    ///
    /// let date = Date::from_gregorian(2024, 2, 10).unwrap();
    /// assert_eq!("20240210", date.basic_gregorian());
    /// ```
    pub fn basic_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}{:02}{:02}", y, m, d)
    }

    /// Returns today's date in the local timezone of the system clock.
    ///
    /// # Errors
    ///
    /// [`Error::DateOutOfRange`] if the clock reads a date before January 1,
    /// 4713 BC.
    pub fn today() -> Result<Self> {
        chrono::Local::now().date_naive().try_into()
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self> {
        u32::try_from(date.num_days_from_ce() + 1721425)
            .map(Date::from_jdn)
            .map_err(|_| Error::DateOutOfRange(date))
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(if rhs >= 0 {
            self.jdn + rhs as u32
        } else {
            self.jdn - rhs.wrapping_neg() as u32
        })
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}
