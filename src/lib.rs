//! Generates an iCalendar file of festivals: fixed Gregorian dates, floating
//! weekdays, and days of the Chinese lunisolar calendar.
//!
//! Gregorian festivals are written once with a yearly recurrence rule.
//! iCalendar has no rule for lunisolar cycles, so those are converted year by
//! year over a five-year window.
//!
//! # Examples
//!
//! A whole calendar:
//!
//! ```
//! use chrono::Utc;
//! use festkalendaro::{Config, Date, generate_calendar};
//!
//! let today = Date::from_gregorian(2024, 6, 1).unwrap();
//! let calendar = generate_calendar(&Config::default(), today, &Utc::now()).unwrap();
//!
//! // 8 fixed and 3 floating festivals, 12 lunisolar ones for 5 years
//! assert_eq!(71, calendar.records.len());
//! assert!(calendar.to_string().starts_with("BEGIN:VCALENDAR\r\n"));
//! ```
//!
//! Single lunisolar dates:
//!
//! ```
//! use festkalendaro::resolve::{resolve_lunisolar, resolve_new_years_eve};
//!
//! let mid_autumn = resolve_lunisolar(2024, 8, 15).unwrap().unwrap();
//! assert_eq!("2024-09-17", mid_autumn.iso_gregorian());
//!
//! // 臘月 of 2024 has only 29 days
//! let eve = resolve_new_years_eve(2024).unwrap().unwrap();
//! assert_eq!("2025-01-28", eve.iso_gregorian());
//! ```

pub mod catalog;
pub mod chinese;
pub mod config;
pub mod date;
pub mod error;
pub mod generate;
pub mod ics;
pub mod resolve;

pub use config::Config;
pub use date::Date;
pub use error::{Error, Result};
pub use generate::{generate_calendar, generate_calendar_for, run, write_calendar};
