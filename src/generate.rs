//! Builds the calendar from the catalog and writes it out.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::catalog::{self, CalendarSystem, HolidayDefinition};
use crate::config::Config;
use crate::date::Date;
use crate::error::{Error, Result};
use crate::ics::{self, CalendarDocument, RecurrenceRule};
use crate::resolve::{resolve_floating_weekday, resolve_occurrence};

/// First date in `year` matching a Gregorian recurrence rule.
///
/// # Errors
///
/// [`Error::InvalidDate`] or [`Error::WeekdayOrdinalOutOfRange`] when the
/// rule names no day of `year`.
pub fn anchor_date(rule: &RecurrenceRule, year: i32) -> Result<Date> {
    match *rule {
        RecurrenceRule::YearlyByMonthDay { month, day } => {
            Date::from_gregorian(year, month, day).ok_or(Error::InvalidDate { year, month, day })
        }
        RecurrenceRule::YearlyByNthWeekday {
            month,
            ordinal,
            weekday,
        } => resolve_floating_weekday(year, month, weekday, ordinal).ok_or(
            Error::WeekdayOrdinalOutOfRange {
                year,
                month,
                ordinal,
            },
        ),
    }
}

/// Generates the whole calendar from the built-in catalog.
///
/// See [`generate_calendar_for`].
pub fn generate_calendar(
    config: &Config,
    today: Date,
    stamp: &DateTime<Utc>,
) -> Result<CalendarDocument> {
    let holidays: Vec<_> = catalog::all().copied().collect();
    generate_calendar_for(&holidays, config, today, stamp)
}

/// Generates a calendar of `holidays`.
///
/// Gregorian holidays become one recurring event each, starting in
/// `config.anchor_year`. Lunisolar holidays become one event per year for
/// `config.years_covered` years starting with the year of `today`; a holiday
/// whose date does not exist in some year is left out for that year.
///
/// # Errors
///
/// Fails if a year of the window is outside
/// [`crate::chinese::SUPPORTED_YEARS`], or if a Gregorian rule has no date
/// in the anchor year.
pub fn generate_calendar_for(
    holidays: &[HolidayDefinition],
    config: &Config,
    today: Date,
    stamp: &DateTime<Utc>,
) -> Result<CalendarDocument> {
    let mut document = CalendarDocument::new(config.envelope.clone());

    for holiday in holidays {
        let Some(rule) = RecurrenceRule::for_system(holiday.rule) else {
            continue;
        };
        let anchor = anchor_date(&rule, config.anchor_year)?;
        document.push(ics::render_recurring_record(
            holiday.name,
            anchor,
            holiday.uid,
            &rule,
            stamp,
        ));
    }

    let lunisolar: Vec<_> = holidays
        .iter()
        .filter(|h| matches!(h.rule, CalendarSystem::Lunisolar { .. }))
        .collect();
    let first_year = today.gregorian().0;
    for year in first_year..first_year + config.years_covered {
        for holiday in &lunisolar {
            if let Some(occurrence) = resolve_occurrence(holiday, year)? {
                document.push(ics::render_occurrence_record(
                    occurrence.name,
                    occurrence.date,
                    &occurrence.uid,
                    stamp,
                ));
            }
        }
    }

    Ok(document)
}

/// Writes `document` to `path`, replacing any existing file.
pub fn write_calendar(path: &Path, document: &CalendarDocument) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write!(out, "{document}")?;
    out.flush()?;
    Ok(())
}

/// Generates the calendar for today and writes it to `config.output_path`.
pub fn run(config: &Config) -> Result<()> {
    let document = generate_calendar(config, Date::today()?, &Utc::now())?;
    write_calendar(&config.output_path, &document)
}
