//! Compiled-in settings of the generator.

use std::path::PathBuf;

use crate::ics::CalendarEnvelope;

/// Everything about a run that is not a holiday definition.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the calendar is written, relative to the working directory.
    pub output_path: PathBuf,
    /// Gregorian year the recurring events start in.
    pub anchor_year: i32,
    /// Number of years, starting with the current one, lunisolar holidays
    /// are expanded for.
    pub years_covered: i32,
    pub envelope: CalendarEnvelope,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("buyudaren_calendar.ics"),
            anchor_year: 2024,
            years_covered: 5,
            envelope: CalendarEnvelope {
                name: "捕鱼达人日历".to_owned(),
                product_id: "-//Kui Calendar//Auto Generated//CN".to_owned(),
                color: "#1BADF8".to_owned(),
            },
        }
    }
}
