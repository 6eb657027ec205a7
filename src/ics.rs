//! iCalendar (RFC 5545) output.
//!
//! Only the handful of properties the generated calendar needs: all-day
//! `VEVENT`s with an optional yearly `RRULE`, wrapped in a `VCALENDAR` with
//! the Apple and WR extension fields for display name and color.

use std::fmt;

use chrono::{DateTime, Utc, Weekday};

use crate::catalog::CalendarSystem;
use crate::date::Date;

const CRLF: &str = "\r\n";
/// Longest content line, in octets, before it gets folded.
const MAX_LINE_OCTETS: usize = 75;

/// A yearly recurrence rule.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RecurrenceRule {
    /// Every year on the same month and day.
    YearlyByMonthDay { month: i32, day: i32 },
    /// Every year on the `ordinal`-th `weekday` of `month`.
    YearlyByNthWeekday {
        month: i32,
        ordinal: u32,
        weekday: Weekday,
    },
}

impl RecurrenceRule {
    /// The rule repeating a Gregorian holiday, or `None` for lunisolar
    /// holidays, which iCalendar cannot express.
    pub fn for_system(rule: CalendarSystem) -> Option<Self> {
        match rule {
            CalendarSystem::Fixed { month, day } => Some(Self::YearlyByMonthDay { month, day }),
            CalendarSystem::Floating {
                month,
                ordinal,
                weekday,
            } => Some(Self::YearlyByNthWeekday {
                month,
                ordinal,
                weekday,
            }),
            CalendarSystem::Lunisolar { .. } => None,
        }
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::YearlyByMonthDay { month, day } => {
                write!(f, "RRULE:FREQ=YEARLY;BYMONTH={month:02};BYMONTHDAY={day:02}")
            }
            Self::YearlyByNthWeekday {
                month,
                ordinal,
                weekday,
            } => write!(
                f,
                "RRULE:FREQ=YEARLY;BYMONTH={month};BYDAY={ordinal}{}",
                weekday_code(weekday)
            ),
        }
    }
}

/// Two-letter weekday code of `BYDAY`.
pub fn weekday_code(weekday: Weekday) -> &'static str {
    use Weekday::*;
    match weekday {
        Mon => "MO",
        Tue => "TU",
        Wed => "WE",
        Thu => "TH",
        Fri => "FR",
        Sat => "SA",
        Sun => "SU",
    }
}

/// Calendar-level properties written around the events.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CalendarEnvelope {
    /// Display name (`X-WR-CALNAME`).
    pub name: String,
    /// Product identifier (`PRODID`).
    pub product_id: String,
    /// Color hint (`X-APPLE-CALENDAR-COLOR`), e.g. `#1BADF8`.
    pub color: String,
}

/// Formats a UTC time as an iCalendar `DATE-TIME` in UTC form.
pub fn format_stamp(stamp: &DateTime<Utc>) -> String {
    stamp.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Escapes a `TEXT` property value.
///
/// # Example
///
/// ```
/// use festkalendaro::ics::escape_text;
///
/// assert_eq!(r"Dinner\, drinks\; dancing", escape_text("Dinner, drinks; dancing"));
/// ```
pub fn escape_text(text: &str) -> String {
    let mut rt = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => rt += r"\\",
            ';' => rt += r"\;",
            ',' => rt += r"\,",
            '\n' => rt += r"\n",
            '\r' => {}
            _ => rt.push(ch),
        }
    }
    rt
}

/// Appends one content line, folding it at 75 octets without splitting a
/// UTF-8 sequence.
fn push_line(out: &mut String, line: &str) {
    let mut width = 0;
    let mut budget = MAX_LINE_OCTETS;
    for ch in line.chars() {
        if width + ch.len_utf8() > budget {
            out.push_str(CRLF);
            out.push(' ');
            width = 0;
            // the leading space counts against the continuation line
            budget = MAX_LINE_OCTETS - 1;
        }
        out.push(ch);
        width += ch.len_utf8();
    }
    out.push_str(CRLF);
}

fn render_record(
    name: &str,
    start: Date,
    uid: &str,
    rule: Option<&RecurrenceRule>,
    stamp: &DateTime<Utc>,
) -> String {
    let mut rt = String::new();
    push_line(&mut rt, "BEGIN:VEVENT");
    push_line(&mut rt, &format!("DTEND;VALUE=DATE:{}", (start + 1).basic_gregorian()));
    push_line(&mut rt, &format!("DTSTAMP:{}", format_stamp(stamp)));
    push_line(&mut rt, &format!("DTSTART;VALUE=DATE:{}", start.basic_gregorian()));
    push_line(&mut rt, "SEQUENCE:0");
    push_line(&mut rt, &format!("SUMMARY:{}", escape_text(name)));
    push_line(&mut rt, &format!("UID:{uid}"));
    if let Some(rule) = rule {
        push_line(&mut rt, &rule.to_string());
    }
    push_line(&mut rt, "END:VEVENT");
    rt
}

/// Renders an all-day event starting on `anchor` and repeating by `rule`.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use festkalendaro::Date;
/// use festkalendaro::ics::{RecurrenceRule, render_recurring_record};
///
/// let stamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let anchor = Date::from_gregorian(2024, 12, 25).unwrap();
/// let rule = RecurrenceRule::YearlyByMonthDay { month: 12, day: 25 };
/// let record = render_recurring_record("圣诞节", anchor, "XMAS", &rule, &stamp);
///
/// assert!(record.contains("DTSTART;VALUE=DATE:20241225\r\n"));
/// assert!(record.contains("DTEND;VALUE=DATE:20241226\r\n"));
/// assert!(record.contains("RRULE:FREQ=YEARLY;BYMONTH=12;BYMONTHDAY=25\r\n"));
/// ```
pub fn render_recurring_record(
    name: &str,
    anchor: Date,
    uid: &str,
    rule: &RecurrenceRule,
    stamp: &DateTime<Utc>,
) -> String {
    render_record(name, anchor, uid, Some(rule), stamp)
}

/// Renders a single all-day event on `date`.
pub fn render_occurrence_record(
    name: &str,
    date: Date,
    uid: &str,
    stamp: &DateTime<Utc>,
) -> String {
    render_record(name, date, uid, None, stamp)
}

/// Wraps rendered `VEVENT` records into a complete `VCALENDAR`.
pub fn assemble_document(records: &[String], envelope: &CalendarEnvelope) -> String {
    let mut rt = String::new();
    push_line(&mut rt, "BEGIN:VCALENDAR");
    push_line(&mut rt, "CALSCALE:GREGORIAN");
    push_line(&mut rt, &format!("PRODID:{}", envelope.product_id));
    push_line(&mut rt, "VERSION:2.0");
    push_line(&mut rt, &format!("X-APPLE-CALENDAR-COLOR:{}", envelope.color));
    push_line(&mut rt, &format!("X-WR-CALNAME:{}", escape_text(&envelope.name)));
    for record in records {
        rt += record;
    }
    push_line(&mut rt, "END:VCALENDAR");
    rt
}

/// The records of one calendar together with its envelope.
#[derive(Debug, Clone)]
pub struct CalendarDocument {
    pub envelope: CalendarEnvelope,
    pub records: Vec<String>,
}

impl CalendarDocument {
    pub fn new(envelope: CalendarEnvelope) -> Self {
        Self {
            envelope,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: String) {
        self.records.push(record);
    }
}

impl fmt::Display for CalendarDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&assemble_document(&self.records, &self.envelope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap()
    }

    fn envelope() -> CalendarEnvelope {
        CalendarEnvelope {
            name: "Festoj".into(),
            product_id: "-//Test//Test//EN".into(),
            color: "#000000".into(),
        }
    }

    #[test]
    fn rules() {
        use Weekday::*;
        let dataset = [
            (
                RecurrenceRule::YearlyByMonthDay { month: 2, day: 14 },
                "RRULE:FREQ=YEARLY;BYMONTH=02;BYMONTHDAY=14",
            ),
            (
                RecurrenceRule::YearlyByNthWeekday {
                    month: 5,
                    ordinal: 2,
                    weekday: Sun,
                },
                "RRULE:FREQ=YEARLY;BYMONTH=5;BYDAY=2SU",
            ),
            (
                RecurrenceRule::YearlyByNthWeekday {
                    month: 11,
                    ordinal: 4,
                    weekday: Thu,
                },
                "RRULE:FREQ=YEARLY;BYMONTH=11;BYDAY=4TH",
            ),
        ];
        for (rule, std) in dataset {
            assert_eq!(std, rule.to_string());
        }
        assert_eq!(
            None,
            RecurrenceRule::for_system(CalendarSystem::Lunisolar { month: 1, day: 1 })
        );
    }

    #[test]
    fn occurrence_record() {
        let date = Date::from_gregorian(2024, 12, 31).unwrap();
        let record = render_occurrence_record("跨年", date, "NYE2024", &stamp());
        let std = [
            "BEGIN:VEVENT",
            "DTEND;VALUE=DATE:20250101",
            "DTSTAMP:20240305T070809Z",
            "DTSTART;VALUE=DATE:20241231",
            "SEQUENCE:0",
            "SUMMARY:跨年",
            "UID:NYE2024",
            "END:VEVENT",
            "",
        ]
        .join("\r\n");
        assert_eq!(std, record);
    }

    #[test]
    fn recurring_record_ends_with_rule() {
        let date = Date::from_gregorian(2024, 5, 12).unwrap();
        let rule = RecurrenceRule::YearlyByNthWeekday {
            month: 5,
            ordinal: 2,
            weekday: Weekday::Sun,
        };
        let record = render_recurring_record("母亲节", date, "MOM", &rule, &stamp());
        assert!(record.ends_with("UID:MOM\r\nRRULE:FREQ=YEARLY;BYMONTH=5;BYDAY=2SU\r\nEND:VEVENT\r\n"));
    }

    #[test]
    fn document_envelope() {
        let date = Date::from_gregorian(2024, 2, 10).unwrap();
        let mut doc = CalendarDocument::new(envelope());
        doc.push(render_occurrence_record("春节", date, "CNY", &stamp()));
        let text = doc.to_string();
        assert!(text.starts_with(
            "BEGIN:VCALENDAR\r\nCALSCALE:GREGORIAN\r\nPRODID:-//Test//Test//EN\r\nVERSION:2.0\r\n\
             X-APPLE-CALENDAR-COLOR:#000000\r\nX-WR-CALNAME:Festoj\r\nBEGIN:VEVENT\r\n"
        ));
        assert!(text.ends_with("END:VEVENT\r\nEND:VCALENDAR\r\n"));
        assert_eq!(text, assemble_document(&doc.records, &doc.envelope));
    }

    #[test]
    fn empty_document() {
        let text = assemble_document(&[], &envelope());
        assert_eq!(1, text.matches("BEGIN:VCALENDAR").count());
        assert_eq!(1, text.matches("END:VCALENDAR").count());
        assert!(!text.contains("VEVENT"));
    }

    #[test]
    fn escaping() {
        assert_eq!(r"a\\b", escape_text(r"a\b"));
        assert_eq!(r"line\nbreak", escape_text("line\r\nbreak"));
        assert_eq!("中秋节", escape_text("中秋节"));
    }

    #[test]
    fn folding() {
        let mut out = String::new();
        push_line(&mut out, &"x".repeat(80));
        assert_eq!(format!("{}\r\n {}\r\n", "x".repeat(75), "x".repeat(5)), out);

        let mut out = String::new();
        // 3 octets per character
        push_line(&mut out, &format!("SUMMARY:{}", "节".repeat(30)));
        for line in out.split("\r\n") {
            assert!(line.len() <= MAX_LINE_OCTETS, "{line:?}");
        }
        assert_eq!(format!("SUMMARY:{}", "节".repeat(30)), out.replace("\r\n ", "").trim_end());
    }
}
