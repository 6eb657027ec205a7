//! Built-in holiday tables.
//!
//! Three groups: fixed Gregorian dates, floating weekdays ("the second
//! Sunday of May") and days of the Chinese lunisolar calendar. The UIDs are
//! the identifiers earlier versions of the calendar were published with and
//! must stay stable so that subscribed calendars update in place.

use chrono::Weekday;

/// How a holiday is anchored in the calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CalendarSystem {
    /// A fixed Gregorian month and day.
    Fixed { month: i32, day: i32 },
    /// The `ordinal`-th `weekday` of a Gregorian month.
    Floating {
        month: i32,
        ordinal: u32,
        weekday: Weekday,
    },
    /// A day of a common (non-leap) month of the Chinese calendar.
    Lunisolar { month: u32, day: u32 },
}

/// A named holiday with its anchoring rule and UID seed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct HolidayDefinition {
    pub name: &'static str,
    pub rule: CalendarSystem,
    pub uid: &'static str,
}

impl HolidayDefinition {
    const fn fixed(name: &'static str, month: i32, day: i32, uid: &'static str) -> Self {
        Self {
            name,
            rule: CalendarSystem::Fixed { month, day },
            uid,
        }
    }

    const fn floating(
        name: &'static str,
        month: i32,
        ordinal: u32,
        weekday: Weekday,
        uid: &'static str,
    ) -> Self {
        Self {
            name,
            rule: CalendarSystem::Floating {
                month,
                ordinal,
                weekday,
            },
            uid,
        }
    }

    const fn lunisolar(name: &'static str, month: u32, day: u32, uid: &'static str) -> Self {
        Self {
            name,
            rule: CalendarSystem::Lunisolar { month, day },
            uid,
        }
    }

    /// Whether this is the lunar new year's eve, the last day of 臘月, which
    /// is day 30 or day 29 depending on the year.
    pub fn is_new_years_eve(&self) -> bool {
        matches!(self.rule, CalendarSystem::Lunisolar { month: 12, day: 30 })
    }
}

pub static FIXED: [HolidayDefinition; 8] = [
    HolidayDefinition::fixed("情人节", 2, 14, "B40484B8-EC47-423C-9FE2-ED8045510CD9"),
    HolidayDefinition::fixed("植树节", 3, 12, "86B5610A-0ED1-45AA-AC5F-3986F5D0DCB3"),
    HolidayDefinition::fixed("愚人节", 4, 1, "6CAE4024-D0F2-4644-B06C-1426082A5102"),
    HolidayDefinition::fixed("教师节", 9, 10, "AA61B842-5291-44AF-8084-1087FF739388"),
    HolidayDefinition::fixed("万圣夜", 10, 31, "A6084884-0DC7-48B7-AA29-B2CFCF8167EA"),
    HolidayDefinition::fixed("万圣节", 11, 1, "EE89587A-49B3-4F97-91AB-D667026AA81C"),
    HolidayDefinition::fixed("平安夜", 12, 24, "448ADCB0-601C-4A25-A2BA-97C1ABB1BCEA"),
    HolidayDefinition::fixed("圣诞节", 12, 25, "7FDD232F-7B79-4B80-B966-8881C2C3B943"),
];

pub static FLOATING: [HolidayDefinition; 3] = [
    HolidayDefinition::floating("母亲节", 5, 2, Weekday::Sun, "81B937BF-53A0-43C0-ADC1-562EB4CE7516"),
    HolidayDefinition::floating("父亲节", 6, 3, Weekday::Sun, "ADFF064B-1DD7-4214-B362-F0D7386833FF"),
    HolidayDefinition::floating("感恩节", 11, 4, Weekday::Thu, "283FBA16-0DB1-49E5-9624-EA2DEA0C6C14"),
];

pub static LUNISOLAR: [HolidayDefinition; 12] = [
    HolidayDefinition::lunisolar("腊八节", 12, 8, "BAA01739-384A-46E8-9938-2AA27831A94C"),
    HolidayDefinition::lunisolar("北小年", 12, 23, "CE501CBA-DCFA-4026-AE7B-DB44148F8F7D"),
    HolidayDefinition::lunisolar("南小年", 12, 24, "1CE501CBA-DCFA-4026-AE7B-DB44148F8F7D"),
    HolidayDefinition::lunisolar("除夕", 12, 30, "CHUXI-2024-2030"),
    HolidayDefinition::lunisolar("春节", 1, 1, "CHUNJIE-2024-2030"),
    HolidayDefinition::lunisolar("元宵节", 1, 15, "YUANXIAO-2024-2030"),
    HolidayDefinition::lunisolar("龙抬头", 2, 2, "LONGTAITOU-2024-2030"),
    HolidayDefinition::lunisolar("端午节", 5, 5, "DUANWU-2024-2030"),
    HolidayDefinition::lunisolar("七夕", 7, 7, "QIXI-2024-2030"),
    HolidayDefinition::lunisolar("中元节", 7, 15, "6715EF41-D73C-4687-8AD7-DA9546C8EEA3"),
    HolidayDefinition::lunisolar("中秋节", 8, 15, "ZHONGQIU-2024-2030"),
    HolidayDefinition::lunisolar("重阳节", 9, 9, "CHONGYANG-2024-2030"),
];

/// Iterates over every holiday, fixed first, then floating, then lunisolar.
pub fn all() -> impl Iterator<Item = &'static HolidayDefinition> {
    FIXED.iter().chain(&FLOATING).chain(&LUNISOLAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn groups_use_their_own_rule() {
        assert!(FIXED.iter().all(|h| matches!(h.rule, CalendarSystem::Fixed { .. })));
        assert!(FLOATING.iter().all(|h| matches!(h.rule, CalendarSystem::Floating { .. })));
        assert!(LUNISOLAR.iter().all(|h| matches!(h.rule, CalendarSystem::Lunisolar { .. })));
    }

    #[test]
    fn seeds_are_distinct() {
        let seeds: HashSet<_> = all().map(|h| h.uid).collect();
        assert_eq!(23, seeds.len());
        assert_eq!(23, all().count());
    }

    #[test]
    fn only_one_eve() {
        let eves: Vec<_> = all().filter(|h| h.is_new_years_eve()).collect();
        assert_eq!(1, eves.len());
        assert_eq!("除夕", eves[0].name);
    }
}
