//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 夏曆與公曆的換算交由 ICU4X 的 [`Chinese`] 曆法完成，本模塊只取平月的月首與大小。

use std::ops::RangeInclusive;

use icu_calendar::chinese::Chinese;
use icu_calendar::types::{Era, MonthCode};
use tinystr::tinystr;

use crate::date::Date;
use crate::error::{Error, Result};

/// 支持的農曆年份，以正月初一所在公元年計。
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1900..=2100;

/// ICU4X 以公元前 2637 年為農曆元年，與公元年相差之數。
const EXTENDED_YEAR_OFFSET: i32 = 2637;

const ERA: Era = Era(tinystr!(16, "chinese"));

/// 各平月的月碼，閏月另有 `M06L` 之類，此處不用。
const MONTH_CODES: [MonthCode; 12] = [
    MonthCode(tinystr!(4, "M01")),
    MonthCode(tinystr!(4, "M02")),
    MonthCode(tinystr!(4, "M03")),
    MonthCode(tinystr!(4, "M04")),
    MonthCode(tinystr!(4, "M05")),
    MonthCode(tinystr!(4, "M06")),
    MonthCode(tinystr!(4, "M07")),
    MonthCode(tinystr!(4, "M08")),
    MonthCode(tinystr!(4, "M09")),
    MonthCode(tinystr!(4, "M10")),
    MonthCode(tinystr!(4, "M11")),
    MonthCode(tinystr!(4, "M12")),
];

/// 農曆某年的一個平月。
///
/// 注意：本程序以農曆年的序號（正月初一所在公元年）標記一年，臘月諸日雖落在次一公元年，仍屬本年。
///
/// # 用例
///
/// ```
/// use festkalendaro::chinese::LunarMonth;
///
/// let month = LunarMonth::new(2024, 12).unwrap();
///
/// assert_eq!("2024-12-31", month.first.iso_gregorian());
/// assert_eq!(29, month.len);
/// assert_eq!("2025-01-28", month.date_for(29).unwrap().iso_gregorian());
/// assert_eq!(None, month.date_for(30));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LunarMonth {
    /// 年序號
    pub year: i32,
    /// 月序號，`1..=12`
    pub month: u32,
    /// 月首（初一）所在日期
    pub first: Date,
    /// 該月日數，大月 30，小月 29
    pub len: u32,
}

impl LunarMonth {
    /// 取得農曆 `year` 年的平月 `month`。
    ///
    /// 年份不在 [`SUPPORTED_YEARS`] 時回報 [`Error::LunarYearOutOfRange`]，月份不在 `1..=12` 時回報
    /// [`Error::InvalidLunarMonth`]。
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(Error::LunarYearOutOfRange(year));
        }
        let code = month
            .checked_sub(1)
            .and_then(|idx| MONTH_CODES.get(idx as usize))
            .ok_or(Error::InvalidLunarMonth(month))?;

        let first = icu_calendar::Date::try_new_from_codes(
            ERA,
            year + EXTENDED_YEAR_OFFSET,
            *code,
            1,
            Chinese::new(),
        )
        .map_err(Error::Calendar)?;
        let len = u32::from(first.days_in_month());

        let iso = first.to_iso();
        let (y, m, d) = (
            iso.year().number,
            iso.month().ordinal as i32,
            iso.day_of_month().0 as i32,
        );
        let first = Date::from_gregorian(y, m, d).ok_or(Error::InvalidDate {
            year: y,
            month: m,
            day: d,
        })?;

        Ok(Self {
            year,
            month,
            first,
            len,
        })
    }

    /// 取得該月某日的公曆日期，該月無此日（如小月三十）則返回 `None`。
    pub fn date_for(&self, day: u32) -> Option<Date> {
        if !(1..=self.len).contains(&day) {
            return None;
        }
        Some(self.first + (day - 1) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_years() {
        let dataset = [
            (1949, "1949-01-29"),
            (2000, "2000-02-05"),
            (2020, "2020-01-25"),
            (2024, "2024-02-10"),
            (2025, "2025-01-29"),
            (2026, "2026-02-17"),
            (2027, "2027-02-06"),
            (2028, "2028-01-26"),
            (2029, "2029-02-13"),
            (2030, "2030-02-03"),
        ];
        for (year, std) in dataset {
            let month = LunarMonth::new(year, 1).unwrap();
            assert_eq!(std, month.first.iso_gregorian(), "{year}");
        }
    }

    #[test]
    fn common_months_skip_leap() {
        // 2017 閏六月始於 2017-07-23
        let stds = [
            (1, "2017-01-28"),
            (2, "2017-02-26"),
            (3, "2017-03-28"),
            (4, "2017-04-26"),
            (5, "2017-05-26"),
            (6, "2017-06-24"),
            (7, "2017-08-22"),
            (8, "2017-09-20"),
            (9, "2017-10-20"),
            (10, "2017-11-18"),
            (11, "2017-12-18"),
            (12, "2018-01-17"),
        ];
        for (month, std) in stds {
            let lunar = LunarMonth::new(2017, month).unwrap();
            assert_eq!(std, lunar.first.iso_gregorian(), "{month}");
        }
        assert_eq!(29, LunarMonth::new(2017, 6).unwrap().len);
    }

    #[test]
    fn september_2057() {
        let month = LunarMonth::new(2057, 9).unwrap();
        assert_eq!("2057-09-28", month.first.iso_gregorian());
        assert_eq!("2057-10-06", month.date_for(9).unwrap().iso_gregorian());
    }

    #[test]
    fn month_lengths() {
        let dataset = [
            ((2023, 12), 30),
            ((2024, 1), 29),
            ((2024, 12), 29),
            ((2029, 12), 30),
        ];
        for ((year, month), std) in dataset {
            assert_eq!(std, LunarMonth::new(year, month).unwrap().len, "{year}-{month}");
        }
    }

    #[test]
    fn dates() {
        let month = LunarMonth::new(2024, 8).unwrap();
        assert_eq!("2024-09-17", month.date_for(15).unwrap().iso_gregorian());
        assert_eq!(None, month.date_for(0));
        assert_eq!(None, month.date_for(31));
        let last = month.date_for(month.len).unwrap();
        let next = LunarMonth::new(2024, 9).unwrap();
        assert_eq!(1, next.first - last);
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(
            LunarMonth::new(1899, 1),
            Err(Error::LunarYearOutOfRange(1899))
        ));
        assert!(matches!(
            LunarMonth::new(2101, 1),
            Err(Error::LunarYearOutOfRange(2101))
        ));
        for month in [0, 13] {
            assert!(matches!(
                LunarMonth::new(2024, month),
                Err(Error::InvalidLunarMonth(m)) if m == month
            ));
        }
    }
}
