use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How far `nearest_working_day` searches in each direction.
const ADJUST_RADIUS_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    Federal,
    Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    pub kind: HolidayKind,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>, kind: HolidayKind) -> Self {
        Self {
            date,
            name: name.into(),
            kind,
        }
    }
}

/// Date-keyed holiday table plus the weekend convention. Saturday and Sunday
/// are never working days; holidays are whatever the roster configuration
/// supplies, optionally seeded with the US federal set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidayCalendar {
    holidays: HashMap<NaiveDate, Holiday>,
}

impl HolidayCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard US federal holidays for a single year, with their names.
    pub fn us_federal(year: i32) -> Self {
        Self::us_federal_range(year, year)
    }

    /// US federal holidays for a range of years (inclusive).
    pub fn us_federal_range(start_year: i32, end_year: i32) -> Self {
        let (start, end) = if start_year <= end_year {
            (start_year, end_year)
        } else {
            (end_year, start_year)
        };

        let mut calendar = Self::new();
        for year in start..=end {
            calendar.add_us_federal_holidays(year);
        }
        calendar
    }

    fn add_us_federal_holidays(&mut self, year: i32) {
        let fixed = |month: u32, day: u32| NaiveDate::from_ymd_opt(year, month, day).unwrap();

        self.add_holiday(Holiday::new(
            fixed(1, 1),
            "New Year's Day",
            HolidayKind::Federal,
        ));
        self.add_holiday(Holiday::new(
            Self::nth_weekday(year, 1, Weekday::Mon, 3),
            "Martin Luther King Jr. Day",
            HolidayKind::Federal,
        ));
        self.add_holiday(Holiday::new(
            Self::nth_weekday(year, 2, Weekday::Mon, 3),
            "Presidents' Day",
            HolidayKind::Federal,
        ));
        self.add_holiday(Holiday::new(
            Self::last_weekday(year, 5, Weekday::Mon),
            "Memorial Day",
            HolidayKind::Federal,
        ));
        self.add_holiday(Holiday::new(
            fixed(7, 4),
            "Independence Day",
            HolidayKind::Federal,
        ));
        self.add_holiday(Holiday::new(
            Self::nth_weekday(year, 9, Weekday::Mon, 1),
            "Labor Day",
            HolidayKind::Federal,
        ));
        self.add_holiday(Holiday::new(
            Self::nth_weekday(year, 10, Weekday::Mon, 2),
            "Columbus Day",
            HolidayKind::Federal,
        ));
        self.add_holiday(Holiday::new(
            fixed(11, 11),
            "Veterans Day",
            HolidayKind::Federal,
        ));
        self.add_holiday(Holiday::new(
            Self::nth_weekday(year, 11, Weekday::Thu, 4),
            "Thanksgiving",
            HolidayKind::Federal,
        ));
        self.add_holiday(Holiday::new(
            fixed(12, 25),
            "Christmas Day",
            HolidayKind::Federal,
        ));
    }

    /// Helper: Find the nth occurrence of a weekday in a month
    fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u32) -> NaiveDate {
        let mut date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let mut count = 0;

        while date.month() == month {
            if date.weekday() == weekday {
                count += 1;
                if count == n {
                    return date;
                }
            }
            date = date + Duration::days(1);
        }
        panic!("Could not find {}th {} in {}/{}", n, weekday, month, year);
    }

    /// Helper: Find the last occurrence of a weekday in a month
    fn last_weekday(year: i32, month: u32, weekday: Weekday) -> NaiveDate {
        let mut date = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
        };
        date = date - Duration::days(1); // Last day of the month

        while date.weekday() != weekday {
            date = date - Duration::days(1);
        }
        date
    }

    /// Add a single holiday. A later entry for the same date replaces the
    /// earlier one, which lets configured holidays shadow generated ones.
    pub fn add_holiday(&mut self, holiday: Holiday) {
        self.holidays.insert(holiday.date, holiday);
    }

    pub fn add_holidays<I>(&mut self, holidays: I)
    where
        I: IntoIterator<Item = Holiday>,
    {
        for holiday in holidays {
            self.add_holiday(holiday);
        }
    }

    pub fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// A working day is neither a weekend day nor a holiday.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.is_holiday(date)
    }

    /// Nearest working day to `date`: the date itself if it qualifies,
    /// otherwise up to three days backward, then up to three days forward.
    /// Backward days are exhausted before any forward day is tried. Falls
    /// back to `date` when the whole radius is blocked.
    pub fn nearest_working_day(&self, date: NaiveDate) -> NaiveDate {
        if self.is_working_day(date) {
            return date;
        }

        for offset in 1..=ADJUST_RADIUS_DAYS {
            let earlier = date - Duration::days(offset);
            if self.is_working_day(earlier) {
                return earlier;
            }
        }

        for offset in 1..=ADJUST_RADIUS_DAYS {
            let later = date + Duration::days(offset);
            if self.is_working_day(later) {
                return later;
            }
        }

        date
    }

    /// All holidays in ascending date order.
    pub fn holidays(&self) -> Vec<&Holiday> {
        let mut all: Vec<&Holiday> = self.holidays.values().collect();
        all.sort_by_key(|holiday| holiday.date);
        all
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}
