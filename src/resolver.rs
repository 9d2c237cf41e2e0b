use crate::store::RosterStore;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Canonical week start for any date: the Sunday on or before it.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

fn date_in_week(week: NaiveDate, day: Weekday) -> NaiveDate {
    week + Duration::days(day.num_days_from_sunday() as i64)
}

/// Concrete attendance dates for one member in the week containing `week`.
///
/// Selection: a matching override replaces the regular pattern wholesale;
/// a member with neither yields no dates. Each selected weekday maps onto
/// the target week, then the holiday policy applies:
///
/// - two or more scheduled dates landing on holidays collapse the whole
///   week to a single day (the first non-holiday scheduled date, or the
///   first scheduled date shifted to its nearest working day when every
///   one of them is a holiday);
/// - otherwise a lone holiday date shifts to its nearest working day,
///   keeping the original date when nothing is free within the search
///   radius.
///
/// Weekends never trigger the collapse; only holidays do. An overridden
/// day that lands on a weekend is returned as-is. Duplicates produced by
/// shifting are removed, keeping first-occurrence order.
pub fn effective_weekly_dates(
    store: &RosterStore,
    member_id: i32,
    week: NaiveDate,
) -> Vec<NaiveDate> {
    let week = week_start(week);
    let days: &[Weekday] = match store.override_for(member_id, week) {
        Some(days) => days,
        None => match store.regular_schedule(member_id) {
            Some(days) => days,
            None => return Vec::new(),
        },
    };

    let calendar = store.calendar();
    let scheduled: Vec<NaiveDate> = days.iter().map(|&day| date_in_week(week, day)).collect();
    let holiday_hits = scheduled
        .iter()
        .filter(|&&date| calendar.is_holiday(date))
        .count();

    if holiday_hits >= 2 {
        let day = scheduled
            .iter()
            .copied()
            .find(|&date| !calendar.is_holiday(date))
            .unwrap_or_else(|| calendar.nearest_working_day(scheduled[0]));
        return vec![day];
    }

    let mut dates: Vec<NaiveDate> = Vec::with_capacity(scheduled.len());
    for date in scheduled {
        let adjusted = if calendar.is_holiday(date) {
            calendar.nearest_working_day(date)
        } else {
            date
        };
        if !dates.contains(&adjusted) {
            dates.push(adjusted);
        }
    }
    dates
}
