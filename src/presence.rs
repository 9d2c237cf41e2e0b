use crate::calendar::Holiday;
use crate::event::Event;
use crate::member::Member;
use crate::resolver::{effective_weekly_dates, week_start};
use crate::store::RosterStore;
use chrono::NaiveDate;

/// Members in office on `date`, in roster order.
///
/// A member is in office when `date` appears in their effective weekly
/// dates for the week containing it. Filters intersect: a non-empty team
/// filter keeps members whose team code is in it, a non-empty member
/// filter keeps members whose id is in it. An empty filter means no
/// restriction, not "exclude everything".
pub fn members_in_office<'a>(
    store: &'a RosterStore,
    date: NaiveDate,
    member_filter: &[i32],
    team_filter: &[String],
) -> Vec<&'a Member> {
    let week = week_start(date);
    store
        .members()
        .iter()
        .filter(|member| effective_weekly_dates(store, member.id, week).contains(&date))
        .filter(|member| team_filter.is_empty() || team_filter.iter().any(|code| *code == member.team))
        .filter(|member| member_filter.is_empty() || member_filter.contains(&member.id))
        .collect()
}

pub fn is_holiday(store: &RosterStore, date: NaiveDate) -> Option<&Holiday> {
    store.calendar().holiday_on(date)
}

pub fn is_working_day(store: &RosterStore, date: NaiveDate) -> bool {
    store.calendar().is_working_day(date)
}

/// Events whose span contains `date` (both endpoints inclusive).
pub fn events_on(store: &RosterStore, date: NaiveDate) -> Vec<&Event> {
    store
        .events()
        .iter()
        .filter(|event| event.contains(date))
        .collect()
}

/// Events overlapping the inclusive `start..=end` range.
pub fn events_in_range<'a>(
    store: &'a RosterStore,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&'a Event> {
    store
        .events()
        .iter()
        .filter(|event| event.overlaps(start, end))
        .collect()
}
