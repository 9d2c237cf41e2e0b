use crate::calendar::HolidayCalendar;
use crate::event::Event;
use crate::member::{Member, Team};
use chrono::{NaiveDate, Weekday};
use std::collections::HashMap;

/// Immutable roster snapshot built once at startup by `RosterConfig::build`.
///
/// Members keep their declaration order; schedules and overrides are keyed
/// for direct lookup. Absent data is an ordinary `None`, never an error.
/// There is no mutation surface: schedule edits would be modeled as a new
/// snapshot, so concurrent readers never see a partial update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterStore {
    members: Vec<Member>,
    teams: Vec<Team>,
    regular: HashMap<i32, Vec<Weekday>>,
    overrides: HashMap<(i32, NaiveDate), Vec<Weekday>>,
    calendar: HolidayCalendar,
    events: Vec<Event>,
}

impl RosterStore {
    pub(crate) fn from_parts(
        members: Vec<Member>,
        teams: Vec<Team>,
        regular: HashMap<i32, Vec<Weekday>>,
        overrides: HashMap<(i32, NaiveDate), Vec<Weekday>>,
        calendar: HolidayCalendar,
        events: Vec<Event>,
    ) -> Self {
        Self {
            members,
            teams,
            regular,
            overrides,
            calendar,
            events,
        }
    }

    /// Full roster in declaration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member(&self, id: i32) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, code: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.code == code)
    }

    /// A member's default weekly attendance pattern, sorted Sunday-first.
    pub fn regular_schedule(&self, member_id: i32) -> Option<&[Weekday]> {
        self.regular.get(&member_id).map(Vec::as_slice)
    }

    /// Replacement pattern for one specific week, if configured. `week_start`
    /// must be a canonical (Sunday) week start.
    pub fn override_for(&self, member_id: i32, week_start: NaiveDate) -> Option<&[Weekday]> {
        self.overrides
            .get(&(member_id, week_start))
            .map(Vec::as_slice)
    }

    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}
