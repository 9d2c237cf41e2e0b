use crate::calendar::{Holiday, HolidayCalendar, HolidayKind};
use crate::event::Event;
use crate::member::{Member, Team};
use crate::resolver::week_start;
use crate::store::RosterStore;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeJsonError;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

#[derive(Debug)]
pub enum ConfigError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    InvalidData(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Serialization(err) => write!(f, "serialization error: {err}"),
            ConfigError::Io(err) => write!(f, "io error: {err}"),
            ConfigError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<SerdeJsonError> for ConfigError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for ConfigError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// A member's recurring weekly attendance pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub member_id: i32,
    pub days: Vec<Weekday>,
}

impl ScheduleEntry {
    pub fn new<I>(member_id: i32, days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        Self {
            member_id,
            days: days.into_iter().collect(),
        }
    }
}

/// A week-scoped replacement of a member's pattern. `week_start` may be any
/// date inside the target week; it is normalized to the canonical Sunday
/// start on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub member_id: i32,
    pub week_start: NaiveDate,
    pub days: Vec<Weekday>,
}

impl OverrideEntry {
    pub fn new<I>(member_id: i32, week_start: NaiveDate, days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        Self {
            member_id,
            week_start,
            days: days.into_iter().collect(),
        }
    }
}

/// The full roster configuration supplied once at startup. Building it
/// validates the tables and produces the immutable `RosterStore` the
/// resolution engine reads from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub schedules: Vec<ScheduleEntry>,
    #[serde(default)]
    pub overrides: Vec<OverrideEntry>,
    #[serde(default)]
    pub holidays: Vec<Holiday>,
    /// Year range (inclusive) for which the US federal holiday set is
    /// generated and merged beneath the explicit holiday entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub federal_holiday_years: Option<(i32, i32)>,
    #[serde(default)]
    pub events: Vec<Event>,
}

fn normalize_weekdays(days: &[Weekday]) -> Vec<Weekday> {
    let mut days: Vec<Weekday> = days.to_vec();
    days.sort_by_key(|day| day.num_days_from_sunday());
    days.dedup_by(|a, b| a.num_days_from_sunday() == b.num_days_from_sunday());
    days
}

impl RosterConfig {
    /// Validate the tables and assemble the store.
    ///
    /// Structural problems (duplicate member ids, unknown team codes,
    /// clashing holiday dates, inverted event spans) are errors. Dangling
    /// member references and duplicate schedule/override entries load with
    /// a warning: the first entry wins and the rest are ignored, so queries
    /// never have to re-resolve the ambiguity.
    pub fn build(self) -> ConfigResult<RosterStore> {
        let RosterConfig {
            teams,
            members,
            schedules,
            overrides,
            holidays,
            federal_holiday_years,
            events,
        } = self;

        let mut seen_ids = HashSet::new();
        for member in &members {
            if !seen_ids.insert(member.id) {
                return Err(ConfigError::InvalidData(format!(
                    "duplicate member id {}",
                    member.id
                )));
            }
            if teams.iter().all(|team| team.code != member.team) {
                return Err(ConfigError::InvalidData(format!(
                    "member {} references unknown team '{}'",
                    member.id, member.team
                )));
            }
        }

        let on_roster = |id: i32| members.iter().any(|member| member.id == id);

        let mut regular: HashMap<i32, Vec<Weekday>> = HashMap::new();
        for entry in &schedules {
            if !on_roster(entry.member_id) {
                warn!(
                    member_id = entry.member_id,
                    "regular schedule references a member not on the roster"
                );
            }
            if regular.contains_key(&entry.member_id) {
                warn!(
                    member_id = entry.member_id,
                    "duplicate regular schedule ignored; keeping the first entry"
                );
                continue;
            }
            regular.insert(entry.member_id, normalize_weekdays(&entry.days));
        }

        let mut week_overrides: HashMap<(i32, NaiveDate), Vec<Weekday>> = HashMap::new();
        for entry in &overrides {
            if !on_roster(entry.member_id) {
                warn!(
                    member_id = entry.member_id,
                    "schedule override references a member not on the roster"
                );
            }
            let week = week_start(entry.week_start);
            let key = (entry.member_id, week);
            if week_overrides.contains_key(&key) {
                warn!(
                    member_id = entry.member_id,
                    week_start = %week,
                    "duplicate schedule override ignored; keeping the first entry"
                );
                continue;
            }
            week_overrides.insert(key, normalize_weekdays(&entry.days));
        }

        let mut seen_dates = HashSet::new();
        for holiday in &holidays {
            if !seen_dates.insert(holiday.date) {
                return Err(ConfigError::InvalidData(format!(
                    "multiple holidays share the date {}",
                    holiday.date
                )));
            }
        }

        let mut calendar = match federal_holiday_years {
            Some((start, end)) => HolidayCalendar::us_federal_range(start, end),
            None => HolidayCalendar::new(),
        };
        calendar.add_holidays(holidays);

        for event in &events {
            if event.end_date < event.start_date {
                return Err(ConfigError::InvalidData(format!(
                    "event {} ends before it starts",
                    event.id
                )));
            }
        }

        Ok(RosterStore::from_parts(
            members,
            teams,
            regular,
            week_overrides,
            calendar,
            events,
        ))
    }

    /// Built-in demo roster, used by the CLI when no roster file is given.
    pub fn sample() -> Self {
        let d = |y: i32, m: u32, day: u32| NaiveDate::from_ymd_opt(y, m, day).unwrap();

        let mut sprint = Event::new(
            1,
            "Project Sprint",
            d(2025, 6, 23),
            d(2025, 6, 27),
            "#3b82f6",
        );
        sprint.attendees = vec!["Alice Kim".to_string(), "Ben Ortiz".to_string()];
        let mut conference = Event::new(2, "Conference", d(2025, 6, 25), d(2025, 6, 26), "#22c55e");
        conference.attendees = vec!["Carol Park".to_string()];
        let mut workshop = Event::new(3, "Workshop", d(2025, 6, 29), d(2025, 7, 11), "#a855f7");
        workshop.attendees = vec!["Dana Lee".to_string(), "Alice Kim".to_string()];

        Self {
            teams: vec![
                Team::new("DO", "Data Operations", "#dbeafe"),
                Team::new("DA", "Data Analytics", "#f3e8ff"),
            ],
            members: vec![
                Member::new(1, "Alice Kim", "DO", "#3b82f6"),
                Member::new(2, "Ben Ortiz", "DO", "#22c55e"),
                Member::new(3, "Carol Park", "DA", "#a855f7"),
                Member::new(4, "Dana Lee", "DA", "#f97316"),
            ],
            schedules: vec![
                ScheduleEntry::new(1, [Weekday::Tue, Weekday::Thu]),
                ScheduleEntry::new(2, [Weekday::Mon, Weekday::Wed]),
                ScheduleEntry::new(3, [Weekday::Tue, Weekday::Fri]),
                ScheduleEntry::new(4, [Weekday::Mon, Weekday::Thu]),
            ],
            overrides: vec![
                OverrideEntry::new(1, d(2025, 6, 22), [Weekday::Mon, Weekday::Fri]),
                OverrideEntry::new(3, d(2025, 6, 29), [Weekday::Wed]),
            ],
            holidays: vec![
                Holiday::new(d(2025, 6, 30), "Company Holiday", HolidayKind::Company),
                Holiday::new(
                    d(2025, 7, 3),
                    "Independence Day (observed)",
                    HolidayKind::Federal,
                ),
            ],
            federal_holiday_years: Some((2025, 2025)),
            events: vec![sprint, conference, workshop],
        }
    }
}

/// Read a roster configuration from a JSON file and build the store.
pub fn load_roster_from_json(path: impl AsRef<Path>) -> ConfigResult<RosterStore> {
    let contents = fs::read_to_string(path)?;
    let config: RosterConfig = serde_json::from_str(&contents)?;
    config.build()
}
