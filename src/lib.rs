pub mod calendar;
pub mod config;
pub mod event;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod member;
pub mod presence;
pub mod resolver;
pub mod store;

pub use calendar::{Holiday, HolidayCalendar, HolidayKind};
pub use config::{
    ConfigError, ConfigResult, OverrideEntry, RosterConfig, ScheduleEntry, load_roster_from_json,
};
pub use event::Event;
pub use member::{Member, Team};
pub use presence::{events_in_range, events_on, is_holiday, is_working_day, members_in_office};
pub use resolver::{effective_weekly_dates, week_start};
pub use store::RosterStore;
