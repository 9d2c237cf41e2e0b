use chrono::NaiveDate;
use presence_tool::{
    HolidayKind, RosterConfig, RosterStore, effective_weekly_dates, events_on,
    load_roster_from_json, members_in_office, week_start,
};
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn parse_id_list(s: &str) -> Vec<i32> {
    s.split(',')
        .filter_map(|p| p.trim().parse::<i32>().ok())
        .collect()
}

fn parse_code_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn kind_label(kind: HolidayKind) -> &'static str {
    match kind {
        HolidayKind::Federal => "federal",
        HolidayKind::Company => "company",
    }
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  roster                             List members and their regular days\n  who <YYYY-MM-DD> [teams=A,B] [members=1,2]\n                                     Members in office on a date\n  week <member_id> <YYYY-MM-DD>      Effective attendance dates for that week\n  holidays                           List configured holidays\n  events <YYYY-MM-DD>                Events running on a date\n  load <json_path>                   Load a roster configuration from JSON\n  quit|exit                          Exit"
    );
}

fn print_roster(store: &RosterStore) {
    for member in store.members() {
        let days = match store.regular_schedule(member.id) {
            Some(days) => days
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
            None => "-".to_string(),
        };
        println!(
            "  {:<4} {:<20} {:<4} {}",
            member.id, member.name, member.team, days
        );
    }
}

fn print_presence(store: &RosterStore, date: NaiveDate, members: &[i32], teams: &[String]) {
    let present = members_in_office(store, date, members, teams);
    if present.is_empty() {
        println!("Nobody in office on {date}.");
        return;
    }
    println!("In office on {date}:");
    for member in present {
        println!("  {:<4} {:<20} {}", member.id, member.name, member.team);
    }
}

fn print_week(store: &RosterStore, member_id: i32, date: NaiveDate) {
    let Some(member) = store.member(member_id) else {
        println!("Member {member_id} not found.");
        return;
    };
    let week = week_start(date);
    let dates = effective_weekly_dates(store, member_id, week);
    if dates.is_empty() {
        println!("{} has no attendance in the week of {week}.", member.name);
        return;
    }
    println!("{} attends in the week of {week}:", member.name);
    for date in dates {
        println!("  {date}");
    }
}

fn load_initial_store() -> Result<RosterStore, Box<dyn std::error::Error>> {
    if let Some(path) = std::env::args().nth(1) {
        return Ok(load_roster_from_json(&path)?);
    }
    if let Ok(path) = std::env::var("PRESENCE_TOOL_ROSTER") {
        return Ok(load_roster_from_json(&path)?);
    }
    Ok(RosterConfig::sample().build()?)
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut store = match load_initial_store() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error loading roster: {}", e);
            std::process::exit(1);
        }
    };

    println!("Presence Tool (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() {
            break;
        }
        if line.is_empty() {
            // EOF
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => {
                print_help();
            }
            "quit" | "exit" => break,
            "roster" => {
                print_roster(&store);
            }
            "who" => {
                let date_s = parts.next();
                match date_s.and_then(parse_date) {
                    Some(date) => {
                        let mut members: Vec<i32> = Vec::new();
                        let mut teams: Vec<String> = Vec::new();
                        for part in parts {
                            if let Some(rest) = part.strip_prefix("teams=") {
                                teams = parse_code_list(rest);
                            } else if let Some(rest) = part.strip_prefix("members=") {
                                members = parse_id_list(rest);
                            } else {
                                println!("Ignoring unrecognized filter '{}'.", part);
                            }
                        }
                        print_presence(&store, date, &members, &teams);
                    }
                    None => println!("Usage: who <YYYY-MM-DD> [teams=A,B] [members=1,2]"),
                }
            }
            "week" => {
                let id_s = parts.next();
                let date_s = parts.next();
                let member_id = id_s.and_then(|s| s.parse::<i32>().ok());
                match (member_id, date_s.and_then(parse_date)) {
                    (Some(member_id), Some(date)) => print_week(&store, member_id, date),
                    _ => println!("Usage: week <member_id> <YYYY-MM-DD>"),
                }
            }
            "holidays" => {
                for holiday in store.calendar().holidays() {
                    println!(
                        "  {}  {:<28} {}",
                        holiday.date,
                        holiday.name,
                        kind_label(holiday.kind)
                    );
                }
            }
            "events" => {
                let date_s = parts.next();
                match date_s.and_then(parse_date) {
                    Some(date) => {
                        let running = events_on(&store, date);
                        if running.is_empty() {
                            println!("No events on {date}.");
                        }
                        for event in running {
                            println!(
                                "  {:<4} {:<20} {}..{}",
                                event.id, event.title, event.start_date, event.end_date
                            );
                        }
                    }
                    None => println!("Usage: events <YYYY-MM-DD>"),
                }
            }
            "load" => match parts.next() {
                Some(path) => match load_roster_from_json(path) {
                    Ok(loaded) => {
                        store = loaded;
                        println!("Roster loaded from {}.", path);
                    }
                    Err(e) => println!("Error loading roster: {}", e),
                },
                None => println!("Usage: load <json_path>"),
            },
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}
