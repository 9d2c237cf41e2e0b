#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;

#[allow(deprecated)]
fn run_cli(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.env_remove("PRESENCE_TOOL_ROSTER");
    cmd.write_stdin(script.to_string()).assert()
}

#[test]
fn cli_reports_presence_for_the_sample_roster() {
    // 2025-06-10 is a Tuesday; Alice and Carol have regular Tuesdays.
    run_cli("who 2025-06-10\nquit\n")
        .success()
        .stdout(str_contains("Alice Kim"))
        .stdout(str_contains("Carol Park"));
}

#[test]
fn cli_who_applies_team_filters() {
    let assert = run_cli("who 2025-06-10 teams=DA\nquit\n").success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(output.contains("Carol Park"));
    assert!(
        !output.contains("Alice Kim"),
        "team filter should drop DO members:\n{}",
        output
    );
}

#[test]
fn cli_week_command_applies_the_sample_override() {
    run_cli("week 1 2025-06-24\nquit\n")
        .success()
        .stdout(str_contains("2025-06-23"))
        .stdout(str_contains("2025-06-27"));
}

#[test]
fn cli_lists_holidays() {
    run_cli("holidays\nquit\n")
        .success()
        .stdout(str_contains("Christmas Day"))
        .stdout(str_contains("Company Holiday"));
}

#[test]
fn cli_lists_events_on_a_date() {
    run_cli("events 2025-06-25\nquit\n")
        .success()
        .stdout(str_contains("Project Sprint"))
        .stdout(str_contains("Conference"));
}

#[test]
fn cli_rejects_unknown_commands() {
    run_cli("frobnicate\nquit\n")
        .success()
        .stdout(str_contains("Unknown command. Type 'help'."));
}

#[test]
fn cli_reports_missing_members() {
    run_cli("week 99 2025-06-24\nquit\n")
        .success()
        .stdout(str_contains("Member 99 not found."));
}
