// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod import;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use duty_roster::{
    AssignmentFilter, AssignmentStore, CoreError, DutyRoster, RandomTieBreaker, StoreError,
    TradeFilter, TradeStore,
};
use duty_roster_domain::{
    AssignmentId, AssignmentStatus, PersonId, ScheduleId, TradeRequestId, TradeStatus,
};
use duty_roster_persistence::{Persistence, PersistenceError};
use serde_json::Value;
use tracing::{error, info};

/// Duty Roster - allocate, reassign and trade recurring duty slots
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Seed for the allocation tie-break. Random when omitted.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load persons, areas and schedules from a JSON file
    Import {
        /// The JSON document to load
        file: PathBuf,
    },
    /// Fill every unallocated schedule, or just one
    Allocate {
        /// Allocate only this schedule
        #[arg(long)]
        schedule: Option<i64>,
    },
    /// Refill a canceled assignment
    Reassign {
        /// The canceled assignment
        assignment: i64,
    },
    /// Change the status of an assignment
    SetStatus {
        /// The assignment to update
        assignment: i64,
        /// One of assigned, done, canceled, delinquent
        status: AssignmentStatus,
    },
    /// File a trade request between two assignments
    Propose {
        /// The assignment asking for the exchange
        requester: i64,
        /// The assignment to take over
        target: i64,
    },
    /// Accept, reject or cancel a pending trade request
    Resolve {
        /// The trade request
        trade: i64,
        /// One of accepted, rejected, canceled
        status: TradeStatus,
    },
    /// List assignments
    Assignments {
        /// Only this schedule
        #[arg(long)]
        schedule: Option<i64>,
        /// Only this person
        #[arg(long)]
        person: Option<i64>,
        /// Only this status
        #[arg(long)]
        status: Option<AssignmentStatus>,
    },
    /// List trade requests
    Trades {
        /// Only pending requests
        #[arg(long)]
        pending: bool,
    },
}

/// Errors surfaced by the command-line tool.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Roster(#[from] CoreError),
}

fn open_database(args: &Args) -> Result<Persistence, PersistenceError> {
    if let Some(db_path) = &args.database {
        info!(path = %db_path.display(), "Using file-based database");
        Persistence::new_with_file(db_path)
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()
    }
}

/// Runs one command and returns its result as JSON.
fn run(args: Args) -> Result<Value, CliError> {
    let persistence: Persistence = open_database(&args)?;
    let tie_breaker: RandomTieBreaker = args
        .seed
        .map_or_else(RandomTieBreaker::new, RandomTieBreaker::seeded);
    let roster: DutyRoster<Persistence> = DutyRoster::with_tie_breaker(persistence, tie_breaker);

    let output: Value = match args.command {
        Command::Import { file } => {
            serde_json::to_value(roster.inspect(|store| import::import_file(store, &file))??)?
        }
        Command::Allocate { schedule: None } => serde_json::to_value(roster.allocate_all()?)?,
        Command::Allocate {
            schedule: Some(schedule_id),
        } => serde_json::to_value(roster.allocate(ScheduleId::new(schedule_id))?)?,
        Command::Reassign { assignment } => {
            serde_json::to_value(roster.reassign(AssignmentId::new(assignment))?)?
        }
        Command::SetStatus { assignment, status } => serde_json::to_value(
            roster.set_assignment_status(AssignmentId::new(assignment), status)?,
        )?,
        Command::Propose { requester, target } => serde_json::to_value(
            roster.propose_trade(AssignmentId::new(requester), AssignmentId::new(target))?,
        )?,
        Command::Resolve { trade, status } => {
            serde_json::to_value(roster.resolve_trade(TradeRequestId::new(trade), status)?)?
        }
        Command::Assignments {
            schedule,
            person,
            status,
        } => {
            let filter: AssignmentFilter = AssignmentFilter {
                schedule_id: schedule.map(ScheduleId::new),
                person_id: person.map(PersonId::new),
                area_id: None,
                status,
            };
            serde_json::to_value(roster.inspect(|store| store.list_assignments(&filter))??)?
        }
        Command::Trades { pending } => {
            let filter: TradeFilter = if pending {
                TradeFilter::pending()
            } else {
                TradeFilter::default()
            };
            serde_json::to_value(roster.inspect(|store| store.list_trades(&filter))??)?
        }
    };

    Ok(output)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run(args) {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "Command failed");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use std::path::Path;

    const ROSTER_JSON: &str = r#"{
        "persons": [
            { "id": 1, "name": "Ada", "grade": 1 },
            { "id": 2, "name": "Grace", "grade": 1 },
            { "id": 3, "name": "Linus", "grade": 1, "status": "inactive" }
        ],
        "areas": [
            { "id": 1, "name": "Gate", "required_headcount": 1, "eligible_grades": [1] }
        ],
        "schedules": [
            { "id": 1, "duty_date": "2026-03-06" },
            { "id": 2, "duty_date": "2026-03-13" }
        ]
    }"#;

    fn run_with(database: &Path, command: &[&str]) -> Result<Value, CliError> {
        let mut argv: Vec<String> = vec![
            String::from("duty-roster"),
            String::from("--database"),
            database.display().to_string(),
            String::from("--seed"),
            String::from("11"),
        ];
        argv.extend(command.iter().map(ToString::to_string));
        run(Args::try_parse_from(argv).unwrap())
    }

    fn seeded_database(dir: &tempfile::TempDir) -> PathBuf {
        let database: PathBuf = dir.path().join("roster.db");
        let roster_file: PathBuf = dir.path().join("roster.json");
        std::fs::write(&roster_file, ROSTER_JSON).unwrap();
        let summary: Value =
            run_with(&database, &["import", roster_file.to_str().unwrap()]).unwrap();
        assert_eq!(summary["persons"], 3);
        assert_eq!(summary["areas"], 1);
        assert_eq!(summary["schedules"], 2);
        database
    }

    #[test]
    fn test_parses_status_arguments() {
        let args: Args =
            Args::try_parse_from(["duty-roster", "set-status", "4", "delinquent"]).unwrap();
        assert!(matches!(
            args.command,
            Command::SetStatus {
                assignment: 4,
                status: AssignmentStatus::Delinquent
            }
        ));

        let bad = Args::try_parse_from(["duty-roster", "resolve", "1", "maybe"]);
        assert!(bad.is_err());
    }

    #[test]
    fn test_import_then_allocate() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let database: PathBuf = seeded_database(&dir);

        let summary: Value = run_with(&database, &["allocate"]).unwrap();
        assert_eq!(summary["total_placed"], 2);

        let listed: Value = run_with(&database, &["assignments"]).unwrap();
        let people: Vec<i64> = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["person_id"].as_i64().unwrap())
            .collect();
        assert_eq!(people.len(), 2);
        assert!(!people.contains(&3));
        assert_ne!(people[0], people[1]);
    }

    #[test]
    fn test_cancel_reassign_and_trade() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let database: PathBuf = seeded_database(&dir);
        run_with(&database, &["allocate"]).unwrap();

        let canceled: Value = run_with(&database, &["set-status", "1", "canceled"]).unwrap();
        assert_eq!(canceled["status"], "canceled");
        let refilled: Value = run_with(&database, &["reassign", "1"]).unwrap();
        assert_eq!(refilled["assignment"]["status"], "assigned");

        let trade: Value = run_with(&database, &["propose", "1", "2"]).unwrap();
        assert_eq!(trade["status"], "pending");
        let pending: Value = run_with(&database, &["trades", "--pending"]).unwrap();
        assert_eq!(pending.as_array().unwrap().len(), 1);

        let resolved: Value = run_with(&database, &["resolve", "1", "rejected"]).unwrap();
        assert_eq!(resolved["status"], "rejected");
        let pending: Value = run_with(&database, &["trades", "--pending"]).unwrap();
        assert!(pending.as_array().unwrap().is_empty());
    }

    #[test]
    fn test_engine_errors_are_reported() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let database: PathBuf = seeded_database(&dir);

        let err: CliError = run_with(&database, &["reassign", "99"]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Roster(CoreError::AssignmentNotFound(_))
        ));

        run_with(&database, &["allocate", "--schedule", "1"]).unwrap();
        let err: CliError = run_with(&database, &["allocate", "--schedule", "1"]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Roster(CoreError::ScheduleAlreadyAllocated(_))
        ));
    }

    #[test]
    fn test_malformed_import_writes_nothing() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let database: PathBuf = dir.path().join("roster.db");
        let roster_file: PathBuf = dir.path().join("roster.json");
        // The second area has no eligible grades.
        std::fs::write(
            &roster_file,
            r#"{
                "persons": [{ "id": 1, "name": "Ada", "grade": 1 }],
                "areas": [
                    { "id": 1, "name": "Gate", "required_headcount": 1, "eligible_grades": [1] },
                    { "id": 2, "name": "Hall", "required_headcount": 1, "eligible_grades": [] }
                ]
            }"#,
        )
        .unwrap();

        let err: CliError =
            run_with(&database, &["import", roster_file.to_str().unwrap()]).unwrap_err();
        assert!(matches!(err, CliError::Persistence(_)));

        let listed: Value = run_with(&database, &["assignments"]).unwrap();
        assert!(listed.as_array().unwrap().is_empty());
        let mut persistence: Persistence = Persistence::new_with_file(&database).unwrap();
        assert!(persistence.list_persons().unwrap().is_empty());
    }
}
