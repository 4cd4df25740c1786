// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster import.
//!
//! A single JSON document carries the records owned by the roster, area and
//! schedule collaborators:
//!
//! ```json
//! {
//!   "persons": [{ "id": 1, "name": "Ada", "grade": 2 }],
//!   "areas": [{ "id": 1, "name": "Gate", "required_headcount": 2, "eligible_grades": [1, 2] }],
//!   "schedules": [{ "id": 1, "duty_date": "2026-03-06" }]
//! }
//! ```
//!
//! Records are upserted by identity, so importing the same file twice is
//! harmless. A file that fails part way leaves the database untouched.

use std::path::Path;

use duty_roster::Store;
use duty_roster_domain::{Area, Person, Schedule};
use duty_roster_persistence::Persistence;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::CliError;

/// The import document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterImport {
    #[serde(default)]
    pub persons: Vec<Person>,
    #[serde(default)]
    pub areas: Vec<Area>,
    #[serde(default)]
    pub schedules: Vec<Schedule>,
}

/// Counts of imported records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub persons: usize,
    pub areas: usize,
    pub schedules: usize,
}

/// Reads `path` and upserts every record it holds.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or a record is
/// rejected by the database.
pub fn import_file(persistence: &mut Persistence, path: &Path) -> Result<ImportSummary, CliError> {
    let text: String = std::fs::read_to_string(path)?;
    let document: RosterImport = serde_json::from_str(&text)?;
    persistence.atomically(|persistence: &mut Persistence| import(persistence, &document))
}

/// Upserts every record in `document`.
///
/// # Errors
///
/// Returns an error if a record is rejected by the database.
pub fn import(
    persistence: &mut Persistence,
    document: &RosterImport,
) -> Result<ImportSummary, CliError> {
    for person in &document.persons {
        persistence.insert_person(person)?;
    }
    for area in &document.areas {
        persistence.insert_area(area)?;
    }
    for schedule in &document.schedules {
        persistence.insert_schedule(schedule)?;
    }

    let summary: ImportSummary = ImportSummary {
        persons: document.persons.len(),
        areas: document.areas.len(),
        schedules: document.schedules.len(),
    };
    info!(
        persons = summary.persons,
        areas = summary.areas,
        schedules = summary.schedules,
        "Imported roster"
    );
    Ok(summary)
}
