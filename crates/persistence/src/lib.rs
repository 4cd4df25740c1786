// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite persistence for the duty roster.
//!
//! [`Persistence`] implements every store trait from `duty-roster` on top
//! of a single Diesel `SqliteConnection`, so the allocation, reassignment
//! and trade engines run unchanged against a durable database.
//!
//! ## Schema
//!
//! Migrations are embedded at compile time and applied on open. Foreign
//! key enforcement is switched on and verified before the adapter is
//! handed out; an assignment can only reference an existing schedule,
//! person and area, and a trade request only existing assignments.
//!
//! ## Databases
//!
//! - [`Persistence::new_in_memory`] opens a fresh shared-cache in-memory
//!   database, unique per call, for tests and dry runs.
//! - [`Persistence::new_with_file`] opens (or creates) a file and enables
//!   WAL mode.
//!
//! ## Atomicity
//!
//! `Store::atomically` runs its closure inside a transaction on the
//! connection: a closure that returns `Err` leaves the database as it was.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use diesel::SqliteConnection;
use duty_roster_domain::{Area, Person, Schedule, validate_area};

use crate::backend::Storage;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Durable store backed by `SQLite`.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives its own database, isolated from every other.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:memdb_roster_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::open(&shared_memory_url, Storage::Memory)?;
        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let conn: SqliteConnection = backend::open(path_str, Storage::File)?;
        Ok(Self { conn })
    }

    // ========================================================================
    // Seed data
    // ========================================================================

    /// Adds or replaces a person.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn insert_person(&mut self, person: &Person) -> Result<(), PersistenceError> {
        mutations::roster::upsert_person(&mut self.conn, person)
    }

    /// Adds or replaces an area and its eligible grades.
    ///
    /// # Errors
    ///
    /// Returns an error if the area is invalid or the write fails.
    pub fn insert_area(&mut self, area: &Area) -> Result<(), PersistenceError> {
        validate_area(area).map_err(|e| PersistenceError::InvalidRecord(e.to_string()))?;
        mutations::roster::upsert_area(&mut self.conn, area)
    }

    /// Adds or replaces a schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails or the date is taken by another
    /// schedule.
    pub fn insert_schedule(&mut self, schedule: &Schedule) -> Result<(), PersistenceError> {
        mutations::roster::upsert_schedule(&mut self.conn, schedule)
    }

    /// Lists every person, enrolled or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_persons(&mut self) -> Result<Vec<Person>, PersistenceError> {
        queries::roster::list_persons(&mut self.conn)
    }
}
