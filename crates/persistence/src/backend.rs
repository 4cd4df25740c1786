// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opening and configuring the roster database.
//!
//! Everything the Diesel DSL cannot express lives here: PRAGMA statements,
//! the embedded migrations and `last_insert_rowid()`. Queries and mutations
//! over the roster tables live in `queries/` and `mutations/`.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Roster schema, embedded at compile time.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// How long a writer waits on a locked file database before failing.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Where the roster lives, which decides the journal settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    /// Shared-cache in-memory database; journal settings are left alone.
    Memory,
    /// File on disk; switched to WAL with a busy timeout so a second
    /// process waits for the lock instead of failing straight away.
    File,
}

#[derive(QueryableByName)]
struct ForeignKeysRow {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Opens the database, applies connection settings and brings the schema
/// up to date.
///
/// # Errors
///
/// Returns an error if the connection, a PRAGMA or a migration fails, or
/// if foreign key enforcement did not take effect.
pub fn open(database_url: &str, storage: Storage) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, ?storage, "Opening roster database");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    // Raw SQL: Diesel has no PRAGMA DSL.
    pragma(&mut conn, "PRAGMA foreign_keys = ON")?;
    if storage == Storage::File {
        pragma(&mut conn, "PRAGMA journal_mode = WAL")?;
        let busy_timeout: String = format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}");
        pragma(&mut conn, &busy_timeout)?;
    }

    let applied: usize = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?
        .len();
    debug!(applied, "Roster migrations up to date");

    if !foreign_keys_enabled(&mut conn)? {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    Ok(conn)
}

fn pragma(conn: &mut SqliteConnection, statement: &str) -> Result<(), PersistenceError> {
    diesel::sql_query(statement)
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("{statement}: {e}")))?;
    Ok(())
}

/// Reports whether the connection enforces foreign keys.
///
/// # Errors
///
/// Returns an error if the PRAGMA cannot be read.
pub fn foreign_keys_enabled(conn: &mut SqliteConnection) -> Result<bool, PersistenceError> {
    let row: ForeignKeysRow = diesel::sql_query("PRAGMA foreign_keys").get_result(conn)?;
    Ok(row.foreign_keys != 0)
}

/// Returns the row id of the most recent insert on this connection.
///
/// Assignment and trade ids are `AUTOINCREMENT` keys, so this is the id of
/// the record just created.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    let rowid: i64 = diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?;
    Ok(rowid)
}
