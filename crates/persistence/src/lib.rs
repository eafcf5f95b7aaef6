// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Promo Master engine.
//!
//! This crate stores each identity's progress record as a single
//! key-value row on `SQLite` via Diesel: the key is
//! `progress:<display_name>`, the value is the full serialized
//! `{promotion_id: value}` map. Every save replaces the whole record
//! (last-write-wins); there is no merge because exactly one process
//! writes at a time.
//!
//! The display name is used as the storage key with no identity
//! resolution. Two users with the same display name share a stored
//! record; this is a documented limitation of the system, preserved
//! deliberately.
//!
//! ## Testing
//!
//! Tests run against unique shared in-memory databases. Each call to
//! [`Persistence::new_in_memory`] receives a sequential database name
//! from an atomic counter, so tests are isolated without time-based
//! collisions.

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

use diesel::SqliteConnection;
use promo_master_domain::{Catalog, ProgressRecord, UserIdentity};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Builds the storage key for an identity.
///
/// Exact string match on the display name; no normalization beyond what
/// the identity itself carries.
#[must_use]
pub fn storage_key(identity: &UserIdentity) -> String {
    format!("progress:{}", identity.display_name)
}

/// Persistence adapter for progress records.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter backed by a unique in-memory
    /// `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:promo_memdb_{db_id}?mode=memory&cache=shared");
        Self::new_with_url(&shared_memory_url)
    }

    /// Creates a persistence adapter for an explicit connection string.
    ///
    /// Accepts any `SQLite` connection string, including shared
    /// in-memory URLs, and runs pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_with_url(database_url: &str) -> Result<Self, PersistenceError> {
        let conn: SqliteConnection = sqlite::initialize_database(database_url)?;
        Ok(Self { conn })
    }

    /// Creates a persistence adapter backed by a file database.
    ///
    /// WAL mode is enabled for better read concurrency.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError(String::from("Invalid database path"))
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        Ok(Self { conn })
    }

    /// Loads the progress record for an identity.
    ///
    /// Pure read: when no state was ever saved for this identity, a
    /// zero-filled record covering every current catalog id is
    /// synthesized instead. A saved record is allowed to be a sparse
    /// subset of the catalog's ids; missing entries read as 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored payload cannot
    /// be deserialized.
    pub fn load_record(
        &mut self,
        identity: &UserIdentity,
        catalog: &Catalog,
    ) -> Result<ProgressRecord, PersistenceError> {
        let key: String = storage_key(identity);
        match queries::load_payload(&mut self.conn, &key)? {
            Some(payload) => {
                let record: ProgressRecord = serde_json::from_str(&payload)?;
                info!(key, entries = record.len(), "Loaded progress record");
                Ok(record)
            }
            None => {
                info!(key, "No saved record; synthesizing zero-filled record");
                Ok(ProgressRecord::zeroed(catalog))
            }
        }
    }

    /// Saves the full progress record for an identity.
    ///
    /// The whole record is persisted, not a diff, replacing prior
    /// content under the same key. Serialization is deterministic, so
    /// saving an identical record produces identical stored bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails. On
    /// failure the in-memory record remains authoritative; the caller
    /// decides whether to retry or warn the user.
    pub fn save_record(
        &mut self,
        identity: &UserIdentity,
        record: &ProgressRecord,
    ) -> Result<(), PersistenceError> {
        let key: String = storage_key(identity);
        let payload: String = serde_json::to_string(record)?;
        mutations::replace_payload(&mut self.conn, &key, &payload)?;
        info!(key, entries = record.len(), "Saved progress record");
        Ok(())
    }

    /// Returns the raw stored payload for an identity, if any.
    ///
    /// Exposed for byte-level inspection (idempotence checks); normal
    /// callers use [`Self::load_record`].
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn raw_payload(
        &mut self,
        identity: &UserIdentity,
    ) -> Result<Option<String>, PersistenceError> {
        let key: String = storage_key(identity);
        queries::load_payload(&mut self.conn, &key)
    }
}
