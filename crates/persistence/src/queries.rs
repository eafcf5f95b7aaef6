// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries against the progress store.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::diesel_schema;
use crate::error::PersistenceError;

/// Loads the raw serialized payload stored under a record key.
///
/// Returns `None` when no record has ever been saved for the key; the
/// caller synthesizes a zero-filled record in that case.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn load_payload(
    conn: &mut SqliteConnection,
    key: &str,
) -> Result<Option<String>, PersistenceError> {
    let payload: Option<String> = diesel_schema::progress_records::table
        .filter(diesel_schema::progress_records::record_key.eq(key))
        .select(diesel_schema::progress_records::payload)
        .first::<String>(conn)
        .optional()?;
    Ok(payload)
}
