// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations on the progress store.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::NewProgressRecordRow;
use crate::diesel_schema;
use crate::error::PersistenceError;

/// Replaces the full payload stored under a record key.
///
/// Last-write-wins: the prior row content, if any, is replaced
/// entirely. There is no merge because this process is the sole writer.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn replace_payload(
    conn: &mut SqliteConnection,
    key: &str,
    payload: &str,
) -> Result<(), PersistenceError> {
    let row: NewProgressRecordRow<'_> = NewProgressRecordRow {
        record_key: key,
        payload,
    };

    diesel::replace_into(diesel_schema::progress_records::table)
        .values(&row)
        .execute(conn)?;

    debug!(key, bytes = payload.len(), "Replaced progress record");
    Ok(())
}
