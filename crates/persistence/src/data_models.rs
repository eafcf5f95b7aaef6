// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::diesel_schema::progress_records;
use diesel::prelude::*;

/// Row to insert or replace in `progress_records`.
///
/// `updated_at` is omitted so the database default applies on every
/// replace.
#[derive(Debug, Insertable)]
#[diesel(table_name = progress_records)]
pub struct NewProgressRecordRow<'a> {
    pub record_key: &'a str,
    pub payload: &'a str,
}
