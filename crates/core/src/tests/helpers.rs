// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Session;
use promo_master_domain::{Catalog, Gender, ProgressRecord, Rank, UserIdentity};

pub fn create_test_identity(name: &str) -> UserIdentity {
    UserIdentity::new(String::from(name), Gender::Female, Rank::Silver, 120, false)
}

pub fn create_test_session(catalog: &Catalog) -> Session {
    Session::for_identity(
        create_test_identity("Alice"),
        ProgressRecord::zeroed(catalog),
    )
}
