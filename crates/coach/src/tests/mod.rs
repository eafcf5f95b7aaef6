// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use promo_master_domain::{Gender, Rank, UserIdentity};

pub fn create_test_identity(name: &str) -> UserIdentity {
    UserIdentity::new(String::from(name), Gender::Female, Rank::Silver, 120, false)
}
