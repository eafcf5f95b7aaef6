// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for API tests.

use promo_master_domain::{Catalog, Gender, Rank, UserIdentity};
use promo_master_persistence::Persistence;

use crate::request_response::LoginRequest;

pub fn create_test_catalog() -> Catalog {
    Catalog::standard()
}

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

pub fn create_test_identity(display_name: &str) -> UserIdentity {
    UserIdentity::new(
        String::from(display_name),
        Gender::Female,
        Rank::Silver,
        120,
        false,
    )
}

pub fn create_login_request(display_name: &str) -> LoginRequest {
    LoginRequest {
        member_id: String::from("10001"),
        display_name: String::from(display_name),
        gender: Gender::Female,
        rank: String::from("Silver"),
        average_volume: 120,
        is_executive: false,
    }
}
