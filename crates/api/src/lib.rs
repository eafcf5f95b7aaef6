// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the promotion progress engine.
//!
//! Handlers here are the only place the frontend-facing operations meet
//! the catalog, the core state machine, and the persistence layer. Each
//! handler validates its request, delegates to the lower layers, and
//! translates their errors into the [`ApiError`] taxonomy.

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

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    dashboard, list_action_plans, login, promotion_guide, set_progress_value, simulate,
    switch_identity,
};
pub use request_response::{
    DashboardRow, LoginRequest, PromotionGuideResponse, SetProgressOutcome, SetProgressRequest,
    SimulateRequest, SimulateResponse,
};
