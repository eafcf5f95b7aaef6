// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod action_plan;
mod catalog;
mod error;
mod progress;
mod synergy;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use action_plan::{ActionPlanEntry, standard_action_plans};
pub use catalog::{Catalog, PromotionDefinition, PromotionDetails, QualifyingWindow};
pub use error::DomainError;
pub use progress::{ProgressRecord, parse_progress_input, percent_complete};
pub use synergy::{
    SimulatorInput, SynergyImpact, SynergyRule, VOLUME_MAX, VOLUME_STEP, compute_impacts,
    standard_rules,
};
pub use types::{Gender, PartnerCategory, PromotionId, Rank, UserIdentity};
pub use validation::validate_identity;
