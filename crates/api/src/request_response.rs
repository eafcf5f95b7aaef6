// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use promo_master::Session;
use promo_master_domain::{Gender, PromotionId};
use time::Date;

use crate::error::ApiError;

/// API request to start a session for a member.
///
/// The member id and display name are a local gate only; no credential
/// verification happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// The member number as entered.
    pub member_id: String,
    /// The display name the session (and stored progress) is keyed by.
    pub display_name: String,
    /// The member's gender.
    pub gender: Gender,
    /// The member's current rank label (parsed, e.g. "Silver").
    pub rank: String,
    /// 13-week average volume in CP.
    pub average_volume: u32,
    /// Whether the member holds an executive position.
    pub is_executive: bool,
}

/// One row of the progress dashboard, in catalog declaration order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DashboardRow {
    /// The promotion's stable id.
    pub promotion_id: PromotionId,
    /// The promotion's display name.
    pub name: String,
    /// The unit the target is measured in.
    pub unit: String,
    /// The raw stored progress value (may exceed the target).
    pub current_value: f64,
    /// The qualification target.
    pub target_value: f64,
    /// Clamped completion percentage in `[0, 100]`.
    pub percent: u8,
    /// Whether the promotion belongs to the golden-quarter group.
    pub is_golden_quarter: bool,
}

/// Details and guide steps for one promotion's modal view.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PromotionGuideResponse {
    /// The promotion's stable id.
    pub promotion_id: PromotionId,
    /// The promotion's display name.
    pub name: String,
    /// The unit the target is measured in.
    pub unit: String,
    /// The qualification target.
    pub target_value: f64,
    /// First day of the qualifying window.
    pub starts_on: Date,
    /// Last day of the qualifying window (inclusive).
    pub ends_on: Date,
    /// Who the promotion is aimed at.
    pub audience: String,
    /// The reward for qualifying.
    pub reward: String,
    /// Ordered achievement guide steps.
    pub guide: Vec<String>,
    /// Whether the promotion belongs to the golden-quarter group.
    pub is_golden_quarter: bool,
}

/// API request to record a progress value for one promotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetProgressRequest {
    /// The promotion to update.
    pub promotion_id: String,
    /// Free-form numeric entry text; malformed input coerces to 0.
    pub raw_value: String,
}

/// The outcome of a progress update.
///
/// The session is returned on the save-failure path too: the in-memory
/// record keeps the new value and stays flagged unsaved until a later
/// save succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct SetProgressOutcome {
    /// The session after the update.
    pub session: Session,
    /// Present when the durable save failed; `None` means saved.
    pub save_error: Option<ApiError>,
}

/// API request to run the synergy simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulateRequest {
    /// The hypothetical partner's category selector value.
    pub partner_category: String,
    /// Whether the action includes a Celavive starter bundle.
    pub includes_starter_bundle: bool,
    /// Projected purchase volume; clamped and step-snapped on entry.
    pub projected_volume: u32,
}

/// Rendered synergy impacts, in rule-table order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SimulateResponse {
    /// One rendered line per fired rule.
    pub impacts: Vec<String>,
}
