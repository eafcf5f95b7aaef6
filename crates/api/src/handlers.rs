// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use promo_master::{Command, Session, apply};
use promo_master_domain::{
    ActionPlanEntry, Catalog, PartnerCategory, PromotionId, Rank, SimulatorInput, UserIdentity,
    compute_impacts, parse_progress_input, percent_complete, standard_action_plans,
    standard_rules, validate_identity,
};
use promo_master_persistence::Persistence;
use tracing::{info, warn};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    DashboardRow, LoginRequest, PromotionGuideResponse, SetProgressOutcome, SetProgressRequest,
    SimulateRequest, SimulateResponse,
};

/// Starts a session for a member.
///
/// This is a local gate, not authentication: both the member id and the
/// display name must be non-empty and the rank label must parse. The
/// member's stored record (or a zero-filled one) is loaded and a ready
/// session is returned.
///
/// # Errors
///
/// Returns [`ApiError::InvalidInput`] for an empty member id or display
/// name or an unknown rank, and [`ApiError::PersistenceFailure`] if the
/// record cannot be loaded.
pub fn login(
    persistence: &mut Persistence,
    catalog: &Catalog,
    request: &LoginRequest,
) -> Result<Session, ApiError> {
    if request.member_id.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("member_id"),
            message: String::from("Member id cannot be empty"),
        });
    }
    let rank: Rank = request
        .rank
        .parse()
        .map_err(|e| translate_domain_error(&e))?;
    let identity: UserIdentity = UserIdentity::new(
        request.display_name.clone(),
        request.gender,
        rank,
        request.average_volume,
        request.is_executive,
    );
    validate_identity(&identity).map_err(|e| translate_domain_error(&e))?;

    info!(display_name = %identity.display_name, "Member logged in");
    let record = persistence.load_record(&identity, catalog)?;
    Ok(Session::for_identity(identity, record))
}

/// Replaces the active session with one for a different identity.
///
/// The previous session's record is discarded wholesale; the new
/// identity's saved record (or a zero-filled one) is loaded.
///
/// # Errors
///
/// Returns [`ApiError::InvalidInput`] for an empty display name and
/// [`ApiError::PersistenceFailure`] if the record cannot be loaded.
pub fn switch_identity(
    persistence: &mut Persistence,
    catalog: &Catalog,
    identity: UserIdentity,
) -> Result<Session, ApiError> {
    validate_identity(&identity).map_err(|e| translate_domain_error(&e))?;
    info!(display_name = %identity.display_name, "Switching active identity");
    let record = persistence.load_record(&identity, catalog)?;
    Ok(Session::for_identity(identity, record))
}

/// Builds the progress dashboard for the active session.
///
/// One row per catalog promotion, in declaration order. Pure read.
#[must_use]
pub fn dashboard(catalog: &Catalog, session: &Session) -> Vec<DashboardRow> {
    catalog
        .list()
        .iter()
        .map(|definition| DashboardRow {
            promotion_id: definition.id.clone(),
            name: definition.name.clone(),
            unit: definition.unit.clone(),
            current_value: session.record.value(&definition.id),
            target_value: definition.target_value,
            percent: percent_complete(&session.record, definition),
            is_golden_quarter: definition.is_golden_quarter,
        })
        .collect()
}

/// Returns the details and guide steps for one promotion's modal view.
///
/// # Errors
///
/// Returns [`ApiError::ResourceNotFound`] for an id the catalog does not
/// contain.
pub fn promotion_guide(catalog: &Catalog, id: &str) -> Result<PromotionGuideResponse, ApiError> {
    let promotion_id: PromotionId = PromotionId::new(id);
    let definition = catalog
        .get(&promotion_id)
        .map_err(|e| translate_domain_error(&e))?;
    Ok(PromotionGuideResponse {
        promotion_id: definition.id.clone(),
        name: definition.name.clone(),
        unit: definition.unit.clone(),
        target_value: definition.target_value,
        starts_on: definition.details.window.start,
        ends_on: definition.details.window.end,
        audience: definition.details.audience.clone(),
        reward: definition.details.reward.clone(),
        guide: definition.details.guide.clone(),
        is_golden_quarter: definition.is_golden_quarter,
    })
}

/// Records a progress value from free-form numeric entry text.
///
/// Malformed or negative text coerces to 0 rather than failing the
/// operation. On success the full record is durably saved and the
/// returned session is marked saved. If the save fails, the outcome
/// still carries the session: its record holds the new value and stays
/// flagged unsaved, and `save_error` reports the failure.
///
/// # Errors
///
/// Returns [`ApiError::ResourceNotFound`] for an id the catalog does not
/// contain. Save failures are reported through
/// [`SetProgressOutcome::save_error`], not as an `Err`.
pub fn set_progress_value(
    persistence: &mut Persistence,
    catalog: &Catalog,
    session: &Session,
    request: &SetProgressRequest,
) -> Result<SetProgressOutcome, ApiError> {
    let value: f64 = parse_progress_input(&request.raw_value);
    let command = Command::SetProgressValue {
        promotion_id: PromotionId::new(&request.promotion_id),
        value,
    };
    let transition = apply(catalog, session, command).map_err(|e| translate_core_error(&e))?;

    let mut updated: Session = transition.new_session;
    if let Err(save_error) = persistence.save_record(&updated.identity, &updated.record) {
        warn!(
            display_name = %updated.identity.display_name,
            %save_error,
            "Progress record save failed; in-memory record stays authoritative"
        );
        return Ok(SetProgressOutcome {
            session: updated,
            save_error: Some(save_error.into()),
        });
    }
    updated.mark_saved();
    Ok(SetProgressOutcome {
        session: updated,
        save_error: None,
    })
}

/// Runs the synergy simulator against one hypothetical action.
///
/// Never touches stored progress. The projected volume is clamped and
/// step-snapped on input construction.
///
/// # Errors
///
/// Returns [`ApiError::InvalidInput`] for an unknown partner category
/// selector value.
pub fn simulate(request: &SimulateRequest) -> Result<SimulateResponse, ApiError> {
    let category: PartnerCategory = PartnerCategory::parse(&request.partner_category)
        .map_err(|e| translate_domain_error(&e))?;
    let input = SimulatorInput::new(
        category,
        request.includes_starter_bundle,
        request.projected_volume,
    );
    let impacts = compute_impacts(&input, &standard_rules())
        .iter()
        .map(std::string::ToString::to_string)
        .collect();
    Ok(SimulateResponse { impacts })
}

/// Returns the static 12-week action plan, in display order.
#[must_use]
pub fn list_action_plans() -> Vec<ActionPlanEntry> {
    standard_action_plans()
}
