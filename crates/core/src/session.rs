// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use promo_master_domain::{ProgressRecord, PromotionId, UserIdentity};

/// The modal view/edit state machine of the dashboard.
///
/// An explicit enum rather than ad hoc boolean flags, so invalid
/// combinations (editing with no selected promotion) cannot be
/// represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    /// No promotion modal is open.
    #[default]
    Closed,
    /// The guide modal for one promotion is open.
    Viewing {
        /// The selected promotion.
        promotion_id: PromotionId,
    },
    /// The value editor for one promotion is open.
    Editing {
        /// The selected promotion.
        promotion_id: PromotionId,
        /// The free-form draft text in the numeric input.
        draft: String,
    },
}

impl ModalState {
    /// Short state label for error messages and logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Closed => "Closed",
            Self::Viewing { .. } => "Viewing",
            Self::Editing { .. } => "Editing",
        }
    }
}

/// The complete in-memory state for the active user identity.
///
/// Exactly one session exists at a time. Switching identities replaces
/// the session wholesale after the new identity's record is loaded; the
/// previous identity's record is never merged in.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// The active identity.
    pub identity: UserIdentity,
    /// The identity's progress record. Owned here exclusively; the UI
    /// mutates it only through commands.
    pub record: ProgressRecord,
    /// The modal state machine.
    pub modal: ModalState,
    /// True when the in-memory record has mutations not yet durably
    /// saved. The record stays authoritative until a save succeeds.
    pub unsaved: bool,
}

impl Session {
    /// Creates a session for an identity whose record has been loaded.
    ///
    /// Invoked as the reaction to an identity change: this is the moment
    /// the "active record" switches.
    #[must_use]
    pub const fn for_identity(identity: UserIdentity, record: ProgressRecord) -> Self {
        Self {
            identity,
            record,
            modal: ModalState::Closed,
            unsaved: false,
        }
    }

    /// Marks the record as durably saved.
    pub const fn mark_saved(&mut self) {
        self.unsaved = false;
    }
}

/// The result of a successful transition.
///
/// Transitions are atomic: they either succeed completely or fail
/// without side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new session after the transition.
    pub new_session: Session,
    /// Whether the caller must follow up with a durable save of the
    /// full record.
    pub persist_required: bool,
}

/// Renders a stored progress value as numeric input text.
///
/// Whole values render without a fractional part ("110", not "110.0"),
/// matching what the edit field seeds its draft with.
#[must_use]
pub fn format_progress_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
