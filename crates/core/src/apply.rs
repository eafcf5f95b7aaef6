// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::session::{ModalState, Session, TransitionResult, format_progress_value};
use promo_master_domain::{Catalog, DomainError};

/// Applies a command to a session, producing the new session.
///
/// This is a pure transition function: the input session is never
/// mutated, and a failed command leaves no side effects. Promotion ids
/// are validated against the catalog; an unknown id is a caller
/// contract violation and fails the operation.
///
/// # Errors
///
/// Returns an error if:
/// - The command references a promotion id the catalog does not contain
/// - The command is not valid in the current modal state
pub fn apply(
    catalog: &Catalog,
    session: &Session,
    command: Command,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::ViewPromotion { promotion_id } => {
            if !catalog.contains(&promotion_id) {
                return Err(CoreError::DomainViolation(DomainError::PromotionNotFound(
                    promotion_id.value().to_string(),
                )));
            }

            let mut new_session: Session = session.clone();
            new_session.modal = ModalState::Viewing { promotion_id };
            Ok(TransitionResult {
                new_session,
                persist_required: false,
            })
        }
        Command::BeginEditing => {
            // Editing always starts from the guide view of a selected
            // promotion; the draft seeds with the stored value.
            let ModalState::Viewing { promotion_id } = &session.modal else {
                return Err(CoreError::InvalidTransition {
                    action: "begin editing",
                    state: session.modal.label(),
                });
            };

            let draft: String = format_progress_value(session.record.value(promotion_id));
            let mut new_session: Session = session.clone();
            new_session.modal = ModalState::Editing {
                promotion_id: promotion_id.clone(),
                draft,
            };
            Ok(TransitionResult {
                new_session,
                persist_required: false,
            })
        }
        Command::UpdateDraft { draft } => {
            let ModalState::Editing { promotion_id, .. } = &session.modal else {
                return Err(CoreError::InvalidTransition {
                    action: "update draft",
                    state: session.modal.label(),
                });
            };

            let mut new_session: Session = session.clone();
            new_session.modal = ModalState::Editing {
                promotion_id: promotion_id.clone(),
                draft,
            };
            Ok(TransitionResult {
                new_session,
                persist_required: false,
            })
        }
        Command::CancelEditing => {
            let ModalState::Editing { promotion_id, .. } = &session.modal else {
                return Err(CoreError::InvalidTransition {
                    action: "cancel editing",
                    state: session.modal.label(),
                });
            };

            let mut new_session: Session = session.clone();
            new_session.modal = ModalState::Viewing {
                promotion_id: promotion_id.clone(),
            };
            Ok(TransitionResult {
                new_session,
                persist_required: false,
            })
        }
        Command::CloseModal => {
            let mut new_session: Session = session.clone();
            new_session.modal = ModalState::Closed;
            Ok(TransitionResult {
                new_session,
                persist_required: false,
            })
        }
        Command::SetProgressValue {
            promotion_id,
            value,
        } => {
            if !catalog.contains(&promotion_id) {
                return Err(CoreError::DomainViolation(DomainError::PromotionNotFound(
                    promotion_id.value().to_string(),
                )));
            }

            let mut new_session: Session = session.clone();
            new_session.record.set_value(promotion_id.clone(), value);
            new_session.unsaved = true;

            // Committing a value from the editor drops back to the
            // guide view of the same promotion.
            if matches!(
                &session.modal,
                ModalState::Editing { promotion_id: editing_id, .. } if editing_id == &promotion_id
            ) {
                new_session.modal = ModalState::Viewing { promotion_id };
            }

            Ok(TransitionResult {
                new_session,
                persist_required: true,
            })
        }
    }
}
