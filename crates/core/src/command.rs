// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use promo_master_domain::PromotionId;

/// A command represents user intent as data only.
///
/// Commands are the only way to request session changes. Identity
/// switching is not a command: it is a load-then-replace performed at
/// the boundary layer, because it needs the persistence store.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Open the guide modal for a promotion.
    ViewPromotion {
        /// The promotion to view.
        promotion_id: PromotionId,
    },
    /// Switch the open modal into value editing.
    BeginEditing,
    /// Replace the draft text in the open editor.
    UpdateDraft {
        /// The new free-form draft text.
        draft: String,
    },
    /// Leave the editor, back to the guide view, discarding the draft.
    CancelEditing,
    /// Close the modal entirely.
    CloseModal,
    /// Set the current value for a promotion and request a durable save.
    SetProgressValue {
        /// The promotion to update.
        promotion_id: PromotionId,
        /// The new value. Negative values clamp to 0.
        value: f64,
    },
}
