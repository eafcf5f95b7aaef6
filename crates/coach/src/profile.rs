// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use promo_master_domain::UserIdentity;

/// Derives the context profile sent alongside every question.
///
/// The collaborator only ever sees this summary, never the raw identity or
/// any stored progress values.
#[must_use]
pub fn context_profile(identity: &UserIdentity) -> String {
    let executive = if identity.is_executive {
        "executive"
    } else {
        "non-executive"
    };
    format!(
        "gender: {}, rank: {}, 13-week average volume: {} CP, {}",
        identity.gender.as_str(),
        identity.rank.as_str(),
        identity.average_volume,
        executive
    )
}
