// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::UserIdentity;

/// Validates that an identity's basic field constraints are met.
///
/// The display name doubles as the persistence key, so it must not be
/// empty or whitespace-only. No uniqueness check exists beyond exact
/// string match; name collisions share stored state by design.
///
/// # Errors
///
/// Returns an error if the display name is empty or whitespace-only.
pub fn validate_identity(identity: &UserIdentity) -> Result<(), DomainError> {
    if identity.display_name.trim().is_empty() {
        return Err(DomainError::InvalidDisplayName(String::from(
            "Display name cannot be empty",
        )));
    }
    Ok(())
}
