// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use promo_master::CoreError;
use promo_master_domain::DomainError;
use promo_master_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource.
        resource_type: String,
        /// The identifier that was looked up.
        identifier: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A durable write did not succeed.
    ///
    /// The in-memory record remains authoritative and flagged unsaved;
    /// the caller decides whether to retry or warn the user.
    PersistenceFailure {
        /// A human-readable description of the failure.
        message: String,
    },
    /// An unexpected internal error.
    Internal {
        /// A human-readable description of the error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                identifier,
            } => {
                write!(f, "{resource_type} not found: {identifier}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::PersistenceFailure { message } => {
                write!(f, "Persistence failure: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into the API error taxonomy.
#[must_use]
pub fn translate_domain_error(error: &DomainError) -> ApiError {
    match error {
        DomainError::PromotionNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Promotion"),
            identifier: id.clone(),
        },
        DomainError::InvalidDisplayName(message) => ApiError::InvalidInput {
            field: String::from("display_name"),
            message: message.clone(),
        },
        DomainError::InvalidRank(value) => ApiError::InvalidInput {
            field: String::from("rank"),
            message: format!("Unknown rank: {value}"),
        },
        DomainError::InvalidPartnerCategory(value) => ApiError::InvalidInput {
            field: String::from("partner_category"),
            message: format!("Unknown partner category: {value}"),
        },
        other => ApiError::DomainRuleViolation {
            rule: String::from("catalog"),
            message: other.to_string(),
        },
    }
}

/// Translates a core error into the API error taxonomy.
#[must_use]
pub fn translate_core_error(error: &CoreError) -> ApiError {
    match error {
        CoreError::DomainViolation(domain_error) => translate_domain_error(domain_error),
        CoreError::InvalidTransition { .. } => ApiError::DomainRuleViolation {
            rule: String::from("modal-state"),
            message: error.to_string(),
        },
    }
}

impl From<PersistenceError> for ApiError {
    fn from(error: PersistenceError) -> Self {
        Self::PersistenceFailure {
            message: error.to_string(),
        }
    }
}
