// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The referenced promotion id does not exist in the catalog.
    PromotionNotFound(String),
    /// Two catalog definitions share the same promotion id.
    DuplicatePromotionId(String),
    /// A promotion target must be strictly positive.
    InvalidTargetValue {
        /// The offending promotion id.
        promotion_id: String,
        /// The rejected target value.
        target_value: f64,
    },
    /// A promotion's qualifying window ends before it starts.
    InvalidQualifyingWindow {
        /// The offending promotion id.
        promotion_id: String,
    },
    /// The user's display name is empty or invalid.
    InvalidDisplayName(String),
    /// Rank label is not one of the known rank set.
    InvalidRank(String),
    /// Partner category is not one of the known categories.
    InvalidPartnerCategory(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PromotionNotFound(id) => {
                write!(f, "Promotion '{id}' not found in catalog")
            }
            Self::DuplicatePromotionId(id) => {
                write!(f, "Duplicate promotion id '{id}' in catalog")
            }
            Self::InvalidTargetValue {
                promotion_id,
                target_value,
            } => {
                write!(
                    f,
                    "Promotion '{promotion_id}' has invalid target value {target_value}: must be greater than 0"
                )
            }
            Self::InvalidQualifyingWindow { promotion_id } => {
                write!(
                    f,
                    "Promotion '{promotion_id}' has a qualifying window that ends before it starts"
                )
            }
            Self::InvalidDisplayName(msg) => write!(f, "Invalid display name: {msg}"),
            Self::InvalidRank(msg) => write!(f, "Invalid rank: {msg}"),
            Self::InvalidPartnerCategory(msg) => {
                write!(f, "Invalid partner category: {msg}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
