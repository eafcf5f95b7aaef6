// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Rank labels a user may hold.
///
/// Ranks are fixed domain constants; ordering here matches the
/// program's advancement ladder and is display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Rank {
    Associate,
    Shareholder,
    Believer,
    Builder,
    Achiever,
    Director,
    Bronze,
    #[default]
    Silver,
    Gold,
    Ruby,
    Emerald,
    Diamond,
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Associate" => Ok(Self::Associate),
            "Shareholder" => Ok(Self::Shareholder),
            "Believer" => Ok(Self::Believer),
            "Builder" => Ok(Self::Builder),
            "Achiever" => Ok(Self::Achiever),
            "Director" => Ok(Self::Director),
            "Bronze" => Ok(Self::Bronze),
            "Silver" => Ok(Self::Silver),
            "Gold" => Ok(Self::Gold),
            "Ruby" => Ok(Self::Ruby),
            "Emerald" => Ok(Self::Emerald),
            "Diamond" => Ok(Self::Diamond),
            _ => Err(DomainError::InvalidRank(s.to_string())),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Rank {
    /// Converts this rank to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Associate => "Associate",
            Self::Shareholder => "Shareholder",
            Self::Believer => "Believer",
            Self::Builder => "Builder",
            Self::Achiever => "Achiever",
            Self::Director => "Director",
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Ruby => "Ruby",
            Self::Emerald => "Emerald",
            Self::Diamond => "Diamond",
        }
    }
}

/// A user's gender as recorded on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Converts this gender to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

/// The partner category selected in the simulator.
///
/// This is a closed two-value selector at the input surface; it is kept
/// distinct from [`Gender`] because it classifies a hypothetical new
/// partner, not the active user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartnerCategory {
    Female,
    Male,
}

impl PartnerCategory {
    /// Parses a partner category from a selector string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not name a known category.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "female" | "F" => Ok(Self::Female),
            "male" | "M" => Ok(Self::Male),
            _ => Err(DomainError::InvalidPartnerCategory(s.to_string())),
        }
    }

    /// Converts this category to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

/// A promotion's stable string identifier.
///
/// Ids identify a promotion independent of display order and are unique
/// across the catalog. Leading and trailing whitespace is stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromotionId {
    value: String,
}

impl PromotionId {
    /// Creates a new `PromotionId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for PromotionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The active user's self-reported identity.
///
/// The display name doubles as the persistence key for progress records.
/// There is no identity verification: two users with the same display
/// name share the same stored record. This is a documented limitation,
/// preserved deliberately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// The user's display name (non-empty, also the persistence key).
    pub display_name: String,
    /// The user's gender.
    pub gender: Gender,
    /// The user's current rank.
    pub rank: Rank,
    /// The user's 13-week average volume in CP.
    pub average_volume: u32,
    /// Whether the user holds an executive position.
    pub is_executive: bool,
}

impl UserIdentity {
    /// Creates a new `UserIdentity`.
    #[must_use]
    pub const fn new(
        display_name: String,
        gender: Gender,
        rank: Rank,
        average_volume: u32,
        is_executive: bool,
    ) -> Self {
        Self {
            display_name,
            gender,
            rank,
            average_volume,
            is_executive,
        }
    }
}
