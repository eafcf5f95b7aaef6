// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The Promotion Catalog: the static, read-only registry of every
//! promotion program.
//!
//! The catalog is the single source of truth for valid promotion ids.
//! It is loaded once at startup and never mutated at runtime. Every
//! other component resolves promotion ids against it; an unknown id is
//! a caller error, never silently tolerated.

use crate::error::DomainError;
use crate::types::PromotionId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use time::Date;
use time::macros::date;

/// A promotion's qualifying window.
///
/// Windows are inclusive on both ends. Overlapping golden-quarter
/// windows are a display concept only; nothing is computed from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifyingWindow {
    /// First day of the qualifying period.
    pub start: Date,
    /// Last day of the qualifying period (inclusive).
    pub end: Date,
}

impl QualifyingWindow {
    /// Creates a new `QualifyingWindow`.
    #[must_use]
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Checks whether this window overlaps another.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Structured metadata describing how to qualify for a promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionDetails {
    /// The qualifying window.
    pub window: QualifyingWindow,
    /// The eligible rank or target audience, as display text.
    pub audience: String,
    /// The reward description.
    pub reward: String,
    /// Ordered guide steps explaining how to qualify.
    pub guide: Vec<String>,
}

/// An immutable promotion program definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionDefinition {
    /// Unique string key, stable across sessions.
    pub id: PromotionId,
    /// Display name.
    pub name: String,
    /// Display unit for the tracked metric (e.g. "CP", "pts").
    pub unit: String,
    /// Numeric threshold that constitutes 100% completion. Always > 0.
    pub target_value: f64,
    /// Whether this promotion's window falls in the Golden Quarter.
    /// Display-only; never used in computation.
    pub is_golden_quarter: bool,
    /// Qualifying period, audience, reward, and guide steps.
    pub details: PromotionDetails,
}

/// The static, read-only promotion registry.
///
/// `list()` preserves declaration order; that order is the display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    definitions: Vec<PromotionDefinition>,
}

impl Catalog {
    /// Creates a catalog from a list of definitions.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two definitions share the same id
    /// - A target value is not strictly positive
    /// - A qualifying window ends before it starts
    pub fn new(definitions: Vec<PromotionDefinition>) -> Result<Self, DomainError> {
        let mut seen: HashSet<&PromotionId> = HashSet::new();
        for def in &definitions {
            if !seen.insert(&def.id) {
                return Err(DomainError::DuplicatePromotionId(def.id.value().to_string()));
            }
            if def.target_value <= 0.0 {
                return Err(DomainError::InvalidTargetValue {
                    promotion_id: def.id.value().to_string(),
                    target_value: def.target_value,
                });
            }
            if def.details.window.end < def.details.window.start {
                return Err(DomainError::InvalidQualifyingWindow {
                    promotion_id: def.id.value().to_string(),
                });
            }
        }
        Ok(Self { definitions })
    }

    /// Returns every promotion definition in declaration order.
    #[must_use]
    pub fn list(&self) -> &[PromotionDefinition] {
        &self.definitions
    }

    /// Looks up a promotion by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PromotionNotFound` for an unknown id. Every
    /// other component assumes the catalog is authoritative for valid
    /// ids, so an unknown id here is a caller contract violation.
    pub fn get(&self, id: &PromotionId) -> Result<&PromotionDefinition, DomainError> {
        self.definitions
            .iter()
            .find(|d| &d.id == id)
            .ok_or_else(|| DomainError::PromotionNotFound(id.value().to_string()))
    }

    /// Checks whether an id exists in the catalog.
    #[must_use]
    pub fn contains(&self, id: &PromotionId) -> bool {
        self.definitions.iter().any(|d| &d.id == id)
    }

    /// Counts promotions whose windows overlap the Golden Quarter.
    ///
    /// Feeds the timeline banner ("up to N promotions overlap"). Display
    /// only.
    #[must_use]
    pub fn golden_quarter_count(&self) -> usize {
        self.definitions
            .iter()
            .filter(|d| d.is_golden_quarter)
            .count()
    }

    /// The built-in 2026 promotion catalog.
    ///
    /// Declaration order is the dashboard display order.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn standard() -> Self {
        let definitions = vec![
            PromotionDefinition {
                id: PromotionId::new("phuket"),
                name: String::from("Celavive Phuket Trip"),
                unit: String::from("pts"),
                target_value: 2200.0,
                is_golden_quarter: true,
                details: PromotionDetails {
                    window: QualifyingWindow::new(date!(2026 - 01 - 01), date!(2026 - 03 - 31)),
                    audience: String::from("Silver and above"),
                    reward: String::from("4-day incentive trip to Phuket for two"),
                    guide: vec![
                        String::from(
                            "Accumulate qualification points from Celavive starter pack sales; \
                             each pack counts 220 points.",
                        ),
                        String::from(
                            "Directly sponsoring a new female partner with a starter pack adds \
                             one recruitment credit on top of the points.",
                        ),
                        String::from("Reach 2,200 points within the first quarter to qualify."),
                    ],
                },
            },
            PromotionDefinition {
                id: PromotionId::new("oneteam"),
                name: String::from("One Team Challenge"),
                unit: String::from("SBP"),
                target_value: 300.0,
                is_golden_quarter: true,
                details: PromotionDetails {
                    window: QualifyingWindow::new(date!(2026 - 01 - 01), date!(2026 - 06 - 30)),
                    audience: String::from("All ranks"),
                    reward: String::from("Team bonus pool share at 300 SBP"),
                    guide: vec![
                        String::from("Every starter pack sold by you or your team earns SBP."),
                        String::from(
                            "SBP accumulates across the half-year window; there is no weekly \
                             minimum.",
                        ),
                    ],
                },
            },
            PromotionDefinition {
                id: PromotionId::new("phuquoc"),
                name: String::from("Phu Quoc Growth Trip"),
                unit: String::from("CP"),
                target_value: 1800.0,
                is_golden_quarter: true,
                details: PromotionDetails {
                    window: QualifyingWindow::new(date!(2026 - 01 - 01), date!(2026 - 03 - 31)),
                    audience: String::from("Builder and above"),
                    reward: String::from("3-day resort stay in Phu Quoc"),
                    guide: vec![
                        String::from(
                            "Growth volume is your purchase volume above last year's quarterly \
                             baseline.",
                        ),
                        String::from("All purchase CP in the window counts toward growth volume."),
                    ],
                },
            },
            PromotionDefinition {
                id: PromotionId::new("prague"),
                name: String::from("Prague Leadership Summit"),
                unit: String::from("CP"),
                target_value: 2600.0,
                is_golden_quarter: false,
                details: PromotionDetails {
                    window: QualifyingWindow::new(date!(2026 - 04 - 01), date!(2026 - 09 - 30)),
                    audience: String::from("Director and above"),
                    reward: String::from("Leadership summit invitation, Prague"),
                    guide: vec![
                        String::from(
                            "Growth volume from the second and third quarters counts toward the \
                             summit threshold.",
                        ),
                        String::from("Executive-track users receive priority seating."),
                    ],
                },
            },
            PromotionDefinition {
                id: PromotionId::new("pack"),
                name: String::from("Celavive Starter Pack"),
                unit: String::from("pts"),
                target_value: 220.0,
                is_golden_quarter: false,
                details: PromotionDetails {
                    window: QualifyingWindow::new(date!(2026 - 01 - 01), date!(2026 - 12 - 31)),
                    audience: String::from("All ranks"),
                    reward: String::from("Starter pack rebate at full points"),
                    guide: vec![
                        String::from("A single starter pack sale completes this promotion."),
                    ],
                },
            },
            PromotionDefinition {
                id: PromotionId::new("sponsor"),
                name: String::from("Direct Sponsorship Race"),
                unit: String::from("partners"),
                target_value: 5.0,
                is_golden_quarter: true,
                details: PromotionDetails {
                    window: QualifyingWindow::new(date!(2026 - 01 - 01), date!(2026 - 03 - 31)),
                    audience: String::from("All ranks"),
                    reward: String::from("Recognition award plus sponsorship bonus"),
                    guide: vec![
                        String::from("Each directly sponsored new partner counts once."),
                        String::from(
                            "Sponsorships that include a starter pack also feed the Phuket \
                             point race.",
                        ),
                    ],
                },
            },
            PromotionDefinition {
                id: PromotionId::new("rankup"),
                name: String::from("Rank Advance Challenge"),
                unit: String::from("CP"),
                target_value: 1300.0,
                is_golden_quarter: false,
                details: PromotionDetails {
                    window: QualifyingWindow::new(date!(2026 - 01 - 01), date!(2026 - 12 - 31)),
                    audience: String::from("Below Director"),
                    reward: String::from("Advancement bonus on first rank-up of the year"),
                    guide: vec![
                        String::from(
                            "Maintain the advancement volume threshold for four consecutive \
                             weeks.",
                        ),
                    ],
                },
            },
            PromotionDefinition {
                id: PromotionId::new("golden"),
                name: String::from("Golden Quarter Consistency"),
                unit: String::from("weeks"),
                target_value: 13.0,
                is_golden_quarter: true,
                details: PromotionDetails {
                    window: QualifyingWindow::new(date!(2026 - 01 - 01), date!(2026 - 03 - 31)),
                    audience: String::from("All ranks"),
                    reward: String::from("Consistency bonus for a full active quarter"),
                    guide: vec![
                        String::from("A week counts when weekly volume stays above 40 CP."),
                        String::from("All 13 weeks of the Golden Quarter must count."),
                    ],
                },
            },
        ];

        // The built-in catalog upholds the constructor invariants by
        // construction (unique ids, positive targets, ordered windows).
        Self { definitions }
    }
}
