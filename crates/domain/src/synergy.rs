// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The Synergy Calculator: cross-program impacts of a hypothetical
//! action.
//!
//! Impacts are **computed, not stored**. The calculator is a declarative
//! rule table: an ordered list of (predicate, template) pairs over the
//! simulator input. Rules are independent and non-exclusive; several may
//! fire for one input. New rules are added to the list without touching
//! existing rule logic.
//!
//! Simulation is exploratory. Nothing here reads or writes the progress
//! store, and invalid volumes are prevented by input-range clamping at
//! the construction boundary, not re-validated per rule.

use crate::types::PartnerCategory;
use serde::{Deserialize, Serialize};

/// Upper bound of the projected-volume slider domain.
pub const VOLUME_MAX: u32 = 1000;

/// Step granularity of the projected-volume slider.
pub const VOLUME_STEP: u32 = 50;

/// Transient simulator inputs. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorInput {
    /// The hypothetical new partner's category.
    pub partner_category: PartnerCategory,
    /// Whether the action includes a Celavive starter bundle.
    pub includes_starter_bundle: bool,
    /// Projected purchase volume in CP, clamped to `[0, VOLUME_MAX]`
    /// and snapped to `VOLUME_STEP`.
    projected_volume: u32,
}

impl SimulatorInput {
    /// Creates a simulator input, clamping the projected volume to the
    /// slider domain and snapping it down to the step granularity.
    #[must_use]
    pub const fn new(
        partner_category: PartnerCategory,
        includes_starter_bundle: bool,
        projected_volume: u32,
    ) -> Self {
        let clamped: u32 = if projected_volume > VOLUME_MAX {
            VOLUME_MAX
        } else {
            projected_volume
        };
        Self {
            partner_category,
            includes_starter_bundle,
            projected_volume: clamped - clamped % VOLUME_STEP,
        }
    }

    /// Returns the clamped, step-snapped projected volume.
    #[must_use]
    pub const fn projected_volume(&self) -> u32 {
        self.projected_volume
    }
}

/// A single cross-program impact produced by one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynergyImpact {
    /// Display name of the impacted promotion or promotion group.
    pub promotion: String,
    /// The quantitative or qualitative effect, as display text.
    pub effect: String,
}

impl std::fmt::Display for SynergyImpact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.promotion, self.effect)
    }
}

/// One entry in the synergy rule table.
///
/// A rule is a named (predicate, template) pair. The predicate gates the
/// rule on the simulator input; the template renders the impact. Rules
/// hold no state and perform no I/O.
#[derive(Debug, Clone, Copy)]
pub struct SynergyRule {
    /// Stable rule name, for logs and tests.
    pub name: &'static str,
    /// Whether this rule fires for the given input.
    pub applies: fn(&SimulatorInput) -> bool,
    /// Renders the impact for an input the predicate accepted.
    pub render: fn(&SimulatorInput) -> SynergyImpact,
}

/// The standard ordered rule set.
///
/// Evaluation order is declaration order. Appending a rule extends the
/// simulator without altering existing rules.
#[must_use]
pub fn standard_rules() -> Vec<SynergyRule> {
    vec![
        SynergyRule {
            name: "phuket-recruitment",
            applies: |input| {
                input.partner_category == PartnerCategory::Female && input.includes_starter_bundle
            },
            render: |_| SynergyImpact {
                promotion: String::from("Celavive Phuket Trip"),
                effect: String::from("+1 direct sponsorship / +220 pts"),
            },
        },
        SynergyRule {
            name: "oneteam-starter-bundle",
            applies: |input| input.includes_starter_bundle,
            render: |_| SynergyImpact {
                promotion: String::from("One Team Challenge"),
                effect: String::from("counts toward SBP score"),
            },
        },
        SynergyRule {
            name: "growth-volume",
            applies: |_| true,
            render: |input| SynergyImpact {
                promotion: String::from("Phu Quoc / Prague"),
                effect: format!("{} CP counts as growth volume", input.projected_volume()),
            },
        },
    ]
}

/// Evaluates the rule table against one simulator input.
///
/// Rules are evaluated in order; every rule whose predicate accepts the
/// input contributes one impact. Pure function, no error conditions.
#[must_use]
pub fn compute_impacts(input: &SimulatorInput, rules: &[SynergyRule]) -> Vec<SynergyImpact> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(input))
        .map(|rule| (rule.render)(input))
        .collect()
}
