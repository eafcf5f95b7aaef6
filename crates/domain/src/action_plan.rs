// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The Action Plan Registry: a static ordered list of calendar-bound
//! recommended actions for the timeline view.
//!
//! Entries are read-only reference data. Impact tags are free-form
//! labels; no relationship with catalog ids is enforced.

use serde::{Deserialize, Serialize};

/// A calendar-bound recommended action with tagged promotion impacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlanEntry {
    /// Week label (display text).
    pub week: String,
    /// The recommended task.
    pub task: String,
    /// Free-form tags naming the promotions this task advances.
    pub impacts: Vec<String>,
}

/// The static ordered action plan. Sequence order is display order.
#[must_use]
pub fn standard_action_plans() -> Vec<ActionPlanEntry> {
    vec![
        ActionPlanEntry {
            week: String::from("Week 1-2"),
            task: String::from("Sponsor one new female partner with a Celavive starter pack"),
            impacts: vec![
                String::from("Phuket"),
                String::from("One Team"),
                String::from("Sponsorship Race"),
            ],
        },
        ActionPlanEntry {
            week: String::from("Week 3-4"),
            task: String::from("Hold a product experience session for two prospects"),
            impacts: vec![String::from("Phuket"), String::from("Growth Volume")],
        },
        ActionPlanEntry {
            week: String::from("Week 5-8"),
            task: String::from("Keep weekly volume above 40 CP for the consistency streak"),
            impacts: vec![
                String::from("Golden Quarter"),
                String::from("Rank Advance"),
            ],
        },
        ActionPlanEntry {
            week: String::from("Week 9-12"),
            task: String::from("Close the quarter with a growth-volume push toward Phu Quoc"),
            impacts: vec![String::from("Phu Quoc"), String::from("Prague")],
        },
    ]
}
