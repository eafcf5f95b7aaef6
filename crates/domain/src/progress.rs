// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-user progress values and the progress-percentage calculation.
//!
//! A progress record maps promotion ids to self-reported current values.
//! The record may be a sparse subset of the catalog's id set; a missing
//! entry reads as 0, never an error. The percentage calculation is a
//! pure function with an explicit rounding rule and a 100% ceiling.

use crate::catalog::{Catalog, PromotionDefinition};
use crate::types::PromotionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A user's progress values, keyed by promotion id.
///
/// Owned exclusively by the progress store for the active identity; the
/// UI layer reads computed percentages and issues mutation requests,
/// never writes the map directly.
///
/// The backing map is a `BTreeMap` so that serialization is
/// deterministic: saving the same record twice produces identical bytes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressRecord {
    values: BTreeMap<PromotionId, f64>,
}

impl ProgressRecord {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Creates a record with every catalog id initialized to 0.
    ///
    /// Used the first time an identity is observed with no saved state.
    #[must_use]
    pub fn zeroed(catalog: &Catalog) -> Self {
        let values: BTreeMap<PromotionId, f64> = catalog
            .list()
            .iter()
            .map(|def| (def.id.clone(), 0.0))
            .collect();
        Self { values }
    }

    /// Returns the current value for a promotion, defaulting to 0 when
    /// the id is absent from the record.
    #[must_use]
    pub fn value(&self, id: &PromotionId) -> f64 {
        self.values.get(id).copied().unwrap_or(0.0)
    }

    /// Sets the current value for a promotion.
    ///
    /// Negative input is clamped to 0 rather than rejected: it
    /// originates from free-form numeric text entry that may be
    /// malformed, and the whole operation should not fail for it.
    pub fn set_value(&mut self, id: PromotionId, value: f64) {
        self.values.insert(id, value.max(0.0));
    }

    /// Returns the number of entries present in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Checks whether the record has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Computes the bounded percentage-complete for one promotion.
///
/// The result is `round(100 * current / target)` clamped to 100.
/// Over-achievement does not exceed 100% in the displayed metric; the
/// raw stored value is untouched and may exceed the target. The catalog
/// guarantees `target_value > 0`, so the division is never by zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent_complete(record: &ProgressRecord, definition: &PromotionDefinition) -> u8 {
    let current: f64 = record.value(&definition.id);
    let percent: f64 = (100.0 * current / definition.target_value).round();
    percent.clamp(0.0, 100.0) as u8
}

/// Coerces free-form numeric text entry into a progress value.
///
/// Malformed input and negative numbers coerce to 0, matching the
/// parse-or-zero behavior of the original input surface. Surrounding
/// whitespace is tolerated.
#[must_use]
pub fn parse_progress_input(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map_or(0.0, |v| v.max(0.0))
}
