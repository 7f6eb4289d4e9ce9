// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Filter criteria as submitted by the search screen.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::park::GeoPoint;

/// One amenity checkbox from the filter sheet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AmenityToggle {
    pub id: u32,
    pub selected: bool,
}

/// Filter criteria for a single park query.
///
/// Every field is optional or empty-safe: an absent criterion means that
/// filter stage passes all parks through. `FilterCriteria::default()` is
/// the match-everything query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FilterCriteria {
    /// Substring matched case-insensitively against `searchable_title`
    #[serde(default)]
    pub search_term: Option<String>,
    /// User location; absent means no location context (no distance
    /// filtering, alphabetic ordering)
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// Distance slider value in km (0-100). Values at or above the
    /// configured no-limit threshold mean "no distance limit".
    #[serde(default)]
    pub distance: Option<f64>,
    /// Activity checkboxes, in display order
    #[serde(default)]
    pub activities: Vec<AmenityToggle>,
    /// Facility checkboxes, in display order
    #[serde(default)]
    pub facilities: Vec<AmenityToggle>,
}

impl FilterCriteria {
    /// IDs of the selected toggles, preserving display order.
    pub(crate) fn selected_ids(toggles: &[AmenityToggle]) -> Vec<u32> {
        toggles
            .iter()
            .filter(|toggle| toggle.selected)
            .map(|toggle| toggle.id)
            .collect()
    }
}
