// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Park record and location types.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A latitude/longitude coordinate pair (WGS84 degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        // geo::Point is (x, y) = (longitude, latitude)
        geo::Point::new(point.longitude, point.latitude)
    }
}

/// A park as loaded from the catalog.
///
/// Records are read-only to the filter engine; favoriting and loading are
/// owned by the caller. Derived views (see [`AnnotatedPark`]) are new
/// records, never in-place edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Park {
    /// Display name (e.g., "Golden Ears Provincial Park")
    pub title: String,
    /// Normalized title used for text search and alphabetic sort.
    /// Case-insensitive comparisons always operate on this field, never `title`.
    pub searchable_title: String,
    /// Park location
    pub location: GeoPoint,
    /// Activity IDs offered at this park
    pub activities: HashSet<u32>,
    /// Facility IDs available at this park
    pub facilities: HashSet<u32>,
    /// Whether the user has favorited this park
    #[serde(default)]
    pub favorited: bool,
    /// Optional card image URL (display-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A park annotated with a display distance for list rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AnnotatedPark {
    #[serde(flatten)]
    pub park: Park,
    /// Whole kilometers as text (e.g. `"12"`), or the sentinel `"unknown "`
    /// when no location was available
    pub distance: String,
}

/// Which amenity collection of a park an operation inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum AmenityType {
    Activities,
    Facilities,
}

impl AmenityType {
    /// The park's amenity set this selector refers to.
    pub fn amenities<'a>(&self, park: &'a Park) -> &'a HashSet<u32> {
        match self {
            AmenityType::Activities => &park.activities,
            AmenityType::Facilities => &park.facilities,
        }
    }
}

impl FromStr for AmenityType {
    type Err = AmenityTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activities" => Ok(AmenityType::Activities),
            "facilities" => Ok(AmenityType::Facilities),
            other => Err(AmenityTypeError::Unknown(other.to_string())),
        }
    }
}

/// Errors from amenity selector parsing.
#[derive(Debug, thiserror::Error)]
pub enum AmenityTypeError {
    #[error("Unknown amenity type: {0} (expected \"activities\" or \"facilities\")")]
    Unknown(String),
}
