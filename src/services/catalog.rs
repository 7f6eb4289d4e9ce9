// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Park catalog loading from GeoJSON.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use geojson::GeoJson;
use serde_json::Value;

use crate::models::park::{GeoPoint, Park};

/// The park catalog as loaded from the published dataset.
#[derive(Default, Clone)]
pub struct ParkCatalog {
    parks: Vec<Park>,
}

impl ParkCatalog {
    /// Load parks from a GeoJSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load parks from a GeoJSON string.
    ///
    /// Expects a FeatureCollection of Point features carrying `title`,
    /// `searchableTitle`, `activities`, `facilities`, and optionally
    /// `imageUrl` properties.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let geojson: GeoJson = json_data
            .parse()
            .map_err(|e: geojson::Error| CatalogError::ParseError(e.to_string()))?;

        let mut parks = Vec::new();

        if let GeoJson::FeatureCollection(collection) = geojson {
            for feature in collection.features {
                let Some(title) = feature
                    .property("title")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                else {
                    // Untitled features can't be searched or rendered
                    continue;
                };

                let searchable_title = feature
                    .property("searchableTitle")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| title.to_lowercase());

                let image_url = feature
                    .property("imageUrl")
                    .and_then(Value::as_str)
                    .map(str::to_string);

                let activities = id_set(&feature, "activities");
                let facilities = id_set(&feature, "facilities");

                if let Some(geom) = feature.geometry {
                    let location = Self::convert_geometry(geom.value)?;
                    parks.push(Park {
                        title,
                        searchable_title,
                        location,
                        activities,
                        facilities,
                        favorited: false,
                        image_url,
                    });
                }
            }
        }

        tracing::info!(count = parks.len(), "Loaded parks");
        Ok(Self { parks })
    }

    /// Convert GeoJSON geometry to a park location.
    fn convert_geometry(value: geojson::Value) -> Result<GeoPoint, CatalogError> {
        match value {
            geojson::Value::Point(coords) if coords.len() >= 2 => Ok(GeoPoint {
                // GeoJSON positions are [longitude, latitude]
                longitude: coords[0],
                latitude: coords[1],
            }),
            _ => Err(CatalogError::UnsupportedGeometry),
        }
    }

    /// Get the list of parks.
    pub fn parks(&self) -> &[Park] {
        &self.parks
    }

    /// Consume the catalog, yielding the parks.
    pub fn into_parks(self) -> Vec<Park> {
        self.parks
    }
}

/// Numeric ID array property, empty when absent or malformed.
fn id_set(feature: &geojson::Feature, key: &str) -> HashSet<u32> {
    feature
        .property(key)
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(Value::as_u64)
                .map(|id| id as u32)
                .collect()
        })
        .unwrap_or_default()
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse GeoJSON: {0}")]
    ParseError(String),

    #[error("Unsupported geometry type (expected Point)")]
    UnsupportedGeometry,
}
