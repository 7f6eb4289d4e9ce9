// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Park filtering, sorting, and distance annotation.
//!
//! All operations are pure transformations over immutable inputs: each call
//! reads the parks it is given and returns a fresh result, so the engine is
//! safe to share across callers without locking.

use std::cmp::Ordering;

use geo::{Distance, Haversine};

use crate::config::FilterConfig;
use crate::models::criteria::FilterCriteria;
use crate::models::park::{AmenityType, AnnotatedPark, GeoPoint, Park};

/// Display value used when no location is available.
///
/// The trailing space is intentional: the mobile client concatenates this
/// verbatim into its distance label.
const UNKNOWN_DISTANCE: &str = "unknown ";

/// Haversine distance between two points, in kilometers.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    Haversine.distance(geo::Point::from(a), geo::Point::from(b)) / 1000.0
}

/// The park query engine.
#[derive(Debug, Clone, Default)]
pub struct ParkFilterEngine {
    config: FilterConfig,
}

impl ParkFilterEngine {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Apply the filter criteria to a park list.
    ///
    /// Stages run in a fixed order, each narrowing the previous stage's
    /// output: text search, distance from the user's location, selected
    /// activities, selected facilities. A stage with no criteria set is a
    /// pass-through, so the default criteria return the input unchanged.
    pub fn filter_parks(&self, parks: &[Park], criteria: &FilterCriteria) -> Vec<Park> {
        let mut filtered: Vec<Park> = parks.to_vec();

        // Filter parks based on search string
        if let Some(term) = criteria.search_term.as_deref().filter(|t| !t.is_empty()) {
            let needle = term.to_lowercase();
            filtered.retain(|park| park.searchable_title.to_lowercase().contains(&needle));
        }

        // Filter based on location/distance
        if let Some(origin) = criteria.location {
            let threshold = self.effective_threshold(criteria.distance);
            filtered.retain(|park| haversine_km(origin, park.location) <= threshold);
        }

        // Filter based on park activities (park must offer every selected one)
        let selected_activities = FilterCriteria::selected_ids(&criteria.activities);
        if !selected_activities.is_empty() {
            filtered.retain(|park| {
                selected_activities
                    .iter()
                    .all(|id| park.activities.contains(id))
            });
        }

        // Filter based on park facilities
        let selected_facilities = FilterCriteria::selected_ids(&criteria.facilities);
        if !selected_facilities.is_empty() {
            filtered.retain(|park| {
                selected_facilities
                    .iter()
                    .all(|id| park.facilities.contains(id))
            });
        }

        tracing::debug!(
            input = parks.len(),
            output = filtered.len(),
            "Filtered parks"
        );

        filtered
    }

    /// Comparator for ordering park lists.
    ///
    /// With a location, parks sort by ascending distance from it (ties keep
    /// their stable-sort order). Without one, parks sort alphabetically by
    /// `searchable_title`, case-insensitively.
    pub fn sort_parks(&self, location: Option<GeoPoint>, a: &Park, b: &Park) -> Ordering {
        match location {
            Some(origin) => {
                let distance_to_a = haversine_km(origin, a.location);
                let distance_to_b = haversine_km(origin, b.location);
                distance_to_a
                    .partial_cmp(&distance_to_b)
                    .unwrap_or(Ordering::Equal)
            }
            None => a
                .searchable_title
                .to_uppercase()
                .cmp(&b.searchable_title.to_uppercase()),
        }
    }

    /// Parks offering the given amenity, closest first.
    ///
    /// When a location is known, results are limited to parks within
    /// `default_distance_filter_km` and sorted by proximity; otherwise the
    /// full set of matches comes back alphabetically.
    pub fn closest_parks_by_amenity(
        &self,
        amenity: AmenityType,
        id: u32,
        location: Option<GeoPoint>,
        parks: &[Park],
    ) -> Vec<Park> {
        let mut matches: Vec<Park> = parks
            .iter()
            .filter(|park| amenity.amenities(park).contains(&id))
            .cloned()
            .collect();

        if let Some(origin) = location {
            matches.retain(|park| {
                haversine_km(origin, park.location) <= self.config.default_distance_filter_km
            });
        }

        matches.sort_by(|a, b| self.sort_parks(location, a, b));
        matches
    }

    /// Return a copy of the park annotated with a display distance.
    ///
    /// The distance is whole kilometers from the given location as text,
    /// or the `"unknown "` sentinel when no location is available.
    pub fn annotate_distance(&self, location: Option<GeoPoint>, park: &Park) -> AnnotatedPark {
        let distance = match location {
            Some(origin) => format!("{:.0}", haversine_km(origin, park.location)),
            None => UNKNOWN_DISTANCE.to_string(),
        };

        AnnotatedPark {
            park: park.clone(),
            distance,
        }
    }

    /// The favorites view: favorited parks, annotated with distance and
    /// ordered by proximity (alphabetically when no location is known).
    pub fn favorite_parks(
        &self,
        location: Option<GeoPoint>,
        parks: &[Park],
    ) -> Vec<AnnotatedPark> {
        let mut favorites: Vec<AnnotatedPark> = parks
            .iter()
            .filter(|park| park.favorited)
            .map(|park| self.annotate_distance(location, park))
            .collect();

        favorites.sort_by(|a, b| self.sort_parks(location, &a.park, &b.park));
        favorites
    }

    /// Map the slider value to a distance threshold in km.
    ///
    /// Values at or above the no-limit threshold (and an unset slider)
    /// disable distance filtering by widening the threshold to
    /// `max_distance_km`.
    fn effective_threshold(&self, distance: Option<f64>) -> f64 {
        match distance {
            Some(d) if d < self.config.no_limit_threshold => d,
            _ => self.config.max_distance_km,
        }
    }
}
