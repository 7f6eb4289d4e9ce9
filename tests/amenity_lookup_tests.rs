// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tests for the closest-parks-by-amenity lookup.

mod common;

use std::str::FromStr;

use common::{park_with_amenities, titles, VANCOUVER};
use parkfinder_core::{AmenityType, ParkFilterEngine};

#[test]
fn test_lookup_without_location_is_alphabetical() {
    let engine = ParkFilterEngine::default();
    let parks = vec![
        park_with_amenities("Porteau Cove Provincial Park", 49.5583, -123.238, &[5], &[]),
        park_with_amenities("Golden Ears Provincial Park", 49.3472, -122.5, &[5], &[]),
        park_with_amenities("Stanley Park", 49.3017, -123.1417, &[1, 3], &[]),
    ];

    let result = engine.closest_parks_by_amenity(AmenityType::Activities, 5, None, &parks);

    // Only parks offering activity 5, alphabetically (no location)
    assert_eq!(
        titles(&result),
        vec!["Golden Ears Provincial Park", "Porteau Cove Provincial Park"]
    );
}

#[test]
fn test_lookup_with_location_limits_radius_and_sorts_by_proximity() {
    let engine = ParkFilterEngine::default();
    let parks = vec![
        park_with_amenities("Golden Ears Provincial Park", 49.3472, -122.5, &[5], &[]), // ~46 km
        park_with_amenities("Porteau Cove Provincial Park", 49.5583, -123.238, &[5], &[]), // ~32 km
        // Offers the activity but sits well beyond the 100 km default radius
        park_with_amenities("E.C. Manning Provincial Park", 49.0647, -120.7828, &[5], &[]),
    ];

    let result =
        engine.closest_parks_by_amenity(AmenityType::Activities, 5, Some(VANCOUVER), &parks);

    assert_eq!(
        titles(&result),
        vec!["Porteau Cove Provincial Park", "Golden Ears Provincial Park"]
    );
}

#[test]
fn test_facilities_selector_reads_facilities_not_activities() {
    let engine = ParkFilterEngine::default();
    let parks = vec![
        // Activity 4, but not facility 4
        park_with_amenities("Campless", 49.3, -123.1, &[4], &[1]),
        // Facility 4
        park_with_amenities("Campground Park", 49.31, -123.11, &[1], &[4]),
    ];

    let result = engine.closest_parks_by_amenity(AmenityType::Facilities, 4, None, &parks);

    assert_eq!(titles(&result), vec!["Campground Park"]);
}

#[test]
fn test_no_matches_returns_empty() {
    let engine = ParkFilterEngine::default();
    let parks = vec![park_with_amenities("Stanley Park", 49.3017, -123.1417, &[1], &[])];

    let result = engine.closest_parks_by_amenity(AmenityType::Activities, 99, None, &parks);

    assert!(result.is_empty());
}

#[test]
fn test_amenity_selector_parsing() {
    assert_eq!(
        AmenityType::from_str("activities").unwrap(),
        AmenityType::Activities
    );
    assert_eq!(
        AmenityType::from_str("facilities").unwrap(),
        AmenityType::Facilities
    );
}

#[test]
fn test_unknown_amenity_selector_is_rejected() {
    let err = AmenityType::from_str("favorited").unwrap_err();

    let message = err.to_string();
    assert!(
        message.contains("favorited"),
        "Error should name the bad selector: {message}"
    );
}
