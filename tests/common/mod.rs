// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::collections::HashSet;

use parkfinder_core::{GeoPoint, Park};

/// Downtown Vancouver, a few km from the nearest test parks.
#[allow(dead_code)]
pub const VANCOUVER: GeoPoint = GeoPoint {
    latitude: 49.2827,
    longitude: -123.1207,
};

/// Build a minimal park for filter tests.
#[allow(dead_code)]
pub fn park(title: &str, latitude: f64, longitude: f64) -> Park {
    Park {
        title: title.to_string(),
        searchable_title: title.to_lowercase(),
        location: GeoPoint {
            latitude,
            longitude,
        },
        activities: HashSet::new(),
        facilities: HashSet::new(),
        favorited: false,
        image_url: None,
    }
}

/// Build a park with the given amenity IDs.
#[allow(dead_code)]
pub fn park_with_amenities(
    title: &str,
    latitude: f64,
    longitude: f64,
    activities: &[u32],
    facilities: &[u32],
) -> Park {
    let mut park = park(title, latitude, longitude);
    park.activities = activities.iter().copied().collect();
    park.facilities = facilities.iter().copied().collect();
    park
}

/// Titles of a park list, for order assertions.
#[allow(dead_code)]
pub fn titles(parks: &[Park]) -> Vec<&str> {
    parks.iter().map(|p| p.title.as_str()).collect()
}
