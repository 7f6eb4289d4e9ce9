// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the park catalog and filter queries.

pub mod criteria;
pub mod park;

pub use criteria::{AmenityToggle, FilterCriteria};
pub use park::{AmenityType, AmenityTypeError, AnnotatedPark, GeoPoint, Park};
