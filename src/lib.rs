// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Parkfinder core: park filtering, sorting, and distance annotation.
//!
//! This crate provides the query engine behind the park discovery app:
//! loading the park catalog and producing filtered, ordered park lists
//! for the mobile client to render.

pub mod config;
pub mod models;
pub mod services;

pub use config::FilterConfig;
pub use models::{AmenityType, AnnotatedPark, FilterCriteria, GeoPoint, Park};
pub use services::{ParkCatalog, ParkFilterEngine};
