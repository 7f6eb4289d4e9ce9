// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - catalog loading and query logic.

pub mod catalog;
pub mod filter;

pub use catalog::{CatalogError, ParkCatalog};
pub use filter::{haversine_km, ParkFilterEngine};
