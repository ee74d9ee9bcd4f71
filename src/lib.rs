//! Deterministic avatar generation from arbitrary identifiers
//!
//! An identifier is hashed into a seed for a reproducible random stream. That
//! stream picks an avatar set, an optional color and background, and one part
//! image per category from a catalog of PNG fragments. The chosen parts are
//! stacked in a stable layer order into a 1024×1024 RGBA image, so the same
//! identifier and catalog always give the same pixels.

#![forbid(unsafe_code)]

/// Seeding, part selection, layer ordering and assembly
pub mod algorithm;
/// Read-only access to the part catalog
pub mod catalog;
/// Input/output operations, configuration and error handling
pub mod io;
/// Hashing utilities for seed derivation
pub mod math;

pub use algorithm::assembly::{RoboHash, generate};
pub use algorithm::selection::{Selection, SelectionRequest};
pub use catalog::{Catalog, FsCatalog, MemoryCatalog};
pub use io::error::{ErrorKind, Result, RoboHashError};
