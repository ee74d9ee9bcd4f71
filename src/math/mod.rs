//! Mathematical utilities for seed derivation

/// Non-cryptographic FNV-1a hashing
pub mod hash;
