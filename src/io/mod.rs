/// Command-line interface
pub mod cli;
/// Catalog layout constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Part decoding, compositing and PNG export
pub mod image;
