/// Per-identifier generator that selects and composites parts
pub mod assembly;
/// Draw order of chosen parts
pub mod ordering;
/// Seed derivation and the seeded part picker
pub mod seed;
/// Set, color, background and per-category part selection
pub mod selection;
