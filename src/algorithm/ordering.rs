//! Bottom-to-top draw order for chosen parts
//!
//! Part files name their layer position after a delimiter, e.g.
//! `003#04.png` sits at position 4. The position is parsed once when the part
//! is created and compared numerically; parts without one fall back to their
//! base name.

use crate::catalog::base_name;
use crate::io::configuration::ORDER_DELIMITER;
use std::cmp::Ordering;

/// A catalog file chosen as one layer of the avatar
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Part {
    /// Catalog path of the part file
    pub path: String,
    /// Layer position parsed from the file name, if present
    pub order: Option<i64>,
}

impl Part {
    /// Create a part for a catalog path, parsing its layer position
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let order = parse_order_key(base_name(&path));
        Self { path, order }
    }

    /// File name of the part
    pub fn base_name(&self) -> &str {
        base_name(&self.path)
    }
}

/// Layer position embedded in a file name
///
/// Takes the segment after the first delimiter, up to the first `.`.
pub fn parse_order_key(name: &str) -> Option<i64> {
    let mut segments = name.split(ORDER_DELIMITER);
    segments.next()?;
    let token = segments.next()?.split('.').next()?;
    token.parse().ok()
}

/// Pairwise draw order of two parts
///
/// Numeric when both carry a position, otherwise by base name.
pub fn compare_layers(a: &Part, b: &Part) -> Ordering {
    match (a.order, b.order) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.base_name().cmp(b.base_name()),
    }
}

/// Arrange parts bottom to top
///
/// [`compare_layers`] is not transitive once positioned and unpositioned
/// parts mix, so this uses a stable insertion pass instead of a library sort:
/// it accepts any comparator and always yields the same order for the same
/// input.
pub fn order_layers(parts: Vec<Part>) -> Vec<Part> {
    let mut ordered: Vec<Part> = Vec::with_capacity(parts.len());
    for part in parts {
        let at = ordered
            .iter()
            .rposition(|placed| compare_layers(placed, &part) != Ordering::Greater)
            .map_or(0, |index| index + 1);
        ordered.insert(at, part);
    }
    ordered
}
