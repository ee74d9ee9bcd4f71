//! Catalog layout constants and runtime configuration defaults

/// Edge length in pixels of every assembled image
pub const CANVAS_SIZE: u32 = 1024;

/// Selection token meaning "draw uniformly among everything available"
pub const ANY: &str = "any";

// Only this set carries a nested color level
/// Name of the set whose subdirectories are color variants
pub const COLOR_SET: &str = "set1";

/// Catalog directory holding the avatar sets
pub const SETS_DIR: &str = "sets";

/// Catalog directory holding the background sets
pub const BACKGROUNDS_DIR: &str = "backgrounds";

/// Entries whose names start with this marker are ignored
pub const HIDDEN_PREFIX: char = '.';

/// Separates a part's name from its numeric layer position, e.g. `eyes#04.png`
pub const ORDER_DELIMITER: char = '#';

// Default values for the command-line wrapper
/// Catalog root used when none is given
pub const DEFAULT_CATALOG_DIR: &str = "parts";

/// Output path used when none is given
pub const DEFAULT_OUTPUT: &str = "robohash.png";
