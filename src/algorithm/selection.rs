use crate::{
    algorithm::ordering::{Part, order_layers},
    algorithm::seed::PartPicker,
    catalog::{Catalog, join_path},
    io::configuration::{ANY, BACKGROUNDS_DIR, COLOR_SET, SETS_DIR},
    io::error::{Result, empty_category},
};

/// Caller preferences for set and background
///
/// Each field is empty, the [`ANY`] token, or a catalog name. An unknown set
/// falls back to the first available one; an unknown background means no
/// background.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionRequest {
    /// Requested avatar set
    pub set: String,
    /// Requested background set
    pub background: String,
}

impl SelectionRequest {
    /// Create a request from set and background names
    pub fn new(set: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            set: set.into(),
            background: background.into(),
        }
    }
}

/// Names available at the top of the catalog, each sorted
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogViews {
    /// Avatar sets under `sets/`
    pub sets: Vec<String>,
    /// Background sets under `backgrounds/`
    pub backgrounds: Vec<String>,
    /// Color variants of the color-bearing set, empty if that set is absent
    pub colors: Vec<String>,
}

impl CatalogViews {
    /// Read the set, background and color listings
    ///
    /// # Errors
    ///
    /// Returns a catalog read error if `sets/` or `backgrounds/` cannot be listed
    pub fn load<C: Catalog + ?Sized>(catalog: &C) -> Result<Self> {
        let sets = catalog.list_subdirectories(SETS_DIR)?;
        let backgrounds = catalog.list_subdirectories(BACKGROUNDS_DIR)?;
        let colors = if sets.iter().any(|set| set == COLOR_SET) {
            catalog.list_subdirectories(&join_path(SETS_DIR, COLOR_SET))?
        } else {
            Vec::new()
        };

        Ok(Self {
            sets,
            backgrounds,
            colors,
        })
    }
}

/// Fully resolved choice of parts for one avatar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Resolved avatar set name
    pub set: String,
    /// Color variant, only for the color-bearing set
    pub color: Option<String>,
    /// Resolved background set, if any
    pub background_set: Option<String>,
    /// Foreground parts, bottom to top
    pub layers: Vec<Part>,
    /// Background part drawn beneath every layer
    pub background: Option<Part>,
}

impl Selection {
    /// Catalog directory the layers were drawn from
    pub fn set_path(&self) -> String {
        let set_path = join_path(SETS_DIR, &self.set);
        match &self.color {
            Some(color) => join_path(&set_path, color),
            None => set_path,
        }
    }
}

/// Resolve a request into concrete parts
///
/// Draws happen in a fixed order: set (only for [`ANY`]), color (only for
/// the color-bearing set), background set (only for [`ANY`]), one file per
/// foreground category in sorted category order, then the background file.
///
/// # Errors
///
/// Returns an error if:
/// - The catalog has no sets, or the color-bearing set has no colors
/// - A category directory cannot be read
/// - A foreground category contains no files
pub fn select<C: Catalog + ?Sized>(
    catalog: &C,
    views: &CatalogViews,
    request: &SelectionRequest,
    picker: &mut PartPicker,
) -> Result<Selection> {
    let set = resolve_set(&views.sets, &request.set, picker)?;

    let color = if set == COLOR_SET {
        let color = picker
            .pick(&views.colors)
            .cloned()
            .ok_or_else(|| empty_category(&join_path(SETS_DIR, COLOR_SET)))?;
        Some(color)
    } else {
        None
    };

    let background_set = resolve_background(&views.backgrounds, &request.background, picker);
    tracing::debug!(
        set = %set,
        color = ?color,
        background_set = ?background_set,
        "resolved selection request"
    );

    let mut selection = Selection {
        set,
        color,
        background_set,
        layers: Vec::new(),
        background: None,
    };

    selection.layers = choose_layers(catalog, &selection.set_path(), picker)?;
    if let Some(background_set) = &selection.background_set {
        selection.background =
            choose_background(catalog, &join_path(BACKGROUNDS_DIR, background_set), picker)?;
    }

    Ok(selection)
}

/// Pick the avatar set named by `requested`
///
/// # Errors
///
/// Returns an empty category error if no sets are available
pub fn resolve_set(sets: &[String], requested: &str, picker: &mut PartPicker) -> Result<String> {
    let resolved = if requested == ANY {
        picker.pick(sets)
    } else {
        sets.iter()
            .find(|set| *set == requested)
            .or_else(|| sets.first())
    };
    resolved.cloned().ok_or_else(|| empty_category(SETS_DIR))
}

/// Pick the background set named by `requested`
///
/// An exact name match wins over the [`ANY`] token; anything else means no
/// background.
pub fn resolve_background(
    backgrounds: &[String],
    requested: &str,
    picker: &mut PartPicker,
) -> Option<String> {
    if !requested.is_empty() && backgrounds.iter().any(|bg| bg == requested) {
        return Some(requested.to_string());
    }
    if requested == ANY {
        return picker.pick(backgrounds).cloned();
    }
    None
}

/// Draw one file from every category under `set_path`, bottom to top
///
/// Files directly inside `set_path` form an extra category visited first.
///
/// # Errors
///
/// Returns an error if a category cannot be read or has no files
pub fn choose_layers<C: Catalog + ?Sized>(
    catalog: &C,
    set_path: &str,
    picker: &mut PartPicker,
) -> Result<Vec<Part>> {
    let mut categories = catalog.list_all_subdirectories_recursive(set_path)?;
    if !catalog.list_files(set_path)?.is_empty() {
        categories.insert(0, set_path.to_string());
    }

    let mut chosen = Vec::with_capacity(categories.len());
    for category in &categories {
        let files = catalog.list_files(category)?;
        let file = picker
            .pick(&files)
            .ok_or_else(|| empty_category(category))?;
        chosen.push(Part::new(file.as_str()));
    }

    let layers = order_layers(chosen);
    tracing::debug!(
        set_path,
        layers = ?layers.iter().map(|part| part.path.as_str()).collect::<Vec<_>>(),
        "chose layers"
    );
    Ok(layers)
}

/// Draw one file from a background set directory
///
/// An empty directory yields no background rather than an error.
///
/// # Errors
///
/// Returns a catalog read error if the directory cannot be read
pub fn choose_background<C: Catalog + ?Sized>(
    catalog: &C,
    background_path: &str,
    picker: &mut PartPicker,
) -> Result<Option<Part>> {
    let files = catalog.list_files(background_path)?;
    let background = picker.pick(&files).map(|file| Part::new(file.as_str()));
    tracing::debug!(
        background_path,
        background = ?background.as_ref().map(|part| part.path.as_str()),
        "chose background"
    );
    Ok(background)
}
