//! Per-identifier avatar generation session

use crate::{
    algorithm::seed::PartPicker,
    algorithm::selection::{CatalogViews, Selection, SelectionRequest, select},
    catalog::Catalog,
    io::error::Result,
    io::image::composite,
};
use image::RgbaImage;

/// Generator for one identifier against one catalog
///
/// Owns the random stream derived from the identifier. A single selection or
/// assembly consumes the stream as a reference run would; calling again on the
/// same instance continues it, so results on repeat calls differ from a fresh
/// instance. Concurrent callers should each build their own instance.
pub struct RoboHash<'c, C: Catalog + ?Sized> {
    catalog: &'c C,
    picker: PartPicker,
    request: SelectionRequest,
    views: CatalogViews,
}

impl<'c, C: Catalog + ?Sized> RoboHash<'c, C> {
    /// Seed a generator and read the catalog's set, background and color lists
    ///
    /// # Errors
    ///
    /// Returns a catalog read error if the top-level listings cannot be read
    pub fn new(
        identifier: &[u8],
        requested_set: &str,
        requested_background: &str,
        catalog: &'c C,
    ) -> Result<Self> {
        let views = CatalogViews::load(catalog)?;
        tracing::debug!(
            sets = views.sets.len(),
            backgrounds = views.backgrounds.len(),
            colors = views.colors.len(),
            "loaded catalog views"
        );

        Ok(Self {
            catalog,
            picker: PartPicker::from_identifier(identifier),
            request: SelectionRequest::new(requested_set, requested_background),
            views,
        })
    }

    /// Catalog listings read at construction
    pub const fn views(&self) -> &CatalogViews {
        &self.views
    }

    /// Set and background preferences this generator was built with
    pub const fn request(&self) -> &SelectionRequest {
        &self.request
    }

    /// Resolve the request into concrete parts without decoding them
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or a mandatory category is empty
    pub fn select(&mut self) -> Result<Selection> {
        select(self.catalog, &self.views, &self.request, &mut self.picker)
    }

    /// Select parts and composite them into a square RGBA image
    ///
    /// # Errors
    ///
    /// Returns an error if selection fails or any part cannot be decoded
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn assemble(&mut self) -> Result<RgbaImage> {
        let selection = self.select()?;
        composite(self.catalog, &selection)
    }
}

/// Build a generator and assemble one image
///
/// # Errors
///
/// Returns an error if construction or assembly fails
pub fn generate<C: Catalog + ?Sized>(
    identifier: &[u8],
    requested_set: &str,
    requested_background: &str,
    catalog: &C,
) -> Result<RgbaImage> {
    RoboHash::new(identifier, requested_set, requested_background, catalog)?.assemble()
}
