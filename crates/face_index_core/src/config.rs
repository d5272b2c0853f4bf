//! # Gallery Configuration
//!
//! Loaded once at startup from TOML. Every key is optional:
//!
//! ```toml
//! center_x = 100.0
//! center_y = 100.0
//! reference = "808080808080808080808080"
//! start_index = 0
//! count = 10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{FaceError, FaceResult};
use crate::gallery::FaceGallery;
use crate::geometry::FaceDimensions;
use crate::params::Seed;
use crate::reference::Reference;

/// Longest walk a config may request.
pub const MAX_WALK_LENGTH: u32 = 100_000;

/// Settings for walking a face gallery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Horizontal face center.
    pub center_x: f64,
    /// Vertical face center.
    pub center_y: f64,
    /// Starting point reference; the default seed when absent.
    pub reference: Option<String>,
    /// First face index.
    pub start_index: i64,
    /// Number of faces to walk.
    pub count: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let dimensions = FaceDimensions::default();
        Self {
            center_x: dimensions.center_x,
            center_y: dimensions.center_y,
            reference: None,
            start_index: 0,
            count: 10,
        }
    }
}

impl GalleryConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// [`FaceError::InvalidConfig`] on malformed TOML or out-of-range
    /// values, a reference error when `reference` is malformed.
    pub fn from_toml_str(text: &str) -> FaceResult<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| FaceError::InvalidConfig(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// As [`Self::from_toml_str`], plus [`FaceError::InvalidConfig`] when
    /// the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> FaceResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| FaceError::InvalidConfig(format!("cannot read {}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), count = config.count, "gallery config loaded");
        Ok(config)
    }

    /// Validates configuration values.
    ///
    /// # Errors
    ///
    /// See [`Self::from_toml_str`].
    pub fn validate(&self) -> FaceResult<()> {
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(FaceError::InvalidConfig(format!(
                "center must be finite, got ({}, {})",
                self.center_x, self.center_y
            )));
        }
        if self.count == 0 || self.count > MAX_WALK_LENGTH {
            return Err(FaceError::InvalidConfig(format!(
                "count must be in [1, {MAX_WALK_LENGTH}], got {}",
                self.count
            )));
        }
        self.parsed_reference()?;
        Ok(())
    }

    /// Face center.
    #[must_use]
    pub const fn dimensions(&self) -> FaceDimensions {
        FaceDimensions::new(self.center_x, self.center_y)
    }

    /// The starting point this config selects.
    ///
    /// # Errors
    ///
    /// A reference error when `reference` is malformed.
    pub fn seed(&self) -> FaceResult<Seed> {
        Ok(self
            .parsed_reference()?
            .map_or(Seed::DEFAULT, |reference| reference.to_seed()))
    }

    /// Builds the configured gallery.
    ///
    /// # Errors
    ///
    /// A reference error when `reference` is malformed.
    pub fn gallery(&self) -> FaceResult<FaceGallery> {
        Ok(FaceGallery::new(self.seed()?, self.dimensions()))
    }

    fn parsed_reference(&self) -> FaceResult<Option<Reference>> {
        self.reference.as_deref().map(Reference::parse).transpose()
    }
}
