//! # Face Gallery
//!
//! Ties the three stages together the way a gallery front end uses them:
//! reference -> seed -> parameters -> geometry.

use tracing::debug;

use crate::error::FaceResult;
use crate::geometry::{map_geometry, FaceDimensions, FeatureGeometry};
use crate::params::{FaceParameters, Seed};
use crate::reference::Reference;
use crate::synthesis::synthesize;

/// One generated face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    /// Position in the walk.
    pub index: i64,
    /// Synthesized parameters.
    pub parameters: FaceParameters,
    /// Derived geometry.
    pub geometry: FeatureGeometry,
}

/// A walk over faces sharing one seed and one center point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceGallery {
    seed: Seed,
    dimensions: FaceDimensions,
}

impl FaceGallery {
    /// Creates a gallery from a seed.
    #[must_use]
    pub fn new(seed: Seed, dimensions: FaceDimensions) -> Self {
        debug!(
            reference = %Reference::from_seed(&seed),
            center_x = dimensions.center_x,
            center_y = dimensions.center_y,
            "face gallery created"
        );
        Self { seed, dimensions }
    }

    /// Creates a gallery from a shared reference string.
    ///
    /// # Errors
    ///
    /// Returns [`FaceError::ReferenceLength`](crate::FaceError::ReferenceLength) or
    /// [`FaceError::ReferenceDigit`](crate::FaceError::ReferenceDigit)
    /// when `reference` is not 24 hex digits.
    pub fn from_reference(reference: &str, dimensions: FaceDimensions) -> FaceResult<Self> {
        let reference = Reference::parse(reference)?;
        Ok(Self::new(reference.to_seed(), dimensions))
    }

    /// The gallery seed.
    #[must_use]
    pub const fn seed(&self) -> &Seed {
        &self.seed
    }

    /// The face center.
    #[must_use]
    pub const fn dimensions(&self) -> &FaceDimensions {
        &self.dimensions
    }

    /// The shareable reference of this gallery's seed.
    #[must_use]
    pub fn reference(&self) -> Reference {
        Reference::from_seed(&self.seed)
    }

    /// Generates face `index`.
    #[must_use]
    pub fn face(&self, index: i64) -> Face {
        let parameters = synthesize(index, &self.seed);
        Face {
            index,
            parameters,
            geometry: map_geometry(&self.dimensions, &parameters),
        }
    }

    /// Generates `count` consecutive faces starting at `start`.
    ///
    /// Stops early rather than overflow the index.
    pub fn walk(&self, start: i64, count: u32) -> impl Iterator<Item = Face> + '_ {
        (0..i64::from(count))
            .map_while(move |step| start.checked_add(step))
            .map(move |index| self.face(index))
    }
}

impl Default for FaceGallery {
    fn default() -> Self {
        Self::new(Seed::DEFAULT, FaceDimensions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FaceError;

    #[test]
    fn test_default_gallery_reference() {
        let gallery = FaceGallery::default();
        assert_eq!(gallery.reference().as_str(), "808080808080808080808080");
        assert_eq!(gallery.face(0).parameters, FaceParameters::ZERO);
    }

    #[test]
    fn test_from_reference_rejects_malformed() {
        let dims = FaceDimensions::default();
        assert_eq!(
            FaceGallery::from_reference("8080", dims),
            Err(FaceError::ReferenceLength {
                expected: 24,
                actual: 4
            })
        );
        assert!(matches!(
            FaceGallery::from_reference("80808080808080808080808g", dims),
            Err(FaceError::ReferenceDigit { position: 23, found: 'g' })
        ));
    }

    #[test]
    fn test_from_reference_round_trips() {
        let gallery =
            FaceGallery::from_reference("00112233445566778899AABB", FaceDimensions::default())
                .unwrap();
        assert_eq!(gallery.reference().as_str(), "00112233445566778899aabb");
    }

    #[test]
    fn test_walk_is_consecutive() {
        let gallery = FaceGallery::default();
        let indices: Vec<i64> = gallery.walk(-2, 5).map(|face| face.index).collect();
        assert_eq!(indices, vec![-2, -1, 0, 1, 2]);
    }

    #[test]
    fn test_walk_stops_at_index_limit() {
        let gallery = FaceGallery::default();
        assert_eq!(gallery.walk(i64::MAX - 1, 10).count(), 2);
    }

    #[test]
    fn test_face_matches_pipeline() {
        let gallery = FaceGallery::default();
        let face = gallery.face(42);
        let parameters = synthesize(42, gallery.seed());
        assert_eq!(face.parameters, parameters);
        assert_eq!(face.geometry, map_geometry(gallery.dimensions(), &parameters));
    }
}
