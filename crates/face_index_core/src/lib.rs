//! # Face Index Core
//!
//! Deterministic face synthesis for the face-index gallery.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same index and seed always produce the same face
//! 2. **Pure**: No hidden state, no randomness, no I/O in the math
//! 3. **Total**: Synthesis, codec and geometry never fail
//! 4. **Shareable**: A seed round-trips through a 24 hex digit reference
//!
//! ## Pipeline
//!
//! ```text
//! reference ──decode──> Seed ──synthesize(index)──> FaceParameters
//!                                                        │
//!                         FaceDimensions ──map_geometry──┴──> FeatureGeometry
//! ```
//!
//! ## Example
//!
//! ```rust
//! use face_index_core::{decode, encode, map_geometry, synthesize, FaceDimensions};
//!
//! let seed = decode("808080808080808080808080");
//! let params = synthesize(0, &seed);
//! let face = map_geometry(&FaceDimensions::new(100.0, 100.0), &params);
//!
//! assert_eq!(encode(&seed), "808080808080808080808080");
//! assert_eq!(face.eyebrows.y, 50.0);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod params;
pub mod path;
pub mod reference;
pub mod synthesis;

pub use config::GalleryConfig;
pub use error::{FaceError, FaceResult};
pub use gallery::{Face, FaceGallery};
pub use geometry::{
    map_geometry, CubicCurve, Eyebrows, Eyes, FaceDimensions, FeatureGeometry, Mouth, Nose, Point,
    QuadraticCurve, ScaledParameters, Segment, StrokeWidths,
};
pub use params::{FaceParameters, ParamId, Seed, PARAM_COUNT};
pub use path::{PathCommand, PathData};
pub use reference::{decode, encode, validate, Reference, REFERENCE_LEN};
pub use synthesis::{synthesize, BASE_FREQUENCY};
