//! # Feature Geometry
//!
//! Expands a [`FaceParameters`] vector into concrete coordinates and
//! curve control points around a face center.
//!
//! ## Layout
//!
//! ```text
//!   eyebrow row   center_y - 50
//!   eye row       40% of the way from eyebrow row to nose row, +/- 6
//!   (center)      center_y            <- nasal alae start here
//!   nose row      center_y + 10
//!   mouth row     center_y + 40
//! ```
//!
//! Every parameter is first rescaled from `[-1, 1]` into a feature range
//! ([`ScaledParameters`]). The rescaling and the operation order below
//! reproduce the gallery's output bit for bit; do not simplify the
//! arithmetic.

use serde::{Deserialize, Serialize};

use crate::params::FaceParameters;

/// Eyebrow row distance above center.
pub const EYEBROW_OFFSET: f64 = 50.0;
/// Nose row distance below center.
pub const NOSE_OFFSET: f64 = 10.0;
/// Mouth row distance below center.
pub const MOUTH_OFFSET: f64 = 40.0;
/// Eye row position between eyebrow row (0) and nose row (1).
pub const EYE_ROW_FRACTION: f64 = 0.4;
/// Length of each eye stroke.
pub const EYE_WIDTH: f64 = 20.0;
/// Distance of each inner eye corner from center before adjustment.
pub const INNER_EYE_OFFSET: f64 = 20.0;
/// Eyebrow length before the width multiplier.
pub const EYEBROW_BASE_WIDTH: f64 = 20.0;
/// Distance of each nostril from center.
pub const NOSTRIL_OFFSET: f64 = 5.0;
/// Stroke width of every feature except the eyebrows.
pub const BASE_STROKE_WIDTH: f64 = 2.0;

/// Ala control point offset (outward, down).
const ALA_CONTROL_OFFSET: (f64, f64) = (2.0, 5.0);
/// Upper lip height at full curve.
const UPPER_LIP_HEIGHT: f64 = 5.0;
/// Lower lip bulge at full curve.
const LOWER_LIP_DEPTH: f64 = 8.0;

/// Anchor point of a face.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceDimensions {
    /// Horizontal center.
    pub center_x: f64,
    /// Vertical center.
    pub center_y: f64,
}

impl FaceDimensions {
    /// Creates dimensions centered on `(center_x, center_y)`.
    #[must_use]
    pub const fn new(center_x: f64, center_y: f64) -> Self {
        Self { center_x, center_y }
    }
}

impl Default for FaceDimensions {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

/// A 2D point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A straight stroke.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point
    pub start: Point,
    /// End point
    pub end: Point,
}

/// A quadratic Bézier curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuadraticCurve {
    /// Start point
    pub start: Point,
    /// Control point
    pub control: Point,
    /// End point
    pub end: Point,
}

/// A cubic Bézier curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicCurve {
    /// Start point
    pub start: Point,
    /// First control point
    pub control1: Point,
    /// Second control point
    pub control2: Point,
    /// End point
    pub end: Point,
}

/// Face parameters rescaled into their physical ranges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledParameters {
    /// Eyebrow arch depth, `[0, 8]`.
    pub eyebrow_curve: f64,
    /// Peak position along the brow, `[0.2, 0.8]`.
    pub eyebrow_peak_offset: f64,
    /// Brow length multiplier, `[1, 1.3]`.
    pub eyebrow_width: f64,
    /// Vertical eye nudge, `[-6, 6]`.
    pub eye_y_offset: f64,
    /// Horizontal eye nudge, `[-3, 3]`.
    pub eye_x_offset: f64,
    /// Upper lip height fraction, `[0, 1]`.
    pub upper_lip_curve: f64,
    /// Lower lip bulge fraction, `[0, 1]`, inverted.
    pub lower_lip_curve: f64,
    /// Cupid's bow peak position, `[0.2, 0.8]`.
    pub cupid_bow_offset: f64,
    /// Ala distance from center, `[10, 14]`.
    pub nose_width: f64,
    /// Cupid's bow dip fraction, `[0, 1]`.
    pub cupid_bow_strength: f64,
    /// Mouth width multiplier on the nose-to-mouth distance, `[1.25, 2.5]`.
    pub mouth_width: f64,
    /// Eyebrow stroke multiplier on the base width, `[1, 2.5]`.
    pub eyebrow_stroke_width: f64,
}

impl ScaledParameters {
    /// Rescales raw `[-1, 1]` parameters.
    #[must_use]
    pub fn from_parameters(p: &FaceParameters) -> Self {
        Self {
            eyebrow_curve: 8.0 * (p.eyebrow_curve + 1.0) * 0.5,
            eyebrow_peak_offset: 0.2 + 0.6 * ((p.eyebrow_peak_offset + 1.0) * 0.5),
            eyebrow_width: 1.0 + 0.15 * (p.eyebrow_width + 1.0),
            eye_y_offset: 6.0 * p.eye_y_offset,
            eye_x_offset: 3.0 * p.eye_x_offset,
            upper_lip_curve: (p.upper_lip_curve + 1.0) * 0.5,
            lower_lip_curve: (-p.lower_lip_curve + 1.0) * 0.5,
            cupid_bow_offset: 0.5 + 0.3 * p.cupid_bow_offset,
            nose_width: 12.0 + 2.0 * p.nose_width,
            cupid_bow_strength: (p.cupid_bow_strength + 1.0) * 0.5,
            mouth_width: 1.25 + 0.625 * (p.mouth_width + 1.0),
            eyebrow_stroke_width: 1.0 + 0.75 * (p.eyebrow_stroke_width + 1.0),
        }
    }
}

/// Stroke widths for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeWidths {
    /// Eyes, nose and mouth.
    pub base: f64,
    /// Eyebrows.
    pub eyebrows: f64,
}

/// Both eyebrows, one cubic each from outer end to inner end.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Eyebrows {
    /// Eyebrow row.
    pub y: f64,
    /// Left eyebrow.
    pub left: CubicCurve,
    /// Right eyebrow.
    pub right: CubicCurve,
}

/// Both eyes as horizontal strokes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Eyes {
    /// Eye row after adjustment.
    pub y: f64,
    /// Left eye, outer corner to inner corner.
    pub left: Segment,
    /// Right eye, inner corner to outer corner.
    pub right: Segment,
}

/// Nostrils and nasal alae.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Nose {
    /// Nose row.
    pub y: f64,
    /// Left nostril.
    pub left_nostril: Point,
    /// Right nostril.
    pub right_nostril: Point,
    /// Left ala, from center height down to the nose row.
    pub left_ala: QuadraticCurve,
    /// Right ala, from center height down to the nose row.
    pub right_ala: QuadraticCurve,
}

/// Lip outlines.
///
/// The upper lip is two cubics meeting at the cupid's bow dip on the
/// center line; the lower lip is one cubic between the corners.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mouth {
    /// Mouth row.
    pub y: f64,
    /// Left corner to the cupid's bow dip.
    pub upper_left: CubicCurve,
    /// Cupid's bow dip to the right corner.
    pub upper_right: CubicCurve,
    /// Left corner to right corner.
    pub lower: CubicCurve,
}

impl Mouth {
    /// Left lip corner.
    #[must_use]
    pub const fn left_corner(&self) -> Point {
        self.upper_left.start
    }

    /// Right lip corner.
    #[must_use]
    pub const fn right_corner(&self) -> Point {
        self.upper_right.end
    }

    /// Distance between the lip corners.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right_corner().x - self.left_corner().x
    }
}

/// Everything a renderer needs to draw one face.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureGeometry {
    /// Stroke widths.
    pub stroke_widths: StrokeWidths,
    /// Eyebrows.
    pub eyebrows: Eyebrows,
    /// Eyes.
    pub eyes: Eyes,
    /// Nose.
    pub nose: Nose,
    /// Mouth.
    pub mouth: Mouth,
}

/// Maps face parameters to feature geometry around `dimensions`.
#[must_use]
pub fn map_geometry(dimensions: &FaceDimensions, params: &FaceParameters) -> FeatureGeometry {
    let FaceDimensions { center_x, center_y } = *dimensions;
    let scaled = ScaledParameters::from_parameters(params);

    // Rows
    let eyebrow_y = center_y - EYEBROW_OFFSET;
    let nose_y = center_y + NOSE_OFFSET;
    let eye_base_y = eyebrow_y + (nose_y - eyebrow_y) * EYE_ROW_FRACTION;
    let mouth_y = center_y + MOUTH_OFFSET;
    let nose_mouth_distance = mouth_y - nose_y;

    // Eyes
    let eye_y = eye_base_y + scaled.eye_y_offset;
    let inner_eye_x = INNER_EYE_OFFSET + scaled.eye_x_offset;
    let left_inner_eye_x = center_x - inner_eye_x;
    let left_outer_eye_x = left_inner_eye_x - EYE_WIDTH;
    let right_inner_eye_x = center_x + inner_eye_x;
    let right_outer_eye_x = right_inner_eye_x + EYE_WIDTH;

    // Eyebrows span outward from the inner eye corners
    let left_outer_eyebrow_x = left_inner_eye_x - (EYEBROW_BASE_WIDTH * scaled.eyebrow_width);
    let right_outer_eyebrow_x = right_inner_eye_x + (EYEBROW_BASE_WIDTH * scaled.eyebrow_width);
    let eyebrow_span = EYEBROW_BASE_WIDTH * scaled.eyebrow_width;
    let left_peak = Point::new(
        left_inner_eye_x - (eyebrow_span * scaled.eyebrow_peak_offset),
        eyebrow_y - scaled.eyebrow_curve,
    );
    let right_peak = Point::new(
        right_inner_eye_x + (eyebrow_span * scaled.eyebrow_peak_offset),
        eyebrow_y - scaled.eyebrow_curve,
    );

    // Mouth
    let mouth_width = nose_mouth_distance * scaled.mouth_width;
    let lip_start = center_x - mouth_width / 2.0;
    let lip_end = center_x + mouth_width / 2.0;
    let lip_length = mouth_width / 2.0;
    let left_lip_peak_x = lip_start + lip_length * scaled.cupid_bow_offset;
    let right_lip_peak_x = lip_end - lip_length * scaled.cupid_bow_offset;

    let upper_lip_height = UPPER_LIP_HEIGHT * scaled.upper_lip_curve;
    let upper_lip_peak_y = mouth_y - upper_lip_height;
    let cupid_bow_dip = upper_lip_height * scaled.cupid_bow_strength;
    let cupid_bow = Point::new(center_x, upper_lip_peak_y + cupid_bow_dip);
    let lower_lip_y = mouth_y + scaled.lower_lip_curve * LOWER_LIP_DEPTH;

    let left_corner = Point::new(lip_start, mouth_y);
    let right_corner = Point::new(lip_end, mouth_y);
    let left_lip_peak = Point::new(left_lip_peak_x, upper_lip_peak_y);
    let right_lip_peak = Point::new(right_lip_peak_x, upper_lip_peak_y);

    let (ala_dx, ala_dy) = ALA_CONTROL_OFFSET;

    FeatureGeometry {
        stroke_widths: StrokeWidths {
            base: BASE_STROKE_WIDTH,
            eyebrows: BASE_STROKE_WIDTH * scaled.eyebrow_stroke_width,
        },
        eyebrows: Eyebrows {
            y: eyebrow_y,
            left: CubicCurve {
                start: Point::new(left_outer_eyebrow_x, eyebrow_y),
                control1: left_peak,
                control2: left_peak,
                end: Point::new(left_inner_eye_x, eyebrow_y),
            },
            right: CubicCurve {
                start: Point::new(right_outer_eyebrow_x, eyebrow_y),
                control1: right_peak,
                control2: right_peak,
                end: Point::new(right_inner_eye_x, eyebrow_y),
            },
        },
        eyes: Eyes {
            y: eye_y,
            left: Segment {
                start: Point::new(left_outer_eye_x, eye_y),
                end: Point::new(left_inner_eye_x, eye_y),
            },
            right: Segment {
                start: Point::new(right_inner_eye_x, eye_y),
                end: Point::new(right_outer_eye_x, eye_y),
            },
        },
        nose: Nose {
            y: nose_y,
            left_nostril: Point::new(center_x - NOSTRIL_OFFSET, nose_y),
            right_nostril: Point::new(center_x + NOSTRIL_OFFSET, nose_y),
            left_ala: QuadraticCurve {
                start: Point::new(center_x - scaled.nose_width, center_y),
                control: Point::new(center_x - scaled.nose_width - ala_dx, center_y + ala_dy),
                end: Point::new(center_x - scaled.nose_width, nose_y),
            },
            right_ala: QuadraticCurve {
                start: Point::new(center_x + scaled.nose_width, center_y),
                control: Point::new(center_x + scaled.nose_width + ala_dx, center_y + ala_dy),
                end: Point::new(center_x + scaled.nose_width, nose_y),
            },
        },
        mouth: Mouth {
            y: mouth_y,
            upper_left: CubicCurve {
                start: left_corner,
                control1: left_lip_peak,
                control2: left_lip_peak,
                end: cupid_bow,
            },
            upper_right: CubicCurve {
                start: cupid_bow,
                control1: right_lip_peak,
                control2: right_lip_peak,
                end: right_corner,
            },
            lower: CubicCurve {
                start: left_corner,
                control1: Point::new(center_x - mouth_width / 4.0, lower_lip_y),
                control2: Point::new(center_x + mouth_width / 4.0, lower_lip_y),
                end: right_corner,
            },
        },
    }
}
