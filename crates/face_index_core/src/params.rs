//! # Face Parameters
//!
//! The twelve facial-feature parameters and their canonical order.
//!
//! The canonical order is a format constant: it decides which byte of a
//! reference string belongs to which feature. Reordering [`ParamId::ALL`]
//! (or the fields of [`FaceParameters`]) breaks every existing reference.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Number of face parameters.
pub const PARAM_COUNT: usize = 12;

/// Identifies one face parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ParamId {
    /// Vertical depth of the eyebrow arch.
    EyebrowCurve = 0,
    /// Position of the arch peak along the brow.
    EyebrowPeakOffset = 1,
    /// Brow length multiplier.
    EyebrowWidth = 2,
    /// Vertical eye nudge.
    EyeYOffset = 3,
    /// Horizontal eye nudge.
    EyeXOffset = 4,
    /// Height of the upper lip.
    UpperLipCurve = 5,
    /// Bulge of the lower lip.
    LowerLipCurve = 6,
    /// Horizontal position of the cupid's bow peaks.
    CupidBowOffset = 7,
    /// Distance of the nasal alae from center.
    NoseWidth = 8,
    /// Depth of the cupid's bow dip.
    CupidBowStrength = 9,
    /// Mouth width multiplier.
    MouthWidth = 10,
    /// Eyebrow stroke width multiplier.
    EyebrowStrokeWidth = 11,
}

impl ParamId {
    /// All parameters in canonical order.
    pub const ALL: [Self; PARAM_COUNT] = [
        Self::EyebrowCurve,
        Self::EyebrowPeakOffset,
        Self::EyebrowWidth,
        Self::EyeYOffset,
        Self::EyeXOffset,
        Self::UpperLipCurve,
        Self::LowerLipCurve,
        Self::CupidBowOffset,
        Self::NoseWidth,
        Self::CupidBowStrength,
        Self::MouthWidth,
        Self::EyebrowStrokeWidth,
    ];

    /// Position in the canonical order.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name used by the gallery front end and in serialized vectors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EyebrowCurve => "eyebrowCurve",
            Self::EyebrowPeakOffset => "eyebrowPeakOffset",
            Self::EyebrowWidth => "eyebrowWidth",
            Self::EyeYOffset => "eyeYOffset",
            Self::EyeXOffset => "eyeXOffset",
            Self::UpperLipCurve => "upperLipCurve",
            Self::LowerLipCurve => "lowerLipCurve",
            Self::CupidBowOffset => "cupidBowOffset",
            Self::NoseWidth => "noseWidth",
            Self::CupidBowStrength => "cupidBowStrength",
            Self::MouthWidth => "mouthWidth",
            Self::EyebrowStrokeWidth => "eyebrowStrokeWidth",
        }
    }
}

impl std::fmt::Display for ParamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The twelve face parameters.
///
/// As produced by synthesis every field lies in `[-1, 1]`. Fields are
/// declared in canonical order so the struct can be viewed as a
/// `[f64; PARAM_COUNT]` indexed by [`ParamId::index`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceParameters {
    /// Eyebrow arch depth.
    pub eyebrow_curve: f64,
    /// Eyebrow peak position.
    pub eyebrow_peak_offset: f64,
    /// Eyebrow length.
    pub eyebrow_width: f64,
    /// Vertical eye offset.
    pub eye_y_offset: f64,
    /// Horizontal eye offset.
    pub eye_x_offset: f64,
    /// Upper lip height.
    pub upper_lip_curve: f64,
    /// Lower lip bulge (inverted).
    pub lower_lip_curve: f64,
    /// Cupid's bow peak position.
    pub cupid_bow_offset: f64,
    /// Nose width.
    pub nose_width: f64,
    /// Cupid's bow dip depth.
    pub cupid_bow_strength: f64,
    /// Mouth width.
    pub mouth_width: f64,
    /// Eyebrow stroke width.
    pub eyebrow_stroke_width: f64,
}

impl FaceParameters {
    /// All fields zero.
    pub const ZERO: Self = Self::from_array([0.0; PARAM_COUNT]);

    /// Builds parameters from values in canonical order.
    #[must_use]
    pub const fn from_array(values: [f64; PARAM_COUNT]) -> Self {
        Self {
            eyebrow_curve: values[0],
            eyebrow_peak_offset: values[1],
            eyebrow_width: values[2],
            eye_y_offset: values[3],
            eye_x_offset: values[4],
            upper_lip_curve: values[5],
            lower_lip_curve: values[6],
            cupid_bow_offset: values[7],
            nose_width: values[8],
            cupid_bow_strength: values[9],
            mouth_width: values[10],
            eyebrow_stroke_width: values[11],
        }
    }

    /// Views the parameters as an array in canonical order.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> &[f64; PARAM_COUNT] {
        bytemuck::cast_ref(self)
    }

    /// Copies the parameters into an array in canonical order.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [f64; PARAM_COUNT] {
        bytemuck::cast(self)
    }

    /// Returns one parameter.
    #[inline]
    #[must_use]
    pub fn get(&self, id: ParamId) -> f64 {
        self.as_array()[id.index()]
    }

    /// Returns a copy with one parameter replaced.
    #[must_use]
    pub fn with(self, id: ParamId, value: f64) -> Self {
        let mut values = self.to_array();
        values[id.index()] = value;
        Self::from_array(values)
    }

    /// Iterates `(id, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamId, f64)> + '_ {
        ParamId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    /// Applies `f` to every field, keeping canonical order.
    #[must_use]
    pub fn map(self, mut f: impl FnMut(ParamId, f64) -> f64) -> Self {
        let mut values = self.to_array();
        for id in ParamId::ALL {
            values[id.index()] = f(id, values[id.index()]);
        }
        Self::from_array(values)
    }
}

/// A starting point for a face walk.
///
/// Shaped like [`FaceParameters`], but each field is a phase offset in
/// radians added inside that parameter's sinusoid. Phases are unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(FaceParameters);

impl Seed {
    /// The all-zero starting point.
    pub const DEFAULT: Self = Self(FaceParameters::ZERO);

    /// Wraps phases given as a parameter vector.
    #[inline]
    #[must_use]
    pub const fn new(phases: FaceParameters) -> Self {
        Self(phases)
    }

    /// Builds a seed from phases in canonical order.
    #[must_use]
    pub const fn from_array(phases: [f64; PARAM_COUNT]) -> Self {
        Self(FaceParameters::from_array(phases))
    }

    /// Phase offset of one parameter.
    #[inline]
    #[must_use]
    pub fn phase(&self, id: ParamId) -> f64 {
        self.0.get(id)
    }

    /// Returns a copy with one phase replaced.
    #[must_use]
    pub fn with_phase(self, id: ParamId, phase: f64) -> Self {
        Self(self.0.with(id, phase))
    }

    /// All phases as a parameter vector.
    #[inline]
    #[must_use]
    pub const fn phases(&self) -> &FaceParameters {
        &self.0
    }
}

impl From<FaceParameters> for Seed {
    fn from(phases: FaceParameters) -> Self {
        Self(phases)
    }
}
