//! # Parameter Synthesis
//!
//! Maps a face index and a seed to a [`FaceParameters`] vector.
//!
//! Each parameter follows its own sinusoid `sin(k · ω · index + phase)`
//! where `ω = 2π / 100` and `k` is a fixed per-parameter multiplier.
//! The multipliers are distinct small primes (plus 1 and 2) so adjacent
//! indices move features out of step with each other.
//!
//! ## Determinism Guarantee
//!
//! The product is evaluated as `(k · ω) · index`, then the phase is
//! added. Keep that order: reordering the multiplication changes the
//! last bits of the result.

use std::f64::consts::PI;

use crate::params::{FaceParameters, ParamId, Seed};

/// Base angular frequency: one full cycle every 100 indices.
pub const BASE_FREQUENCY: f64 = 2.0 * PI / 100.0;

impl ParamId {
    /// Frequency multiplier of this parameter's sinusoid.
    #[must_use]
    pub const fn multiplier(self) -> u32 {
        match self {
            Self::EyeYOffset => 1,
            Self::EyeXOffset => 2,
            Self::UpperLipCurve => 3,
            Self::LowerLipCurve => 5,
            Self::EyebrowCurve => 7,
            Self::NoseWidth => 11,
            Self::EyebrowPeakOffset => 13,
            Self::EyebrowWidth => 17,
            Self::CupidBowOffset => 19,
            Self::CupidBowStrength => 23,
            Self::MouthWidth => 29,
            Self::EyebrowStrokeWidth => 31,
        }
    }

    /// Angular frequency of this parameter's sinusoid.
    #[inline]
    #[must_use]
    pub fn angular_frequency(self) -> f64 {
        f64::from(self.multiplier()) * BASE_FREQUENCY
    }
}

/// Maps a phase to the amplitude it produces at index 0.
///
/// The reference codec stores this amplitude, so this is the one place
/// the phase-to-amplitude rule lives.
#[inline]
#[must_use]
pub fn amplitude(phase: f64) -> f64 {
    phase.sin()
}

/// Synthesizes the parameter vector of face `index` from `seed`.
///
/// Every output field lies in `[-1, 1]` for finite seeds. Negative
/// indices are valid and walk the sinusoids backwards.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn synthesize(index: i64, seed: &Seed) -> FaceParameters {
    let t = index as f64;
    seed.phases()
        .map(|id, phase| amplitude(id.angular_frequency() * t + phase))
}
