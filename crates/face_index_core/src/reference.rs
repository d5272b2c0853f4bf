//! # Reference Codec
//!
//! Converts a [`Seed`] to and from a 24 character hex reference string
//! (one byte per parameter, canonical order) so a face walk can be
//! bookmarked and shared.
//!
//! ## Byte Mapping
//!
//! - encode: `byte = clamp(round((sin(phase) + 1) * 128), 0, 255)`
//! - decode: `phase = asin(clamp(byte * 2 / 256 - 1, -1, 1))`
//!
//! Decoding only recovers the principal branch of `asin`, so
//! `decode(encode(seed))` is lossy for phases outside `[-π/2, π/2]`.
//! `encode(decode(r))` reproduces `r` (lowercased) for every valid `r`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FaceError, FaceResult};
use crate::params::{FaceParameters, ParamId, Seed, PARAM_COUNT};
use crate::synthesis::amplitude;

/// Length of a reference string in hex digits.
pub const REFERENCE_LEN: usize = 2 * PARAM_COUNT;

/// Maps a phase to its reference byte.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn phase_to_byte(phase: f64) -> u8 {
    let scaled = ((amplitude(phase) + 1.0) * 128.0).round();
    // NaN saturates to 0
    scaled.clamp(0.0, 255.0) as u8
}

/// Maps a reference byte back to a phase in `[-π/2, π/2]`.
#[must_use]
pub fn byte_to_phase(byte: u8) -> f64 {
    let amplitude = f64::from(byte) * 2.0 / 256.0 - 1.0;
    amplitude.clamp(-1.0, 1.0).asin()
}

/// Encodes a seed as a lowercase reference string.
#[must_use]
pub fn encode(seed: &Seed) -> String {
    let mut bytes = [0u8; PARAM_COUNT];
    for id in ParamId::ALL {
        bytes[id.index()] = phase_to_byte(seed.phase(id));
    }
    hex::encode(bytes)
}

/// Decodes a reference string into a seed.
///
/// Lenient by contract: the input is read in two-character groups, a
/// trailing odd character is dropped, groups past the twelfth are
/// ignored, and any parameter without a readable group keeps phase 0.
/// Call [`validate`] first when the caller needs a strict check.
#[must_use]
pub fn decode(reference: &str) -> Seed {
    let mut phases = [0.0; PARAM_COUNT];
    for (phase, group) in phases.iter_mut().zip(reference.as_bytes().chunks_exact(2)) {
        let mut byte = [0u8; 1];
        if hex::decode_to_slice(group, &mut byte).is_ok() {
            *phase = byte_to_phase(byte[0]);
        }
    }
    Seed::new(FaceParameters::from_array(phases))
}

/// Returns true iff `reference` is exactly 24 hex digits (any case).
#[must_use]
pub fn validate(reference: &str) -> bool {
    reference.len() == REFERENCE_LEN && reference.bytes().all(|b| b.is_ascii_hexdigit())
}

/// A validated reference string, normalised to lowercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Reference(String);

impl Reference {
    /// Parses and validates a reference string.
    ///
    /// # Errors
    ///
    /// [`FaceError::ReferenceLength`] if the string is not 24 characters,
    /// [`FaceError::ReferenceDigit`] at the first non-hex character.
    pub fn parse(text: &str) -> FaceResult<Self> {
        let actual = text.chars().count();
        if actual != REFERENCE_LEN {
            return Err(FaceError::ReferenceLength {
                expected: REFERENCE_LEN,
                actual,
            });
        }
        if let Some((position, found)) = text
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(FaceError::ReferenceDigit { position, found });
        }
        Ok(Self(text.to_ascii_lowercase()))
    }

    /// Encodes a seed.
    #[must_use]
    pub fn from_seed(seed: &Seed) -> Self {
        Self(encode(seed))
    }

    /// Decodes into a seed.
    #[must_use]
    pub fn to_seed(&self) -> Seed {
        decode(&self.0)
    }

    /// The raw bytes, one per parameter in canonical order.
    #[must_use]
    pub fn bytes(&self) -> [u8; PARAM_COUNT] {
        let mut bytes = [0u8; PARAM_COUNT];
        // Validated at construction
        if hex::decode_to_slice(&self.0, &mut bytes).is_err() {
            unreachable!("reference {:?} holds only hex digits", self.0);
        }
        bytes
    }

    /// The reference text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Reference {
    fn default() -> Self {
        Self::from_seed(&Seed::DEFAULT)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Reference {
    type Err = FaceError;

    fn from_str(s: &str) -> FaceResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Reference {
    type Error = FaceError;

    fn try_from(value: &str) -> FaceResult<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Reference {
    type Error = FaceError;

    fn try_from(value: String) -> FaceResult<Self> {
        Self::parse(&value)
    }
}

impl From<Reference> for String {
    fn from(reference: Reference) -> Self {
        reference.0
    }
}

impl AsRef<str> for Reference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    const NEUTRAL: &str = "808080808080808080808080";

    #[test]
    fn test_default_seed_encodes_to_neutral() {
        assert_eq!(encode(&Seed::DEFAULT), NEUTRAL);
        assert_eq!(decode(NEUTRAL), Seed::DEFAULT);
    }

    #[test]
    fn test_byte_mapping_endpoints() {
        assert_eq!(phase_to_byte(0.0), 128);
        assert_eq!(phase_to_byte(FRAC_PI_2), 255);
        assert_eq!(phase_to_byte(-FRAC_PI_2), 0);
        assert_eq!(byte_to_phase(128), 0.0);
        assert_eq!(byte_to_phase(0), -FRAC_PI_2);
        assert!(byte_to_phase(255) < FRAC_PI_2);
    }

    #[test]
    fn test_every_byte_survives_decode_encode() {
        for byte in 0..=u8::MAX {
            assert_eq!(phase_to_byte(byte_to_phase(byte)), byte, "byte {byte}");
        }
    }

    #[test]
    fn test_encode_is_canonical_order() {
        let seed = Seed::DEFAULT
            .with_phase(ParamId::EyebrowCurve, FRAC_PI_2)
            .with_phase(ParamId::EyebrowStrokeWidth, -FRAC_PI_2);
        assert_eq!(encode(&seed), "ff8080808080808080808000");
    }

    #[test]
    fn test_decode_short_input_keeps_trailing_defaults() {
        let seed = decode("00ff8");
        assert_eq!(seed.phase(ParamId::EyebrowCurve), -FRAC_PI_2);
        assert_eq!(seed.phase(ParamId::EyebrowPeakOffset), byte_to_phase(0xff));
        // The dangling "8" is dropped
        assert_eq!(seed.phase(ParamId::EyebrowWidth), 0.0);
        for id in &ParamId::ALL[2..] {
            assert_eq!(seed.phase(*id), 0.0, "{id}");
        }
    }

    #[test]
    fn test_decode_uses_first_twelve_groups_only() {
        let long = format!("{NEUTRAL}00ff");
        assert_eq!(decode(&long), Seed::DEFAULT);
    }

    #[test]
    fn test_decode_is_case_insensitive() {
        assert_eq!(decode("ABCDEF0123456789abcdef01"), decode("abcdef0123456789abcdef01"));
    }

    #[test]
    fn test_decode_unreadable_group_keeps_default() {
        let seed = decode("zz80808080808080808080ff");
        assert_eq!(seed.phase(ParamId::EyebrowCurve), 0.0);
        assert_eq!(seed.phase(ParamId::EyebrowStrokeWidth), byte_to_phase(0xff));
        assert!(seed.phases().iter().all(|(_, phase)| phase.is_finite()));
    }

    #[test]
    fn test_validate() {
        assert!(validate("000000000000000000000000"));
        assert!(validate("ABCDEFabcdef0123456789Ff"));
        assert!(!validate("00000000000000000000000"));
        assert!(!validate("0000000000000000000000000"));
        assert!(!validate("00000000000000000000000g"));
        assert!(!validate(""));
        assert!(!validate("80808080808080808"));
    }

    #[test]
    fn test_reference_parse_errors() {
        assert_eq!(
            Reference::parse("abc"),
            Err(FaceError::ReferenceLength {
                expected: REFERENCE_LEN,
                actual: 3
            })
        );
        assert_eq!(
            "8080808080x0808080808080".parse::<Reference>(),
            Err(FaceError::ReferenceDigit {
                position: 10,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_reference_normalises_case() {
        let reference = Reference::parse("FF8080808080808080808000").unwrap();
        assert_eq!(reference.as_str(), "ff8080808080808080808000");
        assert_eq!(Reference::from_seed(&reference.to_seed()), reference);
        assert_eq!(reference.bytes()[0], 0xff);
        assert_eq!(reference.bytes()[11], 0x00);
    }

    #[test]
    fn test_reference_serde_validates() {
        #[derive(Debug, Deserialize, Serialize)]
        struct Bookmark {
            reference: Reference,
        }

        let bookmark: Bookmark = toml::from_str(&format!("reference = \"{NEUTRAL}\"")).unwrap();
        assert_eq!(bookmark.reference, Reference::default());
        assert!(toml::to_string(&bookmark).unwrap().contains(NEUTRAL));

        let bad: Result<Bookmark, _> = toml::from_str("reference = \"8080\"");
        assert!(bad.is_err());
    }
}
