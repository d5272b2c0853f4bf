//! # Walk Report
//!
//! Plain-text listing of a face walk: the gallery reference, then for
//! each face its stroke widths, nostrils and every named path.

use std::fmt::Write as _;

use face_index_core::{Face, FaceResult, GalleryConfig};
use tracing::info;

/// Writes one face.
fn write_face(out: &mut String, face: &Face) -> std::fmt::Result {
    let geometry = &face.geometry;
    writeln!(out, "face {}", face.index)?;
    writeln!(
        out,
        "  stroke-width base={} eyebrows={}",
        geometry.stroke_widths.base, geometry.stroke_widths.eyebrows
    )?;
    writeln!(
        out,
        "  nostrils {} {} / {} {}",
        geometry.nose.left_nostril.x,
        geometry.nose.left_nostril.y,
        geometry.nose.right_nostril.x,
        geometry.nose.right_nostril.y
    )?;
    for (name, path) in geometry.paths() {
        writeln!(out, "  {name} {path}")?;
    }
    Ok(())
}

/// Renders the walk described by `config`.
///
/// # Errors
///
/// A reference error when the configured reference is malformed.
pub fn render_walk(config: &GalleryConfig) -> FaceResult<String> {
    let gallery = config.gallery()?;
    let reference = gallery.reference();
    info!(%reference, start = config.start_index, count = config.count, "walking gallery");

    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "reference {reference}");
    for face in gallery.walk(config.start_index, config.count) {
        let _ = write_face(&mut out, &face);
    }
    Ok(out)
}
