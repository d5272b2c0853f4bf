//! # Path Data
//!
//! SVG path-data descriptions of feature geometry.
//!
//! This is a vector description only. Drawing it is the renderer's job.

use std::fmt;

use crate::geometry::{CubicCurve, FeatureGeometry, Mouth, Point, QuadraticCurve, Segment};

/// One path command, in absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// `M x y`
    MoveTo(Point),
    /// `L x y`
    LineTo(Point),
    /// `Q cx cy x y`
    QuadTo {
        /// Control point
        control: Point,
        /// End point
        end: Point,
    },
    /// `C c1x c1y c2x c2y x y`
    CubicTo {
        /// First control point
        control1: Point,
        /// Second control point
        control2: Point,
        /// End point
        end: Point,
    },
}

/// An ordered list of path commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    /// Starts a path at `point`.
    #[must_use]
    pub fn starting_at(point: Point) -> Self {
        Self {
            commands: vec![PathCommand::MoveTo(point)],
        }
    }

    /// Appends a straight line.
    #[must_use]
    pub fn line_to(mut self, end: Point) -> Self {
        self.commands.push(PathCommand::LineTo(end));
        self
    }

    /// Appends a quadratic curve.
    #[must_use]
    pub fn quad_to(mut self, control: Point, end: Point) -> Self {
        self.commands.push(PathCommand::QuadTo { control, end });
        self
    }

    /// Appends a cubic curve.
    #[must_use]
    pub fn cubic_to(mut self, control1: Point, control2: Point, end: Point) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            end,
        });
        self
    }

    /// The commands in drawing order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }
}

/// Writes a coordinate the way a browser would print it.
fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == 0.0 {
        // Covers -0.0 as well
        f.write_str("0")
    } else {
        write!(f, "{value}")
    }
}

fn write_point(f: &mut fmt::Formatter<'_>, point: Point) -> fmt::Result {
    write_number(f, point.x)?;
    f.write_str(" ")?;
    write_number(f, point.y)
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MoveTo(point) => {
                f.write_str("M")?;
                write_point(f, point)
            }
            Self::LineTo(point) => {
                f.write_str("L")?;
                write_point(f, point)
            }
            Self::QuadTo { control, end } => {
                f.write_str("Q")?;
                write_point(f, control)?;
                f.write_str(" ")?;
                write_point(f, end)
            }
            Self::CubicTo {
                control1,
                control2,
                end,
            } => {
                f.write_str("C")?;
                write_point(f, control1)?;
                f.write_str(" ")?;
                write_point(f, control2)?;
                f.write_str(" ")?;
                write_point(f, end)
            }
        }
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

impl From<&Segment> for PathData {
    fn from(segment: &Segment) -> Self {
        Self::starting_at(segment.start).line_to(segment.end)
    }
}

impl From<&QuadraticCurve> for PathData {
    fn from(curve: &QuadraticCurve) -> Self {
        Self::starting_at(curve.start).quad_to(curve.control, curve.end)
    }
}

impl From<&CubicCurve> for PathData {
    fn from(curve: &CubicCurve) -> Self {
        Self::starting_at(curve.start).cubic_to(curve.control1, curve.control2, curve.end)
    }
}

impl Mouth {
    /// Both upper-lip cubics as one continuous path.
    #[must_use]
    pub fn upper_lip_path(&self) -> PathData {
        PathData::from(&self.upper_left).cubic_to(
            self.upper_right.control1,
            self.upper_right.control2,
            self.upper_right.end,
        )
    }
}

impl FeatureGeometry {
    /// Every drawable feature as a named path.
    ///
    /// Eyebrows use [`StrokeWidths::eyebrows`](crate::geometry::StrokeWidths),
    /// everything else the base width. Nostrils are points, not paths.
    #[must_use]
    pub fn paths(&self) -> Vec<(&'static str, PathData)> {
        vec![
            ("left-eyebrow", PathData::from(&self.eyebrows.left)),
            ("right-eyebrow", PathData::from(&self.eyebrows.right)),
            ("left-eye", PathData::from(&self.eyes.left)),
            ("right-eye", PathData::from(&self.eyes.right)),
            ("left-ala", PathData::from(&self.nose.left_ala)),
            ("right-ala", PathData::from(&self.nose.right_ala)),
            ("upper-lip", self.mouth.upper_lip_path()),
            ("lower-lip", PathData::from(&self.mouth.lower)),
        ]
    }
}
