// SPDX-License-Identifier: MIT OR Apache-2.0
//! Specialized per-node sub-objects: color ramps and curve mappings.
//!
//! These live inside a node's settings bag and get bespoke treatment
//! during script emission (element/point slot reuse, see the exporter).

use serde::{Deserialize, Serialize};

/// Color blending mode of a ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RampColorMode {
    /// Straight RGB blending
    Rgb,
    /// HSV blending
    Hsv,
    /// HSL blending
    Hsl,
}

impl RampColorMode {
    /// The host enum identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Hsv => "HSV",
            Self::Hsl => "HSL",
        }
    }
}

/// Interpolation between ramp elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RampInterpolation {
    /// Straight-line interpolation
    Linear,
    /// Ease in/out
    Ease,
    /// B-spline
    BSpline,
    /// Cardinal spline
    Cardinal,
    /// No interpolation (stepped)
    Constant,
}

impl RampInterpolation {
    /// The host enum identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "LINEAR",
            Self::Ease => "EASE",
            Self::BSpline => "B_SPLINE",
            Self::Cardinal => "CARDINAL",
            Self::Constant => "CONSTANT",
        }
    }
}

/// Hue wrap direction for HSV/HSL ramps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HueInterpolation {
    /// Shortest path around the hue circle
    Near,
    /// Longest path around the hue circle
    Far,
    /// Always clockwise
    Clockwise,
    /// Always counter-clockwise
    CounterClockwise,
}

impl HueInterpolation {
    /// The host enum identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Near => "NEAR",
            Self::Far => "FAR",
            Self::Clockwise => "CW",
            Self::CounterClockwise => "CCW",
        }
    }
}

/// One stop on a color ramp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RampElement {
    /// Position along the ramp in [0, 1]
    pub position: f32,
    /// Alpha at this stop
    pub alpha: f32,
    /// RGBA color at this stop
    pub color: [f32; 4],
}

/// A color ramp owned by a node's settings bag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorRamp {
    /// Color blending mode
    pub color_mode: RampColorMode,
    /// Interpolation between elements
    pub interpolation: RampInterpolation,
    /// Hue wrap direction (used by HSV/HSL modes)
    pub hue_interpolation: HueInterpolation,
    /// Ordered stops, by position
    pub elements: Vec<RampElement>,
}

impl Default for ColorRamp {
    fn default() -> Self {
        // Matches the host's freshly created ramp: black to white
        Self {
            color_mode: RampColorMode::Rgb,
            interpolation: RampInterpolation::Linear,
            hue_interpolation: HueInterpolation::Near,
            elements: vec![
                RampElement {
                    position: 0.0,
                    alpha: 1.0,
                    color: [0.0, 0.0, 0.0, 1.0],
                },
                RampElement {
                    position: 1.0,
                    alpha: 1.0,
                    color: [1.0, 1.0, 1.0, 1.0],
                },
            ],
        }
    }
}

/// Extrapolation beyond the first/last curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveExtend {
    /// Hold the end values
    Horizontal,
    /// Continue the end slopes
    Extrapolated,
}

impl CurveExtend {
    /// The host enum identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "HORIZONTAL",
            Self::Extrapolated => "EXTRAPOLATED",
        }
    }
}

/// Tone handling of an RGB curve mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveTone {
    /// Channels mapped independently
    Standard,
    /// Hue/saturation preserving film-like mapping
    FilmLike,
}

impl CurveTone {
    /// The host enum identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::FilmLike => "FILMLIKE",
        }
    }
}

/// Tangent handling of a curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandleType {
    /// Smooth automatic tangents
    Auto,
    /// Automatic tangents clamped against overshoot
    AutoClamped,
    /// Sharp corner
    Vector,
}

impl HandleType {
    /// The host enum identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::AutoClamped => "AUTO_CLAMPED",
            Self::Vector => "VECTOR",
        }
    }
}

/// One point of a curve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Point location (x, y)
    pub location: [f32; 2],
    /// Tangent handling at this point
    pub handle_type: HandleType,
}

impl CurvePoint {
    /// Create a point with automatic handles
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            location: [x, y],
            handle_type: HandleType::Auto,
        }
    }
}

/// A single named curve inside a curve mapping
///
/// The host guarantees every curve owns at least two points; emission
/// relies on that to reuse the pre-existing point slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curve {
    /// Ordered points, by x location
    pub points: Vec<CurvePoint>,
}

/// A curve mapping owned by a node's settings bag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveMapping {
    /// Extrapolation beyond the end points
    pub extend: CurveExtend,
    /// Tone handling (RGB curves only)
    pub tone: CurveTone,
    /// Black input level
    pub black_level: [f32; 3],
    /// White input level
    pub white_level: [f32; 3],
    /// Clip rectangle, minimum x
    pub clip_min_x: f32,
    /// Clip rectangle, minimum y
    pub clip_min_y: f32,
    /// Clip rectangle, maximum x
    pub clip_max_x: f32,
    /// Clip rectangle, maximum y
    pub clip_max_y: f32,
    /// Whether points are clamped to the clip rectangle
    pub use_clip: bool,
    /// The curves (one per channel for RGB mappings)
    pub curves: Vec<Curve>,
}

impl Default for CurveMapping {
    fn default() -> Self {
        Self {
            extend: CurveExtend::Horizontal,
            tone: CurveTone::Standard,
            black_level: [0.0, 0.0, 0.0],
            white_level: [1.0, 1.0, 1.0],
            clip_min_x: 0.0,
            clip_min_y: 0.0,
            clip_max_x: 1.0,
            clip_max_y: 1.0,
            use_clip: true,
            curves: vec![Curve {
                points: vec![CurvePoint::new(0.0, 0.0), CurvePoint::new(1.0, 1.0)],
            }],
        }
    }
}
