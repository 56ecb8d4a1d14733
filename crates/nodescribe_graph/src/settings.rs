// SPDX-License-Identifier: MIT OR Apache-2.0
//! Settings bag values and embedded assets.
//!
//! Each node carries a type-specific bag of named settings. The exporter
//! decides which entries to read (and how to encode them) from an injected
//! per-node-type table; the bag itself is shape-free.

use crate::ramp::{ColorRamp, CurveMapping};
use serde::{Deserialize, Serialize};

/// Encoding format of an embedded image asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFileFormat {
    /// PNG
    Png,
    /// JPEG
    Jpeg,
    /// Windows bitmap
    Bmp,
    /// Targa
    Targa,
    /// OpenEXR
    OpenExr,
}

impl ImageFileFormat {
    /// File extension, lower case, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
            Self::Targa => "tga",
            Self::OpenExr => "exr",
        }
    }
}

/// An image asset referenced by a node
///
/// Carries decoded RGBA8 pixels plus the three metadata fields the
/// reconstruction script copies onto the loaded image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// Asset name as shown in the host (may contain an old extension)
    pub name: String,
    /// Format the asset is written out as
    pub file_format: ImageFileFormat,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// RGBA8 pixel data, row-major
    pub pixels: Vec<u8>,
    /// Source kind (`'FILE'`, `'GENERATED'`, `'SEQUENCE'`, ...)
    pub source: String,
    /// Color space name (`'sRGB'`, `'Non-Color'`, ...)
    pub colorspace: String,
    /// Alpha mode (`'STRAIGHT'`, `'PREMUL'`, ...)
    pub alpha_mode: String,
}

/// Per-node image playback state for image sequences/movies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUser {
    /// Current frame offset
    pub frame_current: i32,
    /// Number of frames to play
    pub frame_duration: i32,
    /// Global starting frame
    pub frame_start: i32,
    /// Offset into the sequence
    pub frame_offset: i32,
    /// Whether playback loops
    pub use_cyclic: bool,
    /// Whether the frame advances with the scene
    pub use_auto_refresh: bool,
}

/// Value stored in a node's settings bag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SettingValue {
    /// Enum identifier
    Enum(String),
    /// Set of enum identifiers
    EnumSet(Vec<String>),
    /// String
    String(String),
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i32),
    /// Floating point
    Float(f32),
    /// 1D vector
    Vec1([f32; 1]),
    /// 2D vector
    Vec2([f32; 2]),
    /// 3D vector
    Vec3([f32; 3]),
    /// 4D vector
    Vec4([f32; 4]),
    /// RGB color
    Color([f32; 3]),
    /// Color ramp sub-object
    ColorRamp(ColorRamp),
    /// Curve mapping sub-object
    CurveMapping(CurveMapping),
    /// Embedded image asset
    Image(Image),
    /// Image playback state
    ImageUser(ImageUser),
    /// Named material reference
    Material(String),
    /// Named object reference
    Object(String),
}
