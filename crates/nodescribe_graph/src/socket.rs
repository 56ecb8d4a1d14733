// SPDX-License-Identifier: MIT OR Apache-2.0
//! Socket definitions for node inputs/outputs.

use crate::settings::Image;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a socket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SocketId(pub Uuid);

impl SocketId {
    /// Create a new random socket ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SocketId {
    fn default() -> Self {
        Self::new()
    }
}

/// Data type carried by a socket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocketType {
    /// Floating point value
    Float,
    /// Integer value
    Int,
    /// Boolean value
    Bool,
    /// 3D vector
    Vector,
    /// Rotation (euler triple)
    Rotation,
    /// Color (RGBA)
    Color,
    /// String value
    String,
    /// Menu selection
    Menu,
    /// Image datablock reference
    Image,
    /// Object reference
    Object,
    /// Material reference
    Material,
    /// Collection reference
    Collection,
    /// Texture reference
    Texture,
    /// Geometry stream (no literal default exists)
    Geometry,
    /// Shader closure (no literal default exists)
    Shader,
    /// Virtual placeholder socket on group in/out nodes
    Virtual,
}

impl SocketType {
    /// The host type-tag string for this socket type (`"NodeSocketFloat"` etc.)
    pub fn idname(&self) -> &'static str {
        match self {
            Self::Float => "NodeSocketFloat",
            Self::Int => "NodeSocketInt",
            Self::Bool => "NodeSocketBool",
            Self::Vector => "NodeSocketVector",
            Self::Rotation => "NodeSocketRotation",
            Self::Color => "NodeSocketColor",
            Self::String => "NodeSocketString",
            Self::Menu => "NodeSocketMenu",
            Self::Image => "NodeSocketImage",
            Self::Object => "NodeSocketObject",
            Self::Material => "NodeSocketMaterial",
            Self::Collection => "NodeSocketCollection",
            Self::Texture => "NodeSocketTexture",
            Self::Geometry => "NodeSocketGeometry",
            Self::Shader => "NodeSocketShader",
            Self::Virtual => "NodeSocketVirtual",
        }
    }
}

/// A socket on a node
///
/// Socket names are display names and may repeat within one node; the
/// [`SocketId`] is the only reliable identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Socket {
    /// Unique socket ID
    pub id: SocketId,
    /// Display name (duplicates allowed within a node)
    pub name: String,
    /// Data type
    pub socket_type: SocketType,
    /// Whether the socket is hidden in the editor
    pub hide: bool,
    /// Literal default value, meaningful only while the socket is unlinked
    pub default_value: Option<SocketValue>,
}

impl Socket {
    /// Create a new socket with no default value
    pub fn new(name: impl Into<String>, socket_type: SocketType) -> Self {
        Self {
            id: SocketId::new(),
            name: name.into(),
            socket_type,
            hide: false,
            default_value: None,
        }
    }

    /// Set the default value
    pub fn with_default(mut self, value: SocketValue) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Mark the socket hidden
    pub fn hidden(mut self) -> Self {
        self.hide = true;
        self
    }
}

/// Value that can be stored as a socket default
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SocketValue {
    /// Floating point
    Float(f32),
    /// Integer
    Int(i32),
    /// Boolean
    Bool(bool),
    /// 3D vector
    Vector([f32; 3]),
    /// Color (RGBA)
    Color([f32; 4]),
    /// String
    String(String),
    /// Embedded image asset
    Image(Image),
    /// Named object reference
    Object(String),
    /// Named material reference
    Material(String),
    /// Named collection reference
    Collection(String),
    /// Named texture reference
    Texture(String),
}

impl SocketValue {
    /// The socket type this value naturally belongs to
    pub fn socket_type(&self) -> SocketType {
        match self {
            Self::Float(_) => SocketType::Float,
            Self::Int(_) => SocketType::Int,
            Self::Bool(_) => SocketType::Bool,
            Self::Vector(_) => SocketType::Vector,
            Self::Color(_) => SocketType::Color,
            Self::String(_) => SocketType::String,
            Self::Image(_) => SocketType::Image,
            Self::Object(_) => SocketType::Object,
            Self::Material(_) => SocketType::Material,
            Self::Collection(_) => SocketType::Collection,
            Self::Texture(_) => SocketType::Texture,
        }
    }
}
