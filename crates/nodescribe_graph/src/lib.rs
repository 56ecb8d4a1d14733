// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node graph object model for nodescribe.
//!
//! This crate models the graph side of a shader/geometry node editor:
//! - Node trees with ordered nodes and links
//! - Typed sockets with optional literal defaults
//! - Specialized per-node sub-objects (color ramps, curve mappings)
//! - Embedded image assets and asset references
//! - Nested trees (group nodes wrapping a sub-tree)
//!
//! ## Socket identity
//!
//! Socket display names are *not* unique within a node — the modeled host
//! allows duplicates. Sockets therefore carry an opaque [`SocketId`], and
//! anything that needs a socket's position (script emission in particular)
//! resolves it by scanning the owning node's ordered socket list, never by
//! name. See [`NodeTree::output_index`] and [`NodeTree::input_index`].

pub mod link;
pub mod node;
pub mod ramp;
pub mod settings;
pub mod socket;
pub mod tree;

pub use link::{Link, LinkId};
pub use node::{Node, NodeId};
pub use ramp::{
    ColorRamp, Curve, CurveExtend, CurveMapping, CurvePoint, CurveTone, HandleType,
    HueInterpolation, RampColorMode, RampElement, RampInterpolation,
};
pub use settings::{Image, ImageFileFormat, ImageUser, SettingValue};
pub use socket::{Socket, SocketId, SocketType, SocketValue};
pub use tree::{InterfaceSocket, LinkError, NodeTree};
