// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the graph model.

use crate::settings::SettingValue;
use crate::socket::{Socket, SocketId};
use crate::tree::NodeTree;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// A node instance in a tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique instance ID
    pub id: NodeId,
    /// Display name (not guaranteed unique within a tree)
    pub name: String,
    /// Host type tag (`"ShaderNodeTexImage"` etc.)
    pub node_type: String,
    /// User label, empty when unset
    pub label: String,
    /// Position in the editor
    pub position: [f32; 2],
    /// Node width
    pub width: f32,
    /// Node height
    pub height: f32,
    /// Enclosing frame or group node, if any
    pub parent: Option<NodeId>,
    /// Whether a custom header color is applied
    pub use_custom_color: bool,
    /// Custom header color (meaningful when `use_custom_color` is set)
    pub color: [f32; 3],
    /// Whether the node is muted
    pub mute: bool,
    /// Input sockets, in editor order
    pub inputs: Vec<Socket>,
    /// Output sockets, in editor order
    pub outputs: Vec<Socket>,
    /// Type-specific settings bag
    pub settings: IndexMap<String, SettingValue>,
    /// Wrapped sub-tree, for group nodes
    pub subtree: Option<NodeTree>,
}

impl Node {
    /// Create a new node of the given type
    pub fn new(name: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
            node_type: node_type.into(),
            label: String::new(),
            position: [0.0, 0.0],
            width: 140.0,
            height: 100.0,
            parent: None,
            use_custom_color: false,
            color: [0.608, 0.608, 0.608],
            mute: false,
            inputs: Vec::new(),
            outputs: Vec::new(),
            settings: IndexMap::new(),
            subtree: None,
        }
    }

    /// Set the position
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = [x, y];
        self
    }

    /// Append an input socket, returning its ID
    pub fn add_input(&mut self, socket: Socket) -> SocketId {
        let id = socket.id;
        self.inputs.push(socket);
        id
    }

    /// Append an output socket, returning its ID
    pub fn add_output(&mut self, socket: Socket) -> SocketId {
        let id = socket.id;
        self.outputs.push(socket);
        id
    }

    /// Set a settings-bag entry
    pub fn set(&mut self, name: impl Into<String>, value: SettingValue) {
        self.settings.insert(name.into(), value);
    }

    /// Read a settings-bag entry
    pub fn setting(&self, name: &str) -> Option<&SettingValue> {
        self.settings.get(name)
    }

    /// Get an input socket by positional index
    pub fn input(&self, index: usize) -> Option<&Socket> {
        self.inputs.get(index)
    }

    /// Get an output socket by positional index
    pub fn output(&self, index: usize) -> Option<&Socket> {
        self.outputs.get(index)
    }

    /// Find an input socket's positional index by ID
    pub fn input_index(&self, socket_id: SocketId) -> Option<usize> {
        self.inputs.iter().position(|s| s.id == socket_id)
    }

    /// Find an output socket's positional index by ID
    pub fn output_index(&self, socket_id: SocketId) -> Option<usize> {
        self.outputs.iter().position(|s| s.id == socket_id)
    }
}
