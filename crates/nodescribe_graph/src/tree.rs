// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node tree: the container for nodes, links and group interface sockets.

use crate::link::{Link, LinkId};
use crate::node::{Node, NodeId};
use crate::socket::{SocketId, SocketType, SocketValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A socket declared on a group tree's interface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceSocket {
    /// Display name
    pub name: String,
    /// Data type
    pub socket_type: SocketType,
    /// Default value propagated to new group instances
    pub default_value: Option<SocketValue>,
    /// Minimum value (numeric types only)
    pub min_value: Option<f32>,
    /// Maximum value (numeric types only)
    pub max_value: Option<f32>,
    /// Tooltip text, empty when unset
    pub description: String,
    /// Name of the attribute used when exposed as a field input
    pub default_attribute_name: Option<String>,
    /// Attribute domain tag (`"POINT"` etc.)
    pub attribute_domain: Option<String>,
    /// Whether the value widget is hidden on group instances
    pub hide_value: bool,
    /// Whether the socket is hidden in the modifier panel
    pub hide_in_modifier: bool,
}

impl InterfaceSocket {
    /// Create a new interface socket
    pub fn new(name: impl Into<String>, socket_type: SocketType) -> Self {
        Self {
            name: name.into(),
            socket_type,
            default_value: None,
            min_value: None,
            max_value: None,
            description: String::new(),
            default_attribute_name: None,
            attribute_domain: None,
            hide_value: false,
            hide_in_modifier: false,
        }
    }

    /// Set the default value
    pub fn with_default(mut self, value: SocketValue) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Set min/max bounds
    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }
}

/// A node tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeTree {
    /// Tree name
    pub name: String,
    /// Host tree kind tag (`"ShaderNodeTree"`, `"GeometryNodeTree"`, ...)
    pub tree_type: String,
    /// Nodes in the tree, in creation order
    nodes: IndexMap<NodeId, Node>,
    /// Links between sockets, in creation order
    links: IndexMap<LinkId, Link>,
    /// Declared group inputs (non-empty only when used as a group)
    pub interface_inputs: Vec<InterfaceSocket>,
    /// Declared group outputs (non-empty only when used as a group)
    pub interface_outputs: Vec<InterfaceSocket>,
}

impl NodeTree {
    /// Create a new empty tree
    pub fn new(name: impl Into<String>, tree_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tree_type: tree_type.into(),
            nodes: IndexMap::new(),
            links: IndexMap::new(),
            interface_inputs: Vec::new(),
            interface_outputs: Vec::new(),
        }
    }

    /// Add a node to the tree
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.nodes.insert(id, node);
        id
    }

    /// Remove a node and its links
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        self.links.retain(|_, l| !l.involves_node(node_id));
        self.nodes.swap_remove(&node_id)
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get a mutable node by ID
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Get all nodes, in creation order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Link an output socket to an input socket
    pub fn connect(
        &mut self,
        from_node: NodeId,
        from_socket: SocketId,
        to_node: NodeId,
        to_socket: SocketId,
    ) -> Result<LinkId, LinkError> {
        let source = self
            .nodes
            .get(&from_node)
            .ok_or(LinkError::NodeNotFound(from_node))?;
        let dest = self
            .nodes
            .get(&to_node)
            .ok_or(LinkError::NodeNotFound(to_node))?;

        // Endpoints must exist on the right side of their nodes
        source
            .output_index(from_socket)
            .ok_or(LinkError::SocketNotFound(from_socket))?;
        dest.input_index(to_socket)
            .ok_or(LinkError::SocketNotFound(to_socket))?;

        if from_node == to_node {
            return Err(LinkError::SelfLoop);
        }

        // Inputs accept at most one incoming link
        if self.links.values().any(|l| l.to_socket == to_socket) {
            return Err(LinkError::SocketAlreadyLinked(to_socket));
        }

        let link = Link::new(from_node, from_socket, to_node, to_socket);
        let id = link.id;
        self.links.insert(id, link);
        Ok(id)
    }

    /// Remove a link
    pub fn disconnect(&mut self, link_id: LinkId) -> Option<Link> {
        self.links.swap_remove(&link_id)
    }

    /// Get all links, in creation order
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    /// Get the number of links
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Whether an input socket has an incoming link
    pub fn is_linked(&self, socket_id: SocketId) -> bool {
        self.links.values().any(|l| l.to_socket == socket_id)
    }

    /// Resolve an output socket to its positional index on its node
    ///
    /// Resolution scans the node's ordered output list comparing socket
    /// IDs. Names must not be used here: the host allows duplicate socket
    /// names on one node, so a name-keyed lookup can silently pick the
    /// wrong socket.
    pub fn output_index(&self, node_id: NodeId, socket_id: SocketId) -> Option<usize> {
        self.nodes.get(&node_id)?.output_index(socket_id)
    }

    /// Resolve an input socket to its positional index on its node
    ///
    /// Same ID-based scan as [`NodeTree::output_index`].
    pub fn input_index(&self, node_id: NodeId, socket_id: SocketId) -> Option<usize> {
        self.nodes.get(&node_id)?.input_index(socket_id)
    }
}

/// Error when creating a link
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// Node not found
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Socket not found on the expected side of its node
    #[error("Socket not found: {0:?}")]
    SocketNotFound(SocketId),

    /// Input socket already has an incoming link
    #[error("Socket already linked: {0:?}")]
    SocketAlreadyLinked(SocketId),

    /// Self-loop not allowed
    #[error("Self-loop not allowed")]
    SelfLoop,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::socket::Socket;

    fn two_node_tree() -> (NodeTree, NodeId, SocketId, NodeId, SocketId) {
        let mut tree = NodeTree::new("Test", "ShaderNodeTree");

        let mut value = Node::new("Value", "ShaderNodeValue");
        let out = value.add_output(Socket::new("Value", SocketType::Float));
        let value_id = tree.add_node(value);

        let mut output = Node::new("Material Output", "ShaderNodeOutputMaterial");
        let inp = output.add_input(Socket::new("Surface", SocketType::Shader));
        let output_id = tree.add_node(output);

        (tree, value_id, out, output_id, inp)
    }

    #[test]
    fn test_connect_valid() {
        let (mut tree, from, out, to, inp) = two_node_tree();
        tree.connect(from, out, to, inp).unwrap();
        assert_eq!(tree.link_count(), 1);
        assert!(tree.is_linked(inp));
        assert!(!tree.is_linked(out));
    }

    #[test]
    fn test_connect_rejects_double_input() {
        let (mut tree, from, out, to, inp) = two_node_tree();
        tree.connect(from, out, to, inp).unwrap();
        assert!(matches!(
            tree.connect(from, out, to, inp),
            Err(LinkError::SocketAlreadyLinked(_))
        ));
    }

    #[test]
    fn test_connect_rejects_unknown_socket() {
        let (mut tree, from, _, to, inp) = two_node_tree();
        let bogus = SocketId::new();
        assert!(matches!(
            tree.connect(from, bogus, to, inp),
            Err(LinkError::SocketNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_socket_names_resolve_by_position() {
        let mut tree = NodeTree::new("Dup", "GeometryNodeTree");
        let mut node = Node::new("Capture", "GeometryNodeCaptureAttribute");
        for _ in 0..2 {
            node.add_output(Socket::new("Attribute", SocketType::Float));
        }
        node.add_output(Socket::new("Value", SocketType::Float));
        let dup = node.add_output(Socket::new("Attribute", SocketType::Float));
        let node_id = tree.add_node(node);

        // The second "Attribute" socket sits at index 3, a name lookup
        // would have found index 0.
        assert_eq!(tree.output_index(node_id, dup), Some(3));
    }

    #[test]
    fn test_ron_round_trip() {
        let (mut tree, from, out, to, inp) = two_node_tree();
        tree.connect(from, out, to, inp).unwrap();
        tree.interface_inputs.push(
            InterfaceSocket::new("Scale", SocketType::Float)
                .with_default(SocketValue::Float(1.0))
                .with_range(0.0, 10.0),
        );

        let text = ron::to_string(&tree).unwrap();
        let loaded: NodeTree = ron::from_str(&text).unwrap();
        assert_eq!(loaded.node_count(), 2);
        assert_eq!(loaded.link_count(), 1);
        assert_eq!(loaded.interface_inputs.len(), 1);
        assert_eq!(loaded.output_index(from, out), Some(0));
    }
}
