// SPDX-License-Identifier: MIT OR Apache-2.0
//! Per-tree emission: one complete reconstruction function per node tree.
//!
//! Emission order is load-bearing: every node is emitted (and registered in
//! the node→identifier map) before any relational statement — parents,
//! locations, dimensions and links all reference identifiers minted during
//! the node pass. Nested group trees recurse into this same routine with a
//! fresh name registry, producing a self-contained nested `def`.

use crate::emit_node::emit_node;
use crate::encode::{py_enum, py_float, py_str};
use crate::error::ExportError;
use crate::sanitize::{sanitize_identifier, NameRegistry};
use crate::tables::ExportConfig;
use indexmap::IndexMap;
use nodescribe_graph::{InterfaceSocket, NodeId, NodeTree, SocketType, SocketValue};

/// Text accumulator with tab indentation
///
/// One indentation level per tab; nesting depth equals recursion depth
/// plus the assembler's base offset.
#[derive(Debug, Default)]
pub struct ScriptWriter {
    buf: String,
    depth: usize,
}

impl ScriptWriter {
    /// Create an empty writer at depth zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one indented line
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buf.push('\t');
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Append an empty line
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Increase the indentation depth
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decrease the indentation depth
    pub fn dedent(&mut self) {
        debug_assert!(self.depth > 0);
        self.depth = self.depth.saturating_sub(1);
    }

    /// Consume the writer, returning the accumulated text
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Mutable state threaded through one tree's emission
///
/// Both pieces are confined to a single invocation and discarded when the
/// tree's function has been written.
pub(crate) struct TreeState {
    /// Identifier allocator for this tree's scope
    pub(crate) names: NameRegistry,
    /// Node → emitted identifier, filled during the node pass
    pub(crate) node_vars: IndexMap<NodeId, String>,
}

impl TreeState {
    fn new() -> Self {
        Self {
            names: NameRegistry::new(),
            node_vars: IndexMap::new(),
        }
    }
}

/// Emit one tree's reconstruction function, returning the function name
///
/// The function name is allocated from `outer_names` — the enclosing
/// scope's registry (the script-level registry for top-level trees, the
/// parent tree's registry for nested groups). The body gets its own fresh
/// registry. Cyclically nested trees are unsupported input and would
/// recurse without bound.
pub fn emit_tree_function(
    w: &mut ScriptWriter,
    tree: &NodeTree,
    config: &ExportConfig,
    outer_names: &mut NameRegistry,
) -> Result<String, ExportError> {
    let base = sanitize_identifier(&tree.name, config.lowercase_identifiers);
    let fn_name = outer_names.allocate(&format!("{base}_node_group"));
    tracing::debug!("Emitting tree '{}' as {fn_name}()", tree.name);

    w.line(&format!("def {fn_name}():"));
    w.indent();

    let mut state = TreeState::new();
    let tree_var = state.names.allocate(&base);
    w.line(&format!(
        "{tree_var} = bpy.data.node_groups.new(type={}, name={})",
        py_enum(&tree.tree_type),
        py_str(&tree.name)
    ));
    w.blank();

    w.line(&format!("# initialize {tree_var} nodes"));
    for node in tree.nodes() {
        // A group node's sub-tree is emitted first as its own nested
        // function, so the wrapping node can call it on creation.
        let subtree_fn = match &node.subtree {
            Some(sub) => Some(emit_tree_function(w, sub, config, &mut state.names)?),
            None => None,
        };
        emit_node(w, tree, &tree_var, node, subtree_fn.as_deref(), &mut state, config)?;
        w.blank();
    }

    if !tree.interface_inputs.is_empty() {
        emit_interface(w, &tree_var, "inputs", &tree.interface_inputs);
        w.blank();
    }
    if !tree.interface_outputs.is_empty() {
        emit_interface(w, &tree_var, "outputs", &tree.interface_outputs);
        w.blank();
    }

    let mut wrote_parent_header = false;
    for node in tree.nodes() {
        let Some(parent) = node.parent else { continue };
        if !wrote_parent_header {
            w.line("# Set parents");
            wrote_parent_header = true;
        }
        let child_var = &state.node_vars[&node.id];
        let parent_var = state
            .node_vars
            .get(&parent)
            .ok_or(ExportError::UnknownNode(parent))?;
        w.line(&format!("{child_var}.parent = {parent_var}"));
    }
    if wrote_parent_header {
        w.blank();
    }

    w.line("# Set locations");
    for node in tree.nodes() {
        let var = &state.node_vars[&node.id];
        w.line(&format!(
            "{var}.location = ({}, {})",
            py_float(node.position[0]),
            py_float(node.position[1])
        ));
    }
    w.blank();

    w.line("# Set dimensions");
    for node in tree.nodes() {
        let var = &state.node_vars[&node.id];
        w.line(&format!(
            "{var}.width, {var}.height = {}, {}",
            py_float(node.width),
            py_float(node.height)
        ));
    }

    if tree.link_count() > 0 {
        w.blank();
        w.line(&format!("# initialize {tree_var} links"));
        for link in tree.links() {
            let from_node = tree
                .node(link.from_node)
                .ok_or(ExportError::UnknownNode(link.from_node))?;
            let to_node = tree
                .node(link.to_node)
                .ok_or(ExportError::UnknownNode(link.to_node))?;
            let from_var = state
                .node_vars
                .get(&link.from_node)
                .ok_or(ExportError::UnknownNode(link.from_node))?;
            let to_var = state
                .node_vars
                .get(&link.to_node)
                .ok_or(ExportError::UnknownNode(link.to_node))?;

            // Positional resolution by socket ID scan; see the graph
            // crate's note on duplicate socket names.
            let out_idx = from_node
                .output_index(link.from_socket)
                .ok_or(ExportError::UnknownSocket(link.from_socket))?;
            let in_idx = to_node
                .input_index(link.to_socket)
                .ok_or(ExportError::UnknownSocket(link.to_socket))?;

            w.line(&format!(
                "# {}.{} -> {}.{}",
                from_node.name, from_node.outputs[out_idx].name, to_node.name, to_node.inputs[in_idx].name
            ));
            w.line(&format!(
                "{tree_var}.links.new({from_var}.outputs[{out_idx}], {to_var}.inputs[{in_idx}])"
            ));
        }
    }

    w.blank();
    w.line(&format!("return {tree_var}"));
    w.dedent();
    Ok(fn_name)
}

/// Emit one direction of a group tree's interface declarations
///
/// Declarations use the pre-4.0 `inputs.new`/`outputs.new` host API; the
/// assembler's `bl_info` header pins the matching minimum version.
fn emit_interface(w: &mut ScriptWriter, tree_var: &str, direction: &str, sockets: &[InterfaceSocket]) {
    w.line(&format!("# {tree_var} {direction}"));
    let mut index = 0usize;
    for socket in sockets {
        // Virtual placeholders exist only as the editor's trailing "add
        // socket" slot and are never declared.
        if socket.socket_type == SocketType::Virtual {
            continue;
        }
        w.line(&format!(
            "{tree_var}.{direction}.new({}, {})",
            py_enum(socket.socket_type.idname()),
            py_str(&socket.name)
        ));
        let target = format!("{tree_var}.{direction}[{index}]");
        if let Some(value) = &socket.default_value {
            if let Some(literal) = interface_value_literal(value) {
                w.line(&format!("{target}.default_value = {literal}"));
            }
        }
        if let Some(min) = socket.min_value {
            w.line(&format!("{target}.min_value = {}", py_float(min)));
        }
        if let Some(max) = socket.max_value {
            w.line(&format!("{target}.max_value = {}", py_float(max)));
        }
        if let Some(attr) = &socket.default_attribute_name {
            w.line(&format!("{target}.default_attribute_name = {}", py_str(attr)));
        }
        if let Some(domain) = &socket.attribute_domain {
            w.line(&format!("{target}.attribute_domain = {}", py_enum(domain)));
        }
        if !socket.description.is_empty() {
            w.line(&format!("{target}.description = {}", py_str(&socket.description)));
        }
        if socket.hide_value {
            w.line(&format!("{target}.hide_value = True"));
        }
        if socket.hide_in_modifier {
            w.line(&format!("{target}.hide_in_modifier = True"));
        }
        index += 1;
    }
}

fn interface_value_literal(value: &SocketValue) -> Option<String> {
    use crate::encode::{py_bool, py_int, py_vec3, py_vec4};
    match value {
        SocketValue::Float(v) => Some(py_float(*v)),
        SocketValue::Int(v) => Some(py_int(*v)),
        SocketValue::Bool(v) => Some(py_bool(*v)),
        SocketValue::Vector(v) => Some(py_vec3(*v)),
        SocketValue::Color(v) => Some(py_vec4(*v)),
        SocketValue::String(v) => Some(py_str(v)),
        // Asset references carry no interface default
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodescribe_graph::{Node, Socket};

    fn emit(tree: &NodeTree) -> String {
        let config = ExportConfig::default();
        let mut w = ScriptWriter::new();
        let mut names = NameRegistry::new();
        emit_tree_function(&mut w, tree, &config, &mut names).unwrap();
        w.into_string()
    }

    #[test]
    fn test_two_node_scenario() {
        let mut tree = NodeTree::new("Scenario", "ShaderNodeTree");

        let mut value = Node::new("Value", "ShaderNodeValue");
        let out = value.add_output(
            Socket::new("Value", SocketType::Float).with_default(SocketValue::Float(5.0)),
        );
        let value_id = tree.add_node(value);

        let mut math = Node::new("Math", "ShaderNodeMath");
        let inp = math.add_input(
            Socket::new("Value", SocketType::Float).with_default(SocketValue::Float(0.5)),
        );
        let math_id = tree.add_node(math);
        tree.connect(value_id, out, math_id, inp).unwrap();

        let text = emit(&tree);
        assert!(text.contains("value = scenario.nodes.new(\"ShaderNodeValue\")"));
        assert!(text.contains("math = scenario.nodes.new(\"ShaderNodeMath\")"));
        // Output default on the source node
        assert!(text.contains("value.outputs[0].default_value = 5.0"));
        // The sink's input is linked, so no default may be emitted for it
        assert!(!text.contains("math.inputs[0].default_value"));
        assert!(text.contains("# Value.Value -> Math.Value"));
        assert!(text.contains("scenario.links.new(value.outputs[0], math.inputs[0])"));
    }

    #[test]
    fn test_duplicate_named_sockets_use_position() {
        let mut tree = NodeTree::new("Dup", "GeometryNodeTree");

        let mut source = Node::new("Source", "GeometryNodeCaptureAttribute");
        let mut dup = None;
        for i in 0..5 {
            let name = if i == 2 || i == 4 { "Attribute" } else { "Out" };
            let id = source.add_output(Socket::new(name, SocketType::Float));
            if i == 4 {
                dup = Some(id);
            }
        }
        let source_id = tree.add_node(source);

        let mut sink = Node::new("Sink", "GeometryNodeSetPosition");
        let inp = sink.add_input(Socket::new("Offset", SocketType::Float));
        let sink_id = tree.add_node(sink);

        tree.connect(source_id, dup.unwrap(), sink_id, inp).unwrap();
        let text = emit(&tree);
        // The linked socket sits at index 4; a name lookup would pick 2
        assert!(text.contains("dup.links.new(source.outputs[4], sink.inputs[0])"));
    }

    #[test]
    fn test_parent_header_written_once() {
        let mut tree = NodeTree::new("Frames", "ShaderNodeTree");
        let frame = tree.add_node(Node::new("Frame", "NodeFrame"));
        for name in ["A", "B"] {
            let mut node = Node::new(name, "ShaderNodeMath");
            node.parent = Some(frame);
            tree.add_node(node);
        }

        let text = emit(&tree);
        assert_eq!(text.matches("# Set parents").count(), 1);
        assert!(text.contains("a.parent = frame"));
        assert!(text.contains("b.parent = frame"));
    }

    #[test]
    fn test_interface_declarations() {
        let mut tree = NodeTree::new("Group", "GeometryNodeTree");
        tree.interface_inputs.push(
            InterfaceSocket::new("Scale", SocketType::Float)
                .with_default(SocketValue::Float(1.0))
                .with_range(0.0, 10.0),
        );
        tree.interface_inputs
            .push(InterfaceSocket::new("", SocketType::Virtual));
        let mut out = InterfaceSocket::new("Geometry", SocketType::Geometry);
        out.description = "Result geometry".to_string();
        tree.interface_outputs.push(out);

        let text = emit(&tree);
        assert!(text.contains("group.inputs.new('NodeSocketFloat', \"Scale\")"));
        assert!(text.contains("group.inputs[0].default_value = 1.0"));
        assert!(text.contains("group.inputs[0].min_value = 0.0"));
        assert!(text.contains("group.inputs[0].max_value = 10.0"));
        // The virtual placeholder is skipped entirely
        assert!(!text.contains("NodeSocketVirtual"));
        assert!(text.contains("group.outputs.new('NodeSocketGeometry', \"Geometry\")"));
        assert!(text.contains("group.outputs[0].description = \"Result geometry\""));
    }

    #[test]
    fn test_nested_group_emitted_as_inner_function() {
        let mut inner = NodeTree::new("Inner", "GeometryNodeTree");
        inner.add_node(Node::new("Value", "ShaderNodeValue"));

        let mut outer = NodeTree::new("Outer", "GeometryNodeTree");
        let mut group = Node::new("Group", "GeometryNodeGroup");
        group.subtree = Some(inner);
        outer.add_node(group);

        let text = emit(&outer);
        assert!(text.contains("def outer_node_group():"));
        assert!(text.contains("\tdef inner_node_group():"));
        assert!(text.contains("group.node_tree = inner_node_group()"));
        // Inner body indented one level below the inner def
        assert!(text.contains("\t\tinner = bpy.data.node_groups.new("));
    }

    #[test]
    fn test_duplicate_display_names_get_unique_vars() {
        let mut tree = NodeTree::new("Names", "ShaderNodeTree");
        tree.add_node(Node::new("Math", "ShaderNodeMath"));
        tree.add_node(Node::new("Math", "ShaderNodeMath"));
        tree.add_node(Node::new("Math", "ShaderNodeMath"));

        let text = emit(&tree);
        assert!(text.contains("math = names.nodes.new"));
        assert!(text.contains("math_1 = names.nodes.new"));
        assert!(text.contains("math_2 = names.nodes.new"));
    }
}
