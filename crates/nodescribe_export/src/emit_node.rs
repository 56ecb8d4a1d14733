// SPDX-License-Identifier: MIT OR Apache-2.0
//! Per-node emission: creation, identity, settings, sub-objects, defaults.
//!
//! Statement order per node: creation, optional `node_tree` binding for
//! group nodes, label/color/mute, table-driven settings (ramps, curves and
//! images get bespoke protocols), socket hide flags, unlinked input
//! defaults, output defaults for the few node types that carry one.

use crate::assets::{emit_image_loader, export_image};
use crate::emit_tree::{ScriptWriter, TreeState};
use crate::encode::{
    py_bool, py_color, py_enum, py_enum_set, py_float, py_int, py_str, py_vec1, py_vec2, py_vec3,
    py_vec4,
};
use crate::error::ExportError;
use crate::sanitize::sanitize_identifier;
use crate::tables::{ExportConfig, SettingKind};
use nodescribe_graph::{ColorRamp, CurveMapping, Node, NodeTree, SettingValue, SocketValue};

/// Pass-through node type whose input defaults are never emitted
const REROUTE: &str = "NodeReroute";

/// Node types carrying a literal output default
const OUTPUT_DEFAULT_TYPES: &[&str] = &["ShaderNodeValue", "ShaderNodeRGB", "ShaderNodeNormal"];

/// Reflection seam for reading settings off a host entity
///
/// The emitter only ever reads settings through this trait, so a different
/// host binding can plug in without touching the emission logic.
pub trait SettingSource {
    /// Read a named attribute, if present
    fn setting(&self, name: &str) -> Option<&SettingValue>;
}

impl SettingSource for Node {
    fn setting(&self, name: &str) -> Option<&SettingValue> {
        self.settings.get(name)
    }
}

/// Emit all statements reconstructing one node
///
/// Registers the node's fresh identifier in `state.node_vars` so the later
/// relational passes (parents, locations, links) can reference it.
pub(crate) fn emit_node(
    w: &mut ScriptWriter,
    tree: &NodeTree,
    tree_var: &str,
    node: &Node,
    subtree_fn: Option<&str>,
    state: &mut TreeState,
    config: &ExportConfig,
) -> Result<(), ExportError> {
    w.line(&format!("# node {}", node.name));
    let var = state
        .names
        .allocate(&sanitize_identifier(&node.name, config.lowercase_identifiers));
    state.node_vars.insert(node.id, var.clone());

    w.line(&format!(
        "{var} = {tree_var}.nodes.new({})",
        py_str(&node.node_type)
    ));
    if let Some(fn_name) = subtree_fn {
        w.line(&format!("{var}.node_tree = {fn_name}()"));
    }

    if !node.label.is_empty() {
        w.line(&format!("{var}.label = {}", py_str(&node.label)));
    }
    if node.use_custom_color {
        w.line(&format!("{var}.use_custom_color = True"));
        w.line(&format!("{var}.color = {}", py_vec3(node.color)));
    }
    if node.mute {
        w.line(&format!("{var}.mute = True"));
    }

    emit_settings(w, node, &node.node_type, &var, state, config)?;
    emit_socket_visibility(w, node, &var);
    if node.node_type != REROUTE {
        emit_input_defaults(w, tree, node, &var, state, config)?;
    }
    emit_output_defaults(w, node, &var);

    Ok(())
}

/// Emit the table-driven settings for one node
///
/// An absent ordinary setting is a diagnostic, not an error; absent ramp
/// and curve sub-objects abort the enclosing tree's emission.
fn emit_settings(
    w: &mut ScriptWriter,
    source: &impl SettingSource,
    node_type: &str,
    var: &str,
    state: &mut TreeState,
    config: &ExportConfig,
) -> Result<(), ExportError> {
    let Some(entries) = config.settings.get(node_type) else {
        tracing::debug!("No settings table entry for {node_type}");
        return Ok(());
    };

    for (attr, kind) in entries {
        match (kind, source.setting(attr)) {
            (SettingKind::ColorRamp, None) => {
                return Err(ExportError::MissingColorRamp {
                    node: var.to_string(),
                    attribute: attr.clone(),
                })
            }
            (SettingKind::CurveMapping, None) => {
                return Err(ExportError::MissingCurveMapping {
                    node: var.to_string(),
                    attribute: attr.clone(),
                })
            }
            (_, None) => {
                tracing::warn!("{var}.{attr} not set, skipping");
            }
            (kind, Some(value)) => emit_setting(w, var, attr, *kind, value, state, config)?,
        }
    }
    Ok(())
}

fn emit_setting(
    w: &mut ScriptWriter,
    var: &str,
    attr: &str,
    kind: SettingKind,
    value: &SettingValue,
    state: &mut TreeState,
    config: &ExportConfig,
) -> Result<(), ExportError> {
    let target = format!("{var}.{attr}");
    let literal = match (kind, value) {
        (SettingKind::Enum, SettingValue::Enum(v)) => Some(py_enum(v)),
        (SettingKind::EnumSet, SettingValue::EnumSet(vs)) => {
            if vs.is_empty() {
                tracing::warn!("{target} is an empty enum set, skipping");
                None
            } else {
                Some(py_enum_set(vs))
            }
        }
        (SettingKind::String, SettingValue::String(v)) => Some(py_str(v)),
        (SettingKind::Bool, SettingValue::Bool(v)) => Some(py_bool(*v)),
        (SettingKind::Int, SettingValue::Int(v)) => Some(py_int(*v)),
        (SettingKind::Float, SettingValue::Float(v)) => Some(py_float(*v)),
        (SettingKind::Vec1, SettingValue::Vec1(v)) => Some(py_vec1(*v)),
        (SettingKind::Vec2, SettingValue::Vec2(v)) => Some(py_vec2(*v)),
        (SettingKind::Vec3, SettingValue::Vec3(v)) => Some(py_vec3(*v)),
        (SettingKind::Vec4, SettingValue::Vec4(v)) => Some(py_vec4(*v)),
        (SettingKind::Color, SettingValue::Color(v)) => Some(py_color(*v)),
        (SettingKind::ColorRamp, SettingValue::ColorRamp(ramp)) => {
            emit_color_ramp(w, var, &target, ramp, state);
            None
        }
        (SettingKind::CurveMapping, SettingValue::CurveMapping(mapping)) => {
            emit_curve_mapping(w, var, &target, mapping, state);
            None
        }
        (SettingKind::Image, SettingValue::Image(img)) => {
            match &config.output_dir {
                Some(dir) => {
                    let filename = export_image(img, dir)?;
                    emit_image_loader(w, &mut state.names, &target, img, &filename);
                }
                None => tracing::warn!("{target}: no output directory, image skipped"),
            }
            None
        }
        (SettingKind::ImageUser, SettingValue::ImageUser(user)) => {
            w.line(&format!("{target}.frame_current = {}", py_int(user.frame_current)));
            w.line(&format!("{target}.frame_duration = {}", py_int(user.frame_duration)));
            w.line(&format!("{target}.frame_start = {}", py_int(user.frame_start)));
            w.line(&format!("{target}.frame_offset = {}", py_int(user.frame_offset)));
            w.line(&format!("{target}.use_cyclic = {}", py_bool(user.use_cyclic)));
            w.line(&format!("{target}.use_auto_refresh = {}", py_bool(user.use_auto_refresh)));
            None
        }
        (SettingKind::Material, SettingValue::Material(name)) => {
            emit_registry_lookup(w, &target, "materials", name);
            None
        }
        (SettingKind::Object, SettingValue::Object(name)) => {
            emit_registry_lookup(w, &target, "objects", name);
            None
        }
        (kind, _) => {
            tracing::warn!("{target} does not hold a {kind:?} value, skipping");
            None
        }
    };

    if let Some(literal) = literal {
        w.line(&format!("{target} = {literal}"));
    }
    Ok(())
}

/// Emit a guarded lookup against one of the host's global asset registries
///
/// Only emitted for a non-empty name; the guard keeps the script loadable
/// when the referenced asset is missing from the target file.
fn emit_registry_lookup(w: &mut ScriptWriter, target: &str, registry: &str, name: &str) {
    if name.is_empty() {
        tracing::debug!("{target}: dangling {registry} reference, skipping");
        return;
    }
    w.line(&format!("if {} in bpy.data.{registry}:", py_str(name)));
    w.indent();
    w.line(&format!("{target} = bpy.data.{registry}[{}]", py_str(name)));
    w.dedent();
}

/// Emit a color ramp's settings and elements
///
/// A fresh ramp owns default elements; the script removes the first and
/// reuses the remaining slot for element 0 (removing the last element is
/// invalid in the host), then inserts the rest by position.
fn emit_color_ramp(
    w: &mut ScriptWriter,
    var: &str,
    target: &str,
    ramp: &ColorRamp,
    state: &mut TreeState,
) {
    w.line(&format!("{target}.color_mode = {}", py_enum(ramp.color_mode.as_str())));
    w.line(&format!(
        "{target}.hue_interpolation = {}",
        py_enum(ramp.hue_interpolation.as_str())
    ));
    w.line(&format!(
        "{target}.interpolation = {}",
        py_enum(ramp.interpolation.as_str())
    ));
    if ramp.elements.is_empty() {
        tracing::warn!("{target} has no elements");
        return;
    }

    w.line("# initialize color ramp elements");
    w.line(&format!("{target}.elements.remove({target}.elements[0])"));
    for (i, element) in ramp.elements.iter().enumerate() {
        let el_var = state.names.allocate(&format!("{var}_cre_{i}"));
        if i == 0 {
            w.line(&format!("{el_var} = {target}.elements[0]"));
            w.line(&format!("{el_var}.position = {}", py_float(element.position)));
        } else {
            w.line(&format!(
                "{el_var} = {target}.elements.new({})",
                py_float(element.position)
            ));
        }
        w.line(&format!("{el_var}.alpha = {}", py_float(element.alpha)));
        w.line(&format!("{el_var}.color = {}", py_vec4(element.color)));
    }
}

/// Emit a curve mapping's settings, curves and points
///
/// The host guarantees two points per fresh curve and rejects fewer, so
/// points 0 and 1 reuse the existing slots; later points are inserted by
/// location. Every point's handle type is set after its location.
fn emit_curve_mapping(
    w: &mut ScriptWriter,
    var: &str,
    target: &str,
    mapping: &CurveMapping,
    state: &mut TreeState,
) {
    w.line(&format!("{target}.extend = {}", py_enum(mapping.extend.as_str())));
    w.line(&format!("{target}.tone = {}", py_enum(mapping.tone.as_str())));
    w.line(&format!("{target}.black_level = {}", py_vec3(mapping.black_level)));
    w.line(&format!("{target}.white_level = {}", py_vec3(mapping.white_level)));
    w.line(&format!("{target}.clip_min_x = {}", py_float(mapping.clip_min_x)));
    w.line(&format!("{target}.clip_min_y = {}", py_float(mapping.clip_min_y)));
    w.line(&format!("{target}.clip_max_x = {}", py_float(mapping.clip_max_x)));
    w.line(&format!("{target}.clip_max_y = {}", py_float(mapping.clip_max_y)));
    w.line(&format!("{target}.use_clip = {}", py_bool(mapping.use_clip)));

    for (ci, curve) in mapping.curves.iter().enumerate() {
        w.line(&format!("# curve {ci}"));
        let curve_var = state.names.allocate(&format!("{var}_curve_{ci}"));
        w.line(&format!("{curve_var} = {target}.curves[{ci}]"));
        for (pi, point) in curve.points.iter().enumerate() {
            let pt_var = state.names.allocate(&format!("{curve_var}_pt_{pi}"));
            let [x, y] = point.location;
            if pi < 2 {
                w.line(&format!("{pt_var} = {curve_var}.points[{pi}]"));
                w.line(&format!("{pt_var}.location = {}", py_vec2(point.location)));
            } else {
                w.line(&format!(
                    "{pt_var} = {curve_var}.points.new({}, {})",
                    py_float(x),
                    py_float(y)
                ));
            }
            w.line(&format!(
                "{pt_var}.handle_type = {}",
                py_enum(point.handle_type.as_str())
            ));
        }
    }
}

/// Emit hide flags for hidden sockets, by positional index
fn emit_socket_visibility(w: &mut ScriptWriter, node: &Node, var: &str) {
    for (i, socket) in node.inputs.iter().enumerate() {
        if socket.hide {
            w.line(&format!("{var}.inputs[{i}].hide = True"));
        }
    }
    for (i, socket) in node.outputs.iter().enumerate() {
        if socket.hide {
            w.line(&format!("{var}.outputs[{i}].hide = True"));
        }
    }
}

/// Emit default values for unlinked input sockets
fn emit_input_defaults(
    w: &mut ScriptWriter,
    tree: &NodeTree,
    node: &Node,
    var: &str,
    state: &mut TreeState,
    config: &ExportConfig,
) -> Result<(), ExportError> {
    for (i, socket) in node.inputs.iter().enumerate() {
        if tree.is_linked(socket.id) {
            continue;
        }
        if config.omit_default_socket_types.contains(&socket.socket_type) {
            continue;
        }
        let Some(value) = &socket.default_value else { continue };

        let target = format!("{var}.inputs[{i}].default_value");
        match value {
            SocketValue::Float(v) => w.line(&format!("{target} = {}", py_float(*v))),
            SocketValue::Int(v) => w.line(&format!("{target} = {}", py_int(*v))),
            SocketValue::Bool(v) => w.line(&format!("{target} = {}", py_bool(*v))),
            SocketValue::Vector(v) => w.line(&format!("{target} = {}", py_vec3(*v))),
            SocketValue::Color(v) => w.line(&format!("{target} = {}", py_vec4(*v))),
            SocketValue::String(v) => w.line(&format!("{target} = {}", py_str(v))),
            SocketValue::Image(img) => match &config.output_dir {
                Some(dir) => {
                    let filename = export_image(img, dir)?;
                    emit_image_loader(w, &mut state.names, &target, img, &filename);
                }
                None => tracing::warn!("{target}: no output directory, image skipped"),
            },
            SocketValue::Object(name) => emit_registry_lookup(w, &target, "objects", name),
            SocketValue::Material(name) => emit_registry_lookup(w, &target, "materials", name),
            SocketValue::Collection(name) => emit_registry_lookup(w, &target, "collections", name),
            SocketValue::Texture(name) => emit_registry_lookup(w, &target, "textures", name),
        }
    }
    Ok(())
}

/// Emit output defaults for the node types that carry one
fn emit_output_defaults(w: &mut ScriptWriter, node: &Node, var: &str) {
    if !OUTPUT_DEFAULT_TYPES.contains(&node.node_type.as_str()) {
        return;
    }
    for (i, socket) in node.outputs.iter().enumerate() {
        let Some(value) = &socket.default_value else { continue };
        let target = format!("{var}.outputs[{i}].default_value");
        match value {
            SocketValue::Float(v) => w.line(&format!("{target} = {}", py_float(*v))),
            SocketValue::Color(v) => w.line(&format!("{target} = {}", py_vec4(*v))),
            SocketValue::Vector(v) => w.line(&format!("{target} = {}", py_vec3(*v))),
            other => tracing::warn!("{target}: unexpected output default {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit_tree::{emit_tree_function, ScriptWriter};
    use crate::sanitize::NameRegistry;
    use nodescribe_graph::{
        Curve, CurvePoint, HandleType, Image, ImageFileFormat, RampElement, Socket, SocketType,
    };

    fn emit(tree: &NodeTree, config: &ExportConfig) -> Result<String, ExportError> {
        let mut w = ScriptWriter::new();
        let mut names = NameRegistry::new();
        emit_tree_function(&mut w, tree, config, &mut names)?;
        Ok(w.into_string())
    }

    fn ramp_tree(elements: Vec<RampElement>) -> NodeTree {
        let mut tree = NodeTree::new("Ramp", "ShaderNodeTree");
        let mut node = Node::new("Color Ramp", "ShaderNodeValToRGB");
        let mut ramp = ColorRamp::default();
        ramp.elements = elements;
        node.set("color_ramp", SettingValue::ColorRamp(ramp));
        tree.add_node(node);
        tree
    }

    #[test]
    fn test_identity_statements() {
        let mut tree = NodeTree::new("Identity", "ShaderNodeTree");
        let mut node = Node::new("Math", "ShaderNodeMath");
        node.label = "Add Them".to_string();
        node.use_custom_color = true;
        node.color = [0.5, 0.25, 0.0];
        node.mute = true;
        node.set("operation", SettingValue::Enum("ADD".to_string()));
        node.set("use_clamp", SettingValue::Bool(true));
        tree.add_node(node);

        let text = emit(&tree, &ExportConfig::default()).unwrap();
        assert!(text.contains("math = identity.nodes.new(\"ShaderNodeMath\")"));
        assert!(text.contains("math.label = \"Add Them\""));
        assert!(text.contains("math.use_custom_color = True"));
        assert!(text.contains("math.color = (0.5, 0.25, 0.0)"));
        assert!(text.contains("math.mute = True"));
        assert!(text.contains("math.operation = 'ADD'"));
        assert!(text.contains("math.use_clamp = True"));
    }

    #[test]
    fn test_absent_setting_is_skipped_not_fatal() {
        let mut tree = NodeTree::new("Sparse", "ShaderNodeTree");
        // Table lists operation and use_clamp; the bag has neither
        tree.add_node(Node::new("Math", "ShaderNodeMath"));
        let text = emit(&tree, &ExportConfig::default()).unwrap();
        assert!(!text.contains("math.operation"));
        assert!(!text.contains("math.use_clamp"));
    }

    #[test]
    fn test_missing_ramp_is_fatal() {
        let mut tree = NodeTree::new("Broken", "ShaderNodeTree");
        tree.add_node(Node::new("Color Ramp", "ShaderNodeValToRGB"));
        let err = emit(&tree, &ExportConfig::default()).unwrap_err();
        assert!(matches!(err, ExportError::MissingColorRamp { .. }));
    }

    #[test]
    fn test_ramp_reuses_slot_zero_and_inserts_rest() {
        let elements = vec![
            RampElement { position: 0.0, alpha: 1.0, color: [0.0, 0.0, 0.0, 1.0] },
            RampElement { position: 0.3, alpha: 1.0, color: [0.5, 0.5, 0.5, 1.0] },
            RampElement { position: 1.0, alpha: 1.0, color: [1.0, 1.0, 1.0, 1.0] },
        ];
        let text = emit(&ramp_tree(elements), &ExportConfig::default()).unwrap();

        assert_eq!(
            text.matches("color_ramp.color_ramp.elements.remove").count(),
            1
        );
        assert!(text.contains("color_ramp_cre_0 = color_ramp.color_ramp.elements[0]"));
        assert!(text.contains("color_ramp_cre_0.position = 0.0"));
        // Exactly two inserts, in position order
        assert!(text.contains("color_ramp_cre_1 = color_ramp.color_ramp.elements.new(0.3)"));
        assert!(text.contains("color_ramp_cre_2 = color_ramp.color_ramp.elements.new(1.0)"));
        assert_eq!(text.matches(".elements.new(").count(), 2);
    }

    #[test]
    fn test_curve_mapping_protocol() {
        let mut tree = NodeTree::new("Curves", "ShaderNodeTree");
        let mut node = Node::new("Float Curve", "ShaderNodeFloatCurve");
        let mut mapping = CurveMapping::default();
        mapping.curves = vec![Curve {
            points: vec![
                CurvePoint::new(0.0, 0.0),
                CurvePoint {
                    location: [0.5, 0.25],
                    handle_type: HandleType::Vector,
                },
                CurvePoint::new(1.0, 1.0),
            ],
        }];
        node.set("mapping", SettingValue::CurveMapping(mapping));
        tree.add_node(node);

        let text = emit(&tree, &ExportConfig::default()).unwrap();
        assert!(text.contains("float_curve.mapping.extend = 'HORIZONTAL'"));
        assert!(text.contains("float_curve.mapping.use_clip = True"));
        assert!(text.contains("float_curve_curve_0 = float_curve.mapping.curves[0]"));
        // First two points reuse slots, the third is inserted
        assert!(text.contains("float_curve_curve_0_pt_0 = float_curve_curve_0.points[0]"));
        assert!(text.contains("float_curve_curve_0_pt_1 = float_curve_curve_0.points[1]"));
        assert!(text.contains("float_curve_curve_0_pt_2 = float_curve_curve_0.points.new(1.0, 1.0)"));
        assert!(text.contains("float_curve_curve_0_pt_1.handle_type = 'VECTOR'"));
    }

    #[test]
    fn test_hidden_sockets_emit_hide_flags() {
        let mut tree = NodeTree::new("Hide", "ShaderNodeTree");
        let mut node = Node::new("Mix", "ShaderNodeMix");
        node.add_input(Socket::new("A", SocketType::Float));
        node.add_input(Socket::new("B", SocketType::Float).hidden());
        node.add_output(Socket::new("Result", SocketType::Float).hidden());
        tree.add_node(node);

        let text = emit(&tree, &ExportConfig::default()).unwrap();
        assert!(!text.contains("mix.inputs[0].hide"));
        assert!(text.contains("mix.inputs[1].hide = True"));
        assert!(text.contains("mix.outputs[0].hide = True"));
    }

    #[test]
    fn test_reroute_and_excluded_types_get_no_defaults() {
        let mut tree = NodeTree::new("Skips", "ShaderNodeTree");

        let mut reroute = Node::new("Reroute", "NodeReroute");
        reroute.add_input(
            Socket::new("Input", SocketType::Float).with_default(SocketValue::Float(2.0)),
        );
        tree.add_node(reroute);

        let mut shader = Node::new("Mix Shader", "ShaderNodeMixShader");
        shader.add_input(Socket::new("Shader", SocketType::Shader));
        shader.add_input(
            Socket::new("Fac", SocketType::Float).with_default(SocketValue::Float(0.5)),
        );
        tree.add_node(shader);

        let text = emit(&tree, &ExportConfig::default()).unwrap();
        assert!(!text.contains("reroute.inputs[0].default_value"));
        assert!(!text.contains("mix_shader.inputs[0].default_value"));
        assert!(text.contains("mix_shader.inputs[1].default_value = 0.5"));
    }

    #[test]
    fn test_asset_reference_defaults_are_guarded() {
        let mut tree = NodeTree::new("Assets", "GeometryNodeTree");
        let mut node = Node::new("Object Info", "GeometryNodeObjectInfo");
        node.add_input(
            Socket::new("Object", SocketType::Object)
                .with_default(SocketValue::Object("Cube".to_string())),
        );
        node.add_input(
            Socket::new("Material", SocketType::Material)
                .with_default(SocketValue::Material(String::new())),
        );
        tree.add_node(node);

        let text = emit(&tree, &ExportConfig::default()).unwrap();
        assert!(text.contains("if \"Cube\" in bpy.data.objects:"));
        assert!(text.contains("\t\tobject_info.inputs[0].default_value = bpy.data.objects[\"Cube\"]"));
        // Empty reference names emit nothing
        assert!(!text.contains("bpy.data.materials"));
    }

    #[test]
    fn test_image_default_exported_and_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ExportConfig::default();
        config.output_dir = Some(dir.path().to_path_buf());

        let mut tree = NodeTree::new("Tex", "ShaderNodeTree");
        let mut node = Node::new("Image Texture", "ShaderNodeTexImage");
        node.set("extension", SettingValue::Enum("REPEAT".to_string()));
        node.set("interpolation", SettingValue::Enum("Linear".to_string()));
        node.set("projection", SettingValue::Enum("FLAT".to_string()));
        node.set("projection_blend", SettingValue::Float(0.0));
        node.set(
            "image",
            SettingValue::Image(Image {
                name: "brick.tga".to_string(),
                file_format: ImageFileFormat::Png,
                width: 2,
                height: 2,
                pixels: vec![128; 16],
                source: "FILE".to_string(),
                colorspace: "sRGB".to_string(),
                alpha_mode: "STRAIGHT".to_string(),
            }),
        );
        tree.add_node(node);

        let text = emit(&tree, &config).unwrap();
        assert!(dir.path().join("imgs").join("brick.png").exists());
        assert!(text.contains("image_texture.image = bpy.data.images.load(image_path, check_existing=True)"));
        assert!(text.contains("image_texture.image.colorspace_settings.name = 'sRGB'"));
    }

    #[test]
    fn test_image_skipped_without_output_dir() {
        let mut tree = NodeTree::new("Tex", "ShaderNodeTree");
        let mut node = Node::new("Image Texture", "ShaderNodeTexImage");
        node.set(
            "image",
            SettingValue::Image(Image {
                name: "brick".to_string(),
                file_format: ImageFileFormat::Png,
                width: 1,
                height: 1,
                pixels: vec![0; 4],
                source: "FILE".to_string(),
                colorspace: "sRGB".to_string(),
                alpha_mode: "STRAIGHT".to_string(),
            }),
        );
        tree.add_node(node);

        let text = emit(&tree, &ExportConfig::default()).unwrap();
        assert!(!text.contains("bpy.data.images.load"));
    }
}
