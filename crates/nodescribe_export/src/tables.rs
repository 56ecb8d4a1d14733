// SPDX-License-Identifier: MIT OR Apache-2.0
//! Injected export configuration: per-node-type settings tables and the
//! socket-type exclusion set.
//!
//! The engine never derives these from the model; the caller supplies them
//! (the host's node types change faster than the exporter does). A builtin
//! table for the common shader node types ships here for the CLI and tests.

use indexmap::IndexMap;
use nodescribe_graph::SocketType;
use std::collections::HashSet;
use std::path::PathBuf;

/// How a settings-bag attribute is encoded into the script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Enum identifier
    Enum,
    /// Set of enum identifiers
    EnumSet,
    /// String
    String,
    /// Boolean
    Bool,
    /// Integer
    Int,
    /// Floating point
    Float,
    /// 1D vector
    Vec1,
    /// 2D vector
    Vec2,
    /// 3D vector
    Vec3,
    /// 4D vector
    Vec4,
    /// RGB color
    Color,
    /// Color ramp sub-object (absence is fatal)
    ColorRamp,
    /// Curve mapping sub-object (absence is fatal)
    CurveMapping,
    /// Embedded image asset, exported to the asset directory
    Image,
    /// Image playback state
    ImageUser,
    /// Material reference, emitted as a guarded registry lookup
    Material,
    /// Object reference, emitted as a guarded registry lookup
    Object,
}

/// Ordered settings table: node type tag → (attribute, kind) list
pub type SettingsTable = IndexMap<String, Vec<(String, SettingKind)>>;

/// Caller-supplied configuration for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Per-node-type settings table
    pub settings: SettingsTable,
    /// Socket types that never receive emitted input defaults
    pub omit_default_socket_types: HashSet<SocketType>,
    /// Directory the script (and its asset sub-directory) is written to;
    /// image handling is skipped when absent
    pub output_dir: Option<PathBuf>,
    /// Whether identifiers are forced lowercase
    pub lowercase_identifiers: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            settings: builtin_shader_table(),
            omit_default_socket_types: default_omitted_socket_types(),
            output_dir: None,
            lowercase_identifiers: true,
        }
    }
}

/// Socket types with no meaningful literal default
pub fn default_omitted_socket_types() -> HashSet<SocketType> {
    HashSet::from([SocketType::Geometry, SocketType::Shader, SocketType::Virtual])
}

/// Settings table for the common shader node types
pub fn builtin_shader_table() -> SettingsTable {
    use SettingKind as K;

    let mut table = SettingsTable::new();
    let mut add = |node_type: &str, entries: &[(&str, SettingKind)]| {
        table.insert(
            node_type.to_string(),
            entries.iter().map(|(a, k)| ((*a).to_string(), *k)).collect(),
        );
    };

    add(
        "ShaderNodeTexImage",
        &[
            ("extension", K::Enum),
            ("interpolation", K::Enum),
            ("projection", K::Enum),
            ("projection_blend", K::Float),
            ("image", K::Image),
            ("image_user", K::ImageUser),
        ],
    );
    add(
        "ShaderNodeTexEnvironment",
        &[
            ("interpolation", K::Enum),
            ("projection", K::Enum),
            ("image", K::Image),
            ("image_user", K::ImageUser),
        ],
    );
    add("ShaderNodeValToRGB", &[("color_ramp", K::ColorRamp)]);
    add("ShaderNodeRGBCurve", &[("mapping", K::CurveMapping)]);
    add("ShaderNodeFloatCurve", &[("mapping", K::CurveMapping)]);
    add("ShaderNodeVectorCurve", &[("mapping", K::CurveMapping)]);
    add(
        "ShaderNodeMath",
        &[("operation", K::Enum), ("use_clamp", K::Bool)],
    );
    add("ShaderNodeVectorMath", &[("operation", K::Enum)]);
    add(
        "ShaderNodeMix",
        &[
            ("blend_type", K::Enum),
            ("clamp_factor", K::Bool),
            ("clamp_result", K::Bool),
            ("data_type", K::Enum),
            ("factor_mode", K::Enum),
        ],
    );
    add("ShaderNodeMapping", &[("vector_type", K::Enum)]);
    add(
        "ShaderNodeTexNoise",
        &[
            ("noise_dimensions", K::Enum),
            ("noise_type", K::Enum),
            ("normalize", K::Bool),
        ],
    );
    add("ShaderNodeTexGradient", &[("gradient_type", K::Enum)]);
    add(
        "ShaderNodeTexVoronoi",
        &[
            ("voronoi_dimensions", K::Enum),
            ("distance", K::Enum),
            ("feature", K::Enum),
            ("normalize", K::Bool),
        ],
    );
    add(
        "ShaderNodeAttribute",
        &[("attribute_name", K::String), ("attribute_type", K::Enum)],
    );
    add(
        "ShaderNodeBsdfPrincipled",
        &[("distribution", K::Enum), ("subsurface_method", K::Enum)],
    );
    add("ShaderNodeDisplacement", &[("space", K::Enum)]);
    add(
        "ShaderNodeUVMap",
        &[("from_instancer", K::Bool), ("uv_map", K::String)],
    );

    table
}
