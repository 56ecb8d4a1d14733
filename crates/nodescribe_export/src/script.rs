// SPDX-License-Identifier: MIT OR Apache-2.0
//! Script assembler: wraps tree reconstruction functions into a loadable
//! add-on (header, operator scaffold, menu and register hooks).

use crate::emit_tree::{emit_tree_function, ScriptWriter};
use crate::error::ExportError;
use crate::sanitize::{sanitize_identifier, NameRegistry};
use crate::tables::ExportConfig;
use nodescribe_graph::NodeTree;
use std::path::Path;

/// Metadata for the generated add-on header
#[derive(Debug, Clone)]
pub struct ScriptOptions {
    /// Add-on display name
    pub name: String,
    /// Add-on author
    pub author: String,
    /// One-line description
    pub description: String,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            name: "Node Tree".to_string(),
            author: "Node Tree Exporter".to_string(),
            description: "Recreates the exported node trees".to_string(),
        }
    }
}

/// Generate the complete add-on text for the given trees
///
/// Top-level reconstruction function names share one script-level registry
/// so two trees with the same display name cannot collide.
pub fn generate_addon(
    trees: &[&NodeTree],
    config: &ExportConfig,
    options: &ScriptOptions,
) -> Result<String, ExportError> {
    let mut w = ScriptWriter::new();
    let mut names = NameRegistry::new();

    w.line("bl_info = {");
    w.indent();
    w.line(&format!("\"name\" : \"{}\",", options.name));
    w.line(&format!("\"author\" : \"{}\",", options.author));
    w.line("\"version\" : (1, 0, 0),");
    // Minimum host version must match the interface declarations, which
    // use the pre-4.0 inputs/outputs API.
    w.line("\"blender\" : (3, 0, 0),");
    w.line("\"location\" : \"Node\",");
    w.line(&format!("\"description\" : \"{}\",", options.description));
    w.line("\"category\" : \"Node\",");
    w.dedent();
    w.line("}");
    w.blank();
    w.line("import bpy");
    w.line("import mathutils");
    w.line("import os");
    w.blank();

    let mut fn_names = Vec::with_capacity(trees.len());
    for tree in trees {
        fn_names.push(emit_tree_function(&mut w, tree, config, &mut names)?);
        w.blank();
    }

    let class_name = format!(
        "NODE_OT_{}",
        sanitize_identifier(&options.name, config.lowercase_identifiers)
    );
    w.line(&format!("class {class_name}(bpy.types.Operator):"));
    w.indent();
    w.line(&format!(
        "bl_idname = \"node.{}\"",
        sanitize_identifier(&options.name, true)
    ));
    w.line(&format!("bl_label = \"{}\"", options.name));
    w.line("bl_options = {'REGISTER', 'UNDO'}");
    w.blank();
    w.line("def execute(self, context):");
    w.indent();
    for fn_name in &fn_names {
        w.line(&format!("{fn_name}()"));
    }
    w.line("return {'FINISHED'}");
    w.dedent();
    w.dedent();
    w.blank();

    w.line("def menu_func(self, context):");
    w.indent();
    w.line(&format!("self.layout.operator({class_name}.bl_idname)"));
    w.dedent();
    w.blank();

    w.line("def register():");
    w.indent();
    w.line(&format!("bpy.utils.register_class({class_name})"));
    w.line("bpy.types.NODE_MT_node.append(menu_func)");
    w.dedent();
    w.blank();

    w.line("def unregister():");
    w.indent();
    w.line(&format!("bpy.utils.unregister_class({class_name})"));
    w.line("bpy.types.NODE_MT_node.remove(menu_func)");
    w.dedent();
    w.blank();

    w.line("if __name__ == \"__main__\":");
    w.indent();
    w.line("register()");
    w.dedent();

    Ok(w.into_string())
}

/// Generate the add-on and write it to `script_path`
///
/// The configured output directory should normally be the script's parent
/// so exported assets land beside it; when `config.output_dir` is unset it
/// is derived from the path here.
pub fn write_addon(
    trees: &[&NodeTree],
    config: &ExportConfig,
    options: &ScriptOptions,
    script_path: &Path,
) -> Result<(), ExportError> {
    let config_with_dir;
    let config = match (&config.output_dir, script_path.parent()) {
        (None, Some(parent)) if !parent.as_os_str().is_empty() => {
            let mut derived = config.clone();
            derived.output_dir = Some(parent.to_path_buf());
            config_with_dir = derived;
            &config_with_dir
        }
        _ => config,
    };

    let text = generate_addon(trees, config, options)?;
    std::fs::write(script_path, text)?;
    tracing::info!("Wrote add-on to {}", script_path.display());
    Ok(())
}
