// SPDX-License-Identifier: MIT OR Apache-2.0
//! Serialization engine for nodescribe.
//!
//! Turns an in-memory [`nodescribe_graph::NodeTree`] into a standalone
//! Python add-on that rebuilds the same tree when run inside the host.
//!
//! ## Pipeline
//!
//! [`script`] (assembler) → [`emit_tree`] (per tree, recursing into nested
//! group trees) → [`emit_node`] (per node) → [`encode`] / [`assets`] (per
//! attribute or asset).
//!
//! The engine is single-threaded and deterministic: nodes are emitted in
//! tree order, identifiers come from a per-tree [`sanitize::NameRegistry`],
//! and link endpoints are resolved to positional socket indices by ID scan
//! (never by socket name, which the host does not keep unique).
//!
//! ## Known limitation
//!
//! String literals are emitted without escaping embedded quote characters;
//! a display name containing `"` produces a syntactically broken script.
//! Pinned by a test in [`encode`]; fixing it is a deliberate behavior change.

pub mod assets;
pub mod emit_node;
pub mod emit_tree;
pub mod encode;
pub mod error;
pub mod sanitize;
pub mod script;
pub mod tables;

pub use emit_node::SettingSource;
pub use emit_tree::{emit_tree_function, ScriptWriter};
pub use error::ExportError;
pub use sanitize::{sanitize_identifier, NameRegistry};
pub use script::{generate_addon, write_addon, ScriptOptions};
pub use tables::{builtin_shader_table, ExportConfig, SettingKind, SettingsTable};
