// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for the export pipeline.

use nodescribe_graph::{NodeId, SocketId};

/// Error raised during script emission
///
/// Absent ordinary settings are not errors (they are logged and skipped);
/// everything here aborts the enclosing tree's emission. A failure partway
/// through leaves any already-written script text behind — the caller is
/// expected to discard the artifact.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A settings-table entry names a color ramp the node does not carry
    #[error("node '{node}': color ramp setting '{attribute}' is absent")]
    MissingColorRamp {
        /// Emitted variable name of the offending node
        node: String,
        /// Settings attribute that was expected to hold the ramp
        attribute: String,
    },

    /// A settings-table entry names a curve mapping the node does not carry
    #[error("node '{node}': curve mapping setting '{attribute}' is absent")]
    MissingCurveMapping {
        /// Emitted variable name of the offending node
        node: String,
        /// Settings attribute that was expected to hold the mapping
        attribute: String,
    },

    /// A link endpoint references a node that was never emitted
    #[error("link references a node missing from the tree: {0:?}")]
    UnknownNode(NodeId),

    /// A link endpoint references a socket its node does not own
    #[error("link references a socket missing from its node: {0:?}")]
    UnknownSocket(SocketId),

    /// Script or asset file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Asset pixels could not be encoded
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}
