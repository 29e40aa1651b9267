//! Chaikin3D - corner-cutting subdivision of polyhedral meshes
//!
//! Chaikin's curve algorithm cuts every corner of a polygon; this crate does
//! the same to every vertex of a polyhedron, smoothing it a little more with
//! each generation.
//!
//! - [`types`] - Node, edge and identifier types
//! - [`graph::MeshGraph`] - Arena of nodes and typed edges
//! - [`group::Group`] - Faces as ordered node cycles with their triangulation
//! - [`polyhedron::Polyhedron`] - Construction, the Chaikin3D transform,
//!   validation and render views
//! - [`identity`] - Identity keyed sets and maps
//! - [`geometry`] - Small vector helpers
//!
//! Run configuration lives in the `chaikin-config` crate and is re-exported
//! here.

pub mod error;
pub mod geometry;
pub mod graph;
pub mod group;
pub mod identity;
pub mod polyhedron;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use chaikin_config::{ChaikinConfig, ConfigError, OrderEdges, Verbosity};
pub use error::{ChaikinError, ChaikinResult, ErrorKind};
pub use graph::MeshGraph;
pub use group::Group;
pub use identity::{IdMap, IdSet};
pub use polyhedron::{Polyhedron, StandardMesh, TriangleBuffers, TruncationRatios, VERBOSE_STEP};
pub use types::{ArenaId, Edge, EdgeFilter, EdgeId, EdgeType, GroupId, Node, NodeId};
