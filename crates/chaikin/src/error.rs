//! Error types for mesh construction and subdivision.

use thiserror::Error;

use crate::types::{EdgeId, EdgeType, NodeId};

/// Failure classes. Every failure aborts the operation in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller handed in something unusable
    MalformedInput,
    /// The node/edge/group graph does not have the expected shape
    InconsistentTopology,
    /// Self-loops and duplicate edges
    DegenerateConnection,
}

/// Errors that can occur while building or subdividing a polyhedron
#[derive(Debug, Error)]
pub enum ChaikinError {
    #[error("Unknown edge type: {0:?}")]
    UnknownEdgeType(String),
    #[error("Unknown edge filter: {0:?}")]
    UnknownEdgeFilter(String),
    #[error("Face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    VertexIndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
    #[error("Face {face} has {len} vertices (at least 3 required)")]
    FaceTooSmall { face: usize, len: usize },
    #[error("Chaikin coefficient must be a finite number greater than 2, got {0}")]
    InvalidCoefficient(f64),

    #[error("Node {0:?} does not exist")]
    UnknownNode(NodeId),
    #[error("Edge {0:?} does not exist")]
    UnknownEdge(EdgeId),
    #[error("Node {node:?} is not an endpoint of edge {edge:?}")]
    NotAnEndpoint { edge: EdgeId, node: NodeId },
    #[error("Group cycle is open: no unvisited main neighbour of {node:?} after {visited} of {size} nodes")]
    OpenCycle {
        node: NodeId,
        visited: usize,
        size: usize,
    },
    #[error("Group cycle does not close: {last:?} is not main-connected to {first:?}")]
    UnclosedCycle { first: NodeId, last: NodeId },
    #[error("Group has {0} nodes (at least 3 required)")]
    DegenerateGroup(usize),
    #[error("Group must be ordered before this operation")]
    GroupNotOrdered,
    #[error("No sub-nodes were generated for node {0:?}")]
    MissingSubNodes(NodeId),
    #[error("Mesh validation failed: {0}")]
    Validation(String),

    #[error("Cannot connect node {0:?} to itself")]
    SelfConnection(NodeId),
    #[error("Nodes {a:?} and {b:?} are already connected by a {edge_type} edge")]
    DuplicateConnection {
        a: NodeId,
        b: NodeId,
        edge_type: EdgeType,
    },
}

impl ChaikinError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownEdgeType(_)
            | Self::UnknownEdgeFilter(_)
            | Self::VertexIndexOutOfRange { .. }
            | Self::FaceTooSmall { .. }
            | Self::InvalidCoefficient(_) => ErrorKind::MalformedInput,
            Self::UnknownNode(_)
            | Self::UnknownEdge(_)
            | Self::NotAnEndpoint { .. }
            | Self::OpenCycle { .. }
            | Self::UnclosedCycle { .. }
            | Self::DegenerateGroup(_)
            | Self::GroupNotOrdered
            | Self::MissingSubNodes(_)
            | Self::Validation(_) => ErrorKind::InconsistentTopology,
            Self::SelfConnection(_) | Self::DuplicateConnection { .. } => {
                ErrorKind::DegenerateConnection
            }
        }
    }
}

/// Result type for polyhedron operations.
pub type ChaikinResult<T> = std::result::Result<T, ChaikinError>;
