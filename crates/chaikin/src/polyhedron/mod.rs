//! Polyhedral meshes and the Chaikin3D transform.
//!
//! A [`Polyhedron`] owns the node/edge arena and the set of faces built on
//! top of it. Every group is ordered and triangulated by the time a
//! polyhedron is handed out.

mod chaikin;
mod construction;
mod render;
mod validation;

use std::fmt;

pub use chaikin::{TruncationRatios, VERBOSE_STEP};
pub use construction::StandardMesh;
pub use render::TriangleBuffers;

use crate::error::ChaikinResult;
use crate::graph::MeshGraph;
use crate::group::Group;
use crate::types::{ArenaId, Edge, EdgeFilter, GroupId, Node, NodeId};

/// A mesh of nodes, typed edges and cyclic faces
#[derive(Debug, Clone)]
pub struct Polyhedron {
    pub(crate) graph: MeshGraph,
    pub(crate) groups: Vec<Group>,
    /// Built from user input rather than by a transform
    pub(crate) initial_mesh: bool,
}

impl Polyhedron {
    /// Assemble a polyhedron, ordering and triangulating every group
    pub(crate) fn new(graph: MeshGraph, mut groups: Vec<Group>, initial_mesh: bool) -> ChaikinResult<Self> {
        for group in &mut groups {
            group.order(&graph)?;
            group.calc_triangles(&graph)?;
        }
        tracing::debug!(
            "Polyhedron: {} nodes, {} edges, {} groups (initial: {})",
            graph.node_count(),
            graph.edge_count(),
            groups.len(),
            initial_mesh
        );
        Ok(Self {
            graph,
            groups,
            initial_mesh,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn graph(&self) -> &MeshGraph {
        &self.graph
    }

    pub fn nodes(&self) -> &[Node] {
        self.graph.nodes()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.graph.node(id)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id.index())
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn edge_count(&self, filter: EdgeFilter) -> usize {
        self.edges(filter).count()
    }

    pub fn is_initial_mesh(&self) -> bool {
        self.initial_mesh
    }

    /// Edges matching `filter`, each exactly once
    pub fn edges(&self, filter: EdgeFilter) -> impl Iterator<Item = &Edge> + '_ {
        self.graph
            .edges()
            .iter()
            .filter(move |edge| filter.matches(edge.edge_type))
    }
}

impl fmt::Display for Polyhedron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Polyhedron ({} nodes, {} main edges, {} graphical edges, {} groups)",
            self.node_count(),
            self.edge_count(EdgeFilter::Main),
            self.edge_count(EdgeFilter::Graphical),
            self.group_count()
        )?;
        for node in self.nodes() {
            let p = node.position;
            writeln!(f, "* {:?} ({:.4}, {:.4}, {:.4})", node.id, p.x, p.y, p.z)?;
        }
        Ok(())
    }
}
