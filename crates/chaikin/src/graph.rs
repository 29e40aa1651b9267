//! Node/edge arena.
//!
//! Nodes store the ids of their incident edges, edges store the ids of their
//! two endpoints. Moving an edge endpoint is an index overwrite plus an
//! update of the two incidence lists involved.

use glam::DVec3;

use crate::error::{ChaikinError, ChaikinResult};
use crate::types::{ArenaId, Edge, EdgeFilter, EdgeId, EdgeType, Node, NodeId};

/// Arena of nodes and edges shared by the groups of a polyhedron
#[derive(Debug, Clone, Default)]
pub struct MeshGraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
}

impl MeshGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn node_ref(&self, id: NodeId) -> ChaikinResult<&Node> {
        self.node(id).ok_or(ChaikinError::UnknownNode(id))
    }

    fn edge_ref(&self, id: EdgeId) -> ChaikinResult<&Edge> {
        self.edge(id).ok_or(ChaikinError::UnknownEdge(id))
    }

    pub fn position(&self, id: NodeId) -> ChaikinResult<DVec3> {
        Ok(self.node_ref(id)?.position)
    }

    // ========================================================================
    // Topology Queries
    // ========================================================================

    /// Incident edges of `node` matching `filter`, in incidence order
    pub fn incident_edges(&self, node: NodeId, filter: EdgeFilter) -> ChaikinResult<Vec<EdgeId>> {
        Ok(self
            .node_ref(node)?
            .edges
            .iter()
            .copied()
            .filter(|&e| {
                self.edge(e)
                    .is_some_and(|edge| filter.matches(edge.edge_type))
            })
            .collect())
    }

    /// Nodes reachable from `node` across an edge matching `filter`
    pub fn neighbours(
        &self,
        node: NodeId,
        filter: EdgeFilter,
    ) -> ChaikinResult<impl Iterator<Item = NodeId> + '_> {
        let edges = &self.node_ref(node)?.edges;
        Ok(edges.iter().filter_map(move |&e| {
            let edge = self.edge(e)?;
            if filter.matches(edge.edge_type) {
                edge.partner(node).ok()
            } else {
                None
            }
        }))
    }

    /// Partner of `node` across `edge`
    pub fn partner(&self, edge: EdgeId, node: NodeId) -> ChaikinResult<NodeId> {
        self.edge_ref(edge)?.partner(node)
    }

    /// First edge matching `filter` between `a` and `b`, found by scanning the
    /// incidence list of `a`
    pub fn find_edge(&self, a: NodeId, b: NodeId, filter: EdgeFilter) -> Option<EdgeId> {
        let node = self.node(a)?;
        node.edges.iter().copied().find(|&e| {
            self.edge(e)
                .is_some_and(|edge| filter.matches(edge.edge_type) && edge.joins(a, b))
        })
    }

    pub fn are_connected(&self, a: NodeId, b: NodeId, filter: EdgeFilter) -> bool {
        self.find_edge(a, b, filter).is_some()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add an isolated node
    pub fn add_node(&mut self, position: DVec3) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node::new(id, position));
        id
    }

    /// Create an edge of `edge_type` between `a` and `b` and register it with
    /// both endpoints.
    pub fn connect(&mut self, a: NodeId, b: NodeId, edge_type: EdgeType) -> ChaikinResult<EdgeId> {
        self.node_ref(a)?;
        self.node_ref(b)?;
        if a == b {
            return Err(ChaikinError::SelfConnection(a));
        }
        if self.are_connected(a, b, edge_type.into()) {
            return Err(ChaikinError::DuplicateConnection { a, b, edge_type });
        }

        let id = EdgeId::from_index(self.edges.len());
        self.edges.push(Edge::new(id, a, b, edge_type));
        self.nodes[a.index()].edges.push(id);
        self.nodes[b.index()].edges.push(id);
        Ok(id)
    }

    /// Move the `old` endpoint of `edge` to `new`, keeping the edge id.
    pub fn update_node(&mut self, edge: EdgeId, old: NodeId, new: NodeId) -> ChaikinResult<()> {
        self.node_ref(new)?;
        let current = self.edge_ref(edge)?;
        let partner = current.partner(old)?;
        if partner == new {
            return Err(ChaikinError::SelfConnection(new));
        }
        let slot = usize::from(current.nodes[0] != old);

        self.edges[edge.index()].nodes[slot] = new;
        self.nodes[old.index()].edges.retain(|&e| e != edge);
        self.nodes[new.index()].edges.push(edge);
        Ok(())
    }

    /// Replace the main-edge order of `node` with `fan`, keeping other edges
    /// after it in their current order. `fan` must be a permutation of the
    /// node's main edges.
    pub(crate) fn reorder_main_edges(&mut self, node: NodeId, fan: Vec<EdgeId>) -> ChaikinResult<()> {
        let main = self.incident_edges(node, EdgeFilter::Main)?;
        if main.len() != fan.len() || main.iter().any(|e| !fan.contains(e)) {
            return Err(ChaikinError::Validation(format!(
                "edge order for {node:?} is not a permutation of its main edges"
            )));
        }
        let rest = self.incident_edges(node, EdgeFilter::Graphical)?;
        let mut edges = fan;
        edges.extend(rest);
        self.nodes[node.index()].edges = edges;
        Ok(())
    }

    /// Drop every node below index `first` and renumber the rest from zero.
    ///
    /// Graphical edges touching a dropped node are discarded. A main edge
    /// touching a dropped node means the split was not clean and is an error.
    /// Surviving edges keep their relative order.
    pub(crate) fn retain_nodes_from(&mut self, first: usize) -> ChaikinResult<()> {
        let shift = |id: NodeId| NodeId::from_index(id.index() - first);

        let mut edge_map: Vec<Option<EdgeId>> = vec![None; self.edges.len()];
        let mut edges = Vec::with_capacity(self.edges.len());
        for edge in &self.edges {
            if edge.nodes.iter().any(|n| n.index() < first) {
                if edge.is_main() {
                    return Err(ChaikinError::Validation(format!(
                        "main edge {:?} still touches a dropped node ({:?})",
                        edge.id, edge.nodes
                    )));
                }
                continue;
            }
            let id = EdgeId::from_index(edges.len());
            edge_map[edge.id.index()] = Some(id);
            edges.push(Edge::new(id, shift(edge.nodes[0]), shift(edge.nodes[1]), edge.edge_type));
        }

        let mut nodes = self.nodes.split_off(first.min(self.nodes.len()));
        for node in &mut nodes {
            node.id = shift(node.id);
            node.edges = node
                .edges
                .iter()
                .filter_map(|e| edge_map[e.index()])
                .collect();
        }

        self.nodes = nodes;
        self.edges = edges;
        Ok(())
    }
}
