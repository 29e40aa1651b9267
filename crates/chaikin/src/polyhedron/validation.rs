//! Consistency checks for a polyhedron.
//!
//! Verifies that:
//! 1. Every edge sits at its own index and joins two distinct, existing nodes
//! 2. Edge lists and edge endpoints agree in both directions
//! 3. No two edges of the same type join the same pair of nodes
//! 4. Every group is ordered and closed by main edges
//! 5. Every node belongs to at least one group

use std::collections::HashSet;

use super::Polyhedron;
use crate::error::{ChaikinError, ChaikinResult};
use crate::identity::IdSet;
use crate::types::{ArenaId, EdgeFilter, EdgeId, NodeId};

fn invalid(message: String) -> ChaikinError {
    ChaikinError::Validation(message)
}

impl Polyhedron {
    /// Check the arena and the groups for consistency.
    ///
    /// Transforms run this on their result before returning it.
    pub fn validate(&self) -> ChaikinResult<()> {
        self.validate_edges()?;
        self.validate_incidence()?;
        self.validate_groups()
    }

    fn validate_edges(&self) -> ChaikinResult<()> {
        let node_count = self.graph.node_count();
        let mut pairs = HashSet::with_capacity(self.graph.edge_count());
        for (index, edge) in self.graph.edges().iter().enumerate() {
            if edge.id.index() != index {
                return Err(invalid(format!("edge at {index} carries id {:?}", edge.id)));
            }
            let [a, b] = edge.nodes();
            if a.index() >= node_count || b.index() >= node_count {
                return Err(invalid(format!(
                    "{:?} joins {a:?} and {b:?}, only {node_count} nodes exist",
                    edge.id
                )));
            }
            if a == b {
                return Err(invalid(format!("{:?} loops on {a:?}", edge.id)));
            }
            if !pairs.insert((a.min(b), a.max(b), edge.edge_type)) {
                return Err(invalid(format!(
                    "{:?} duplicates a {} edge between {a:?} and {b:?}",
                    edge.id, edge.edge_type
                )));
            }
        }
        Ok(())
    }

    fn validate_incidence(&self) -> ChaikinResult<()> {
        for (index, node) in self.graph.nodes().iter().enumerate() {
            if node.id.index() != index {
                return Err(invalid(format!("node at {index} carries id {:?}", node.id)));
            }
            let listed: IdSet<EdgeId> = node.edges().iter().copied().collect();
            if listed.len() != node.edges().len() {
                return Err(invalid(format!("{:?} lists an edge twice", node.id)));
            }
            for &edge_id in node.edges() {
                let edge = self
                    .graph
                    .edge(edge_id)
                    .ok_or(ChaikinError::UnknownEdge(edge_id))?;
                if !edge.contains(node.id) {
                    return Err(invalid(format!(
                        "{:?} lists {edge_id:?}, which joins {:?}",
                        node.id,
                        edge.nodes()
                    )));
                }
            }
        }

        for edge in self.graph.edges() {
            for end in edge.nodes() {
                let node = self.graph.node(end).ok_or(ChaikinError::UnknownNode(end))?;
                if !node.edges().contains(&edge.id) {
                    return Err(invalid(format!("{end:?} does not list {:?}", edge.id)));
                }
            }
        }
        Ok(())
    }

    fn validate_groups(&self) -> ChaikinResult<()> {
        let node_count = self.graph.node_count();
        let mut covered = IdSet::with_capacity(node_count);
        for (index, group) in self.groups.iter().enumerate() {
            let cycle = group.ogroup().ok_or(ChaikinError::GroupNotOrdered)?;
            if cycle.len() < 3 {
                return Err(ChaikinError::DegenerateGroup(cycle.len()));
            }
            if let Some(node) = cycle.iter().find(|n| n.index() >= node_count) {
                return Err(ChaikinError::UnknownNode(*node));
            }

            let members: IdSet<NodeId> = group.nodes().iter().copied().collect();
            let ordered: IdSet<NodeId> = cycle.iter().copied().collect();
            if members != ordered || ordered.len() != cycle.len() {
                return Err(invalid(format!(
                    "group {index}: cycle does not match its members"
                )));
            }

            for (i, &a) in cycle.iter().enumerate() {
                let b = cycle[(i + 1) % cycle.len()];
                if !self.graph.are_connected(a, b, EdgeFilter::Main) {
                    return Err(invalid(format!(
                        "group {index}: no main edge between {a:?} and {b:?}"
                    )));
                }
            }
            covered.union_with(&ordered);
        }

        if covered.len() != node_count {
            let orphan = (0..node_count)
                .map(NodeId::from_index)
                .find(|&n| !covered.contains(n));
            return Err(invalid(format!("{orphan:?} belongs to no group")));
        }
        Ok(())
    }
}
