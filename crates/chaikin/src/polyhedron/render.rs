//! Geometry views for drawing a polyhedron.
//!
//! Drawing itself happens elsewhere; these produce line segments, triangle
//! lists and flat GPU buffers.

use std::collections::HashSet;

use glam::DVec3;

use super::Polyhedron;
use crate::geometry::{self, SimilarityKey};
use crate::types::{ArenaId, EdgeFilter, NodeId};

/// Indexed triangle mesh in GPU layout
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleBuffers {
    /// One entry per node, same order as the node list
    pub positions: Vec<[f32; 3]>,
    /// Three node indices per triangle
    pub indices: Vec<u32>,
}

impl TriangleBuffers {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl Polyhedron {
    /// End points of every edge matching `filter`
    pub fn edge_segments(&self, filter: EdgeFilter) -> impl Iterator<Item = [DVec3; 2]> + '_ {
        self.edges(filter).filter_map(|edge| {
            let [a, b] = edge.nodes();
            Some([self.node(a)?.position, self.node(b)?.position])
        })
    }

    /// Face triangles as node triples. A triangle reached through more than
    /// one group is listed once.
    pub fn triangle_nodes(&self) -> Vec<[NodeId; 3]> {
        let mut seen: HashSet<SimilarityKey> = HashSet::new();
        let mut triangles = Vec::new();
        for group in &self.groups {
            let Some(cycle) = group.ogroup() else {
                continue;
            };
            for t in group.triangles() {
                let nodes = t.map(|i| cycle[i]);
                let Some(corners) = self.corners(nodes) else {
                    continue;
                };
                if seen.insert(geometry::similarity_key(corners)) {
                    triangles.push(nodes);
                }
            }
        }
        triangles
    }

    /// Face triangles as corner positions
    pub fn triangles(&self) -> Vec<[DVec3; 3]> {
        self.triangle_nodes()
            .into_iter()
            .filter_map(|nodes| self.corners(nodes))
            .collect()
    }

    /// Triangles made of three mutually connected nodes.
    ///
    /// `Main` keeps triangles whose three sides are main edges, `Graphical`
    /// those with at least one graphical side.
    pub fn edge_triangles(&self, filter: EdgeFilter) -> Vec<[DVec3; 3]> {
        let graph = &self.graph;
        let side_is_main = |a: NodeId, b: NodeId| graph.find_edge(a, b, EdgeFilter::Main).is_some();

        let mut seen: HashSet<SimilarityKey> = HashSet::new();
        let mut triangles = Vec::new();
        for edge in graph.edges() {
            let [a, b] = {
                let [a, b] = edge.nodes();
                [a.min(b), a.max(b)]
            };
            let Ok(candidates) = graph.neighbours(a, EdgeFilter::Any) else {
                continue;
            };
            for c in candidates.filter(|&c| c > b) {
                if !graph.are_connected(b, c, EdgeFilter::Any) {
                    continue;
                }
                let all_main = side_is_main(a, b) && side_is_main(b, c) && side_is_main(a, c);
                let keep = match filter {
                    EdgeFilter::Main => all_main,
                    EdgeFilter::Graphical => !all_main,
                    EdgeFilter::Any => true,
                };
                if !keep {
                    continue;
                }
                if let Some(corners) = self.corners([a, b, c]) {
                    if seen.insert(geometry::similarity_key(corners)) {
                        triangles.push(corners);
                    }
                }
            }
        }
        triangles
    }

    /// Flatten the face triangles into GPU buffers
    pub fn triangle_buffers(&self) -> TriangleBuffers {
        let positions = self
            .nodes()
            .iter()
            .map(|node| node.position.as_vec3().to_array())
            .collect();
        let indices = self
            .triangle_nodes()
            .into_iter()
            .flat_map(|nodes| nodes.map(|n| n.index() as u32))
            .collect();
        TriangleBuffers { positions, indices }
    }

    fn corners(&self, nodes: [NodeId; 3]) -> Option<[DVec3; 3]> {
        Some([
            self.node(nodes[0])?.position,
            self.node(nodes[1])?.position,
            self.node(nodes[2])?.position,
        ])
    }
}
