//! Faces of a polyhedron.
//!
//! A group starts as a node collection and becomes an ordered cycle once its
//! nodes are linked by main edges. Faces with more than three sides get
//! graphical diagonals so they can be rendered as triangles.
//!
//! ## Diagonal scheme
//!
//! Instead of a fan from one vertex, diagonals are added by repeatedly
//! halving the cycle: every other node of the current cycle is kept and the
//! kept nodes are linked, cutting off one triangle per dropped node.
//!
//! ```text
//!   level 1 (k = 2)        level 2 (k = 4)
//!      1                        .
//!    0---2                    0   .
//!   7  |  3                  / \
//!    6---4                  6---4 ... until three nodes remain
//!      5
//! ```
//!
//! Long thin faces then get triangles of comparable size instead of a fan of
//! slivers.

use glam::DVec3;

use crate::error::{ChaikinError, ChaikinResult};
use crate::geometry::{self, Plane};
use crate::graph::MeshGraph;
use crate::identity::IdSet;
use crate::types::{EdgeFilter, EdgeType, NodeId};

/// Diagonals and triangles of a cycle, as positions in the cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SplitPlan {
    pub diagonals: Vec<(usize, usize)>,
    pub triangles: Vec<[usize; 3]>,
}

/// Balanced split of a cycle of `len` nodes
pub(crate) fn balanced_split(len: usize) -> SplitPlan {
    let mut plan = SplitPlan::default();
    if len < 3 {
        return plan;
    }

    let mut current: Vec<usize> = (0..len).collect();
    while current.len() > 3 {
        let n = current.len();
        for i in (1..n).step_by(2) {
            plan.triangles
                .push([current[i - 1], current[i], current[(i + 1) % n]]);
        }

        let kept: Vec<usize> = current.iter().copied().step_by(2).collect();
        plan.diagonals
            .extend(kept.windows(2).map(|pair| (pair[0], pair[1])));
        // With an even count the last dropped node sits between the last kept
        // node and the first one
        if n % 2 == 0 && kept.len() > 2 {
            plan.diagonals.push((kept[kept.len() - 1], kept[0]));
        }
        current = kept;
    }
    if current.len() == 3 {
        plan.triangles.push([current[0], current[1], current[2]]);
    }
    plan
}

/// One face of a polyhedron
#[derive(Debug, Clone)]
pub struct Group {
    nodes: Vec<NodeId>,
    /// Canonical cycle, set once the group is ordered
    ogroup: Option<Vec<NodeId>>,
    /// Index triples into `ogroup`
    triangles: Vec<[usize; 3]>,
}

impl Group {
    /// Unordered group
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self {
            nodes,
            ogroup: None,
            triangles: Vec::new(),
        }
    }

    /// Group whose construction order already is its cycle
    pub fn pre_ordered(nodes: Vec<NodeId>) -> Self {
        Self {
            ogroup: Some(nodes.clone()),
            nodes,
            triangles: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn ogroup(&self) -> Option<&[NodeId]> {
        self.ogroup.as_deref()
    }

    pub fn is_ordered(&self) -> bool {
        self.ogroup.is_some()
    }

    /// Triangles as index triples into the ordered cycle
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Connect each node to the next one (wrapping around) with an edge of
    /// `edge_type`. Pairs already joined by such an edge (a side shared with
    /// a neighbouring face) are left alone. Returns the number of new edges.
    pub fn cycle_connect(&self, graph: &mut MeshGraph, edge_type: EdgeType) -> ChaikinResult<usize> {
        let size = self.nodes.len();
        if size < 3 {
            return Err(ChaikinError::DegenerateGroup(size));
        }

        let mut created = 0;
        for (i, &a) in self.nodes.iter().enumerate() {
            let b = self.nodes[(i + 1) % size];
            if graph.are_connected(a, b, edge_type.into()) {
                continue;
            }
            graph.connect(a, b, edge_type)?;
            created += 1;
        }
        Ok(created)
    }

    /// Order the group by walking main edges between its members.
    ///
    /// No-op on a group that is already ordered.
    pub fn order(&mut self, graph: &MeshGraph) -> ChaikinResult<&[NodeId]> {
        let cycle = match self.ogroup.take() {
            Some(cycle) => cycle,
            None => self.walk_cycle(graph)?,
        };
        let cycle: &[NodeId] = self.ogroup.insert(cycle);
        Ok(cycle)
    }

    fn walk_cycle(&self, graph: &MeshGraph) -> ChaikinResult<Vec<NodeId>> {
        let size = self.nodes.len();
        if size < 3 {
            return Err(ChaikinError::DegenerateGroup(size));
        }
        let members: IdSet<NodeId> = self.nodes.iter().copied().collect();
        if members.len() != size {
            return Err(ChaikinError::Validation(format!(
                "group lists a node more than once ({} distinct of {size})",
                members.len()
            )));
        }

        let first = self.nodes[0];
        let mut visited = IdSet::with_capacity(size);
        visited.insert(first);
        let mut current = first;
        // Keep the winding of the construction order when its first side is
        // an edge
        if graph.are_connected(first, self.nodes[1], EdgeFilter::Main) {
            current = self.nodes[1];
            visited.insert(current);
        }
        while visited.len() < size {
            let next = graph
                .neighbours(current, EdgeFilter::Main)?
                .find(|&n| members.contains(n) && !visited.contains(n));
            match next {
                Some(node) => {
                    visited.insert(node);
                    current = node;
                }
                None => {
                    return Err(ChaikinError::OpenCycle {
                        node: current,
                        visited: visited.len(),
                        size,
                    });
                }
            }
        }

        if !graph.are_connected(current, first, EdgeFilter::Main) {
            return Err(ChaikinError::UnclosedCycle {
                first,
                last: current,
            });
        }
        Ok(visited.as_slice().to_vec())
    }

    /// Add diagonals of `edge_type` so the face can be triangulated without
    /// crossing edges. Triangles need no diagonals. Returns the number of new
    /// edges.
    pub fn inter_connect(
        &mut self,
        graph: &mut MeshGraph,
        edge_type: EdgeType,
        order_first: bool,
    ) -> ChaikinResult<usize> {
        if order_first {
            self.order(graph)?;
        }
        let cycle = self.ogroup.as_ref().ok_or(ChaikinError::GroupNotOrdered)?;
        if cycle.len() <= 3 {
            return Ok(0);
        }

        let mut created = 0;
        for (i, j) in balanced_split(cycle.len()).diagonals {
            let (a, b) = (cycle[i], cycle[j]);
            if graph.are_connected(a, b, EdgeFilter::Any) {
                continue;
            }
            graph.connect(a, b, edge_type)?;
            created += 1;
        }
        Ok(created)
    }

    /// Compute the triangle list from the ordered cycle. Triangles whose
    /// corners coincide with an already emitted one are skipped.
    pub fn calc_triangles(&mut self, graph: &MeshGraph) -> ChaikinResult<&[[usize; 3]]> {
        let cycle = self.ogroup.as_ref().ok_or(ChaikinError::GroupNotOrdered)?;

        let mut seen = std::collections::HashSet::new();
        let mut triangles = Vec::new();
        for triangle in balanced_split(cycle.len()).triangles {
            let corners = [
                graph.position(cycle[triangle[0]])?,
                graph.position(cycle[triangle[1]])?,
                graph.position(cycle[triangle[2]])?,
            ];
            if seen.insert(geometry::similarity_key(corners)) {
                triangles.push(triangle);
            }
        }

        self.triangles = triangles;
        Ok(&self.triangles)
    }

    /// Triangle corners of this face
    pub fn triangle_positions<'a>(
        &'a self,
        graph: &'a MeshGraph,
    ) -> impl Iterator<Item = [DVec3; 3]> + 'a {
        let cycle = self.ogroup.as_deref().unwrap_or_default();
        self.triangles.iter().filter_map(move |t| {
            Some([
                graph.position(*cycle.get(t[0])?).ok()?,
                graph.position(*cycle.get(t[1])?).ok()?,
                graph.position(*cycle.get(t[2])?).ok()?,
            ])
        })
    }

    /// Whether every node lies on the plane of the first three non-collinear
    /// nodes
    pub fn is_planar(&self, graph: &MeshGraph) -> ChaikinResult<bool> {
        let positions = self
            .nodes
            .iter()
            .map(|&n| graph.position(n))
            .collect::<ChaikinResult<Vec<_>>>()?;
        if positions.len() <= 3 {
            return Ok(true);
        }

        let origin = positions[0];
        let plane = positions
            .iter()
            .enumerate()
            .skip(1)
            .find_map(|(i, &b)| {
                positions[i + 1..]
                    .iter()
                    .find_map(|&c| Plane::from_points(origin, b, c))
            });
        Ok(match plane {
            Some(plane) => positions.iter().all(|&p| plane.contains(p)),
            None => true,
        })
    }

    /// Flip the winding of the ordered cycle, keeping its first node.
    /// Triangles must be recomputed afterwards.
    pub(crate) fn reverse(&mut self) {
        if let Some(cycle) = &mut self.ogroup {
            cycle[1..].reverse();
        }
        self.triangles.clear();
    }

    /// Whether `b` directly follows `a` in the ordered cycle
    pub fn follows(&self, a: NodeId, b: NodeId) -> bool {
        self.ogroup.as_deref().is_some_and(|cycle| {
            cycle
                .iter()
                .position(|&n| n == a)
                .is_some_and(|i| cycle[(i + 1) % cycle.len()] == b)
        })
    }

    /// Renumber the nodes of this group
    pub(crate) fn remap_nodes(&mut self, map: impl Fn(NodeId) -> NodeId) {
        for node in &mut self.nodes {
            *node = map(*node);
        }
        if let Some(cycle) = &mut self.ogroup {
            for node in cycle.iter_mut() {
                *node = map(*node);
            }
        }
    }
}
