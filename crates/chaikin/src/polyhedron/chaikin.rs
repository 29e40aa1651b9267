//! The Chaikin3D transform.
//!
//! ## Algorithm
//!
//! 1. Optionally order each node's main edges into a fan around it.
//! 2. Truncate every vertex: one sub-node per incident main edge, placed
//!    along that edge. The edge itself is moved onto the sub-node, so after
//!    all vertices are processed each old main edge joins two sub-nodes.
//!    The sub-nodes of one vertex form a new face.
//! 3. Rebuild every old face: each side (a, b) was a main edge, and that
//!    edge now joins a sub-node of `a` to a sub-node of `b`. Walking the
//!    sides in order and taking both ends of each moved edge yields the
//!    shrunken face. Sides without a main edge fall back to picking the
//!    sub-node of `a` closest to `b` and vice versa.
//! 4. Wind every vertex face against the rebuilt faces around it, then add
//!    the triangulation diagonals.
//!
//! ```text
//!   before            after
//!   a-------b         .--x-----y--.
//!   |       |         |           |
//! ```
//!
//! ## Ratios
//!
//! A vertex is cut at `1/k` of each edge. The far end of an edge is either an
//! untouched vertex (base ratio `(k-1)/k`) or a sub-node from truncating the
//! other end first (special ratio `(k-2)/(k-1)`, measured on the already
//! shortened edge). Both land the cut at `1/k` of the original length.
//!
//! The input polyhedron is never modified: the transform runs on a copy of
//! its arena and splits the new generation out of it at the end.

use std::time::Instant;

use chaikin_config::{ChaikinConfig, MIN_EXCLUSIVE_COEFFICIENT, OrderEdges, Verbosity};
use tracing::{debug, info, trace, warn};

use super::Polyhedron;
use crate::error::{ChaikinError, ChaikinResult};
use crate::geometry;
use crate::graph::MeshGraph;
use crate::group::Group;
use crate::identity::{IdMap, IdSet};
use crate::types::{ArenaId, EdgeFilter, EdgeId, EdgeType, NodeId};

/// Progress is reported every this many nodes or groups
pub const VERBOSE_STEP: usize = 100;

/// Where corners are cut along an edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncationRatios {
    /// Far end is an original vertex
    pub base: f64,
    /// Far end was already truncated during this generation
    pub special: f64,
}

impl TruncationRatios {
    pub fn new(coefficient: f64) -> ChaikinResult<Self> {
        if !coefficient.is_finite() || coefficient <= MIN_EXCLUSIVE_COEFFICIENT {
            return Err(ChaikinError::InvalidCoefficient(coefficient));
        }
        Ok(Self {
            base: (coefficient - 1.0) / coefficient,
            special: (coefficient - 2.0) / (coefficient - 1.0),
        })
    }
}

impl Polyhedron {
    /// Apply one Chaikin3D generation and return the resulting polyhedron.
    ///
    /// # Errors
    ///
    /// - `InvalidCoefficient` if `coefficient` is not a finite number above 2
    /// - inconsistent-topology errors if a face cannot be rebuilt or the
    ///   result fails validation
    pub fn chaikin3d(
        &self,
        coefficient: f64,
        order_edges: OrderEdges,
        verbosity: Verbosity,
    ) -> ChaikinResult<Polyhedron> {
        let ratios = TruncationRatios::new(coefficient)?;
        let started = Instant::now();

        let mut work = self.graph.clone();
        if order_edges.applies_to(self.initial_mesh) {
            debug!("chaikin3d: ordering the edge lists of {} nodes", work.node_count());
            order_node_edges(&mut work, &self.groups)?;
        }

        // Vertex truncation
        let total_nodes = work.node_count();
        let mut sub_nodes: IdMap<NodeId, Vec<NodeId>> = IdMap::with_capacity(total_nodes);
        let mut owner: IdMap<NodeId, NodeId> = IdMap::new();
        let mut vertex_groups = Vec::with_capacity(total_nodes);
        for index in 0..total_nodes {
            if verbosity.reports_progress() && index % VERBOSE_STEP == 0 {
                info!(
                    "chaikin3d: [{}/{}] nodes truncated ({:.2}%)",
                    index,
                    total_nodes,
                    100.0 * index as f64 / total_nodes as f64
                );
            }
            let node = NodeId::from_index(index);
            let subs = truncate_node(&mut work, node, total_nodes, ratios, verbosity)?;
            if subs.is_empty() {
                debug!("chaikin3d: {:?} has no main edges, dropping it", node);
                continue;
            }
            let group = Group::new(subs.clone());
            group.cycle_connect(&mut work, EdgeType::Main)?;
            for &sub in &subs {
                owner.insert(sub, node);
            }
            sub_nodes.insert(node, subs);
            vertex_groups.push((node, group));
        }

        // Surface reconstruction
        let total_groups = self.groups.len();
        let mut surface_groups = Vec::with_capacity(total_groups);
        for (index, old_group) in self.groups.iter().enumerate() {
            if verbosity.reports_progress() && index % VERBOSE_STEP == 0 {
                info!(
                    "chaikin3d: [{}/{}] faces rebuilt ({:.2}%)",
                    index,
                    total_groups,
                    100.0 * index as f64 / total_groups as f64
                );
            }
            let cycle = old_group.ogroup().ok_or(ChaikinError::GroupNotOrdered)?;
            let nodes = shrink_face(&self.graph, &work, &sub_nodes, cycle)?;
            surface_groups.push(Group::pre_ordered(nodes));
        }

        // A rebuilt face passes two sub-nodes of the same vertex in a row;
        // the vertex face must pass them the other way round
        let mut corner_sides: IdMap<NodeId, (NodeId, NodeId)> = IdMap::with_capacity(total_nodes);
        for group in &surface_groups {
            let cycle = group.nodes();
            for (i, &a) in cycle.iter().enumerate() {
                let b = cycle[(i + 1) % cycle.len()];
                if let (Some(&va), Some(&vb)) = (owner.get(a), owner.get(b)) {
                    if va == vb {
                        corner_sides.insert(va, (a, b));
                    }
                }
            }
        }
        for (node, group) in &mut vertex_groups {
            group.order(&work)?;
            if let Some(&(a, b)) = corner_sides.get(*node) {
                if group.follows(a, b) {
                    group.reverse();
                }
            }
            group.inter_connect(&mut work, EdgeType::Graphical, false)?;
        }
        for group in &mut surface_groups {
            group.inter_connect(&mut work, EdgeType::Graphical, false)?;
        }

        // Split the new generation out of the working arena
        work.retain_nodes_from(total_nodes)?;
        let mut groups: Vec<Group> = vertex_groups
            .into_iter()
            .map(|(_, group)| group)
            .chain(surface_groups)
            .collect();
        for group in &mut groups {
            group.remap_nodes(|id| NodeId::from_index(id.index() - total_nodes));
        }

        let result = Polyhedron::new(work, groups, false)?;
        result.validate()?;
        debug!(
            "chaikin3d: {} nodes / {} groups -> {} nodes / {} groups in {:.3?}",
            total_nodes,
            total_groups,
            result.node_count(),
            result.group_count(),
            started.elapsed()
        );
        Ok(result)
    }

    /// Apply `config.generations` transforms in a row
    pub fn subdivide(&self, config: &ChaikinConfig) -> ChaikinResult<Polyhedron> {
        let mut current = self.clone();
        for generation in 0..config.generations {
            debug!("subdivide: generation {}", generation + 1);
            current = current.chaikin3d(config.coefficient, config.order_edges, config.verbosity)?;
        }
        Ok(current)
    }

    /// This polyhedron followed by each of the `config.generations`
    /// generations derived from it
    pub fn evolution(&self, config: &ChaikinConfig) -> ChaikinResult<Vec<Polyhedron>> {
        let mut generations = Vec::with_capacity(config.generations as usize + 1);
        let mut current = self.clone();
        for _ in 0..config.generations {
            let next = current.chaikin3d(config.coefficient, config.order_edges, config.verbosity)?;
            generations.push(std::mem::replace(&mut current, next));
        }
        generations.push(current);
        Ok(generations)
    }

    /// Order every node's main edges into a fan in place. Returns the number
    /// of nodes whose edges could not be ordered.
    pub fn order_edges(&mut self) -> ChaikinResult<usize> {
        order_node_edges(&mut self.graph, &self.groups)
    }
}

/// Cut `node` off every main edge it touches. Graphical edges are left on
/// the node and disappear with it.
fn truncate_node(
    work: &mut MeshGraph,
    node: NodeId,
    original_count: usize,
    ratios: TruncationRatios,
    verbosity: Verbosity,
) -> ChaikinResult<Vec<NodeId>> {
    let near = work.position(node)?;
    let main_edges = work.incident_edges(node, EdgeFilter::Main)?;

    let mut subs = Vec::with_capacity(main_edges.len());
    for edge in main_edges {
        let far_node = work.partner(edge, node)?;
        let ratio = if far_node.index() < original_count {
            ratios.base
        } else {
            ratios.special
        };
        let far = work.position(far_node)?;
        let sub = work.add_node(geometry::truncation_point(far, near, ratio));
        work.update_node(edge, node, sub)?;
        if verbosity.reports_detail() {
            trace!(
                "chaikin3d: {:?} along {:?} (far {:?}, ratio {:.4}) -> {:?}",
                node,
                edge,
                far_node,
                ratio,
                sub
            );
        }
        subs.push(sub);
    }
    Ok(subs)
}

/// Sub-nodes of the shrunken version of the face `cycle`, in cycle order
fn shrink_face(
    original: &MeshGraph,
    work: &MeshGraph,
    sub_nodes: &IdMap<NodeId, Vec<NodeId>>,
    cycle: &[NodeId],
) -> ChaikinResult<Vec<NodeId>> {
    let size = cycle.len();
    let mut nodes = Vec::with_capacity(size * 2);
    for (i, &current) in cycle.iter().enumerate() {
        let next = cycle[(i + 1) % size];
        nodes.extend(side_ends(original, work, sub_nodes, current, next)?);
    }
    Ok(nodes)
}

/// Sub-nodes of `current` and `next` at the ends of the side between them.
///
/// The side's main edge keeps its id through truncation, so its endpoints in
/// `work` are exactly the two sub-nodes.
fn side_ends(
    original: &MeshGraph,
    work: &MeshGraph,
    sub_nodes: &IdMap<NodeId, Vec<NodeId>>,
    current: NodeId,
    next: NodeId,
) -> ChaikinResult<[NodeId; 2]> {
    let Some(edge) = original.find_edge(current, next, EdgeFilter::Main) else {
        warn!(
            "chaikin3d: no main edge between {:?} and {:?}, matching sub-nodes by distance",
            current, next
        );
        return Ok([
            closest_sub_node(work, sub_nodes, current, work.position(next)?)?,
            closest_sub_node(work, sub_nodes, next, work.position(current)?)?,
        ]);
    };

    let owned_by = |source: NodeId, sub: NodeId| {
        sub_nodes
            .get(source)
            .is_some_and(|subs| subs.contains(&sub))
    };
    let [a, b] = work.edge(edge).ok_or(ChaikinError::UnknownEdge(edge))?.nodes();
    if owned_by(current, a) && owned_by(next, b) {
        Ok([a, b])
    } else if owned_by(current, b) && owned_by(next, a) {
        Ok([b, a])
    } else {
        Err(ChaikinError::MissingSubNodes(current))
    }
}

fn closest_sub_node(
    work: &MeshGraph,
    sub_nodes: &IdMap<NodeId, Vec<NodeId>>,
    source: NodeId,
    target: glam::DVec3,
) -> ChaikinResult<NodeId> {
    let candidates = sub_nodes
        .get(source)
        .ok_or(ChaikinError::MissingSubNodes(source))?;
    let positions = candidates
        .iter()
        .map(|&n| work.position(n))
        .collect::<ChaikinResult<Vec<_>>>()?;
    geometry::closest_to(target, positions)
        .map(|i| candidates[i])
        .ok_or(ChaikinError::MissingSubNodes(source))
}

/// Order the main edges of every node so consecutive edges bound a common
/// face. Returns how many nodes were left in insertion order.
fn order_node_edges(graph: &mut MeshGraph, groups: &[Group]) -> ChaikinResult<usize> {
    // Corners: the two sides of a face meeting at a node
    let mut corners: IdMap<NodeId, Vec<(EdgeId, EdgeId)>> = IdMap::with_capacity(graph.node_count());
    for group in groups {
        let cycle = group.ogroup().ok_or(ChaikinError::GroupNotOrdered)?;
        let size = cycle.len();
        for (i, &node) in cycle.iter().enumerate() {
            let prev = cycle[(i + size - 1) % size];
            let next = cycle[(i + 1) % size];
            if let (Some(a), Some(b)) = (
                graph.find_edge(node, prev, EdgeFilter::Main),
                graph.find_edge(node, next, EdgeFilter::Main),
            ) {
                corners.entry_or_default(node).push((a, b));
            }
        }
    }

    let mut unordered = 0;
    for index in 0..graph.node_count() {
        let node = NodeId::from_index(index);
        let Some(node_corners) = corners.get(node) else {
            continue;
        };
        let main = graph.incident_edges(node, EdgeFilter::Main)?;
        if main.len() <= 3 {
            // every order of three edges is a fan
            continue;
        }
        match fan_order(&main, node_corners) {
            Some(fan) => graph.reorder_main_edges(node, fan)?,
            None => {
                warn!(
                    "order_edges: edges of {:?} do not form a single fan, keeping insertion order",
                    node
                );
                unordered += 1;
            }
        }
    }
    Ok(unordered)
}

/// Walk from edge to edge across corners. Open fans start at a boundary edge.
fn fan_order(main: &[EdgeId], corners: &[(EdgeId, EdgeId)]) -> Option<Vec<EdgeId>> {
    let mut adjacent: IdMap<EdgeId, Vec<EdgeId>> = IdMap::with_capacity(main.len());
    for &(a, b) in corners {
        adjacent.entry_or_default(a).push(b);
        adjacent.entry_or_default(b).push(a);
    }

    let start = main
        .iter()
        .copied()
        .find(|&e| adjacent.get(e).is_some_and(|n| n.len() == 1))
        .unwrap_or(main[0]);

    let mut fan = IdSet::with_capacity(main.len());
    fan.insert(start);
    let mut current = start;
    while let Some(next) = adjacent
        .get(current)
        .and_then(|n| n.iter().copied().find(|&e| !fan.contains(e)))
    {
        fan.insert(next);
        current = next;
    }

    (fan.len() == main.len()).then(|| fan.as_slice().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::fixtures;
    use approx::assert_relative_eq;
    use glam::DVec3;

    fn build(mesh: fixtures::Mesh) -> Polyhedron {
        Polyhedron::from_standard_vertex_lists(&mesh.0, &mesh.1).unwrap()
    }

    fn step(poly: &Polyhedron, k: f64) -> Polyhedron {
        poly.chaikin3d(k, OrderEdges::First, Verbosity::Quiet).unwrap()
    }

    fn main_degree_sum(poly: &Polyhedron) -> usize {
        poly.nodes()
            .iter()
            .map(|n| poly.graph().incident_edges(n.id, EdgeFilter::Main).unwrap().len())
            .sum()
    }

    fn has_node_at(poly: &Polyhedron, p: DVec3) -> bool {
        poly.nodes().iter().any(|n| n.position.distance(p) < 1e-9)
    }

    #[test]
    fn test_ratios() {
        let ratios = TruncationRatios::new(4.0).unwrap();
        assert_relative_eq!(ratios.base, 0.75);
        assert_relative_eq!(ratios.special, 2.0 / 3.0);
    }

    #[test]
    fn test_rejects_degenerate_coefficient() {
        let cube = build(fixtures::cube());
        for k in [2.0, 1.0, f64::NAN] {
            let err = cube
                .chaikin3d(k, OrderEdges::First, Verbosity::Quiet)
                .unwrap_err();
            assert!(matches!(err, ChaikinError::InvalidCoefficient(_)));
            assert_eq!(err.kind(), ErrorKind::MalformedInput);
        }
    }

    #[test]
    fn test_cube_one_generation() {
        let cube = build(fixtures::cube());
        let next = step(&cube, 4.0);

        assert!(!next.is_initial_mesh());
        assert_eq!(next.node_count(), 24);
        assert_eq!(next.group_count(), 14);
        assert_eq!(next.edge_count(EdgeFilter::Main), 36);

        let (corners, faces): (Vec<_>, Vec<_>) =
            next.groups().iter().partition(|g| g.size() == 3);
        assert_eq!(corners.len(), 8);
        assert_eq!(faces.len(), 6);
        // two sub-nodes per side of each square
        assert!(faces.iter().all(|g| g.size() == 8 && g.is_ordered()));
        next.validate().unwrap();
    }

    #[test]
    fn test_cube_sub_node_positions() {
        let next = step(&build(fixtures::cube()), 4.0);
        for node in next.nodes() {
            let p = node.position.to_array();
            let cut = p.iter().filter(|&&c| (c - 0.25).abs() < 1e-9 || (c - 0.75).abs() < 1e-9).count();
            let kept = p.iter().filter(|&&c| c.abs() < 1e-9 || (c - 1.0).abs() < 1e-9).count();
            assert_eq!((cut, kept), (1, 2), "{p:?}");
        }
        assert!(has_node_at(&next, DVec3::new(0.25, 0.0, 0.0)));
        assert!(has_node_at(&next, DVec3::new(0.75, 0.0, 0.0)));
    }

    #[test]
    fn test_input_is_not_modified() {
        let cube = build(fixtures::cube());
        let before: Vec<_> = cube.graph().edges().iter().map(|e| e.nodes()).collect();
        step(&cube, 4.0);
        let after: Vec<_> = cube.graph().edges().iter().map(|e| e.nodes()).collect();
        assert_eq!(before, after);
        cube.validate().unwrap();
    }

    #[test]
    fn test_truncation_count_invariant() {
        for mesh in [
            fixtures::tetrahedron(),
            fixtures::cube(),
            fixtures::octahedron(),
            fixtures::square_pyramid(),
            fixtures::hexagonal_prism(),
        ] {
            let poly = build(mesh);
            let next = step(&poly, 3.0);
            assert_eq!(next.node_count(), main_degree_sum(&poly));
            assert_eq!(next.group_count(), poly.node_count() + poly.group_count());
        }
    }

    #[test]
    fn test_edge_identity_preserved() {
        let k = 4.0;
        let cube = build(fixtures::cube());
        let next = step(&cube, k);

        for old in cube.edges(EdgeFilter::Main) {
            let new = next.graph().edge(old.id).unwrap();
            assert!(new.is_main());

            let [a, b] = old.nodes();
            let (pa, pb) = (cube.node(a).unwrap().position, cube.node(b).unwrap().position);
            let ends = new.nodes().map(|n| next.node(n).unwrap().position);
            let near_a = pa + (pb - pa) / k;
            let near_b = pb + (pa - pb) / k;
            let matches = (ends[0].distance(near_a) < 1e-9 && ends[1].distance(near_b) < 1e-9)
                || (ends[0].distance(near_b) < 1e-9 && ends[1].distance(near_a) < 1e-9);
            assert!(matches, "{:?}: {ends:?}", old.id);
        }
    }

    #[test]
    fn test_special_ratio_on_second_generation() {
        let cube = build(fixtures::cube());
        let config = ChaikinConfig::new(4.0, 2);
        let second = cube.subdivide(&config).unwrap();

        assert_eq!(second.node_count(), 72);
        assert_eq!(second.group_count(), 24 + 14);
        // the x axis side spans 0.25..0.75 after one generation
        assert!(has_node_at(&second, DVec3::new(0.375, 0.0, 0.0)));
        assert!(has_node_at(&second, DVec3::new(0.625, 0.0, 0.0)));
        second.validate().unwrap();
    }

    fn assert_consistent_winding(poly: &Polyhedron) {
        let mut sides = std::collections::HashSet::new();
        for group in poly.groups() {
            let cycle = group.ogroup().unwrap();
            for (i, &a) in cycle.iter().enumerate() {
                let b = cycle[(i + 1) % cycle.len()];
                assert!(sides.insert((a, b)), "side {a:?}->{b:?} used twice");
            }
        }
        for &(a, b) in &sides {
            assert!(sides.contains(&(b, a)), "side {a:?}->{b:?} has no opposite");
        }
    }

    #[test]
    fn test_repeated_generations_stay_valid() {
        for mesh in [fixtures::cube(), fixtures::octahedron()] {
            let mut poly = build(mesh);
            for generation in 1..=5 {
                let next = step(&poly, 4.0);
                next.validate()
                    .unwrap_or_else(|e| panic!("generation {generation}: {e}"));
                assert_eq!(next.node_count(), main_degree_sum(&poly));
                assert_eq!(next.group_count(), poly.node_count() + poly.group_count());
                let expected: usize = next.groups().iter().map(|g| g.size() - 2).sum();
                assert_eq!(next.triangles().len(), expected);
                poly = next;
            }
            assert_eq!(poly.node_count(), 1944);
        }
    }

    #[test]
    fn test_rebuilt_sides_are_moved_edges() {
        let mut poly = build(fixtures::cube());
        for _ in 0..3 {
            poly = step(&poly, 4.0);
        }
        let next = step(&poly, 4.0);
        let rebuilt = &next.groups()[poly.node_count()..];
        for group in rebuilt {
            let cycle = group.ogroup().unwrap();
            // every other side of a rebuilt face is a moved edge
            for pair in cycle.chunks(2) {
                let edge = next.graph().find_edge(pair[0], pair[1], EdgeFilter::Main).unwrap();
                assert!(edge.index() < poly.edge_count(EdgeFilter::Main));
            }
        }
    }

    #[test]
    fn test_winding_is_consistent() {
        for mesh in [fixtures::cube(), fixtures::octahedron(), fixtures::hexagonal_prism()] {
            let mut poly = build(mesh);
            assert_consistent_winding(&poly);
            for _ in 0..3 {
                poly = step(&poly, 4.0);
                assert_consistent_winding(&poly);
            }
        }
    }

    #[test]
    fn test_every_generation_is_degree_three() {
        let poly = build(fixtures::octahedron());
        let next = step(&poly, 4.0);
        for node in next.nodes() {
            assert_eq!(next.graph().incident_edges(node.id, EdgeFilter::Main).unwrap().len(), 3);
        }
    }

    #[test]
    fn test_octahedron_needs_edge_ordering() {
        let poly = build(fixtures::octahedron());

        let err = poly
            .chaikin3d(4.0, OrderEdges::Never, Verbosity::Quiet)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InconsistentTopology);

        let next = poly
            .chaikin3d(4.0, OrderEdges::First, Verbosity::Quiet)
            .unwrap();
        assert_eq!(next.node_count(), 24);
        let sizes: Vec<_> = next.groups().iter().map(Group::size).collect();
        assert_eq!(sizes.iter().filter(|&&s| s == 4).count(), 6);
        assert_eq!(sizes.iter().filter(|&&s| s == 6).count(), 8);
    }

    #[test]
    fn test_order_edges_in_place() {
        let mut poly = build(fixtures::octahedron());
        assert_eq!(poly.order_edges().unwrap(), 0);
        poly.validate().unwrap();
        // already fans, so a derived mesh no longer needs ordering
        let mut flagged = poly.clone();
        flagged.initial_mesh = false;
        flagged
            .chaikin3d(4.0, OrderEdges::Never, Verbosity::Quiet)
            .unwrap();
    }

    #[test]
    fn test_fan_order() {
        let e = |i| EdgeId(i);
        // corners of a closed fan listed out of order
        let corners = [(e(0), e(2)), (e(1), e(3)), (e(2), e(1)), (e(3), e(0))];
        let fan = fan_order(&[e(0), e(1), e(2), e(3)], &corners).unwrap();
        assert_eq!(fan, vec![e(0), e(2), e(1), e(3)]);

        // open fan starts at a boundary edge
        let corners = [(e(1), e(2)), (e(0), e(1))];
        let fan = fan_order(&[e(1), e(2), e(0)], &corners).unwrap();
        assert_eq!(fan, vec![e(2), e(1), e(0)]);

        // two separate fans
        let corners = [(e(0), e(1)), (e(2), e(3))];
        assert!(fan_order(&[e(0), e(1), e(2), e(3)], &corners).is_none());
    }

    #[test]
    fn test_evolution() {
        let cube = build(fixtures::cube());
        let frames = cube.evolution(&ChaikinConfig::new(4.0, 2)).unwrap();
        let counts: Vec<_> = frames.iter().map(Polyhedron::node_count).collect();
        assert_eq!(counts, vec![8, 24, 72]);
        assert!(frames[0].is_initial_mesh());
        // earlier frames stay usable after later generations were derived
        frames[0].validate().unwrap();
        frames[1].validate().unwrap();
    }

    #[test]
    fn test_zero_generations() {
        let cube = build(fixtures::cube());
        let same = cube.subdivide(&ChaikinConfig::default()).unwrap();
        assert_eq!(same.node_count(), 8);
        assert_eq!(cube.evolution(&ChaikinConfig::default()).unwrap().len(), 1);
    }

    #[test]
    fn test_hexagonal_prism_faces() {
        let next = step(&build(fixtures::hexagonal_prism()), 4.0);
        let mut sizes: Vec<_> = next.groups().iter().map(Group::size).collect();
        sizes.sort_unstable();
        // 12 corner triangles, 6 octagons from the sides, 2 dodecagons
        assert_eq!(sizes.iter().filter(|&&s| s == 3).count(), 12);
        assert_eq!(sizes.iter().filter(|&&s| s == 8).count(), 6);
        assert_eq!(sizes.iter().filter(|&&s| s == 12).count(), 2);
        next.validate().unwrap();
    }
}
