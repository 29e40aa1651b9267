//! Construction of a polyhedron from vertex and face index lists.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::Polyhedron;
use crate::error::{ChaikinError, ChaikinResult};
use crate::graph::MeshGraph;
use crate::group::Group;
use crate::types::{ArenaId, EdgeType, NodeId};

const CONSTRUCTION_LOG_STEP: usize = 500;

/// Vertex coordinates plus one index cycle per face, as produced by mesh
/// importers and shape generators
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardMesh {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<Vec<usize>>,
}

impl StandardMesh {
    pub fn new(vertices: Vec<[f64; 3]>, faces: Vec<Vec<usize>>) -> Self {
        Self { vertices, faces }
    }
}

impl TryFrom<&StandardMesh> for Polyhedron {
    type Error = ChaikinError;

    fn try_from(mesh: &StandardMesh) -> Result<Self, Self::Error> {
        let vertices: Vec<DVec3> = mesh.vertices.iter().map(|&v| DVec3::from_array(v)).collect();
        Polyhedron::from_standard_vertex_lists(&vertices, &mesh.faces)
    }
}

impl Polyhedron {
    /// Build a polyhedron from vertex coordinates and per-face index cycles.
    ///
    /// One node per vertex (same index). Each face gets main edges along its
    /// cycle; faces with more than three sides get graphical diagonals once
    /// every face is in place, so that a diagonal is never created where a
    /// shared side exists.
    pub fn from_standard_vertex_lists<F: AsRef<[usize]>>(
        vertices: &[DVec3],
        faces: &[F],
    ) -> ChaikinResult<Self> {
        validate_faces(vertices.len(), faces)?;

        let mut graph = MeshGraph::with_capacity(vertices.len(), vertices.len() * 3);
        for &position in vertices {
            graph.add_node(position);
        }

        let mut groups = Vec::with_capacity(faces.len());
        let mut deferred = Vec::new();
        for (i, face) in faces.iter().enumerate() {
            if i % CONSTRUCTION_LOG_STEP == 0 {
                trace!("from_standard_vertex_lists: [{}/{}] faces read", i, faces.len());
            }
            let nodes = face.as_ref().iter().map(|&v| NodeId::from_index(v)).collect();
            let mut group = Group::new(nodes);
            group.cycle_connect(&mut graph, EdgeType::Main)?;
            group.order(&graph)?;
            if !group.is_planar(&graph)? {
                warn!("from_standard_vertex_lists: face {} is not planar", i);
            }
            if group.size() > 3 {
                deferred.push(i);
            }
            groups.push(group);
        }

        debug!(
            "from_standard_vertex_lists: inter-connecting {} of {} faces",
            deferred.len(),
            groups.len()
        );
        for i in deferred {
            groups[i].inter_connect(&mut graph, EdgeType::Graphical, false)?;
        }

        Polyhedron::new(graph, groups, true)
    }
}

/// Reject bad faces before anything is built
fn validate_faces<F: AsRef<[usize]>>(vertex_count: usize, faces: &[F]) -> ChaikinResult<()> {
    for (face, indices) in faces.iter().enumerate() {
        let indices = indices.as_ref();
        if indices.len() < 3 {
            return Err(ChaikinError::FaceTooSmall {
                face,
                len: indices.len(),
            });
        }
        if let Some(&index) = indices.iter().find(|&&i| i >= vertex_count) {
            return Err(ChaikinError::VertexIndexOutOfRange {
                face,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}
