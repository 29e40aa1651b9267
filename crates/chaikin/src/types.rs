//! Type definitions for the node/edge/group arena.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;

use crate::error::ChaikinError;

/// Type-safe node identifier (index into the node arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

/// Type-safe edge identifier (index into the edge arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub u32);

/// Type-safe group (face) identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(pub u32);

/// Identifiers that address a slot of an arena
pub trait ArenaId: Copy + Eq + std::hash::Hash + fmt::Debug {
    fn from_index(index: usize) -> Self;
    fn index(self) -> usize;
}

macro_rules! arena_id {
    ($ty:ident) => {
        impl ArenaId for $ty {
            #[inline]
            fn from_index(index: usize) -> Self {
                Self(index as u32)
            }

            #[inline]
            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

arena_id!(NodeId);
arena_id!(EdgeId);
arena_id!(GroupId);

/// Kind of connection between two nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeType {
    /// True polyhedron connectivity, drives the subdivision
    Main,
    /// Triangulation diagonal, rendering only
    Graphical,
}

impl EdgeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Graphical => "graphical",
        }
    }
}

impl FromStr for EdgeType {
    type Err = ChaikinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Self::Main),
            "graphical" => Ok(Self::Graphical),
            _ => Err(ChaikinError::UnknownEdgeType(s.to_string())),
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Edge selection used by queries and render extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeFilter {
    Main,
    Graphical,
    #[default]
    Any,
}

impl EdgeFilter {
    #[inline]
    pub fn matches(self, edge_type: EdgeType) -> bool {
        match self {
            Self::Main => edge_type == EdgeType::Main,
            Self::Graphical => edge_type == EdgeType::Graphical,
            Self::Any => true,
        }
    }
}

impl From<EdgeType> for EdgeFilter {
    fn from(edge_type: EdgeType) -> Self {
        match edge_type {
            EdgeType::Main => Self::Main,
            EdgeType::Graphical => Self::Graphical,
        }
    }
}

impl FromStr for EdgeFilter {
    type Err = ChaikinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Self::Main),
            "graphical" => Ok(Self::Graphical),
            "any" => Ok(Self::Any),
            _ => Err(ChaikinError::UnknownEdgeFilter(s.to_string())),
        }
    }
}

/// A vertex of the mesh graph
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    /// Fixed at creation
    pub position: DVec3,
    /// Incident edges, shared with the partner node
    pub(crate) edges: Vec<EdgeId>,
}

impl Node {
    pub(crate) fn new(id: NodeId, position: DVec3) -> Self {
        Self {
            id,
            position,
            edges: Vec::new(),
        }
    }

    /// All incident edges in their current order
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// An undirected connection between two distinct nodes
#[derive(Debug, Clone)]
pub struct Edge {
    pub id: EdgeId,
    pub edge_type: EdgeType,
    pub(crate) nodes: [NodeId; 2],
}

impl Edge {
    pub(crate) fn new(id: EdgeId, a: NodeId, b: NodeId, edge_type: EdgeType) -> Self {
        Self {
            id,
            edge_type,
            nodes: [a, b],
        }
    }

    pub fn nodes(&self) -> [NodeId; 2] {
        self.nodes
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes[0] == node || self.nodes[1] == node
    }

    pub fn is_main(&self) -> bool {
        self.edge_type == EdgeType::Main
    }

    /// The endpoint opposite to `node`
    pub fn partner(&self, node: NodeId) -> Result<NodeId, ChaikinError> {
        if self.nodes[0] == node {
            Ok(self.nodes[1])
        } else if self.nodes[1] == node {
            Ok(self.nodes[0])
        } else {
            Err(ChaikinError::NotAnEndpoint {
                edge: self.id,
                node,
            })
        }
    }

    /// Whether this edge joins exactly `a` and `b`, in either direction
    pub fn joins(&self, a: NodeId, b: NodeId) -> bool {
        (self.nodes[0] == a && self.nodes[1] == b) || (self.nodes[0] == b && self.nodes[1] == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_type_parsing() {
        assert_eq!("main".parse::<EdgeType>().unwrap(), EdgeType::Main);
        assert_eq!("graphical".parse::<EdgeType>().unwrap(), EdgeType::Graphical);
        let err = "diagonal".parse::<EdgeType>().unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::MalformedInput);
    }

    #[test]
    fn test_edge_filter() {
        assert!(EdgeFilter::Any.matches(EdgeType::Main));
        assert!(EdgeFilter::Any.matches(EdgeType::Graphical));
        assert!(!EdgeFilter::Main.matches(EdgeType::Graphical));
        assert_eq!("any".parse::<EdgeFilter>().unwrap(), EdgeFilter::Any);
        assert!("all".parse::<EdgeFilter>().is_err());
    }

    #[test]
    fn test_edge_partner() {
        let edge = Edge::new(EdgeId(0), NodeId(3), NodeId(7), EdgeType::Main);
        assert_eq!(edge.partner(NodeId(3)).unwrap(), NodeId(7));
        assert_eq!(edge.partner(NodeId(7)).unwrap(), NodeId(3));
        assert!(edge.partner(NodeId(1)).is_err());
        assert!(edge.joins(NodeId(7), NodeId(3)));
    }
}
