//! Network representation and generation module

pub mod generator;
pub mod metrics;

use serde::{Serialize, Deserialize};

/// A node on the ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Stable identifier in [0, node_count)
    pub id: u32,

    /// Fixed angular position on the circle: id * 2*pi / node_count.
    /// Only consumed by layout; invariant for a fixed node count.
    pub angle: f64,

    /// Number of edges incident to this node
    pub degree: u32,
}

/// An undirected edge, stored with the orientation it was created with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: u32,
    pub target: u32,

    /// True for an untouched lattice edge, false once rewired
    pub original: bool,
}

impl Edge {
    /// The unordered endpoint pair, normalized so {a, b} and {b, a} compare equal
    pub fn pair(&self) -> (u32, u32) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

/// One generated network: node and edge collections plus rewiring diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,

    /// Edges that drew below p but exhausted all retry attempts and were
    /// kept unchanged. Diagnostic only, never an error.
    pub rewires_exhausted: usize,
}

impl Network {
    /// Number of edges that were rewired away from their lattice target
    pub fn rewired_count(&self) -> usize {
        self.edges.iter().filter(|e| !e.original).count()
    }
}
