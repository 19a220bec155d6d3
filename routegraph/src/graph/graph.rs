use std::fmt::Debug;
use std::hash::Hash;
use std::iter::Iterator;

// ====== Basic traits =====

/// Requirements for a node identifier
pub trait Identifier: Eq + Hash + Copy + Debug {}
impl<T> Identifier for T where T: Eq + Hash + Copy + Debug {}

/// Defines type of the identifier for the graph
pub trait GraphBase {
  type NodeId: Identifier;
}

// ====== Neighbors access =====

/// Trait for defining graph connectivity
///
/// `neighbors()` for node `u` must return every node `v` such that there is an edge between `u`
/// and `v`. Graphs in this crate are undirected, so implementations must be symmetric: `v` is a
/// neighbor of `u` iff `u` is a neighbor of `v`.
///
/// Unknown nodes have no neighbors.
pub trait IntoNeighbors: GraphBase {
  type Neighbors: Iterator<Item = Self::NodeId>;
  fn neighbors(self, node: Self::NodeId) -> Self::Neighbors;

  /// Returns true if the node is part of the graph
  fn contains(self, node: Self::NodeId) -> bool;
}

// ====== Blanket implementations =====

impl<'a, G: GraphBase> GraphBase for &'a G {
  type NodeId = G::NodeId;
}

impl<G: GraphBase, T> GraphBase for (G, T) {
  type NodeId = G::NodeId;
}

impl<G: IntoNeighbors, T> IntoNeighbors for (G, T) {
  type Neighbors = G::Neighbors;

  fn neighbors(self, node_id: G::NodeId) -> Self::Neighbors {
    self.0.neighbors(node_id)
  }

  fn contains(self, node_id: G::NodeId) -> bool {
    self.0.contains(node_id)
  }
}
