use crate::graph::GraphBase;
use ordered_float::OrderedFloat;
use std::fmt::Debug;
use std::ops::Add;

/// Trait representing an edge weight(cost) in weighted graph
pub trait Weight<T = Self>: Default + Add<Output = T> + Ord + Copy + Debug {}
impl<T> Weight for T where T: Default + Add<Output = T> + Ord + Copy + Debug {}

/// Distance in miles, totally ordered so it can live in a binary heap.
pub type Miles = OrderedFloat<f64>;

/// Weighted graph
///
/// The weight is defined as a cost of traversing from one node to its neighbor.
pub trait Weighted: GraphBase {
  type Weight: Weight;
  fn transition_weight(&self, from: Self::NodeId, to: Self::NodeId) -> Self::Weight;
}

/// The tuple of a graph plus cost function can implement a weighted graph
impl<G: GraphBase, W: Weight, C: Fn(G::NodeId, G::NodeId) -> W> Weighted for (G, C) {
  type Weight = W;
  fn transition_weight(&self, from: Self::NodeId, to: Self::NodeId) -> Self::Weight {
    (self.1)(from, to)
  }
}

impl<'a, G: Weighted> Weighted for &'a G {
  type Weight = G::Weight;
  fn transition_weight(&self, from: Self::NodeId, to: Self::NodeId) -> Self::Weight {
    (*self).transition_weight(from, to)
  }
}
