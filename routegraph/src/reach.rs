//! Reachability between graph nodes.

use crate::graph::*;
use std::collections::HashSet;

/// Depth-first search from `from` that stops as soon as `to` shows up as a neighbor.
///
/// Returns false if either node isn't in the graph. A node of the graph always reaches itself.
pub fn is_reachable<G: Copy + IntoNeighbors>(graph: G, from: G::NodeId, to: G::NodeId) -> bool {
  if !graph.contains(from) || !graph.contains(to) {
    return false;
  }
  if from == to {
    return true;
  }

  let mut visited: HashSet<G::NodeId> = HashSet::new();
  let mut stack = vec![from];
  visited.insert(from);

  while let Some(node) = stack.pop() {
    for neighbor in graph.neighbors(node) {
      if neighbor == to {
        return true;
      }
      if visited.insert(neighbor) {
        stack.push(neighbor);
      }
    }
  }
  false
}

#[cfg(test)]
mod tests {
  use super::super::test_utils::graph_from_points_and_edges;
  use super::*;
  use crate::spatial::GeoPoint;

  fn p(i: usize) -> GeoPoint {
    GeoPoint::new(i as f64, 0.0)
  }

  #[test]
  fn test_reachable_through_cycle() {
    let points: Vec<_> = (0..6).map(|i| (i as f64, 0.0)).collect();
    let graph = graph_from_points_and_edges(
      &points,
      &[(0, 1), (1, 2), (2, 0), (2, 3), (4, 5)],
    );

    assert!(is_reachable(&graph, p(0), p(3)));
    assert!(is_reachable(&graph, p(3), p(0)));
    assert!(is_reachable(&graph, p(4), p(5)));
    assert!(!is_reachable(&graph, p(0), p(4)));
    assert!(!is_reachable(&graph, p(5), p(1)));
  }

  #[test]
  fn test_long_chain_does_not_recurse() {
    let n = 20_000;
    let points: Vec<_> = (0..n).map(|i| (0.0, i as f64 * 1e-4)).collect();
    let edges: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    let graph = graph_from_points_and_edges(&points, &edges);

    assert!(is_reachable(
      &graph,
      GeoPoint::new(0.0, 0.0),
      GeoPoint::new(0.0, (n - 1) as f64 * 1e-4)
    ));
  }

  #[test]
  fn test_unknown_nodes() {
    let graph = graph_from_points_and_edges(&[(0.0, 0.0), (1.0, 0.0)], &[(0, 1)]);

    assert!(!is_reachable(&graph, p(0), p(7)));
    assert!(!is_reachable(&graph, p(7), p(0)));
    assert!(!is_reachable(&graph, p(7), p(7)));
  }

  #[test]
  fn test_works_over_any_graph_view() {
    // A graph paired with a cost function is still traversable
    let graph = graph_from_points_and_edges(&[(0.0, 0.0), (1.0, 0.0)], &[(0, 1)]);
    let view = (&graph, |_: GeoPoint, _: GeoPoint| 1u32);

    assert!(is_reachable(view, p(0), p(1)));
  }
}
