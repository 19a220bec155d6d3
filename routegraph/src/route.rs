//! Route finding algorithms.

use crate::error::{GraphError, InvalidRouteRequest};
use crate::graph::*;
use crate::reach::is_reachable;
use crate::search_space::SearchSpace;
use crate::spatial::GeoPoint;
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct Route<W: Weight, N: Identifier> {
  pub cost: W,
  pub ids: Vec<N>,
}

/// Finds the cheapest route from `from` to `to`.
///
/// Identical endpoints and endpoints that can't reach each other are rejected up front rather
/// than producing a trivial or empty route.
pub fn route<G: Copy + IntoNeighbors + Weighted>(
  graph: G,
  from: G::NodeId,
  to: G::NodeId,
) -> Result<Route<G::Weight, G::NodeId>, InvalidRouteRequest> {
  if from == to {
    return Err(InvalidRouteRequest::SameEndpoints);
  }
  if !is_reachable(graph, from, to) {
    return Err(InvalidRouteRequest::Unreachable);
  }
  shortest_path(graph, from, to).ok_or(InvalidRouteRequest::Unreachable)
}

/// Plain Dijkstra from `from`, stopping as soon as `to` is settled.
pub fn shortest_path<G: Copy + IntoNeighbors + Weighted>(
  graph: G,
  from: G::NodeId,
  to: G::NodeId,
) -> Option<Route<G::Weight, G::NodeId>> {
  let mut forward_search: SearchSpace<G::Weight, G::NodeId> = SearchSpace::new();
  forward_search.init(from);

  while let Some((id, cost)) = forward_search.update(graph) {
    if id == to {
      trace!(settled = forward_search.settled(), cost = ?cost, "route found");
      return Some(Route {
        cost,
        // Need to reverse the list to get elements in the routing order
        ids: forward_search.unwind(id).into_iter().rev().collect(),
      });
    }
  }
  None
}

/// Sum of the weights between consecutive nodes.
pub fn calculate_weight<G: Weighted, Ids: IntoIterator<Item = G::NodeId>>(
  graph: G,
  ids: Ids,
) -> G::Weight {
  let mut ids = ids.into_iter();
  let mut total: G::Weight = Default::default();
  if let Some(mut previous) = ids.next() {
    for id in ids {
      total = total + graph.transition_weight(previous, id);
      previous = id;
    }
  }
  total
}

/// Length in miles of the polyline through `points`.
///
/// The points don't have to be vertices of any graph or follow its edges. A single point has
/// length zero, an empty slice is an error.
pub fn route_distance(points: &[GeoPoint]) -> Result<f64, GraphError> {
  if points.is_empty() {
    return Err(GraphError::EmptyRoute);
  }
  Ok(
    points
      .windows(2)
      .map(|pair| pair[0].distance(&pair[1]))
      .sum(),
  )
}
