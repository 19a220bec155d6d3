use crate::graph_impl::*;
use crate::spatial::GeoPoint;

pub fn description_from_points_and_edges(
  points: &[(f64, f64)],
  edges: &[(usize, usize)],
) -> GraphDescription {
  GraphDescription::new(
    points
      .iter()
      .enumerate()
      .map(|(i, &(lat, lon))| VertexRecord::new(format!("v{}", i), lat, lon))
      .collect(),
    edges
      .iter()
      .map(|&(from, to)| EdgeRecord::new(from, to))
      .collect(),
  )
}

pub fn graph_from_points_and_edges(points: &[(f64, f64)], edges: &[(usize, usize)]) -> RouteGraph {
  RouteGraph::build(&description_from_points_and_edges(points, edges)).unwrap()
}

/// Square A-B-C-D-A without diagonals plus an isolated vertex E.
///
/// D is pulled outwards, so A-B-C (~1.38 mi) is shorter than A-D-C (~1.81 mi).
pub fn square_graph() -> (RouteGraph, [GeoPoint; 5]) {
  let points = [
    (0.0, 0.0),
    (0.0, 0.01),
    (0.01, 0.01),
    (0.01, -0.005),
    (1.0, 1.0),
  ];
  let graph = graph_from_points_and_edges(&points, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
  let [a, b, c, d, e] = points;
  (
    graph,
    [
      GeoPoint::new(a.0, a.1),
      GeoPoint::new(b.0, b.1),
      GeoPoint::new(c.0, c.1),
      GeoPoint::new(d.0, d.1),
      GeoPoint::new(e.0, e.1),
    ],
  )
}
