use super::description::GraphDescription;
use crate::error::{GraphError, LoadError};
use crate::graph::*;
use crate::reach::is_reachable;
use crate::route::{calculate_weight, route, route_distance, Route};
use crate::spatial::GeoPoint;
use ordered_float::OrderedFloat;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Undirected graph of geographic points.
///
/// Each vertex maps to the set of vertices it shares an edge with. The graph is filled once by
/// [`RouteGraph::build`] and is read-only afterwards, so it can be shared between threads freely.
#[derive(Debug, Default, Clone)]
pub struct RouteGraph {
  adjacency: HashMap<GeoPoint, HashSet<GeoPoint>>,
  // Distinct vertices in the order they were first loaded
  vertices: Vec<GeoPoint>,
}

impl RouteGraph {
  /// Builds the adjacency from a graph description.
  ///
  /// Fails if the declared counts don't match the records, if a coordinate isn't finite or if an
  /// edge points outside the vertex list. Records that share coordinates collapse into one vertex.
  pub fn build(description: &GraphDescription) -> Result<Self, LoadError> {
    description.check_counts()?;

    let mut graph = RouteGraph {
      adjacency: HashMap::with_capacity(description.vertices.len()),
      vertices: Vec::with_capacity(description.vertices.len()),
    };

    let mut positions = Vec::with_capacity(description.vertices.len());
    for (i, record) in description.vertices.iter().enumerate() {
      if !record.lat.is_finite() || !record.lon.is_finite() {
        return Err(LoadError::Malformed {
          // Vertex records start on the second line of a graph file
          line: i + 2,
          message: format!("vertex '{}' has non-finite coordinates", record.name),
        });
      }
      let position = record.position();
      graph.add_vertex(position);
      positions.push(position);
    }

    for (i, edge) in description.edges.iter().enumerate() {
      let lookup = |index: usize| {
        positions
          .get(index)
          .copied()
          .ok_or(LoadError::VertexOutOfRange {
            edge: i,
            index,
            vertices: positions.len(),
          })
      };
      let from = lookup(edge.from)?;
      let to = lookup(edge.to)?;
      graph.add_edge(from, to);
    }

    debug!(
      vertices = graph.number_of_vertices(),
      edges = graph.number_of_edges(),
      "built route graph"
    );
    Ok(graph)
  }

  fn add_vertex(&mut self, vertex: GeoPoint) {
    if !self.adjacency.contains_key(&vertex) {
      self.adjacency.insert(vertex, HashSet::new());
      self.vertices.push(vertex);
    }
  }

  // Both endpoints must already be vertices
  fn add_edge(&mut self, from: GeoPoint, to: GeoPoint) {
    if from == to {
      warn!(vertex = %from, "dropping self-loop");
      return;
    }
    if let Some(neighbors) = self.adjacency.get_mut(&from) {
      neighbors.insert(to);
    }
    if let Some(neighbors) = self.adjacency.get_mut(&to) {
      neighbors.insert(from);
    }
  }

  pub fn number_of_vertices(&self) -> usize {
    self.vertices.len()
  }

  pub fn number_of_edges(&self) -> usize {
    self.adjacency.values().map(|n| n.len()).sum::<usize>() / 2
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn contains(&self, point: &GeoPoint) -> bool {
    self.adjacency.contains_key(point)
  }

  /// All vertices, in load order.
  pub fn vertices(&self) -> impl Iterator<Item = GeoPoint> + '_ {
    self.vertices.iter().copied()
  }

  /// Vertices sharing an edge with `point`. Empty when `point` isn't a vertex.
  pub fn neighbors(&self, point: &GeoPoint) -> impl Iterator<Item = GeoPoint> + '_ {
    self.adjacency.get(point).into_iter().flatten().copied()
  }

  /// Every edge exactly once as `(a, b)` with `a < b`, sorted.
  pub fn edges(&self) -> Vec<(GeoPoint, GeoPoint)> {
    let mut edges: Vec<_> = self
      .adjacency
      .iter()
      .flat_map(|(&from, neighbors)| {
        neighbors
          .iter()
          .filter(move |&&to| from < to)
          .map(move |&to| (from, to))
      })
      .collect();
    edges.sort();
    edges
  }

  /// The vertex closest to `point`, which doesn't have to be part of the graph.
  ///
  /// Vertices are scanned in load order and the first one at the minimum distance wins.
  pub fn nearest_point(&self, point: &GeoPoint) -> Result<GeoPoint, GraphError> {
    let mut nearest: Option<(GeoPoint, f64)> = None;
    for &vertex in &self.vertices {
      let distance = point.distance(&vertex);
      let closer = match nearest {
        None => true,
        Some((_, best)) => distance < best,
      };
      if closer {
        nearest = Some((vertex, distance));
      }
    }
    nearest.map(|(vertex, _)| vertex).ok_or(GraphError::EmptyGraph)
  }

  /// Returns true if `to` can be reached from `from` by following edges.
  ///
  /// Points that aren't vertices are never connected. A vertex is always connected to itself.
  pub fn connected(&self, from: &GeoPoint, to: &GeoPoint) -> bool {
    is_reachable(self, *from, *to)
  }

  /// The shortest path `[start, ..., end]` by great-circle distance.
  pub fn route(&self, start: &GeoPoint, end: &GeoPoint) -> Result<Vec<GeoPoint>, GraphError> {
    Ok(route(self, *start, *end)?.ids)
  }

  /// Total length in miles of a sequence of points, see [`route_distance`].
  pub fn route_distance(&self, points: &[GeoPoint]) -> Result<f64, GraphError> {
    route_distance(points)
  }

  /// Snaps two arbitrary points to their nearest vertices and routes between them.
  pub fn snap_and_route(
    &self,
    from: &GeoPoint,
    to: &GeoPoint,
  ) -> Result<Route<Miles, GeoPoint>, GraphError> {
    let start = self.nearest_point(from)?;
    let end = self.nearest_point(to)?;
    debug!(from = %from, start = %start, to = %to, end = %end, "snapped waypoints");
    let route = route(self, start, end)?;
    debug_assert_eq!(calculate_weight(self, route.ids.iter().copied()), route.cost);
    Ok(route)
  }
}

impl GraphBase for RouteGraph {
  type NodeId = GeoPoint;
}

impl<'a> IntoNeighbors for &'a RouteGraph {
  type Neighbors = std::iter::Copied<
    std::iter::Flatten<std::option::IntoIter<&'a HashSet<GeoPoint>>>,
  >;

  fn neighbors(self, node_id: GeoPoint) -> Self::Neighbors {
    self.adjacency.get(&node_id).into_iter().flatten().copied()
  }

  fn contains(self, node_id: GeoPoint) -> bool {
    self.adjacency.contains_key(&node_id)
  }
}

impl Weighted for RouteGraph {
  type Weight = Miles;

  fn transition_weight(&self, from: GeoPoint, to: GeoPoint) -> Miles {
    OrderedFloat(from.distance(&to))
  }
}
