use crate::error::LoadError;
use crate::spatial::GeoPoint;
use serde::{Deserialize, Serialize};

/// A named vertex as it appears in a graph file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
  pub name: String,
  pub lat: f64,
  pub lon: f64,
}

impl VertexRecord {
  pub fn new<S: Into<String>>(name: S, lat: f64, lon: f64) -> Self {
    VertexRecord {
      name: name.into(),
      lat,
      lon,
    }
  }

  pub fn position(&self) -> GeoPoint {
    GeoPoint::new(self.lat, self.lon)
  }
}

/// An undirected edge between two vertices, given by their 0-based position in the vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
  pub from: usize,
  pub to: usize,
}

impl EdgeRecord {
  pub fn new(from: usize, to: usize) -> Self {
    EdgeRecord { from, to }
  }
}

/// Everything needed to build a [`RouteGraph`](super::RouteGraph): the declared counts from the
/// header plus the records that were actually read.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDescription {
  pub declared_vertices: usize,
  pub declared_edges: usize,
  pub vertices: Vec<VertexRecord>,
  pub edges: Vec<EdgeRecord>,
}

impl GraphDescription {
  /// A description whose declared counts match its records.
  pub fn new(vertices: Vec<VertexRecord>, edges: Vec<EdgeRecord>) -> Self {
    GraphDescription {
      declared_vertices: vertices.len(),
      declared_edges: edges.len(),
      vertices,
      edges,
    }
  }

  pub(crate) fn check_counts(&self) -> Result<(), LoadError> {
    if self.vertices.len() != self.declared_vertices {
      return Err(LoadError::CountMismatch {
        section: "vertices",
        declared: self.declared_vertices,
        actual: self.vertices.len(),
      });
    }
    if self.edges.len() != self.declared_edges {
      return Err(LoadError::CountMismatch {
        section: "edges",
        declared: self.declared_edges,
        actual: self.edges.len(),
      });
    }
    Ok(())
  }
}
