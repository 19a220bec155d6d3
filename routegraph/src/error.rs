//! Error types.

use thiserror::Error;

/// The graph description could not be turned into a graph.
///
/// A partially loaded graph is never handed out, so every one of these is fatal for the load.
#[derive(Debug, Error)]
pub enum LoadError {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("missing header line")]
  MissingHeader,

  #[error("line {line}: {message}")]
  Malformed { line: usize, message: String },

  #[error("expected {expected} {section} records, found only {found}")]
  Truncated {
    section: &'static str,
    expected: usize,
    found: usize,
  },

  #[error("declared {declared} {section} but {actual} were given")]
  CountMismatch {
    section: &'static str,
    declared: usize,
    actual: usize,
  },

  #[error("edge {edge} references vertex {index}, but there are only {vertices} vertices")]
  VertexOutOfRange {
    edge: usize,
    index: usize,
    vertices: usize,
  },
}

/// Why `route` refused to produce a path.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRouteRequest {
  #[error("start and end are the same point")]
  SameEndpoints,

  #[error("start and end are not connected")]
  Unreachable,
}

#[derive(Debug, Error)]
pub enum GraphError {
  #[error(transparent)]
  Load(#[from] LoadError),

  #[error("invalid route request: {0}")]
  InvalidRoute(#[from] InvalidRouteRequest),

  #[error("graph has no vertices")]
  EmptyGraph,

  #[error("route has no points")]
  EmptyRoute,
}
