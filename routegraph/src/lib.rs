//! Shortest routes, reachability and nearest-vertex lookup over undirected graphs of
//! geographic points.

pub mod error;
pub mod graph;
pub mod graph_impl;
pub mod reach;
pub mod route;
pub mod search_space;
pub mod spatial;

#[cfg(test)]
mod test_utils;

pub use error::{GraphError, InvalidRouteRequest, LoadError};
pub use graph_impl::{EdgeRecord, GraphDescription, RouteGraph, VertexRecord};
pub use spatial::GeoPoint;
