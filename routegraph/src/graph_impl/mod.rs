//! Graph data structures.
//!
//! [`RouteGraph`] is an undirected graph of [`GeoPoint`](crate::spatial::GeoPoint)s built in a
//! single pass from a [`GraphDescription`] and never modified afterwards.

mod description;
mod route_graph;

pub use description::*;
pub use route_graph::*;
