//! Set of traits for defining a graph abstraction.
//!
//! The module contains traits for defining an undirected, weighted graph. The search
//! algorithms in this crate only talk to graphs through these traits.
//!
mod graph;
mod weighted;

pub use graph::*;
pub use weighted::*;
