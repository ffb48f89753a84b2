//! Dense APSP - all-pairs shortest paths over a dense distance matrix
//!
//! This library implements the Floyd-Warshall dynamic program for weighted
//! directed graphs together with a next-hop matrix, so that besides every
//! pairwise distance the concrete vertex sequence of each shortest path can be
//! recovered on demand.
//!
//! Negative edge weights are accepted. Negative-weight cycles are not detected;
//! distances between pairs reachable through one are unspecified.

pub mod algorithm;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
pub mod io;
pub mod matrix;

pub use algorithm::{
    floyd_warshall::{FloydWarshall, PairDistance},
    traits::AllPairsShortestPaths,
    path::{Path, PathReconstructor},
    relaxation::{RelaxationEngine, RelaxationMode, RelaxationStats},
};
/// Re-export main types for convenient use
pub use graph::{EdgeBatch, EdgeIngestor, VertexIndex};
pub use matrix::{DistanceMatrix, NextHopMatrix};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Unknown vertex label: {0}")]
    UnknownVertex(String),

    #[error("Distance matrix has not been generated yet")]
    NotRelaxed,

    #[error("Too many vertices for a dense matrix: {0}")]
    TooManyVertices(usize),

    #[error("Matrix size mismatch: {distances} distance rows, {next_hops} next-hop rows")]
    SizeMismatch { distances: usize, next_hops: usize },

    #[error("Cycle detected reconstructing path {from} -> {to}: vertex {vertex} visited twice")]
    CycleDetected {
        from: usize,
        to: usize,
        vertex: usize,
    },

    #[error("Broken next-hop chain reconstructing path {from} -> {to} at vertex {vertex}")]
    BrokenChain {
        from: usize,
        to: usize,
        vertex: usize,
    },

    #[error("Malformed edge list near '{token}': {message}")]
    Parse { token: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
