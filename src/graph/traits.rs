use std::fmt::Debug;
use num_traits::Float;

use crate::graph::EdgeBatch;
use crate::Result;

/// Source of the edges a distance matrix is built from.
///
/// Implementations own the storage format; the engine only ever sees the
/// labelled triples in input order, so duplicate edges resolve as
/// last-write-wins downstream.
pub trait EdgeIngestor<L, W>
where
    W: Float + Debug,
{
    /// Consumes the source and returns its vertices and edges in input order
    fn ingest(self) -> Result<EdgeBatch<L, W>>;
}

impl<L, W> EdgeIngestor<L, W> for Vec<(L, L, W)>
where
    W: Float + Debug,
{
    fn ingest(self) -> Result<EdgeBatch<L, W>> {
        Ok(EdgeBatch::from_edges(self))
    }
}

impl<L, W> EdgeIngestor<L, W> for EdgeBatch<L, W>
where
    W: Float + Debug,
{
    fn ingest(self) -> Result<EdgeBatch<L, W>> {
        Ok(self)
    }
}
