use std::fmt::Debug;
use num_traits::Float;

use crate::algorithm::path::Path;
use crate::Result;

/// Trait for all-pairs shortest path engines queried by dense vertex id
pub trait AllPairsShortestPaths<W>
where
    W: Float + Debug,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Number of vertices covered by the distance matrix
    fn vertex_count(&self) -> usize;

    /// Shortest distance from `source` to `target`, `None` when unreachable
    fn distance_by_id(&self, source: usize, target: usize) -> Result<Option<W>>;

    /// Shortest path from `source` to `target`, `None` when unreachable
    fn path_by_id(&self, source: usize, target: usize) -> Result<Option<Path<W>>>;

    /// Row of the distance matrix for `source`, indexed by target
    fn distances_from(&self, source: usize) -> Result<Vec<Option<W>>> {
        (0..self.vertex_count())
            .map(|target| self.distance_by_id(source, target))
            .collect()
    }
}
