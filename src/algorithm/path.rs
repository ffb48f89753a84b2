use std::fmt::Debug;
use num_traits::Float;

use crate::matrix::{DistanceMatrix, NextHopMatrix};
use crate::{Error, Result};

/// A reconstructed shortest path
#[derive(Debug, Clone, PartialEq)]
pub struct Path<W>
where
    W: Float + Debug,
{
    /// Vertex ids from source to target, both included
    pub vertices: Vec<usize>,

    /// Matrix distance the path realizes
    pub distance: W,
}

impl<W> Path<W>
where
    W: Float + Debug,
{
    pub fn source(&self) -> usize {
        self.vertices[0]
    }

    pub fn target(&self) -> usize {
        self.vertices[self.vertices.len() - 1]
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.vertices.len() - 1
    }
}

/// Read-only walker over a finalized next-hop matrix.
///
/// Borrowing both matrices immutably, any number of reconstructors can
/// answer queries concurrently.
#[derive(Debug, Clone, Copy)]
pub struct PathReconstructor<'a, W>
where
    W: Float + Debug,
{
    distances: &'a DistanceMatrix<W>,
    next_hops: &'a NextHopMatrix,
}

impl<'a, W> PathReconstructor<'a, W>
where
    W: Float + Debug,
{
    /// Fails with [`Error::SizeMismatch`] unless both matrices cover the same
    /// vertices
    pub fn new(distances: &'a DistanceMatrix<W>, next_hops: &'a NextHopMatrix) -> Result<Self> {
        if distances.size() != next_hops.size() {
            return Err(Error::SizeMismatch {
                distances: distances.size(),
                next_hops: next_hops.size(),
            });
        }
        Ok(PathReconstructor { distances, next_hops })
    }

    /// Walks the next-hop chain from `source` to `target`.
    ///
    /// Returns `Ok(None)` when `target` is unreachable. A chain that revisits
    /// a vertex fails with [`Error::CycleDetected`] and a chain that stops
    /// short with [`Error::BrokenChain`]; both mean the two matrices disagree.
    pub fn path(&self, source: usize, target: usize) -> Result<Option<Path<W>>> {
        let n = self.distances.size();
        if source >= n {
            return Err(Error::InvalidVertex(source));
        }
        if target >= n {
            return Err(Error::InvalidVertex(target));
        }

        let distance = match self.distances.distance(source, target) {
            Some(distance) => distance,
            None => return Ok(None),
        };

        let mut visited = vec![false; n];
        let mut vertices = vec![source];
        visited[source] = true;

        let mut current = source;
        while current != target {
            let hop = match self.next_hops.get(current, target) {
                Some(hop) if hop < n => hop,
                _ => {
                    log::warn!(
                        "next-hop chain {} -> {} breaks at vertex {}",
                        source,
                        target,
                        current
                    );
                    return Err(Error::BrokenChain {
                        from: source,
                        to: target,
                        vertex: current,
                    });
                }
            };

            if visited[hop] {
                log::warn!(
                    "next-hop chain {} -> {} revisits vertex {}",
                    source,
                    target,
                    hop
                );
                return Err(Error::CycleDetected {
                    from: source,
                    to: target,
                    vertex: hop,
                });
            }

            visited[hop] = true;
            vertices.push(hop);
            current = hop;
        }

        Ok(Some(Path { vertices, distance }))
    }
}
