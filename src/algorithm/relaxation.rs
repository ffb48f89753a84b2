use std::fmt::Debug;
use std::time::{Duration, Instant};
use num_traits::Float;
use rayon::prelude::*;

use crate::matrix::{DistanceMatrix, NextHopMatrix};
use crate::{Error, Result};

/// How the (i, j) sweep for each intermediate vertex is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelaxationMode {
    /// Plain triple loop on the calling thread
    #[default]
    Sequential,
    /// Rows of the (i, j) sweep are split across the rayon pool; every
    /// intermediate vertex k still waits for the previous one to finish
    Parallel,
}

/// Summary of one relaxation run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RelaxationStats {
    /// Number of (i, j) entries improved
    pub updates: usize,
    /// Wall time spent relaxing
    pub elapsed: Duration,
}

/// Floyd-Warshall relaxation over a distance / next-hop matrix pair.
///
/// For every intermediate `k` in order, every pair `(i, j)` with finite
/// `D[i][k]` and `D[k][j]` is improved to `D[i][k] + D[k][j]` when that is
/// strictly smaller, and `NextHop[i][j]` follows `NextHop[i][k]` in the same
/// step. Infinite operands are skipped, never added, and a sum that leaves
/// the range of `W` is not recorded, so such pairs stay unreachable.
///
/// Negative weights are allowed. Negative-weight cycles are not detected: the
/// run still ends after `n` rounds but distances through such a cycle are
/// meaningless. Without negative cycles both modes give identical matrices.
#[derive(Debug, Clone, Default)]
pub struct RelaxationEngine {
    mode: RelaxationMode,
}

impl RelaxationEngine {
    /// Creates a sequential engine
    pub fn new() -> Self {
        RelaxationEngine {
            mode: RelaxationMode::Sequential,
        }
    }

    /// Set the execution mode
    pub fn with_mode(mut self, mode: RelaxationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> RelaxationMode {
        self.mode
    }

    /// Relaxes both matrices in place.
    ///
    /// Running it again on already relaxed matrices changes nothing and
    /// reports zero updates. Matrices of different sizes fail with
    /// [`Error::SizeMismatch`].
    pub fn relax<W>(&self, distances: &mut DistanceMatrix<W>, next_hops: &mut NextHopMatrix) -> Result<RelaxationStats>
    where
        W: Float + Debug + Send + Sync,
    {
        if distances.size() != next_hops.size() {
            return Err(Error::SizeMismatch {
                distances: distances.size(),
                next_hops: next_hops.size(),
            });
        }
        Ok(self.relax_matched(distances, next_hops))
    }

    /// Relaxation for a pair built together by [`crate::matrix::initialize`]
    pub(crate) fn relax_matched<W>(&self, distances: &mut DistanceMatrix<W>, next_hops: &mut NextHopMatrix) -> RelaxationStats
    where
        W: Float + Debug + Send + Sync,
    {
        let n = distances.size();
        let start = Instant::now();
        let updates = match self.mode {
            RelaxationMode::Sequential => relax_sequential(distances.as_mut_slice(), next_hops.as_mut_slice(), n),
            RelaxationMode::Parallel => relax_parallel(distances.as_mut_slice(), next_hops.as_mut_slice(), n),
        };
        let elapsed = start.elapsed();

        log::info!(
            "relaxed {} vertices ({:?}): {} updates in {:?}",
            n,
            self.mode,
            updates,
            elapsed
        );

        RelaxationStats { updates, elapsed }
    }
}

fn relax_sequential<W>(dist: &mut [W], next: &mut [Option<usize>], n: usize) -> usize
where
    W: Float + Debug,
{
    let mut updates = 0;

    for k in 0..n {
        for i in 0..n {
            // An infinite D[i][k] cannot become finite within this row
            if !dist[i * n + k].is_finite() {
                continue;
            }

            for j in 0..n {
                let d_kj = dist[k * n + j];
                if !d_kj.is_finite() {
                    continue;
                }

                let candidate = dist[i * n + k] + d_kj;
                if candidate.is_finite() && candidate < dist[i * n + j] {
                    dist[i * n + j] = candidate;
                    next[i * n + j] = next[i * n + k];
                    updates += 1;
                }
            }
        }
    }

    updates
}

fn relax_parallel<W>(dist: &mut [W], next: &mut [Option<usize>], n: usize) -> usize
where
    W: Float + Debug + Send + Sync,
{
    if n == 0 {
        return 0;
    }

    let mut updates = 0;

    for k in 0..n {
        // Row k only moves during round k if D[k][k] < 0, i.e. on a negative cycle
        let row_k: Vec<W> = dist[k * n..(k + 1) * n].to_vec();

        updates += dist
            .par_chunks_mut(n)
            .zip(next.par_chunks_mut(n))
            .map(|(d_row, hop_row)| {
                if !d_row[k].is_finite() {
                    return 0;
                }

                let mut local = 0;
                for (j, &d_kj) in row_k.iter().enumerate() {
                    if !d_kj.is_finite() {
                        continue;
                    }

                    let candidate = d_row[k] + d_kj;
                    if candidate.is_finite() && candidate < d_row[j] {
                        d_row[j] = candidate;
                        hop_row[j] = hop_row[k];
                        local += 1;
                    }
                }
                local
            })
            .sum::<usize>();
    }

    updates
}
