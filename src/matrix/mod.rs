pub mod distance;
pub mod next_hop;

pub use distance::DistanceMatrix;
pub use next_hop::NextHopMatrix;

use std::fmt::Debug;
use num_traits::Float;

use crate::{Error, Result};

/// Builds the initial distance and next-hop matrices for `size` vertices.
///
/// The diagonal is zero, every edge `u -> v` sets `D[u][v]` to its weight and
/// the hop to `v`, and all other pairs start at infinity. Edges are applied
/// in order, so the last edge for a pair wins. Self-loops never touch the
/// diagonal, and a non-finite weight resets the pair to "no path".
///
/// Fails with [`Error::TooManyVertices`] when `size * size` cells cannot be
/// addressed or allocated.
pub fn initialize<W>(size: usize, edges: &[(usize, usize, W)]) -> Result<(DistanceMatrix<W>, NextHopMatrix)>
where
    W: Float + Debug,
{
    let mut distances = DistanceMatrix::try_new(size)?;
    let mut next_hops = NextHopMatrix::try_new(size)?;
    let mut self_loops = 0;
    let mut overwritten = 0;

    for &(from, to, weight) in edges {
        if from >= size || to >= size {
            return Err(Error::InvalidEdge(from, to));
        }
        if from == to {
            self_loops += 1;
            continue;
        }
        if next_hops.get(from, to).is_some() {
            overwritten += 1;
        }

        if weight.is_finite() {
            distances.set(from, to, weight);
            next_hops.set(from, to, Some(to));
        } else {
            distances.set(from, to, W::infinity());
            next_hops.set(from, to, None);
        }
    }

    log::debug!(
        "initialized {}x{} matrices from {} edges ({} self-loops ignored, {} duplicates overwritten)",
        size,
        size,
        edges.len(),
        self_loops,
        overwritten
    );

    Ok((distances, next_hops))
}

/// Cell count of a `size` x `size` matrix of `T`, if its byte size fits in
/// `isize`
pub(crate) fn cell_count<T>(size: usize) -> Result<usize> {
    size.checked_mul(size)
        .filter(|cells| {
            cells
                .checked_mul(std::mem::size_of::<T>())
                .map_or(false, |bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(Error::TooManyVertices(size))
}

/// Allocates `size * size` copies of `value` without aborting on failure
pub(crate) fn filled<T: Clone>(size: usize, value: T) -> Result<Vec<T>> {
    let cells = cell_count::<T>(size)?;
    let mut values = Vec::new();
    values
        .try_reserve_exact(cells)
        .map_err(|_| Error::TooManyVertices(size))?;
    values.resize(cells, value);
    Ok(values)
}
