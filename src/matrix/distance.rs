use std::fmt::Debug;
use num_traits::Float;

use crate::Result;

/// Dense n x n table of best-known distances, stored row-major.
///
/// `W::infinity()` is the "no known path" sentinel. Any value that is not
/// finite is treated as the sentinel by [`DistanceMatrix::is_finite`], so it
/// is never used as an operand of a sum.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<W>
where
    W: Float + Debug,
{
    size: usize,
    values: Vec<W>,
}

impl<W> DistanceMatrix<W>
where
    W: Float + Debug,
{
    /// Creates a matrix with zero diagonal and every other entry at infinity.
    ///
    /// Fails with [`crate::Error::TooManyVertices`] instead of overflowing or
    /// aborting when the table cannot be allocated.
    pub fn try_new(size: usize) -> Result<Self> {
        let mut values = super::filled(size, W::infinity())?;
        for i in 0..size {
            values[i * size + i] = W::zero();
        }
        Ok(DistanceMatrix { size, values })
    }

    /// Number of vertices (rows)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw entry, sentinel included. Panics if `i` or `j` is out of range.
    pub fn get(&self, i: usize, j: usize) -> W {
        assert!(i < self.size && j < self.size, "index ({}, {}) out of range", i, j);
        self.values[i * self.size + j]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: W) {
        self.values[i * self.size + j] = value;
    }

    /// Distance from `i` to `j`, or `None` when no path is known
    pub fn distance(&self, i: usize, j: usize) -> Option<W> {
        if i >= self.size || j >= self.size {
            return None;
        }
        let value = self.values[i * self.size + j];
        if value.is_finite() {
            Some(value)
        } else {
            None
        }
    }

    /// True when a path from `i` to `j` is known
    pub fn is_finite(&self, i: usize, j: usize) -> bool {
        self.distance(i, j).is_some()
    }

    /// Row `i`, indexed by destination
    pub fn row(&self, i: usize) -> &[W] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// All entries, row-major
    pub fn as_slice(&self) -> &[W] {
        &self.values
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [W] {
        &mut self.values
    }

    /// Number of ordered pairs `i != j` with a known path
    pub fn reachable_pairs(&self) -> usize {
        let n = self.size;
        (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .filter(|&(i, j)| i != j && self.values[i * n + j].is_finite())
            .count()
    }
}
