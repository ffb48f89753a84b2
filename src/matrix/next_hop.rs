use crate::Result;

/// Dense n x n table of the vertex to step to next on the current best path.
///
/// `None` marks pairs without a known path and every diagonal entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextHopMatrix {
    size: usize,
    hops: Vec<Option<usize>>,
}

impl NextHopMatrix {
    /// Creates a matrix with no hops
    pub fn try_new(size: usize) -> Result<Self> {
        Ok(NextHopMatrix {
            size,
            hops: super::filled(size, None)?,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Vertex following `i` on the way to `j`. Panics if out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        assert!(i < self.size && j < self.size, "index ({}, {}) out of range", i, j);
        self.hops[i * self.size + j]
    }

    /// Overwrites a single hop.
    ///
    /// Public so that callers can assemble matrices by hand, e.g. to check
    /// how reconstruction handles an inconsistent chain.
    pub fn set(&mut self, i: usize, j: usize, hop: Option<usize>) {
        assert!(i < self.size && j < self.size, "index ({}, {}) out of range", i, j);
        self.hops[i * self.size + j] = hop;
    }

    pub fn row(&self, i: usize) -> &[Option<usize>] {
        &self.hops[i * self.size..(i + 1) * self.size]
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Option<usize>] {
        &mut self.hops
    }
}
