use std::fmt::Debug;
use num_traits::Float;

/// In-memory list of labelled vertices and edges, kept in input order.
///
/// Vertices registered with [`EdgeBatch::vertex`] exist even when no edge
/// touches them; they are interned before any edge endpoint.
#[derive(Debug, Clone)]
pub struct EdgeBatch<L, W>
where
    W: Float + Debug,
{
    /// Vertices declared up front, in id order
    pub vertices: Vec<L>,

    /// (source, destination, weight) triples in input order
    pub edges: Vec<(L, L, W)>,
}

impl<L, W> EdgeBatch<L, W>
where
    W: Float + Debug,
{
    /// Creates an empty batch
    pub fn new() -> Self {
        EdgeBatch {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Creates a batch holding only edges
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (L, L, W)>,
    {
        EdgeBatch {
            vertices: Vec::new(),
            edges: edges.into_iter().collect(),
        }
    }

    /// Declares a vertex
    pub fn vertex(mut self, label: L) -> Self {
        self.vertices.push(label);
        self
    }

    /// Appends a directed edge
    pub fn edge(mut self, from: L, to: L, weight: W) -> Self {
        self.edges.push((from, to, weight));
        self
    }

    /// Appends a directed edge in place
    pub fn push_edge(&mut self, from: L, to: L, weight: W) {
        self.edges.push((from, to, weight));
    }

    /// Declares a vertex in place
    pub fn push_vertex(&mut self, label: L) {
        self.vertices.push(label);
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<L, W> Default for EdgeBatch<L, W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
