use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::algorithm::path::{Path, PathReconstructor};
use crate::algorithm::relaxation::{RelaxationEngine, RelaxationMode, RelaxationStats};
use crate::algorithm::traits::AllPairsShortestPaths;
use crate::graph::{EdgeBatch, EdgeIngestor, VertexIndex};
use crate::matrix::{self, DistanceMatrix, NextHopMatrix};
use crate::{Error, Result};

/// All-pairs shortest paths over labelled vertices.
///
/// Built once from an [`EdgeIngestor`], relaxed once by
/// [`FloydWarshall::generate_distance_matrix`], then queried any number of
/// times. Queries take `&self`, so a relaxed instance can be shared across
/// threads for reading.
#[derive(Debug, Clone)]
pub struct FloydWarshall<L, W>
where
    L: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    index: VertexIndex<L>,
    distances: DistanceMatrix<W>,
    next_hops: NextHopMatrix,
    engine: RelaxationEngine,
    relaxed: bool,
}

/// One ordered pair of distinct vertices and its current distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairDistance<'a, L, W> {
    pub source: usize,
    pub target: usize,
    pub from: &'a L,
    pub to: &'a L,
    /// `None` when no path is known
    pub distance: Option<W>,
}

impl<L, W> FloydWarshall<L, W>
where
    L: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Interns every vertex and builds the initial matrices.
    ///
    /// Declared vertices get the first ids, then edge endpoints in the order
    /// they appear (source before destination).
    pub fn from_ingestor<I>(ingestor: I) -> Result<Self>
    where
        I: EdgeIngestor<L, W>,
    {
        let batch = ingestor.ingest()?;
        let mut index = VertexIndex::with_capacity(batch.vertices.len());

        for label in batch.vertices {
            index.intern(label);
        }

        let edges: Vec<(usize, usize, W)> = batch
            .edges
            .into_iter()
            .map(|(from, to, weight)| {
                let u = index.intern(from);
                let v = index.intern(to);
                (u, v, weight)
            })
            .collect();

        let (distances, next_hops) = matrix::initialize(index.size(), &edges)?;

        log::debug!("ingested {} vertices and {} edges", index.size(), edges.len());

        Ok(FloydWarshall {
            index,
            distances,
            next_hops,
            engine: RelaxationEngine::new(),
            relaxed: false,
        })
    }

    /// Builds from `(source, destination, weight)` triples in input order
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, L, W)>,
    {
        Self::from_ingestor(EdgeBatch::from_edges(edges))
    }

    /// Set the relaxation mode used by [`FloydWarshall::generate_distance_matrix`]
    pub fn with_mode(mut self, mode: RelaxationMode) -> Self {
        self.engine = self.engine.with_mode(mode);
        self
    }

    pub fn is_relaxed(&self) -> bool {
        self.relaxed
    }

    pub fn vertex_index(&self) -> &VertexIndex<L> {
        &self.index
    }

    pub fn distances(&self) -> &DistanceMatrix<W> {
        &self.distances
    }

    pub fn next_hops(&self) -> &NextHopMatrix {
        &self.next_hops
    }

    /// Shortest distance between two labels, `None` when unreachable
    pub fn distance(&self, from: &L, to: &L) -> Result<Option<W>> {
        self.distance_by_id(self.id_of(from)?, self.id_of(to)?)
    }

    /// Shortest path between two labels as a label sequence, `None` when
    /// unreachable
    pub fn path(&self, from: &L, to: &L) -> Result<Option<Vec<L>>> {
        let path = match self.path_by_id(self.id_of(from)?, self.id_of(to)?)? {
            Some(path) => path,
            None => return Ok(None),
        };

        path.vertices
            .into_iter()
            .map(|id| self.index.label(id).cloned().ok_or(Error::InvalidVertex(id)))
            .collect::<Result<Vec<L>>>()
            .map(Some)
    }

    /// Reconstructor borrowing the relaxed matrices
    pub fn reconstructor(&self) -> Result<PathReconstructor<'_, W>> {
        self.ensure_relaxed()?;
        PathReconstructor::new(&self.distances, &self.next_hops)
    }

    /// Every ordered pair of distinct vertices in row-major id order.
    ///
    /// Reflects the matrix as it currently is, so before relaxation it only
    /// shows direct edges.
    pub fn pairs(&self) -> impl Iterator<Item = PairDistance<'_, L, W>> + '_ {
        self.index.labels().enumerate().flat_map(move |(source, from)| {
            self.index
                .labels()
                .enumerate()
                .filter(move |&(target, _)| target != source)
                .map(move |(target, to)| PairDistance {
                    source,
                    target,
                    from,
                    to,
                    distance: self.distances.distance(source, target),
                })
        })
    }

    fn id_of(&self, label: &L) -> Result<usize> {
        self.index
            .id(label)
            .ok_or_else(|| Error::UnknownVertex(format!("{:?}", label)))
    }

    fn ensure_relaxed(&self) -> Result<()> {
        if self.relaxed {
            Ok(())
        } else {
            Err(Error::NotRelaxed)
        }
    }

    fn check_vertex(&self, id: usize) -> Result<()> {
        if id < self.index.size() {
            Ok(())
        } else {
            Err(Error::InvalidVertex(id))
        }
    }
}

impl<L, W> FloydWarshall<L, W>
where
    L: Clone + Eq + Hash + Debug,
    W: Float + Debug + Send + Sync,
{
    /// Runs the relaxation. Only the first call does any work; later calls
    /// return empty stats.
    pub fn generate_distance_matrix(&mut self) -> RelaxationStats {
        if self.relaxed {
            log::debug!("distance matrix already generated, skipping relaxation");
            return RelaxationStats::default();
        }

        let stats = self.engine.relax_matched(&mut self.distances, &mut self.next_hops);
        self.relaxed = true;
        stats
    }
}

impl<L, W> AllPairsShortestPaths<W> for FloydWarshall<L, W>
where
    L: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn vertex_count(&self) -> usize {
        self.index.size()
    }

    fn distance_by_id(&self, source: usize, target: usize) -> Result<Option<W>> {
        self.ensure_relaxed()?;
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        Ok(self.distances.distance(source, target))
    }

    fn path_by_id(&self, source: usize, target: usize) -> Result<Option<Path<W>>> {
        self.reconstructor()?.path(source, target)
    }
}
