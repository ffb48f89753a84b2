use std::fmt::Debug;
use std::fs::File;
use std::io::{BufReader, Read};
use num_traits::{Float, NumCast};

use crate::graph::{EdgeBatch, EdgeIngestor};
use crate::matrix;
use crate::{Error, Result};

/// Reads the whitespace separated edge-list format:
///
/// ```text
/// 3
/// a b 1.5
/// b c 2
/// a c 10
/// ```
///
/// The first token is the number of edges, followed by that many
/// `source destination weight` triples. Labels are arbitrary tokens.
#[derive(Debug)]
pub struct EdgeListReader<R: Read> {
    reader: R,
}

impl<R: Read> EdgeListReader<R> {
    pub fn new(reader: R) -> Self {
        EdgeListReader { reader }
    }

    /// Treat labels as integer ids and register every id up to the largest
    pub fn into_dense(self) -> DenseEdgeListReader<R> {
        DenseEdgeListReader { inner: self }
    }

    fn read_triples(mut self) -> Result<Vec<(String, String, f64)>> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;

        let mut tokens = text.split_whitespace();
        let count_token = tokens
            .next()
            .ok_or_else(|| parse_error("", "missing edge count"))?;
        let count: usize = count_token
            .parse()
            .map_err(|_| parse_error(count_token, "edge count is not a non-negative integer"))?;

        let mut triples = Vec::with_capacity(count.min(1 << 16));
        for found in 0..count {
            let (from, to, weight) = match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(from), Some(to), Some(weight)) => (from, to, weight),
                _ => {
                    return Err(parse_error(
                        "<end of input>",
                        &format!("expected {} edges, found {}", count, found),
                    ))
                }
            };
            let weight: f64 = weight
                .parse()
                .map_err(|_| parse_error(weight, "weight is not a number"))?;
            triples.push((from.to_string(), to.to_string(), weight));
        }

        let trailing = tokens.count();
        if trailing > 0 {
            log::warn!("ignoring {} tokens after the {} declared edges", trailing, count);
        }

        Ok(triples)
    }
}

impl EdgeListReader<BufReader<File>> {
    /// Opens an edge-list file
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(EdgeListReader::new(BufReader::new(file)))
    }
}

impl<R, W> EdgeIngestor<String, W> for EdgeListReader<R>
where
    R: Read,
    W: Float + Debug,
{
    fn ingest(self) -> Result<EdgeBatch<String, W>> {
        let mut batch = EdgeBatch::new();
        for (from, to, weight) in self.read_triples()? {
            batch.push_edge(from, to, cast_weight(weight)?);
        }
        Ok(batch)
    }
}

/// Edge-list reader whose labels are integer ids.
///
/// Every id in `0..=max` becomes a vertex in numeric order, so ids that never
/// appear in an edge are isolated vertices. An id too large for a dense
/// matrix fails with [`Error::TooManyVertices`].
#[derive(Debug)]
pub struct DenseEdgeListReader<R: Read> {
    inner: EdgeListReader<R>,
}

impl<R, W> EdgeIngestor<usize, W> for DenseEdgeListReader<R>
where
    R: Read,
    W: Float + Debug,
{
    fn ingest(self) -> Result<EdgeBatch<usize, W>> {
        let mut batch = EdgeBatch::new();
        let mut max_vertex = None;

        for (from, to, weight) in self.inner.read_triples()? {
            let from = parse_id(&from)?;
            let to = parse_id(&to)?;
            max_vertex = max_vertex.max(Some(from.max(to)));
            batch.push_edge(from, to, cast_weight(weight)?);
        }

        if let Some(max_vertex) = max_vertex {
            let size = max_vertex
                .checked_add(1)
                .ok_or(Error::TooManyVertices(max_vertex))?;
            // Reject ids whose matrix could never be built before listing them
            matrix::cell_count::<W>(size)?;
            batch.vertices
                .try_reserve_exact(size)
                .map_err(|_| Error::TooManyVertices(size))?;
            batch.vertices.extend(0..size);
        }
        Ok(batch)
    }
}

fn parse_id(token: &str) -> Result<usize> {
    token
        .parse()
        .map_err(|_| parse_error(token, "vertex id is not a non-negative integer"))
}

fn cast_weight<W: Float>(weight: f64) -> Result<W> {
    <W as NumCast>::from(weight)
        .ok_or_else(|| parse_error(&weight.to_string(), "weight does not fit the weight type"))
}

fn parse_error(token: &str, message: &str) -> Error {
    Error::Parse {
        token: token.to_string(),
        message: message.to_string(),
    }
}
