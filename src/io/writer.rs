use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::io::Write;
use num_traits::{Float, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::AllPairsShortestPaths;
use crate::algorithm::FloydWarshall;
use crate::{Error, Result};

/// Writes the plain-text distance report.
///
/// One line per ordered pair of distinct vertices, row-major:
/// `from: a to: b - 3` or `from: a to: b - INF`. With paths enabled, reachable
/// pairs get ` path: a -> c -> b` appended.
#[derive(Debug, Clone, Default)]
pub struct ReportWriter {
    with_paths: bool,
}

impl ReportWriter {
    pub fn new() -> Self {
        ReportWriter { with_paths: false }
    }

    /// Append reconstructed paths to reachable pairs
    pub fn with_paths(mut self, enabled: bool) -> Self {
        self.with_paths = enabled;
        self
    }

    pub fn write<L, W, Out>(&self, apsp: &FloydWarshall<L, W>, out: &mut Out) -> Result<()>
    where
        L: Clone + Eq + Hash + Debug + Display,
        W: Float + Debug + Display,
        Out: Write,
    {
        for pair in apsp.pairs() {
            match pair.distance {
                None => write!(out, "from: {} to: {} - INF", pair.from, pair.to)?,
                Some(distance) => write!(out, "from: {} to: {} - {}", pair.from, pair.to, distance)?,
            }

            if self.with_paths && pair.distance.is_some() {
                match consistent_path(apsp, pair.source, pair.target)? {
                    Some(path) => {
                        let rendered: Vec<String> = path.iter().map(|label| label.to_string()).collect();
                        write!(out, " path: {}", rendered.join(" -> "))?;
                    }
                    None => write!(out, " path: <inconsistent>")?,
                }
            }

            writeln!(out)?;
        }

        out.flush()?;
        Ok(())
    }
}

/// Serializable form of the whole result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceReport {
    pub algorithm: String,
    pub vertices: Vec<String>,
    pub entries: Vec<ReportEntry>,
}

/// One ordered pair in a [`DistanceReport`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub from: String,
    pub to: String,
    /// `null` when unreachable
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

impl DistanceReport {
    /// Collects every ordered pair of distinct vertices, optionally with paths
    pub fn build<L, W>(apsp: &FloydWarshall<L, W>, with_paths: bool) -> Result<Self>
    where
        L: Clone + Eq + Hash + Debug + Display,
        W: Float + Debug,
    {
        let mut entries = Vec::new();

        for pair in apsp.pairs() {
            let path = if with_paths && pair.distance.is_some() {
                consistent_path(apsp, pair.source, pair.target)?
                    .map(|labels| labels.iter().map(|label| label.to_string()).collect())
            } else {
                None
            };

            entries.push(ReportEntry {
                from: pair.from.to_string(),
                to: pair.to.to_string(),
                distance: pair.distance.and_then(|distance| distance.to_f64()),
                path,
            });
        }

        Ok(DistanceReport {
            algorithm: apsp.name().to_string(),
            vertices: apsp.vertex_index().labels().map(|label| label.to_string()).collect(),
            entries,
        })
    }

    pub fn write_json<Out: Write>(&self, out: &mut Out) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Path labels for a pair, or `None` if the matrices disagree about it
fn consistent_path<L, W>(apsp: &FloydWarshall<L, W>, source: usize, target: usize) -> Result<Option<Vec<L>>>
where
    L: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    match apsp.path_by_id(source, target) {
        Ok(Some(path)) => path
            .vertices
            .iter()
            .map(|&id| apsp.vertex_index().label(id).cloned().ok_or(Error::InvalidVertex(id)))
            .collect::<Result<Vec<L>>>()
            .map(Some),
        Ok(None) => Ok(None),
        Err(err @ Error::CycleDetected { .. }) | Err(err @ Error::BrokenChain { .. }) => {
            log::warn!("skipping path {} -> {}: {}", source, target, err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
