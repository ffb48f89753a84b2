pub mod reader;
pub mod writer;

pub use reader::{DenseEdgeListReader, EdgeListReader};
pub use writer::{DistanceReport, ReportEntry, ReportWriter};
