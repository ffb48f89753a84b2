pub mod traits;
pub mod batch;
pub mod vertex_index;
pub mod generators;

pub use traits::EdgeIngestor;
pub use batch::EdgeBatch;
pub use vertex_index::VertexIndex;
