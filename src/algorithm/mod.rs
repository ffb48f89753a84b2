pub mod traits;
pub mod relaxation;
pub mod path;
pub mod floyd_warshall;

pub use traits::AllPairsShortestPaths;
pub use floyd_warshall::{FloydWarshall, PairDistance};
pub use path::{Path, PathReconstructor};
pub use relaxation::{RelaxationEngine, RelaxationMode, RelaxationStats};
