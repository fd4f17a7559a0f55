//! Graph algorithms
mod weights;
pub use self::weights::*;
mod shortest_path;
pub use self::shortest_path::*;
