pub mod distance;
pub mod error;

pub use distance::{levenshtein, levenshtein_matrix, levenshtein_str, DistanceMatrix};
pub use error::{Error, Result};
