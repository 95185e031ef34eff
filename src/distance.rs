pub mod levenshtein;
pub mod matrix;

// Re-export the engine and its matrix type with descriptive names
pub use levenshtein::{levenshtein, levenshtein_matrix, levenshtein_str};
pub use matrix::DistanceMatrix;
