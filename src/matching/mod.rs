//! Text normalization and TF-IDF nearest-neighbor matching

pub mod engine;
pub mod knn;
pub mod lexicon;
pub mod normalizer;
pub mod vectorizer;

pub use engine::{JobMatch, MatchEngine};
pub use knn::{Neighbor, NeighborIndex};
pub use normalizer::TextNormalizer;
pub use vectorizer::VectorSpaceModel;
