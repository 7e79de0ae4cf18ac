//! Jobfit library: resume-to-job matching with TF-IDF and cosine KNN

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matching;
pub mod output;

pub use catalog::{JobCatalog, JobRecord};
pub use config::Config;
pub use error::{JobFitError, Result};
pub use matching::engine::{JobMatch, MatchEngine};
