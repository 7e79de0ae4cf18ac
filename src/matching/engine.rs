//! Match engine: the build-once, query-many facade over the pipeline

use crate::catalog::JobCatalog;
use crate::error::Result;
use crate::matching::knn::{NeighborIndex, DEFAULT_NEIGHBORS};
use crate::matching::normalizer::TextNormalizer;
use crate::matching::vectorizer::{VectorSpaceModel, MAX_FEATURES};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Substrings the normalized resume text must contain to be treated as a
/// resume at all. A deliberately weak gate; callers branch on the result
/// instead of failing.
const REQUIRED_TERMS: &[&str] = &["skill"];

/// One scored catalog row returned by a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub title: String,
    pub skills: String,
    pub similarity: f32,
}

/// Immutable matching engine built once at startup.
///
/// `build` is the exclusive construction phase: it normalizes the whole
/// catalog, fits the vector space, and freezes the neighbor index. Everything
/// afterwards is `&self` and safe to share across concurrent callers.
pub struct MatchEngine {
    normalizer: TextNormalizer,
    model: VectorSpaceModel,
    index: NeighborIndex,
    records: Vec<(String, String)>,
}

impl MatchEngine {
    /// Build the engine from a loaded catalog with default sizing.
    pub fn build(catalog: &JobCatalog) -> Result<Self> {
        Self::with_options(catalog, MAX_FEATURES, DEFAULT_NEIGHBORS)
    }

    pub fn with_options(
        catalog: &JobCatalog,
        max_features: usize,
        n_neighbors: usize,
    ) -> Result<Self> {
        let normalizer = TextNormalizer::new();

        let documents: Vec<String> = catalog
            .records()
            .iter()
            .map(|record| normalizer.normalize(&record.skills))
            .collect();

        let (model, matrix) = VectorSpaceModel::fit_transform(&documents, max_features)?;
        info!(
            "Fitted vector space: {} records, {} terms",
            catalog.len(),
            model.dimension()
        );

        let index = NeighborIndex::fit(matrix, n_neighbors);

        let records = catalog
            .records()
            .iter()
            .map(|record| (record.title.clone(), record.skills.clone()))
            .collect();

        Ok(Self {
            normalizer,
            model,
            index,
            records,
        })
    }

    /// Normalize raw text with the engine's pipeline.
    pub fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    /// Weak heuristic gate against non-resume uploads: the normalized text
    /// must contain "skill" somewhere. False is an expected outcome, not an
    /// error.
    pub fn is_plausible_resume(&self, normalized: &str) -> bool {
        REQUIRED_TERMS.iter().any(|term| normalized.contains(term))
    }

    /// Match raw resume text against the catalog.
    ///
    /// Returns the `min(k, catalog size)` closest rows by cosine distance,
    /// each scored with `similarity = 1 - distance`. A resume with no
    /// in-vocabulary tokens is at distance 1.0 from every row and ranks the
    /// catalog in stable row order.
    pub fn query(&self, raw_resume: &str, k: usize) -> Result<Vec<JobMatch>> {
        let normalized = self.normalizer.normalize(raw_resume);
        self.query_normalized(&normalized, k)
    }

    /// Match already-normalized resume text against the catalog.
    pub fn query_normalized(&self, normalized: &str, k: usize) -> Result<Vec<JobMatch>> {
        let vector = self.model.transform(normalized);
        debug!(
            "Query vector: {} of {} terms recognized",
            vector.iter().filter(|&&w| w > 0.0).count(),
            self.model.dimension()
        );

        let matches = self
            .index
            .kneighbors(&vector.view(), k)
            .into_iter()
            .map(|neighbor| {
                let (title, skills) = &self.records[neighbor.index];
                JobMatch {
                    title: title.clone(),
                    skills: skills.clone(),
                    similarity: 1.0 - neighbor.distance,
                }
            })
            .collect();

        Ok(matches)
    }

    /// Number of catalog rows behind the index.
    pub fn corpus_size(&self) -> usize {
        self.records.len()
    }

    /// Vocabulary size of the fitted model.
    pub fn vocabulary_size(&self) -> usize {
        self.model.dimension()
    }
}
