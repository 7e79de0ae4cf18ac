//! TF-IDF vector space model fitted once over the job corpus

use crate::error::{JobFitError, Result};
use ndarray::{Array1, Array2};
use std::collections::{HashMap, HashSet};

/// Maximum number of vocabulary terms kept when fitting.
pub const MAX_FEATURES: usize = 5000;

/// Fitted vocabulary with per-term inverse document frequencies.
///
/// Fit exactly once at startup; every later `transform` uses the same
/// vocabulary. Out-of-vocabulary tokens are silently dropped, never added.
#[derive(Debug, Clone)]
pub struct VectorSpaceModel {
    terms: Vec<String>,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl VectorSpaceModel {
    /// Fit a vocabulary over normalized documents (whitespace-separated tokens).
    ///
    /// Terms are capped at `max_features`, selected by total corpus frequency
    /// with ties broken lexicographically; feature indices are then assigned
    /// in lexicographic term order. Fitting the same corpus twice yields
    /// bit-identical models.
    pub fn fit(documents: &[String], max_features: usize) -> Result<Self> {
        if documents.is_empty() {
            return Err(JobFitError::EmptyCorpus(
                "cannot fit a vector space over zero documents".to_string(),
            ));
        }

        let mut corpus_freq: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();

        for doc in documents {
            let mut seen: HashSet<&str> = HashSet::new();
            for token in doc.split_whitespace() {
                *corpus_freq.entry(token).or_insert(0) += 1;
                if seen.insert(token) {
                    *doc_freq.entry(token).or_insert(0) += 1;
                }
            }
        }

        if corpus_freq.is_empty() {
            return Err(JobFitError::EmptyCorpus(
                "corpus yields zero vocabulary terms after normalization".to_string(),
            ));
        }

        // Frequency-descending, then lexicographic, so the cap is deterministic
        let mut ranked: Vec<(&str, usize)> = corpus_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(max_features);

        let mut terms: Vec<String> = ranked.into_iter().map(|(t, _)| t.to_string()).collect();
        terms.sort();

        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        // Smoothed idf, as if one extra document contained every term once
        let n_docs = documents.len() as f32;
        let idf = terms
            .iter()
            .map(|t| {
                let df = doc_freq.get(t.as_str()).copied().unwrap_or(0) as f32;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        Ok(Self {
            terms,
            vocabulary,
            idf,
        })
    }

    /// Fit the model and return it along with the weighted corpus matrix
    /// (row i corresponds to document i).
    pub fn fit_transform(documents: &[String], max_features: usize) -> Result<(Self, Array2<f32>)> {
        let model = Self::fit(documents, max_features)?;

        let mut matrix = Array2::zeros((documents.len(), model.dimension()));
        for (row, doc) in documents.iter().enumerate() {
            matrix.row_mut(row).assign(&model.transform(doc));
        }

        Ok((model, matrix))
    }

    /// Project a normalized document into the fitted space: raw term count
    /// weighted by idf, then L2-normalized. A document with no in-vocabulary
    /// tokens maps to the zero vector.
    pub fn transform(&self, document: &str) -> Array1<f32> {
        let mut vector: Array1<f32> = Array1::zeros(self.dimension());

        for token in document.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(token) {
                vector[index] += self.idf[index];
            }
        }

        let norm = vector.dot(&vector).sqrt();
        if norm > 0.0 {
            vector /= norm;
        }
        vector
    }

    /// Number of feature dimensions (vocabulary size).
    pub fn dimension(&self) -> usize {
        self.terms.len()
    }

    /// Vocabulary terms in feature-index order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}
