//! Match report data model

use crate::matching::JobMatch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs to render a match run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub generated_at: DateTime<Utc>,
    pub resume_path: String,
    pub catalog_size: usize,
    pub vocabulary_size: usize,
    pub matches: Vec<JobMatch>,
    pub chart: Vec<ChartSlice>,
}

/// One slice of the proportional similarity chart: the job's share of the
/// total returned similarity, as a percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSlice {
    pub title: String,
    pub share: f32,
}

impl MatchReport {
    pub fn new(
        resume_path: String,
        catalog_size: usize,
        vocabulary_size: usize,
        matches: Vec<JobMatch>,
    ) -> Self {
        let chart = Self::chart_slices(&matches);
        Self {
            generated_at: Utc::now(),
            resume_path,
            catalog_size,
            vocabulary_size,
            matches,
            chart,
        }
    }

    /// Proportional shares of the returned similarities. A fully degenerate
    /// result (all similarities zero) yields zero-share slices rather than a
    /// division by zero.
    fn chart_slices(matches: &[JobMatch]) -> Vec<ChartSlice> {
        let total: f32 = matches.iter().map(|m| m.similarity).sum();

        matches
            .iter()
            .map(|m| ChartSlice {
                title: m.title.clone(),
                share: if total > 0.0 {
                    m.similarity / total * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }

    /// The highest-ranked match, if any.
    pub fn top_match(&self) -> Option<&JobMatch> {
        self.matches.first()
    }
}
