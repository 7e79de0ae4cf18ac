//! Job catalog: the static table of postings the engine matches against

use crate::error::{JobFitError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One catalog row, loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Job Title")]
    pub title: String,
    #[serde(rename = "Skills")]
    pub skills: String,
}

/// Immutable catalog of job postings.
///
/// Row order is preserved from the source file; it fixes the index alignment
/// used by the corpus matrix and neighbor index.
pub struct JobCatalog {
    records: Vec<JobRecord>,
    by_title: HashMap<String, usize>,
}

impl JobCatalog {
    /// Load the catalog from a CSV file with "Job Title" and "Skills" columns.
    ///
    /// An unreadable or empty catalog is fatal: the process must not serve
    /// queries without one.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            JobFitError::Catalog(format!("cannot open catalog '{}': {}", path.display(), e))
        })?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: JobRecord = row?;
            records.push(record);
        }

        info!("Loaded {} job records from {}", records.len(), path.display());
        Self::from_records(records)
    }

    /// Build a catalog from in-memory records. Empty catalogs are rejected.
    pub fn from_records(records: Vec<JobRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(JobFitError::EmptyCorpus(
                "job catalog contains no records".to_string(),
            ));
        }

        // First occurrence wins when a title repeats
        let mut by_title = HashMap::new();
        for (index, record) in records.iter().enumerate() {
            by_title.entry(record.title.clone()).or_insert(index);
        }

        Ok(Self { records, by_title })
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Skills text for a job title, if the catalog has it.
    pub fn skills_for(&self, title: &str) -> Option<&str> {
        self.by_title
            .get(title)
            .map(|&index| self.records[index].skills.as_str())
    }

    /// All distinct job titles in alphabetical order.
    pub fn titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.by_title.keys().map(String::as_str).collect();
        titles.sort_unstable();
        titles
    }

    /// One page of the alphabetical title listing (pages are zero-based).
    pub fn title_page(&self, page: usize, page_size: usize) -> Vec<&str> {
        self.titles()
            .into_iter()
            .skip(page.saturating_mul(page_size))
            .take(page_size)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> JobCatalog {
        JobCatalog::from_records(vec![
            JobRecord {
                title: "Nurse".to_string(),
                skills: "patient care skill".to_string(),
            },
            JobRecord {
                title: "Chef".to_string(),
                skills: "cooking knife skill".to_string(),
            },
            JobRecord {
                title: "Data Analyst".to_string(),
                skills: "python sql excel".to_string(),
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_load_from_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Job Title,Skills").unwrap();
        writeln!(file, "Data Analyst,\"python, sql, excel\"").unwrap();
        writeln!(file, "Chef,\"cooking, knife skill\"").unwrap();
        file.flush().unwrap();

        let catalog = JobCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].title, "Data Analyst");
        assert_eq!(catalog.skills_for("Chef"), Some("cooking, knife skill"));
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Title,Description").unwrap();
        writeln!(file, "Chef,cooking").unwrap();
        file.flush().unwrap();

        assert!(JobCatalog::load(file.path()).is_err());
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Job Title,Skills").unwrap();
        file.flush().unwrap();

        assert!(JobCatalog::load(file.path()).is_err());
    }

    #[test]
    fn test_titles_sorted_and_paged() {
        let catalog = sample();
        assert_eq!(catalog.titles(), vec!["Chef", "Data Analyst", "Nurse"]);
        assert_eq!(catalog.title_page(0, 2), vec!["Chef", "Data Analyst"]);
        assert_eq!(catalog.title_page(1, 2), vec!["Nurse"]);
        assert!(catalog.title_page(2, 2).is_empty());
    }

    #[test]
    fn test_skills_lookup() {
        let catalog = sample();
        assert_eq!(catalog.skills_for("Nurse"), Some("patient care skill"));
        assert_eq!(catalog.skills_for("Astronaut"), None);
    }
}
