//! Integration tests for jobfit

use jobfit::catalog::JobCatalog;
use jobfit::input::manager::InputManager;
use jobfit::matching::engine::MatchEngine;
use jobfit::output::report::MatchReport;
use std::io::Write;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Data Analyst"));
    assert!(text.contains("Python"));
    assert!(text.contains("SQL"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Python"));
    assert!(text.contains("SQL"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let mut file = tempfile::Builder::new().suffix(".xyz").tempfile().unwrap();
    writeln!(file, "some content").unwrap();

    let result = manager.extract_text(file.path()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_end_to_end_resume_match() {
    let catalog = JobCatalog::load(Path::new("tests/fixtures/jobs.csv")).unwrap();
    let engine = MatchEngine::build(&catalog).unwrap();

    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let normalized = engine.normalize(&resume_text);
    assert!(engine.is_plausible_resume(&normalized));

    let matches = engine.query_normalized(&normalized, 3).unwrap();
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0].title, "Data Analyst");
    assert!(matches
        .windows(2)
        .all(|w| w[0].similarity >= w[1].similarity));
    assert!(matches
        .iter()
        .all(|m| m.similarity >= 0.0 && m.similarity <= 1.0 + 1e-6));
}

#[tokio::test]
async fn test_non_resume_text_fails_plausibility_gate() {
    let catalog = JobCatalog::load(Path::new("tests/fixtures/jobs.csv")).unwrap();
    let engine = MatchEngine::build(&catalog).unwrap();

    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    writeln!(file, "Shopping list: eggs, milk, bread, coffee").unwrap();
    file.flush().unwrap();

    let mut manager = InputManager::new();
    let text = manager.extract_text(file.path()).await.unwrap();

    let normalized = engine.normalize(&text);
    assert!(!engine.is_plausible_resume(&normalized));
}

#[tokio::test]
async fn test_report_chart_matches_query_results() {
    let catalog = JobCatalog::load(Path::new("tests/fixtures/jobs.csv")).unwrap();
    let engine = MatchEngine::build(&catalog).unwrap();

    let matches = engine
        .query("my skill set: python sql excel statistics", 2)
        .unwrap();
    let report = MatchReport::new(
        "resume.txt".to_string(),
        engine.corpus_size(),
        engine.vocabulary_size(),
        matches,
    );

    assert_eq!(report.chart.len(), 2);
    let total_share: f32 = report.chart.iter().map(|s| s.share).sum();
    assert!((total_share - 100.0).abs() < 1e-3);
    assert_eq!(report.top_match().unwrap().title, report.chart[0].title);
}
