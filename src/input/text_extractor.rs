//! Text extraction from resume files

use crate::error::{JobFitError, Result};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl PdfExtractor {
    /// Extract plain text from an in-memory PDF byte stream.
    ///
    /// A corrupt or non-PDF stream surfaces as a structured extraction error;
    /// downstream code treats that as "no usable text", never as a crash.
    pub fn extract_from_bytes(bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| JobFitError::PdfExtraction(format!("not a parseable PDF: {}", e)))
    }
}

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(JobFitError::Io)?;
        Self::extract_from_bytes(&bytes)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(JobFitError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await.map_err(JobFitError::Io)?;
        Ok(Self::to_plain_text(&markdown))
    }
}

impl MarkdownExtractor {
    /// Flatten markdown to plain text by walking the event stream and keeping
    /// only text and code content.
    fn to_plain_text(markdown: &str) -> String {
        let mut text = String::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Text(content) | Event::Code(content) => text.push_str(&content),
                Event::SoftBreak | Event::HardBreak => text.push(' '),
                Event::End(Tag::Paragraph)
                | Event::End(Tag::Heading(..))
                | Event::End(Tag::Item) => text.push('\n'),
                _ => {}
            }
        }

        text.trim().to_string()
    }
}
