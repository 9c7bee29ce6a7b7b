//! Input manager for resume documents and job descriptions

use crate::error::{AtsError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use crate::processing::document::ResumeDocument;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, Option<ResumeDocument>>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Loads a resume document from a JSON or TOML file.
    ///
    /// A JSON file holding only `null` yields `None`, which scores as an absent document.
    pub async fn load_document(&mut self, path: &Path) -> Result<Option<ResumeDocument>> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                debug!("Using cached document for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        Self::ensure_exists(path)?;

        let file_type = Self::detect_file_type(path)?;
        if !file_type.is_structured() {
            return Err(AtsError::UnsupportedFormat(format!(
                "Resume documents must be JSON or TOML: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).await?;
        let document = if file_type == FileType::Json {
            info!("Loading JSON resume: {}", path.display());
            ResumeDocument::from_json_optional(&content)?
        } else {
            info!("Loading TOML resume: {}", path.display());
            Some(ResumeDocument::from_toml(&content)?)
        };

        if document.is_none() {
            warn!("Resume file holds no document: {}", path.display());
        }

        if self.enable_cache {
            self.cache.insert(path_str, document.clone());
        }

        Ok(document)
    }

    /// Reads job description text from a plain text, Markdown or PDF file.
    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        Self::ensure_exists(path)?;

        match Self::detect_file_type(path)? {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await
            }
            _ => Err(AtsError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))),
        }
    }

    fn ensure_exists(path: &Path) -> Result<()> {
        if path.exists() {
            Ok(())
        } else {
            Err(AtsError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )))
        }
    }

    fn detect_file_type(path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                AtsError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
