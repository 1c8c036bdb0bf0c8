//! Input manager for single documents and whole intake directories

use crate::error::{Result, TalentScorerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One successfully read input document.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
}

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
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

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(TalentScorerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(TalentScorerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    /// Reads every supported document under `dir` in sorted filename order.
    /// A file that fails to read is logged and skipped, it never aborts the
    /// rest of the batch.
    pub async fn load_directory(&mut self, dir: &Path) -> Result<Vec<Document>> {
        if !dir.is_dir() {
            return Err(TalentScorerError::InvalidInput(format!(
                "Not a directory: {}",
                dir.display()
            )));
        }

        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .map(|ext| FileType::from_extension(ext).is_supported())
                        .unwrap_or(false)
            })
            .collect();
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            match self.extract_text(&path).await {
                Ok(text) => documents.push(Document { path, text }),
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }

        Ok(documents)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path.extension().and_then(|ext| ext.to_str()).ok_or_else(|| {
            TalentScorerError::InvalidInput(format!("File has no extension: {}", path.display()))
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

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
