// ABOUTME: Configuration module for the pitch-deck application
// ABOUTME: Provides output and document-metadata settings; nothing here is read from the environment

use crate::content::OUTPUT_FILE_NAME;
use chrono::{DateTime, TimeZone, Utc};
use std::path::PathBuf;

/// 2025-01-01T00:00:00Z, stamped into every deck so reruns are byte-identical.
pub const DEFAULT_CREATED_EPOCH: i64 = 1_735_689_600;

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub output_path: PathBuf,
    pub title: String,
    pub author: String,
    /// Timestamp written into the document properties.
    pub created: DateTime<Utc>,
}

/// Document metadata handed to the PPTX writer.
#[derive(Debug, Clone)]
pub struct PptxConfig {
    pub title: String,
    pub creator: String,
    pub created: DateTime<Utc>,
}

impl Default for PptxConfig {
    fn default() -> Self {
        Self {
            title: "Presentation".to_string(),
            creator: "pitch-deck".to_string(),
            created: epoch(DEFAULT_CREATED_EPOCH),
        }
    }
}

fn epoch(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .unwrap_or_default()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(OUTPUT_FILE_NAME),
            title: "Agentic Testing Framework".to_string(),
            author: "pitch-deck".to_string(),
            created: epoch(DEFAULT_CREATED_EPOCH),
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a PPTX configuration with this config's metadata
    pub fn get_pptx_config(&self) -> PptxConfig {
        PptxConfig {
            title: self.title.clone(),
            creator: self.author.clone(),
            created: self.created,
        }
    }
}
