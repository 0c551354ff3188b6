// ABOUTME: Renderer seam between the deck builder and an output file format
// ABOUTME: Picks the PPTX writer when compiled in, otherwise reports it unavailable

use crate::config::Config;
use crate::errors::{DeckError, Result};
use crate::model::Deck;
use std::path::Path;

/// Hint printed when the PPTX writer is missing from the build.
pub const PPTX_INSTALL_HINT: &str =
    "Rebuild it with the PPTX writer enabled: cargo install pitch-deck --features pptx";

/// Turns a deck into one output file.
pub trait DeckRenderer {
    fn name(&self) -> &str;

    /// Fails with [`DeckError::RendererUnavailable`] before any output is touched.
    fn ensure_available(&self) -> Result<()>;

    /// Write the deck to `path`. Either the complete file appears or nothing does.
    fn render(&self, deck: &Deck, path: &Path) -> Result<()>;
}

/// Stand-in for a renderer that is not part of this build.
#[derive(Debug, Clone)]
pub struct UnavailableRenderer {
    name: String,
    hint: String,
}

impl UnavailableRenderer {
    pub fn new(name: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            hint: hint.to_string(),
        }
    }

    fn error(&self) -> DeckError {
        DeckError::RendererUnavailable {
            renderer: self.name.clone(),
            hint: self.hint.clone(),
        }
    }
}

impl DeckRenderer for UnavailableRenderer {
    fn name(&self) -> &str {
        &self.name
    }

    fn ensure_available(&self) -> Result<()> {
        Err(self.error())
    }

    fn render(&self, _deck: &Deck, _path: &Path) -> Result<()> {
        Err(self.error())
    }
}

/// The renderer this binary was built with.
#[cfg(feature = "pptx")]
pub fn default_renderer(config: &Config) -> Box<dyn DeckRenderer> {
    Box::new(crate::pptx::PptxWriter::new(config.get_pptx_config()))
}

#[cfg(not(feature = "pptx"))]
pub fn default_renderer(_config: &Config) -> Box<dyn DeckRenderer> {
    log::warn!("built without the `pptx` feature; no renderer available");
    Box::new(UnavailableRenderer::new("PPTX", PPTX_INSTALL_HINT))
}
