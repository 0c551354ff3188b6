// ABOUTME: Deck builder: assembles the pitch deck and hands it to a renderer
// ABOUTME: Checks renderer availability first so a failed build leaves no output

use crate::config::Config;
use crate::content;
use crate::errors::Result;
use crate::model::Deck;
use crate::renderer::{default_renderer, DeckRenderer};
use log::info;
use std::path::PathBuf;

/// What a successful build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub path: PathBuf,
    pub slide_count: usize,
    pub diagram_count: usize,
}

pub struct DeckBuilder<'a> {
    config: &'a Config,
    renderer: Box<dyn DeckRenderer>,
    deck: Deck,
}

impl<'a> DeckBuilder<'a> {
    /// Builder using the renderer compiled into this binary.
    pub fn new(config: &'a Config) -> Self {
        Self::with_renderer(config, default_renderer(config))
    }

    pub fn with_renderer(config: &'a Config, renderer: Box<dyn DeckRenderer>) -> Self {
        Self {
            config,
            renderer,
            deck: content::pitch_deck(),
        }
    }

    /// Replace the pitch deck script with `deck`.
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    /// Build, validate and save the deck.
    pub fn build(&self) -> Result<BuildReport> {
        self.renderer.ensure_available()?;

        let deck = &self.deck;
        info!("Built deck with {} slides", deck.len());
        deck.validate()?;

        let path = self.config.output_path.clone();
        info!("Rendering with {} renderer to {:?}", self.renderer.name(), path);
        self.renderer.render(deck, &path)?;

        Ok(BuildReport {
            path,
            slide_count: deck.len(),
            diagram_count: deck.diagram_count(),
        })
    }
}
