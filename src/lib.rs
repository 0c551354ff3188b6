// ABOUTME: Library module for the pitch-deck program.
// ABOUTME: Holds the slide script, layout templates and the PPTX writer.

pub mod builder;
pub mod config;
pub mod content;
pub mod drawing;
pub mod errors;
pub mod layout;
pub mod model;
#[cfg(feature = "pptx")]
pub mod pptx;
pub mod renderer;
pub mod style;
pub mod utils;

// Reexport common types and functions
pub use builder::{BuildReport, DeckBuilder};
pub use config::{Config, PptxConfig};
pub use content::{pitch_deck, OUTPUT_FILE_NAME};
pub use errors::{DeckError, Result};
pub use model::{Deck, Slide};
#[cfg(feature = "pptx")]
pub use pptx::PptxWriter;
pub use renderer::{default_renderer, DeckRenderer, UnavailableRenderer, PPTX_INSTALL_HINT};
