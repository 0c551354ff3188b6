// ABOUTME: PPTX generation module for the pitch-deck application
// ABOUTME: Lays out each slide and packages the result as a PowerPoint file

mod parts;
mod shapes;

pub use crate::config::PptxConfig;
pub use shapes::slide_xml;

use crate::errors::{DeckError, Result};
use crate::layout;
use crate::model::Deck;
use crate::renderer::DeckRenderer;
use crate::utils;
use log::{debug, info};
use std::io::{Seek, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Writes decks as PresentationML packages.
#[derive(Debug, Clone, Default)]
pub struct PptxWriter {
    config: PptxConfig,
}

/// Entry options with a fixed timestamp so identical decks give identical bytes.
fn entry_options() -> FileOptions {
    FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
}

fn add_part<W: Write + Seek>(zip: &mut ZipWriter<W>, name: &str, body: &str) -> Result<()> {
    zip.start_file(name, entry_options())?;
    zip.write_all(body.as_bytes())?;
    Ok(())
}

impl PptxWriter {
    pub fn new(config: PptxConfig) -> Self {
        Self { config }
    }

    /// Write the complete package for `deck` into `writer` and return it.
    pub fn write_package<W: Write + Seek>(&self, deck: &Deck, writer: W) -> Result<W> {
        let slide_count = deck.len();
        let mut zip = ZipWriter::new(writer);

        info!("Creating PPTX structure: [Content_Types].xml");
        add_part(&mut zip, "[Content_Types].xml", &parts::content_types(slide_count))?;

        info!("Creating PPTX structure: _rels/.rels");
        add_part(&mut zip, "_rels/.rels", &parts::root_rels())?;

        info!("Creating PPTX structure: docProps");
        add_part(&mut zip, "docProps/app.xml", &parts::app_xml(slide_count))?;
        add_part(&mut zip, "docProps/core.xml", &parts::core_xml(&self.config))?;

        info!("Creating PPTX structure: ppt/presentation.xml");
        add_part(&mut zip, "ppt/presentation.xml", &parts::presentation_xml(slide_count))?;
        add_part(
            &mut zip,
            "ppt/_rels/presentation.xml.rels",
            &parts::presentation_rels(slide_count),
        )?;
        add_part(&mut zip, "ppt/presProps.xml", parts::PRES_PROPS_XML)?;
        add_part(&mut zip, "ppt/viewProps.xml", parts::VIEW_PROPS_XML)?;
        add_part(&mut zip, "ppt/tableStyles.xml", parts::TABLE_STYLES_XML)?;

        info!("Creating PPTX structure: master, layout and theme");
        add_part(&mut zip, "ppt/theme/theme1.xml", parts::THEME_XML)?;
        add_part(&mut zip, "ppt/slideMasters/slideMaster1.xml", parts::SLIDE_MASTER_XML)?;
        add_part(
            &mut zip,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            &parts::slide_master_rels(),
        )?;
        add_part(&mut zip, "ppt/slideLayouts/slideLayout1.xml", parts::SLIDE_LAYOUT_XML)?;
        add_part(
            &mut zip,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            &parts::slide_layout_rels(),
        )?;

        for (i, slide) in deck.slides.iter().enumerate() {
            let slide_num = i + 1;
            debug!("Laying out slide {} ({}): {}", slide_num, slide.kind(), slide.title());

            let canvas = layout::compose(slide);
            add_part(
                &mut zip,
                &format!("ppt/slides/slide{}.xml", slide_num),
                &slide_xml(&canvas)?,
            )?;
            add_part(
                &mut zip,
                &format!("ppt/slides/_rels/slide{}.xml.rels", slide_num),
                &parts::slide_rels(),
            )?;
        }

        info!("Finalizing PPTX package");
        Ok(zip.finish()?)
    }

    /// Save `deck` to `output_file`, replacing it only once the package is complete.
    pub fn save(&self, deck: &Deck, output_file: &Path) -> Result<()> {
        utils::validate_output_path(output_file)?;
        let dir = utils::ensure_parent_directory_exists(output_file)?;

        let staging = NamedTempFile::new_in(&dir)?;
        debug!("Staging PPTX in {:?}", staging.path());
        let staging = self.write_package(deck, staging)?;
        staging.as_file().sync_all()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            staging
                .as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o644))?;
        }

        staging
            .persist(output_file)
            .map_err(|e| DeckError::Io(e.error))?;

        info!("PPTX file created at {:?}", output_file);
        Ok(())
    }
}

impl DeckRenderer for PptxWriter {
    fn name(&self) -> &str {
        "PPTX"
    }

    fn ensure_available(&self) -> Result<()> {
        Ok(())
    }

    fn render(&self, deck: &Deck, path: &Path) -> Result<()> {
        self.save(deck, path)
    }
}
