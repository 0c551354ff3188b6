#![cfg(feature = "pptx")]

use pitch_deck::model::TableSlide;
use pitch_deck::{
    pitch_deck, Config, Deck, DeckBuilder, DeckError, PptxConfig, PptxWriter, Slide,
    UnavailableRenderer, PPTX_INSTALL_HINT,
};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use zip::ZipArchive;

fn run_command(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pitch-deck"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn config_for(path: &Path) -> Config {
    let mut config = Config::new();
    config.output_path = path.to_path_buf();
    config
}

fn read_part(archive: &mut ZipArchive<fs::File>, name: &str) -> String {
    let mut part = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("Missing part {}", name));
    let mut xml = String::new();
    part.read_to_string(&mut xml).expect("Part is not UTF-8");
    xml
}

fn open(path: &Path) -> ZipArchive<fs::File> {
    let file = fs::File::open(path).expect("Failed to open PPTX file");
    ZipArchive::new(file).expect("Failed to read PPTX as ZIP")
}

fn assert_well_formed(name: &str, xml: &str) {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("{} is not well-formed at {}: {}", name, reader.buffer_position(), e),
        }
    }
}

#[test]
fn test_generate_deck_writes_nineteen_slides() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("deck.pptx");

    let report = DeckBuilder::new(&config_for(&output_path))
        .build()
        .expect("Build failed");
    assert_eq!(report.slide_count, 19);
    assert_eq!(report.diagram_count, 3);
    assert_eq!(report.path, output_path);
    assert!(output_path.exists(), "PPTX file was not created");

    // only the deck itself, no leftover staging files
    let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);

    let mut archive = open(&output_path);
    let mut slide_files: Vec<String> = archive
        .file_names()
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .map(str::to_string)
        .collect();
    slide_files.sort();
    assert_eq!(slide_files.len(), 19, "Expected nineteen slide XML files");
    assert!(slide_files.contains(&"ppt/slides/slide1.xml".to_string()));
    assert!(slide_files.contains(&"ppt/slides/slide19.xml".to_string()));

    let presentation = read_part(&mut archive, "ppt/presentation.xml");
    assert_eq!(presentation.matches("<p:sldId ").count(), 19);
    assert!(presentation.contains(r#"<p:sldSz cx="9144000" cy="6858000""#));

    let first = read_part(&mut archive, "ppt/slides/slide1.xml");
    assert!(first.contains("🚀 Agentic Testing Framework"));
    let last = read_part(&mut archive, "ppt/slides/slide19.xml");
    assert!(last.contains("🙏 Thank You"));
}

#[test]
fn test_every_part_is_well_formed() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("deck.pptx");
    DeckBuilder::new(&config_for(&output_path))
        .build()
        .expect("Build failed");

    let mut archive = open(&output_path);
    let names: Vec<String> = archive.file_names().map(str::to_string).collect();
    for required in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/theme/theme1.xml",
    ] {
        assert!(names.iter().any(|n| n == required), "Missing {}", required);
    }

    for name in &names {
        let xml = read_part(&mut archive, name);
        assert!(xml.starts_with("<?xml"), "{} lacks an XML declaration", name);
        assert_well_formed(name, &xml);
    }
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let first = temp_dir.path().join("first.pptx");
    let second = temp_dir.path().join("second.pptx");

    DeckBuilder::new(&config_for(&first)).build().unwrap();
    DeckBuilder::new(&config_for(&second)).build().unwrap();
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());

    // rebuilding over an existing file replaces it with the same bytes
    let before = fs::read(&first).unwrap();
    DeckBuilder::new(&config_for(&first)).build().unwrap();
    assert_eq!(fs::read(&first).unwrap(), before);
}

#[test]
fn test_table_slide_rows_and_columns() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("deck.pptx");
    DeckBuilder::new(&config_for(&output_path)).build().unwrap();

    let xml = read_part(&mut open(&output_path), "ppt/slides/slide7.xml");
    assert_eq!(xml.matches("<a:tr ").count(), 7);
    assert_eq!(xml.matches("<a:gridCol ").count(), 4);
    assert_eq!(xml.matches("<a:tc>").count(), 28);
    assert!(xml.contains("Built-in AI ✨"));
}

#[test]
fn test_metric_slides_keep_declared_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("deck.pptx");
    DeckBuilder::new(&config_for(&output_path)).build().unwrap();

    let mut archive = open(&output_path);
    let roi = read_part(&mut archive, "ppt/slides/slide8.xml");
    let order = ["145-217%", "Year 1 ROI", "$2.5M-$3.8M", "Annual Savings", "6-8 Months", "Payback Period", "80%", "Cost Reduction"];
    let positions: Vec<usize> = order
        .iter()
        .map(|text| roi.find(&format!("<a:t>{}</a:t>", text)).expect(text))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let success = read_part(&mut archive, "ppt/slides/slide12.xml");
    for text in ["90%+", "Test Coverage", "3 days", "Full Regression", "$2.1M", "Cost Savings", "40%", "Faster Releases"] {
        assert_eq!(success.matches(&format!("<a:t>{}</a:t>", text)).count(), 1, "{}", text);
    }
}

#[test]
fn test_diagram_slides_use_preset_shapes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("deck.pptx");
    DeckBuilder::new(&config_for(&output_path)).build().unwrap();

    let mut archive = open(&output_path);
    let architecture = read_part(&mut archive, "ppt/slides/slide16.xml");
    assert_eq!(architecture.matches(r#"prst="rect""#).count(), 6); // title box + 5 layers
    assert_eq!(architecture.matches(r#"prst="downArrow""#).count(), 4);
    assert!(architecture.contains("User Interface &amp; API Gateway"));

    let agents = read_part(&mut archive, "ppt/slides/slide17.xml");
    assert_eq!(agents.matches(r#"prst="roundRect""#).count(), 6);
    assert!(agents.contains(r#"<a:ln w="38100">"#));

    let flow = read_part(&mut archive, "ppt/slides/slide18.xml");
    assert_eq!(flow.matches(r#"prst="roundRect""#).count(), 7);
    assert_eq!(flow.matches(r#"prst="rightArrow""#).count(), 6);
}

#[test]
fn test_write_package_in_memory() {
    let writer = PptxWriter::new(PptxConfig::default());
    let cursor = writer
        .write_package(&pitch_deck(), Cursor::new(Vec::new()))
        .expect("Failed to write package");
    let bytes = cursor.into_inner();
    assert!(bytes.starts_with(b"PK"));

    let archive = ZipArchive::new(Cursor::new(bytes)).expect("Not a ZIP");
    assert!(archive.file_names().any(|n| n == "ppt/slides/slide19.xml"));
}

#[test]
fn test_unavailable_renderer_leaves_no_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("deck.pptx");
    let config = config_for(&output_path);

    let err = DeckBuilder::with_renderer(
        &config,
        Box::new(UnavailableRenderer::new("PPTX", PPTX_INSTALL_HINT)),
    )
    .build()
    .unwrap_err();

    assert!(matches!(err, DeckError::RendererUnavailable { .. }));
    assert_eq!(err.hint(), Some(PPTX_INSTALL_HINT));
    assert!(!output_path.exists());
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_invalid_deck_is_not_written() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("nested").join("deck.pptx");

    let mut deck = Deck::new();
    deck.push(Slide::Table(TableSlide {
        title: "Ragged".to_string(),
        headers: vec!["Feature".to_string(), "Ours".to_string()],
        rows: vec![vec!["Speed".to_string()]],
    }));

    let err = DeckBuilder::new(&config_for(&output_path))
        .with_deck(deck)
        .build()
        .unwrap_err();

    assert!(matches!(err, DeckError::Validation(_)), "got {:?}", err);
    assert!(err.to_string().contains("row 1 has 1 cells, expected 2"));
    assert!(!output_path.exists());
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_directory_as_output_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = DeckBuilder::new(&config_for(temp_dir.path()))
        .build()
        .unwrap_err();
    assert!(matches!(err, DeckError::Validation(_)));
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_cli_default_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_command(temp_dir.path(), &[]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PowerPoint presentation created successfully!"));
    assert!(stdout.contains("Agentic_Testing_Framework_Pitch_Deck.pptx"));
    assert!(stdout.contains("Total slides: 19 (including 3 architecture diagrams)"));
    assert!(temp_dir
        .path()
        .join("Agentic_Testing_Framework_Pitch_Deck.pptx")
        .exists());
}

#[test]
fn test_cli_output_flag_creates_parent_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("out").join("pitch.pptx");

    let output = run_command(temp_dir.path(), &["-o", output_path.to_str().unwrap()]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(output_path.exists(), "PPTX file was not created");

    let metadata = fs::metadata(&output_path).expect("Failed to get file metadata");
    assert!(metadata.len() > 0, "PPTX file is empty");
}

#[test]
fn test_cli_ignores_environment() {
    let plain_dir = TempDir::new().expect("Failed to create temp dir");
    let env_dir = TempDir::new().expect("Failed to create temp dir");
    let elsewhere = env_dir.path().join("elsewhere.pptx");

    let plain = run_command(plain_dir.path(), &[]);
    assert!(plain.status.success(), "Command failed: {:?}", plain);

    let with_env = Command::new(env!("CARGO_BIN_EXE_pitch-deck"))
        .current_dir(env_dir.path())
        .env("SOURCE_DATE_EPOCH", "")
        .env("PITCH_DECK_OUTPUT", &elsewhere)
        .output()
        .expect("Failed to execute command");
    assert!(with_env.status.success(), "Command failed: {:?}", with_env);
    assert!(!elsewhere.exists());

    let name = "Agentic_Testing_Framework_Pitch_Deck.pptx";
    assert_eq!(
        fs::read(plain_dir.path().join(name)).unwrap(),
        fs::read(env_dir.path().join(name)).unwrap()
    );
}
