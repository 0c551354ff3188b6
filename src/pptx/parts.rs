// ABOUTME: Package parts of a PresentationML document
// ABOUTME: Static master, layout and theme resources plus the generated index parts

use crate::config::PptxConfig;
use quick_xml::escape::escape;

pub const THEME_XML: &str = include_str!("../../resources/theme1.xml");
pub const SLIDE_MASTER_XML: &str = include_str!("../../resources/slideMaster1.xml");
pub const SLIDE_LAYOUT_XML: &str = include_str!("../../resources/slideLayout1.xml");
pub const PRES_PROPS_XML: &str = include_str!("../../resources/presProps.xml");
pub const VIEW_PROPS_XML: &str = include_str!("../../resources/viewProps.xml");
pub const TABLE_STYLES_XML: &str = include_str!("../../resources/tableStyles.xml");

/// Slide width in EMU (10 in).
pub const SLIDE_CX: i64 = 9_144_000;
/// Slide height in EMU (7.5 in).
pub const SLIDE_CY: i64 = 6_858_000;

/// First relationship id used for slides in `presentation.xml.rels`.
const FIRST_SLIDE_REL: usize = 6;

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

fn slide_rel_id(index: usize) -> usize {
    FIRST_SLIDE_REL + index
}

pub fn content_types(slide_count: usize) -> String {
    format!(
        r#"{header}
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
    <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
    <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
    <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
    <Override PartName="/ppt/presProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presProps+xml"/>
    <Override PartName="/ppt/viewProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml"/>
    <Override PartName="/ppt/tableStyles.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
    <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
{slides}
</Types>"#,
        header = XML_HEADER,
        slides = (1..=slide_count)
            .map(|n| format!(
                r#"    <Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
                n
            ))
            .collect::<Vec<String>>()
            .join("\n")
    )
}

pub fn root_rels() -> String {
    format!(
        r#"{header}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{ns}/officeDocument" Target="ppt/presentation.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
    <Relationship Id="rId3" Type="{ns}/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#,
        header = XML_HEADER,
        ns = REL_NS
    )
}

pub fn app_xml(slide_count: usize) -> String {
    format!(
        r#"{header}
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
    <Application>pitch-deck</Application>
    <PresentationFormat>On-screen Show (4:3)</PresentationFormat>
    <Slides>{count}</Slides>
</Properties>"#,
        header = XML_HEADER,
        count = slide_count
    )
}

pub fn core_xml(config: &PptxConfig) -> String {
    let stamp = config.created.format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        r#"{header}
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>{title}</dc:title>
    <dc:creator>{creator}</dc:creator>
    <cp:lastModifiedBy>{creator}</cp:lastModifiedBy>
    <cp:revision>1</cp:revision>
    <dcterms:created xsi:type="dcterms:W3CDTF">{stamp}</dcterms:created>
    <dcterms:modified xsi:type="dcterms:W3CDTF">{stamp}</dcterms:modified>
</cp:coreProperties>"#,
        header = XML_HEADER,
        title = escape(&config.title),
        creator = escape(&config.creator),
        stamp = stamp
    )
}

pub fn presentation_xml(slide_count: usize) -> String {
    format!(
        r#"{header}
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="{ns}" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">
    <p:sldMasterIdLst>
        <p:sldMasterId id="2147483648" r:id="rId1"/>
    </p:sldMasterIdLst>
    <p:sldIdLst>
{slide_ids}
    </p:sldIdLst>
    <p:sldSz cx="{cx}" cy="{cy}" type="screen4x3"/>
    <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#,
        header = XML_HEADER,
        ns = REL_NS,
        slide_ids = (0..slide_count)
            .map(|i| format!(r#"        <p:sldId id="{}" r:id="rId{}"/>"#, 256 + i, slide_rel_id(i)))
            .collect::<Vec<String>>()
            .join("\n"),
        cx = SLIDE_CX,
        cy = SLIDE_CY
    )
}

pub fn presentation_rels(slide_count: usize) -> String {
    let mut rels = format!(
        r#"{header}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{ns}/slideMaster" Target="slideMasters/slideMaster1.xml"/>
    <Relationship Id="rId2" Type="{ns}/presProps" Target="presProps.xml"/>
    <Relationship Id="rId3" Type="{ns}/viewProps" Target="viewProps.xml"/>
    <Relationship Id="rId4" Type="{ns}/theme" Target="theme/theme1.xml"/>
    <Relationship Id="rId5" Type="{ns}/tableStyles" Target="tableStyles.xml"/>
"#,
        header = XML_HEADER,
        ns = REL_NS
    );

    for i in 0..slide_count {
        rels.push_str(&format!(
            r#"    <Relationship Id="rId{}" Type="{}/slide" Target="slides/slide{}.xml"/>"#,
            slide_rel_id(i),
            REL_NS,
            i + 1
        ));
        rels.push('\n');
    }

    rels.push_str("</Relationships>");
    rels
}

pub fn slide_master_rels() -> String {
    format!(
        r#"{header}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{ns}/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
    <Relationship Id="rId2" Type="{ns}/theme" Target="../theme/theme1.xml"/>
</Relationships>"#,
        header = XML_HEADER,
        ns = REL_NS
    )
}

pub fn slide_layout_rels() -> String {
    format!(
        r#"{header}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{ns}/slideMaster" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#,
        header = XML_HEADER,
        ns = REL_NS
    )
}

/// Every slide uses the blank layout.
pub fn slide_rels() -> String {
    format!(
        r#"{header}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{ns}/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
</Relationships>"#,
        header = XML_HEADER,
        ns = REL_NS
    )
}
