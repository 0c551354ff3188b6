// ABOUTME: DrawingML serialization of a slide canvas
// ABOUTME: Emits the p:sld part with text boxes, preset shapes and tables

use crate::drawing::{Align, AutoShape, Element, Paragraph, SlideCanvas, TableFrame, TextBox};
use crate::errors::Result;
use crate::style::{font_size, inches, points, Frame, Rgb};
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;

const NAMESPACES: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

const TABLE_URI: &str = "http://schemas.openxmlformats.org/drawingml/2006/table";

/// Serialize a canvas into a complete slide part.
pub fn slide_xml(canvas: &SlideCanvas) -> Result<String> {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, "<p:sld {}>", NAMESPACES)?;
    xml.push_str("<p:cSld>");

    if let Some(color) = canvas.background {
        xml.push_str("<p:bg><p:bgPr>");
        solid_fill(&mut xml, color)?;
        xml.push_str("<a:effectLst/></p:bgPr></p:bg>");
    }

    xml.push_str("<p:spTree>");
    xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
    xml.push_str(r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#);

    // id 1 is the group shape
    for (index, element) in canvas.elements.iter().enumerate() {
        let shape_id = index as u32 + 2;
        match element {
            Element::Text(text) => text_box(&mut xml, shape_id, text)?,
            Element::Shape(shape) => auto_shape(&mut xml, shape_id, shape)?,
            Element::Table(table) => table_frame(&mut xml, shape_id, table)?,
        }
    }

    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");

    Ok(xml)
}

fn solid_fill(xml: &mut String, color: Rgb) -> Result<()> {
    write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color)?;
    Ok(())
}

fn transform(xml: &mut String, tag: &str, frame: &Frame) -> Result<()> {
    let (x, y, cx, cy) = frame.to_emu();
    write!(
        xml,
        r#"<{tag}><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></{tag}>"#,
        tag = tag,
        x = x,
        y = y,
        cx = cx,
        cy = cy
    )?;
    Ok(())
}

fn paragraph(xml: &mut String, para: &Paragraph) -> Result<()> {
    xml.push_str("<a:p>");

    if para.align == Align::Center || para.space_before.is_some() {
        xml.push_str("<a:pPr");
        if para.align == Align::Center {
            xml.push_str(r#" algn="ctr""#);
        }
        match para.space_before {
            Some(pt) => write!(
                xml,
                r#"><a:spcBef><a:spcPts val="{}"/></a:spcBef></a:pPr>"#,
                font_size(pt)
            )?,
            None => xml.push_str("/>"),
        }
    }

    let font = &para.font;
    if para.text.is_empty() {
        write!(
            xml,
            r#"<a:endParaRPr lang="en-US" sz="{}" dirty="0"/>"#,
            font_size(font.size)
        )?;
    } else {
        write!(xml, r#"<a:r><a:rPr lang="en-US" sz="{}""#, font_size(font.size))?;
        if font.bold {
            xml.push_str(r#" b="1""#);
        }
        if font.italic {
            xml.push_str(r#" i="1""#);
        }
        xml.push_str(r#" dirty="0">"#);
        solid_fill(xml, font.color)?;
        xml.push_str("</a:rPr>");
        write!(xml, "<a:t>{}</a:t></a:r>", escape(&para.text))?;
    }

    xml.push_str("</a:p>");
    Ok(())
}

fn paragraphs(xml: &mut String, paras: &[Paragraph], empty_align: Align) -> Result<()> {
    if paras.is_empty() {
        // txBody needs at least one paragraph
        match empty_align {
            Align::Center => xml.push_str(r#"<a:p><a:pPr algn="ctr"/></a:p>"#),
            Align::Left => xml.push_str("<a:p/>"),
        }
        return Ok(());
    }
    for para in paras {
        paragraph(xml, para)?;
    }
    Ok(())
}

fn text_box(xml: &mut String, shape_id: u32, text: &TextBox) -> Result<()> {
    xml.push_str("<p:sp><p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
        shape_id,
        shape_id - 1
    )?;
    xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#);

    xml.push_str("<p:spPr>");
    transform(xml, "a:xfrm", &text.frame)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/>"#);
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    let wrap = if text.word_wrap { "square" } else { "none" };
    write!(
        xml,
        r#"<a:bodyPr wrap="{}" rtlCol="0"><a:spAutoFit/></a:bodyPr><a:lstStyle/>"#,
        wrap
    )?;
    paragraphs(xml, &text.paragraphs, Align::Left)?;
    xml.push_str("</p:txBody></p:sp>");
    Ok(())
}

fn auto_shape(xml: &mut String, shape_id: u32, shape: &AutoShape) -> Result<()> {
    xml.push_str("<p:sp><p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{} {}"/>"#,
        shape_id,
        shape.geometry.display_name(),
        shape_id - 1
    )?;
    xml.push_str("<p:cNvSpPr/><p:nvPr/></p:nvSpPr>");

    xml.push_str("<p:spPr>");
    transform(xml, "a:xfrm", &shape.frame)?;
    write!(
        xml,
        r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
        shape.geometry.preset()
    )?;
    solid_fill(xml, shape.fill)?;
    match shape.line_width {
        Some(width) => write!(xml, r#"<a:ln w="{}">"#, points(width))?,
        None => xml.push_str("<a:ln>"),
    }
    solid_fill(xml, shape.line_color)?;
    xml.push_str("</a:ln>");
    xml.push_str("</p:spPr>");

    xml.push_str(r#"<p:txBody><a:bodyPr wrap="square" rtlCol="0" anchor="ctr"/><a:lstStyle/>"#);
    paragraphs(xml, &shape.paragraphs, Align::Center)?;
    xml.push_str("</p:txBody></p:sp>");
    Ok(())
}

fn table_frame(xml: &mut String, shape_id: u32, table: &TableFrame) -> Result<()> {
    xml.push_str("<p:graphicFrame><p:nvGraphicFramePr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="Table {}"/>"#,
        shape_id,
        shape_id - 1
    )?;
    xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr><p:nvPr/></p:nvGraphicFramePr>"#);
    transform(xml, "p:xfrm", &table.frame)?;

    write!(xml, r#"<a:graphic><a:graphicData uri="{}">"#, TABLE_URI)?;
    xml.push_str(r#"<a:tbl><a:tblPr firstRow="1" bandRow="1"/><a:tblGrid>"#);
    for width in &table.column_widths {
        write!(xml, r#"<a:gridCol w="{}"/>"#, inches(*width))?;
    }
    xml.push_str("</a:tblGrid>");

    let row_height = inches(table.row_height());
    for row in &table.rows {
        write!(xml, r#"<a:tr h="{}">"#, row_height)?;
        for cell in row {
            xml.push_str("<a:tc><a:txBody><a:bodyPr/><a:lstStyle/>");
            paragraph(xml, &cell.paragraph)?;
            xml.push_str("</a:txBody>");
            match cell.fill {
                Some(color) => {
                    xml.push_str("<a:tcPr>");
                    solid_fill(xml, color)?;
                    xml.push_str("</a:tcPr>");
                }
                None => xml.push_str("<a:tcPr/>"),
            }
            xml.push_str("</a:tc>");
        }
        xml.push_str("</a:tr>");
    }

    xml.push_str("</a:tbl></a:graphicData></a:graphic></p:graphicFrame>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::{Font, TextBox};
    use crate::style::palette;

    fn canvas_with(paragraphs: Vec<Paragraph>) -> SlideCanvas {
        let mut canvas = SlideCanvas::new();
        canvas.add(Element::Text(TextBox {
            frame: Frame::new(0.5, 0.3, 9.0, 0.8),
            paragraphs,
            word_wrap: true,
        }));
        canvas
    }

    #[test]
    fn test_text_is_escaped() {
        let canvas = canvas_with(vec![Paragraph::new(
            "Security & Compliance: <1 hour",
            Font::new(20.0, palette::TEXT),
        )]);
        let xml = slide_xml(&canvas).unwrap();
        assert!(xml.contains("<a:t>Security &amp; Compliance: &lt;1 hour</a:t>"));
    }

    #[test]
    fn test_empty_line_keeps_paragraph() {
        let canvas = canvas_with(vec![Paragraph::new("", Font::new(20.0, palette::TEXT)).spaced(12.0)]);
        let xml = slide_xml(&canvas).unwrap();
        assert!(xml.contains(r#"<a:spcPts val="1200"/>"#));
        assert!(xml.contains(r#"<a:endParaRPr lang="en-US" sz="2000" dirty="0"/>"#));
        assert!(!xml.contains("<a:r>"));
    }

    #[test]
    fn test_shape_ids_start_after_group() {
        let canvas = canvas_with(vec![Paragraph::new("Title", Font::new(40.0, palette::TITLE).bold())]);
        let xml = slide_xml(&canvas).unwrap();
        assert!(xml.contains(r#"<p:cNvPr id="2" name="TextBox 1"/>"#));
        assert!(xml.contains(r#"sz="4000" b="1""#));
        assert!(xml.contains(r#"<a:off x="457200" y="274320"/>"#));
    }
}
