//! DOCX writer
//!
//! Serializes a [`Document`] into an OOXML package: content types, package
//! relationships, the document part with its body section, a minimal styles
//! part, and one part per header/footer.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use log::debug;
use quick_xml::escape::escape;

use crate::error::DocxResult;
use penleaf_doc::{
    BodyItem, Document, Footer, Header, Paragraph, Run, RunContent, Table, TableWidth,
};

const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// DOCX file writer
pub struct DocxWriter;

impl DocxWriter {
    /// Write a document to a file path
    pub fn write_file<P: AsRef<Path>>(document: &Document, path: P) -> DocxResult<()> {
        let file = File::create(path)?;
        Self::write(document, file)
    }

    /// Write a document to a writer
    pub fn write<W: Write + Seek>(document: &Document, writer: W) -> DocxResult<()> {
        let mut zip = zip::ZipWriter::new(writer);

        Self::write_content_types(&mut zip, document)?;
        Self::write_root_rels(&mut zip)?;
        Self::write_document_rels(&mut zip, document)?;
        Self::write_styles(&mut zip)?;

        for (i, header) in document.headers().iter().enumerate() {
            Self::write_header(&mut zip, i, header)?;
        }
        for (i, footer) in document.footers().iter().enumerate() {
            Self::write_footer(&mut zip, i, footer)?;
        }

        Self::write_document_xml(&mut zip, document)?;

        zip.finish()?;
        Ok(())
    }

    fn write_content_types<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        document: &Document,
    ) -> DocxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("[Content_Types].xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
    <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#,
        );

        for i in 0..document.headers().len() {
            content.push_str(&format!(
                r#"
    <Override PartName="/word/header{}.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml"/>"#,
                i + 1
            ));
        }
        for i in 0..document.footers().len() {
            content.push_str(&format!(
                r#"
    <Override PartName="/word/footer{}.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml"/>"#,
                i + 1
            ));
        }

        content.push_str("\n</Types>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_root_rels<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> DocxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("_rels/.rels", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Relationship id for header part `i` (rId1 is the styles part)
    fn header_rid(i: usize) -> usize {
        2 + i
    }

    /// Relationship id for footer part `i`
    fn footer_rid(document: &Document, i: usize) -> usize {
        2 + document.headers().len() + i
    }

    fn write_document_rels<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        document: &Document,
    ) -> DocxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("word/_rels/document.xml.rels", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
        );

        for i in 0..document.headers().len() {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/header" Target="header{}.xml"/>"#,
                Self::header_rid(i),
                i + 1
            ));
        }
        for i in 0..document.footers().len() {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer" Target="footer{}.xml"/>"#,
                Self::footer_rid(document, i),
                i + 1
            ));
        }

        content.push_str("\n</Relationships>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_styles<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> DocxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("word/styles.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="{}">
    <w:docDefaults>
        <w:rPrDefault><w:rPr/></w:rPrDefault>
        <w:pPrDefault><w:pPr/></w:pPrDefault>
    </w:docDefaults>
    <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
        <w:name w:val="Normal"/>
    </w:style>
</w:styles>"#,
            WML_NS
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_header<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        index: usize,
        header: &Header,
    ) -> DocxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        let name = format!("word/header{}.xml", index + 1);
        debug!("writing part {}", name);
        zip.start_file(&name, options)?;

        let mut content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:hdr xmlns:w="{}">"#,
            WML_NS
        );
        for para in header.paragraphs() {
            content.push_str(&Self::paragraph_xml(para));
        }
        content.push_str("\n</w:hdr>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_footer<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        index: usize,
        footer: &Footer,
    ) -> DocxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        let name = format!("word/footer{}.xml", index + 1);
        debug!("writing part {}", name);
        zip.start_file(&name, options)?;

        let mut content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:ftr xmlns:w="{}">"#,
            WML_NS
        );
        for para in footer.paragraphs() {
            content.push_str(&Self::paragraph_xml(para));
        }
        content.push_str("\n</w:ftr>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_document_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        document: &Document,
    ) -> DocxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        debug!("writing part word/document.xml");
        zip.start_file("word/document.xml", options)?;

        let mut content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}" xmlns:r="{}">
    <w:body>"#,
            WML_NS, REL_NS
        );

        for item in document.body() {
            match item {
                BodyItem::Paragraph(para) => content.push_str(&Self::paragraph_xml(para)),
                BodyItem::Table(table) => content.push_str(&Self::table_xml(table)),
            }
        }

        content.push_str(&Self::sect_pr_xml(document));
        content.push_str("\n    </w:body>\n</w:document>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn sect_pr_xml(document: &Document) -> String {
        let mut out = String::from("\n        <w:sectPr>");

        for (id, kind) in document.body_section().header_refs() {
            out.push_str(&format!(
                "\n            <w:headerReference w:type=\"{}\" r:id=\"rId{}\"/>",
                kind.code(),
                Self::header_rid(id.index())
            ));
        }
        for (id, kind) in document.body_section().footer_refs() {
            out.push_str(&format!(
                "\n            <w:footerReference w:type=\"{}\" r:id=\"rId{}\"/>",
                kind.code(),
                Self::footer_rid(document, id.index())
            ));
        }

        // US letter with one-inch margins
        out.push_str(
            r#"
            <w:pgSz w:w="12240" w:h="15840"/>
            <w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/>
        </w:sectPr>"#,
        );
        out
    }

    fn paragraph_xml(para: &Paragraph) -> String {
        let mut out = String::from("\n        <w:p>");

        let stops = para.properties().tab_stops();
        if !stops.is_empty() {
            out.push_str("<w:pPr><w:tabs>");
            for stop in stops {
                out.push_str(&format!(
                    "<w:tab w:val=\"{}\" w:pos=\"{}\"/>",
                    stop.alignment.code(),
                    stop.position.to_twips()
                ));
            }
            out.push_str("</w:tabs></w:pPr>");
        }

        for run in para.runs() {
            out.push_str(&Self::run_xml(run));
        }

        out.push_str("</w:p>");
        out
    }

    /// Serialize one run
    ///
    /// Fields are paragraph-level content in WML (`w:fldSimple` is a sibling
    /// of `w:r`), so a run containing fields is split into run segments
    /// around each field, all sharing the run's properties.
    fn run_xml(run: &Run) -> String {
        let rpr = Self::run_properties_xml(run);
        let mut out = String::new();
        let mut segment = String::new();

        let flush = |out: &mut String, segment: &mut String| {
            if !segment.is_empty() {
                out.push_str(&format!("<w:r>{}{}</w:r>", rpr, segment));
                segment.clear();
            }
        };

        for item in run.content() {
            match item {
                RunContent::Text(text) => {
                    segment.push_str(&format!(
                        "<w:t xml:space=\"preserve\">{}</w:t>",
                        escape(text.as_str())
                    ));
                }
                RunContent::Tab => segment.push_str("<w:tab/>"),
                RunContent::Field(field) => {
                    flush(&mut out, &mut segment);
                    out.push_str(&format!(
                        "<w:fldSimple w:instr=\"{}\"/>",
                        field.instruction()
                    ));
                }
            }
        }
        flush(&mut out, &mut segment);

        // A run with no content still renders its properties
        if out.is_empty() && run.content().is_empty() {
            out.push_str(&format!("<w:r>{}</w:r>", rpr));
        }
        out
    }

    fn run_properties_xml(run: &Run) -> String {
        let props = run.properties();
        if !props.bold() && props.highlight().is_none() {
            return String::new();
        }
        let mut out = String::from("<w:rPr>");
        if props.bold() {
            out.push_str("<w:b/>");
        }
        if let Some(color) = props.highlight() {
            out.push_str(&format!("<w:highlight w:val=\"{}\"/>", color.code()));
        }
        out.push_str("</w:rPr>");
        out
    }

    fn table_xml(table: &Table) -> String {
        let mut out = String::from("\n        <w:tbl>\n            <w:tblPr>");

        match table.properties().width() {
            TableWidth::Auto => out.push_str("<w:tblW w:w=\"0\" w:type=\"auto\"/>"),
            TableWidth::Percent(pct) => {
                // pct widths are in 50ths of a percent
                out.push_str(&format!(
                    "<w:tblW w:w=\"{}\" w:type=\"pct\"/>",
                    (pct * 50.0).round() as i64
                ));
            }
            TableWidth::Fixed(width) => {
                out.push_str(&format!(
                    "<w:tblW w:w=\"{}\" w:type=\"dxa\"/>",
                    width.to_twips()
                ));
            }
        }

        if let Some(borders) = table.properties().borders() {
            out.push_str("<w:tblBorders>");
            for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
                out.push_str(&format!(
                    "<w:{} w:val=\"{}\" w:sz=\"{}\" w:space=\"0\" w:color=\"{}\"/>",
                    edge,
                    borders.style.code(),
                    borders.size.to_eighth_points(),
                    borders.color.to_wml_value()
                ));
            }
            out.push_str("</w:tblBorders>");
        }

        out.push_str("</w:tblPr>\n            <w:tblGrid/>");

        for row in table.rows() {
            out.push_str("\n            <w:tr>");
            for cell in row.cells() {
                out.push_str("<w:tc>");

                let props = cell.properties();
                if props.column_span().is_some() || props.vertical_merge().is_some() {
                    out.push_str("<w:tcPr>");
                    if let Some(span) = props.column_span() {
                        out.push_str(&format!("<w:gridSpan w:val=\"{}\"/>", span));
                    }
                    if let Some(merge) = props.vertical_merge() {
                        out.push_str(&format!("<w:vMerge w:val=\"{}\"/>", merge.code()));
                    }
                    out.push_str("</w:tcPr>");
                }

                if cell.paragraphs().is_empty() {
                    // The schema requires at least one block element per cell
                    out.push_str("<w:p/>");
                } else {
                    for para in cell.paragraphs() {
                        out.push_str(&Self::paragraph_xml(para));
                    }
                }

                out.push_str("</w:tc>");
            }
            out.push_str("</w:tr>");
        }

        out.push_str("\n        </w:tbl>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use penleaf_core::{Color, Distance};
    use penleaf_doc::{BorderStyle, Field, HdrFtrType, Highlight, TabAlignment, TabStop, VerticalMerge};
    use std::io::{Cursor, Read};

    fn unzip_part(buf: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(buf)).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut content = String::new();
        part.read_to_string(&mut content).unwrap();
        content
    }

    fn sample_document() -> Document {
        let mut doc = Document::new();

        let hdr = doc.add_header();
        let para = doc.header_mut(hdr).unwrap().add_paragraph();
        para.properties_mut()
            .add_tab_stop(TabStop::new(Distance::inches(2.5), TabAlignment::Center));
        let run = para.add_run();
        run.add_tab();
        run.add_text("This is a header");
        doc.body_section_mut().set_header(hdr, HdrFtrType::Default);

        let ftr = doc.add_footer();
        let para = doc.footer_mut(ftr).unwrap().add_paragraph();
        para.properties_mut()
            .add_tab_stop(TabStop::new(Distance::inches(6.0), TabAlignment::Right));
        let run = para.add_run();
        run.add_text("This is my footer");
        run.add_tab();
        run.add_text("Pg ");
        run.add_field(Field::CurrentPage);
        run.add_text(" of ");
        run.add_field(Field::NumberOfPages);
        doc.body_section_mut().set_footer(ftr, HdrFtrType::Default);

        let table = doc.add_table();
        table.properties_mut().set_width_percent(100.0);
        table
            .properties_mut()
            .set_all_borders(BorderStyle::Single, Color::Auto, Distance::points(2.0));
        let row = table.add_row();
        let run = row.add_cell().add_paragraph().add_run();
        run.add_text("Name");
        run.properties_mut().set_highlight(Highlight::Yellow);
        row.add_cell().add_paragraph().add_run().add_text("John Smith");

        doc.add_paragraph();

        let table = doc.add_table();
        table.properties_mut().set_width(Distance::inches(4.0));
        let row = table.add_row();
        let cell = row.add_cell();
        cell.properties_mut().set_column_span(2);
        cell.add_paragraph().add_run().add_text("Cells can span multiple columns");
        let row = table.add_row();
        let cell = row.add_cell();
        cell.properties_mut().set_vertical_merge(VerticalMerge::Restart);
        cell.add_paragraph().add_run().add_text("Vertical Merge");
        row.add_cell().add_paragraph().add_run().add_text("");
        let row = table.add_row();
        let cell = row.add_cell();
        cell.properties_mut().set_vertical_merge(VerticalMerge::Continue);
        cell.add_paragraph().add_run().add_text("Vertical Merge 2");
        row.add_cell().add_paragraph().add_run().add_text("");

        doc
    }

    fn write_to_buf(doc: &Document) -> Vec<u8> {
        let mut buf = Vec::new();
        DocxWriter::write(doc, Cursor::new(&mut buf)).unwrap();
        buf
    }

    #[test]
    fn test_package_parts_present() {
        let buf = write_to_buf(&sample_document());
        let mut archive = zip::ZipArchive::new(Cursor::new(&buf[..])).unwrap();
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/_rels/document.xml.rels",
            "word/document.xml",
            "word/styles.xml",
            "word/header1.xml",
            "word/footer1.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part {}", name);
        }
    }

    #[test]
    fn test_header_tab_stop() {
        let buf = write_to_buf(&sample_document());
        let header = unzip_part(&buf, "word/header1.xml");
        assert!(header.contains(r#"<w:tab w:val="center" w:pos="3600"/>"#));
        assert!(header.contains("<w:tab/>"));
        assert!(header.contains("This is a header"));
    }

    #[test]
    fn test_footer_fields() {
        let buf = write_to_buf(&sample_document());
        let footer = unzip_part(&buf, "word/footer1.xml");
        assert!(footer.contains(r#"<w:tab w:val="right" w:pos="8640"/>"#));
        assert!(footer.contains(r#"<w:fldSimple w:instr=" PAGE "/>"#));
        assert!(footer.contains(r#"<w:fldSimple w:instr=" NUMPAGES "/>"#));
        // The field splits the run; the text around it survives in order
        let pg = footer.find("Pg ").unwrap();
        let page = footer.find(r#"w:instr=" PAGE ""#).unwrap();
        let of = footer.find(" of ").unwrap();
        assert!(pg < page && page < of);
    }

    #[test]
    fn test_section_references() {
        let buf = write_to_buf(&sample_document());
        let body = unzip_part(&buf, "word/document.xml");
        assert!(body.contains(r#"<w:headerReference w:type="default" r:id="rId2"/>"#));
        assert!(body.contains(r#"<w:footerReference w:type="default" r:id="rId3"/>"#));

        let rels = unzip_part(&buf, "word/_rels/document.xml.rels");
        assert!(rels.contains(r#"Id="rId2""#) && rels.contains("header1.xml"));
        assert!(rels.contains(r#"Id="rId3""#) && rels.contains("footer1.xml"));
    }

    #[test]
    fn test_table_borders_and_width() {
        let buf = write_to_buf(&sample_document());
        let body = unzip_part(&buf, "word/document.xml");
        // 100% = 5000 pct units; 2pt border = 16 eighth-points
        assert!(body.contains(r#"<w:tblW w:w="5000" w:type="pct"/>"#));
        assert!(body.contains(r#"<w:top w:val="single" w:sz="16" w:space="0" w:color="auto"/>"#));
        // 4in = 5760 twips
        assert!(body.contains(r#"<w:tblW w:w="5760" w:type="dxa"/>"#));
    }

    #[test]
    fn test_span_and_merge_markup() {
        let buf = write_to_buf(&sample_document());
        let body = unzip_part(&buf, "word/document.xml");
        assert!(body.contains(r#"<w:gridSpan w:val="2"/>"#));

        // Restart must precede continue in the serialized body
        let restart = body.find(r#"<w:vMerge w:val="restart"/>"#).unwrap();
        let cont = body.find(r#"<w:vMerge w:val="continue"/>"#).unwrap();
        assert!(restart < cont);
    }

    #[test]
    fn test_highlight_markup() {
        let buf = write_to_buf(&sample_document());
        let body = unzip_part(&buf, "word/document.xml");
        assert!(body.contains(r#"<w:highlight w:val="yellow"/>"#));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut doc = Document::new();
        doc.add_paragraph().add_run().add_text("a < b & c");
        let buf = write_to_buf(&doc);
        let body = unzip_part(&buf, "word/document.xml");
        assert!(body.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        DocxWriter::write_file(&sample_document(), &path).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
