//! End-to-end save tests: build the document and workbook, validate, save
//! through the extension traits, and check the packages that land on disk.

use std::io::Read;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use penleaf::prelude::*;
use penleaf::{BorderStyle, Highlight};

fn set_test_license() {
    let payload = concat!(
        r#"{"license_id":"11111111-2222-3333-4444-555555555555","#,
        r#""customer_id":"66666666-7777-8888-9999-000000000000","#,
        r#""customer_name":"Test Co","customer_email":"eng@test-co.example","#,
        r#""tier":"trial","created_at":1700000000,"expires_at":4102444800,"trial":true}"#
    );
    let key = format!(
        "-----BEGIN PENLEAF LICENSE KEY-----\n{}\n-----END PENLEAF LICENSE KEY-----",
        BASE64.encode(payload)
    );
    penleaf::license::set_license_key(&key, "Test Co").unwrap();
}

fn read_part(path: &std::path::Path, name: &str) -> String {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut content = String::new();
    part.read_to_string(&mut content).unwrap();
    content
}

fn build_document() -> Document {
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
    for (name, value) in [("Name", "John Smith"), ("Street Address", "111 Country Road")] {
        let row = table.add_row();
        let run = row.add_cell().add_paragraph().add_run();
        run.add_text(name);
        run.properties_mut().set_highlight(Highlight::Yellow);
        row.add_cell().add_paragraph().add_run().add_text(value);
    }

    doc.add_paragraph();

    let table = doc.add_table();
    table.properties_mut().set_width(Distance::inches(4.0));
    table
        .properties_mut()
        .set_all_borders(BorderStyle::Single, Color::Auto, Distance::points(2.0));
    let row = table.add_row();
    let cell = row.add_cell();
    cell.properties_mut().set_column_span(2);
    cell.add_paragraph()
        .add_run()
        .add_text("Cells can span multiple columns");
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

fn build_workbook() -> Workbook {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();

    for (col, header) in ["Item", "Price", "# Sold", "Total"].iter().enumerate() {
        sheet.set_cell_value_at(0, col as u16, *header).unwrap();
    }
    for r in 0..5u32 {
        sheet
            .set_cell_value_at(r + 1, 0, format!("Product {}", r + 1))
            .unwrap();
        sheet
            .set_cell_value_at(r + 1, 1, 1.23 * (r + 1) as f64)
            .unwrap();
        sheet.set_cell_value_at(r + 1, 2, (r % 3 + 1) as f64).unwrap();
        sheet
            .set_cell_formula_at(r + 1, 3, &format!("C{}*B{}", r + 2, r + 2))
            .unwrap();
    }

    let mut drawing = Drawing::new();
    for (kind, title) in [(ChartKind::Bar, "Items Sold"), (ChartKind::Line, "Profit")] {
        let id = drawing.add_chart(kind);
        let chart = drawing.chart_mut(id).unwrap();
        chart.set_title(title);
        for (name, col) in [("Price", 'B'), ("Quantity", 'C'), ("Total", 'D')] {
            chart.add_series(
                DataSeries::new()
                    .with_name(name)
                    .with_categories(DataReference::range("'Sheet 1'!A2:A6"))
                    .with_values(DataReference::range(format!("'Sheet 1'!{}2:{}6", col, col))),
            );
        }
        let ca = chart.add_category_axis();
        let va = chart.add_value_axis();
        chart.axis_mut(ca).unwrap().set_crosses(va);
        chart.axis_mut(va).unwrap().set_crosses(ca);
    }
    wb.worksheet_mut(0).unwrap().set_drawing(drawing);
    wb
}

#[test]
fn test_save_docx() {
    set_test_license();

    let doc = build_document();
    doc.validate().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("header-footer.docx");
    doc.save(&path).unwrap();

    let body = read_part(&path, "word/document.xml");
    assert!(body.contains(r#"<w:headerReference w:type="default""#));
    assert!(body.contains(r#"<w:footerReference w:type="default""#));
    assert!(body.contains(r#"<w:gridSpan w:val="2"/>"#));
    assert!(body.contains(r#"<w:vMerge w:val="restart"/>"#));
    assert!(body.contains(r#"<w:vMerge w:val="continue"/>"#));
    assert!(body.contains(r#"<w:highlight w:val="yellow"/>"#));

    let header = read_part(&path, "word/header1.xml");
    assert!(header.contains("This is a header"));

    let footer = read_part(&path, "word/footer1.xml");
    assert!(footer.contains(r#"<w:fldSimple w:instr=" PAGE "/>"#));
    assert!(footer.contains(r#"<w:fldSimple w:instr=" NUMPAGES "/>"#));
}

#[test]
fn test_save_xlsx() {
    set_test_license();

    let wb = build_workbook();
    wb.validate().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("multiple-chart.xlsx");
    wb.save(&path).unwrap();

    let sheet = read_part(&path, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains("<t>Product 1</t>"));
    assert!(sheet.contains("<f>C6*B6</f>"));
    assert!(sheet.contains(r#"<drawing r:id="rId1"/>"#));

    // Both charts sit in one drawing, each with its own part
    let bar = read_part(&path, "xl/charts/chart1.xml");
    assert!(bar.contains("<c:barChart>"));
    assert!(bar.contains("<a:t>Items Sold</a:t>"));
    assert_eq!(bar.matches("<c:ser>").count(), 3);

    let line = read_part(&path, "xl/charts/chart2.xml");
    assert!(line.contains("<c:lineChart>"));
    assert!(line.contains("<a:t>Profit</a:t>"));
}

#[test]
fn test_validate_catches_dangling_merge() {
    let mut doc = Document::new();
    let table = doc.add_table();
    table
        .add_row()
        .add_cell()
        .properties_mut()
        .set_vertical_merge(VerticalMerge::Continue);
    assert!(doc.validate().is_err());
}

#[test]
fn test_validate_catches_one_sided_axis_link() {
    let mut wb = Workbook::new();
    let mut drawing = Drawing::new();
    let id = drawing.add_chart(ChartKind::Bar);
    let chart = drawing.chart_mut(id).unwrap();
    chart.add_series(DataSeries::new().with_values(DataReference::numbers(vec![1.0])));
    let ca = chart.add_category_axis();
    let va = chart.add_value_axis();
    chart.axis_mut(ca).unwrap().set_crosses(va);
    // Value axis never linked back
    wb.worksheet_mut(0).unwrap().set_drawing(drawing);
    assert!(wb.validate().is_err());
}

#[test]
fn test_unsupported_extension() {
    set_test_license();
    let wb = Workbook::new();
    let dir = tempfile::tempdir().unwrap();
    assert!(wb.save(dir.path().join("out.xls")).is_err());

    let doc = Document::new();
    assert!(doc.save(dir.path().join("out.doc")).is_err());
}
