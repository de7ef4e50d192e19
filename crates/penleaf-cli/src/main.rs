//! Penleaf demo - generates a sample document and spreadsheet
//!
//! Builds `header-footer.docx` (headers, footers, tab stops, page-number
//! fields, and tables with merges) and `multiple-chart.xlsx` (a data sheet
//! with formulas and a drawing holding bar and line charts).

use anyhow::{Context, Result};
use clap::Parser;
use penleaf::prelude::*;
use penleaf::BorderStyle;
use std::path::PathBuf;

const LICENSE_KEY: &str = "
-----BEGIN PENLEAF LICENSE KEY-----
eyJsaWNlbnNlX2lkIjogIjdmM2MyYTllLTViMTQtNGQ2YS05YzJlLThhMWYwYjNkN2U1NSIsICJjdXN0b21lcl9pZCI6ICJjOTFkNGIyYS02ZTM3LTRmMDgtYjVhMS0yZDllN2M0ZjhhMTAiLCAiY3VzdG9tZXJfbmFtZSI6ICJIYXd0aG9ybiBBbmFseXRpY3MiLCAiY3VzdG9tZXJfZW1haWwiOiAiZW5nQGhhd3Rob3JuLWFuYWx5dGljcy5leGFtcGxlIiwgInRpZXIiOiAidHJpYWwiLCAiY3JlYXRlZF9hdCI6IDE3NTU5OTM2MDAsICJleHBpcmVzX2F0IjogNDEwMjQ0NDgwMCwgInRyaWFsIjogdHJ1ZX0=
-----END PENLEAF LICENSE KEY-----
";

#[derive(Parser)]
#[command(name = "penleaf")]
#[command(author, version, about = "Generate penleaf sample documents")]
struct Cli {
    /// Directory to write the output files into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    penleaf::license::set_license_key(LICENSE_KEY, "Hawthorn Analytics")
        .context("Failed to set license key")?;

    let cli = Cli::parse();

    let doc = build_document();
    doc.validate().context("error during validation")?;
    let path = cli.out_dir.join("header-footer.docx");
    doc.save(&path)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    log::info!("wrote {}", path.display());

    let workbook = build_workbook();
    workbook.validate().context("error validating sheet")?;
    let path = cli.out_dir.join("multiple-chart.xlsx");
    workbook
        .save(&path)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    log::info!("wrote {}", path.display());

    Ok(())
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

    // Headers and footers are not immediately associated with a document as
    // a document can have multiple headers and footers for different
    // sections.
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

    // First table: full page width with thick borders
    {
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
        let row = table.add_row();
        row.add_cell().add_paragraph().add_run().add_text("Street Address");
        row.add_cell()
            .add_paragraph()
            .add_run()
            .add_text("111 Country Road");
    }

    // break up the consecutive tables
    doc.add_paragraph();

    // Second table: fixed width, thin borders, spans and merges
    {
        let table = doc.add_table();
        table.properties_mut().set_width(Distance::inches(4.0));
        table
            .properties_mut()
            .set_all_borders(BorderStyle::Single, Color::Auto, Distance::ZERO);

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

        let row = table.add_row();
        row.add_cell().add_paragraph().add_run().add_text("Street Address");
        row.add_cell()
            .add_paragraph()
            .add_run()
            .add_text("111 Country Road");
    }

    doc.add_paragraph();
    doc
}

fn build_workbook() -> Workbook {
    let mut workbook = Workbook::new();
    let sheet = workbook.worksheet_mut(0).unwrap();

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

    // Charts need to reside in a drawing
    let mut drawing = Drawing::new();
    let bar = drawing.add_chart(ChartKind::Bar);
    let line = drawing.add_chart(ChartKind::Line);
    add_chart_content(drawing.chart_mut(bar).unwrap(), "Bar Chart");
    add_chart_content(drawing.chart_mut(line).unwrap(), "Line Chart");

    let anchor = drawing.anchor_mut(bar).unwrap();
    anchor.set_width(9);
    anchor.move_to(5, 1);
    drawing.anchor_mut(line).unwrap().move_to(1, 23);

    // and finally add the charts to the sheet
    workbook.worksheet_mut(0).unwrap().set_drawing(drawing);
    workbook
}

fn add_chart_content(chart: &mut Chart, title: &str) {
    chart.set_title(title);

    // The category reference on the first series pulls the product names
    chart.add_series(
        DataSeries::new()
            .with_name("Price")
            .with_categories(DataReference::range("'Sheet 1'!A2:A6"))
            .with_values(DataReference::range("'Sheet 1'!B2:B6")),
    );
    chart.add_series(
        DataSeries::new()
            .with_name("Sold")
            .with_values(DataReference::range("'Sheet 1'!C2:C6")),
    );
    chart.add_series(
        DataSeries::new()
            .with_name("Total")
            .with_values(DataReference::range("'Sheet 1'!D2:D6")),
    );

    let ca = chart.add_category_axis();
    let va = chart.add_value_axis();
    chart.axis_mut(ca).unwrap().set_crosses(va);
    chart.axis_mut(va).unwrap().set_crosses(ca);
}
