//! Drawing and chart part XML
//!
//! A sheet's drawing becomes one `xl/drawings/drawingN.xml` part holding a
//! two-cell anchor per chart, plus one `xl/charts/chartM.xml` part per
//! chart. Relationship ids inside a drawing are local; chart part numbers
//! are workbook-wide.

use quick_xml::escape::escape;

use penleaf_chart::{Axis, AxisKind, Chart, ChartKind, DataReference, Drawing, TwoCellAnchor};

const XDR_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/spreadsheetDrawing";
const A_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const C_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Serialize a drawing part
pub(crate) fn drawing_xml(drawing: &Drawing, chart_base: usize) -> String {
    let mut content = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<xdr:wsDr xmlns:xdr="{}" xmlns:a="{}">"#,
        XDR_NS, A_NS
    );

    for (k, anchored) in drawing.charts().iter().enumerate() {
        let number = chart_base + k + 1;
        content.push_str(&anchor_xml(&anchored.anchor, k + 1, number));
    }

    content.push_str("\n</xdr:wsDr>");
    content
}

fn anchor_xml(anchor: &TwoCellAnchor, rid: usize, chart_number: usize) -> String {
    format!(
        r#"
    <xdr:twoCellAnchor>
        <xdr:from><xdr:col>{}</xdr:col><xdr:colOff>0</xdr:colOff><xdr:row>{}</xdr:row><xdr:rowOff>0</xdr:rowOff></xdr:from>
        <xdr:to><xdr:col>{}</xdr:col><xdr:colOff>0</xdr:colOff><xdr:row>{}</xdr:row><xdr:rowOff>0</xdr:rowOff></xdr:to>
        <xdr:graphicFrame macro="">
            <xdr:nvGraphicFramePr>
                <xdr:cNvPr id="{}" name="Chart {}"/>
                <xdr:cNvGraphicFramePr/>
            </xdr:nvGraphicFramePr>
            <xdr:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/></xdr:xfrm>
            <a:graphic>
                <a:graphicData uri="{}">
                    <c:chart xmlns:c="{}" xmlns:r="{}" r:id="rId{}"/>
                </a:graphicData>
            </a:graphic>
        </xdr:graphicFrame>
        <xdr:clientData/>
    </xdr:twoCellAnchor>"#,
        anchor.from_col,
        anchor.from_row,
        anchor.to_col,
        anchor.to_row,
        rid,
        chart_number,
        C_NS,
        C_NS,
        R_NS,
        rid
    )
}

/// Serialize a drawing part's relationships
pub(crate) fn drawing_rels_xml(chart_count: usize, chart_base: usize) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );

    for k in 0..chart_count {
        content.push_str(&format!(
            r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/chart" Target="../charts/chart{}.xml"/>"#,
            k + 1,
            chart_base + k + 1
        ));
    }

    content.push_str("\n</Relationships>");
    content
}

/// Serialize a chart part
pub(crate) fn chart_xml(chart: &Chart) -> String {
    let mut content = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<c:chartSpace xmlns:c="{}" xmlns:a="{}" xmlns:r="{}">
    <c:chart>"#,
        C_NS, A_NS, R_NS
    );

    if let Some(title) = chart.title() {
        content.push_str(&format!(
            r#"
        <c:title>
            <c:tx><c:rich><a:bodyPr/><a:lstStyle/><a:p><a:r><a:t>{}</a:t></a:r></a:p></c:rich></c:tx>
            <c:overlay val="0"/>
        </c:title>
        <c:autoTitleDeleted val="0"/>"#,
            escape(title)
        ));
    }

    content.push_str("\n        <c:plotArea>\n            <c:layout/>");
    content.push_str(&plot_group_xml(chart));
    for axis in chart.axes() {
        content.push_str(&axis_xml(axis));
    }
    content.push_str("\n        </c:plotArea>");

    content.push_str(
        r#"
        <c:plotVisOnly val="1"/>
    </c:chart>
</c:chartSpace>"#,
    );
    content
}

fn plot_group_xml(chart: &Chart) -> String {
    let (element, settings) = match chart.kind() {
        ChartKind::Bar => (
            "c:barChart",
            "<c:barDir val=\"col\"/><c:grouping val=\"clustered\"/>",
        ),
        ChartKind::Line => ("c:lineChart", "<c:grouping val=\"standard\"/>"),
    };

    let mut content = format!("\n            <{}>{}", element, settings);

    for (index, series) in chart.series().iter().enumerate() {
        content.push_str(&format!(
            "\n                <c:ser>\n                    <c:idx val=\"{}\"/><c:order val=\"{}\"/>",
            index, index
        ));
        if let Some(name) = &series.name {
            content.push_str(&format!(
                "\n                    <c:tx><c:v>{}</c:v></c:tx>",
                escape(name)
            ));
        }
        if let Some(categories) = &series.categories {
            content.push_str(&format!(
                "\n                    <c:cat>{}</c:cat>",
                category_data_xml(categories)
            ));
        }
        if let Some(values) = &series.values {
            content.push_str(&format!(
                "\n                    <c:val>{}</c:val>",
                value_data_xml(values)
            ));
        }
        content.push_str("\n                </c:ser>");
    }

    for axis in chart.axes() {
        content.push_str(&format!(
            "\n                <c:axId val=\"{}\"/>",
            axis.id().0
        ));
    }

    content.push_str(&format!("\n            </{}>", element));
    content
}

fn axis_xml(axis: &Axis) -> String {
    let element = match axis.kind() {
        AxisKind::Category => "c:catAx",
        AxisKind::Value => "c:valAx",
    };

    let mut content = format!(
        r#"
            <{}>
                <c:axId val="{}"/>
                <c:scaling><c:orientation val="minMax"/></c:scaling>
                <c:delete val="0"/>
                <c:axPos val="{}"/>"#,
        element,
        axis.id().0,
        axis.position().code()
    );

    if let Some(partner) = axis.crosses() {
        content.push_str(&format!(
            "\n                <c:crossAx val=\"{}\"/>",
            partner.0
        ));
    }

    content.push_str(&format!("\n            </{}>", element));
    content
}

/// Category data: string references and literals
fn category_data_xml(reference: &DataReference) -> String {
    match reference {
        DataReference::Range(range) => {
            format!("<c:strRef><c:f>{}</c:f></c:strRef>", escape(range))
        }
        DataReference::Strings(values) => {
            let mut content = format!("<c:strLit><c:ptCount val=\"{}\"/>", values.len());
            for (idx, value) in values.iter().enumerate() {
                content.push_str(&format!(
                    "<c:pt idx=\"{}\"><c:v>{}</c:v></c:pt>",
                    idx,
                    escape(value)
                ));
            }
            content.push_str("</c:strLit>");
            content
        }
        DataReference::Numbers(values) => numbers_literal_xml(values),
    }
}

/// Value data: numeric references and literals
fn value_data_xml(reference: &DataReference) -> String {
    match reference {
        DataReference::Range(range) => {
            format!("<c:numRef><c:f>{}</c:f></c:numRef>", escape(range))
        }
        DataReference::Numbers(values) => numbers_literal_xml(values),
        DataReference::Strings(values) => {
            // Strings in a value position render as a string literal; the
            // consumer treats non-numeric points as gaps
            let mut content = format!("<c:strLit><c:ptCount val=\"{}\"/>", values.len());
            for (idx, value) in values.iter().enumerate() {
                content.push_str(&format!(
                    "<c:pt idx=\"{}\"><c:v>{}</c:v></c:pt>",
                    idx,
                    escape(value)
                ));
            }
            content.push_str("</c:strLit>");
            content
        }
    }
}

fn numbers_literal_xml(values: &[f64]) -> String {
    let mut content = format!("<c:numLit><c:ptCount val=\"{}\"/>", values.len());
    for (idx, value) in values.iter().enumerate() {
        content.push_str(&format!(
            "<c:pt idx=\"{}\"><c:v>{}</c:v></c:pt>",
            idx, value
        ));
    }
    content.push_str("</c:numLit>");
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use penleaf_chart::DataSeries;

    fn demo_chart(kind: ChartKind) -> Chart {
        let mut chart = Chart::new(kind);
        chart.set_title("Items Sold");
        for name in ["Price", "Quantity", "Total"] {
            let column = match name {
                "Price" => 'B',
                "Quantity" => 'C',
                _ => 'D',
            };
            chart.add_series(
                DataSeries::new()
                    .with_name(name)
                    .with_categories(DataReference::range("'Sheet 1'!A2:A6"))
                    .with_values(DataReference::range(format!("'Sheet 1'!{}2:{}6", column, column))),
            );
        }
        let ca = chart.add_category_axis();
        let va = chart.add_value_axis();
        chart.axis_mut(ca).unwrap().set_crosses(va);
        chart.axis_mut(va).unwrap().set_crosses(ca);
        chart
    }

    #[test]
    fn test_bar_chart_xml() {
        let xml = chart_xml(&demo_chart(ChartKind::Bar));
        assert!(xml.contains("<c:barChart>"));
        assert!(xml.contains(r#"<c:barDir val="col"/>"#));
        assert!(xml.contains(r#"<c:grouping val="clustered"/>"#));
        assert!(xml.contains("<a:t>Items Sold</a:t>"));
        assert_eq!(xml.matches("<c:ser>").count(), 3);
    }

    #[test]
    fn test_line_chart_xml() {
        let xml = chart_xml(&demo_chart(ChartKind::Line));
        assert!(xml.contains("<c:lineChart>"));
        assert!(!xml.contains("<c:barDir"));
    }

    #[test]
    fn test_series_references() {
        let xml = chart_xml(&demo_chart(ChartKind::Bar));
        assert!(xml.contains("<c:tx><c:v>Price</c:v></c:tx>"));
        assert!(xml.contains("<c:strRef><c:f>&apos;Sheet 1&apos;!A2:A6</c:f></c:strRef>"));
        assert!(xml.contains("<c:numRef><c:f>&apos;Sheet 1&apos;!B2:B6</c:f></c:numRef>"));
        assert!(xml.contains("<c:numRef><c:f>&apos;Sheet 1&apos;!D2:D6</c:f></c:numRef>"));
    }

    #[test]
    fn test_axes_cross_links() {
        let xml = chart_xml(&demo_chart(ChartKind::Bar));
        // Category axis 1 crosses value axis 2, and the reverse
        assert!(xml.contains(r#"<c:axId val="1"/>"#));
        assert!(xml.contains(r#"<c:axId val="2"/>"#));
        assert!(xml.contains(r#"<c:axPos val="b"/>"#));
        assert!(xml.contains(r#"<c:axPos val="l"/>"#));
        let cat = xml.find("<c:catAx>").unwrap();
        let val = xml.find("<c:valAx>").unwrap();
        assert!(xml[cat..val].contains(r#"<c:crossAx val="2"/>"#));
        assert!(xml[val..].contains(r#"<c:crossAx val="1"/>"#));
    }

    #[test]
    fn test_literal_data() {
        let mut chart = Chart::new(ChartKind::Line);
        chart.add_series(
            DataSeries::new()
                .with_categories(DataReference::strings(vec!["a".into(), "b".into()]))
                .with_values(DataReference::numbers(vec![1.5, 2.0])),
        );
        let xml = chart_xml(&chart);
        assert!(xml.contains(r#"<c:strLit><c:ptCount val="2"/><c:pt idx="0"><c:v>a</c:v></c:pt>"#));
        assert!(xml.contains(r#"<c:numLit><c:ptCount val="2"/><c:pt idx="0"><c:v>1.5</c:v></c:pt>"#));
    }

    #[test]
    fn test_drawing_anchors() {
        let mut drawing = Drawing::new();
        let bar = drawing.add_chart(ChartKind::Bar);
        let line = drawing.add_chart(ChartKind::Line);
        drawing.anchor_mut(bar).unwrap().set_width(9);
        drawing.anchor_mut(bar).unwrap().move_to(5, 1);
        drawing.anchor_mut(line).unwrap().move_to(1, 23);

        let xml = drawing_xml(&drawing, 0);
        assert_eq!(xml.matches("<xdr:twoCellAnchor>").count(), 2);
        assert!(xml.contains("<xdr:col>5</xdr:col>"));
        assert!(xml.contains("<xdr:col>14</xdr:col>"));
        assert!(xml.contains("<xdr:row>23</xdr:row>"));
        assert!(xml.contains("<xdr:row>38</xdr:row>"));
        assert!(xml.contains(r#"r:id="rId1""#));
        assert!(xml.contains(r#"r:id="rId2""#));
    }

    #[test]
    fn test_drawing_rels_numbering() {
        let rels = drawing_rels_xml(1, 1);
        // Drawing-local rId1 points at the workbook-wide chart2 part
        assert!(rels.contains(r#"Id="rId1""#));
        assert!(rels.contains("../charts/chart2.xml"));
    }
}
