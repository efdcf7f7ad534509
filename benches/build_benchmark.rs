//! Benchmarks for weight table generation.
//!
//! Run with: cargo bench
//!
//! Synthetic catalog workbooks of growing row counts go through the full
//! read, transform and render path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const SHEET: &str = "Canam Deck Catalog";

/// Creates a catalog workbook with `row_count` data rows below a banner and header.
fn create_catalog(row_count: usize) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
    let options = SimpleFileOptions::default();

    zip.start_file("xl/workbook.xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets><sheet name="Canam Deck Catalog" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#,
    )
    .unwrap();

    zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#,
    )
    .unwrap();

    let profiles = ["VULCRAFT W", "B", "N", "LOK", "CANAM PLT"];
    let headers = ["CONCAT", "DEPTH", "PROFILE", "GAUGE", "UNC", "G30", "G60", "G90"];
    let mut sst = String::from(r#"<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#);
    for text in headers.iter().chain(profiles.iter()) {
        sst.push_str(&format!("<si><t>{}</t></si>", text));
    }
    sst.push_str("</sst>");
    zip.start_file("xl/sharedStrings.xml", options).unwrap();
    zip.write_all(sst.as_bytes()).unwrap();

    let mut sheet = String::from(
        r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    sheet.push_str(r#"<row r="1"><c r="A1" t="inlineStr"><is><t>Catalog</t></is></c></row><row r="2">"#);
    for (i, column) in ["A", "B", "C", "D", "E", "F", "G", "H"].iter().enumerate() {
        sheet.push_str(&format!(r#"<c r="{}2" t="s"><v>{}</v></c>"#, column, i));
    }
    sheet.push_str("</row>");

    for i in 0..row_count {
        let r = i + 3;
        let depth = 1.5 + (i % 4) as f64 * 0.5;
        let profile = headers.len() + i % profiles.len();
        let gauge = 16 + (i % 5) * 2;
        let unc = 150.0 + (i % 97) as f64 * 1.3;
        sheet.push_str(&format!(
            r#"<row r="{r}"><c r="B{r}"><v>{depth:.1}</v></c><c r="C{r}" t="s"><v>{profile}</v></c><c r="D{r}"><v>{gauge}</v></c><c r="E{r}"><v>{unc}</v></c><c r="F{r}"><v>{g30}</v></c><c r="H{r}"><v>{g90}</v></c></row>"#,
            r = r,
            depth = depth,
            profile = profile,
            gauge = gauge,
            unc = unc,
            g30 = unc + 2.0,
            g90 = unc + 6.5,
        ));
    }
    sheet.push_str("</sheetData></worksheet>");
    zip.start_file("xl/worksheets/sheet1.xml", options).unwrap();
    zip.write_all(sheet.as_bytes()).unwrap();

    zip.finish().unwrap();
    buffer
}

fn bench_build_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_from_bytes");

    for row_count in [100, 1_000, 10_000] {
        let data = create_catalog(row_count);
        group.throughput(Throughput::Elements(row_count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(row_count), &data, |b, data| {
            b.iter(|| deck_weights::table_from_bytes(black_box(data.clone()), SHEET).unwrap())
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let table = deck_weights::table_from_bytes(create_catalog(10_000), SHEET).unwrap();

    c.bench_function("to_script", |b| {
        b.iter(|| deck_weights::render::to_script(black_box(&table), "DECK_LBS_PER_SQ").unwrap())
    });
}

criterion_group!(benches, bench_build_table, bench_render);
criterion_main!(benches);
