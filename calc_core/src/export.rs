//! # PDF Export
//!
//! Renders a calculator's input and result rows into a PDF report using Typst.
//!
//! ## Architecture
//!
//! - A [`ResultSheet`] snapshots the rows a screen currently shows
//! - The Typst template is an embedded string constant; rows are injected as
//!   table cells before compilation
//! - Compilation happens in memory with the bundled `typst-assets` fonts
//! - Output is raw PDF bytes, or a `<slug>-results.pdf` file written atomically
//!
//! Long tables flow onto following pages and repeat their header row.
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::catalog;
//! use calc_core::settings::Settings;
//!
//! let mut screen = catalog::open("tip", &Settings::default()).unwrap();
//! screen.calculate().unwrap();
//! let sheet = screen.result_sheet().unwrap();
//! let path = calc_core::export::export_results_pdf(&sheet, std::path::Path::new(".")).unwrap();
//! assert!(path.ends_with("tip-results.pdf"));
//! ```

use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::errors::{CalcError, CalcResult};
use crate::file_io::write_atomic;
use crate::template::{Row, RowStyle};

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling one in-memory document.
struct PdfWorld {
    main: Source,
    book: LazyHash<FontBook>,
    fonts: Vec<Font>,
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    fn load_fonts() -> Vec<Font> {
        typst_assets::fonts()
            .flat_map(|font_bytes| Font::iter(Bytes::new(font_bytes.to_vec())))
            .collect()
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Local::now();
        Datetime::from_ymd(now.year(), now.month() as u8, now.day() as u8)
    }
}

// ============================================================================
// Result Sheet
// ============================================================================

/// Snapshot of a screen's rendered rows; the region that gets exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSheet {
    pub slug: String,
    pub title: String,
    pub category: String,
    /// Local time the snapshot was taken, `YYYY-MM-DD HH:MM`
    pub generated_at: String,
    pub inputs: Vec<Row>,
    pub results: Vec<Row>,
}

impl ResultSheet {
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        inputs: Vec<Row>,
        results: Vec<Row>,
    ) -> Self {
        ResultSheet {
            slug: slug.into(),
            title: title.into(),
            category: category.into(),
            generated_at: Local::now().format("%Y-%m-%d %H:%M").to_string(),
            inputs,
            results,
        }
    }
}

/// File name for a calculator's export.
///
/// ```rust
/// assert_eq!(calc_core::export::export_filename("bmi"), "bmi-results.pdf");
/// ```
pub fn export_filename(slug: &str) -> String {
    format!("{}-results.pdf", slug)
}

// ============================================================================
// PDF Template
// ============================================================================

const RESULTS_TEMPLATE: &str = r##"
#set page(
  paper: "us-letter",
  margin: (top: 1in, bottom: 1in, left: 1in, right: 1in),
  header: align(right)[
    #text(size: 9pt, fill: gray)[Calcdeck]
  ],
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr, 1fr),
      align(left)[#text(size: 9pt)[{{SLUG}}]],
      align(center)[#text(size: 9pt)[Page #counter(page).display()]],
      align(right)[#text(size: 9pt)[{{DATE}}]],
    )
  ]
)

#set text(size: 11pt)

#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[{{TITLE}}]
    #v(4pt)
    #text(size: 11pt, fill: gray)[{{CATEGORY}}]
  ]
]

#v(12pt)

== Inputs

#table(
  columns: (1fr, 1.4fr),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right),
  table.header([*Field*], [*Value*]),
{{INPUT_ROWS}}
)

#v(12pt)

== Results

#table(
  columns: (1fr, 1.4fr),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right),
  table.header([*Result*], [*Value*]),
{{RESULT_ROWS}}
)

#v(24pt)
#text(size: 9pt, fill: gray)[
  Generated by Calcdeck on {{DATE}}.
]
"##;

/// Escape text for Typst markup.
fn escape_typst(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(
            c,
            '*' | '_' | '#' | '$' | '@' | '<' | '>' | '\\' | '`' | '[' | ']' | '=' | '-' | '+' | '~' | '/'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn table_rows(rows: &[Row]) -> String {
    if rows.is_empty() {
        return "  table.cell(colspan: 2)[_None_],".to_string();
    }
    rows.iter()
        .map(|r| {
            let label = escape_typst(&r.label);
            let value = escape_typst(&r.value);
            match r.style {
                RowStyle::Normal => format!("  [{}], [{}],", label, value),
                RowStyle::Highlight => format!("  [*{}*], [*{}*],", label, value),
                RowStyle::Section => format!(
                    "  table.cell(colspan: 2, fill: rgb(\"#e8eef7\"), align: left)[*{}*],",
                    label
                ),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compile a result sheet to PDF bytes.
pub fn render_results_pdf(sheet: &ResultSheet) -> CalcResult<Vec<u8>> {
    let source = RESULTS_TEMPLATE
        .replace("{{SLUG}}", &escape_typst(&sheet.slug))
        .replace("{{DATE}}", &escape_typst(&sheet.generated_at))
        .replace("{{TITLE}}", &escape_typst(&sheet.title))
        .replace("{{CATEGORY}}", &escape_typst(&sheet.category))
        .replace("{{INPUT_ROWS}}", &table_rows(&sheet.inputs))
        .replace("{{RESULT_ROWS}}", &table_rows(&sheet.results));

    let world = PdfWorld::new(source);

    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::export_failed(format!("Typst compilation failed: {}", error_msgs.join("; ")))
    })?;

    typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::export_failed(format!("PDF rendering failed: {}", error_msgs.join("; ")))
    })
}

/// Render `sheet` and write it to `dir/<slug>-results.pdf`.
///
/// A sheet without results is rejected. The directory is created if needed
/// and the file is replaced atomically.
pub fn export_results_pdf(sheet: &ResultSheet, dir: &Path) -> CalcResult<PathBuf> {
    if sheet.results.is_empty() {
        return Err(CalcError::export_failed(
            "Nothing to export yet: calculate a result first",
        ));
    }

    std::fs::create_dir_all(dir)
        .map_err(|e| CalcError::file_error("create_dir", dir.display().to_string(), e.to_string()))?;

    let bytes = render_results_pdf(sheet)?;
    let path = dir.join(export_filename(&sheet.slug));
    write_atomic(&path, &bytes)?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "exported results");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str, value: &str, style: RowStyle) -> Row {
        Row {
            label: label.to_string(),
            value: value.to_string(),
            style,
        }
    }

    /// Page count from the page tree's `/Count` entry.
    fn page_count(pdf: &[u8]) -> usize {
        let key = b"/Count";
        pdf.windows(key.len())
            .enumerate()
            .filter(|(_, w)| *w == key)
            .filter_map(|(i, _)| {
                let digits: String = pdf[i + key.len()..]
                    .iter()
                    .skip_while(|b| b.is_ascii_whitespace())
                    .take_while(|b| b.is_ascii_digit())
                    .map(|b| *b as char)
                    .collect();
                digits.parse().ok()
            })
            .max()
            .unwrap_or(0)
    }

    fn sample_sheet() -> ResultSheet {
        ResultSheet::new(
            "tip",
            "Tip Calculator",
            "Financial",
            vec![row("Bill amount", "$80.00", RowStyle::Normal)],
            vec![
                row("Tip amount", "$12.00", RowStyle::Highlight),
                row("Split", "", RowStyle::Section),
                row("Total per person", "$23.00", RowStyle::Normal),
            ],
        )
    }

    #[test]
    fn test_escape_typst() {
        assert_eq!(escape_typst("$5 * 2"), "\\$5 \\* 2");
        assert_eq!(escape_typst("1/2 = 0.5"), "1\\/2 \\= 0.5");
        assert_eq!(escape_typst("plain"), "plain");
    }

    #[test]
    fn test_table_rows_styles() {
        let rows = table_rows(&sample_sheet().results);
        assert!(rows.contains("[*Tip amount*]"));
        assert!(rows.contains("colspan: 2"));
        assert!(table_rows(&[]).contains("_None_"));
    }

    #[test]
    fn test_pdf_generation() {
        let pdf = render_results_pdf(&sample_sheet());
        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());
        let pdf_bytes = pdf.unwrap();
        assert!(pdf_bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
        assert!(pdf_bytes.len() > 1000, "PDF seems too small");
    }

    #[test]
    fn test_long_table_spans_pages() {
        let mut sheet = sample_sheet();
        sheet.results = (1..=120)
            .map(|i| row(&format!("Year {}", i), "$1,000.00", RowStyle::Normal))
            .collect();
        let bytes = render_results_pdf(&sheet).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(page_count(&bytes) > 1, "120 rows fit on {} page(s)", page_count(&bytes));

        sheet.results.truncate(1);
        let short = render_results_pdf(&sheet).unwrap();
        assert_eq!(page_count(&short), 1);
    }

    #[test]
    fn test_export_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_results_pdf(&sample_sheet(), &dir.path().join("out")).unwrap();
        assert_eq!(path.file_name().unwrap(), "tip-results.pdf");
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(!dir.path().join("out").join("tip-results.pdf.tmp").exists());
    }

    #[test]
    fn test_export_without_results_fails() {
        let mut sheet = sample_sheet();
        sheet.results.clear();
        let dir = tempfile::tempdir().unwrap();
        let err = export_results_pdf(&sheet, dir.path()).unwrap_err();
        assert_eq!(err.error_code(), "EXPORT_FAILED");
    }
}
