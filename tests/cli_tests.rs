//! End-to-end report tests: workbook on disk → rendered text

mod common;

use common::{quantity_sheet, write_workbook, Fixture};
use pretty_assertions::assert_eq;
use sheet_inspect::cli::commands::{self, Mode, OutputFormat, RenderOptions};
use sheet_inspect::{InspectConfig, InspectError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn plain() -> RenderOptions {
    RenderOptions {
        format: OutputFormat::Text,
        color: false,
    }
}

fn config_for(path: &Path) -> InspectConfig {
    InspectConfig {
        file: path.to_path_buf(),
        ..Default::default()
    }
}

fn rule() -> String {
    "=".repeat(80)
}

// ═══════════════════════════════════════════════════════════════════════════
// HEADERS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_headers_output() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&quantity_sheet(&dir));

    let out = commands::inspect(Mode::Headers, &config, plain()).unwrap();
    let rule = rule();
    let expected = format!(
        "{rule}
Column headers (rows 1-10)
{rule}

A column:
  row1: 구분
  row2: 지하1층

B column:
  row1: 부재
  row2: 기초 매트 슬래브 및 지중보 일체 타설 구간 (A~F열...

L column:
  row1: 형틀(M2)
  row2: 120.5

M column:
  row1: 철근(TON)
  row2: 3.2

N column:
  row1: 콘크리트(M3)
  row2: =L2*0.15
"
    );
    assert_eq!(out, expected);
}

#[test]
fn test_headers_row_limit() {
    let dir = TempDir::new().unwrap();
    let config = InspectConfig {
        header_rows: 1,
        ..config_for(&quantity_sheet(&dir))
    };

    let out = commands::inspect(Mode::Headers, &config, plain()).unwrap();
    assert!(out.contains("Column headers (rows 1-1)"));
    assert!(!out.contains("row2:"));
}

// ═══════════════════════════════════════════════════════════════════════════
// RANGES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_ranges_output() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&quantity_sheet(&dir));

    let out = commands::inspect(Mode::Ranges { show_types: false }, &config, plain()).unwrap();
    let rule = rule();
    let expected = format!(
        "{rule}
Column data: L, M, N
{rule}

L column data:
  L1: 형틀(M2)
  L2: 120.5
  L15: 7

M column data:
  M1: 철근(TON)
  M2: 3.2

N column data:
  N1: 콘크리트(M3)
  N2: =L2*0.15

{rule}
Header area (rows 1-10)
{rule}

Row 1:
  A1: 구분
  B1: 부재
  L1: 형틀(M2)
  M1: 철근(TON)
  N1: 콘크리트(M3)

Row 2:
  A2: 지하1층
  B2: 기초 매트 슬래브 및 지중보 일체 타설 구간 (A~F열)
  L2: 120.5
  M2: 3.2
  N2: =L2*0.15
"
    );
    assert_eq!(out, expected);
}

#[test]
fn test_ranges_scenario_l5_n5() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(
        dir.path(),
        "lmn.xlsx",
        &[Fixture::Number(4, 11, 12.5), Fixture::Text(4, 13, "TON")],
    );

    let out =
        commands::inspect(Mode::Ranges { show_types: false }, &config_for(&path), plain()).unwrap();
    assert!(out.contains("\n  L5: 12.5\n"));
    assert!(out.contains("\n  N5: TON\n"));
    assert!(!out.contains("M5"));
}

#[test]
fn test_ranges_with_types() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&quantity_sheet(&dir));

    let out = commands::inspect(Mode::Ranges { show_types: true }, &config, plain()).unwrap();
    assert!(out.contains("  L2: 120.5 (type: n)\n"));
    assert!(out.contains("  M1: 철근(TON) (type: s)\n"));
    assert!(out.contains("  N2: =L2*0.15 (type: f)\n"));
}

#[test]
fn test_ranges_custom_columns() {
    let dir = TempDir::new().unwrap();
    let config = InspectConfig {
        report_columns: vec!["A".to_string(), "2".to_string()],
        ..config_for(&quantity_sheet(&dir))
    };

    let out = commands::inspect(Mode::Ranges { show_types: false }, &config, plain()).unwrap();
    assert!(out.contains("Column data: A, B\n"));
    assert!(out.contains("\nA column data:\n  A1: 구분\n  A2: 지하1층\n"));
}

// ═══════════════════════════════════════════════════════════════════════════
// KEYWORDS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_keywords_output() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&quantity_sheet(&dir));

    let out = commands::inspect(Mode::Keywords, &config, plain()).unwrap();
    let rule = rule();
    let expected = format!(
        "{rule}
Keyword search (formwork, rebar, concrete)
{rule}

Matching cells:
  L1: 형틀(M2)
  M1: 철근(TON)
  N1: 콘크리트(M3)

{rule}
Full sheet (all rows, all columns)
{rule}

Row 1:
  A: 구분
  B: 부재
  L: 형틀(M2)
  M: 철근(TON)
  N: 콘크리트(M3)

Row 2:
  A: 지하1층
  B: 기초 매트 슬래브 및 지중보 일체 타...
  L: 120.5
  M: 3.2
  N: =L2*0.15

Row 15:
  L: 7
"
    );
    assert_eq!(out, expected);
}

#[test]
fn test_keywords_single_formwork_cell() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(dir.path(), "one.xlsx", &[Fixture::Text(0, 0, "형틀")]);

    let out = commands::inspect(Mode::Keywords, &config_for(&path), plain()).unwrap();
    assert!(out.contains("\nMatching cells:\n  A1: 형틀\n"));
    assert!(out.ends_with("\nRow 1:\n  A: 형틀\n"));
    assert_eq!(out.matches("Row ").count(), 1);
}

#[test]
fn test_keywords_custom_list_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let config = InspectConfig {
        keywords: vec!["ton".to_string()],
        ..config_for(&quantity_sheet(&dir))
    };

    let out = commands::inspect(Mode::Keywords, &config, plain()).unwrap();
    assert!(out.contains("\nMatching cells:\n  M1: 철근(TON)\n\n"));
}

// ═══════════════════════════════════════════════════════════════════════════
// EMPTY / MISSING WORKBOOKS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_empty_workbook_prints_only_headings() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&write_workbook(dir.path(), "empty.xlsx", &[]));
    let rule = rule();

    let headers = commands::inspect(Mode::Headers, &config, plain()).unwrap();
    assert_eq!(headers, format!("{rule}\nColumn headers (rows 1-10)\n{rule}\n"));

    let ranges = commands::inspect(Mode::Ranges { show_types: false }, &config, plain()).unwrap();
    assert_eq!(
        ranges,
        format!(
            "{rule}\nColumn data: L, M, N\n{rule}\n\nL column data:\n\nM column data:\n\nN column data:\n\n{rule}\nHeader area (rows 1-10)\n{rule}\n"
        )
    );

    let keywords = commands::inspect(Mode::Keywords, &config, plain()).unwrap();
    assert_eq!(
        keywords,
        format!(
            "{rule}\nKeyword search (formwork, rebar, concrete)\n{rule}\n\nNo cells matched the keywords.\n\n{rule}\nFull sheet (all rows, all columns)\n{rule}\n"
        )
    );
}

#[test]
fn test_missing_workbook() {
    let config = config_for(&PathBuf::from("does/not/exist.xlsx"));
    for mode in [Mode::Headers, Mode::Ranges { show_types: false }, Mode::Keywords] {
        let result = commands::inspect(mode, &config, plain());
        assert!(matches!(result, Err(InspectError::FileNotFound(_))));
    }
}

#[test]
fn test_repeated_runs_identical() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&quantity_sheet(&dir));

    for mode in [Mode::Headers, Mode::Ranges { show_types: true }, Mode::Keywords] {
        let first = commands::inspect(mode, &config, plain()).unwrap();
        let second = commands::inspect(mode, &config, plain()).unwrap();
        assert_eq!(first, second);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// JSON
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_headers_json() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&quantity_sheet(&dir));
    let options = RenderOptions {
        format: OutputFormat::Json,
        color: false,
    };

    let out = commands::inspect(Mode::Headers, &config, options).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let columns = value["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 5);
    assert_eq!(columns[4]["letter"], "N");
    assert_eq!(columns[4]["entries"][1]["value"], "=L2*0.15");
}
