//! Fixture workbooks shared by the integration tests

#![allow(dead_code)]

use rust_xlsxwriter::{ExcelDateTime, Format, Formula, Workbook};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Value written into a fixture cell (row, column are 0-based)
pub enum Fixture<'a> {
    Text(u32, u16, &'a str),
    Number(u32, u16, f64),
    Formula(u32, u16, &'a str),
    Date(u32, u16, u16, u8, u8),
}

/// Write a single-sheet workbook into `dir`
pub fn write_workbook(dir: &Path, name: &str, cells: &[Fixture]) -> PathBuf {
    write_workbook_with_sheets(dir, name, &[("Sheet1", cells)])
}

/// Write a workbook with several named sheets
pub fn write_workbook_with_sheets(
    dir: &Path,
    name: &str,
    sheets: &[(&str, &[Fixture])],
) -> PathBuf {
    let path = dir.join(name);
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (sheet_name, cells) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*sheet_name).unwrap();

        for cell in cells.iter() {
            match *cell {
                Fixture::Text(r, c, s) => {
                    worksheet.write_string(r, c, s).unwrap();
                }
                Fixture::Number(r, c, n) => {
                    worksheet.write_number(r, c, n).unwrap();
                }
                Fixture::Formula(r, c, f) => {
                    worksheet.write_formula(r, c, Formula::new(f)).unwrap();
                }
                Fixture::Date(r, c, y, m, d) => {
                    let date = ExcelDateTime::from_ymd(y, m, d).unwrap();
                    worksheet
                        .write_datetime_with_format(r, c, &date, &date_format)
                        .unwrap();
                }
            }
        }
    }

    workbook.save(&path).unwrap();
    path
}

/// The sample sheet used across tests: a small quantity take-off
pub fn quantity_sheet(dir: &TempDir) -> PathBuf {
    write_workbook(
        dir.path(),
        "quantities.xlsx",
        &[
            Fixture::Text(0, 0, "구분"),
            Fixture::Text(0, 1, "부재"),
            Fixture::Text(0, 11, "형틀(M2)"),
            Fixture::Text(0, 12, "철근(TON)"),
            Fixture::Text(0, 13, "콘크리트(M3)"),
            Fixture::Text(1, 0, "지하1층"),
            Fixture::Text(1, 1, "기초 매트 슬래브 및 지중보 일체 타설 구간 (A~F열)"),
            Fixture::Number(1, 11, 120.5),
            Fixture::Number(1, 12, 3.2),
            Fixture::Formula(1, 13, "=L2*0.15"),
            Fixture::Number(14, 11, 7.0),
        ],
    )
}
