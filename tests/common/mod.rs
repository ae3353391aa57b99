//! Spreadsheet fixtures shared by the integration tests

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

pub const SHEET: &str = "Module IDs";

/// Value of a module ID cell
#[derive(Clone, Copy)]
pub enum Id {
    Text(&'static str),
    Number(f64),
}

/// One row of the ID table; empty strings leave the cell blank
#[derive(Clone, Copy)]
pub struct Row {
    pub row: u32,
    pub group: &'static str,
    pub name: &'static str,
    pub id: Id,
    pub definition: &'static str,
}

pub const fn row(
    row: u32,
    group: &'static str,
    name: &'static str,
    id: &'static str,
    definition: &'static str,
) -> Row {
    Row {
        row,
        group,
        name,
        id: Id::Text(id),
        definition,
    }
}

/// A table in the shape of the real document: title, header row, IDs from row 6
pub fn standard_rows() -> Vec<Row> {
    vec![
        row(6, "System", "Kernel", "0x00", "MOD_ID_KERNEL"),
        row(7, "", "Spare", "0x01", ""),
        row(8, "", "Fdir", "0x02", "MOD_ID_FDIR"),
        row(9, "", "Event Manager", "0x03", "MOD_ID_EVENTMANAGER"),
        row(10, "Drivers", "Uart", "0x10", "MOD_ID_UART"),
        row(11, "", "Spare", "0x11", ""),
        row(12, "Applications", "Power", "0x30", "MOD_ID_POWER"),
        row(13, "", "Mission", "0x31", "MOD_ID_MISSION"),
    ]
}

/// Write `rows` to a sheet named `sheet_name` in a new workbook at `path`
pub fn write_workbook(path: &Path, sheet_name: &str, rows: &[Row]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).unwrap();

    worksheet.write_string(0, 1, "Constant Module IDs").unwrap();
    for (col, title) in [(1, "Group"), (2, "Module"), (3, "ID"), (4, "Shifted"), (6, "Definition")] {
        worksheet.write_string(4, col, title).unwrap();
    }

    for r in rows {
        let row = r.row - 1;
        for (col, value) in [(1, r.group), (2, r.name), (6, r.definition)] {
            if !value.is_empty() {
                worksheet.write_string(row, col, value).unwrap();
            }
        }
        match r.id {
            Id::Text(text) => {
                worksheet.write_string(row, 3, text).unwrap();
            }
            Id::Number(n) => {
                worksheet.write_number(row, 3, n).unwrap();
            }
        }
    }

    workbook.save(path).unwrap();
}

/// Write the standard table as `<dir>/<file_name>` and return its path
pub fn standard_workbook(dir: &Path, file_name: &str) -> PathBuf {
    let path = dir.join(file_name);
    write_workbook(&path, SHEET, &standard_rows());
    path
}
