//! Generator configuration
//!
//! [`SheetLayout`] pins down where the ID table lives in the workbook;
//! [`GeneratorConfig`] carries the command line options through the pipeline.

use std::path::PathBuf;

/// Where the ID table sits in the workbook.
///
/// Rows are 1-based as displayed by spreadsheet software; columns are
/// 0-based indices (`A` = 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub sheet_name: String,
    pub first_row: u32,
    pub last_row: u32,
    pub group_column: u32,
    pub name_column: u32,
    pub id_column: u32,
    pub definition_column: u32,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            sheet_name: "Module IDs".to_string(),
            first_row: 6,
            last_row: 69,
            group_column: column_index("B"),
            name_column: column_index("C"),
            id_column: column_index("D"),
            definition_column: column_index("G"),
        }
    }
}

impl SheetLayout {
    /// Spreadsheet-style name of a cell, e.g. `D12`
    pub fn cell_name(&self, column: u32, row: u32) -> String {
        format!("{}{}", column_letter(column), row)
    }
}

/// Convert column index to Excel column letter (0→A, 1→B, 25→Z, 26→AA, etc.)
pub fn column_letter(n: u32) -> String {
    let mut result = String::new();
    let mut num = n;

    loop {
        let remainder = num % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if num < 26 {
            break;
        }
        num = num / 26 - 1;
    }

    result
}

/// Convert Excel column letters to a 0-based index (A→0, Z→25, AA→26).
///
/// `letters` must be a non-empty run of ASCII letters.
const fn column_index(letters: &str) -> u32 {
    let bytes = letters.as_bytes();
    let mut value = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 26 + (bytes[i].to_ascii_uppercase() - b'A') as u32 + 1;
        i += 1;
    }
    value - 1
}

/// Options for one generator run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the generated files are written to
    pub output_dir: PathBuf,
    /// Emit `Kernel_app_ids.h` alongside the module ID header
    pub app_ids: bool,
    /// Treat validation errors as fatal
    pub strict: bool,
    /// Render but do not write
    pub dry_run: bool,
    pub verbose: bool,
    pub layout: SheetLayout,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            app_ids: true,
            strict: false,
            dry_run: false,
            verbose: false,
            layout: SheetLayout::default(),
        }
    }
}
