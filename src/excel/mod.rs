//! Spreadsheet import for the module ID table
//!
//! - [`ModuleIdReader`] opens the workbook and scans the ID sheet
//! - [`parse_int_literal`] decodes module ID cells written as `0x02`, `02`, `2`

mod literal;
mod reader;

pub use literal::parse_int_literal;
pub use reader::{scan_sheet, ModuleIdReader};
