//! Module ID table reader - workbook → ordered [`IdRecord`] list

use crate::config::SheetLayout;
use crate::error::{ModIdError, ModIdResult};
use crate::excel::literal::parse_int_literal;
use crate::types::IdRecord;
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads the module ID table out of a spreadsheet
pub struct ModuleIdReader {
    path: PathBuf,
    layout: SheetLayout,
}

impl ModuleIdReader {
    /// Create a reader using the standard table layout
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            layout: SheetLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: SheetLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Open the workbook and scan the ID sheet
    pub fn read(&self) -> ModIdResult<Vec<IdRecord>> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            ModIdError::Workbook(format!(
                "Failed to open '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let range = workbook
            .worksheet_range(&self.layout.sheet_name)
            .map_err(|e| {
                ModIdError::Workbook(format!(
                    "Failed to read sheet '{}': {}",
                    self.layout.sheet_name, e
                ))
            })?;

        let records = scan_sheet(&range, &self.layout)?;
        info!(
            path = %self.path.display(),
            sheet = %self.layout.sheet_name,
            records = records.len(),
            "read module ID table"
        );
        Ok(records)
    }
}

/// Scan the layout's row range of `range`, one record per populated definition.
///
/// Group names are merged cells in the source document; only the first row of
/// a merged block carries the value, so the last seen group is carried down.
pub fn scan_sheet(range: &Range<Data>, layout: &SheetLayout) -> ModIdResult<Vec<IdRecord>> {
    let mut records = Vec::new();
    let mut current_group: Option<String> = None;

    for row in layout.first_row..=layout.last_row {
        // Spare slot
        let Some(definition) = cell_text(range, row, layout.definition_column)
            .map(|definition| definition.trim().to_string())
        else {
            continue;
        };

        let group_name = match cell_text(range, row, layout.group_column) {
            Some(group) => {
                current_group = Some(group.clone());
                group
            }
            None => current_group
                .clone()
                .ok_or(ModIdError::MissingGroup { row })?,
        };

        let module_name = cell_string(range, row, layout.name_column);

        let module_id = module_id_from_cell(cell(range, row, layout.id_column)).map_err(
            |message| ModIdError::Parse {
                cell: layout.cell_name(layout.id_column, row),
                message,
            },
        )?;

        debug!(row, %group_name, %module_name, module_id, %definition, "module ID row");

        records.push(IdRecord {
            group_name,
            module_name,
            module_id,
            definition,
        });
    }

    Ok(records)
}

/// Cell at a 1-based row and 0-based column
fn cell(range: &Range<Data>, row: u32, column: u32) -> Option<&Data> {
    row.checked_sub(1)
        .and_then(|r| range.get_value((r, column)))
}

/// Cell contents as stored, empty string for an empty cell
fn cell_string(range: &Range<Data>, row: u32, column: u32) -> String {
    match cell(range, row, column) {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Cell contents as stored, `None` for empty or whitespace-only cells
fn cell_text(range: &Range<Data>, row: u32, column: u32) -> Option<String> {
    let text = cell_string(range, row, column);
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Module ID from a text literal or an integral numeric cell
fn module_id_from_cell(cell: Option<&Data>) -> Result<u32, String> {
    match cell {
        None | Some(Data::Empty) => Err("module ID cell is empty".to_string()),
        Some(Data::String(s)) => parse_int_literal(s),
        Some(Data::Int(i)) => {
            u32::try_from(*i).map_err(|_| format!("module ID {} is out of range", i))
        }
        Some(Data::Float(f)) => {
            if f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64 {
                Ok(*f as u32)
            } else {
                Err(format!("module ID {} is not a non-negative integer", f))
            }
        }
        Some(other) => Err(format!("unsupported module ID cell value '{}'", other)),
    }
}
