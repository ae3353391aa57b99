//! Output renderers
//!
//! Each renderer is a pure function of the record list (and, for the headers,
//! the [`Banner`]). [`render_outputs`] bundles them into the set of files a
//! run produces.

mod app_ids;
mod json;
mod module_ids;

pub use app_ids::render_app_ids_header;
pub use json::render_json;
pub use module_ids::render_module_ids_header;

use crate::error::ModIdResult;
use crate::types::{Banner, IdRecord};
use crate::writer::OutputFile;

/// Tool name stamped into generated headers
pub const GENERATOR: &str = concat!("modid-gen ", env!("CARGO_PKG_VERSION"));

pub const MODULE_IDS_HEADER: &str = "Kernel_module_ids.h";
pub const MODULE_IDS_JSON: &str = "Kernel_module_ids.json";
pub const APP_IDS_HEADER: &str = "Kernel_app_ids.h";

/// Render every output file, in write order
pub fn render_outputs(
    records: &[IdRecord],
    banner: &Banner,
    app_ids: bool,
) -> ModIdResult<Vec<OutputFile>> {
    let mut outputs = vec![
        OutputFile::new(MODULE_IDS_HEADER, render_module_ids_header(records, banner)),
        OutputFile::new(MODULE_IDS_JSON, render_json(records)?),
    ];

    if app_ids {
        outputs.push(OutputFile::new(
            APP_IDS_HEADER,
            render_app_ids_header(records, banner),
        ));
    }

    Ok(outputs)
}
