//! modid-gen - Constant Module ID header generator
//!
//! Reads the module ID table out of the constant module IDs spreadsheet and
//! renders it as C headers plus a JSON mirror.
//!
//! # Pipeline
//!
//! - [`version::extract_version`] pulls the document version out of the file name
//! - [`excel::ModuleIdReader`] scans the `Module IDs` sheet into [`IdRecord`]s
//! - [`validate::validate`] flags duplicate or malformed IDs
//! - [`codegen::render_outputs`] renders `Kernel_module_ids.h`,
//!   `Kernel_module_ids.json` and `Kernel_app_ids.h`
//! - [`writer::write_outputs`] writes them out
//!
//! # Example
//!
//! ```no_run
//! use modid_gen::codegen::render_module_ids_header;
//! use modid_gen::excel::ModuleIdReader;
//! use modid_gen::types::Banner;
//! use modid_gen::version::extract_version;
//! use std::path::Path;
//!
//! let path = Path::new("SSS_ConstantModuleIds_v1.2.xlsx");
//! let version = extract_version(path)?;
//! let records = ModuleIdReader::new(path).read()?;
//!
//! let banner = Banner::today(version, "SSS_ConstantModuleIds_v1.2.xlsx");
//! println!("{}", render_module_ids_header(&records, &banner));
//! # Ok::<(), modid_gen::error::ModIdError>(())
//! ```

pub mod cli;
pub mod codegen;
pub mod config;
pub mod error;
pub mod excel;
pub mod types;
pub mod validate;
pub mod version;
pub mod writer;

// Re-export commonly used types
pub use error::{ModIdError, ModIdResult};
pub use types::{Banner, IdRecord};
