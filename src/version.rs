//! Version token extraction from the source spreadsheet's file name
//!
//! The ID table is published as e.g. `SSS_ConstantModuleIds_v1.2.xlsx`; the
//! dotted number after the `v` is stamped into every generated header.

use crate::error::{ModIdError, ModIdResult};
use regex::Regex;
use std::path::Path;

/// Return the version embedded in the file name of `path`, without the leading `v`
pub fn extract_version(path: &Path) -> ModIdResult<String> {
    let name = source_name(path)?;

    let version_pattern = Regex::new(r"v(\d+(?:\.\d+)*)")
        .map_err(|e| ModIdError::Format(format!("Regex error: {}", e)))?;

    version_pattern
        .captures(&name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| {
            ModIdError::Format(format!(
                "Couldn't find a version number (e.g. v1.2) in file name '{}'",
                name
            ))
        })
}

/// File name component of `path`, as embedded in the header banner
pub fn source_name(path: &Path) -> ModIdResult<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| ModIdError::Format(format!("'{}' has no file name", path.display())))
}
