//! Output writer
//!
//! Files are written one after another; a failure part way through leaves
//! the earlier files in place.

use crate::error::{ModIdError, ModIdResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// A rendered file waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub file_name: &'static str,
    pub contents: String,
}

impl OutputFile {
    pub fn new(file_name: &'static str, contents: String) -> Self {
        Self {
            file_name,
            contents,
        }
    }
}

/// Write `outputs` into `dir`, creating or truncating each file.
///
/// Returns the absolute paths written, in order.
pub fn write_outputs(dir: &Path, outputs: &[OutputFile]) -> ModIdResult<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(io_error(dir))?;
    let dir = dir.canonicalize().map_err(io_error(dir))?;

    let mut written = Vec::with_capacity(outputs.len());
    for output in outputs {
        let path = dir.join(output.file_name);
        fs::write(&path, &output.contents).map_err(io_error(&path))?;
        info!(path = %path.display(), bytes = output.contents.len(), "wrote output");
        written.push(path);
    }

    Ok(written)
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ModIdError {
    let path = path.to_path_buf();
    move |source| ModIdError::Io { path, source }
}
