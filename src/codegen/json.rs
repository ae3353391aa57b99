//! `Kernel_module_ids.json` mirror, read by the DataPool generator

use crate::error::{ModIdError, ModIdResult};
use crate::types::IdRecord;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Serialize the records as a 4-space indented JSON array with a trailing newline
pub fn render_json(records: &[IdRecord]) -> ModIdResult<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut serializer)?;
    buf.push(b'\n');

    String::from_utf8(buf)
        .map_err(|e| ModIdError::Format(format!("JSON output is not UTF-8: {}", e)))
}
