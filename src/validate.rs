//! Module ID table validator
//!
//! The spreadsheet is hand-maintained, so duplicate IDs or names that are
//! not valid C identifiers slip in. Checks run on the record list before any
//! header is rendered.

use crate::error::{ModIdError, ModIdResult};
use crate::types::{IdRecord, MAX_MODULE_ID, MOD_ID_BITS};
use regex::Regex;
use std::collections::HashMap;

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub message: String,
    /// Definition (or module ID) the problem was found on
    pub location: String,
    pub severity: Severity,
}

/// Severity of a [`ValidationIssue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Generated headers would not compile or would alias IDs
    Error,
    /// Headers are still usable but probably not what was intended
    Warning,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };
        write!(f, "[{}] {}: {}", tag, self.location, self.message)
    }
}

/// Validate the record list and return every problem found
pub fn validate(records: &[IdRecord]) -> ModIdResult<Vec<ValidationIssue>> {
    let identifier = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
        .map_err(|e| ModIdError::Format(format!("Regex error: {}", e)))?;

    let mut issues = Vec::new();
    let mut ids_seen: HashMap<u32, &str> = HashMap::new();
    let mut definitions_seen: HashMap<&str, u32> = HashMap::new();

    for record in records {
        let loc = record.definition.clone();

        if !identifier.is_match(&record.definition) {
            issues.push(ValidationIssue {
                message: "definition is not a valid C identifier".to_string(),
                location: loc.clone(),
                severity: Severity::Error,
            });
        }

        if let Some(first) = definitions_seen.insert(&record.definition, record.module_id) {
            issues.push(ValidationIssue {
                message: format!(
                    "definition used twice (module IDs 0x{:02X} and 0x{:02X})",
                    first, record.module_id
                ),
                location: loc.clone(),
                severity: Severity::Error,
            });
        }

        if let Some(first) = ids_seen.insert(record.module_id, &record.definition) {
            issues.push(ValidationIssue {
                message: format!(
                    "module ID 0x{:02X} already assigned to {}",
                    record.module_id, first
                ),
                location: loc.clone(),
                severity: Severity::Error,
            });
        }

        if record.shifted_id().is_none() {
            issues.push(ValidationIssue {
                message: format!(
                    "module ID 0x{:02X} does not fit in {} bits (max 0x{:02X})",
                    record.module_id, MOD_ID_BITS, MAX_MODULE_ID
                ),
                location: loc.clone(),
                severity: Severity::Error,
            });
        }

        if record.is_application() && !record.definition.contains("MOD") {
            issues.push(ValidationIssue {
                message: "application definition has no MOD marker, app ID will reuse the module ID name"
                    .to_string(),
                location: loc.clone(),
                severity: Severity::Warning,
            });
        }

        if record.module_name.trim().is_empty() {
            issues.push(ValidationIssue {
                message: "module name is empty".to_string(),
                location: loc,
                severity: Severity::Warning,
            });
        }
    }

    Ok(issues)
}

/// Number of [`Severity::Error`] issues
pub fn error_count(issues: &[ValidationIssue]) -> usize {
    issues
        .iter()
        .filter(|issue| issue.severity == Severity::Error)
        .count()
}
