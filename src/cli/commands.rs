use crate::codegen::render_outputs;
use crate::config::GeneratorConfig;
use crate::error::{ModIdError, ModIdResult};
use crate::excel::ModuleIdReader;
use crate::types::{Banner, IdRecord};
use crate::validate::{self, Severity, ValidationIssue};
use crate::version::{extract_version, source_name};
use crate::writer::write_outputs;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What a generate run read and wrote
#[derive(Debug)]
pub struct GenerateReport {
    pub version: String,
    pub records: Vec<IdRecord>,
    pub issues: Vec<ValidationIssue>,
    /// Absolute paths written (empty on a dry run)
    pub written: Vec<PathBuf>,
}

/// Execute the generate command: spreadsheet → headers + JSON
pub fn generate(input: &Path, config: &GeneratorConfig) -> ModIdResult<GenerateReport> {
    println!("{}", "🔧 modid-gen - Constant Module IDs".bold().green());
    println!("   Source: {}", input.display());

    // Version comes from the file name; fail before touching the workbook
    let version = extract_version(input)?;
    let source = source_name(input)?;
    println!("   Version: {}\n", version.bright_yellow().bold());

    if config.dry_run {
        println!(
            "{}",
            "📋 DRY RUN MODE - No files will be written\n".yellow()
        );
    }

    if config.verbose {
        println!(
            "{}",
            format!("📖 Reading sheet '{}'...", config.layout.sheet_name).cyan()
        );
    }

    let records = ModuleIdReader::new(input)
        .with_layout(config.layout.clone())
        .read()?;
    let app_count = records.iter().filter(|r| r.is_application()).count();

    if config.verbose {
        print_records(&records);
    }

    let issues = validate::validate(&records)?;
    report_issues(&issues);

    let errors = validate::error_count(&issues);
    if config.strict && errors > 0 {
        return Err(ModIdError::Validation(errors));
    }

    if config.verbose {
        println!("{}", "🧮 Rendering outputs...".cyan());
    }

    let banner = Banner::today(version.clone(), source);
    let outputs = render_outputs(&records, &banner, config.app_ids)?;
    info!(
        version = %banner.version,
        records = records.len(),
        applications = app_count,
        "rendered outputs"
    );

    let written = if config.dry_run {
        for output in &outputs {
            println!(
                "   Would write {} ({} bytes)",
                config.output_dir.join(output.file_name).display(),
                output.contents.len()
            );
        }
        println!(
            "\n{}",
            "📋 Dry run complete - no files written".yellow()
        );
        Vec::new()
    } else {
        let written = write_outputs(&config.output_dir, &outputs)?;
        println!("{}", "✅ Generation Complete!".bold().green());
        println!(
            "   {} module IDs, {} application IDs",
            records.len(),
            app_count
        );
        for path in &written {
            println!("   Written to {}", path.display());
        }
        written
    };

    Ok(GenerateReport {
        version,
        records,
        issues,
        written,
    })
}

fn print_records(records: &[IdRecord]) {
    println!("   Found {} module IDs\n", records.len());
    let mut current_group: Option<&str> = None;
    for record in records {
        if current_group != Some(record.group_name.as_str()) {
            println!("   📁 {}", record.group_name.bright_blue().bold());
            current_group = Some(record.group_name.as_str());
        }
        let shifted = match record.shifted_id() {
            Some(value) => format!("0x{:04X}", value),
            None => "------".to_string(),
        };
        println!(
            "      0x{:02X}  {}  {:<28} {}",
            record.module_id,
            shifted,
            record.definition.cyan(),
            record.module_name
        );
    }
    println!();
}

fn report_issues(issues: &[ValidationIssue]) {
    if issues.is_empty() {
        return;
    }

    println!("{}", "⚠️  Validation issues:".bold().yellow());
    for issue in issues {
        warn!(location = %issue.location, "{}", issue.message);
        match issue.severity {
            Severity::Error => println!("   {} {}", "❌".red(), issue.to_string().red()),
            Severity::Warning => println!("   {} {}", "⚠️".yellow(), issue.to_string().yellow()),
        }
    }
    println!();
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
