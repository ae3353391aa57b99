use anyhow::Context;
use clap::Parser;
use modid_gen::cli;
use modid_gen::config::GeneratorConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "modid-gen")]
#[command(about = "Generate Kernel module ID headers from the constant module IDs spreadsheet")]
#[command(long_about = "modid-gen - Constant Module ID generator

Reads the 'Module IDs' sheet of the constant module IDs spreadsheet and
writes C headers encoding each ID as a 16-bit constant.

OUTPUTS (written to --output-dir, default the current directory):
  Kernel_module_ids.h     - module IDs shifted into the top 6 bits
  Kernel_module_ids.json  - the same records, for the DataPool generator
  Kernel_app_ids.h        - unshifted IDs of the Applications group

The spreadsheet file name must carry its version, e.g.
SSS_ConstantModuleIds_v1.2.xlsx. The version is stamped into the headers.

VALIDATION:
  Duplicate IDs, duplicate or malformed definitions and IDs wider than
  6 bits are reported. Use --strict to refuse to generate when any are found.

EXAMPLES:
  modid-gen SSS_ConstantModuleIds_v1.2.xlsx
  modid-gen SSS_ConstantModuleIds_v1.2.xlsx -o src/system/kernel --strict
  modid-gen SSS_ConstantModuleIds_v1.2.xlsx --dry-run --verbose

Set RUST_LOG=modid_gen=debug for a per-row trace.")]
#[command(version)]
struct Cli {
    /// Path to the constant module IDs spreadsheet (.xlsx)
    file: PathBuf,

    /// Directory to write the generated files to
    #[arg(short, long, default_value = ".", env = "MODID_OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Do not generate Kernel_app_ids.h
    #[arg(long)]
    no_app_ids: bool,

    /// Fail on validation errors instead of warning
    #[arg(long)]
    strict: bool,

    /// Preview without writing any file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Show the records read and each step
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose {
        "modid_gen=debug"
    } else {
        "modid_gen=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GeneratorConfig {
        output_dir: args.output_dir,
        app_ids: !args.no_app_ids,
        strict: args.strict,
        dry_run: args.dry_run,
        verbose: args.verbose,
        ..GeneratorConfig::default()
    };

    cli::generate(&args.file, &config)
        .with_context(|| format!("Failed to generate module IDs from {}", args.file.display()))?;

    Ok(())
}
