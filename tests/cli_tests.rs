//! CLI Integration Tests
//!
//! Runs the modid-gen binary against spreadsheets generated into a temp dir.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

mod common;

use assert_cmd::Command;
use common::{row, standard_workbook, write_workbook, SHEET};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SOURCE: &str = "SSS_ConstantModuleIds_v1.2.xlsx";

fn modid_gen() -> Command {
    let mut cmd = Command::cargo_bin("modid-gen").unwrap();
    cmd.env_remove("MODID_OUTPUT_DIR").env_remove("RUST_LOG");
    cmd
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND USAGE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    modid_gen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("modid-gen"))
        .stdout(predicate::str::contains("Kernel_module_ids.h"));
}

#[test]
fn test_cli_version() {
    modid_gen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("modid-gen"));
}

#[test]
fn test_no_arguments_is_usage_error() {
    modid_gen().assert().failure().code(2);
}

#[test]
fn test_two_files_is_usage_error() {
    modid_gen()
        .args(["a_v1.0.xlsx", "b_v1.0.xlsx"])
        .assert()
        .failure()
        .code(2);
}

// ═══════════════════════════════════════════════════════════════════════════
// GENERATION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_generate_into_current_dir() {
    let temp_dir = TempDir::new().unwrap();
    let input = standard_workbook(temp_dir.path(), SOURCE);
    let cwd = temp_dir.path().canonicalize().unwrap();

    modid_gen()
        .current_dir(temp_dir.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Written to {}",
            cwd.join("Kernel_module_ids.h").display()
        )))
        .stdout(predicate::str::contains(format!(
            "Written to {}",
            cwd.join("Kernel_module_ids.json").display()
        )))
        .stdout(predicate::str::contains(format!(
            "Written to {}",
            cwd.join("Kernel_app_ids.h").display()
        )));

    let header = fs::read_to_string(cwd.join("Kernel_module_ids.h")).unwrap();
    assert!(header.contains("#define MOD_ID_FDIR ((uint16_t)(0x02<<KERNEL_MOD_ID_SHIFT))"));
    assert!(header.contains(" * @version 1.2\n"));
}

#[test]
fn test_generate_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let input = standard_workbook(temp_dir.path(), SOURCE);
    let out = temp_dir.path().join("src").join("system").join("kernel");

    modid_gen()
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("Kernel_module_ids.h").exists());
    assert!(out.join("Kernel_module_ids.json").exists());
    assert!(out.join("Kernel_app_ids.h").exists());
}

#[test]
fn test_generate_output_dir_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let input = standard_workbook(temp_dir.path(), SOURCE);
    let out = temp_dir.path().join("gen");

    modid_gen()
        .env("MODID_OUTPUT_DIR", &out)
        .arg(&input)
        .assert()
        .success();

    assert!(out.join("Kernel_module_ids.h").exists());
}

#[test]
fn test_no_app_ids() {
    let temp_dir = TempDir::new().unwrap();
    let input = standard_workbook(temp_dir.path(), SOURCE);
    let out = temp_dir.path().join("out");

    modid_gen()
        .arg(&input)
        .args(["--no-app-ids", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Kernel_app_ids.h").not());

    assert!(out.join("Kernel_module_ids.h").exists());
    assert!(!out.join("Kernel_app_ids.h").exists());
}

#[test]
fn test_dry_run() {
    let temp_dir = TempDir::new().unwrap();
    let input = standard_workbook(temp_dir.path(), SOURCE);
    let out = temp_dir.path().join("out");

    modid_gen()
        .arg(&input)
        .args(["--dry-run", "--verbose", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Would write"))
        .stdout(predicate::str::contains("MOD_ID_EVENTMANAGER"));

    assert!(!out.exists());
}

// ═══════════════════════════════════════════════════════════════════════════
// FAILURES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_missing_version_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = standard_workbook(temp_dir.path(), "SSS_ConstantModuleIds.xlsx");

    modid_gen()
        .current_dir(temp_dir.path())
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("version number"));

    assert!(!temp_dir.path().join("Kernel_module_ids.h").exists());
    assert!(!temp_dir.path().join("Kernel_module_ids.json").exists());
}

#[test]
fn test_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    modid_gen()
        .current_dir(temp_dir.path())
        .arg(temp_dir.path().join("missing_v1.0.xlsx"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Workbook error"));
}

#[test]
fn test_bad_module_id_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join(SOURCE);
    write_workbook(&input, SHEET, &[row(6, "System", "Fdir", "two", "MOD_ID_FDIR")]);

    modid_gen()
        .current_dir(temp_dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("D6"));
}

#[test]
fn test_strict_rejects_duplicate_ids() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join(SOURCE);
    write_workbook(
        &input,
        SHEET,
        &[
            row(6, "System", "Kernel", "0x02", "MOD_ID_KERNEL"),
            row(7, "", "Fdir", "0x02", "MOD_ID_FDIR"),
        ],
    );
    let out = temp_dir.path().join("out");

    modid_gen()
        .arg(&input)
        .arg("--strict")
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"));

    assert!(!out.exists());

    // Without --strict the duplicate is only reported
    modid_gen()
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("already assigned to MOD_ID_KERNEL"));
}
