/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from a config file on disk through CLI
/// invocation to the produced report, using `assert_cmd` and `tempfile` for
/// isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn history_path() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/history")
        .to_str()
        .unwrap()
        .to_string()
}

/// Write a config file at the specified path.
fn write_config(path: &std::path::Path, content: &str) {
    fs::write(path, content).unwrap();
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_module_and_format() {
        let work_dir = TempDir::new().unwrap();
        write_config(
            &work_dir.path().join(".sbom-trend.yml"),
            r#"
module: certifi
format: json
"#,
        );

        let output = cargo_bin_cmd!("sbom-trend")
            .current_dir(work_dir.path())
            .args(["-d", &history_path()])
            .output()
            .unwrap();

        assert!(output.status.success());
        let report: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(report.get("package_data").is_none());
        assert_eq!(report["packages"].as_object().unwrap().len(), 1);
        assert_eq!(report["packages"]["certifi"]["count"], 2);

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_auto_discovery_applies_date_format_and_exclude_license() {
        let work_dir = TempDir::new().unwrap();
        write_config(
            &work_dir.path().join(".sbom-trend.yml"),
            r#"
date_format: "%Y/%m"
exclude_license: true
"#,
        );

        let output = cargo_bin_cmd!("sbom-trend")
            .current_dir(work_dir.path())
            .args(["-d", &history_path(), "-f", "json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let report: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(report["package_data"].get("2024/03").is_some());
        assert!(report["packages"]["requests"].get("license").is_none());
    }

    #[test]
    fn test_config_in_scanned_directory_is_not_an_sbom() {
        let work_dir = TempDir::new().unwrap();
        write_config(&work_dir.path().join(".sbom-trend.yml"), "format: json\n");

        let output = cargo_bin_cmd!("sbom-trend")
            .current_dir(work_dir.path())
            .args(["-d", "."])
            .output()
            .unwrap();

        assert!(output.status.success());
        let report: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["packages"], serde_json::json!({}));
    }

    #[test]
    fn test_no_config_file_runs_normally() {
        let work_dir = TempDir::new().unwrap();

        let output = cargo_bin_cmd!("sbom-trend")
            .current_dir(work_dir.path())
            .args(["-d", &history_path()])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        // Default format without an output file is the text summary
        assert!(stdout.starts_with("Name requests"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("Auto-discovered config file"));
    }
}

// ============================================================================
// Explicit Config Path (`--config`) Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_loads_successfully() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom-config.yml");
        write_config(&config_path, "format: json\nmodule: idna\n");

        let output = cargo_bin_cmd!("sbom-trend")
            .args([
                "-d",
                &history_path(),
                "-c",
                config_path.to_str().unwrap(),
            ])
            .output()
            .unwrap();

        assert!(output.status.success());
        let report: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["packages"]["idna"]["count"], 1);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Loaded config from:"));
    }

    #[test]
    fn test_explicit_config_nonexistent_file_error() {
        cargo_bin_cmd!("sbom-trend")
            .args(["-d", &history_path(), "-c", "nonexistent-config.yml"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_config_value_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        write_config(&config_path, "format: markdown\n");

        cargo_bin_cmd!("sbom-trend")
            .args(["-d", &history_path(), "-c", config_path.to_str().unwrap()])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("format 'markdown' is not supported"));
    }

    #[test]
    fn test_unknown_field_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(&config_path, "check_cve: true\n");

        cargo_bin_cmd!("sbom-trend")
            .args(["-d", &history_path(), "-c", config_path.to_str().unwrap()])
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Unknown config field 'check_cve' will be ignored.",
            ));
    }
}

// ============================================================================
// CLI + Config Merge Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_module_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(&config_path, "module: certifi\nformat: json\n");

        let output = cargo_bin_cmd!("sbom-trend")
            .args([
                "-d",
                &history_path(),
                "-c",
                config_path.to_str().unwrap(),
                "-m",
                "urllib3",
            ])
            .output()
            .unwrap();

        assert!(output.status.success());
        let report: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(report["packages"].get("certifi").is_none());
        assert_eq!(report["packages"]["urllib3"]["versions"], 2);
    }

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(&config_path, "format: json\n");

        cargo_bin_cmd!("sbom-trend")
            .args([
                "-d",
                &history_path(),
                "-c",
                config_path.to_str().unwrap(),
                "-f",
                "text",
            ])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Name requests"));
    }

    #[test]
    fn test_config_debug_cannot_be_disabled_from_cli() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(&config_path, "debug: true\n");

        cargo_bin_cmd!("sbom-trend")
            .args(["-d", &history_path(), "-c", config_path.to_str().unwrap()])
            .assert()
            .success()
            .stderr(predicate::str::contains("analysed module: all"))
            .stdout(predicate::str::starts_with("01-Jan-2024 count 3 change 0"));
    }
}
