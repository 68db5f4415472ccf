/// End-to-end tests for config file loading and CLI option merging.
///
/// Each test runs the binary inside its own temporary directory so config
/// auto-discovery and the upload store never touch the repository.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

const CONFIG_FILENAME: &str = "family-hierarchy.config.yml";

/// Create a family CSV with four generations below Great.
fn create_family(dir: &Path) {
    let csv = "Parent,Children\n\
Great,Grand\n\
Grand,Parent1\n\
Parent1,Me\n\
Me,\"Child1, Child2\"\n\
Child1,Grandchild\n";
    fs::write(dir.join("family.csv"), csv).unwrap();
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn command_in(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("family-hierarchy");
    cmd.current_dir(dir).env_remove("FAMILY_HIERARCHY_USER");
    cmd
}

fn node_ids(stdout: &[u8]) -> Vec<String> {
    let json: serde_json::Value = serde_json::from_slice(stdout).unwrap();
    json["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_levels_and_user() {
        let dir = TempDir::new().unwrap();
        create_family(dir.path());
        write_config(
            &dir.path().join(CONFIG_FILENAME),
            r#"
up_levels: 1
down_levels: 0
user: config-user
persist_uploads: false
"#,
        );

        let output = command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Me"])
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(node_ids(&output.stdout), vec!["Me", "Parent1"]);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
        assert!(!dir.path().join(".family-hierarchy").exists());
    }

    #[test]
    fn test_auto_discovery_applies_format() {
        let dir = TempDir::new().unwrap();
        create_family(dir.path());
        write_config(&dir.path().join(CONFIG_FILENAME), "format: markdown\n");

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Me", "--user", "u1"])
            .args(["--no-store"])
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with("# Family Hierarchy Report"));
    }

    #[test]
    fn test_no_config_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        create_family(dir.path());

        let output = command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Me", "--user", "u1"])
            .args(["--no-store"])
            .output()
            .unwrap();

        assert!(output.status.success());
        // Two generations each way: Great and Grandchild's children are out of reach.
        let ids = node_ids(&output.stdout);
        assert_eq!(ids.len(), 6);
        assert!(!ids.contains(&"Great".to_string()));
        assert!(ids.contains(&"Grandchild".to_string()));
    }

    #[test]
    fn test_unknown_field_warns() {
        let dir = TempDir::new().unwrap();
        create_family(dir.path());
        write_config(&dir.path().join(CONFIG_FILENAME), "theme: dark\n");

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Me", "--user", "u1"])
            .args(["--no-store"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains(
                "Unknown config field 'theme' will be ignored",
            ));
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
        create_family(dir.path());
        let config_path = dir.path().join("custom-config.yml");
        write_config(&config_path, "up_levels: 3\ndown_levels: 0\n");

        let output = command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Me", "--user", "u1"])
            .args(["--no-store", "-c", config_path.to_str().unwrap()])
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(
            node_ids(&output.stdout),
            vec!["Me", "Parent1", "Grand", "Great"]
        );
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Loaded config from:"));
    }

    #[test]
    fn test_explicit_config_nonexistent_file_error() {
        let dir = TempDir::new().unwrap();
        create_family(dir.path());

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Me", "--user", "u1"])
            .args(["-c", "nonexistent-config.yml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_config_is_application_error() {
        let dir = TempDir::new().unwrap();
        create_family(dir.path());
        write_config(&dir.path().join(CONFIG_FILENAME), "up_levels: -4\n");

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Me", "--user", "u1"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains(
                "up_levels must be a non-negative number",
            ));
    }
}

// ============================================================================
// CLI + Config Merge Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_levels_override_config() {
        let dir = TempDir::new().unwrap();
        create_family(dir.path());
        write_config(
            &dir.path().join(CONFIG_FILENAME),
            "up_levels: 3\ndown_levels: 3\npersist_uploads: false\n",
        );

        let output = command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Me", "--user", "u1"])
            .args(["--up", "0", "--down", "1"])
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(node_ids(&output.stdout), vec!["Me", "Child1", "Child2"]);
    }

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        create_family(dir.path());
        write_config(&dir.path().join(CONFIG_FILENAME), "format: markdown\n");

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Me", "--user", "u1"])
            .args(["--no-store", "--format", "json"])
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with("{"));
    }

    #[test]
    fn test_cli_user_overrides_config_user() {
        let dir = TempDir::new().unwrap();
        create_family(dir.path());
        write_config(&dir.path().join(CONFIG_FILENAME), "user: config-user\n");

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Me", "--user", "cli-user"])
            .args(["--no-store"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("\"requestedBy\": \"cli-user\""));
    }

    #[test]
    fn test_config_store_dir_used() {
        let dir = TempDir::new().unwrap();
        create_family(dir.path());
        write_config(&dir.path().join(CONFIG_FILENAME), "store_dir: archive\n");

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Me", "--user", "u1"])
            .assert()
            .code(0);

        assert_eq!(fs::read_dir(dir.path().join("archive")).unwrap().count(), 1);
    }
}
