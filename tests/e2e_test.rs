/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FAMILY_CSV: &str = "Parent,Children\n\
Grandma,\"Mom, Aunt\"\n\
Mom,\"Alice, Bob\"\n\
Alice,\"Kid1, Kid2\"\n";

/// Write `content` as family.csv inside `dir`.
fn write_family_csv(dir: &Path, content: &str) {
    fs::write(dir.join("family.csv"), content).unwrap();
}

/// A command running inside `dir` with a signed-in user and no env leakage.
fn command_in(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("family-hierarchy");
    cmd.current_dir(dir).env_remove("FAMILY_HIERARCHY_USER");
    cmd
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        let dir = TempDir::new().unwrap();
        write_family_csv(dir.path(), FAMILY_CSV);

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Alice", "--user", "u1"])
            .args(["--no-store"])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("family-hierarchy")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("--data"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("family-hierarchy")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 1: blank name
    #[test]
    fn test_exit_code_blank_name() {
        let dir = TempDir::new().unwrap();
        write_family_csv(dir.path(), FAMILY_CSV);

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "  ", "--user", "u1"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Please enter your name."));
    }

    /// Exit code 1: negative upward levels
    #[test]
    fn test_exit_code_negative_levels() {
        let dir = TempDir::new().unwrap();
        write_family_csv(dir.path(), FAMILY_CSV);

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Alice", "--user", "u1"])
            .args(["--up", "-1"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Upward Levels must be a non-negative number.",
            ));
    }

    /// Exit code 1: nobody signed in
    #[test]
    fn test_exit_code_not_signed_in() {
        let dir = TempDir::new().unwrap();
        write_family_csv(dir.path(), FAMILY_CSV);

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Alice", "--no-store"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Please sign in to generate a report.",
            ))
            .stderr(predicate::str::contains("You must be logged in").not());
    }

    /// Exit code 1: focal person missing from the Parent column
    #[test]
    fn test_exit_code_name_not_found() {
        let dir = TempDir::new().unwrap();
        write_family_csv(dir.path(), FAMILY_CSV);

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Kid1", "--user", "u1"])
            .args(["--no-store"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "The entered name is not found in the family data",
            ));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("family-hierarchy")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("family-hierarchy")
            .args(["--data", "family.csv", "--name", "A", "-f", "xml"])
            .assert()
            .code(2);
    }

    /// Exit code 3: missing data file
    #[test]
    fn test_exit_code_missing_file() {
        let dir = TempDir::new().unwrap();

        command_in(dir.path())
            .args(["--data", "missing.csv", "--name", "Alice", "--user", "u1"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read file"));
    }

    /// Exit code 3: not a CSV file
    #[test]
    fn test_exit_code_wrong_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("family.txt"), FAMILY_CSV).unwrap();

        command_in(dir.path())
            .args(["--data", "family.txt", "--name", "Alice", "--user", "u1"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Please upload a valid CSV file"));
    }

    /// Exit code 3: wrong header row
    #[test]
    fn test_exit_code_bad_header() {
        let dir = TempDir::new().unwrap();
        write_family_csv(dir.path(), "Name,Kids\nA,B\n");

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "A", "--user", "u1"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Parent,Children"));
    }

    /// Exit code 3: no usable rows
    #[test]
    fn test_exit_code_empty_data() {
        let dir = TempDir::new().unwrap();
        write_family_csv(dir.path(), "Parent,Children\n");

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "A", "--user", "u1"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains(
                "No data found in CSV or error during parsing.",
            ));
    }
}

mod output_tests {
    use super::*;

    fn run_json(dir: &Path, extra: &[&str]) -> serde_json::Value {
        let output = command_in(dir)
            .args(["--data", "family.csv", "--user", "u1", "--no-store"])
            .args(extra)
            .output()
            .unwrap();
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).unwrap()
    }

    #[test]
    fn test_json_output_to_stdout() {
        let dir = TempDir::new().unwrap();
        write_family_csv(dir.path(), FAMILY_CSV);

        let json = run_json(dir.path(), &["--name", "Mom", "--up", "1", "--down", "1"]);

        let ids: Vec<&str> = json["nodes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["Mom", "Grandma", "Alice", "Bob"]);
        assert_eq!(json["nodes"][2]["position"]["x"], -75.0);
        assert_eq!(json["nodes"][3]["position"]["x"], 75.0);
        assert_eq!(json["edges"][0]["markerEnd"]["type"], "arrowclosed");
        assert_eq!(json["metadata"]["requestedBy"], "u1");
    }

    #[test]
    fn test_zero_levels_is_focal_only() {
        let dir = TempDir::new().unwrap();
        write_family_csv(dir.path(), FAMILY_CSV);

        let json = run_json(dir.path(), &["--name", "Mom", "--up", "0", "--down", "0"]);

        assert_eq!(json["nodes"].as_array().unwrap().len(), 1);
        assert!(json["edges"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_markdown_output_to_file() {
        let dir = TempDir::new().unwrap();
        write_family_csv(dir.path(), FAMILY_CSV);

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Alice", "--user", "u1"])
            .args(["--no-store", "--format", "markdown", "--output", "tree.md"])
            .assert()
            .code(0)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Report saved"));

        let content = fs::read_to_string(dir.path().join("tree.md")).unwrap();
        assert!(content.starts_with("# Family Hierarchy Report"));
        assert!(content.contains("| -2 | Grandparents | Grandma |"));
        assert!(content.contains("| 1 | Children | Kid1, Kid2 |"));
    }

    #[test]
    fn test_user_from_environment() {
        let dir = TempDir::new().unwrap();
        write_family_csv(dir.path(), FAMILY_CSV);

        command_in(dir.path())
            .env("FAMILY_HIERARCHY_USER", "env-user")
            .args(["--data", "family.csv", "--name", "Alice", "--no-store"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("\"requestedBy\": \"env-user\""));
    }

    #[test]
    fn test_upload_is_stored_by_default() {
        let dir = TempDir::new().unwrap();
        write_family_csv(dir.path(), FAMILY_CSV);

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Alice", "--user", "u1"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Upload stored as familyData_"));

        let uploads: Vec<_> = fs::read_dir(dir.path().join(".family-hierarchy/uploads"))
            .unwrap()
            .collect();
        assert_eq!(uploads.len(), 1);
    }

    #[test]
    fn test_custom_store_dir() {
        let dir = TempDir::new().unwrap();
        write_family_csv(dir.path(), FAMILY_CSV);

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Alice", "--user", "u1"])
            .args(["--store-dir", "saved"])
            .assert()
            .code(0);

        assert_eq!(fs::read_dir(dir.path().join("saved")).unwrap().count(), 1);
        assert!(!dir.path().join(".family-hierarchy").exists());
    }

    #[test]
    fn test_unwritable_store_still_reports() {
        let dir = TempDir::new().unwrap();
        write_family_csv(dir.path(), FAMILY_CSV);
        fs::write(dir.path().join("blocked"), "").unwrap();

        command_in(dir.path())
            .args(["--data", "family.csv", "--name", "Alice", "--user", "u1"])
            .args(["--store-dir", "blocked"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Failed to store upload"))
            .stdout(predicate::str::contains("\"nodes\""));
    }
}
