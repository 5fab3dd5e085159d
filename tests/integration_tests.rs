use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command with an empty home directory so no user config leaks in
fn rainbow(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!();
    cmd.env("HOME", home.path());
    cmd
}

/// Positional arguments for a 40x120 window at the top of the buffer
fn view_args<'a>(mode: &'a str, filetype: &'a str, generics: &'a str) -> Vec<&'a str> {
    vec!["client0", "5", mode, "1.1", "1.1", "40.120", filetype, generics]
}

#[test]
fn test_cli_help_flag() {
    let home = TempDir::new().unwrap();
    rainbow(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Depth-colored delimiter highlighting"));
}

#[test]
fn test_cli_version_flag() {
    let home = TempDir::new().unwrap();
    rainbow(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rainbow"));
}

#[test]
fn test_cli_colors_delimiters_by_depth() {
    let home = TempDir::new().unwrap();
    rainbow(&home)
        .args(view_args("0", "rust", "N"))
        .args(["red", "green"])
        .write_stdin("fn main() { (1) }")
        .assert()
        .success()
        .stdout(
            "eval -client client0 set-option window rainbow 5 \
             1.11,1.11|red 1.17,1.17|red 1.13,1.13|green 1.15,1.15|green \
             1.8,1.8|red 1.9,1.9|red\n",
        );
}

#[test]
fn test_cli_resolves_templates() {
    let home = TempDir::new().unwrap();
    rainbow(&home)
        .args(view_args("0", "cpp", "Y"))
        .arg("red")
        .write_stdin("if (a < b) x; Vec<int> v;")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.18,1.18|red 1.22,1.22|red"))
        .stdout(predicate::str::contains("1.7,1.7").not());
}

#[test]
fn test_cli_ignores_templates_without_flag() {
    let home = TempDir::new().unwrap();
    rainbow(&home)
        .args(view_args("0", "cpp", "N"))
        .arg("red")
        .write_stdin("Vec<int> v;")
        .assert()
        .success()
        .stdout("eval -client client0 set-option window rainbow 5\n");
}

#[test]
fn test_cli_skips_comments_and_strings() {
    let home = TempDir::new().unwrap();
    rainbow(&home)
        .args(view_args("0", "c", "N"))
        .arg("red")
        .write_stdin("/* ( */ \")\" // [\n")
        .assert()
        .success()
        .stdout("eval -client client0 set-option window rainbow 5\n");
}

#[test]
fn test_cli_scope_backgrounds() {
    let home = TempDir::new().unwrap();
    rainbow(&home)
        .args(view_args("2", "generic", "N"))
        .args(["red", "!", "rgb:101010"])
        .write_stdin("(x)")
        .assert()
        .success()
        .stdout(
            "eval -client client0 set-option window rainbow 5 \
             1.1,1.1|red 1.3,1.3|red 1.1,1.3|default,rgb:101010\n",
        );
}

#[test]
fn test_cli_cursor_pair() {
    let home = TempDir::new().unwrap();
    rainbow(&home)
        .args(["client0", "5", "1", "1.3", "1.1", "40.120", "generic", "N", "red"])
        .write_stdin("((x))")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("1.2,1.4|default,rgb:003300\n"));
}

#[test]
fn test_cli_empty_input_clears_highlighting() {
    let home = TempDir::new().unwrap();
    rainbow(&home)
        .args(view_args("0", "rust", "Y"))
        .arg("red")
        .write_stdin("")
        .assert()
        .success()
        .stdout("eval -client client0 set-option window rainbow 5\n");
}

#[test]
fn test_cli_json_format() {
    let home = TempDir::new().unwrap();
    rainbow(&home)
        .args(["--format", "json"])
        .args(view_args("0", "generic", "N"))
        .arg("red")
        .write_stdin("()")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[{\"start\":{\"line\":1,\"column\":1}"))
        .stdout(predicate::str::contains("\"face\":\"red\""));
}

#[test]
fn test_cli_reads_input_file() {
    let home = TempDir::new().unwrap();
    let source = home.path().join("main.rs");
    fs::write(&source, "[]").unwrap();

    rainbow(&home)
        .arg("--input")
        .arg(&source)
        .args(view_args("0", "rust", "N"))
        .arg("red")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.1,1.1|red 1.2,1.2|red"));
}

#[test]
fn test_cli_margin_limits_window() {
    let home = TempDir::new().unwrap();
    let source = format!("(){}", "\n".repeat(20));

    rainbow(&home)
        .args(["--margin", "0"])
        .args(["client0", "5", "0", "15.1", "15.1", "2.80", "generic", "N", "red"])
        .write_stdin(source)
        .assert()
        .success()
        .stdout("eval -client client0 set-option window rainbow 5\n");
}

#[test]
fn test_cli_uses_config_colors_and_aliases() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("rainbow");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[colors]\nforeground = [\"blue\"]\n\n[filetypes]\ncuda = \"cpp\"\n",
    )
    .unwrap();

    rainbow(&home)
        .args(view_args("0", "cuda", "Y"))
        .write_stdin("f<T>();")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.2,1.2|blue 1.4,1.4|blue"));
}

#[test]
fn test_cli_invalid_mode() {
    let home = TempDir::new().unwrap();
    rainbow(&home)
        .args(view_args("9", "rust", "N"))
        .write_stdin("()")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid highlight mode"));
}

#[test]
fn test_cli_invalid_position() {
    let home = TempDir::new().unwrap();
    rainbow(&home)
        .args(["client0", "5", "0", "0.0", "1.1", "40.120", "rust", "N"])
        .write_stdin("()")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid position"));
}
