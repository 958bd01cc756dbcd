use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

const TEAMS: &str = r#"[
    {"name": "okdata", "id": "t1", "is_member": true},
    {"name": "geodata", "id": "t2"}
]"#;

fn okdata(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("okdata").unwrap();
    cmd.env("OKDATA_CONFIG_DIR", config_dir)
        .env_remove("OKDATA_OUTPUT_FORMAT_DIR")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_render_table_from_stdin() {
    let home = tempfile::tempdir().unwrap();
    okdata(home.path())
        .args(["render", "teams_config.json"])
        .write_stdin(TEAMS)
        .assert()
        .success()
        .stdout(predicate::str::contains("| Name    | ID |"))
        .stdout(predicate::str::contains("| okdata  | t1 |"))
        .stdout(predicate::str::contains("| geodata | t2 |"))
        .stdout(predicate::str::contains("is_member").not());
}

#[test]
fn test_render_json() {
    let home = tempfile::tempdir().unwrap();
    okdata(home.path())
        .args(["--format", "json", "render", "teams_config"])
        .write_stdin(TEAMS)
        .assert()
        .success()
        .stdout(r#"[{"name":"okdata","id":"t1"},{"name":"geodata","id":"t2"}]"#.to_string() + "\n");
}

#[test]
fn test_render_csv_from_file() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("teams.json");
    std::fs::write(&file, TEAMS).unwrap();

    okdata(home.path())
        .args(["--format", "csv", "render", "teams_config.json"])
        .arg(&file)
        .assert()
        .success()
        .stdout("name,id\nokdata,t1\ngeodata,t2\n");
}

#[test]
fn test_single_object_renders_singular_json() {
    let home = tempfile::tempdir().unwrap();
    okdata(home.path())
        .args(["--format", "json", "render", "teams_config.json"])
        .write_stdin(r#"{"name": "okdata", "id": "t1"}"#)
        .assert()
        .success()
        .stdout("{\"name\":\"okdata\",\"id\":\"t1\"}\n");
}

#[test]
fn test_singular_flag_with_one_element_array() {
    let home = tempfile::tempdir().unwrap();
    okdata(home.path())
        .args(["--format", "json", "render", "--singular", "teams_config.json"])
        .write_stdin(r#"[{"name": "okdata", "id": "t1"}]"#)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_message_shown_for_table_not_json() {
    let home = tempfile::tempdir().unwrap();
    okdata(home.path())
        .args(["render", "teams_config.json", "--message", "Your teams:"])
        .write_stdin(TEAMS)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Your teams:\n+"));

    okdata(home.path())
        .args(["--format", "json", "render", "teams_config.json", "-m", "Your teams:"])
        .write_stdin(TEAMS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Your teams:").not());
}

#[test]
fn test_unknown_schema_fails() {
    let home = tempfile::tempdir().unwrap();
    okdata(home.path())
        .args(["render", "nope_config.json"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"))
        .stderr(predicate::str::contains("nope_config.json"));
}

#[test]
fn test_invalid_input_fails() {
    let home = tempfile::tempdir().unwrap();
    okdata(home.path())
        .args(["render", "teams_config.json"])
        .write_stdin("42")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_schema_dir_overrides_builtin() {
    let home = tempfile::tempdir().unwrap();
    let schemas = tempfile::tempdir().unwrap();
    std::fs::write(
        schemas.path().join("teams_config.json"),
        r#"{"id": {"name": "Team", "key": "id"}}"#,
    )
    .unwrap();

    okdata(home.path())
        .args(["--format", "csv", "--schema-dir"])
        .arg(schemas.path())
        .args(["render", "teams_config.json"])
        .write_stdin(TEAMS)
        .assert()
        .success()
        .stdout("id\nt1\nt2\n");
}

#[test]
fn test_env_schema_dir_used() {
    let home = tempfile::tempdir().unwrap();
    let schemas = tempfile::tempdir().unwrap();
    std::fs::write(
        schemas.path().join("custom_config.json"),
        r#"{"name": {"name": "Name", "key": "name"}}"#,
    )
    .unwrap();

    okdata(home.path())
        .env("OKDATA_OUTPUT_FORMAT_DIR", schemas.path())
        .args(["--format", "csv", "render", "custom_config"])
        .write_stdin(TEAMS)
        .assert()
        .success()
        .stdout("name\nokdata\ngeodata\n");
}

#[test]
fn test_config_file_sets_default_format() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("config.json"), r#"{"format": "csv"}"#).unwrap();

    okdata(home.path())
        .args(["render", "teams_config.json"])
        .write_stdin(TEAMS)
        .assert()
        .success()
        .stdout("name,id\nokdata,t1\ngeodata,t2\n");

    okdata(home.path())
        .args(["--format", "json", "render", "teams_config.json"])
        .write_stdin(TEAMS)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_schemas_lists_builtins() {
    let home = tempfile::tempdir().unwrap();
    okdata(home.path())
        .args(["--format", "csv", "schemas"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id,source,columns\n"))
        .stdout(predicate::str::contains("teams_config.json,builtin,Name;ID"));
}

#[test]
fn test_schemas_shows_override_source() {
    let home = tempfile::tempdir().unwrap();
    let schemas = tempfile::tempdir().unwrap();
    std::fs::write(
        schemas.path().join("aaa_config.json"),
        r#"{"x": {"name": "X", "key": "x"}}"#,
    )
    .unwrap();

    okdata(home.path())
        .args(["--format", "json", "--schema-dir"])
        .arg(schemas.path())
        .arg("schemas")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id":"aaa_config.json""#))
        .stdout(predicate::str::contains(r#""columns":["X"]"#));
}

#[test]
fn test_debug_logs_go_to_stderr() {
    let home = tempfile::tempdir().unwrap();
    okdata(home.path())
        .args(["--debug", "--format", "csv", "render", "teams_config.json"])
        .write_stdin(TEAMS)
        .assert()
        .success()
        .stdout("name,id\nokdata,t1\ngeodata,t2\n")
        .stderr(predicate::str::contains("Creating output format"));
}

#[test]
fn test_debug_logs_each_projected_row() {
    let home = tempfile::tempdir().unwrap();
    okdata(home.path())
        .args(["--debug", "--format", "json", "render", "teams_config.json"])
        .write_stdin(TEAMS)
        .assert()
        .success()
        .stderr(predicate::str::contains("json row added"));
}
