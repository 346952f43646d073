use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use tempfile::tempdir;

#[test]
fn config_file_settings_apply() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.md");
    let output = dir.path().join("out.txt");
    fs::write(&input, "# Getting Started\n").unwrap();

    let config_path = dir.path().join("helpdoc.toml");
    fs::write(
        &config_path,
        r#"[render]
pascal = true
modeline = false

[tags]
generate = true
filename = "tags-out"
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("md2help");
    cmd.arg(input.as_os_str())
        .arg(output.as_os_str())
        .arg("--config")
        .arg(config_path.as_os_str());
    cmd.assert().success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("*Out-GettingStarted*"));
    assert!(!text.contains("vim:tw="));
    assert!(dir.path().join("tags-out").exists());
}

#[test]
fn flags_win_over_config_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.md");
    let output = dir.path().join("out.txt");
    fs::write(&input, "text\n").unwrap();

    let config_path = dir.path().join("helpdoc.toml");
    fs::write(&config_path, "[render]\ncols = 100\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2help");
    cmd.arg(input.as_os_str())
        .arg(output.as_os_str())
        .arg("--config")
        .arg(config_path.as_os_str())
        .arg("--cols")
        .arg("50");
    cmd.assert().success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.ends_with("vim:tw=50:ts=8:ft=help:norl:\n"));
}
