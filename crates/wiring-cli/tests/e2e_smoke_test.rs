use std::{fs, path::Path, process::Command};

use tempfile::tempdir;

use wiring::WiringError;
use wiring_cli::{Args, run};

fn args(output: &Path) -> Args {
    Args {
        output: output.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_run_writes_png_and_confirms() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("out.png");
    let args = args(&output);
    let mut stdout = Vec::new();

    run(&args, &mut stdout).expect("run should succeed");

    let metadata = fs::metadata(&output).expect("output file should exist");
    assert!(metadata.len() > 0);

    let printed = String::from_utf8(stdout).unwrap();
    assert_eq!(printed, format!("Saved diagram to: {}\n", args.output));
}

#[test]
fn e2e_run_writes_svg() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("gateway.svg");
    let mut stdout = Vec::new();

    run(&args(&output), &mut stdout).expect("run should succeed");

    let svg = fs::read_to_string(&output).expect("output file should exist");
    assert!(svg.contains("NodeMCU ESP8266"));
    assert!(svg.contains("RA02 LoRa"));
    assert!(svg.contains("BME280 (I2C)"));
}

#[test]
fn e2e_run_missing_directory_fails_without_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("nonexistent_dir").join("out.png");
    let mut stdout = Vec::new();

    let err = run(&args(&output), &mut stdout).unwrap_err();

    assert!(matches!(err, WiringError::Io(_)));
    assert!(!output.exists());
    assert!(stdout.is_empty(), "nothing should be printed on failure");
}

#[test]
fn e2e_run_rejects_unsupported_extension() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("out.bmp");
    let mut stdout = Vec::new();

    let err = run(&args(&output), &mut stdout).unwrap_err();

    assert!(matches!(err, WiringError::Export(_)));
    assert!(!output.exists());
}

#[test]
fn e2e_run_with_config_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[style]\nbackground_color = \"#fefefe\"\n\n[style.nets]\nspi = \"teal\"\n",
    )
    .unwrap();

    let output = temp_dir.path().join("styled.svg");
    let mut args = args(&output);
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args, &mut Vec::new()).expect("run should succeed");

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("#fefefe"));
    assert!(svg.contains("#008080"));
}

#[test]
fn e2e_run_with_invalid_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[style]\nscale = 0.0\n").unwrap();

    let output = temp_dir.path().join("out.png");
    let mut args = args(&output);
    args.config = Some(config_path.to_string_lossy().to_string());

    let err = run(&args, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, WiringError::Config(_)));
    assert!(!output.exists());
}

#[test]
fn e2e_run_overwrites_deterministically() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("out.png");
    let args = args(&output);

    run(&args, &mut Vec::new()).unwrap();
    let first = fs::read(&output).unwrap();
    run(&args, &mut Vec::new()).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn e2e_binary_without_arguments_writes_default_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let result = Command::new(env!("CARGO_BIN_EXE_wiring"))
        .current_dir(temp_dir.path())
        .output()
        .expect("failed to launch the wiring binary");

    assert!(result.status.success());
    assert_eq!(
        String::from_utf8_lossy(&result.stdout),
        "Saved diagram to: gateway_diagram.png\n"
    );
    assert!(temp_dir.path().join("gateway_diagram.png").exists());
}

#[test]
fn e2e_binary_relative_output_path() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let result = Command::new(env!("CARGO_BIN_EXE_wiring"))
        .args(["-o", "out.png", "--log-level", "off"])
        .current_dir(temp_dir.path())
        .output()
        .expect("failed to launch the wiring binary");

    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains("Saved diagram to: out.png"));
    let metadata = fs::metadata(temp_dir.path().join("out.png")).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn e2e_binary_missing_directory_exits_with_failure() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let result = Command::new(env!("CARGO_BIN_EXE_wiring"))
        .args(["-o", "nonexistent_dir/out.png"])
        .current_dir(temp_dir.path())
        .output()
        .expect("failed to launch the wiring binary");

    assert_eq!(result.status.code(), Some(1));
    assert!(result.stdout.is_empty());
    assert!(!temp_dir.path().join("nonexistent_dir").exists());
}
