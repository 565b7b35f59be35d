//! Integration tests for the cpfscan CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Command rooted in `dir`, with HOME pointing there so no user config leaks in
fn cpfscan(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cpfscan").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env_remove("CPFSCAN_RUN__THREADS");
    cmd
}

/// Write the default input set (30 files, 5 valid + 5 invalid each) into `dados/`
fn generate(dir: &Path) {
    cpfscan(dir).args(["generate", "--output", "dados"]).assert().success();
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("cpfscan").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CPF"))
        .stdout(predicate::str::contains("sweep"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("cpfscan").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cpfscan"));
}

#[test]
fn test_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("cpfscan").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_generate_writes_thirty_files() {
    let temp_dir = TempDir::new().unwrap();
    generate(temp_dir.path());

    let count = fs::read_dir(temp_dir.path().join("dados")).unwrap().count();
    assert_eq!(count, 30);
    assert!(temp_dir.path().join("dados/cpfs_01.txt").is_file());
    assert!(temp_dir.path().join("dados/cpfs_30.txt").is_file());
}

#[test]
fn test_run_reports_for_reference_worker_counts() {
    let temp_dir = TempDir::new().unwrap();
    generate(temp_dir.path());

    for (threads, report_name) in [
        ("1", "versao_1_thread.txt"),
        ("3", "versao_3_threads.txt"),
        ("30", "versao_30_threads.txt"),
    ] {
        cpfscan(temp_dir.path())
            .args(["run", "--threads", threads])
            .assert()
            .success()
            .stdout(predicate::str::contains("150"));

        let content = fs::read_to_string(temp_dir.path().join(report_name)).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3, "{report_name}: {content}");
        assert!(lines[0].starts_with("Tempo de execução: "));
        assert!(lines[0].ends_with(" ms"));
        assert_eq!(lines[1], "CPFs válidos: 150");
        assert_eq!(lines[2], "CPFs inválidos: 150");
    }
}

#[test]
fn test_run_json_report() {
    let temp_dir = TempDir::new().unwrap();
    generate(temp_dir.path());

    cpfscan(temp_dir.path())
        .args(["run", "--threads", "3", "--format", "json", "--output", "relatorios"])
        .assert()
        .success();

    let content = fs::read_to_string(temp_dir.path().join("relatorios/versao_3_threads.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(report["workers"], 3);
    assert_eq!(report["valid"], 150);
    assert_eq!(report["invalid"], 150);
    assert_eq!(report["files_read"], 30);
}

#[test]
fn test_wrong_file_count_aborts_without_report() {
    let temp_dir = TempDir::new().unwrap();
    cpfscan(temp_dir.path())
        .args(["generate", "--output", "dados", "--files", "29"])
        .assert()
        .success();

    cpfscan(temp_dir.path())
        .args(["run", "--threads", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected exactly 30"));

    assert!(!temp_dir.path().join("versao_3_threads.txt").exists());
}

#[test]
fn test_expected_files_override() {
    let temp_dir = TempDir::new().unwrap();
    cpfscan(temp_dir.path())
        .args(["generate", "--output", "dados", "--files", "4", "--lines", "6", "--valid", "2"])
        .assert()
        .success();

    cpfscan(temp_dir.path())
        .args(["run", "--threads", "3", "--expected-files", "0"])
        .assert()
        .success();

    let content = fs::read_to_string(temp_dir.path().join("versao_3_threads.txt")).unwrap();
    assert!(content.contains("CPFs válidos: 8\n"));
    assert!(content.contains("CPFs inválidos: 16\n"));
}

#[test]
fn test_threads_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    generate(temp_dir.path());

    cpfscan(temp_dir.path())
        .env("CPFSCAN_RUN__THREADS", "5")
        .arg("run")
        .assert()
        .success();

    assert!(temp_dir.path().join("versao_5_threads.txt").is_file());
}

#[test]
fn test_zero_threads_rejected() {
    let temp_dir = TempDir::new().unwrap();
    cpfscan(temp_dir.path())
        .args(["run", "--threads", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_sweep_writes_every_report() {
    let temp_dir = TempDir::new().unwrap();
    generate(temp_dir.path());

    cpfscan(temp_dir.path())
        .arg("sweep")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sweep results"))
        .stdout(predicate::str::contains("Speedup"));

    for name in ["versao_1_thread.txt", "versao_3_threads.txt", "versao_30_threads.txt"] {
        let content = fs::read_to_string(temp_dir.path().join(name)).unwrap();
        assert!(content.contains("CPFs válidos: 150\n"), "{name}: {content}");
    }
}

#[test]
fn test_sweep_custom_thread_list() {
    let temp_dir = TempDir::new().unwrap();
    generate(temp_dir.path());

    cpfscan(temp_dir.path())
        .args(["sweep", "--threads", "2,7"])
        .assert()
        .success();

    assert!(temp_dir.path().join("versao_2_threads.txt").is_file());
    assert!(temp_dir.path().join("versao_7_threads.txt").is_file());
    assert!(!temp_dir.path().join("versao_1_thread.txt").exists());
}

#[test]
fn test_check_valid_and_invalid() {
    let temp_dir = TempDir::new().unwrap();

    cpfscan(temp_dir.path())
        .args(["check", "529.982.247-25", "11144477735"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));

    cpfscan(temp_dir.path())
        .args(["check", "52998224725", "123.456.789-00"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid"))
        .stderr(predicate::str::contains("1 of 2"));
}

#[test]
fn test_config_show_merges_repo_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("cpfscan.toml"),
        "[run]\nthreads = 3\n\n[input]\ndirectory = \"entrada\"\n",
    )
    .unwrap();

    cpfscan(temp_dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("threads = 3"))
        .stdout(predicate::str::contains("directory = \"entrada\""))
        .stdout(predicate::str::contains("extension = \"txt\""));
}

#[test]
fn test_missing_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    cpfscan(temp_dir.path())
        .args(["--config", "missing.toml", "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
