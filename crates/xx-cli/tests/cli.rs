//! Drives the compiled `xx` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(source: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("out")).unwrap();
        fs::write(
            dir.path().join("env.toml"),
            format!("output = {:?}\n", dir.path().join("out").display().to_string()),
        )
        .unwrap();
        fs::write(dir.path().join("input.xx"), source).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("xx").unwrap();
        cmd.arg("-e").arg(self.path("env.toml"));
        cmd.arg("-i").arg(self.path("input.xx"));
        cmd
    }
}

fn read(path: &Path) -> Vec<u8> {
    fs::read(path).unwrap()
}

#[test]
fn test_raw_to_stdout() {
    let fx = Fixture::new("41 42 43 ; abc\n\"hi\"\n");
    fx.cmd()
        .arg("-r")
        .assert()
        .success()
        .stdout(predicate::eq(&[0x41u8, 0x42, 0x43, 0x68, 0x69][..]));
}

#[test]
fn test_hexdump_to_stdout() {
    let fx = Fixture::new("41 42 43\n");
    fx.cmd()
        .arg("-x")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("00000000: 41 42 43 "))
        .stdout(predicate::str::ends_with(" ABC\n"));
}

#[test]
fn test_hexdump_wins_over_raw() {
    let fx = Fixture::new("41\n");
    fx.cmd()
        .args(["-r", "-x"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("00000000: 41 "));
}

#[test]
fn test_write_file_in_output_dir() {
    let fx = Fixture::new("/* header\n   still header */ 0y00000001\n0x02,0x03\n");
    fx.cmd().args(["-o", "image.bin"]).assert().success().stdout("");
    assert_eq!(read(&fx.path("out").join("image.bin")), vec![1, 2, 3]);
}

#[test]
fn test_default_output_name() {
    let fx = Fixture::new("ff\n");
    fx.cmd().assert().success();
    assert_eq!(read(&fx.path("out").join("outFile")), vec![0xff]);
}

#[test]
fn test_missing_config_fails() {
    let fx = Fixture::new("41\n");
    Command::cargo_bin("xx")
        .unwrap()
        .arg("-e")
        .arg(fx.path("missing.toml"))
        .arg("-i")
        .arg(fx.path("input.xx"))
        .arg("-r")
        .assert()
        .code(1);
}

#[test]
fn test_malformed_config_fails() {
    let fx = Fixture::new("41\n");
    fs::write(fx.path("env.toml"), "output = [").unwrap();
    fx.cmd().arg("-r").assert().code(1).stdout("");
}

#[test]
fn test_missing_input_fails() {
    let fx = Fixture::new("41\n");
    fs::remove_file(fx.path("input.xx")).unwrap();
    fx.cmd()
        .arg("-r")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot read input"));
}

#[test]
fn test_unknown_verbosity_rejected() {
    let fx = Fixture::new("41\n");
    fx.cmd().args(["-v", "debug", "-r"]).assert().code(2);
}

#[test]
fn test_unwritable_output_fails() {
    let fx = Fixture::new("41\n");
    fx.cmd()
        .args(["-o", "no/such/dir/file.bin"])
        .assert()
        .code(2);
}

#[test]
fn test_info_level_logs_to_stderr() {
    let fx = Fixture::new("41\n");
    fx.cmd()
        .args(["-v", "info", "-r"])
        .assert()
        .success()
        .stdout(predicate::eq(&[0x41u8][..]))
        .stderr(predicate::str::contains("assembled"));
}
