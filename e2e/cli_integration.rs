// Black-box tests of the `lcptools` binary via std::process::Command.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn lcptools_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_lcptools") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("lcptools");
    p
}

fn write_fasta(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(
        &path,
        ">sample\nGGGACCTGGTGACCCCAGCCCACGACAGCCAAGCGCCAGCTGAGCTCAGGTGTGAGGAGATCACAGTCCT\n",
    )
    .unwrap();
    path
}

#[test]
fn falcpt_writes_a_dump_next_to_the_input() {
    let dir = TempDir::new().unwrap();
    let input = write_fasta(&dir, "sample.fasta");

    let status = Command::new(lcptools_bin())
        .args(["falcpt", input.to_str().unwrap(), "2"])
        .current_dir(dir.path())
        .status()
        .expect("failed to run lcptools falcpt");

    assert!(status.success(), "falcpt on a valid .fasta should exit 0");
    let dump_path = dir.path().join("sample.fasta.lcpt");
    assert!(dump_path.exists(), "dump file should be written next to the input");
    assert!(!fs::read(&dump_path).unwrap().is_empty());
}

#[test]
fn falcpt_rejects_unsupported_extensions() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("sample.txt");
    fs::write(&input, "ACGTACGT").unwrap();

    let status = Command::new(lcptools_bin())
        .args(["falcpt", input.to_str().unwrap(), "1"])
        .current_dir(dir.path())
        .status()
        .expect("failed to run lcptools falcpt");

    assert!(!status.success(), "an unsupported extension should exit non-zero");
}

#[test]
fn falcpt_rejects_missing_input() {
    let dir = TempDir::new().unwrap();
    let status = Command::new(lcptools_bin())
        .args(["falcpt", "does-not-exist.fasta", "1"])
        .current_dir(dir.path())
        .status()
        .expect("failed to run lcptools falcpt");

    assert!(!status.success(), "a missing input file should exit non-zero");
}

#[test]
fn falcpt_accepts_an_explicit_window_size() {
    let dir = TempDir::new().unwrap();
    let input = write_fasta(&dir, "windowed.fasta");

    let status = Command::new(lcptools_bin())
        .args(["falcpt", input.to_str().unwrap(), "1", "16"])
        .current_dir(dir.path())
        .status()
        .expect("failed to run lcptools falcpt");

    assert!(status.success(), "a small explicit window should still succeed");
}

#[test]
fn help_mentions_the_falcpt_subcommand() {
    let output = Command::new(lcptools_bin())
        .arg("--help")
        .output()
        .expect("failed to run lcptools --help");

    assert!(output.status.success());
    let combined = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(combined.to_lowercase().contains("falcpt"));
}
