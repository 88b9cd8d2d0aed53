//! Thin CLI shim over the library. This is not where the engine
//! lives — it exists to turn a file path and a couple of numbers into a
//! [`lcptools::ParseContainer`] and a dump on disk, with `anyhow` doing
//! the error-context plumbing that the library itself deliberately
//! avoids.

pub mod args;
pub mod constants;

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use lcptools::{codec, config};

pub fn run() -> Result<()> {
    let cli = args::Cli::parse();
    match cli.command {
        args::Command::Falcpt(falcpt_args) => falcpt(falcpt_args),
    }
}

fn falcpt(cmd: args::FalcptArgs) -> Result<()> {
    let path = Path::new(&cmd.file);
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !constants::SUPPORTED_EXTENSIONS.contains(&ext) {
        bail!(
            "unsupported input extension {:?}; expected one of {:?}",
            ext,
            constants::SUPPORTED_EXTENSIONS
        );
    }

    let raw = fs::read(path).with_context(|| format!("reading {}", cmd.file))?;
    let sequence = strip_headers(&raw);

    let window = cmd.sequence_size.unwrap_or_else(default_window);
    log::debug!(
        "falcpt: parsing {} bytes from {} with window {}",
        sequence.len(),
        cmd.file,
        window
    );

    let container = lcptools::build_chunked(&sequence, cmd.lcp_level, window, false);
    let dump = codec::dump(&container);

    let out_path = format!("{}{}", cmd.file, constants::DUMP_SUFFIX);
    fs::write(&out_path, &dump).with_context(|| format!("writing {}", out_path))?;

    log::debug!(
        "falcpt: wrote {} cores at level {} to {}",
        container.cores.len(),
        container.level,
        out_path
    );
    Ok(())
}

fn default_window() -> usize {
    std::env::var(config::WINDOW_ENV_VAR)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(config::DEFAULT_CHUNK_WINDOW)
}

/// Deliberately minimal: drops `>`/`@`/`+` header lines and blank lines
/// and concatenates what's left. This is not a FASTA/FASTQ parser —
/// multi-record files, wrapped sequence lines spanning records, and
/// quality-score interpretation are all out of scope; it exists only to
/// hand the engine a clean byte stream for the golden-path single-record
/// case.
fn strip_headers(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    for line in raw.split(|&b| b == b'\n') {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        match line.first() {
            None | Some(b'>') | Some(b'@') | Some(b'+') => continue,
            _ => out.extend_from_slice(line),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_headers_keeps_only_sequence_lines() {
        let raw = b">seq1\nACGT\nACGT\n+ignored\n";
        assert_eq!(strip_headers(raw), b"ACGTACGT");
    }

    #[test]
    fn strip_headers_handles_crlf() {
        let raw = b">seq1\r\nACGT\r\n";
        assert_eq!(strip_headers(raw), b"ACGT");
    }
}
