//! Command-line surface definition.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "lcptools",
    version,
    about = "Hierarchical locally consistent parsing for small-alphabet sequences"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a FASTA/FASTQ file down to the requested LCP level and write
    /// the binary dump next to it.
    Falcpt(FalcptArgs),
}

#[derive(clap::Args, Debug)]
pub struct FalcptArgs {
    /// Input file. Must end in .fasta, .fa, .fastq, or .fq.
    pub file: String,

    /// Target LCP level to deepen the parse to.
    pub lcp_level: u32,

    /// Chunked-builder window size in bytes. Falls back to the
    /// LCPTOOLS_WINDOW environment variable, then a built-in default.
    pub sequence_size: Option<usize>,
}
