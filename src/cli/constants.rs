//! Small fixed tables the CLI consults.

/// File extensions `falcpt` accepts as sequence input.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["fasta", "fa", "fastq", "fq"];

/// Suffix appended to the input file name to form the dump path.
pub const DUMP_SUFFIX: &str = ".lcpt";
