//! Level-1 and level-k parsing, built on a shared local-pattern scanner.

pub mod level1;
pub mod levelk;
pub mod scanner;
