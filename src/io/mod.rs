//! File-facing glue around the core.
//!
//! Readers here translate files into the plain values the core operates
//! on; they own no storage or query logic. Errors are reported through
//! [anyhow] with enough context to name the offending file.

pub mod fasta;
pub mod tree;

pub use fasta::{read_alignment, AlignedRecord};
pub use tree::read_tree_file;
