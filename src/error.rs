//! Error types for the alignment codec and the tree pipeline.
//!
//! Three separate taxonomies, matching the three failure domains of the
//! crate: [`ValidationError`] for malformed or inconsistent gap
//! specifications, [`ParseError`] for Newick text, and
//! [`StructuralError`] for trees and lineage sets that violate the
//! rooted-tree invariants. All failures are synchronous and reported at
//! the point of detection; nothing is retried and nothing partially
//! succeeds.

use thiserror::Error;

use crate::data_structs::typedef::TaxonLabel;

/// A gap specification cannot be applied to an ungapped sequence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A run of length zero is meaningless and never produced by encoding.
    #[error("empty gap run at position {position}")]
    EmptyRun { position: u32 },

    /// Run positions must be strictly increasing.
    #[error(
        "gap run at position {position} is not after the previous run at \
         {previous}"
    )]
    UnorderedRuns { position: u32, previous: u32 },

    /// A run starts inside the span written by a previous run.
    #[error(
        "gap run at position {position} overlaps already written output of \
         length {output_len}"
    )]
    RunOverlap { position: u32, output_len: usize },

    /// A run position lies beyond what the ungapped sequence can reach.
    #[error(
        "gap run at position {position} is beyond the reachable output \
         (length {output_len}, source exhausted)"
    )]
    RunBeyondOutput { position: u32, output_len: usize },

    /// Decoded length disagrees with the expected aligned length.
    #[error("decoded length {actual} does not match expected length {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Newick text could not be parsed into a tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("unexpected character {found:?} at offset {offset}: expected {expected}")]
    UnexpectedChar {
        found:    char,
        offset:   usize,
        expected: &'static str,
    },

    #[error("empty child list at offset {offset}")]
    EmptyChildList { offset: usize },

    #[error("missing node label at offset {offset}")]
    MissingLabel { offset: usize },

    #[error("malformed branch length at offset {offset}")]
    MalformedBranchLength { offset: usize },

    #[error("unterminated comment starting at offset {offset}")]
    UnterminatedComment { offset: usize },

    #[error("duplicate node label {0:?}")]
    DuplicateLabel(TaxonLabel),

    #[error("trailing input after tree at offset {offset}")]
    TrailingInput { offset: usize },
}

/// A tree or lineage set violates the rooted-tree invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructuralError {
    #[error("node {0:?} is not in the tree")]
    UnknownNode(TaxonLabel),

    #[error("node {node:?} does not reach the root {root:?} by parent links")]
    UnreachableNode { node: TaxonLabel, root: TaxonLabel },

    #[error("lineage for leaf {leaf:?} does not start at the tree root")]
    UnrootedLineage { leaf: TaxonLabel },

    #[error(
        "node {child:?} already has parent {existing:?}, cannot also attach \
         it under {parent:?}"
    )]
    ParentConflict {
        child:    TaxonLabel,
        existing: TaxonLabel,
        parent:   TaxonLabel,
    },

    #[error("the root {0:?} cannot be attached as a child")]
    RootAsChild(TaxonLabel),
}
