//! Core data structures for alignment gap encoding and tree storage.
//!
//! Key components of this module include:
//!
//! - [`GapRun`] and [`GapSpec`]: the compact description of where gap
//!   runs must be reinserted into an ungapped sequence.
//! - [`PhyloTree`]: a rooted directed graph with unique string labels,
//!   the in-memory form of a parsed phylogenetic tree.
//! - [`LineageMap`]: per-leaf root-to-leaf ancestor chains, the
//!   persistable encoding of a tree's shape.
//! - [`typedef`]: type aliases and the reserved symbols shared across
//!   the crate.

pub mod typedef;

mod gaps;
mod lineage;
mod tree;

pub use gaps::{GapRun, GapSpec};
pub use lineage::LineageMap;
pub use tree::PhyloTree;
