//! # msaphylo
//!
//! `msaphylo` is a Rust library for the two algorithm-heavy steps of a
//! sequence-database ingestion workflow: reversible gap encoding of
//! multiple-sequence-alignment rows, and lineage-based storage of
//! phylogenetic trees. The caller owns persistence, querying and
//! visualization; this crate only transforms plain strings and tree text
//! into the flat, serializable values such a store keeps, and verifies
//! the round trips.
//!
//! ## Key features
//!
//! * **Gap codec**: split an aligned sequence into its ungapped symbols
//!   plus a compact [`GapSpec`](data_structs::GapSpec) of `(position,
//!   length)` runs, and losslessly reassemble it
//!   ([`encode_gaps`](align::encode_gaps) /
//!   [`decode_gaps`](align::decode_gaps)).
//! * **Collection digest**: a permutation-invariant fingerprint over
//!   sequence collections ([`hash_seq`](align::hash_seq)), so a round
//!   trip can be proven even when a store returns rows in arbitrary
//!   order.
//! * **Newick parsing**: bracket-nested tree text to a rooted,
//!   uniquely-labeled digraph ([`parse_newick`](newick::parse_newick)),
//!   with branch lengths recognized and dropped.
//! * **Lineage storage**: decompose a tree into per-leaf root-to-leaf
//!   ancestor chains and rebuild it from them
//!   ([`LineageMap`](data_structs::LineageMap)), with a direct
//!   label-aware equivalence check
//!   ([`PhyloTree::same_topology`](data_structs::PhyloTree::same_topology)).
//!
//! All operations are pure, synchronous, in-memory transformations;
//! callers may fan out over sequences freely, no state is shared between
//! invocations.
//!
//! ## Usage
//!
//! ### Encoding alignment gaps
//!
//! ```
//! use msaphylo::prelude::*;
//!
//! let (ungapped, gaps) = encode_gaps("AC--GT--");
//! assert_eq!(ungapped, "ACGT");
//! assert_eq!(gaps, GapSpec::from_pairs([(2, 2), (6, 2)]));
//!
//! let aligned = decode_gaps(&ungapped, &gaps).unwrap();
//! assert_eq!(aligned, "AC--GT--");
//! ```
//!
//! ### Proving a collection round trip
//!
//! ```
//! use msaphylo::prelude::*;
//!
//! let rows = ["AC--GT--", "A-C-GT--", "ACGT----"];
//! let before = hash_seq(rows);
//!
//! let stored: Vec<_> = rows
//!     .iter()
//!     .map(|row| encode_gaps(row))
//!     .collect();
//! // A store may hand the pairs back in any order.
//! let decoded: Vec<_> = stored
//!     .iter()
//!     .rev()
//!     .map(|(seq, gaps)| decode_gaps(seq, gaps).unwrap())
//!     .collect();
//!
//! assert_eq!(before, hash_seq(&decoded));
//! ```
//!
//! ### Storing a tree as lineages
//!
//! ```
//! use msaphylo::prelude::*;
//!
//! let tree = parse_newick("(A,(B,C)D);").unwrap();
//! let lineages = LineageMap::from_tree(&tree).unwrap();
//! assert_eq!(lineages.get("B").unwrap().last().unwrap(), "D");
//!
//! let rebuilt = lineages.to_tree().unwrap();
//! assert!(tree.same_topology(&rebuilt));
//! ```

pub mod align;
pub mod data_structs;
pub mod error;
pub mod io;
pub mod newick;
pub mod prelude;
