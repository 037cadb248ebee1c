//! Parsing bracket-nested tree descriptions.
//!
//! [`parse_newick`] consumes a string that starts at the outermost `(`
//! and produces a [`PhyloTree`](crate::data_structs::PhyloTree) rooted
//! at the reserved root identifier. Locating that substring inside a
//! larger tree file is a separate concern, covered by
//! [`find_tree_statement`], which scans for the `tree <NAME>` statement
//! convention of Nexus-style files.

mod parser;

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::data_structs::PhyloTree;
use crate::error::ParseError;
use parser::NewickParser;

static TREE_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^tree\s+[A-Za-z_][A-Za-z0-9_]*").expect("valid regex")
});

/// Parses one Newick string, starting at the outermost `(`.
///
/// Branch lengths and `[...]` blocks are recognized and dropped;
/// unlabeled internal nodes get synthesized unique labels; the outermost
/// node is relabeled to `root`. A trailing `;` is accepted.
pub fn parse_newick(text: &str) -> Result<PhyloTree, ParseError> {
    NewickParser::new(text).parse()
}

/// Finds the Newick substring inside a Nexus-style tree file.
///
/// Scans line by line for a `tree <NAME>` statement and returns the
/// slice starting at the line's first `(`, ready for [parse_newick].
/// Returns [None] when no such line exists.
pub fn find_tree_statement(text: &str) -> Option<&str> {
    for line in text.lines() {
        let line = line.trim();
        if TREE_STATEMENT.is_match(line) {
            if let Some(start) = line.find('(') {
                return Some(&line[start..]);
            }
        }
    }
    None
}
