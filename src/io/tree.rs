use std::path::Path;

use anyhow::{anyhow, Context};
use log::debug;

use crate::data_structs::PhyloTree;
use crate::newick::{find_tree_statement, parse_newick};

/// Reads a Nexus-style tree file and parses its tree statement.
///
/// Header and non-tree lines are skipped; the first `tree <NAME>` line
/// provides the Newick string, taken from its first `(`.
pub fn read_tree_file<P: AsRef<Path>>(path: P) -> anyhow::Result<PhyloTree> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let statement = find_tree_statement(&text)
        .ok_or_else(|| anyhow!("no tree statement in {}", path.display()))?;
    debug!(
        "identified tree statement in {} ({} bytes)",
        path.display(),
        statement.len()
    );
    let tree = parse_newick(statement)
        .with_context(|| format!("failed to parse tree in {}", path.display()))?;
    Ok(tree)
}
