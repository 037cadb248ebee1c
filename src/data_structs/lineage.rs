use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::data_structs::tree::PhyloTree;
use crate::data_structs::typedef::{TaxonLabel, ROOT_LABEL};
use crate::error::StructuralError;

/// Per-leaf ancestor chains of a rooted tree.
///
/// For every leaf the map holds the ordered labels from the root down to
/// the leaf's parent, excluding the leaf itself. Together with its keys
/// this is a lossless encoding of the tree shape and is the artifact
/// meant for persistence; branch lengths and support values are not part
/// of it. Serializes as a mapping of leaf label to array of ancestor
/// labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineageMap(IndexMap<TaxonLabel, Vec<TaxonLabel>>);

impl LineageMap {
    pub fn new() -> Self { Self::default() }

    /// Decomposes a tree into one lineage per leaf.
    ///
    /// Fails with [StructuralError] if a leaf does not reach the root by
    /// parent links, which cannot happen for trees built by this crate
    /// and indicates an internal-consistency fault.
    pub fn from_tree(tree: &PhyloTree) -> Result<Self, StructuralError> {
        let mut map = IndexMap::new();
        for leaf in tree.leaves() {
            let mut path = tree.path_from_root(leaf.as_str())?;
            path.pop();
            map.insert(leaf.clone(), path);
        }
        Ok(Self(map))
    }

    /// Rebuilds the tree this map was decomposed from.
    ///
    /// Every consecutive `(parent, child)` pair of `lineage ++ [leaf]` is
    /// merged into an accumulating tree. Merging deduplicates nodes and
    /// edges, so shared ancestors collapse onto one node and the entry
    /// order of the map cannot affect the result.
    pub fn to_tree(&self) -> Result<PhyloTree, StructuralError> {
        let mut tree = PhyloTree::new(ROOT_LABEL);
        for (leaf, lineage) in &self.0 {
            match lineage.first() {
                Some(first) if *first == ROOT_LABEL => {},
                // A root that is itself a leaf carries an empty lineage.
                None if *leaf == ROOT_LABEL => continue,
                _ => {
                    return Err(StructuralError::UnrootedLineage {
                        leaf: leaf.clone(),
                    })
                },
            }
            for (parent, child) in
                lineage.iter().chain(std::iter::once(leaf)).tuple_windows()
            {
                tree.link(parent, child)?;
            }
        }
        Ok(tree)
    }

    pub fn insert(
        &mut self,
        leaf: TaxonLabel,
        lineage: Vec<TaxonLabel>,
    ) {
        self.0.insert(leaf, lineage);
    }

    pub fn get(
        &self,
        leaf: &str,
    ) -> Option<&[TaxonLabel]> {
        self.0.get(leaf).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&TaxonLabel, &[TaxonLabel])> + '_ {
        self.0
            .iter()
            .map(|(leaf, lineage)| (leaf, lineage.as_slice()))
    }
}

impl FromIterator<(TaxonLabel, Vec<TaxonLabel>)> for LineageMap {
    fn from_iter<T: IntoIterator<Item = (TaxonLabel, Vec<TaxonLabel>)>>(
        iter: T
    ) -> Self {
        Self(iter.into_iter().collect())
    }
}
