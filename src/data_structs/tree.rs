use hashbrown::HashMap;
use indexmap::IndexSet;
use multimap::MultiMap;

use crate::data_structs::typedef::TaxonLabel;
use crate::error::StructuralError;

/// Rooted directed graph with unique string labels.
///
/// Edges point parent to child; every node except the root has exactly
/// one parent. Node order is insertion order, so trees built by the
/// parser keep their leaves in parse order.
#[derive(Debug, Clone)]
pub struct PhyloTree {
    root:     TaxonLabel,
    nodes:    IndexSet<TaxonLabel>,
    parents:  HashMap<TaxonLabel, TaxonLabel>,
    children: MultiMap<TaxonLabel, TaxonLabel>,
}

impl PhyloTree {
    pub fn new(root: TaxonLabel) -> Self {
        let mut nodes = IndexSet::new();
        nodes.insert(root.clone());
        Self {
            root,
            nodes,
            parents: HashMap::new(),
            children: MultiMap::new(),
        }
    }

    pub fn root(&self) -> &TaxonLabel { &self.root }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn contains(
        &self,
        label: &str,
    ) -> bool {
        self.nodes.contains(label)
    }

    pub fn parent(
        &self,
        label: &str,
    ) -> Option<&TaxonLabel> {
        self.parents.get(label)
    }

    pub fn children(
        &self,
        label: &str,
    ) -> Option<&Vec<TaxonLabel>> {
        self.children.get_vec(label)
    }

    pub fn is_leaf(
        &self,
        label: &str,
    ) -> bool {
        self.nodes.contains(label) && !self.children.contains_key(label)
    }

    /// Nodes without outgoing edges, in insertion order.
    pub fn leaves(&self) -> impl Iterator<Item = &TaxonLabel> + '_ {
        self.nodes
            .iter()
            .filter(|label| !self.children.contains_key(label.as_str()))
    }

    /// All `(parent, child)` edges, in arbitrary order.
    pub fn edges(
        &self,
    ) -> impl Iterator<Item = (&TaxonLabel, &TaxonLabel)> + '_ {
        self.parents.iter().map(|(child, parent)| (parent, child))
    }

    pub fn num_edges(&self) -> usize { self.parents.len() }

    /// Attaches a brand-new node under an existing parent.
    ///
    /// Returns [None] if the parent is unknown or the child label is
    /// already taken, leaving the tree unchanged.
    pub fn add_child(
        &mut self,
        parent: &str,
        child: TaxonLabel,
    ) -> Option<()> {
        if self.nodes.contains(child.as_str()) {
            return None;
        }
        let parent = self.nodes.get(parent)?.clone();
        self.nodes.insert(child.clone());
        self.parents.insert(child.clone(), parent.clone());
        self.children.insert(parent, child);
        Some(())
    }

    /// Merges one `(parent, child)` edge into the tree.
    ///
    /// Missing nodes are created; re-inserting an existing edge is a
    /// no-op, so the operation is idempotent and insensitive to the order
    /// edges arrive in. Fails if the child would acquire a second parent
    /// or if the edge points at the root.
    pub fn link(
        &mut self,
        parent: &TaxonLabel,
        child: &TaxonLabel,
    ) -> Result<(), StructuralError> {
        if *child == self.root {
            return Err(StructuralError::RootAsChild(child.clone()));
        }
        if let Some(existing) = self.parents.get(child.as_str()) {
            return if existing == parent {
                Ok(())
            }
            else {
                Err(StructuralError::ParentConflict {
                    child:    child.clone(),
                    existing: existing.clone(),
                    parent:   parent.clone(),
                })
            };
        }
        self.nodes.insert(parent.clone());
        self.nodes.insert(child.clone());
        self.parents.insert(child.clone(), parent.clone());
        self.children.insert(parent.clone(), child.clone());
        Ok(())
    }

    /// The unique path from the root down to `label`, inclusive.
    pub fn path_from_root(
        &self,
        label: &str,
    ) -> Result<Vec<TaxonLabel>, StructuralError> {
        let mut node = self
            .nodes
            .get(label)
            .ok_or_else(|| StructuralError::UnknownNode(label.into()))?;
        let mut path = vec![node.clone()];
        while *node != self.root {
            node = self.parents.get(node.as_str()).ok_or_else(|| {
                StructuralError::UnreachableNode {
                    node: node.clone(),
                    root: self.root.clone(),
                }
            })?;
            path.push(node.clone());
            if path.len() > self.nodes.len() {
                return Err(StructuralError::UnreachableNode {
                    node: node.clone(),
                    root: self.root.clone(),
                });
            }
        }
        path.reverse();
        Ok(path)
    }

    /// Label-aware structural equality: identical node label sets and
    /// identical edge sets.
    ///
    /// Labels are unique identifiers, so no isomorphism search is needed;
    /// comparing the parent maps directly decides equivalence.
    pub fn same_topology(
        &self,
        other: &Self,
    ) -> bool {
        self.root == other.root
            && self.nodes.len() == other.nodes.len()
            && self
                .nodes
                .iter()
                .all(|label| other.nodes.contains(label.as_str()))
            && self.parents == other.parents
    }
}

#[cfg(test)]
mod tests {
    use arcstr::literal;

    use super::*;
    use crate::data_structs::typedef::ROOT_LABEL;

    fn sample_tree() -> PhyloTree {
        // root -> A, root -> D, D -> B, D -> C
        let mut tree = PhyloTree::new(ROOT_LABEL);
        tree.add_child("root", literal!("A")).unwrap();
        tree.add_child("root", literal!("D")).unwrap();
        tree.add_child("D", literal!("B")).unwrap();
        tree.add_child("D", literal!("C")).unwrap();
        tree
    }

    #[test]
    fn test_add_child_and_queries() {
        let tree = sample_tree();
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.num_edges(), 4);
        assert!(tree.contains("D"));
        assert!(!tree.contains("E"));
        assert!(tree.is_leaf("A"));
        assert!(!tree.is_leaf("D"));
        assert_eq!(tree.parent("B"), Some(&literal!("D")));
        assert_eq!(tree.parent("root"), None);
        assert_eq!(
            tree.children("D"),
            Some(&vec![literal!("B"), literal!("C")])
        );
    }

    #[test]
    fn test_add_child_rejects_duplicates_and_unknown_parents() {
        let mut tree = sample_tree();
        assert_eq!(tree.add_child("root", literal!("A")), None);
        assert_eq!(tree.add_child("nope", literal!("E")), None);
        // Tree unchanged by the failed inserts.
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_leaves_in_insertion_order() {
        let tree = sample_tree();
        let leaves: Vec<_> =
            tree.leaves().map(|l| l.as_str().to_owned()).collect();
        assert_eq!(leaves, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_path_from_root() {
        let tree = sample_tree();
        let path = tree.path_from_root("C").unwrap();
        assert_eq!(path, vec![ROOT_LABEL, literal!("D"), literal!("C")]);

        let path = tree.path_from_root("root").unwrap();
        assert_eq!(path, vec![ROOT_LABEL]);

        assert_eq!(
            tree.path_from_root("missing"),
            Err(StructuralError::UnknownNode(literal!("missing")))
        );
    }

    #[test]
    fn test_link_is_idempotent() {
        let mut tree = PhyloTree::new(ROOT_LABEL);
        let d = literal!("D");
        let b = literal!("B");
        tree.link(&ROOT_LABEL, &d).unwrap();
        tree.link(&d, &b).unwrap();
        tree.link(&d, &b).unwrap();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.num_edges(), 2);
        assert_eq!(tree.children("D"), Some(&vec![literal!("B")]));
    }

    #[test]
    fn test_link_rejects_second_parent() {
        let mut tree = PhyloTree::new(ROOT_LABEL);
        let a = literal!("A");
        let b = literal!("B");
        let c = literal!("C");
        tree.link(&ROOT_LABEL, &a).unwrap();
        tree.link(&ROOT_LABEL, &b).unwrap();
        tree.link(&a, &c).unwrap();
        assert_eq!(
            tree.link(&b, &c),
            Err(StructuralError::ParentConflict {
                child:    c,
                existing: a,
                parent:   b,
            })
        );
    }

    #[test]
    fn test_link_rejects_root_as_child() {
        let mut tree = PhyloTree::new(ROOT_LABEL);
        let a = literal!("A");
        tree.link(&ROOT_LABEL, &a).unwrap();
        assert_eq!(
            tree.link(&a, &ROOT_LABEL),
            Err(StructuralError::RootAsChild(ROOT_LABEL))
        );
    }

    #[test]
    fn test_same_topology() {
        let tree = sample_tree();

        // Same edges inserted in a different order.
        let mut other = PhyloTree::new(ROOT_LABEL);
        other.add_child("root", literal!("D")).unwrap();
        other.add_child("D", literal!("C")).unwrap();
        other.add_child("D", literal!("B")).unwrap();
        other.add_child("root", literal!("A")).unwrap();
        assert!(tree.same_topology(&other));
        assert!(other.same_topology(&tree));

        // One relocated edge breaks equivalence.
        let mut moved = PhyloTree::new(ROOT_LABEL);
        moved.add_child("root", literal!("A")).unwrap();
        moved.add_child("root", literal!("D")).unwrap();
        moved.add_child("D", literal!("B")).unwrap();
        moved.add_child("B", literal!("C")).unwrap();
        assert!(!tree.same_topology(&moved));

        // A different label set breaks equivalence.
        let mut renamed = PhyloTree::new(ROOT_LABEL);
        renamed.add_child("root", literal!("A")).unwrap();
        renamed.add_child("root", literal!("E")).unwrap();
        renamed.add_child("E", literal!("B")).unwrap();
        renamed.add_child("E", literal!("C")).unwrap();
        assert!(!tree.same_topology(&renamed));
    }
}
