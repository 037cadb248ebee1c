use arcstr::ArcStr;

/// Shared, cheaply clonable node/sequence label.
///
/// Labels are keys in every tree map, so the same label is cloned into
/// parent maps, child maps and lineages; an atomically refcounted string
/// keeps those clones O(1).
pub type TaxonLabel = ArcStr;

/// Position/length type for gap runs, in aligned-sequence coordinates.
pub type GapPos = u32;

/// The gap symbol of the supported alignment alphabet.
pub const GAP_SYMBOL: char = '-';

/// Reserved label every parsed tree is rooted at.
///
/// The outermost node of a Newick string is relabeled to this identifier,
/// and every stored lineage starts with it.
pub const ROOT_LABEL: TaxonLabel = arcstr::literal!("root");
