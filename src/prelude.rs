pub use crate::align::{
    decode_gaps,
    decode_gaps_with,
    decode_gaps_with_len,
    encode_gaps,
    encode_gaps_with,
    hash_seq,
    MsaDigest,
};
pub use crate::data_structs::typedef::{
    GapPos,
    TaxonLabel,
    GAP_SYMBOL,
    ROOT_LABEL,
};
pub use crate::data_structs::{
    GapRun,
    GapSpec,
    LineageMap,
    PhyloTree,
};
pub use crate::error::{
    ParseError,
    StructuralError,
    ValidationError,
};
pub use crate::io::{
    read_alignment,
    read_tree_file,
    AlignedRecord,
};
pub use crate::newick::{
    find_tree_statement,
    parse_newick,
};
