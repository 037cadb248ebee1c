use std::fmt::{self, Display, Write};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Order-independent fingerprint of a collection of sequences.
///
/// Compared by value; two digests are equal exactly when the underlying
/// collections contain the same sequences, in any order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MsaDigest(String);

impl MsaDigest {
    pub fn as_str(&self) -> &str { &self.0 }
}

impl Display for MsaDigest {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Digests a collection of sequences, ignoring their order.
///
/// Every sequence gets a SHA-256 fingerprint; the fingerprints are
/// sorted into canonical order and hashed once more, so any permutation
/// of the input yields the same digest. This is what makes the digest
/// usable as a round-trip oracle when a storage layer returns records
/// in arbitrary order.
pub fn hash_seq<I, S>(sequences: I) -> MsaDigest
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>, {
    let mut fingerprints: Vec<String> = sequences
        .into_iter()
        .map(|seq| hex_string(Sha256::digest(seq.as_ref().as_bytes()).as_slice()))
        .collect();
    fingerprints.sort_unstable();

    let mut combined = Sha256::new();
    for fingerprint in &fingerprints {
        combined.update(fingerprint.as_bytes());
    }
    MsaDigest(hex_string(combined.finalize().as_slice()))
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().fold(
        String::with_capacity(bytes.len() * 2),
        |mut out, byte| {
            // Writing to a String cannot fail.
            let _ = write!(out, "{:02x}", byte);
            out
        },
    )
}
