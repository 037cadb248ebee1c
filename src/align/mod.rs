//! Reversible gap encoding for aligned sequences.
//!
//! An aligned sequence is split into its ungapped symbols plus a
//! [`GapSpec`] recording where runs of the gap symbol must be
//! reinserted. Encoding never fails; decoding validates the spec and
//! optionally the expected aligned length. The codec is agnostic to the
//! alphabet, only the gap symbol is interpreted.
//!
//! [`hash_seq`] provides the permutation-invariant digest used to prove
//! that a whole collection survived the encode/store/decode round trip.

mod digest;

pub use digest::{hash_seq, MsaDigest};

use crate::data_structs::typedef::{GapPos, GAP_SYMBOL};
use crate::data_structs::{GapRun, GapSpec};
use crate::error::ValidationError;

/// Splits an aligned sequence into its ungapped form and a gap spec.
///
/// A single scan identifies maximal runs of the default gap symbol `-`.
/// The empty sequence yields an empty sequence and an empty spec.
pub fn encode_gaps(aligned: &str) -> (String, GapSpec) {
    encode_gaps_with(aligned, GAP_SYMBOL)
}

/// [encode_gaps] with an explicit gap symbol.
pub fn encode_gaps_with(
    aligned: &str,
    gap: char,
) -> (String, GapSpec) {
    let mut ungapped = String::with_capacity(aligned.len());
    let mut spec = GapSpec::new();
    let mut run_start: Option<usize> = None;
    let mut position = 0usize;

    for symbol in aligned.chars() {
        if symbol == gap {
            run_start.get_or_insert(position);
        }
        else {
            if let Some(start) = run_start.take() {
                spec.push_run(GapRun(
                    start as GapPos,
                    (position - start) as GapPos,
                ));
            }
            ungapped.push(symbol);
        }
        position += 1;
    }
    if let Some(start) = run_start {
        spec.push_run(GapRun(start as GapPos, (position - start) as GapPos));
    }

    (ungapped, spec)
}

/// Reinserts gap runs into an ungapped sequence.
///
/// Walks the spec in increasing-position order, alternately copying
/// symbols and inserting runs of the default gap symbol `-`. For any
/// aligned sequence `s`, `decode_gaps(encode_gaps(s)) == s` symbol for
/// symbol.
pub fn decode_gaps(
    ungapped: &str,
    spec: &GapSpec,
) -> Result<String, ValidationError> {
    decode_gaps_with(ungapped, spec, GAP_SYMBOL)
}

/// [decode_gaps] with an explicit gap symbol.
pub fn decode_gaps_with(
    ungapped: &str,
    spec: &GapSpec,
    gap: char,
) -> Result<String, ValidationError> {
    let mut out = String::with_capacity(spec.aligned_len(ungapped.len()));
    let mut source = ungapped.chars();
    let mut out_len = 0usize;
    let mut previous: Option<GapPos> = None;

    for run in spec.runs() {
        if run.length() == 0 {
            return Err(ValidationError::EmptyRun {
                position: run.position(),
            });
        }
        if let Some(prev) = previous {
            if run.position() <= prev {
                return Err(ValidationError::UnorderedRuns {
                    position: run.position(),
                    previous: prev,
                });
            }
        }
        previous = Some(run.position());

        let position = run.position() as usize;
        if position < out_len {
            return Err(ValidationError::RunOverlap {
                position: run.position(),
                output_len: out_len,
            });
        }
        while out_len < position {
            match source.next() {
                Some(symbol) => {
                    out.push(symbol);
                    out_len += 1;
                },
                None => {
                    return Err(ValidationError::RunBeyondOutput {
                        position: run.position(),
                        output_len: out_len,
                    })
                },
            }
        }
        for _ in 0..run.length() {
            out.push(gap);
        }
        out_len += run.length() as usize;
    }

    out.extend(source);
    Ok(out)
}

/// [decode_gaps] that additionally enforces the expected aligned length.
///
/// The caller supplies the alignment-set length `L`; a decoded sequence
/// of any other length fails with [ValidationError::LengthMismatch].
pub fn decode_gaps_with_len(
    ungapped: &str,
    spec: &GapSpec,
    expected_len: usize,
) -> Result<String, ValidationError> {
    let aligned = decode_gaps(ungapped, spec)?;
    let actual = aligned.chars().count();
    if actual != expected_len {
        return Err(ValidationError::LengthMismatch {
            expected: expected_len,
            actual,
        });
    }
    Ok(aligned)
}
