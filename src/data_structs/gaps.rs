use serde::{Deserialize, Serialize};

use crate::data_structs::typedef::GapPos;
use crate::error::ValidationError;

/// One maximal run of gap symbols: `(position, length)`.
///
/// The position is expressed in the coordinate space of the aligned
/// (gapped) sequence. Serializes as a two-element array, which is the
/// shape document stores expect for gap lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapRun(pub GapPos, pub GapPos);

impl GapRun {
    /// Start index of the run in the aligned sequence.
    pub fn position(&self) -> GapPos { self.0 }

    /// Number of gap symbols in the run.
    pub fn length(&self) -> GapPos { self.1 }
}

/// Ordered gap runs of one aligned sequence.
///
/// Runs are disjoint and strictly increasing by position. Together with
/// the ungapped sequence this is a lossless encoding of the aligned
/// sequence: `sum(lengths) + ungapped length == aligned length`. An empty
/// spec denotes a sequence without gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GapSpec(Vec<GapRun>);

impl GapSpec {
    pub fn new() -> Self { Self::default() }

    /// Builds a spec from `(position, length)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (GapPos, GapPos)>, {
        Self(
            pairs
                .into_iter()
                .map(|(position, length)| GapRun(position, length))
                .collect(),
        )
    }

    pub(crate) fn push_run(
        &mut self,
        run: GapRun,
    ) {
        self.0.push(run);
    }

    /// The recorded runs, in increasing-position order.
    pub fn runs(&self) -> &[GapRun] { &self.0 }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Total number of gap symbols described by this spec.
    pub fn total_gap_len(&self) -> usize {
        self.0.iter().map(|run| run.length() as usize).sum()
    }

    /// Aligned length implied by this spec for an ungapped sequence.
    pub fn aligned_len(
        &self,
        ungapped_len: usize,
    ) -> usize {
        ungapped_len + self.total_gap_len()
    }

    /// Checks the well-formedness a decoder relies on: nonzero run
    /// lengths and strictly increasing positions.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut previous: Option<GapPos> = None;
        for run in &self.0 {
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
        }
        Ok(())
    }
}

impl From<Vec<GapRun>> for GapSpec {
    fn from(runs: Vec<GapRun>) -> Self { Self(runs) }
}

impl FromIterator<GapRun> for GapSpec {
    fn from_iter<T: IntoIterator<Item = GapRun>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
