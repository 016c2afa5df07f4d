//! Pattern matching over both strands of a sequence.
//!
//! The matcher reports every start position where the recognition pattern
//! matches under ambiguity expansion, overlapping occurrences included.
//! Reverse-strand sites are found by scanning the forward sequence with the
//! reverse-complemented pattern; their positions refer to the leftmost base
//! of the matched region in forward coordinates, so downstream consumers
//! never deal with reverse-strand coordinates.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::base::{RecognitionPattern, Sequence};

/// Start positions per worker in the partitioned scan. Each worker reads up
/// to `pattern.len() - 1` bases past its range, so neighboring chunks
/// overlap in reads but never in reported positions.
const PARALLEL_CHUNK: usize = 8192;

/// The strand a match was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// Single-character form used in tables and CSV output.
    #[inline(always)]
    pub const fn symbol(self) -> char {
        match self {
            Self::Forward => '+',
            Self::Reverse => '-',
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Reverse => write!(f, "reverse"),
        }
    }
}

/// A single occurrence of the recognition pattern on a sequence.
///
/// `position + matched.len() <= sequence.len()` holds for every site the
/// matcher produces. `matched` is the forward-strand subsequence covered by
/// the site regardless of strand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MatchSite {
    position: usize,
    matched: Sequence,
    strand: Strand,
}

impl MatchSite {
    /// Create a match site.
    pub fn new(position: usize, matched: Sequence, strand: Strand) -> Self {
        Self {
            position,
            matched,
            strand,
        }
    }

    /// Offset of the leftmost matched base, in forward coordinates.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The forward-strand subsequence covered by this site.
    #[inline]
    pub fn matched(&self) -> &Sequence {
        &self.matched
    }

    /// The strand the pattern matched on.
    #[inline(always)]
    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// Length of the matched region in bases.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.matched.len()
    }

    /// Match sites always cover at least one base.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }
}

/// Lazy scan over every start position on both strands.
///
/// The iterator yields forward-strand sites in ascending position order,
/// then reverse-strand sites in ascending position order; the aggregator
/// owns the final report ordering. `MatchIter` is `Clone`, so a scan can be
/// re-enumerated from the start at any time.
#[derive(Debug, Clone)]
pub struct MatchIter<'a> {
    sequence: &'a Sequence,
    forward: RecognitionPattern,
    reverse: RecognitionPattern,
    position: usize,
    strand: Strand,
}

impl<'a> Iterator for MatchIter<'a> {
    type Item = MatchSite;

    fn next(&mut self) -> Option<MatchSite> {
        let n = self.sequence.len();
        let m = self.forward.len();
        if m > n {
            return None;
        }
        loop {
            if self.position + m > n {
                match self.strand {
                    Strand::Forward => {
                        self.strand = Strand::Reverse;
                        self.position = 0;
                        continue;
                    }
                    Strand::Reverse => return None,
                }
            }
            let position = self.position;
            self.position += 1;

            let pattern = match self.strand {
                Strand::Forward => &self.forward,
                Strand::Reverse => &self.reverse,
            };
            if pattern.matches_at(self.sequence, position) {
                return Some(MatchSite::new(
                    position,
                    self.sequence.subsequence(position, position + m),
                    self.strand,
                ));
            }
        }
    }
}

/// Scan `sequence` for `pattern` on both strands.
///
/// Returns a lazy, restartable iterator over all match sites. Overlapping
/// matches are all reported; nothing is suppressed at this stage.
pub fn scan<'a>(sequence: &'a Sequence, pattern: &RecognitionPattern) -> MatchIter<'a> {
    MatchIter {
        sequence,
        forward: pattern.clone(),
        reverse: pattern.reverse_complement(),
        position: 0,
        strand: Strand::Forward,
    }
}

/// Partitioned scan for long sequences.
///
/// Start positions are split into chunks and scanned on the rayon thread
/// pool; each worker tests both strands for its range against the shared
/// sequence. The result contains exactly the sites of [`scan`], in an order
/// the aggregator is responsible for normalizing.
pub fn scan_parallel(sequence: &Sequence, pattern: &RecognitionPattern) -> Vec<MatchSite> {
    let n = sequence.len();
    let m = pattern.len();
    if m > n {
        return Vec::new();
    }
    let reverse = pattern.reverse_complement();
    let starts = n - m + 1;

    let ranges: Vec<(usize, usize)> = (0..starts)
        .step_by(PARALLEL_CHUNK)
        .map(|lo| (lo, (lo + PARALLEL_CHUNK).min(starts)))
        .collect();

    ranges
        .into_par_iter()
        .flat_map_iter(|(lo, hi)| {
            let mut found = Vec::new();
            for position in lo..hi {
                if pattern.matches_at(sequence, position) {
                    found.push(MatchSite::new(
                        position,
                        sequence.subsequence(position, position + m),
                        Strand::Forward,
                    ));
                }
                if reverse.matches_at(sequence, position) {
                    found.push(MatchSite::new(
                        position,
                        sequence.subsequence(position, position + m),
                        Strand::Reverse,
                    ));
                }
            }
            found.into_iter()
        })
        .collect()
}
