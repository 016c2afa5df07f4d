use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Nucleotide;
use crate::errors::AnalysisError;

/// A validated, immutable DNA sequence.
///
/// `Sequence` is produced by normalizing raw user input: ASCII letters are
/// uppercased, ASCII whitespace is stripped, and any character outside the
/// `{A, C, G, T, N}` alphabet is rejected with its position. Once built, a
/// sequence never changes; the data lives in a reference-counted
/// `Arc<[Nucleotide]>`, so cloning is cheap and the structure is safe to
/// share across threads for read-only scanning.
///
/// Example:
///
/// ```rust
/// use cleavescan::Sequence;
/// use std::str::FromStr;
///
/// let seq = Sequence::from_str("ac gt\n").unwrap();
/// assert_eq!(seq.to_string(), "ACGT");
/// assert_eq!(seq.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence(Arc<[Nucleotide]>);

impl Sequence {
    /// Create a `Sequence` from already-validated nucleotides.
    pub fn from_nucleotides(nucleotides: Vec<Nucleotide>) -> Self {
        Self(nucleotides.into())
    }

    /// Return the length of the sequence in bases.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the sequence contains no bases.
    ///
    /// Sequences built through `from_str` are never empty; this exists for
    /// slices produced programmatically.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the `Nucleotide` at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.0.get(index).copied()
    }

    /// Borrow the underlying `Nucleotide` slice.
    #[inline]
    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.0
    }

    /// Iterate over the bases.
    pub fn iter(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        self.0.iter().copied()
    }

    /// Copy the bases in `[start, end)` into a new `Sequence`.
    ///
    /// Panics if the range is out of bounds, matching slice indexing.
    pub fn subsequence(&self, start: usize, end: usize) -> Self {
        Self(self.0[start..end].into())
    }

    /// Return the reverse complement of this sequence.
    pub fn reverse_complement(&self) -> Self {
        Self(self.0.iter().rev().map(|n| n.complement()).collect())
    }
}

impl FromStr for Sequence {
    type Err = AnalysisError;

    /// Normalize and validate a raw textual sequence.
    ///
    /// ASCII whitespace is skipped, letters are uppercased, and the first
    /// character outside `{A, C, G, T, N}` aborts parsing with its index in
    /// the raw input. Input that is empty (or whitespace only) produces
    /// `EmptyInput`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bases = Vec::with_capacity(s.len());
        for (index, character) in s.chars().enumerate() {
            if character.is_ascii_whitespace() {
                continue;
            }
            let parsed = if character.is_ascii() {
                Nucleotide::from_ascii(character as u8)
            } else {
                None
            };
            match parsed {
                Some(base) => bases.push(base),
                None => return Err(AnalysisError::InvalidCharacter { character, index }),
            }
        }
        if bases.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        Ok(Self(bases.into()))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &nuc in self.0.iter() {
            write!(f, "{}", nuc.to_char())?;
        }
        Ok(())
    }
}

impl Serialize for Sequence {
    /// Sequences serialize as their textual form (e.g. `"GAATTC"`).
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Sequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
