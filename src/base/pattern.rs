use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Sequence, Symbol};
use crate::errors::AnalysisError;

/// The recognition pattern of a cutting agent.
///
/// A non-empty run of IUPAC symbols, e.g. `GAATTC` (EcoRI) or `GTYRAC`
/// (HincII). Patterns are immutable once parsed and match sequences
/// position-wise under ambiguity expansion (see [`Symbol::matches`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecognitionPattern(Vec<Symbol>);

impl RecognitionPattern {
    /// Create a pattern from already-validated symbols.
    ///
    /// Returns `EmptyInput` when `symbols` is empty; every other invariant
    /// is carried by the `Symbol` type itself.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self, AnalysisError> {
        if symbols.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        Ok(Self(symbols))
    }

    /// Return the pattern length in symbols.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Patterns are non-empty by construction; this exists for symmetry
    /// with the other container types.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying `Symbol` slice.
    #[inline]
    pub fn as_slice(&self) -> &[Symbol] {
        &self.0
    }

    /// Return true if the pattern matches `sequence` starting at `position`.
    ///
    /// Positions where the pattern would run past the end of the sequence
    /// never match.
    pub fn matches_at(&self, sequence: &Sequence, position: usize) -> bool {
        let window = match sequence.as_slice().get(position..position + self.len()) {
            Some(window) => window,
            None => return false,
        };
        self.0
            .iter()
            .zip(window)
            .all(|(&symbol, &base)| symbol.matches(base))
    }

    /// Return the reverse complement of this pattern.
    ///
    /// A site on the reverse strand is exactly a forward-strand match of
    /// the reverse-complemented pattern, which is how the matcher scans the
    /// reverse strand without copying the sequence.
    pub fn reverse_complement(&self) -> Self {
        Self(self.0.iter().rev().map(|s| s.complement()).collect())
    }
}

impl FromStr for RecognitionPattern {
    type Err = AnalysisError;

    /// Parse a textual recognition pattern.
    ///
    /// ASCII whitespace is skipped and letters are uppercased, mirroring
    /// sequence normalization. The first character outside the IUPAC
    /// alphabet aborts parsing with `InvalidPattern` carrying its index in
    /// the raw input; empty input produces `EmptyInput`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut symbols = Vec::with_capacity(s.len());
        for (index, character) in s.chars().enumerate() {
            if character.is_ascii_whitespace() {
                continue;
            }
            let parsed = if character.is_ascii() {
                Symbol::from_ascii(character as u8)
            } else {
                None
            };
            match parsed {
                Some(symbol) => symbols.push(symbol),
                None => return Err(AnalysisError::InvalidPattern { character, index }),
            }
        }
        Self::from_symbols(symbols)
    }
}

impl fmt::Display for RecognitionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.0 {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}

impl Serialize for RecognitionPattern {
    /// Patterns serialize as their textual form (e.g. `"GTYRAC"`).
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecognitionPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
