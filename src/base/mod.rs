//! Base types for sequence representation.
//!
//! This module provides the foundational types for representing nucleotides,
//! IUPAC pattern symbols, sequences, and recognition patterns in the
//! cleavescan library.

mod nucleotide;
mod pattern;
mod sequence;
mod symbol;

pub use nucleotide::Nucleotide;
pub use pattern::RecognitionPattern;
pub use sequence::Sequence;
pub use symbol::Symbol;
