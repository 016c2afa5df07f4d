//! Commonly used imports for convenience.
//!
//! This prelude module provides a convenient way to import the most commonly
//! used types and functions in the cleavescan library.
//!
//! # Example
//!
//! ```
//! use cleavescan::prelude::*;
//!
//! let report = analyze("AAAGAATTCAAA", "EcoRI").unwrap();
//! assert_eq!(report.len(), 1);
//! ```

pub use crate::analysis::{
    analyze, analyze_with, resolve_agent, AnalysisOptions, MatchSite, Report, ScoredSite, Strand,
};
pub use crate::base::{Nucleotide, RecognitionPattern, Sequence, Symbol};
pub use crate::errors::AnalysisError;
