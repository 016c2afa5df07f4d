//! Cleavescan: restriction-enzyme cut-site analysis for DNA sequences.
//!
//! This library takes a raw DNA sequence and a cutting agent (a restriction
//! enzyme name or an IUPAC recognition pattern) and produces an ordered
//! report of cut sites with deterministic cleavage-efficiency scores:
//!
//! ```rust
//! use cleavescan::analyze;
//!
//! let report = analyze("AAAGAATTCAAA", "EcoRI").unwrap();
//! for site in &report {
//!     println!("{} {} {:.2}", site.position(), site.matched(), site.efficiency());
//! }
//! ```
//!
//! Every operation is a pure, synchronous function of its inputs; the
//! pipeline holds no state and is safe to reuse concurrently.

pub mod analysis;
pub mod base;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenient external access.
//
// These types form the public, stable surface that most consumers of the
// library will use. Re-exporting them here makes them available as
// `cleavescan::Sequence`, `cleavescan::Report`, etc.
pub use analysis::{analyze, analyze_with, AnalysisOptions, Report, ScoredSite, Strand};
pub use base::{Nucleotide, RecognitionPattern, Sequence, Symbol};
pub use errors::AnalysisError;
