//! Cut-site analysis pipeline.
//!
//! This module assembles the full pipeline: normalize the inputs, scan both
//! strands for the recognition pattern, score every site from its local GC
//! context, and aggregate the sites into an ordered report:
//!
//! - [`matcher`]: both-strand pattern scanning
//! - [`scorer`]: deterministic cleavage-efficiency scoring
//! - [`report`]: ordering and per-position deduplication
//! - [`enzymes`]: the built-in enzyme catalog
//!
//! Every stage is a pure function of its inputs; nothing is cached or
//! mutated between calls, so the pipeline can be reused concurrently.

pub mod enzymes;
pub mod matcher;
pub mod report;
pub mod scorer;

pub use matcher::{scan, scan_parallel, MatchIter, MatchSite, Strand};
pub use report::{Report, ScoredSite};
pub use scorer::{efficiency, ScoreParams, DEFAULT_CONTEXT_WINDOW};

use serde::{Deserialize, Serialize};

use crate::base::{RecognitionPattern, Sequence};
use crate::errors::AnalysisError;

/// Caller policy for an analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Context window for efficiency scoring (bases each side of a site).
    pub window: usize,

    /// Reject sequences longer than this many bases. `None` imposes no
    /// bound; the scan is O(sequence length x pattern length).
    pub max_sequence_length: Option<usize>,

    /// Treat an empty report as an error.
    pub require_matches: bool,

    /// Partition the scan across the rayon thread pool. The report is
    /// identical to the serial scan; worthwhile for long sequences only.
    pub parallel: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            window: DEFAULT_CONTEXT_WINDOW,
            max_sequence_length: None,
            require_matches: false,
            parallel: false,
        }
    }
}

/// Resolve a cutting agent into a recognition pattern.
///
/// The agent is first looked up in the enzyme catalog by name
/// (case-insensitive); anything else is parsed as a raw IUPAC pattern.
pub fn resolve_agent(agent: &str) -> Result<RecognitionPattern, AnalysisError> {
    if let Some(enzyme) = enzymes::lookup(agent) {
        return enzyme.pattern();
    }
    agent.parse()
}

/// Analyze a sequence against a cutting agent with default options.
///
/// This is the single entry point the presentation layer calls: two raw
/// strings in, an ordered [`Report`] (or a validation error) out.
///
/// ```rust
/// use cleavescan::analyze;
///
/// let report = analyze("AAAGAATTCAAA", "EcoRI").unwrap();
/// assert_eq!(report.len(), 1);
/// assert_eq!(report.sites()[0].position(), 3);
/// ```
pub fn analyze(sequence: &str, cutting_agent: &str) -> Result<Report, AnalysisError> {
    analyze_with(sequence, cutting_agent, &AnalysisOptions::default())
}

/// Analyze a sequence against a cutting agent under explicit options.
pub fn analyze_with(
    sequence: &str,
    cutting_agent: &str,
    options: &AnalysisOptions,
) -> Result<Report, AnalysisError> {
    let sequence: Sequence = sequence.parse()?;
    if let Some(limit) = options.max_sequence_length {
        if sequence.len() > limit {
            return Err(AnalysisError::SequenceTooLong {
                length: sequence.len(),
                limit,
            });
        }
    }
    let pattern = resolve_agent(cutting_agent)?;
    let params = ScoreParams {
        window: options.window,
    };

    let sites: Vec<MatchSite> = if options.parallel {
        scan_parallel(&sequence, &pattern)
    } else {
        scan(&sequence, &pattern).collect()
    };

    let report = Report::aggregate(sites.into_iter().map(|site| {
        let score = efficiency(&sequence, &site, &params);
        ScoredSite::new(site, score)
    }));

    if options.require_matches && report.is_empty() {
        return Err(AnalysisError::EmptyReport);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_agent_by_enzyme_name() {
        let pattern = resolve_agent("EcoRI").unwrap();
        assert_eq!(pattern.to_string(), "GAATTC");
    }

    #[test]
    fn test_resolve_agent_by_raw_pattern() {
        let pattern = resolve_agent("gANtc").unwrap();
        assert_eq!(pattern.to_string(), "GANTC");
    }

    #[test]
    fn test_resolve_agent_invalid() {
        assert_eq!(
            resolve_agent("GAAT1C").unwrap_err(),
            AnalysisError::InvalidPattern {
                character: '1',
                index: 4
            }
        );
        assert_eq!(resolve_agent("").unwrap_err(), AnalysisError::EmptyInput);
    }

    #[test]
    fn test_analyze_options_default() {
        let options = AnalysisOptions::default();
        assert_eq!(options.window, DEFAULT_CONTEXT_WINDOW);
        assert_eq!(options.max_sequence_length, None);
        assert!(!options.require_matches);
        assert!(!options.parallel);
    }

    #[test]
    fn test_analyze_with_max_length() {
        let options = AnalysisOptions {
            max_sequence_length: Some(4),
            ..Default::default()
        };
        let err = analyze_with("GAATTC", "EcoRI", &options).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::SequenceTooLong {
                length: 6,
                limit: 4
            }
        );
    }

    #[test]
    fn test_analyze_with_require_matches() {
        let options = AnalysisOptions {
            require_matches: true,
            ..Default::default()
        };
        let err = analyze_with("AAAA", "GGGG", &options).unwrap_err();
        assert_eq!(err, AnalysisError::EmptyReport);

        // Without the policy an empty report is a valid outcome.
        let report = analyze("AAAA", "GGGG").unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_analyze_parallel_matches_serial() {
        let sequence = "GAATTCAT".repeat(64);
        let serial = analyze(&sequence, "EcoRI").unwrap();
        let parallel = analyze_with(
            &sequence,
            "EcoRI",
            &AnalysisOptions {
                parallel: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(serial, parallel);
    }
}
