//! Cleavage-efficiency scoring from local sequence context.
//!
//! The score is the weighted GC fraction over a context window centered on
//! the matched region: G/C bases weigh 1.0, A/T weigh 0.0, and N weighs
//! 0.5. The computation involves no randomness, so identical inputs always
//! produce bit-identical scores. GC weight is strand-symmetric, which keeps
//! coinciding forward and reverse sites at the same position bit-identical
//! as well; the aggregator's tie-break relies on that.

use serde::{Deserialize, Serialize};

use super::matcher::MatchSite;
use crate::base::Sequence;

/// Default context window: bases considered on each side of the matched
/// region, clamped at the sequence boundaries.
pub const DEFAULT_CONTEXT_WINDOW: usize = 4;

/// Scoring parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreParams {
    /// Bases of flanking context on each side of the matched region.
    pub window: usize,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            window: DEFAULT_CONTEXT_WINDOW,
        }
    }
}

/// Compute the cleavage-efficiency score for a match site.
///
/// The window spans the matched region plus `params.window` bases on each
/// side, clamped at the sequence boundaries; it is never empty because the
/// matched region itself is non-empty. The result is clamped to `[0, 1]`.
pub fn efficiency(sequence: &Sequence, site: &MatchSite, params: &ScoreParams) -> f64 {
    let start = site.position().saturating_sub(params.window);
    let end = (site.position() + site.len() + params.window).min(sequence.len());
    let window = &sequence.as_slice()[start..end];

    let weight: f64 = window.iter().map(|base| base.gc_weight()).sum();
    (weight / window.len() as f64).clamp(0.0, 1.0)
}
