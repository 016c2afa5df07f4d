//! Report assembly: ordering and per-position deduplication.

use std::cmp::Ordering;

use serde::Serialize;

use super::matcher::{MatchSite, Strand};
use crate::base::Sequence;

/// A match site together with its cleavage-efficiency score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSite {
    #[serde(flatten)]
    site: MatchSite,
    efficiency: f64,
}

impl ScoredSite {
    /// Attach an efficiency score to a match site.
    pub fn new(site: MatchSite, efficiency: f64) -> Self {
        Self { site, efficiency }
    }

    /// Offset of the leftmost matched base, in forward coordinates.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.site.position()
    }

    /// The forward-strand subsequence covered by this site.
    #[inline]
    pub fn matched(&self) -> &Sequence {
        self.site.matched()
    }

    /// The strand the pattern matched on.
    #[inline(always)]
    pub fn strand(&self) -> Strand {
        self.site.strand()
    }

    /// Cleavage-efficiency score in `[0, 1]`.
    #[inline(always)]
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }
}

/// The ordered result of an analysis.
///
/// Sites are sorted strictly ascending by position with no duplicates.
/// When a forward and a reverse match coincide at one position, the site
/// with the higher efficiency wins; remaining ties prefer the forward
/// strand. An empty report is a valid outcome and simply means no cut
/// sites were found.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Report {
    sites: Vec<ScoredSite>,
}

impl Report {
    /// Assemble a report from scored sites.
    pub fn aggregate(sites: impl IntoIterator<Item = ScoredSite>) -> Self {
        let mut sites: Vec<ScoredSite> = sites.into_iter().collect();
        sites.sort_by(|a, b| {
            a.position()
                .cmp(&b.position())
                .then_with(|| {
                    b.efficiency()
                        .partial_cmp(&a.efficiency())
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.strand().cmp(&b.strand()))
        });
        // Keeps the first site of each position run: the tie-break winner.
        sites.dedup_by_key(|s| s.position());
        Self { sites }
    }

    /// The ordered sites.
    #[inline]
    pub fn sites(&self) -> &[ScoredSite] {
        &self.sites
    }

    /// Number of reported sites.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Return `true` if no cut sites were found.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Iterate over the ordered sites.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredSite> {
        self.sites.iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a ScoredSite;
    type IntoIter = std::slice::Iter<'a, ScoredSite>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.iter()
    }
}
