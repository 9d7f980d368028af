//! Report Analytics
//!
//! Aggregates the sidebar panels compute over a report: per-kind match
//! breakdown, per-source rollups, and highlight coverage. All pure functions
//! over report data; the frontend renders the numbers as-is.

use serde::{Deserialize, Serialize};

use crate::report::resolver::Segment;
use crate::report::types::{MatchKind, MatchSpan, Report, SourceKind};

// =============================================================================
// Match breakdown
// =============================================================================

/// Count and share of one match classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct KindStat {
    pub count: usize,
    /// Rounded share of all matches, 0-100
    pub percent: u32,
}

/// Per-kind breakdown of a report's matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchBreakdown {
    pub exact: KindStat,
    pub paraphrase: KindStat,
    pub ai: KindStat,
    pub total_matches: usize,
}

impl MatchBreakdown {
    pub fn compute(matches: &[MatchSpan]) -> Self {
        let total = matches.len();
        let count_of = |kind: MatchKind| matches.iter().filter(|m| m.kind == kind).count();
        let stat = |count: usize| KindStat {
            count,
            percent: percent_of(count, total),
        };
        MatchBreakdown {
            exact: stat(count_of(MatchKind::Exact)),
            paraphrase: stat(count_of(MatchKind::Paraphrase)),
            ai: stat(count_of(MatchKind::Ai)),
            total_matches: total,
        }
    }
}

fn percent_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

// =============================================================================
// Per-source rollup
// =============================================================================

/// Aggregate of all matches pointing at one source, in the report's source
/// list order. `matched_bytes` sums raw span lengths (what was detected);
/// overlap-free coverage comes from `coverage` below instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRollup {
    pub source_id: String,
    pub title: String,
    pub kind: SourceKind,
    pub match_count: usize,
    pub matched_bytes: usize,
}

/// Roll up match counts and matched text volume per source
pub fn source_rollup(report: &Report) -> Vec<SourceRollup> {
    report
        .sources
        .iter()
        .map(|source| {
            let spans = report.matches.iter().filter(|m| m.source_id == source.id);
            let (match_count, matched_bytes) = spans.fold((0, 0), |(n, bytes), span| {
                (n + 1, bytes + span.len())
            });
            SourceRollup {
                source_id: source.id.clone(),
                title: source.title.clone(),
                kind: source.kind,
                match_count,
                matched_bytes,
            }
        })
        .collect()
}

// =============================================================================
// Coverage
// =============================================================================

/// Fraction of document bytes inside highlighted segments, 0.0-1.0.
/// Computed from resolver output, so overlapping matches are counted once.
pub fn coverage(segments: &[Segment], text_len: usize) -> f64 {
    if text_len == 0 {
        return 0.0;
    }
    let highlighted: usize = segments
        .iter()
        .filter(|s| s.match_id().is_some())
        .map(Segment::len)
        .sum();
    highlighted as f64 / text_len as f64
}

// =============================================================================
// Tests
// =============================================================================
