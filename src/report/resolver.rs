//! Match Span Resolver
//!
//! Turns a document plus a set of possibly-overlapping match spans into an
//! ordered, gap-free, non-overlapping sequence of render segments. Every byte
//! of the document is emitted exactly once, either as plain text or inside
//! exactly one highlighted segment.
//!
//! # Overlap policy
//! Spans are swept in `(start asc, end desc, id asc)` order with a cursor
//! marking how far output has been emitted:
//! - a span ending at or before the cursor is fully contained in already
//!   emitted output and is discarded;
//! - a span starting before the cursor is clipped to it, so only its
//!   non-overlapping tail renders as its own highlight (first span in sort
//!   order wins the contested region);
//! - longer spans sort first at equal starts, so a sub-match never splits the
//!   match that contains it.
//!
//! The sweep is pure: input spans are never mutated, and the same input
//! always produces the same segment sequence.

use serde::{Deserialize, Serialize};

use crate::report::types::{MatchSpan, Report, SpanError};

// =============================================================================
// Segment
// =============================================================================

/// One contiguous slice of the document, as emitted by the resolver.
///
/// Serializes as `{ "kind": "text", "start": .., "end": .. }` or
/// `{ "kind": "match", "start": .., "end": .., "matchId": .. }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    /// Plain text with no associated match
    Text { start: usize, end: usize },
    /// Highlighted run owned by exactly one match
    Match {
        start: usize,
        end: usize,
        #[serde(rename = "matchId")]
        match_id: String,
    },
}

impl Segment {
    pub fn start(&self) -> usize {
        match self {
            Segment::Text { start, .. } | Segment::Match { start, .. } => *start,
        }
    }

    pub fn end(&self) -> usize {
        match self {
            Segment::Text { end, .. } | Segment::Match { end, .. } => *end,
        }
    }

    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The match id, for highlighted segments
    pub fn match_id(&self) -> Option<&str> {
        match self {
            Segment::Text { .. } => None,
            Segment::Match { match_id, .. } => Some(match_id),
        }
    }

    /// Extract this segment's text from the source document
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start()..self.end()]
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Resolve match spans over a document of `text_len` bytes into a disjoint,
/// ordered segment sequence covering `[0, text_len)` exactly once.
///
/// Callers are responsible for span validity (`start < end <= text_len`);
/// `resolve_report` does that validation for report payloads.
pub fn resolve(text_len: usize, spans: &[MatchSpan]) -> Vec<Segment> {
    if text_len == 0 {
        return Vec::new();
    }
    if spans.is_empty() {
        return vec![Segment::Text {
            start: 0,
            end: text_len,
        }];
    }

    // Sort by start asc, end desc (longest first at equal starts), then id so
    // identical ranges resolve the same way regardless of input order. Input
    // index is the last resort, for duplicate ids the caller failed to filter.
    let mut order: Vec<usize> = (0..spans.len()).collect();
    order.sort_by(|&a, &b| {
        spans[a]
            .start
            .cmp(&spans[b].start)
            .then(spans[b].end.cmp(&spans[a].end))
            .then_with(|| spans[a].id.cmp(&spans[b].id))
            .then(a.cmp(&b))
    });

    let mut segments: Vec<Segment> = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0usize;

    for idx in order {
        let span = &spans[idx];

        if span.end <= cursor {
            // Fully contained in already-emitted output
            continue;
        }
        // Clip a partial overlap; only the tail past the cursor renders
        let effective_start = span.start.max(cursor);

        if effective_start > cursor {
            segments.push(Segment::Text {
                start: cursor,
                end: effective_start,
            });
        }
        segments.push(Segment::Match {
            start: effective_start,
            end: span.end,
            match_id: span.id.clone(),
        });
        cursor = span.end;
    }

    if cursor < text_len {
        segments.push(Segment::Text {
            start: cursor,
            end: text_len,
        });
    }

    segments
}

/// Validate a report's spans and resolve them against its document text.
pub fn resolve_report(report: &Report) -> Result<Vec<Segment>, SpanError> {
    let spans = report.checked_spans()?;
    Ok(resolve(report.document_text.len(), spans))
}

// =============================================================================
// Tests
// =============================================================================
