//! Report Data Model
//!
//! Mirrors the report payload the review frontend consumes: the scanned
//! document, its detected matches, the external sources they point at, and
//! the summary scores. All offsets are UTF-8 byte offsets into
//! `document_text`, half-open `[start, end)`.
//!
//! Construction is where malformed input dies: `MatchSpan::new` rejects
//! degenerate ranges, and `Report::checked_spans` rejects anything the
//! resolver must never observe (out-of-bounds offsets, offsets inside a
//! UTF-8 sequence, duplicate ids).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

// =============================================================================
// Kinds
// =============================================================================

/// Classification of a detected match. Closed set; extend by adding a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Verbatim copy from a source
    Exact,
    /// Reworded but semantically matching passage
    Paraphrase,
    /// Passage with high AI-generation likelihood
    Ai,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Paraphrase => "paraphrase",
            MatchKind::Ai => "ai",
        }
    }
}

/// Origin category of an external source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Web,
    File,
    Database,
    Ai,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Web => "web",
            SourceKind::File => "file",
            SourceKind::Database => "database",
            SourceKind::Ai => "ai",
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Malformed match span input. The resolver itself assumes validated spans;
/// these are raised at construction / report-validation time instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanError {
    #[error("span '{id}' is degenerate: start {start} >= end {end}")]
    Degenerate { id: String, start: usize, end: usize },
    #[error("span '{id}' [{start}, {end}) exceeds document length {len}")]
    OutOfBounds {
        id: String,
        start: usize,
        end: usize,
        len: usize,
    },
    #[error("span '{id}' offset {offset} is not a UTF-8 character boundary")]
    NotCharBoundary { id: String, offset: usize },
    #[error("duplicate span id '{id}'")]
    DuplicateId { id: String },
}

// =============================================================================
// MatchSpan
// =============================================================================

/// A detected match: a half-open byte range `[start, end)` over the document,
/// tagged with the source it matches and its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSpan {
    pub id: String,
    pub source_id: String,
    pub start: usize,
    pub end: usize,
    pub kind: MatchKind,
    /// Advisory 0-100 score; never consulted by the resolver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl MatchSpan {
    /// Build a span, rejecting degenerate ranges (`start >= end`).
    /// Bounds against a concrete document are checked by `Report::checked_spans`.
    pub fn new(
        id: impl Into<String>,
        source_id: impl Into<String>,
        start: usize,
        end: usize,
        kind: MatchKind,
    ) -> Result<Self, SpanError> {
        let id = id.into();
        if start >= end {
            return Err(SpanError::Degenerate { id, start, end });
        }
        Ok(MatchSpan {
            id,
            source_id: source_id.into(),
            start,
            end,
            kind,
            confidence: None,
            explanation: None,
        })
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false for spans that passed `new` or `validate`; only a
    /// hand-built struct literal can be empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check this span against a concrete document text.
    pub fn validate(&self, text: &str) -> Result<(), SpanError> {
        if self.start >= self.end {
            return Err(SpanError::Degenerate {
                id: self.id.clone(),
                start: self.start,
                end: self.end,
            });
        }
        if self.end > text.len() {
            return Err(SpanError::OutOfBounds {
                id: self.id.clone(),
                start: self.start,
                end: self.end,
                len: text.len(),
            });
        }
        for offset in [self.start, self.end] {
            if !text.is_char_boundary(offset) {
                return Err(SpanError::NotCharBoundary {
                    id: self.id.clone(),
                    offset,
                });
            }
        }
        Ok(())
    }
}

// =============================================================================
// Source & Scores
// =============================================================================

/// An external source document referenced by the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: String,
    pub title: String,
    pub kind: SourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// Summary scores for the whole report (percentages, 0-100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReportScores {
    pub exact_match: f64,
    pub paraphrase: f64,
    pub ai_likelihood: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<f64>,
}

// =============================================================================
// Report
// =============================================================================

/// The full payload for one report view: document, matches, sources, scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub document_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_title: Option<String>,
    pub document_text: String,
    pub matches: Vec<MatchSpan>,
    pub sources: Vec<Source>,
    pub scores: ReportScores,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Validate every match span against the document text and return them
    /// in input order. This is the only path into the resolver for report
    /// data, so the resolver never sees a malformed span.
    pub fn checked_spans(&self) -> Result<&[MatchSpan], SpanError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.matches.len());
        for span in &self.matches {
            span.validate(&self.document_text)?;
            if !seen.insert(span.id.as_str()) {
                return Err(SpanError::DuplicateId {
                    id: span.id.clone(),
                });
            }
        }
        Ok(&self.matches)
    }

    pub fn source(&self, source_id: &str) -> Option<&Source> {
        self.sources.iter().find(|s| s.id == source_id)
    }

    pub fn match_span(&self, match_id: &str) -> Option<&MatchSpan> {
        self.matches.iter().find(|m| m.id == match_id)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn span(id: &str, start: usize, end: usize) -> MatchSpan {
        MatchSpan::new(id, "src-1", start, end, MatchKind::Exact).unwrap()
    }

    #[test]
    fn degenerate_span_rejected_at_construction() {
        let err = MatchSpan::new("m1", "src-1", 5, 5, MatchKind::Exact).unwrap_err();
        assert!(matches!(err, SpanError::Degenerate { start: 5, end: 5, .. }));

        let err = MatchSpan::new("m2", "src-1", 9, 3, MatchKind::Ai).unwrap_err();
        assert!(matches!(err, SpanError::Degenerate { .. }));
    }

    #[test]
    fn validate_catches_out_of_bounds() {
        let s = span("m1", 2, 30);
        let err = s.validate("short text").unwrap_err();
        assert!(matches!(err, SpanError::OutOfBounds { len: 10, .. }));
    }

    #[test]
    fn validate_catches_mid_char_offsets() {
        // "é" is two bytes; offset 1 lands inside it
        let s = span("m1", 1, 3);
        let err = s.validate("été").unwrap_err();
        assert!(matches!(err, SpanError::NotCharBoundary { offset: 1, .. }));
    }

    #[test]
    fn checked_spans_rejects_duplicate_ids() {
        let mut report = crate::report::sample::sample_report();
        let dup = report.matches[0].clone();
        report.matches.push(dup);
        let err = report.checked_spans().unwrap_err();
        assert!(matches!(err, SpanError::DuplicateId { .. }));
    }

    #[test]
    fn kinds_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&MatchKind::Paraphrase).unwrap(), "\"paraphrase\"");
        assert_eq!(serde_json::to_string(&SourceKind::Web).unwrap(), "\"web\"");
        assert_eq!(MatchKind::Ai.as_str(), "ai");
    }

    #[test]
    fn match_span_roundtrips_camel_case() {
        let s = span("m1", 0, 4).with_confidence(95.0);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["sourceId"], "src-1");
        assert_eq!(json["confidence"], 95.0);
        assert!(json.get("explanation").is_none());
        let back: MatchSpan = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }
}
