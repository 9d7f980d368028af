//! Highlight Decoration
//!
//! Pure mapping from a highlighted segment plus interaction state (selected
//! match, active source) to the visual treatment the frontend applies. Kept
//! separate from the resolver so resolution stays testable without any
//! rendering concerns: same inputs, same classes, nothing else.

use serde::{Deserialize, Serialize};

use crate::report::resolver::Segment;
use crate::report::types::{MatchKind, Report};

// =============================================================================
// Types
// =============================================================================

/// Interaction emphasis for one highlighted segment. Selection beats
/// source-activation when both apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Emphasis {
    None,
    SourceActive,
    Selected,
}

/// Visual treatment of one highlighted segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decoration {
    pub kind: MatchKind,
    pub emphasis: Emphasis,
}

/// A segment paired with its computed CSS classes, ready for the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedSegment {
    #[serde(flatten)]
    pub segment: Segment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
}

// =============================================================================
// Class mapping
// =============================================================================

const BASE_CLASS: &str = "px-0.5 mx-[-0.5px] rounded";
const SELECTED_CLASS: &str = "ring-2 ring-offset-1 ring-primary dark:ring-offset-black";
const SOURCE_ACTIVE_CLASS: &str =
    "underline decoration-dashed decoration-primary decoration-1 underline-offset-2";

impl MatchKind {
    /// Fixed color class per classification
    pub fn color_class(&self) -> &'static str {
        match self {
            MatchKind::Exact => "bg-red-200 dark:bg-red-700/50",
            MatchKind::Paraphrase => "bg-yellow-200 dark:bg-yellow-700/50",
            MatchKind::Ai => "bg-blue-200 dark:bg-blue-700/50",
        }
    }
}

impl Decoration {
    pub fn new(kind: MatchKind, emphasis: Emphasis) -> Self {
        Decoration { kind, emphasis }
    }

    /// Render the decoration as the frontend's class string
    pub fn classes(&self) -> String {
        let interaction = match self.emphasis {
            Emphasis::Selected => SELECTED_CLASS,
            Emphasis::SourceActive => SOURCE_ACTIVE_CLASS,
            Emphasis::None => "",
        };
        if interaction.is_empty() {
            format!("{} {}", BASE_CLASS, self.kind.color_class())
        } else {
            format!("{} {} {}", BASE_CLASS, self.kind.color_class(), interaction)
        }
    }
}

/// Compute the decoration for one match given the current interaction state
pub fn decorate(
    kind: MatchKind,
    match_id: &str,
    source_id: &str,
    selected_match_id: Option<&str>,
    active_source_id: Option<&str>,
) -> Decoration {
    let emphasis = if selected_match_id == Some(match_id) {
        Emphasis::Selected
    } else if active_source_id == Some(source_id) {
        Emphasis::SourceActive
    } else {
        Emphasis::None
    };
    Decoration::new(kind, emphasis)
}

/// Pair every resolved segment with its classes. Text segments carry none;
/// match segments look up their span in the report for kind and source.
pub fn decorate_segments(
    report: &Report,
    segments: &[Segment],
    selected_match_id: Option<&str>,
    active_source_id: Option<&str>,
) -> Vec<DecoratedSegment> {
    segments
        .iter()
        .map(|segment| {
            let classes = segment.match_id().and_then(|id| {
                report.match_span(id).map(|span| {
                    decorate(
                        span.kind,
                        id,
                        &span.source_id,
                        selected_match_id,
                        active_source_id,
                    )
                    .classes()
                })
            });
            DecoratedSegment {
                segment: segment.clone(),
                classes,
            }
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::resolver::resolve_report;
    use crate::report::sample::sample_report;

    #[test]
    fn palette_is_fixed_per_kind() {
        assert!(MatchKind::Exact.color_class().contains("red"));
        assert!(MatchKind::Paraphrase.color_class().contains("yellow"));
        assert!(MatchKind::Ai.color_class().contains("blue"));
    }

    #[test]
    fn selection_beats_source_activation() {
        let d = decorate(
            MatchKind::Exact,
            "m1",
            "src-1",
            Some("m1"),
            Some("src-1"),
        );
        assert_eq!(d.emphasis, Emphasis::Selected);
        assert!(d.classes().contains("ring-2"));
        assert!(!d.classes().contains("underline"));
    }

    #[test]
    fn active_source_underlines_unselected_matches() {
        let d = decorate(MatchKind::Paraphrase, "m1", "src-1", Some("m2"), Some("src-1"));
        assert_eq!(d.emphasis, Emphasis::SourceActive);
        assert!(d.classes().contains("underline"));
    }

    #[test]
    fn no_interaction_yields_base_plus_color_only() {
        let d = decorate(MatchKind::Ai, "m1", "src-1", None, None);
        assert_eq!(d.classes(), format!("{} {}", BASE_CLASS, MatchKind::Ai.color_class()));
    }

    #[test]
    fn decoration_is_deterministic() {
        let a = decorate(MatchKind::Exact, "m1", "s1", Some("m1"), None);
        let b = decorate(MatchKind::Exact, "m1", "s1", Some("m1"), None);
        assert_eq!(a.classes(), b.classes());
    }

    #[test]
    fn text_segments_carry_no_classes() {
        let report = sample_report();
        let segments = resolve_report(&report).unwrap();
        let decorated = decorate_segments(&report, &segments, None, None);
        assert_eq!(decorated.len(), segments.len());
        for d in &decorated {
            match d.segment {
                Segment::Text { .. } => assert!(d.classes.is_none()),
                Segment::Match { .. } => assert!(d.classes.is_some()),
            }
        }
    }

    #[test]
    fn decorated_segment_flattens_on_the_wire() {
        let report = sample_report();
        let segments = resolve_report(&report).unwrap();
        let decorated = decorate_segments(&report, &segments, None, None);
        let json = serde_json::to_value(&decorated).unwrap();
        let first = &json[0];
        assert!(first.get("kind").is_some());
        assert!(first.get("start").is_some());
        assert!(first.get("segment").is_none(), "segment must flatten");
    }
}
