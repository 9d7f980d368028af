//! ReportViewer: JS-Facing Report State
//!
//! Single WASM entry point for the report page. The frontend hydrates it
//! with a report payload, pokes interaction state at it (selected match,
//! active source) on click/hover, and pulls decorated segments plus
//! analytics back across the boundary as plain JS values.
//!
//! Resolution and decoration are recomputed per call; for realistic report
//! sizes both complete in microseconds, so no caching is kept here.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::report::analytics::{coverage, source_rollup, MatchBreakdown};
use crate::report::decoration::decorate_segments;
use crate::report::resolver::resolve_report;
use crate::report::sample::sample_report;
use crate::report::types::Report;

/// Report state holder exposed to the frontend
#[wasm_bindgen]
pub struct ReportViewer {
    report: Option<Report>,
    selected_match_id: Option<String>,
    active_source_id: Option<String>,
}

impl Default for ReportViewer {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ReportViewer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            report: None,
            selected_match_id: None,
            active_source_id: None,
        }
    }

    /// Construct a viewer pre-loaded with the bundled sample report
    #[wasm_bindgen(js_name = withSampleReport)]
    pub fn with_sample_report() -> Self {
        let mut viewer = Self::new();
        viewer.report = Some(sample_report());
        viewer
    }

    /// Hydrate with a report payload (JS binding)
    #[wasm_bindgen(js_name = loadReport)]
    pub fn js_load_report(&mut self, report: JsValue) -> Result<(), JsValue> {
        let report: Report = serde_wasm_bindgen::from_value(report)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse report: {}", e)))?;
        // Reject malformed spans at the boundary so every later call is infallible
        report
            .checked_spans()
            .map_err(|e| JsValue::from_str(&format!("Invalid report: {}", e)))?;
        self.report = Some(report);
        self.selected_match_id = None;
        self.active_source_id = None;
        Ok(())
    }

    #[wasm_bindgen(js_name = hasReport)]
    pub fn has_report(&self) -> bool {
        self.report.is_some()
    }

    #[wasm_bindgen(js_name = matchCount)]
    pub fn match_count(&self) -> usize {
        self.report.as_ref().map_or(0, |r| r.matches.len())
    }

    /// Select a match (pass undefined/null to clear)
    #[wasm_bindgen(js_name = selectMatch)]
    pub fn select_match(&mut self, match_id: Option<String>) {
        self.selected_match_id = match_id;
    }

    /// Activate a source (pass undefined/null to clear)
    #[wasm_bindgen(js_name = activateSource)]
    pub fn activate_source(&mut self, source_id: Option<String>) {
        self.active_source_id = source_id;
    }

    /// Resolved segments with CSS classes applied per current interaction state
    #[wasm_bindgen(js_name = decoratedSegments)]
    pub fn js_decorated_segments(&self) -> JsValue {
        let Some(report) = &self.report else {
            return JsValue::NULL;
        };
        match resolve_report(report) {
            Ok(segments) => {
                let decorated = decorate_segments(
                    report,
                    &segments,
                    self.selected_match_id.as_deref(),
                    self.active_source_id.as_deref(),
                );
                to_js(&decorated)
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("[ReportViewer] Resolution failed: {}", e).into(),
                );
                JsValue::NULL
            }
        }
    }

    /// Per-kind match breakdown for the sidebar
    #[wasm_bindgen(js_name = breakdown)]
    pub fn js_breakdown(&self) -> JsValue {
        let Some(report) = &self.report else {
            return JsValue::NULL;
        };
        to_js(&MatchBreakdown::compute(&report.matches))
    }

    /// Per-source rollup for the source list
    #[wasm_bindgen(js_name = sourceRollup)]
    pub fn js_source_rollup(&self) -> JsValue {
        let Some(report) = &self.report else {
            return JsValue::NULL;
        };
        to_js(&source_rollup(report))
    }

    /// Fraction of the document covered by highlights, 0.0-1.0
    #[wasm_bindgen(js_name = highlightCoverage)]
    pub fn js_highlight_coverage(&self) -> f64 {
        let Some(report) = &self.report else {
            return 0.0;
        };
        match resolve_report(report) {
            Ok(segments) => coverage(&segments, report.document_text.len()),
            Err(_) => 0.0,
        }
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    // json_compatible keeps flattened structs as plain `{...}` objects;
    // the default serializer would turn their map representation into an
    // ES2015 `Map`, which the frontend cannot destructure.
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    match value.serialize(&serializer) {
        Ok(v) => v,
        Err(e) => {
            web_sys::console::error_1(
                &format!("[ReportViewer] Serialization failed: {:?}", e).into(),
            );
            JsValue::NULL
        }
    }
}

// =============================================================================
// Tests (native; JsValue-returning getters are exercised from the frontend)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_starts_empty() {
        let viewer = ReportViewer::new();
        assert!(!viewer.has_report());
        assert_eq!(viewer.match_count(), 0);
        assert_eq!(viewer.js_highlight_coverage(), 0.0);
    }

    #[test]
    fn sample_viewer_reports_matches() {
        let viewer = ReportViewer::with_sample_report();
        assert!(viewer.has_report());
        assert_eq!(viewer.match_count(), 4);
        let c = viewer.js_highlight_coverage();
        assert!(c > 0.0 && c < 1.0);
    }

    #[test]
    fn interaction_state_clears_with_none() {
        let mut viewer = ReportViewer::with_sample_report();
        viewer.select_match(Some("match-001".into()));
        viewer.activate_source(Some("src-web-A".into()));
        viewer.select_match(None);
        viewer.activate_source(None);
        assert!(viewer.selected_match_id.is_none());
        assert!(viewer.active_source_id.is_none());
    }
}
