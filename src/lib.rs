//! VeritasCore: Plagiarism Report Highlighting Core
//!
//! A Rust/WASM implementation of the compute layer behind the Veritas
//! plagiarism-review frontend.
//!
//! # Architecture
//!
//! ## Report Components
//! - `types.rs` - Report data model: `Report`, `MatchSpan`, `Source`, match/source kinds
//! - `resolver.rs` - Match span resolver: overlapping spans -> disjoint render segments
//! - `decoration.rs` - Pure visual-class mapping (kind + interaction state -> CSS classes)
//! - `analytics.rs` - Match breakdown, per-source rollups, highlight coverage
//! - `sample.rs` - Bundled sample report for tests and frontend bootstrapping
//! - `wasm.rs` - ReportViewer: single JS-facing entry point for the report page
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { ReportViewer } from 'veritas-core';
//!
//! await init();
//!
//! const viewer = ReportViewer.withSampleReport();
//! viewer.selectMatch('match-001');
//!
//! // Disjoint, decorated segments covering the whole document
//! for (const seg of viewer.decoratedSegments()) {
//!   console.log(seg.kind, seg.start, seg.end, seg.classes);
//! }
//!
//! console.log(viewer.breakdown());   // { exact: {...}, paraphrase: {...}, ai: {...} }
//! console.log(viewer.sourceRollup());
//! ```

pub mod report;

pub use report::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("veritas-core v{}", env!("CARGO_PKG_VERSION"))
}
