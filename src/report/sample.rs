//! Bundled Sample Report
//!
//! The frontend is a prototype with no backend yet; this fixture lets the
//! report page render end-to-end and gives the test suite a realistic
//! payload. Document text is ASCII, so byte offsets match what the original
//! UI used.

use chrono::DateTime;

use crate::report::types::{
    MatchKind, MatchSpan, Report, ReportScores, Source, SourceKind,
};

const SAMPLE_TEXT: &str = "Climate change represents a significant global challenge. \
Its impacts are widespread, affecting ecosystems, economies, and societies worldwide. \
Rising sea levels pose a direct threat to coastal communities, displacing millions. \
Furthermore, extreme weather events, such as hurricanes and heatwaves, are becoming \
more frequent and intense. According to recent studies, the agricultural sector is \
particularly vulnerable, with changing precipitation patterns impacting crop yields. \
Addressing this requires a concerted global effort towards mitigation and adaptation \
strategies. This involves reducing greenhouse gas emissions and building resilience \
in vulnerable regions.";

/// Build the sample plagiarism report
pub fn sample_report() -> Report {
    let matches = vec![
        MatchSpan {
            id: "match-001".into(),
            source_id: "src-web-A".into(),
            start: 90,
            end: 145,
            kind: MatchKind::Exact,
            confidence: Some(95.0),
            explanation: Some("Direct copy from Source A.".into()),
        },
        MatchSpan {
            id: "match-002".into(),
            source_id: "src-file-B".into(),
            start: 160,
            end: 235,
            kind: MatchKind::Paraphrase,
            confidence: Some(75.0),
            explanation: Some("Similar phrasing and concepts found in Source B.".into()),
        },
        MatchSpan {
            id: "match-003".into(),
            source_id: "src-web-C".into(),
            start: 380,
            end: 460,
            kind: MatchKind::Paraphrase,
            confidence: Some(80.0),
            explanation: None,
        },
        MatchSpan {
            id: "match-004".into(),
            source_id: "src-ai-gen".into(),
            start: 237,
            end: 330,
            kind: MatchKind::Ai,
            confidence: Some(65.0),
            explanation: Some(
                "This section exhibits patterns commonly found in AI-generated text, \
                 such as generic phrasing and lack of specific citation despite \
                 mentioning studies."
                    .into(),
            ),
        },
    ];

    let sources = vec![
        Source {
            id: "src-web-A".into(),
            title: "Wikipedia: Sea Level Rise".into(),
            kind: SourceKind::Web,
            url: Some("https://en.wikipedia.org/wiki/Sea_level_rise".into()),
            snippet: Some(
                "...global mean sea level has risen... Rising sea levels pose a direct \
                 threat to coastal populations..."
                    .into(),
            ),
        },
        Source {
            id: "src-file-B".into(),
            title: "IPCC Report Chapter 3.pdf".into(),
            kind: SourceKind::File,
            url: None,
            snippet: Some(
                "Observations show increases in extreme weather phenomena, including \
                 heatwaves and heavy precipitation..."
                    .into(),
            ),
        },
        Source {
            id: "src-web-C".into(),
            title: "UN Framework Convention on Climate Change".into(),
            kind: SourceKind::Web,
            url: Some("https://unfccc.int".into()),
            snippet: Some(
                "...emphasizes the need for international cooperation and concerted \
                 efforts to mitigate climate change..."
                    .into(),
            ),
        },
        Source {
            id: "src-ai-gen".into(),
            title: "AI Generation Pattern".into(),
            kind: SourceKind::Ai,
            url: None,
            snippet: Some(
                "Detected patterns consistent with Large Language Model outputs.".into(),
            ),
        },
    ];

    Report {
        document_id: "doc-12345".into(),
        document_title: Some("Research Paper on Climate Change Impacts".into()),
        document_text: SAMPLE_TEXT.into(),
        matches,
        sources,
        scores: ReportScores {
            exact_match: 10.0,
            paraphrase: 25.0,
            ai_likelihood: 65.0,
            overall: Some(40.0),
        },
        // Fixed timestamp keeps the fixture byte-stable across calls
        generated_at: DateTime::from_timestamp(1_714_557_600, 0).unwrap_or_default(),
    }
}
