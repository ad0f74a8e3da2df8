//! The full analysis pipeline.
//!
//! scan → parse → graph → detect → validate. Construction compiles the
//! extraction patterns and is the only fallible step; `analyze` itself
//! never fails: unrecognized input contributes nothing, and in the
//! limit an empty graph yields the no-deadlock result.

use gridlock_core::errors::AnalysisError;
use gridlock_core::{AnalysisConfig, DetectionResult};

use crate::detectors;
use crate::graph::ResourceGraph;
use crate::parsers::LockSequenceParser;
use crate::report;
use crate::scanner::{FragmentExtractor, ThreadExtractor};

/// One configured analyzer. Each `analyze` call builds and consumes a
/// fresh graph, so a single instance is freely reusable across inputs;
/// it holds no per-run state.
pub struct DeadlockAnalyzer {
    extractor: Box<dyn FragmentExtractor>,
    parser: LockSequenceParser,
}

impl DeadlockAnalyzer {
    /// Build an analyzer from configuration.
    pub fn new(config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        let extractor = ThreadExtractor::new(config.effective_lookback_window())?;
        Self::with_extractor(Box::new(extractor), config)
    }

    /// Build an analyzer with the default configuration.
    pub fn with_defaults() -> Result<Self, AnalysisError> {
        Self::new(&AnalysisConfig::default())
    }

    /// Build an analyzer around a custom extraction frontend.
    pub fn with_extractor(
        extractor: Box<dyn FragmentExtractor>,
        config: &AnalysisConfig,
    ) -> Result<Self, AnalysisError> {
        Ok(Self {
            extractor,
            parser: LockSequenceParser::new(config.effective_wait_emission())?,
        })
    }

    /// Analyze one source unit or selected region.
    pub fn analyze(&self, source: &str) -> DetectionResult {
        let fragments = self.extractor.extract(source);
        if fragments.is_empty() {
            return DetectionResult::no_deadlock();
        }

        let mut graph = ResourceGraph::new();
        for fragment in &fragments {
            graph.apply(&self.parser.parse(fragment));
        }
        tracing::debug!("resource allocation graph:\n{}", graph.describe());

        detectors::detect_deadlocks(&graph)
    }

    /// Render the human-readable report for a result.
    pub fn report(result: &DetectionResult) -> String {
        report::format_report(&result.cycles)
    }
}
