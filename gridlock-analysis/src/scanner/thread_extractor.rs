//! ThreadExtractor -- staged pattern extraction of thread bodies.
//!
//! Four lexical rules applied in fixed priority order over the whole
//! source. Rules match on surface syntax, share one thread counter,
//! and perform no deduplication beyond what the patterns themselves
//! exclude: a span the anonymous-runnable rule captured can be
//! captured again by the standalone run-method rule.

use aho_corasick::AhoCorasick;
use gridlock_core::errors::AnalysisError;
use regex::Regex;

use super::types::{ExtractionRule, ThreadFragment};

/// The three markers that qualify a standalone run-method as a thread
/// body when found in the lookback window before it.
const THREAD_MARKERS: &[&str] = &["new Thread", "implements Runnable", "extends Thread"];

const CHAINED_CLOSURE: &str =
    r"new\s+Thread\s*\(\s*\(\)\s*->\s*\{([\s\S]*?)\}\s*\)\s*\.start\s*\(\)\s*;";
const ANONYMOUS_RUNNABLE: &str = r"new\s+Thread\s*\(\s*new\s+Runnable\s*\(\s*\)\s*\{\s*public\s+void\s+run\s*\(\)\s*\{([\s\S]*?)\}\s*\}\s*\)\s*\.start\s*\(\)\s*;";
const BARE_RUNNABLE: &str =
    r"new\s+Thread\s*\(\s*new\s+Runnable\s*\(\s*\)\s*\{([\s\S]*?)\}\s*\)\s*\.start\s*\(\)\s*;";
const RUN_METHOD: &str = r"public\s+void\s+run\s*\(\)\s*\{([\s\S]*?)\}";

/// Extracts thread-body fragments from one source unit.
pub struct ThreadExtractor {
    chained_closure: Regex,
    anonymous_runnable: Regex,
    bare_runnable: Regex,
    run_method: Regex,
    markers: AhoCorasick,
    lookback: usize,
}

impl ThreadExtractor {
    /// Compile all extraction patterns. `lookback` bounds, in bytes,
    /// how far before a standalone run-method the marker check looks.
    pub fn new(lookback: usize) -> Result<Self, AnalysisError> {
        Ok(Self {
            chained_closure: compile(CHAINED_CLOSURE, "chained_closure")?,
            anonymous_runnable: compile(ANONYMOUS_RUNNABLE, "anonymous_runnable")?,
            bare_runnable: compile(BARE_RUNNABLE, "bare_runnable")?,
            run_method: compile(RUN_METHOD, "run_method")?,
            markers: AhoCorasick::new(THREAD_MARKERS).map_err(|e| {
                AnalysisError::PatternCompile {
                    rule: "thread_markers",
                    message: e.to_string(),
                }
            })?,
            lookback,
        })
    }

    /// Apply all four rules in priority order and return the fragments
    /// in discovery order. Unmatched input contributes nothing.
    pub fn extract(&self, source: &str) -> Vec<ThreadFragment> {
        let mut fragments = Vec::new();

        self.run_rule(&self.chained_closure, ExtractionRule::ChainedClosure, source, &mut fragments);
        self.run_rule(&self.anonymous_runnable, ExtractionRule::AnonymousRunnable, source, &mut fragments);
        self.run_rule(&self.bare_runnable, ExtractionRule::BareRunnable, source, &mut fragments);
        self.extract_marked_run_methods(source, &mut fragments);

        tracing::debug!(count = fragments.len(), "thread extraction complete");
        fragments
    }

    fn run_rule(
        &self,
        pattern: &Regex,
        rule: ExtractionRule,
        source: &str,
        fragments: &mut Vec<ThreadFragment>,
    ) {
        for caps in pattern.captures_iter(source) {
            if let Some(body) = caps.get(1) {
                push_fragment(fragments, rule, body.as_str(), body.start());
            }
        }
    }

    /// Rule 4: any standalone run-method definition qualifies only if a
    /// thread marker appears in the bounded window before it.
    fn extract_marked_run_methods(&self, source: &str, fragments: &mut Vec<ThreadFragment>) {
        for caps in self.run_method.captures_iter(source) {
            let (full, body) = match (caps.get(0), caps.get(1)) {
                (Some(full), Some(body)) => (full, body),
                _ => continue,
            };

            let mut window_start = full.start().saturating_sub(self.lookback);
            // A byte window can land mid-codepoint; nudge to a boundary.
            while !source.is_char_boundary(window_start) {
                window_start += 1;
            }
            let window = &source[window_start..full.start()];

            if self.markers.is_match(window) {
                push_fragment(fragments, ExtractionRule::MarkedRunMethod, body.as_str(), body.start());
            }
        }
    }
}

fn compile(pattern: &str, rule: &'static str) -> Result<Regex, AnalysisError> {
    Regex::new(pattern).map_err(|e| AnalysisError::PatternCompile {
        rule,
        message: e.to_string(),
    })
}

fn push_fragment(
    fragments: &mut Vec<ThreadFragment>,
    rule: ExtractionRule,
    body: &str,
    offset: usize,
) {
    let id = format!("thread{}", fragments.len() + 1);
    tracing::debug!(thread_id = %id, rule = rule.name(), offset, "extracted thread body");
    fragments.push(ThreadFragment {
        id,
        body: body.to_string(),
        rule,
        offset,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ThreadExtractor {
        ThreadExtractor::new(100).unwrap()
    }

    #[test]
    fn test_empty_input_yields_no_fragments() {
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn test_chained_closure_extraction() {
        let source = r#"
            new Thread(() -> {
                synchronized (lock1) {
                }
            }).start();
        "#;
        let fragments = extractor().extract(source);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].id, "thread1");
        assert_eq!(fragments[0].rule, ExtractionRule::ChainedClosure);
        assert!(fragments[0].body.contains("synchronized (lock1)"));
    }

    #[test]
    fn test_two_closures_number_in_source_order() {
        let source = r#"
            new Thread(() -> { a.lock(); }).start();
            new Thread(() -> { b.lock(); }).start();
        "#;
        let fragments = extractor().extract(source);
        assert_eq!(fragments.len(), 2);
        assert!(fragments[0].body.contains("a.lock()"));
        assert_eq!(fragments[1].id, "thread2");
        assert!(fragments[1].body.contains("b.lock()"));
    }

    #[test]
    fn test_anonymous_runnable_matches_several_rules() {
        // The explicit-run-method rule captures the body; the looser
        // bare-runnable rule and the marked-run-method rule each match
        // the same span again. No cross-rule deduplication happens.
        let source = r#"
            new Thread(new Runnable() {
                public void run() {
                    first.lock();
                }
            }).start();
        "#;
        let fragments = extractor().extract(source);
        let rules: Vec<ExtractionRule> = fragments.iter().map(|f| f.rule).collect();
        assert!(rules.contains(&ExtractionRule::AnonymousRunnable));
        assert!(rules.contains(&ExtractionRule::BareRunnable));
        assert!(rules.contains(&ExtractionRule::MarkedRunMethod));
        assert_eq!(fragments[0].id, "thread1");
        assert_eq!(fragments[0].rule, ExtractionRule::AnonymousRunnable);
    }

    #[test]
    fn test_rule_priority_beats_source_position() {
        // The run-method at the top of the file is discovered after the
        // closure below it, because rules run in priority order.
        let source = r#"
            class Worker implements Runnable {
                public void run() { a.lock(); }
            }
            new Thread(() -> { b.lock(); }).start();
        "#;
        let fragments = extractor().extract(source);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].rule, ExtractionRule::ChainedClosure);
        assert!(fragments[0].body.contains("b.lock()"));
        assert_eq!(fragments[1].rule, ExtractionRule::MarkedRunMethod);
        assert!(fragments[1].body.contains("a.lock()"));
    }

    #[test]
    fn test_run_method_without_marker_is_skipped() {
        let source = r#"
            class NotAThread {
                public void run() { a.lock(); }
            }
        "#;
        assert!(extractor().extract(source).is_empty());
    }

    #[test]
    fn test_marker_outside_lookback_window_is_ignored() {
        let filler = "// filler\n".repeat(20);
        let source = format!(
            "class W implements Runnable {{\n{filler}    public void run() {{ a.lock(); }}\n}}"
        );
        let fragments = ThreadExtractor::new(40).unwrap().extract(&source);
        assert!(fragments.is_empty());

        // A generous window sees the marker again.
        let fragments = ThreadExtractor::new(400).unwrap().extract(&source);
        assert_eq!(fragments.len(), 1);
    }

    #[test]
    fn test_window_start_respects_char_boundaries() {
        let source = "/* 死锁 */ class W implements Runnable { public void run() { a.lock(); } }";
        // Must not panic regardless of where the window lands.
        for lookback in 0..source.len() {
            let _ = ThreadExtractor::new(lookback).unwrap().extract(source);
        }
    }
}
