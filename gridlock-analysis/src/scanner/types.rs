//! Scanner output types.

/// Which lexical rule produced a fragment. Rules are tried in this
/// order, and the order is part of the contract: thread ids number
/// fragments in global discovery order across all rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionRule {
    /// `new Thread(() -> { … }).start();`
    ChainedClosure,
    /// `new Thread(new Runnable() { public void run() { … } }).start();`
    AnonymousRunnable,
    /// Looser variant of the above without a detectable run-method wrapper.
    BareRunnable,
    /// A standalone `public void run() { … }` whose preceding text,
    /// within the lookback window, mentions a thread marker.
    MarkedRunMethod,
}

impl ExtractionRule {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ChainedClosure => "chained_closure",
            Self::AnonymousRunnable => "anonymous_runnable",
            Self::BareRunnable => "bare_runnable",
            Self::MarkedRunMethod => "marked_run_method",
        }
    }
}

/// One extracted thread body.
///
/// The id is freshly generated (`thread1`, `thread2`, …) and binds to
/// nothing in the source; it exists only as a graph key.
#[derive(Debug, Clone)]
pub struct ThreadFragment {
    pub id: String,
    pub body: String,
    pub rule: ExtractionRule,
    /// Byte offset of the body within the scanned source.
    pub offset: usize,
}
