//! Lexical extraction of thread bodies from source text.

pub mod thread_extractor;
pub mod types;

pub use thread_extractor::ThreadExtractor;
pub use types::{ExtractionRule, ThreadFragment};

/// The extraction seam: anything that can turn source text into thread
/// fragments. A grammar-based frontend can replace the lexical rules
/// behind this trait without touching graph or cycle logic.
pub trait FragmentExtractor {
    fn extract(&self, source: &str) -> Vec<ThreadFragment>;
}

impl FragmentExtractor for ThreadExtractor {
    fn extract(&self, source: &str) -> Vec<ThreadFragment> {
        ThreadExtractor::extract(self, source)
    }
}
