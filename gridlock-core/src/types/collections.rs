//! FxHash-based collection aliases used across the workspace.

pub use rustc_hash::{FxHashMap, FxHashSet};
