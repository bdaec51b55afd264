//! Error types for mixin composition.

use graft_kernel::KernelError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MixError {
    /// A factory failed; composition stopped at this position of the input
    /// list.
    #[error("mixin #{index} ({label}) failed: {source}")]
    Factory {
        index: usize,
        label: String,
        source: KernelError,
    },
}
