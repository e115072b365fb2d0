//! External process invocation.
//!
//! Every tool endpoint ends in the same step: run a binary with an argument vector, capture its
//! standard output and report whether it exited cleanly. The [`Runner`] trait is that single
//! boundary. [`process::ProcessRunner`] is the real implementation; tests substitute their own
//! to observe invocations without launching anything.

use std::path::Path;
use std::sync::Arc;

pub mod process;

#[allow(clippy::module_name_repetitions)]
pub use process::ProcessRunner;

/// `DynRunner` is a type alias for a [`Runner`] shared between concurrent request handlers.
#[allow(clippy::module_name_repetitions)]
pub type DynRunner = Arc<dyn Runner + Send + Sync>;

/// The captured outcome of one process invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Execution {
    /// True iff the process started and exited with status zero.
    pub success: bool,
    /// Raw standard output, possibly partial when the process failed.
    pub stdout: String,
}

impl Execution {
    /// An execution that never produced output, e.g. because the binary couldn't be started.
    #[must_use]
    pub fn failed() -> Self {
        Self::default()
    }
}

/// An async trait describing how a tool binary is executed.
///
/// Implementations never fail: launch errors, non-zero exits and signal deaths are all folded
/// into [`Execution::success`] being `false`.
#[async_trait::async_trait]
pub trait Runner {
    /// Run `program` with `args` (no shell interpretation) and wait for it to exit.
    async fn run(&self, program: &Path, args: &[String]) -> Execution;
}
