use alloc::string::String;

use thiserror::Error;

/// Rejected [`TallyOptions`](crate::TallyOptions) input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// A reduction needs at least one worker.
    #[error("worker count must be at least 1")]
    ZeroWorkers,
    /// The strategy name is not one of `sequential`, `aligned` or `naive`.
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),
}
