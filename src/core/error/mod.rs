use thiserror::Error;

/// Errors raised by shared queue operations.
///
/// Enqueue rejection is the only failure in the system; every other
/// operation always returns a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The caller tried to enqueue a value that represents no item at all
    #[error("invalid argument: item cannot be absent")]
    InvalidArgument,
}
