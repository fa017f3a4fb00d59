use alloc::string::String;

/// A violated engine contract.
///
/// These indicate an integration bug in the caller; none of them is expected under correct
/// usage and none is retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    #[error("drag tracking is already active")]
    AlreadyTracking,
    #[error("drag tracking is not active")]
    NotTracking,
    #[error("global pointer listeners are not installed")]
    ListenersNotInstalled,
    #[error("no pointer press is active")]
    NoActivePress,
    #[error("identifier does not match the pressed identifier")]
    PressMismatch,
    #[error("identifier is not in the displayed sequence")]
    UnknownIdentifier,
    #[error("element index {index} exceeds max element index {max:?}")]
    ElementIndexOutOfRange { index: usize, max: Option<usize> },
    #[error("pointer coordinate is not a finite number")]
    NonFinitePoint,
}

/// A rejected item list.
///
/// Unlike [`DragError`], this is a validation failure on caller-supplied data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("item identifier {0:?} uses the reserved placeholder prefix")]
    ReservedPrefix(String),
    #[error("item identifier {0:?} appears more than once")]
    DuplicateId(String),
}
