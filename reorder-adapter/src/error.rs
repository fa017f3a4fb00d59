use reorder::{ConfigError, DragError};

/// Errors surfaced by [`crate::ReorderCoordinator`].
///
/// `Config` is the only variant a correctly integrated host should ever see, and only when it
/// hands over an invalid item list.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Drag(#[from] DragError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
