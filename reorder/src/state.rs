use crate::{PlaceholderPosition, Point, VerticalDirection};

/// A lightweight, serializable view of the engine's interaction state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
/// Useful for debugging overlays and logging; it never includes element handles.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSnapshot<K> {
    pub pressed: Option<K>,
    pub dragging: Option<K>,
    pub placeholder: Option<PlaceholderPosition>,
    pub direction: VerticalDirection,
    pub last_point: Option<Point>,
    pub tracking: bool,
}
