use alloc::string::String;

use reorder::{Entry, Rect};

/// Attribute name hosts use to carry [`ItemBinding::marker`] on the rendered element.
pub const MARKER_ATTRIBUTE: &str = "data-reorder-id";

/// How the rendering layer should position one displayed entry.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Positioning {
    /// In normal flow.
    Static,
    /// The dragged item: taken out of flow and pinned at its down rectangle. The engine
    /// translates it through [`reorder::ElementHandle::set_translation`].
    Floating { rect: Rect },
    /// An empty slot the size of the dragged item.
    Placeholder { width: f64, height: f64 },
}

/// Everything the rendering layer needs to draw one displayed entry.
///
/// Event handlers are addressed through the coordinator by `element_index` (registration)
/// or by item key (press/move/release).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemBinding<K> {
    pub element_index: usize,
    pub entry: Entry<K>,
    /// Value for [`MARKER_ATTRIBUTE`].
    pub marker: String,
    pub positioning: Positioning,
    pub pressed: bool,
}

impl<K> ItemBinding<K> {
    pub fn key(&self) -> Option<&K> {
        self.entry.item()
    }

    pub fn is_placeholder(&self) -> bool {
        self.entry.is_placeholder()
    }
}
