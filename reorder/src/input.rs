use crate::Rect;

/// A rendered element registered with the engine for one render pass.
///
/// Handles are rendering artifacts: the engine never assumes a handle survives into the next
/// render and drops its reference when the registry is rebuilt.
pub trait ElementHandle {
    /// Current bounding box in viewport coordinates.
    fn bounding_rect(&self) -> Rect;

    /// Applies a visual translation relative to the element's resting position.
    fn set_translation(&mut self, dx: f64, dy: f64);

    /// Removes any translation set by [`ElementHandle::set_translation`].
    fn clear_translation(&mut self);
}

/// The ambient, globally scoped pointer input source.
///
/// While attached, the host routes every pointer-move event to
/// [`crate::DragEngine::handle_pointer_move`] and the pointer-release event to
/// [`crate::DragEngine::handle_pointer_up`]. The engine attaches at most once per drag and
/// always detaches on release or teardown.
pub trait InputSource {
    fn attach(&mut self);
    fn detach(&mut self);
}

/// An input source for hosts that already deliver every pointer event to the engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectInput;

impl InputSource for DirectInput {
    fn attach(&mut self) {}
    fn detach(&mut self) {}
}
