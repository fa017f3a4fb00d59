use alloc::rc::Rc;

use crate::{IdGenerator, SequentialIds};

/// A callback fired with the new order after every completed drag.
pub type OnOrderChangeCallback<K> = Rc<dyn Fn(&[K])>;

/// Configuration for [`crate::ReorderCoordinator`].
pub struct CoordinatorOptions<K> {
    pub on_order_change: OnOrderChangeCallback<K>,

    /// Whether dragging an item out of the list removes it.
    ///
    /// This is the single authoritative flag; the coordinator forwards it to its engine.
    pub allow_eject: bool,

    /// Pointer travel (in viewport px) that must be exceeded before a press becomes a drag.
    pub drag_threshold: f64,

    /// Names transient placeholder entries.
    pub id_generator: Rc<dyn IdGenerator>,
}

impl<K> Clone for CoordinatorOptions<K> {
    fn clone(&self) -> Self {
        Self {
            on_order_change: Rc::clone(&self.on_order_change),
            allow_eject: self.allow_eject,
            drag_threshold: self.drag_threshold,
            id_generator: Rc::clone(&self.id_generator),
        }
    }
}

impl<K> CoordinatorOptions<K> {
    pub fn new(on_order_change: impl Fn(&[K]) + 'static) -> Self {
        Self {
            on_order_change: Rc::new(on_order_change),
            allow_eject: true,
            drag_threshold: 0.0,
            id_generator: Rc::new(SequentialIds::new()),
        }
    }

    pub fn with_allow_eject(mut self, allow_eject: bool) -> Self {
        self.allow_eject = allow_eject;
        self
    }

    /// Negative values are treated as zero.
    pub fn with_drag_threshold(mut self, drag_threshold: f64) -> Self {
        self.drag_threshold = drag_threshold.max(0.0);
        self
    }

    pub fn with_id_generator(mut self, id_generator: impl IdGenerator + 'static) -> Self {
        self.id_generator = Rc::new(id_generator);
        self
    }
}

impl<K> core::fmt::Debug for CoordinatorOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CoordinatorOptions")
            .field("allow_eject", &self.allow_eject)
            .field("drag_threshold", &self.drag_threshold)
            .finish_non_exhaustive()
    }
}
