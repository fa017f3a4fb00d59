use alloc::rc::Rc;

/// A callback fired once per completed drag with the committed order.
pub type OnCommitCallback<K> = Rc<dyn Fn(&[K])>;

/// A callback fired whenever the placeholder moves during a drag.
pub type OnPlaceholderMoveCallback = Rc<dyn Fn(crate::PlaceholderPosition)>;

/// Configuration for [`crate::DragEngine`].
///
/// Cheap to clone: the callback is stored in an `Rc`.
pub struct EngineOptions<K> {
    /// Receives the committed identifier order when a drag is released.
    pub on_commit: OnCommitCallback<K>,

    /// Whether dragging an item out of the list removes it on release.
    ///
    /// When disabled, the placeholder never enters [`crate::PlaceholderPosition::Ejected`].
    pub allow_eject: bool,
}

impl<K> Clone for EngineOptions<K> {
    fn clone(&self) -> Self {
        Self {
            on_commit: Rc::clone(&self.on_commit),
            allow_eject: self.allow_eject,
        }
    }
}

impl<K> EngineOptions<K> {
    pub fn new(on_commit: impl Fn(&[K]) + 'static) -> Self {
        Self {
            on_commit: Rc::new(on_commit),
            allow_eject: true,
        }
    }

    pub fn with_on_commit(mut self, on_commit: impl Fn(&[K]) + 'static) -> Self {
        self.on_commit = Rc::new(on_commit);
        self
    }

    pub fn with_allow_eject(mut self, allow_eject: bool) -> Self {
        self.allow_eject = allow_eject;
        self
    }
}

impl<K> core::fmt::Debug for EngineOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EngineOptions")
            .field("allow_eject", &self.allow_eject)
            .finish_non_exhaustive()
    }
}
