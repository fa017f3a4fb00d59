use alloc::string::{String, ToString};
use core::cell::Cell;

/// Produces fresh suffixes for transient placeholder entries.
///
/// The suffix is combined with the reserved placeholder prefix, so it can never collide with
/// a validated item identifier; it only has to be unique among placeholders.
pub trait IdGenerator {
    fn next_suffix(&self) -> String;
}

impl<F: Fn() -> String> IdGenerator for F {
    fn next_suffix(&self) -> String {
        self()
    }
}

/// A monotonic counter.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_suffix(&self) -> String {
        let n = self.next.get();
        self.next.set(n.wrapping_add(1));
        n.to_string()
    }
}
