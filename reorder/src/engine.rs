use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::options::OnPlaceholderMoveCallback;
use crate::placement::compute_placeholder;
use crate::sequence::{commit_order, placeholder_element_index};
use crate::{
    DirectInput, DragError, DragSnapshot, ElementHandle, EngineOptions, Entry, InputSource,
    PlaceholderPosition, Point, Rect, VerticalDirection,
};

#[derive(Clone, Debug)]
struct Press<K> {
    id: K,
    point: Point,
    rect: Rect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PlaceholderSlot {
    position: PlaceholderPosition,
    /// `None` while ejected.
    element_index: Option<usize>,
}

struct Tracking<K> {
    dragging: K,
    placeholder: PlaceholderSlot,
    on_placeholder_move: OnPlaceholderMoveCallback,
}

/// The drag tracking engine.
///
/// Owns every piece of pointer and geometry state that changes on each movement event, so
/// that the reactive layer above it only hears about placeholder moves and commits.
///
/// The engine is driven entirely by its caller:
/// - `reset_element_registry` + `register_element` once per render
/// - `pointer_down` / `did_drag_start_at` / `begin_tracking` from per-item handlers
/// - `handle_pointer_move` / `handle_pointer_up` from the global listeners installed through
///   the [`InputSource`] while a drag is tracked
pub struct DragEngine<K, H, I: InputSource = DirectInput> {
    options: EngineOptions<K>,
    input: I,
    listeners_attached: bool,

    press: Option<Press<K>>,
    last_point: Option<Point>,
    direction: VerticalDirection,
    tracking: Option<Tracking<K>>,

    entries: Vec<Entry<K>>,
    registry: Vec<Option<H>>,
}

impl<K, H> DragEngine<K, H, DirectInput>
where
    K: Clone + PartialEq + core::fmt::Debug,
    H: ElementHandle,
{
    pub fn new(options: EngineOptions<K>) -> Self {
        Self::with_input(options, DirectInput)
    }
}

impl<K, H, I> DragEngine<K, H, I>
where
    K: Clone + PartialEq + core::fmt::Debug,
    H: ElementHandle,
    I: InputSource,
{
    pub fn with_input(options: EngineOptions<K>, input: I) -> Self {
        rdebug!(allow_eject = options.allow_eject, "DragEngine::new");
        Self {
            options,
            input,
            listeners_attached: false,
            press: None,
            last_point: None,
            direction: VerticalDirection::default(),
            tracking: None,
            entries: Vec::new(),
            registry: Vec::new(),
        }
    }

    pub fn options(&self) -> &EngineOptions<K> {
        &self.options
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn pressed_id(&self) -> Option<&K> {
        self.press.as_ref().map(|p| &p.id)
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    pub fn listeners_attached(&self) -> bool {
        self.listeners_attached
    }

    pub fn dragging_id(&self) -> Option<&K> {
        self.tracking.as_ref().map(|t| &t.dragging)
    }

    pub fn down_point(&self) -> Option<Point> {
        self.press.as_ref().map(|p| p.point)
    }

    /// The captured down rectangle of the current press.
    pub fn down_rect(&self) -> Option<Rect> {
        self.press.as_ref().map(|p| p.rect)
    }

    pub fn placeholder(&self) -> Option<PlaceholderPosition> {
        self.tracking.as_ref().map(|t| t.placeholder.position)
    }

    /// Element index of the placeholder in the displayed sequence it was last computed for.
    pub fn placeholder_element_index(&self) -> Option<usize> {
        self.tracking
            .as_ref()
            .and_then(|t| t.placeholder.element_index)
    }

    pub fn direction(&self) -> VerticalDirection {
        self.direction
    }

    pub fn ordered_entries(&self) -> &[Entry<K>] {
        &self.entries
    }

    /// `None` when the displayed sequence is empty.
    pub fn max_element_index(&self) -> Option<usize> {
        self.entries.len().checked_sub(1)
    }

    pub fn snapshot(&self) -> DragSnapshot<K> {
        DragSnapshot {
            pressed: self.pressed_id().cloned(),
            dragging: self.dragging_id().cloned(),
            placeholder: self.placeholder(),
            direction: self.direction,
            last_point: self.last_point,
            tracking: self.is_tracking(),
        }
    }

    /// Captures the down state of a press.
    ///
    /// A later press overwrites an earlier one; only one pointer is supported. While a drag is
    /// tracked the press is ignored, since the drag still measures from its own down state.
    pub fn pointer_down(&mut self, id: K, point: Point, rect: Rect) -> Result<(), DragError> {
        if !point.is_finite() {
            return Err(DragError::NonFinitePoint);
        }
        if self.tracking.is_some() {
            rwarn!(pressed = ?id, "pointer_down ignored while a drag is tracked");
            return Ok(());
        }
        rtrace!(pressed = ?id, x = point.x, y = point.y, "pointer_down");
        self.press = Some(Press { id, point, rect });
        self.last_point = Some(point);
        Ok(())
    }

    /// Forgets a press that never turned into a drag.
    ///
    /// No-op while a drag is tracked or when `id` is not the pressed identifier.
    pub fn release_press(&mut self, id: &K) {
        if self.tracking.is_some() {
            return;
        }
        if self.press.as_ref().is_some_and(|p| &p.id == id) {
            self.press = None;
            self.last_point = None;
            self.direction = VerticalDirection::default();
        }
    }

    /// Replaces the displayed sequence for the render about to happen.
    ///
    /// Previously registered handles are kept (and overwritten as the render re-registers
    /// them); handles past the new end are dropped.
    pub fn reset_element_registry(&mut self, entries: Vec<Entry<K>>) {
        let len = entries.len();
        self.entries = entries;
        self.registry.resize_with(len, || None);
        rtrace!(len, "reset_element_registry");
    }

    pub fn register_element(&mut self, handle: H, element_index: usize) -> Result<(), DragError> {
        let max = self.max_element_index();
        match max {
            Some(max) if element_index <= max => {
                self.registry[element_index] = Some(handle);
                Ok(())
            }
            _ => Err(DragError::ElementIndexOutOfRange {
                index: element_index,
                max,
            }),
        }
    }

    /// Returns `true` when `point` for `id` means the press has started moving.
    pub fn did_drag_start_at(&self, id: &K, point: Point) -> bool {
        match &self.press {
            Some(press) => &press.id == id && press.point != point,
            None => false,
        }
    }

    /// Promotes the active press to a drag and installs the global pointer listeners.
    ///
    /// The placeholder is announced at the dragged item's current slot, then `point` is
    /// processed like a regular move. `id` must be an item of the displayed sequence passed to
    /// the last `reset_element_registry`.
    pub fn begin_tracking(
        &mut self,
        id: K,
        point: Point,
        on_placeholder_move: impl Fn(PlaceholderPosition) + 'static,
    ) -> Result<(), DragError> {
        if self.tracking.is_some() || self.listeners_attached {
            return Err(DragError::AlreadyTracking);
        }
        let Some(press) = &self.press else {
            return Err(DragError::NoActivePress);
        };
        if press.id != id {
            return Err(DragError::PressMismatch);
        }
        if !point.is_finite() {
            return Err(DragError::NonFinitePoint);
        }

        let Some(item_index) = self
            .entries
            .iter()
            .filter_map(Entry::item)
            .position(|key| key == &id)
        else {
            return Err(DragError::UnknownIdentifier);
        };
        let slot = PlaceholderSlot {
            position: PlaceholderPosition::At(item_index),
            element_index: Some(self.element_index_for(&id, item_index)),
        };
        rdebug!(dragging = ?id, item_index, "begin_tracking");

        self.input.attach();
        self.listeners_attached = true;
        let on_placeholder_move: OnPlaceholderMoveCallback = Rc::new(on_placeholder_move);
        self.tracking = Some(Tracking {
            dragging: id,
            placeholder: slot,
            on_placeholder_move: Rc::clone(&on_placeholder_move),
        });
        on_placeholder_move(slot.position);

        self.process_move(point)?;
        Ok(())
    }

    /// Global pointer-move handler.
    ///
    /// Returns the new placeholder position when it changed.
    pub fn handle_pointer_move(
        &mut self,
        point: Point,
    ) -> Result<Option<PlaceholderPosition>, DragError> {
        if !self.listeners_attached {
            return Err(DragError::ListenersNotInstalled);
        }
        if !point.is_finite() {
            return Err(DragError::NonFinitePoint);
        }
        self.process_move(point)
    }

    /// Global pointer-release handler.
    ///
    /// Detaches the listeners, clears the dragged element's translation, resets the
    /// interaction state and hands the committed order to `on_commit`.
    pub fn handle_pointer_up(&mut self) -> Result<Vec<K>, DragError> {
        if !self.listeners_attached {
            return Err(DragError::ListenersNotInstalled);
        }
        if self.press.is_none() {
            return Err(DragError::NoActivePress);
        }
        let Some(tracking) = self.tracking.take() else {
            return Err(DragError::NotTracking);
        };

        self.detach_listeners();
        if let Some(handle) = self.dragged_handle_mut(&tracking.dragging) {
            handle.clear_translation();
        }
        self.press = None;
        self.last_point = None;
        self.direction = VerticalDirection::default();

        let order = commit_order(
            &self.entries,
            &tracking.dragging,
            tracking.placeholder.position,
        );
        rdebug!(
            dragging = ?tracking.dragging,
            placeholder = ?tracking.placeholder.position,
            len = order.len(),
            "commit"
        );
        let on_commit = Rc::clone(&self.options.on_commit);
        on_commit(&order);
        Ok(order)
    }

    /// Detaches any installed global listeners. Safe to call at any time, any number of times.
    ///
    /// Interaction state is left as is; without listeners no further callbacks fire.
    pub fn destroy(&mut self) {
        if self.listeners_attached {
            rdebug!("destroy: detaching listeners");
        }
        self.detach_listeners();
    }

    fn detach_listeners(&mut self) {
        if self.listeners_attached {
            self.input.detach();
            self.listeners_attached = false;
        }
    }

    fn process_move(&mut self, point: Point) -> Result<Option<PlaceholderPosition>, DragError> {
        let Some(press) = &self.press else {
            return Err(DragError::NoActivePress);
        };
        let Some(tracking) = &self.tracking else {
            return Err(DragError::NotTracking);
        };
        let down = press.point;
        let dragged_rect = press.rect;
        let dragging = tracking.dragging.clone();
        let current = tracking.placeholder;

        let dx = point.x - down.x;
        let dy = point.y - down.y;
        let step = point.y - self.last_point.unwrap_or(down).y;
        if step > 0.0 {
            self.direction = VerticalDirection::Down;
        } else if step < 0.0 {
            self.direction = VerticalDirection::Up;
        }
        self.last_point = Some(point);

        if let Some(handle) = self.dragged_handle_mut(&dragging) {
            handle.set_translation(dx, dy);
        } else {
            rwarn!(dragging = ?dragging, "dragged element is not registered");
        }

        let candidates: Vec<Option<Rect>> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.is_placeholder() && !entry.is_item(&dragging))
            .map(|(i, _)| {
                self.registry
                    .get(i)
                    .and_then(Option::as_ref)
                    .map(ElementHandle::bounding_rect)
            })
            .collect();
        // The dragged element floats, so its down rect stands in for the slot it left.
        let bounds = self
            .entries
            .iter()
            .zip(&self.registry)
            .filter(|(entry, _)| !entry.is_item(&dragging))
            .filter_map(|(_, handle)| handle.as_ref().map(ElementHandle::bounding_rect))
            .fold(dragged_rect, Rect::union);
        let position = compute_placeholder(
            dragged_rect,
            dx,
            dy,
            self.direction,
            &candidates,
            bounds,
            self.options.allow_eject,
        );
        rtrace!(dx, dy, direction = ?self.direction, ?position, "pointer_move");

        if position == current.position {
            return Ok(None);
        }

        let element_index = position
            .item_index()
            .map(|item_index| self.element_index_for(&dragging, item_index));
        let Some(tracking) = self.tracking.as_mut() else {
            return Err(DragError::NotTracking);
        };
        tracking.placeholder = PlaceholderSlot {
            position,
            element_index,
        };
        let callback = Rc::clone(&tracking.on_placeholder_move);
        rdebug!(?position, ?element_index, "placeholder moved");
        callback(position);
        Ok(Some(position))
    }

    /// Element index the placeholder takes for `item_index` once the next render splices it in.
    fn element_index_for(&self, dragging: &K, item_index: usize) -> usize {
        placeholder_element_index(
            self.entries.iter().filter_map(Entry::item),
            &dragging,
            item_index,
        )
    }

    fn dragged_handle_mut(&mut self, dragging: &K) -> Option<&mut H> {
        let index = self.entries.iter().position(|e| e.is_item(dragging))?;
        self.registry.get_mut(index)?.as_mut()
    }
}

impl<K, H, I: InputSource> Drop for DragEngine<K, H, I> {
    fn drop(&mut self) {
        if self.listeners_attached {
            self.input.detach();
            self.listeners_attached = false;
        }
    }
}

impl<K: core::fmt::Debug, H, I: InputSource> core::fmt::Debug for DragEngine<K, H, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DragEngine")
            .field("options", &self.options)
            .field("listeners_attached", &self.listeners_attached)
            .field("press", &self.press)
            .field("last_point", &self.last_point)
            .field("direction", &self.direction)
            .field("dragging", &self.tracking.as_ref().map(|t| &t.dragging))
            .field("entries", &self.entries)
            .field("registered", &self.registry.iter().filter(|h| h.is_some()).count())
            .finish_non_exhaustive()
    }
}
