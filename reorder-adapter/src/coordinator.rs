use alloc::rc::Rc;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::cell::RefCell;

use reorder::sequence::{splice_placeholder, validate_items};
use reorder::{
    DirectInput, DragEngine, ElementHandle, EngineOptions, Entry, InputSource, PlaceholderId,
    PlaceholderPosition, Point, Rect,
};

use crate::{CoordinatorOptions, Error, ItemBinding, Positioning};

/// The state a rendering layer re-renders on. Everything else lives in the engine.
#[derive(Debug)]
struct ReactiveState<K> {
    items: Vec<K>,
    placeholder: Option<PlaceholderPosition>,
    dragging: Option<K>,
    pressed: Option<K>,
    revision: u64,
}

impl<K> ReactiveState<K> {
    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// A framework-neutral coordinator that owns the item order and drives a
/// [`reorder::DragEngine`] from a rendering layer.
///
/// This type does not hold any UI objects besides the element handles registered for the
/// current render. Adapters drive it by calling:
/// - `render()` at the start of every render, then `register_element` for each binding
/// - `pointer_down` / `item_pointer_move` / `item_pointer_up` from per-entry handlers
/// - `pointer_move` / `pointer_up` from the global listeners while a drag is tracked
///
/// Whenever `revision()` changes, the host should render again.
pub struct ReorderCoordinator<K, H, I: InputSource = DirectInput> {
    engine: DragEngine<K, H, I>,
    state: Rc<RefCell<ReactiveState<K>>>,
    options: CoordinatorOptions<K>,
}

impl<K, H> ReorderCoordinator<K, H, DirectInput>
where
    K: Clone + PartialEq + core::fmt::Debug + AsRef<str> + 'static,
    H: ElementHandle,
{
    pub fn new(items: Vec<K>, options: CoordinatorOptions<K>) -> Result<Self, Error> {
        Self::with_input(items, options, DirectInput)
    }
}

impl<K, H, I> ReorderCoordinator<K, H, I>
where
    K: Clone + PartialEq + core::fmt::Debug + AsRef<str> + 'static,
    H: ElementHandle,
    I: InputSource,
{
    /// Creates a coordinator for `items`, rejecting lists that collide with placeholder
    /// markers.
    pub fn with_input(
        items: Vec<K>,
        options: CoordinatorOptions<K>,
        input: I,
    ) -> Result<Self, Error> {
        validate_items(&items)?;
        let state = Rc::new(RefCell::new(ReactiveState {
            items,
            placeholder: None,
            dragging: None,
            pressed: None,
            revision: 0,
        }));

        let on_commit = {
            let state = Rc::clone(&state);
            let on_order_change = Rc::clone(&options.on_order_change);
            move |order: &[K]| {
                {
                    let mut s = state.borrow_mut();
                    s.placeholder = None;
                    s.dragging = None;
                    s.pressed = None;
                    s.items = order.to_vec();
                    s.touch();
                }
                rdebug!(len = order.len(), "order changed");
                on_order_change(order);
            }
        };
        let engine_options = EngineOptions::new(on_commit).with_allow_eject(options.allow_eject);

        Ok(Self {
            engine: DragEngine::with_input(engine_options, input),
            state,
            options,
        })
    }

    pub fn options(&self) -> &CoordinatorOptions<K> {
        &self.options
    }

    pub fn engine(&self) -> &DragEngine<K, H, I> {
        &self.engine
    }

    pub fn items(&self) -> Vec<K> {
        self.state.borrow().items.clone()
    }

    pub fn placeholder(&self) -> Option<PlaceholderPosition> {
        self.state.borrow().placeholder
    }

    pub fn dragging(&self) -> Option<K> {
        self.state.borrow().dragging.clone()
    }

    pub fn pressed(&self) -> Option<K> {
        self.state.borrow().pressed.clone()
    }

    /// Bumped on every change to the reactive state.
    pub fn revision(&self) -> u64 {
        self.state.borrow().revision
    }

    pub fn is_tracking(&self) -> bool {
        self.engine.is_tracking()
    }

    /// Replaces the item order after validating it.
    pub fn set_items(&mut self, items: Vec<K>) -> Result<(), Error> {
        validate_items(&items)?;
        let mut s = self.state.borrow_mut();
        s.items = items;
        s.touch();
        Ok(())
    }

    /// Computes the displayed entries for this render and resets the engine's registry.
    ///
    /// The placeholder is spliced in only while a drag has a placeholder position and a down
    /// rectangle is known.
    pub fn render(&mut self) -> Vec<ItemBinding<K>> {
        let down_rect = self.engine.down_rect();
        let dragging = self.engine.dragging_id().cloned();
        let (displayed, pressed) = {
            let s = self.state.borrow();
            let placeholder = match (s.placeholder, down_rect) {
                (Some(position), Some(_)) => Some((
                    position,
                    PlaceholderId::new(self.options.id_generator.next_suffix()),
                )),
                _ => None,
            };
            (
                splice_placeholder(&s.items, dragging.as_ref(), placeholder),
                s.pressed.clone(),
            )
        };

        let bindings: Vec<ItemBinding<K>> = displayed
            .iter()
            .enumerate()
            .map(|(element_index, entry)| {
                binding_for(
                    element_index,
                    entry,
                    dragging.as_ref(),
                    pressed.as_ref(),
                    down_rect,
                )
            })
            .collect();
        rtrace!(len = bindings.len(), dragging = ?dragging, "render");
        self.engine.reset_element_registry(displayed);
        bindings
    }

    pub fn register_element(&mut self, element_index: usize, handle: H) -> Result<(), Error> {
        self.engine.register_element(handle, element_index)?;
        Ok(())
    }

    /// Per-entry press handler. Ignored while a drag is tracked.
    pub fn pointer_down(&mut self, id: K, point: Point, rect: Rect) -> Result<(), Error> {
        let tracking = self.engine.is_tracking();
        self.engine.pointer_down(id.clone(), point, rect)?;
        if tracking {
            return Ok(());
        }
        let mut s = self.state.borrow_mut();
        s.pressed = Some(id);
        s.touch();
        Ok(())
    }

    /// Per-entry move handler. Promotes a press to a drag once the pointer has travelled
    /// further than the drag threshold.
    ///
    /// Returns `true` when a drag was started.
    pub fn item_pointer_move(&mut self, id: &K, point: Point) -> Result<bool, Error> {
        {
            let s = self.state.borrow();
            if s.pressed.as_ref() != Some(id) || s.dragging.is_some() {
                return Ok(false);
            }
        }
        if self.engine.is_tracking() || !self.engine.did_drag_start_at(id, point) {
            return Ok(false);
        }
        if !self.exceeds_threshold(point) {
            return Ok(false);
        }

        let state = Rc::clone(&self.state);
        self.engine
            .begin_tracking(id.clone(), point, move |position| {
                let mut s = state.borrow_mut();
                s.placeholder = Some(position);
                s.touch();
            })?;
        rdebug!(dragging = ?id, "drag started");

        let mut s = self.state.borrow_mut();
        s.dragging = Some(id.clone());
        s.touch();
        Ok(true)
    }

    /// Per-entry release handler.
    ///
    /// Clears pressed/dragging state. When a drag is tracked, the global release handler
    /// ([`ReorderCoordinator::pointer_up`]) completes it independently.
    pub fn item_pointer_up(&mut self, id: &K) {
        self.engine.release_press(id);
        let mut s = self.state.borrow_mut();
        if s.pressed.is_some() || s.dragging.is_some() {
            s.pressed = None;
            s.dragging = None;
            s.touch();
        }
    }

    /// Global move handler. Ignored unless the engine's listeners are installed.
    pub fn pointer_move(&mut self, point: Point) -> Result<Option<PlaceholderPosition>, Error> {
        if !self.engine.listeners_attached() {
            return Ok(None);
        }
        Ok(self.engine.handle_pointer_move(point)?)
    }

    /// Global release handler. Returns the committed order when a drag completed.
    pub fn pointer_up(&mut self) -> Result<Option<Vec<K>>, Error> {
        if !self.engine.listeners_attached() {
            return Ok(None);
        }
        Ok(Some(self.engine.handle_pointer_up()?))
    }

    /// Ends the rendering session: detaches any global listeners still installed.
    pub fn destroy(&mut self) {
        self.engine.destroy();
    }

    fn exceeds_threshold(&self, point: Point) -> bool {
        let Some(down) = self.engine.down_point() else {
            return false;
        };
        let dx = point.x - down.x;
        let dy = point.y - down.y;
        let threshold = self.options.drag_threshold;
        dx * dx + dy * dy > threshold * threshold
    }
}

fn binding_for<K: Clone + PartialEq + AsRef<str>>(
    element_index: usize,
    entry: &Entry<K>,
    dragging: Option<&K>,
    pressed: Option<&K>,
    down_rect: Option<Rect>,
) -> ItemBinding<K> {
    let (marker, positioning, is_pressed) = match entry {
        Entry::Item(key) => {
            let positioning = match down_rect {
                Some(rect) if dragging == Some(key) => Positioning::Floating { rect },
                _ => Positioning::Static,
            };
            (key.as_ref().to_string(), positioning, pressed == Some(key))
        }
        Entry::Placeholder(id) => {
            let rect = down_rect.unwrap_or_default();
            let positioning = Positioning::Placeholder {
                width: rect.width,
                height: rect.height,
            };
            (id.marker(), positioning, false)
        }
    };
    ItemBinding {
        element_index,
        entry: entry.clone(),
        marker,
        positioning,
        pressed: is_pressed,
    }
}

impl<K: core::fmt::Debug, H, I: InputSource> core::fmt::Debug for ReorderCoordinator<K, H, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReorderCoordinator")
            .field("engine", &self.engine)
            .field("state", &self.state)
            .field("options", &self.options)
            .finish()
    }
}
