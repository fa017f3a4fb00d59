use crate::*;

use alloc::format;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use reorder::{
    ConfigError, DragError, ElementHandle, InputSource, PLACEHOLDER_PREFIX, PlaceholderPosition,
    Point, Rect, is_placeholder_marker,
};

const ROW: f64 = 10.0;
const WIDTH: f64 = 100.0;

#[derive(Clone, Debug)]
struct Element(Rc<RefCell<(Rect, Option<(f64, f64)>)>>);

impl ElementHandle for Element {
    fn bounding_rect(&self) -> Rect {
        self.0.borrow().0
    }

    fn set_translation(&mut self, dx: f64, dy: f64) {
        self.0.borrow_mut().1 = Some((dx, dy));
    }

    fn clear_translation(&mut self) {
        self.0.borrow_mut().1 = None;
    }
}

#[derive(Clone, Debug, Default)]
struct WindowListeners {
    installed: Rc<Cell<bool>>,
    installs: Rc<Cell<usize>>,
}

impl InputSource for WindowListeners {
    fn attach(&mut self) {
        self.installed.set(true);
        self.installs.set(self.installs.get() + 1);
    }

    fn detach(&mut self) {
        self.installed.set(false);
    }
}

type Coordinator = ReorderCoordinator<&'static str, Element, WindowListeners>;
type Options = CoordinatorOptions<&'static str>;

/// Simulates a rendering layer: stacks entries top to bottom, re-renders on every revision.
struct Host {
    coordinator: Coordinator,
    listeners: WindowListeners,
    changes: Rc<RefCell<Vec<Vec<&'static str>>>>,
    bindings: Vec<ItemBinding<&'static str>>,
    rects: Vec<Rect>,
    seen_revision: Option<u64>,
}

impl Host {
    fn new(
        items: &[&'static str],
        configure: impl FnOnce(Options) -> Options,
    ) -> Self {
        let changes: Rc<RefCell<Vec<Vec<&'static str>>>> = Rc::default();
        let options = configure(CoordinatorOptions::new({
            let changes = Rc::clone(&changes);
            move |order: &[&'static str]| changes.borrow_mut().push(order.to_vec())
        }));
        let listeners = WindowListeners::default();
        let coordinator =
            Coordinator::with_input(items.to_vec(), options, listeners.clone()).unwrap();
        let mut host = Self {
            coordinator,
            listeners,
            changes,
            bindings: Vec::new(),
            rects: Vec::new(),
            seen_revision: None,
        };
        host.sync();
        host
    }

    fn sync(&mut self) {
        let revision = self.coordinator.revision();
        if self.seen_revision == Some(revision) {
            return;
        }
        self.seen_revision = Some(revision);

        self.bindings = self.coordinator.render();
        let mut y = 0.0;
        self.rects = self
            .bindings
            .iter()
            .map(|b| match b.positioning {
                Positioning::Floating { rect } => rect,
                Positioning::Static => {
                    let r = Rect::new(0.0, y, WIDTH, ROW);
                    y += ROW;
                    r
                }
                Positioning::Placeholder { width, height } => {
                    let r = Rect::new(0.0, y, width, height);
                    y += height;
                    r
                }
            })
            .collect();
        for (i, rect) in self.rects.iter().enumerate() {
            let el = Element(Rc::new(RefCell::new((*rect, None))));
            self.coordinator.register_element(i, el).unwrap();
        }
    }

    fn markers(&self) -> Vec<&str> {
        self.bindings
            .iter()
            .map(|b| {
                if is_placeholder_marker(&b.marker) {
                    "_"
                } else {
                    b.key().copied().unwrap()
                }
            })
            .collect()
    }

    fn rect_of(&self, id: &'static str) -> Rect {
        let i = self
            .bindings
            .iter()
            .position(|b| b.key() == Some(&id))
            .unwrap();
        self.rects[i]
    }

    fn press(&mut self, id: &'static str) -> Point {
        let rect = self.rect_of(id);
        let point = Point::new(rect.left + rect.width / 2.0, rect.top + rect.height / 2.0);
        self.coordinator.pointer_down(id, point, rect).unwrap();
        self.sync();
        point
    }

    /// One pointer-move event: the item's own handler fires, then the window listener.
    fn move_to(&mut self, id: &'static str, point: Point) -> bool {
        let started = self.coordinator.item_pointer_move(&id, point).unwrap();
        self.sync();
        if self.listeners.installed.get() {
            self.coordinator.pointer_move(point).unwrap();
            self.sync();
        }
        started
    }

    fn release(&mut self, id: &'static str) -> Option<Vec<&'static str>> {
        self.coordinator.item_pointer_up(&id);
        self.sync();
        let committed = if self.listeners.installed.get() {
            self.coordinator.pointer_up().unwrap()
        } else {
            None
        };
        self.sync();
        committed
    }

    fn drag(&mut self, id: &'static str, dys: &[f64]) -> Option<Vec<&'static str>> {
        let down = self.press(id);
        for &dy in dys {
            self.move_to(id, Point::new(down.x, down.y + dy));
        }
        self.release(id)
    }
}

fn defaults(o: Options) -> Options {
    o
}

#[test]
fn move_past_one_midpoint_commits_swap() {
    let mut host = Host::new(&["A", "B", "C"], defaults);
    let down = host.press("A");
    assert_eq!(host.coordinator.pressed(), Some("A"));

    assert!(host.move_to("A", Point::new(down.x, down.y + 1.0)));
    assert_eq!(host.coordinator.dragging(), Some("A"));
    assert_eq!(host.coordinator.placeholder(), Some(PlaceholderPosition::At(0)));
    assert_eq!(host.markers(), vec!["A", "_", "B", "C"]);

    host.move_to("A", Point::new(down.x, down.y + 6.0));
    assert_eq!(host.coordinator.placeholder(), Some(PlaceholderPosition::At(1)));
    assert_eq!(host.markers(), vec!["A", "B", "_", "C"]);

    assert_eq!(host.release("A"), Some(vec!["B", "A", "C"]));
    assert_eq!(host.coordinator.items(), vec!["B", "A", "C"]);
    assert_eq!(*host.changes.borrow(), vec![vec!["B", "A", "C"]]);
    assert_eq!(host.coordinator.placeholder(), None);
    assert_eq!(host.coordinator.dragging(), None);
    assert_eq!(host.coordinator.pressed(), None);
    assert_eq!(host.markers(), vec!["B", "A", "C"]);
}

#[test]
fn move_past_both_neighbors() {
    let mut host = Host::new(&["A", "B", "C"], defaults);
    assert_eq!(host.drag("A", &[1.0, 6.0, 16.0]), Some(vec!["B", "C", "A"]));
}

#[test]
fn move_up_from_the_bottom() {
    let mut host = Host::new(&["A", "B", "C"], defaults);
    assert_eq!(host.drag("C", &[-1.0, -6.0, -16.0]), Some(vec!["C", "A", "B"]));
}

#[test]
fn ejection_permitted_drops_the_item() {
    let mut host = Host::new(&["A", "B", "C"], |o| o.with_allow_eject(true));
    let down = host.press("A");
    for dy in [1.0, 6.0, 16.0, 31.0] {
        host.move_to("A", Point::new(down.x, down.y + dy));
    }
    assert_eq!(host.coordinator.placeholder(), Some(PlaceholderPosition::Ejected));
    assert!(host.bindings.iter().all(|b| !b.is_placeholder()));

    assert_eq!(host.release("A"), Some(vec!["B", "C"]));
    assert_eq!(host.coordinator.items(), vec!["B", "C"]);
}

#[test]
fn ejection_forbidden_keeps_the_item() {
    let mut host = Host::new(&["A", "B", "C"], |o| o.with_allow_eject(false));
    assert!(!host.coordinator.engine().options().allow_eject);
    assert_eq!(
        host.drag("A", &[1.0, 6.0, 16.0, 25.0, 120.0]),
        Some(vec!["B", "C", "A"])
    );
}

#[test]
fn horizontal_exit_ejects_only_when_permitted() {
    for (allow, expected) in [(true, vec!["B", "C"]), (false, vec!["B", "C", "A"])] {
        let mut host = Host::new(&["A", "B", "C"], |o| o.with_allow_eject(allow));
        let down = host.press("A");
        host.move_to("A", Point::new(down.x, down.y + 1.0));
        host.move_to("A", Point::new(down.x, down.y + 6.0));
        host.move_to("A", Point::new(down.x, down.y + 16.0));
        host.move_to("A", Point::new(down.x + WIDTH + 1.0, down.y + 17.0));
        assert_eq!(host.release("A"), Some(expected));
    }
}

#[test]
fn nudging_end_items_outward_keeps_them() {
    let mut host = Host::new(&["A", "B", "C"], defaults);
    assert_eq!(host.drag("C", &[1.0, 2.0]), Some(vec!["A", "B", "C"]));
    assert_eq!(host.drag("A", &[-1.0, -2.0]), Some(vec!["A", "B", "C"]));
    assert_eq!(host.coordinator.items(), vec!["A", "B", "C"]);
}

#[test]
fn ejection_waits_for_the_item_to_clear_the_list() {
    let mut host = Host::new(&["A", "B", "C"], defaults);
    let down = host.press("C");
    host.move_to("C", Point::new(down.x, down.y + 1.0));
    host.move_to("C", Point::new(down.x, down.y + ROW));
    assert_eq!(host.coordinator.placeholder(), Some(PlaceholderPosition::At(2)));
    assert!(host.bindings.iter().any(|b| b.is_placeholder()));

    host.move_to("C", Point::new(down.x, down.y + ROW + 1.0));
    assert_eq!(host.coordinator.placeholder(), Some(PlaceholderPosition::Ejected));

    let revision = host.coordinator.revision();
    for dy in [ROW + 5.0, ROW + 2.0, 3.0 * ROW, ROW + 1.5] {
        host.move_to("C", Point::new(down.x, down.y + dy));
        assert_eq!(host.coordinator.placeholder(), Some(PlaceholderPosition::Ejected));
    }
    assert_eq!(host.coordinator.revision(), revision);
    assert_eq!(host.release("C"), Some(vec!["A", "B"]));
}

#[test]
fn press_on_another_item_during_a_drag_is_ignored() {
    let mut host = Host::new(&["A", "B", "C"], defaults);
    let down = host.press("A");
    host.move_to("A", Point::new(down.x, down.y + 1.0));

    host.press("C");
    assert_eq!(host.coordinator.pressed(), Some("A"));
    assert_eq!(host.coordinator.engine().down_point(), Some(down));

    host.move_to("A", Point::new(down.x, down.y + 6.0));
    assert_eq!(host.release("A"), Some(vec!["B", "A", "C"]));
}

#[test]
fn drag_of_an_unrendered_item_is_rejected() {
    let mut host = Host::new(&["A", "B"], defaults);
    host.coordinator
        .pointer_down("Z", Point::new(50.0, 5.0), Rect::new(0.0, 0.0, WIDTH, ROW))
        .unwrap();
    let err = host
        .coordinator
        .item_pointer_move(&"Z", Point::new(50.0, 9.0))
        .unwrap_err();
    assert_eq!(err, Error::Drag(DragError::UnknownIdentifier));
    assert!(!host.coordinator.is_tracking());
    assert_eq!(host.coordinator.dragging(), None);
    assert_eq!(host.listeners.installs.get(), 0);
}

#[test]
fn press_without_movement_is_a_click() {
    let mut host = Host::new(&["A", "B", "C"], defaults);
    let down = host.press("A");
    assert!(!host.move_to("A", down));
    assert_eq!(host.release("A"), None);

    assert!(host.changes.borrow().is_empty());
    assert_eq!(host.coordinator.items(), vec!["A", "B", "C"]);
    assert!(!host.coordinator.engine().is_pressed());
    assert_eq!(host.listeners.installs.get(), 0);
}

#[test]
fn drag_threshold_must_be_exceeded() {
    let mut host = Host::new(&["A", "B", "C"], |o| o.with_drag_threshold(4.0));
    let down = host.press("A");
    assert!(!host.move_to("A", Point::new(down.x, down.y + 3.0)));
    assert!(!host.move_to("A", Point::new(down.x, down.y + 4.0)));
    assert!(!host.coordinator.is_tracking());
    assert!(host.move_to("A", Point::new(down.x + 3.0, down.y + 4.0 + 0.5)));
    assert!(host.coordinator.is_tracking());
}

#[test]
fn moves_on_unpressed_items_are_ignored() {
    let mut host = Host::new(&["A", "B", "C"], defaults);
    let down = host.press("A");
    assert!(!host.move_to("B", Point::new(down.x, down.y + 8.0)));
    assert!(!host.coordinator.is_tracking());
}

#[test]
fn global_release_before_item_release() {
    let mut host = Host::new(&["A", "B", "C"], defaults);
    let down = host.press("A");
    host.move_to("A", Point::new(down.x, down.y + 1.0));
    host.move_to("A", Point::new(down.x, down.y + 6.0));

    let committed = host.coordinator.pointer_up().unwrap();
    host.coordinator.item_pointer_up(&"A");
    host.sync();
    assert_eq!(committed, Some(vec!["B", "A", "C"]));
    assert_eq!(host.coordinator.items(), vec!["B", "A", "C"]);
    assert!(!host.listeners.installed.get());
}

#[test]
fn render_exposes_positioning_and_markers() {
    let mut host = Host::new(&["A", "B", "C"], |o| {
        o.with_id_generator(|| "fixed".to_string())
    });
    let down = host.press("B");
    assert!(host.bindings[1].pressed);
    assert!(!host.bindings[0].pressed);

    host.move_to("B", Point::new(down.x, down.y + 1.0));
    let b_rect = Rect::new(0.0, ROW, WIDTH, ROW);
    assert_eq!(host.bindings.len(), 4);
    assert_eq!(host.bindings[1].positioning, Positioning::Floating { rect: b_rect });
    assert_eq!(
        host.bindings[2].positioning,
        Positioning::Placeholder {
            width: WIDTH,
            height: ROW
        }
    );
    assert_eq!(host.bindings[2].marker, format!("{PLACEHOLDER_PREFIX}fixed"));
    assert_eq!(host.bindings[0].positioning, Positioning::Static);
    assert_eq!(host.bindings[0].marker, "A");
    for (i, b) in host.bindings.iter().enumerate() {
        assert_eq!(b.element_index, i);
    }
}

#[test]
fn sequential_ids_give_each_render_a_fresh_placeholder() {
    let mut host = Host::new(&["A", "B", "C"], defaults);
    let down = host.press("A");
    host.move_to("A", Point::new(down.x, down.y + 1.0));
    let first = host.bindings[1].marker.clone();
    host.move_to("A", Point::new(down.x, down.y + 6.0));
    let second = host.bindings[2].marker.clone();
    assert!(is_placeholder_marker(&first));
    assert!(is_placeholder_marker(&second));
    assert_ne!(first, second);
}

#[test]
fn reserved_prefix_is_a_config_error() {
    let reserved: &'static str = "__reorder_placeholder__9";
    let err = Coordinator::with_input(
        vec!["A", reserved],
        CoordinatorOptions::new(|_: &[&'static str]| {}),
        WindowListeners::default(),
    )
    .unwrap_err();
    assert!(err.is_config());
    assert_eq!(
        err,
        Error::Config(ConfigError::ReservedPrefix(String::from(reserved)))
    );

    let mut host = Host::new(&["A", "B"], defaults);
    let revision = host.coordinator.revision();
    let err = host.coordinator.set_items(vec!["C", reserved]).unwrap_err();
    assert!(err.is_config());
    assert_eq!(host.coordinator.items(), vec!["A", "B"]);
    assert_eq!(host.coordinator.revision(), revision);

    host.coordinator.set_items(vec!["C", "D", "E"]).unwrap();
    host.sync();
    assert_eq!(host.markers(), vec!["C", "D", "E"]);
}

#[test]
fn register_element_beyond_displayed_entries_is_an_indexing_error() {
    let mut host = Host::new(&["A", "B"], defaults);
    let el = Element(Rc::new(RefCell::new((Rect::default(), None))));
    let err = host.coordinator.register_element(2, el).unwrap_err();
    assert!(!err.is_config());
    assert_eq!(
        err,
        Error::Drag(DragError::ElementIndexOutOfRange {
            index: 2,
            max: Some(1)
        })
    );
}

#[test]
fn destroy_mid_drag_removes_listeners_without_committing() {
    let mut host = Host::new(&["A", "B", "C"], defaults);
    let down = host.press("A");
    host.move_to("A", Point::new(down.x, down.y + 6.0));
    assert!(host.listeners.installed.get());

    host.coordinator.destroy();
    host.coordinator.destroy();
    assert!(!host.listeners.installed.get());
    assert_eq!(host.coordinator.pointer_move(Point::new(0.0, 100.0)), Ok(None));
    assert_eq!(host.coordinator.pointer_up(), Ok(None));
    assert!(host.changes.borrow().is_empty());
    assert_eq!(host.coordinator.items(), vec!["A", "B", "C"]);
}

#[test]
fn dropping_the_coordinator_removes_listeners() {
    let listeners = WindowListeners::default();
    {
        let mut c = Coordinator::with_input(
            vec!["A", "B"],
            CoordinatorOptions::new(|_: &[&'static str]| {}),
            listeners.clone(),
        )
        .unwrap();
        c.render();
        c.pointer_down("A", Point::new(50.0, 5.0), Rect::new(0.0, 0.0, WIDTH, ROW))
            .unwrap();
        assert!(c.item_pointer_move(&"A", Point::new(50.0, 7.0)).unwrap());
        assert!(listeners.installed.get());
    }
    assert!(!listeners.installed.get());
}

#[test]
fn revision_tracks_reactive_changes_only() {
    let mut host = Host::new(&["A", "B", "C"], defaults);
    let r0 = host.coordinator.revision();
    let down = host.press("A");
    let r1 = host.coordinator.revision();
    assert!(r1 > r0);

    host.move_to("A", Point::new(down.x, down.y + 1.0));
    let r2 = host.coordinator.revision();
    assert!(r2 > r1);

    host.move_to("A", Point::new(down.x, down.y + 2.0));
    host.move_to("A", Point::new(down.x, down.y + 3.0));
    assert_eq!(host.coordinator.revision(), r2);
}
