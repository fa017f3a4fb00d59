// Example: drive the engine by hand through one drag.
use reorder::{DragEngine, ElementHandle, EngineOptions, Entry, Point, Rect};

struct Row {
    rect: Rect,
    translation: (f64, f64),
}

impl ElementHandle for Row {
    fn bounding_rect(&self) -> Rect {
        self.rect.translate(self.translation.0, self.translation.1)
    }

    fn set_translation(&mut self, dx: f64, dy: f64) {
        self.translation = (dx, dy);
    }

    fn clear_translation(&mut self) {
        self.translation = (0.0, 0.0);
    }
}

fn main() -> Result<(), reorder::DragError> {
    let items = ["a", "b", "c"];
    let mut engine: DragEngine<&str, Row> = DragEngine::new(EngineOptions::new(|order: &[&str]| {
        println!("committed={order:?}");
    }));

    engine.reset_element_registry(items.iter().copied().map(Entry::Item).collect());
    for (i, _) in items.iter().enumerate() {
        let rect = Rect::new(0.0, i as f64 * 20.0, 100.0, 20.0);
        engine.register_element(
            Row {
                rect,
                translation: (0.0, 0.0),
            },
            i,
        )?;
    }

    engine.pointer_down("a", Point::new(50.0, 10.0), Rect::new(0.0, 0.0, 100.0, 20.0))?;
    let start = Point::new(50.0, 11.0);
    if engine.did_drag_start_at(&"a", start) {
        engine.begin_tracking("a", start, |p| println!("placeholder={p:?}"))?;
    }

    let moved = engine.handle_pointer_move(Point::new(50.0, 35.0))?;
    println!("after move: {moved:?} direction={:?}", engine.direction());

    let order = engine.handle_pointer_up()?;
    println!("final order={order:?}");
    Ok(())
}
