// Example: a minimal host loop around the coordinator.
use reorder::{ElementHandle, Point, Rect};
use reorder_adapter::{CoordinatorOptions, Positioning, ReorderCoordinator};

#[derive(Clone, Copy)]
struct Row(Rect);

impl ElementHandle for Row {
    fn bounding_rect(&self) -> Rect {
        self.0
    }

    fn set_translation(&mut self, _dx: f64, _dy: f64) {}

    fn clear_translation(&mut self) {}
}

const ROW: f64 = 24.0;

fn render(c: &mut ReorderCoordinator<String, Row>) -> Result<Vec<Rect>, reorder_adapter::Error> {
    let mut y = 0.0;
    let mut rects = Vec::new();
    for binding in c.render() {
        let rect = match binding.positioning {
            Positioning::Floating { rect } => rect,
            Positioning::Static => {
                y += ROW;
                Rect::new(0.0, y - ROW, 200.0, ROW)
            }
            Positioning::Placeholder { width, height } => {
                y += height;
                Rect::new(0.0, y - height, width, height)
            }
        };
        println!("  [{}] {} {:?}", binding.element_index, binding.marker, binding.positioning);
        c.register_element(binding.element_index, Row(rect))?;
        rects.push(rect);
    }
    Ok(rects)
}

fn main() -> Result<(), reorder_adapter::Error> {
    let items = vec!["one".to_string(), "two".to_string(), "three".to_string()];
    let options = CoordinatorOptions::new(|order: &[String]| println!("order changed: {order:?}"))
        .with_drag_threshold(3.0);
    let mut c: ReorderCoordinator<String, Row> = ReorderCoordinator::new(items, options)?;

    let rects = render(&mut c)?;
    let id = "one".to_string();
    let down = Point::new(100.0, ROW / 2.0);
    c.pointer_down(id.clone(), down, rects[0])?;

    for dy in [2.0, 8.0, 20.0, 40.0] {
        let p = Point::new(down.x, down.y + dy);
        let before = c.revision();
        c.item_pointer_move(&id, p)?;
        c.pointer_move(p)?;
        if c.revision() != before {
            println!("dy={dy} placeholder={:?}", c.placeholder());
            render(&mut c)?;
        }
    }

    c.item_pointer_up(&id);
    let committed = c.pointer_up()?;
    println!("committed={committed:?} items={:?}", c.items());
    Ok(())
}
