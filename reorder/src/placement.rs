//! Placeholder geometry.
//!
//! All functions are pure: they take the dragged item's rect as captured at press time, the
//! pointer delta since the press, and the current rects of the other displayed items.

use crate::{PlaceholderPosition, Rect, VerticalDirection};

/// Moving down: the dragged bottom edge has crossed `target.top` by more than half the
/// dragged height.
pub fn intrudes_moving_down(dragged: Rect, dy: f64, target: Rect) -> bool {
    dragged.bottom() + dy > target.top + dragged.height / 2.0
}

/// Moving up: the dragged top edge has crossed `target.bottom` by more than half the dragged
/// height.
pub fn intrudes_moving_up(dragged: Rect, dy: f64, target: Rect) -> bool {
    dragged.top + dy < target.bottom() - dragged.height / 2.0
}

fn misses_horizontally(dragged: Rect, dx: f64, bounds: Rect) -> bool {
    dragged.right() + dx < bounds.left || dragged.left + dx > bounds.right()
}

/// The dragged item lies entirely below `bounds`, or entirely beside it.
pub fn ejected_below(dragged: Rect, dx: f64, dy: f64, bounds: Rect) -> bool {
    dragged.top + dy > bounds.bottom() || misses_horizontally(dragged, dx, bounds)
}

/// The dragged item lies entirely above `bounds`, or entirely beside it.
pub fn ejected_above(dragged: Rect, dx: f64, dy: f64, bounds: Rect) -> bool {
    dragged.bottom() + dy < bounds.top || misses_horizontally(dragged, dx, bounds)
}

/// Computes the placeholder position for one pointer sample.
///
/// `candidates` are the rects of every displayed item except the dragged one and the
/// placeholder, in display order. A `None` rect (element not registered this render) stops
/// the walk as if it did not intrude.
///
/// `bounds` is the extent of the whole list: every displayed entry, the placeholder and the
/// dragged item's own slot included. Ejection is tested against it before walking and does
/// not depend on the direction of travel, so a sideways exit ejects from any row.
pub fn compute_placeholder(
    dragged: Rect,
    dx: f64,
    dy: f64,
    direction: VerticalDirection,
    candidates: &[Option<Rect>],
    bounds: Rect,
    allow_eject: bool,
) -> PlaceholderPosition {
    if allow_eject
        && (ejected_below(dragged, dx, dy, bounds) || ejected_above(dragged, dx, dy, bounds))
    {
        return PlaceholderPosition::Ejected;
    }

    match direction {
        VerticalDirection::Down => {
            let intruded = candidates
                .iter()
                .take_while(|r| r.is_some_and(|r| intrudes_moving_down(dragged, dy, r)))
                .count();
            PlaceholderPosition::At(intruded)
        }
        VerticalDirection::Up => {
            let intruded = candidates
                .iter()
                .rev()
                .take_while(|r| r.is_some_and(|r| intrudes_moving_up(dragged, dy, r)))
                .count();
            PlaceholderPosition::At(candidates.len() - intruded)
        }
    }
}
