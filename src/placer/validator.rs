//! Pure placement predicates
//!
//! [`is_valid`] applies the rules in a fixed order: board bounds,
//! overlap against every placed component, the edge constraint, then
//! proximity. All rules are pure predicates over read-only state.

use super::geometry::{Board, Rect};
use super::types::{Component, PlacedComponent};

/// Check whether `component` may be committed at (x, y).
///
/// A proximity target that has not been placed yet is treated as
/// satisfied rather than an error: the constraint is only enforceable
/// once the target is on the board, so callers sequence phases with the
/// target first.
pub fn is_valid(
    component: &Component,
    x: i32,
    y: i32,
    placed: &[PlacedComponent],
    board: &Board,
) -> bool {
    let candidate = component.rect_at(x, y);

    if !board.contains(&candidate) {
        return false;
    }

    if placed.iter().any(|p| candidate.overlaps(&p.rect())) {
        return false;
    }

    if component.must_be_on_edge && !board.on_edge(&candidate) {
        return false;
    }

    if let Some(proximity) = &component.proximity {
        if let Some(target) = placed.iter().find(|p| p.name() == proximity.target) {
            if candidate.center_distance(&target.rect()) > proximity.max_distance {
                return false;
            }
        }
    }

    true
}

/// Reporting-only check that two placed rectangles sit on opposing
/// board edges (left/right or top/bottom). A corner placement touches
/// two edges and counts for either pairing.
pub fn on_opposite_edges(a: &Rect, b: &Rect, board: &Board) -> bool {
    let horizontal =
        (a.x == 0 && b.right() == board.width) || (a.right() == board.width && b.x == 0);
    let vertical =
        (a.y == 0 && b.bottom() == board.height) || (a.bottom() == board.height && b.y == 0);
    horizontal || vertical
}
