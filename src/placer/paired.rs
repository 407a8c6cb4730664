//! Paired opposite-edge placement
//!
//! Places an anchor component through the regular engine, then forces a
//! linked partner onto the board edge opposite the anchor's landing
//! edge, scanning a coarse grid of candidate points along that edge.
//! The anchor's placement (and its pool mutation) stays committed even
//! when the partner cannot be placed.

use super::engine::Placer;
use super::error::PlacementError;
use super::geometry::{Board, Point, Rect};
use super::types::Component;
use super::validator;

/// The four canonical board edges, in landing-detection priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub fn opposite(self) -> Edge {
        match self {
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
        }
    }

    /// The single edge a rectangle counts as landing on. Checked in the
    /// fixed priority order left, right, top, bottom; a corner placement
    /// matches the first of its edges in that order.
    pub fn landing(rect: &Rect, board: &Board) -> Option<Edge> {
        if rect.x == 0 {
            Some(Edge::Left)
        } else if rect.right() == board.width {
            Some(Edge::Right)
        } else if rect.y == 0 {
            Some(Edge::Top)
        } else if rect.bottom() == board.height {
            Some(Edge::Bottom)
        } else {
            None
        }
    }
}

impl Placer {
    /// Place `anchor` through the engine, then `partner` on the board
    /// edge opposite the anchor's landing edge.
    ///
    /// The partner's edge constraint holds by construction; bounds,
    /// overlap and proximity are still validated at every candidate.
    /// Returns the two committed positions, or the first failure. The
    /// anchor is not rolled back when the partner fails.
    pub fn place_pair(
        &mut self,
        anchor: Component,
        partner: Component,
    ) -> Result<(Point, Point), PlacementError> {
        let (anchor_w, anchor_h) = (anchor.width, anchor.height);
        let anchor_pos = self.place(anchor)?;
        let anchor_rect = Rect::new(anchor_pos.x, anchor_pos.y, anchor_w, anchor_h);

        let board = self.board();
        let Some(landing) = Edge::landing(&anchor_rect, &board) else {
            return Err(PlacementError::no_opposite_edge(&partner.name));
        };

        let step = self.config().pair_scan_step;
        let slot = edge_candidates(landing.opposite(), &partner, &board, step)
            .into_iter()
            .find(|p| validator::is_valid(&partner, p.x, p.y, self.placed(), &board));

        match slot {
            Some(position) => {
                let partner_pos = self.commit(partner, position);
                Ok((anchor_pos, partner_pos))
            }
            None => Err(PlacementError::no_opposite_edge(&partner.name)),
        }
    }
}

/// Candidate points that pin a component footprint against `edge`: the
/// fixed coordinate sits on the edge, the free axis runs from 0 in
/// `step` increments up to the last in-bounds position, in increasing
/// order.
fn edge_candidates(edge: Edge, component: &Component, board: &Board, step: i32) -> Vec<Point> {
    let rightmost = board.width - component.width;
    let bottommost = board.height - component.height;
    let along = |max: i32| (0..=max).step_by(step as usize);
    match edge {
        Edge::Left => along(bottommost).map(|y| Point::new(0, y)).collect(),
        Edge::Right => along(bottommost).map(|y| Point::new(rightmost, y)).collect(),
        Edge::Top => along(rightmost).map(|x| Point::new(x, 0)).collect(),
        Edge::Bottom => along(rightmost).map(|x| Point::new(x, bottommost)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(50, 50)
    }

    #[test]
    fn test_landing_priority_order() {
        let b = board();
        // Top-left corner: left wins over top
        assert_eq!(Edge::landing(&Rect::new(0, 0, 5, 5), &b), Some(Edge::Left));
        // Top-right corner: right wins over top
        assert_eq!(Edge::landing(&Rect::new(45, 0, 5, 5), &b), Some(Edge::Right));
        assert_eq!(Edge::landing(&Rect::new(20, 0, 5, 5), &b), Some(Edge::Top));
        assert_eq!(
            Edge::landing(&Rect::new(20, 45, 5, 5), &b),
            Some(Edge::Bottom)
        );
        assert_eq!(Edge::landing(&Rect::new(20, 20, 5, 5), &b), None);
    }

    #[test]
    fn test_edge_candidates_grid() {
        let c = Component::new("mb2", 5, 5);
        let right: Vec<Point> = edge_candidates(Edge::Right, &c, &board(), 5);
        assert_eq!(right.len(), 10);
        assert_eq!(right.first(), Some(&Point::new(45, 0)));
        assert_eq!(right.last(), Some(&Point::new(45, 45)));

        let bottom: Vec<Point> = edge_candidates(Edge::Bottom, &c, &board(), 5);
        assert_eq!(bottom.first(), Some(&Point::new(0, 45)));
        assert_eq!(bottom.last(), Some(&Point::new(45, 45)));
    }

    #[test]
    fn test_place_pair_opposite_edges() {
        let mut p = Placer::new(board());
        let (anchor, partner) = p
            .place_pair(
                Component::new("mb1", 5, 5).on_edge(),
                Component::new("mb2", 5, 5).on_edge(),
            )
            .unwrap();
        // Anchor lands top-left; left edge wins the priority check, so
        // the partner scans the right edge top-down.
        assert_eq!(anchor, Point::new(0, 0));
        assert_eq!(partner, Point::new(45, 0));
    }

    #[test]
    fn test_place_pair_partner_failure_keeps_anchor() {
        let mut p = Placer::new(Board::new(12, 12));
        // Wall off the entire right edge so no opposite-edge slot fits.
        p.commit(Component::new("wall", 5, 12), Point::new(7, 0));

        let err = p
            .place_pair(
                Component::new("mb1", 5, 5).on_edge(),
                Component::new("mb2", 5, 5).on_edge(),
            )
            .unwrap_err();
        assert_eq!(err, PlacementError::no_opposite_edge("mb2"));
        // Anchor stays committed
        assert!(p.find("mb1").is_some());
        assert!(p.find("mb2").is_none());
    }
}
