//! Free-rectangle bookkeeping (Max-Rects style)
//!
//! The pool tracks rectangles known to be free of placed components.
//! Members may overlap one another; each is individually disjoint from
//! every placed component, and the pool union plus the placed
//! rectangles always covers the whole board.
//!
//! Insertion order is observable: the heuristics break ties by taking
//! the earliest candidate, so splits append their slices in a fixed
//! order (left, right, top, bottom) and prunes keep the survivors in
//! sequence.

use super::geometry::{Board, Rect};

/// Ordered pool of free rectangles covering the unoccupied board area
#[derive(Debug, Clone)]
pub struct FreeRectPool {
    rects: Vec<Rect>,
}

impl FreeRectPool {
    /// A pool covering the whole board with a single rectangle
    pub fn new(board: Board) -> Self {
        Self {
            rects: vec![board.as_rect()],
        }
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Current pool contents in insertion order
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Pool rectangles large enough for a `width` x `height` footprint,
    /// in insertion order
    pub fn candidates(&self, width: i32, height: i32) -> impl Iterator<Item = &Rect> {
        self.rects
            .iter()
            .filter(move |r| r.width >= width && r.height >= height)
    }

    /// Record a committed placement: replace every intersecting pool
    /// rectangle with its leftover strips, keep the rest unchanged, then
    /// prune contained duplicates.
    pub fn commit(&mut self, placed: Rect) {
        let mut next = Vec::with_capacity(self.rects.len() + 3);
        for rect in &self.rects {
            if rect.overlaps(&placed) {
                split_into(rect, &placed, &mut next);
            } else {
                next.push(*rect);
            }
        }
        self.rects = prune(next);
    }
}

/// Append the up-to-four leftover strips of `rect` around `placed`, in
/// the fixed order left, right, top, bottom.
fn split_into(rect: &Rect, placed: &Rect, out: &mut Vec<Rect>) {
    if placed.x > rect.x {
        out.push(Rect::new(rect.x, rect.y, placed.x - rect.x, rect.height));
    }
    if placed.right() < rect.right() {
        out.push(Rect::new(
            placed.right(),
            rect.y,
            rect.right() - placed.right(),
            rect.height,
        ));
    }
    if placed.y > rect.y {
        out.push(Rect::new(rect.x, rect.y, rect.width, placed.y - rect.y));
    }
    if placed.bottom() < rect.bottom() {
        out.push(Rect::new(
            rect.x,
            placed.bottom(),
            rect.width,
            rect.bottom() - placed.bottom(),
        ));
    }
}

/// Drop every rectangle contained in another list member, preserving
/// order. Quadratic by intent: pools stay small for the board sizes the
/// engine targets. Containment is checked against every other member,
/// so two exact duplicates eliminate each other; that matches the
/// reference behavior.
fn prune(rects: Vec<Rect>) -> Vec<Rect> {
    let mut kept = Vec::with_capacity(rects.len());
    for (i, rect) in rects.iter().enumerate() {
        let redundant = rects
            .iter()
            .enumerate()
            .any(|(j, other)| i != j && other.contains(rect));
        if !redundant {
            kept.push(*rect);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(50, 50)
    }

    #[test]
    fn test_initial_pool_covers_board() {
        let pool = FreeRectPool::new(board());
        assert_eq!(pool.rects(), &[Rect::new(0, 0, 50, 50)]);
    }

    #[test]
    fn test_candidates_filter_and_order() {
        let mut pool = FreeRectPool::new(board());
        pool.commit(Rect::new(0, 0, 5, 5));
        // Split of the initial rectangle: right slice then bottom slice
        assert_eq!(
            pool.rects(),
            &[Rect::new(5, 0, 45, 50), Rect::new(0, 5, 50, 45)]
        );

        let fits: Vec<&Rect> = pool.candidates(46, 10).collect();
        assert_eq!(fits, vec![&Rect::new(0, 5, 50, 45)]);

        let none: Vec<&Rect> = pool.candidates(51, 1).collect();
        assert!(none.is_empty());
    }

    #[test]
    fn test_commit_splits_corner_placement() {
        let mut pool = FreeRectPool::new(board());
        pool.commit(Rect::new(45, 45, 5, 5));
        // Left slice then top slice; no right/bottom leftovers
        assert_eq!(
            pool.rects(),
            &[Rect::new(0, 0, 45, 50), Rect::new(0, 0, 50, 45)]
        );
    }

    #[test]
    fn test_commit_splits_interior_placement_four_ways() {
        let mut pool = FreeRectPool::new(board());
        pool.commit(Rect::new(20, 20, 10, 10));
        assert_eq!(
            pool.rects(),
            &[
                Rect::new(0, 0, 20, 50),
                Rect::new(30, 0, 20, 50),
                Rect::new(0, 0, 50, 20),
                Rect::new(0, 30, 50, 20),
            ]
        );
    }

    #[test]
    fn test_commit_keeps_disjoint_rects() {
        let mut pool = FreeRectPool::new(board());
        pool.commit(Rect::new(0, 0, 5, 5));
        pool.commit(Rect::new(5, 0, 5, 5));
        // The (0,5,50,45) slice does not intersect the second placement
        assert_eq!(
            pool.rects(),
            &[Rect::new(10, 0, 40, 50), Rect::new(0, 5, 50, 45)]
        );
    }

    #[test]
    fn test_prune_removes_contained() {
        let rects = vec![
            Rect::new(0, 0, 50, 50),
            Rect::new(10, 10, 5, 5),
            Rect::new(40, 0, 10, 50),
        ];
        assert_eq!(prune(rects), vec![Rect::new(0, 0, 50, 50)]);
    }

    #[test]
    fn test_prune_removes_both_duplicates() {
        // Exact duplicates contain each other, so both go; this mirrors
        // the reference implementation.
        let rects = vec![Rect::new(0, 0, 10, 10), Rect::new(0, 0, 10, 10)];
        assert!(prune(rects).is_empty());
    }

    #[test]
    fn test_prune_idempotent() {
        let rects = vec![
            Rect::new(0, 0, 20, 50),
            Rect::new(0, 0, 50, 20),
            Rect::new(5, 5, 10, 10),
            Rect::new(30, 30, 20, 20),
        ];
        let once = prune(rects);
        let twice = prune(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_pool_union_covers_board_after_commits() {
        let mut pool = FreeRectPool::new(board());
        let placements = [
            Rect::new(0, 0, 5, 5),
            Rect::new(5, 0, 5, 5),
            Rect::new(0, 45, 5, 5),
            Rect::new(20, 20, 7, 3),
        ];
        for placement in placements {
            pool.commit(placement);
        }
        // Every unit cell is either under a placement or under some
        // free rectangle; no area is silently lost.
        for y in 0..50 {
            for x in 0..50 {
                let occupied = placements.iter().any(|p| p.covers_cell(x, y));
                let free = pool.rects().iter().any(|r| r.covers_cell(x, y));
                assert!(
                    occupied || free,
                    "cell ({}, {}) neither occupied nor free",
                    x,
                    y
                );
                assert!(
                    !(occupied && free),
                    "cell ({}, {}) both occupied and free",
                    x,
                    y
                );
            }
        }
    }
}
