//! Placement engine: competing Max-Rects heuristics over the free pool
//!
//! Each heuristic scans the free-rectangle candidates in pool order and
//! scores a placement at the candidate's top-left corner only; no other
//! corner and no rotation is tried. The engine keeps the placement with
//! the smallest raw score across the three heuristics. BSSF and BLSF
//! scores are lengths while BAF's is an area; the raw comparison is
//! reproduced from the reference behavior and must not be normalized
//! (see the quirk test in `tests/placement_phases.rs`).

use super::config::PlacerConfig;
use super::error::PlacementError;
use super::geometry::{Board, Point, Rect};
use super::pool::FreeRectPool;
use super::types::{Component, PlacedComponent};
use super::validator;

/// Scoring rules for choosing among feasible free-rectangle candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// Best Short Side Fit: minimize the smaller leftover dimension,
    /// tie-break on the larger one
    BestShortSide,
    /// Best Long Side Fit: minimize the larger leftover dimension,
    /// tie-break on the smaller one
    BestLongSide,
    /// Best Area Fit: minimize the leftover area, tie-break on the
    /// smaller leftover dimension
    BestArea,
}

impl Heuristic {
    /// Evaluation order; earlier heuristics win score ties
    pub const ALL: [Heuristic; 3] = [Self::BestShortSide, Self::BestLongSide, Self::BestArea];

    /// Primary score and tie-break key for the given leftover dimensions
    fn score(self, leftover_w: i32, leftover_h: i32) -> (i64, i64) {
        let short = i64::from(leftover_w.min(leftover_h));
        let long = i64::from(leftover_w.max(leftover_h));
        match self {
            Self::BestShortSide => (short, long),
            Self::BestLongSide => (long, short),
            Self::BestArea => (i64::from(leftover_w) * i64::from(leftover_h), short),
        }
    }
}

/// A candidate placement with its heuristic score
#[derive(Debug, Clone, Copy)]
struct Scored {
    position: Point,
    score: i64,
    tie: i64,
}

/// The placement engine.
///
/// Exclusively owns the free-rectangle pool and the placed-component
/// list; these are its only mutable state. Fully synchronous and
/// single-threaded: given identical inputs and call order the results
/// are deterministic.
#[derive(Debug, Clone)]
pub struct Placer {
    board: Board,
    config: PlacerConfig,
    pool: FreeRectPool,
    placed: Vec<PlacedComponent>,
}

impl Placer {
    pub fn new(board: Board) -> Self {
        Self::with_config(board, PlacerConfig::default())
    }

    pub fn with_config(board: Board, config: PlacerConfig) -> Self {
        Self {
            board,
            config,
            pool: FreeRectPool::new(board),
            placed: Vec::new(),
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn config(&self) -> &PlacerConfig {
        &self.config
    }

    /// Components placed so far, in commit order
    pub fn placed(&self) -> &[PlacedComponent] {
        &self.placed
    }

    /// Look up a placed component by name
    pub fn find(&self, name: &str) -> Option<&PlacedComponent> {
        self.placed.iter().find(|p| p.name() == name)
    }

    /// Remaining free rectangles, in pool order (read-only snapshot)
    pub fn free_rects(&self) -> &[Rect] {
        self.pool.rects()
    }

    /// Remaining free-rectangle count, for utilization reporting
    pub fn free_rect_count(&self) -> usize {
        self.pool.len()
    }

    /// Place one component, trying all three heuristics and committing
    /// the lowest-scoring placement. On failure nothing is mutated.
    pub fn place(&mut self, component: Component) -> Result<Point, PlacementError> {
        let mut best: Option<Scored> = None;
        for heuristic in Heuristic::ALL {
            if let Some(candidate) = self.best_under(heuristic, &component) {
                // Raw cross-heuristic score comparison, strict less:
                // earlier heuristics keep ties.
                if best.as_ref().map_or(true, |b| candidate.score < b.score) {
                    best = Some(candidate);
                }
            }
        }

        match best {
            Some(chosen) => Ok(self.commit(component, chosen.position)),
            None => Err(PlacementError::no_valid_placement(&component.name)),
        }
    }

    /// Best valid placement under a single heuristic, if any
    fn best_under(&self, heuristic: Heuristic, component: &Component) -> Option<Scored> {
        let mut best: Option<Scored> = None;
        for rect in self.pool.candidates(component.width, component.height) {
            if !validator::is_valid(component, rect.x, rect.y, &self.placed, &self.board) {
                continue;
            }
            let (score, tie) =
                heuristic.score(rect.width - component.width, rect.height - component.height);
            let better = match &best {
                None => true,
                Some(b) => score < b.score || (score == b.score && tie < b.tie),
            };
            if better {
                best = Some(Scored {
                    position: Point::new(rect.x, rect.y),
                    score,
                    tie,
                });
            }
        }
        best
    }

    /// Commit a validated position: append to the placed list and tell
    /// the pool to split and prune.
    pub(crate) fn commit(&mut self, component: Component, position: Point) -> Point {
        let placed = PlacedComponent {
            component,
            position,
        };
        self.pool.commit(placed.rect());
        self.placed.push(placed);
        position
    }
}
