//! Text reporting for solved boards
//!
//! Everything here consumes read-only engine output — placed
//! components, phase outcomes, the free-rectangle count — and never
//! participates in placement decisions. The engine does not depend on
//! this module.

use std::fmt::Write;

use crate::placer::{validator, Placer};
use crate::{PhaseStatus, SolveOutcome};

/// Characters assigned to components, in placement order, for the grid
const GRID_CHARS: &[u8] = b"123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// One line per placed component with its resolved rectangle
pub fn placement_summary(placer: &Placer) -> String {
    let mut out = String::new();
    for placed in placer.placed() {
        let rect = placed.rect();
        let _ = writeln!(
            out,
            "{}: ({}, {}) to ({}, {})",
            placed.name(),
            rect.x,
            rect.y,
            rect.right(),
            rect.bottom()
        );
    }
    out
}

/// One line per phase with its outcome
pub fn phase_summary(outcome: &SolveOutcome) -> String {
    let mut out = String::new();
    for (i, phase) in outcome.phases.iter().enumerate() {
        let status = match &phase.status {
            PhaseStatus::Placed => "ok".to_string(),
            PhaseStatus::Failed(err) => format!("FAILED ({})", err),
            PhaseStatus::Skipped => "skipped".to_string(),
        };
        let _ = writeln!(out, "phase {}: {} .. {}", i + 1, phase.phase, status);
    }
    out
}

/// Coarse character-grid rendering of the board.
///
/// Prints every fifth row to stay readable; each placed component is
/// drawn with the character listed in the legend.
pub fn board_grid(placer: &Placer) -> String {
    let board = placer.board();
    let mut grid = vec![vec![b'.'; board.width as usize]; board.height as usize];

    for (i, placed) in placer.placed().iter().enumerate() {
        let ch = GRID_CHARS[i % GRID_CHARS.len()];
        let rect = placed.rect();
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                grid[y as usize][x as usize] = ch;
            }
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "board {}x{}", board.width, board.height);
    for (i, placed) in placer.placed().iter().enumerate() {
        let ch = GRID_CHARS[i % GRID_CHARS.len()] as char;
        let _ = writeln!(out, "  {} = {}", ch, placed.name());
    }

    let frame = "-".repeat(board.width as usize);
    let _ = writeln!(out, "+{}+", frame);
    for y in (0..board.height as usize).step_by(5) {
        let row: String = grid[y].iter().map(|&b| b as char).collect();
        let _ = writeln!(out, "|{}|", row);
    }
    let _ = writeln!(out, "+{}+", frame);
    out
}

/// Utilization percentage and free-rectangle count
pub fn metrics(placer: &Placer) -> String {
    let board = placer.board();
    let board_area = i64::from(board.width) * i64::from(board.height);
    let used: i64 = placer.placed().iter().map(|p| p.rect().area()).sum();
    let utilization = if board_area > 0 {
        used as f64 / board_area as f64 * 100.0
    } else {
        0.0
    };

    let mut out = String::new();
    let _ = writeln!(out, "board utilization: {:.1}%", utilization);
    let _ = writeln!(out, "free rectangles remaining: {}", placer.free_rect_count());
    out
}

/// A rendered constraint verification report
#[derive(Debug, Clone)]
pub struct ConstraintReport {
    pub text: String,
    pub all_valid: bool,
}

/// Re-check every constraint against the final placements.
///
/// This mirrors the placement rules but runs after the fact, over the
/// committed state, so a reader can audit the solve without trusting
/// the engine.
pub fn verify(outcome: &SolveOutcome) -> ConstraintReport {
    let placer = &outcome.placer;
    let board = placer.board();
    let mut text = String::new();
    let mut all_valid = true;
    let mut check = |out: &mut String, label: &str, ok: bool| {
        let _ = writeln!(out, "  {}: {}", label, if ok { "ok" } else { "VIOLATION" });
        all_valid &= ok;
    };

    let _ = writeln!(text, "bounds:");
    for placed in placer.placed() {
        let ok = board.contains(&placed.rect());
        check(&mut text, placed.name(), ok);
    }

    let _ = writeln!(text, "overlaps:");
    let placed = placer.placed();
    let mut any_overlap = false;
    for (i, a) in placed.iter().enumerate() {
        for b in &placed[i + 1..] {
            if a.rect().overlaps(&b.rect()) {
                check(
                    &mut text,
                    &format!("{} / {}", a.name(), b.name()),
                    false,
                );
                any_overlap = true;
            }
        }
    }
    if !any_overlap {
        let _ = writeln!(text, "  none");
    }

    let _ = writeln!(text, "edge placement:");
    for placed in placer.placed() {
        if placed.component.must_be_on_edge {
            let ok = board.on_edge(&placed.rect());
            check(&mut text, placed.name(), ok);
        }
    }

    let _ = writeln!(text, "proximity:");
    for placed in placer.placed() {
        if let Some(proximity) = &placed.component.proximity {
            if let Some(target) = placer.find(&proximity.target) {
                let distance = placed.rect().center_distance(&target.rect());
                let ok = distance <= proximity.max_distance;
                check(
                    &mut text,
                    &format!(
                        "{} -> {} ({:.2} <= {:.2})",
                        placed.name(),
                        proximity.target,
                        distance,
                        proximity.max_distance
                    ),
                    ok,
                );
            }
        }
    }

    let _ = writeln!(text, "opposite edges:");
    for phase in &outcome.phases {
        if let crate::Phase::Pair(anchor, partner) = &phase.phase {
            if let (Some(a), Some(b)) = (placer.find(anchor), placer.find(partner)) {
                let ok = validator::on_opposite_edges(&a.rect(), &b.rect(), &board);
                check(&mut text, &format!("{} / {}", anchor, partner), ok);
            }
        }
    }

    let _ = writeln!(
        text,
        "overall: {}",
        if all_valid { "PASSED" } else { "FAILED" }
    );

    ConstraintReport { text, all_valid }
}
