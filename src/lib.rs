//! PCB Placer - constraint-aware rectangle placement on a bounded board
//!
//! This library packs a fixed set of rectangular components onto a board
//! using a Max-Rects free-space pool, three competing fit heuristics and
//! a constraint validator (board edges, proximity to a named target,
//! paired opposite-edge placement).
//!
//! # Example
//!
//! ```rust
//! use pcb_placer::{solve, Problem};
//!
//! let outcome = solve(&Problem::demo()).unwrap();
//! assert!(outcome.success());
//! assert_eq!(outcome.placer.placed().len(), 5);
//! ```

pub mod placer;
pub mod problem;
pub mod report;

pub use placer::{
    Board, Component, Edge, Heuristic, PlacedComponent, PlacementError, Placer, PlacerConfig,
    Point, Proximity, Rect,
};
pub use problem::{Phase, Problem, ProblemError};

/// Outcome of one phase of a solve
#[derive(Debug, Clone, PartialEq)]
pub enum PhaseStatus {
    /// Every component of the phase was committed
    Placed,
    /// The phase failed; the solve is aborted after it
    Failed(PlacementError),
    /// A prior phase failed, so this one was never attempted
    Skipped,
}

/// A phase paired with its outcome
#[derive(Debug, Clone)]
pub struct PhaseOutcome {
    pub phase: Phase,
    pub status: PhaseStatus,
}

/// The result of a full solve: the engine state after the last
/// attempted phase plus per-phase outcomes.
///
/// A failed phase aborts the remaining phases, but placements committed
/// by earlier phases stay on the board; there is no rollback.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub placer: Placer,
    pub phases: Vec<PhaseOutcome>,
}

impl SolveOutcome {
    /// True when every phase ran and committed its components
    pub fn success(&self) -> bool {
        self.phases.iter().all(|p| p.status == PhaseStatus::Placed)
    }

    /// The failure that aborted the solve, if any
    pub fn failure(&self) -> Option<&PlacementError> {
        self.phases.iter().find_map(|p| match &p.status {
            PhaseStatus::Failed(err) => Some(err),
            _ => None,
        })
    }
}

/// Solve a problem phase by phase with the default engine configuration.
///
/// Each phase must fully succeed before the next begins; the first
/// failure marks the remaining phases as skipped. Errors are returned
/// only for malformed problems (phases naming undefined components);
/// placement failures are ordinary negative results carried in the
/// outcome.
pub fn solve(problem: &Problem) -> Result<SolveOutcome, ProblemError> {
    solve_with_config(problem, PlacerConfig::default())
}

/// Solve a problem with a custom engine configuration
pub fn solve_with_config(
    problem: &Problem,
    config: PlacerConfig,
) -> Result<SolveOutcome, ProblemError> {
    let mut placer = Placer::with_config(problem.board, config);
    let mut phases = Vec::with_capacity(problem.phases.len());
    let mut aborted = false;

    for phase in &problem.phases {
        if aborted {
            phases.push(PhaseOutcome {
                phase: phase.clone(),
                status: PhaseStatus::Skipped,
            });
            continue;
        }

        let result = run_phase(&mut placer, problem, phase)?;
        let status = match result {
            Ok(()) => PhaseStatus::Placed,
            Err(err) => {
                aborted = true;
                PhaseStatus::Failed(err)
            }
        };
        phases.push(PhaseOutcome {
            phase: phase.clone(),
            status,
        });
    }

    Ok(SolveOutcome { placer, phases })
}

/// Parse a TOML problem and solve it in one step
pub fn solve_str(source: &str) -> Result<SolveOutcome, ProblemError> {
    solve(&Problem::from_toml(source)?)
}

fn run_phase(
    placer: &mut Placer,
    problem: &Problem,
    phase: &Phase,
) -> Result<Result<(), PlacementError>, ProblemError> {
    let component = |name: &str| {
        problem.component(name).cloned().ok_or_else(|| {
            ProblemError::Invalid(format!("phase references undefined component '{}'", name))
        })
    };

    let result = match phase {
        Phase::Place(name) => placer.place(component(name)?).map(|_| ()),
        Phase::Pair(anchor, partner) => placer
            .place_pair(component(anchor)?, component(partner)?)
            .map(|_| ()),
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_demo_succeeds() {
        let outcome = solve(&Problem::demo()).unwrap();
        assert!(outcome.success());
        assert!(outcome.failure().is_none());
        assert_eq!(outcome.phases.len(), 4);
        assert_eq!(outcome.placer.placed().len(), 5);
    }

    #[test]
    fn test_solve_str_round_trip() {
        let outcome = solve_str(problem::DEMO_PROBLEM).unwrap();
        assert!(outcome.success());
    }

    #[test]
    fn test_failed_phase_skips_the_rest() {
        let source = r#"
[board]
width = 10
height = 10

[[components]]
name = "big"
width = 10
height = 10

[[components]]
name = "late"
width = 2
height = 2

[[components]]
name = "never"
width = 2
height = 2

[[phases]]
place = "big"

[[phases]]
place = "late"

[[phases]]
place = "never"
"#;
        let outcome = solve_str(source).unwrap();
        assert!(!outcome.success());
        assert_eq!(outcome.phases[0].status, PhaseStatus::Placed);
        assert_eq!(
            outcome.phases[1].status,
            PhaseStatus::Failed(PlacementError::no_valid_placement("late"))
        );
        assert_eq!(outcome.phases[2].status, PhaseStatus::Skipped);
        // The committed placement survives the failure
        assert_eq!(outcome.placer.placed().len(), 1);
    }

    #[test]
    fn test_hand_built_problem_with_bad_phase_errors() {
        let problem = Problem {
            board: Board::new(10, 10),
            components: vec![],
            phases: vec![Phase::Place("ghost".to_string())],
        };
        assert!(solve(&problem).is_err());
    }
}
