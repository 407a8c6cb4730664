//! Problem descriptions loaded from TOML
//!
//! A problem is a board, a component list and an ordered sequence of
//! phases. Each phase either places one named component through the
//! engine or runs the paired opposite-edge routine for two of them.
//! Phase order is load-bearing: proximity constraints are only enforced
//! against targets placed by an earlier phase.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::placer::{Board, Component};

/// Errors that can occur when loading or validating a problem
#[derive(Error, Debug)]
pub enum ProblemError {
    #[error("failed to read problem file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse problem TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid problem: {0}")]
    Invalid(String),
}

/// One step of a solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Place a single named component through the engine
    Place(String),
    /// Run the paired opposite-edge routine: anchor, then partner
    Pair(String, String),
}

impl Phase {
    /// Names of the components this phase places
    pub fn component_names(&self) -> Vec<&str> {
        match self {
            Phase::Place(name) => vec![name],
            Phase::Pair(anchor, partner) => vec![anchor, partner],
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Place(name) => write!(f, "place {}", name),
            Phase::Pair(anchor, partner) => write!(f, "pair {} / {}", anchor, partner),
        }
    }
}

/// A complete placement problem
#[derive(Debug, Clone)]
pub struct Problem {
    pub board: Board,
    pub components: Vec<Component>,
    pub phases: Vec<Phase>,
}

/// TOML structure for deserializing problems
#[derive(Deserialize)]
struct TomlProblem {
    board: TomlBoard,
    #[serde(default)]
    components: Vec<TomlComponent>,
    #[serde(default)]
    phases: Vec<TomlPhase>,
}

#[derive(Deserialize)]
struct TomlBoard {
    width: i32,
    height: i32,
}

#[derive(Deserialize)]
struct TomlComponent {
    name: String,
    width: i32,
    height: i32,
    #[serde(default)]
    on_edge: bool,
    proximity_target: Option<String>,
    max_proximity_distance: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TomlPhase {
    Place { place: String },
    Pair { pair: [String; 2] },
}

/// The original five-component PCB demo: a USB connector, two MikroBus
/// connectors constrained to opposite edges, a microcontroller and a
/// crystal that must sit near it.
pub const DEMO_PROBLEM: &str = r#"
[board]
width = 50
height = 50

[[components]]
name = "USB_CONNECTOR"
width = 5
height = 5
on_edge = true

[[components]]
name = "MIKROBUS_CONNECTOR_1"
width = 5
height = 5
on_edge = true

[[components]]
name = "MIKROBUS_CONNECTOR_2"
width = 5
height = 5
on_edge = true

[[components]]
name = "MICROCONTROLLER"
width = 5
height = 5

[[components]]
name = "CRYSTAL"
width = 5
height = 5
proximity_target = "MICROCONTROLLER"
max_proximity_distance = 10.0

[[phases]]
place = "USB_CONNECTOR"

[[phases]]
pair = ["MIKROBUS_CONNECTOR_1", "MIKROBUS_CONNECTOR_2"]

[[phases]]
place = "MICROCONTROLLER"

[[phases]]
place = "CRYSTAL"
"#;

impl Problem {
    /// Load a problem from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProblemError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a problem from TOML source
    pub fn from_toml(source: &str) -> Result<Self, ProblemError> {
        let toml_problem: TomlProblem = toml::from_str(source)?;
        let problem = Self::from_toml_problem(toml_problem)?;
        problem.validate()?;
        Ok(problem)
    }

    /// The built-in demo problem
    pub fn demo() -> Self {
        Self::from_toml(DEMO_PROBLEM).expect("built-in demo problem must be valid")
    }

    /// Look up a component descriptor by name
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    fn from_toml_problem(toml_problem: TomlProblem) -> Result<Self, ProblemError> {
        let board = Board::new(toml_problem.board.width, toml_problem.board.height);

        let mut components = Vec::with_capacity(toml_problem.components.len());
        for c in toml_problem.components {
            let mut component = Component::new(c.name.clone(), c.width, c.height);
            if c.on_edge {
                component = component.on_edge();
            }
            match (c.proximity_target, c.max_proximity_distance) {
                (Some(target), Some(distance)) => {
                    component = component.near(target, distance);
                }
                (Some(_), None) => {
                    return Err(ProblemError::Invalid(format!(
                        "component '{}' has a proximity target but no max_proximity_distance",
                        c.name
                    )));
                }
                (None, Some(_)) => {
                    return Err(ProblemError::Invalid(format!(
                        "component '{}' has max_proximity_distance but no proximity target",
                        c.name
                    )));
                }
                (None, None) => {}
            }
            components.push(component);
        }

        let phases = toml_problem
            .phases
            .into_iter()
            .map(|p| match p {
                TomlPhase::Place { place } => Phase::Place(place),
                TomlPhase::Pair { pair: [anchor, partner] } => Phase::Pair(anchor, partner),
            })
            .collect();

        Ok(Self {
            board,
            components,
            phases,
        })
    }

    fn validate(&self) -> Result<(), ProblemError> {
        if self.board.width <= 0 || self.board.height <= 0 {
            return Err(ProblemError::Invalid(format!(
                "board dimensions must be positive, got {}x{}",
                self.board.width, self.board.height
            )));
        }

        for (i, component) in self.components.iter().enumerate() {
            if component.width <= 0 || component.height <= 0 {
                return Err(ProblemError::Invalid(format!(
                    "component '{}' dimensions must be positive, got {}x{}",
                    component.name, component.width, component.height
                )));
            }
            if self.components[..i].iter().any(|c| c.name == component.name) {
                return Err(ProblemError::Invalid(format!(
                    "duplicate component name '{}'",
                    component.name
                )));
            }
            if let Some(proximity) = &component.proximity {
                if proximity.max_distance < 0.0 {
                    return Err(ProblemError::Invalid(format!(
                        "component '{}' has a negative max_proximity_distance",
                        component.name
                    )));
                }
                if self.component(&proximity.target).is_none() {
                    return Err(ProblemError::Invalid(format!(
                        "component '{}' references undefined proximity target '{}'",
                        component.name, proximity.target
                    )));
                }
            }
        }

        let mut phased: Vec<&str> = Vec::new();
        for phase in &self.phases {
            for name in phase.component_names() {
                if self.component(name).is_none() {
                    return Err(ProblemError::Invalid(format!(
                        "phase '{}' references undefined component '{}'",
                        phase, name
                    )));
                }
                if phased.contains(&name) {
                    return Err(ProblemError::Invalid(format!(
                        "component '{}' is placed by more than one phase",
                        name
                    )));
                }
                phased.push(name);
            }
        }

        Ok(())
    }
}
