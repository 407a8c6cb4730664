//! Error types for the placement engine

use thiserror::Error;

/// Negative placement results.
///
/// Neither variant is fatal: the caller decides whether to abort the
/// remaining phases or carry on. Placements committed before the
/// failure are never rolled back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// No heuristic found a candidate satisfying every constraint
    #[error("no valid placement for component '{component}'")]
    NoValidPlacement { component: String },

    /// Paired placement found no valid slot on the opposite edge, or
    /// the anchor did not land on a canonical edge
    #[error("no opposite-edge candidate for component '{component}'")]
    NoOppositeEdgeCandidate { component: String },
}

impl PlacementError {
    pub fn no_valid_placement(component: impl Into<String>) -> Self {
        Self::NoValidPlacement {
            component: component.into(),
        }
    }

    pub fn no_opposite_edge(component: impl Into<String>) -> Self {
        Self::NoOppositeEdgeCandidate {
            component: component.into(),
        }
    }

    /// Name of the component the failure refers to
    pub fn component(&self) -> &str {
        match self {
            Self::NoValidPlacement { component } => component,
            Self::NoOppositeEdgeCandidate { component } => component,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PlacementError::no_valid_placement("crystal");
        assert!(err.to_string().contains("crystal"));
        assert_eq!(err.component(), "crystal");

        let err = PlacementError::no_opposite_edge("mb2");
        assert!(err.to_string().contains("opposite-edge"));
    }
}
