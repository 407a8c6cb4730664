//! The rectangle-placement core
//!
//! This module owns the free-space bookkeeping (Max-Rects style), the
//! competing placement heuristics, the constraint validator and the
//! paired opposite-edge routine. Everything here is synchronous and
//! deterministic: the free pool's insertion order is the only tie-break
//! source, so identical inputs and call order reproduce identical
//! placements.
//!
//! The packing is heuristic and first-fit within each scoring rule, not
//! exhaustive-search optimal; there is no backtracking and no rotation.

pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod paired;
pub mod pool;
pub mod types;
pub mod validator;

pub use config::PlacerConfig;
pub use engine::{Heuristic, Placer};
pub use error::PlacementError;
pub use geometry::{Board, Point, Rect};
pub use paired::Edge;
pub use pool::FreeRectPool;
pub use types::{Component, PlacedComponent, Proximity};
