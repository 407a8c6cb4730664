//! Component descriptors and placed-component records
//!
//! A [`Component`] carries size and constraints but no position; only a
//! successful placement produces a [`PlacedComponent`]. Components are
//! never repositioned after that.

use super::geometry::{Point, Rect};

/// Proximity constraint: the component's center must stay within
/// `max_distance` of the named target component's center.
///
/// The constraint is enforceable only once the target has been placed;
/// against an unplaced target it is silently treated as satisfied.
#[derive(Debug, Clone, PartialEq)]
pub struct Proximity {
    pub target: String,
    pub max_distance: f64,
}

/// An unplaced component: identity, footprint and constraints
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub must_be_on_edge: bool,
    pub proximity: Option<Proximity>,
}

impl Component {
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            must_be_on_edge: false,
            proximity: None,
        }
    }

    /// Require the component to touch at least one board edge
    pub fn on_edge(mut self) -> Self {
        self.must_be_on_edge = true;
        self
    }

    /// Require the component's center within `max_distance` of the
    /// named target's center
    pub fn near(mut self, target: impl Into<String>, max_distance: f64) -> Self {
        self.proximity = Some(Proximity {
            target: target.into(),
            max_distance,
        });
        self
    }

    /// Footprint rectangle at a candidate position
    pub fn rect_at(&self, x: i32, y: i32) -> Rect {
        Rect::new(x, y, self.width, self.height)
    }
}

/// A component the engine has committed to the board
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedComponent {
    pub component: Component,
    pub position: Point,
}

impl PlacedComponent {
    pub fn name(&self) -> &str {
        &self.component.name
    }

    /// Occupied rectangle on the board
    pub fn rect(&self) -> Rect {
        self.component
            .rect_at(self.position.x, self.position.y)
    }
}
