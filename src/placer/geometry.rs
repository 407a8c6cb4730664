//! Geometry primitives for the placement engine
//!
//! All coordinates are integer board units with the origin (0,0) at the
//! top-left corner of the board.

/// A point in board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate (exclusive)
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate (exclusive)
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Area in square board units
    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    /// Center point with half-extents truncated by integer division.
    ///
    /// Odd-sided rectangles bias toward the top-left. Distance checks
    /// depend on this truncation, so it must not be replaced with a
    /// floating-point midpoint.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Strict interior overlap; rectangles that merely share an edge do
    /// not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// True when `other` lies entirely within this rectangle, judged on
    /// all four bounds. A rectangle contains itself.
    pub fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }

    /// Check if this rectangle covers a unit cell at (x, y)
    pub fn covers_cell(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Euclidean distance between the two rectangles' truncated centers
    pub fn center_distance(&self, other: &Rect) -> f64 {
        let a = self.center();
        let b = other.center();
        let dx = f64::from(a.x - b.x);
        let dy = f64::from(a.y - b.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// The placement universe: a fixed-size board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Rectangle covering the whole board
    pub fn as_rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// True when the rectangle lies fully within board bounds
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.x >= 0 && rect.y >= 0 && rect.right() <= self.width && rect.bottom() <= self.height
    }

    /// True when the rectangle touches at least one board boundary
    pub fn on_edge(&self, rect: &Rect) -> bool {
        rect.x == 0 || rect.y == 0 || rect.right() == self.width || rect.bottom() == self.height
    }
}
