//! Configuration for the placement engine

/// Configuration options for placement
#[derive(Debug, Clone)]
pub struct PlacerConfig {
    /// Coordinate step along the free axis when scanning opposite-edge
    /// candidates during paired placement. Must be positive.
    pub pair_scan_step: i32,
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self { pair_scan_step: 5 }
    }
}

impl PlacerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opposite-edge scan step
    pub fn with_pair_scan_step(mut self, step: i32) -> Self {
        self.pair_scan_step = step;
        self
    }
}
