// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Adjacency tolerances

use serde::{Deserialize, Serialize};

/// Proximity tolerances for adjacency detection
///
/// Rooms in the source data are drawn with a gap the thickness of a wall
/// between them, so every proximity test expands geometry by a buffer
/// derived from the wall width.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjacencyConfig {
    /// Nominal wall thickness in plan units
    pub wall_width: f64,
    /// Fraction of the wall width used as buffer distance
    pub buffer_factor: f64,
    /// Lower bound on the buffer distance
    pub min_buffer: f64,
}

impl Default for AdjacencyConfig {
    fn default() -> Self {
        Self {
            wall_width: 0.1,
            buffer_factor: 0.75,
            min_buffer: 0.01,
        }
    }
}

impl AdjacencyConfig {
    /// Load overrides from `RESPLAN_WALL_WIDTH` and `RESPLAN_BUFFER_FACTOR`,
    /// keeping defaults for unset or unparseable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            wall_width: env_f64("RESPLAN_WALL_WIDTH").unwrap_or(defaults.wall_width),
            buffer_factor: env_f64("RESPLAN_BUFFER_FACTOR").unwrap_or(defaults.buffer_factor),
            min_buffer: defaults.min_buffer,
        }
    }

    /// Effective buffer distance: `max(wall_width * buffer_factor, min_buffer)`
    pub fn buffer_distance(&self) -> f64 {
        (self.wall_width * self.buffer_factor).max(self.min_buffer)
    }
}

fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key).ok()?.trim().parse().ok()
}
