// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stacking parameters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use resplan_core::{Envelope, Error, Result};

/// How a candidate floor is compared against the floor below it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitTest {
    /// Bounding envelopes of both plans
    #[default]
    Envelope,
    /// Unioned areal footprints of both plans
    Footprint,
}

impl FitTest {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitTest::Envelope => "envelope",
            FitTest::Footprint => "footprint",
        }
    }
}

impl fmt::Display for FitTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitTest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "envelope" => Ok(FitTest::Envelope),
            "footprint" => Ok(FitTest::Footprint),
            other => Err(Error::InvalidConfig(format!("unknown fit test: {}", other))),
        }
    }
}

/// Building stacker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackingConfig {
    /// Share of a candidate that must lie over the floor below
    /// (strictly greater than this value)
    pub coverage_threshold: f64,
    /// Stair core rectangle in plan-local coordinates
    pub stair_core: Envelope,
    pub fit_test: FitTest,
}

impl Default for StackingConfig {
    fn default() -> Self {
        Self {
            coverage_threshold: 0.95,
            stair_core: Envelope::new(-2.0, -4.0, 2.0, 0.0),
            fit_test: FitTest::Envelope,
        }
    }
}

impl StackingConfig {
    /// Load overrides from `RESPLAN_COVERAGE_THRESHOLD` and
    /// `RESPLAN_FIT_TEST`, keeping defaults for unset or unparseable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            coverage_threshold: std::env::var("RESPLAN_COVERAGE_THRESHOLD")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.coverage_threshold),
            stair_core: defaults.stair_core,
            fit_test: std::env::var("RESPLAN_FIT_TEST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.fit_test),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.coverage_threshold > 0.0 && self.coverage_threshold <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "coverage threshold must be in (0, 1], got {}",
                self.coverage_threshold
            )));
        }
        if !self.stair_core.is_valid() || self.stair_core.area() <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "stair core must be a finite non-empty rectangle, got {:?}",
                self.stair_core
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = StackingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fit_test, FitTest::Envelope);
        assert_eq!(config.stair_core, Envelope::new(-2.0, -4.0, 2.0, 0.0));
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        for threshold in [0.0, -0.5, 1.5, f64::NAN] {
            let config = StackingConfig {
                coverage_threshold: threshold,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        }
    }

    #[test]
    fn rejects_degenerate_stair_core() {
        let config = StackingConfig {
            stair_core: Envelope::new(0.0, 0.0, 0.0, 4.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = StackingConfig {
            stair_core: Envelope::new(0.0, 0.0, f64::INFINITY, 4.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    // Only test in this crate touching these variables.
    #[test]
    fn env_overrides_with_fallback() {
        std::env::set_var("RESPLAN_COVERAGE_THRESHOLD", "0.9");
        std::env::set_var("RESPLAN_FIT_TEST", "footprint");
        let config = StackingConfig::from_env();
        assert_eq!(config.coverage_threshold, 0.9);
        assert_eq!(config.fit_test, FitTest::Footprint);
        assert_eq!(config.stair_core, Envelope::new(-2.0, -4.0, 2.0, 0.0));

        std::env::set_var("RESPLAN_COVERAGE_THRESHOLD", "most of it");
        std::env::set_var("RESPLAN_FIT_TEST", "polygon");
        let config = StackingConfig::from_env();
        assert_eq!(config.coverage_threshold, 0.95);
        assert_eq!(config.fit_test, FitTest::Envelope);

        std::env::remove_var("RESPLAN_COVERAGE_THRESHOLD");
        std::env::remove_var("RESPLAN_FIT_TEST");
        assert_eq!(StackingConfig::from_env().coverage_threshold, 0.95);
    }

    #[test]
    fn fit_test_parsing() {
        assert_eq!("Footprint".parse::<FitTest>().unwrap(), FitTest::Footprint);
        assert_eq!(" envelope ".parse::<FitTest>().unwrap(), FitTest::Envelope);
        assert!("polygon".parse::<FitTest>().is_err());
    }
}
