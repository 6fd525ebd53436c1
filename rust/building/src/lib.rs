// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # ResPlan Building
//!
//! Multi-storey building generation from a pool of single-floor plans.
//!
//! Every plan is copied and anchored on its front door, then floors are
//! stacked largest first. A storey accepts a plan (possibly turned by a
//! multiple of 90 degrees) only when it lies over the storey below; each
//! floor gets a synthesized stair core next to the front door.
//!
//! ```rust,ignore
//! use resplan_building::generate_building;
//!
//! let building = generate_building(&plans, 5);
//! for floor in &building.floors {
//!     println!("floor {}: plan {}", floor.floor_number, floor.plan.id);
//! }
//! ```

pub mod compatibility;
pub mod config;
pub mod generator;
pub mod normalize;

pub use compatibility::{filter_compatible, is_plan_compatible};
pub use config::{FitTest, StackingConfig};
pub use generator::{generate_building, generate_building_with_config, Rotation};
pub use normalize::{normalize_plan, stair_core};
