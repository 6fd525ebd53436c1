// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # ResPlan Core
//!
//! Shared data model for turning labeled floor-plan geometry into room
//! adjacency graphs and stacked buildings.
//!
//! - [`Plan`]: category name -> ordered geometries, with tight bounds
//! - [`Graph`]: rooms and front doors as nodes, typed undirected edges
//! - [`Building`]: floors of transformed plan copies plus synthesized
//!   structures such as the stair core
//!
//! Geometry is `geo::Geometry<f64>`; the [`GeometryKernel`] trait exposes
//! the handful of spatial operations the algorithms rely on.

pub mod building;
pub mod category;
pub mod composite;
pub mod envelope;
pub mod error;
pub mod graph;
pub mod kernel;
pub mod plan;
pub mod serialization;

pub use building::{Building, BuildingFloor};
pub use composite::{category_color, Composite, RenderLayer, DRAW_ORDER};
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use graph::{Edge, EdgeType, Graph, Node};
pub use kernel::GeometryKernel;
pub use plan::Plan;

pub use geo;
