// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry category names used across plans, graphs and buildings

pub const LIVING: &str = "living";
pub const KITCHEN: &str = "kitchen";
pub const BEDROOM: &str = "bedroom";
pub const BATHROOM: &str = "bathroom";
pub const BALCONY: &str = "balcony";
pub const DOOR: &str = "door";
pub const WINDOW: &str = "window";
pub const WALL: &str = "wall";
pub const FRONT_DOOR: &str = "front_door";

// Circulation categories; `stairs` is also what the stacker synthesizes.
pub const STAIRS: &str = "stairs";
pub const ELEVATOR: &str = "elevator";
pub const FOYER: &str = "foyer";
pub const CORRIDOR: &str = "corridor";

/// Room categories that become graph nodes, in node-creation order
pub const ROOM_CATEGORIES: [&str; 5] = [LIVING, KITCHEN, BEDROOM, BATHROOM, BALCONY];

/// Categories that anchor vertical circulation, in priority order
pub const VERTICAL_ANCHOR_CATEGORIES: [&str; 3] = [STAIRS, ELEVATOR, FOYER];
