// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON and binary serialization for plans, graphs and buildings
//!
//! JSON is meant for inspection and interchange of finite data: serde_json
//! writes NaN and Infinity as `null` and cannot read them back. The binary
//! encoding (bincode) is byte-exact and keeps every f64 bit pattern, so it
//! is the format to use when plans may carry non-finite fields.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Serializes a value to a compact JSON string.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Serializes a value to an indented JSON string.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes a value from JSON.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Serializes a value to the binary encoding.
pub fn to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(bincode::serialize(value)?)
}

/// Deserializes a value from the binary encoding.
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(bincode::deserialize(bytes)?)
}
