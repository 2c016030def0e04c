//! This crate contains the parts of the OoT randomizer's world model that the collectible flag table is built from.
//!
//! The entry point is [`Location`]. Location lists are usually deserialized from JSON, see [`model::PlacementSpec`] for the accepted shapes of the `default` field.

#![deny(rust_2018_idioms, unused, unused_import_braces, unused_lifetimes, unused_qualifications, warnings)]
#![forbid(unsafe_code)]

use serde::{
    Deserialize,
    Serialize,
};
pub use crate::model::{
    CollectibleKind,
    LocationKind,
    Placement,
    PlacementSpec,
};

pub mod model;

/// A location as defined in the randomizer's location list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Location {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    /// The scene ID, or `None` for locations that aren't tied to a single scene.
    #[serde(default)]
    pub scene: Option<u8>,
    /// The actor identity used to track this location, if any.
    #[serde(default)]
    pub default: Option<PlacementSpec>,
}

impl Location {
    /// The placement this location is tracked under if it has a collectible flag, i.e. if it's one of the [`CollectibleKind`]s and has a default placement.
    pub fn collectible_placement(&self) -> Option<&PlacementSpec> {
        if self.kind.is_collectible() { self.default.as_ref() } else { None }
    }
}
