//! Builds the collectible flag table, which the randomizer's ROM patch uses to store the collected state of pots, crates, beehives and other small collectibles.
//!
//! The table is built in three steps:
//!
//! 1. [`table::collectible_flag_table`] groups the locations by scene and room setup and finds the highest flag used in each room setup.
//! 2. [`directory::encode`] lays out the flags of each room setup in a flat bit array and encodes the offsets into that array.
//! 3. [`alt::encode`] encodes overrides for collectibles which can appear under more than one actor identity.
//!
//! [`build`] runs all three.

#![deny(rust_2018_idioms, unused, unused_crate_dependencies, unused_import_braces, unused_lifetimes, unused_qualifications, warnings)]
#![forbid(unsafe_code)]

use {
    std::fmt,
    log::info,
    serde::{
        Deserialize,
        Serialize,
    },
    ootr::Location,
};
pub use crate::table::{
    AltEntry,
    RoomSetup,
    SceneFlagTable,
};

pub mod alt;
pub mod directory;
pub mod table;

/// What to do with a value that doesn't fit into the field it's encoded as.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OverflowPolicy {
    /// Fail with [`Error::OutOfRange`].
    #[default]
    Reject,
    /// Keep only the low bits of the value. This reproduces the table the randomizer itself generates byte for byte, even for invalid input.
    Truncate,
}

impl OverflowPolicy {
    /// Checks that `value` fits into `bits` bits, masking off the excess bits if the policy allows it.
    pub fn fit(self, field: Field, value: u32, bits: u8) -> Result<u32, Error> {
        let mask = (1u32 << bits) - 1;
        if value <= mask {
            Ok(value)
        } else {
            match self {
                Self::Reject => Err(Error::OutOfRange { field, value, bits }),
                Self::Truncate => Ok(value & mask),
            }
        }
    }
}

/// A field of the collectible flag table or its inputs, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Room,
    Setup,
    RoomSetup,
    RoomCount,
    Offset,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room => write!(f, "room"),
            Self::Setup => write!(f, "scene setup"),
            Self::RoomSetup => write!(f, "room setup"),
            Self::RoomCount => write!(f, "room setup count"),
            Self::Offset => write!(f, "flag byte offset"),
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{field} {value} does not fit into {bits} bits")]
    OutOfRange {
        field: Field,
        value: u32,
        bits: u8,
    },
}

/// The encoded collectible flag table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    /// Maps each scene and room setup to the offset of its flags, see [`directory::encode`].
    pub directory: Vec<u8>,
    /// The number of bytes which must be allocated for the flags themselves.
    pub num_flag_bytes: u32,
    /// See [`alt::encode`].
    pub alt_overrides: Vec<u8>,
}

pub fn build(locations: &[Location], policy: OverflowPolicy) -> Result<Tables, Error> {
    let (scene_flags, alt_list) = table::collectible_flag_table(locations, policy)?;
    let directory = directory::encode(&scene_flags, policy)?;
    let alt_overrides = alt::encode(&alt_list, policy)?;
    info!(
        "collectible flag table: {} scenes, {} flag bytes, {} alternate overrides",
        scene_flags.len(), directory.num_flag_bytes, alt_overrides.len() / alt::RECORD_LEN,
    );
    Ok(Tables {
        directory: directory.bytes,
        num_flag_bytes: directory.num_flag_bytes,
        alt_overrides,
    })
}
