//! Encodes the offsets of each room setup's flags.
//!
//! The flags themselves live in a flat bit array which is allocated by the ROM patch, with each room setup owning enough whole bytes for its highest flag.
//! The directory has the following format:
//!
//! ```text
//! scene count: u8
//! for each scene:
//!     scene ID: u8
//!     room setup count: u8
//!     for each room setup:
//!         room setup: u8
//!         offset into the flag array, in bytes: u16 (big endian)
//! ```

use {
    log::debug,
    crate::{
        Error,
        Field,
        OverflowPolicy,
        SceneFlagTable,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    pub bytes: Vec<u8>,
    /// The total size of the flag array.
    pub num_flag_bytes: u32,
}

/// The number of bytes needed to store flags `0..=max_flag`.
pub fn flag_bytes(max_flag: u8) -> u32 {
    (u32::from(max_flag) + 1).div_ceil(8)
}

pub fn encode(scene_flags: &SceneFlagTable, policy: OverflowPolicy) -> Result<Directory, Error> {
    let mut num_flag_bytes = 0u32;
    let mut bytes = Vec::with_capacity(1 + scene_flags.values().map(|room_setups| 2 + 3 * room_setups.len()).sum::<usize>());
    // at most 101 scenes, see table::SCENES
    bytes.push(scene_flags.len() as u8);
    for (&scene, room_setups) in scene_flags {
        bytes.push(scene);
        bytes.push(policy.fit(Field::RoomCount, room_setups.len() as u32, 8)? as u8);
        for (&room_setup, &max_flag) in room_setups {
            bytes.push(policy.fit(Field::RoomSetup, room_setup.0.into(), 8)? as u8);
            bytes.extend_from_slice(&(policy.fit(Field::Offset, num_flag_bytes, 16)? as u16).to_be_bytes());
            num_flag_bytes += flag_bytes(max_flag);
        }
        debug!("scene 0x{:02x}: flags end at byte 0x{:04x}", scene, num_flag_bytes);
    }
    Ok(Directory { bytes, num_flag_bytes })
}
