//! Encodes overrides which make a collectible's alternate actor identities share its collected state.
//!
//! Each alternate placement is encoded as two 4-byte override keys, the alternate one followed by the primary one:
//!
//! ```text
//! scene ID: u8
//! override type: u8 (always 0x06)
//! placement: u16 (big endian), setup in bits 14–15, room in bits 8–13, flag in bits 0–7
//! ```

use {
    log::debug,
    ootr::Placement,
    crate::{
        AltEntry,
        Error,
        Field,
        OverflowPolicy,
    },
};

/// The override type understood by the ROM patch for collectible overrides.
pub const OVERRIDE_TYPE: u8 = 0x06;
/// The number of bytes each alternate placement is encoded as.
pub const RECORD_LEN: usize = 8;

/// Packs a placement as `(room << 8) + (setup << 14) + flag`.
///
/// Note that this is a different layout from the [`RoomSetup`](crate::RoomSetup) keys in the directory.
pub fn pack(placement: Placement, policy: OverflowPolicy) -> Result<u16, Error> {
    let Placement { room, setup, flag } = placement;
    policy.fit(Field::Room, room.into(), 6)?;
    policy.fit(Field::Setup, setup.into(), 2)?;
    // with Truncate, oversized rooms spill into the setup bits before the whole thing is cut to 16 bits
    Ok(((u32::from(room) << 8) + (u32::from(setup) << 14) + u32::from(flag)) as u16)
}

fn override_key(scene: u8, placement: Placement, policy: OverflowPolicy) -> Result<[u8; 4], Error> {
    let [hi, lo] = pack(placement, policy)?.to_be_bytes();
    Ok([scene, OVERRIDE_TYPE, hi, lo])
}

pub fn encode(alt_list: &[AltEntry<'_>], policy: OverflowPolicy) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::with_capacity(RECORD_LEN * alt_list.len());
    for &AltEntry { location, alt, primary } in alt_list {
        let Some(scene) = location.scene else {
            debug!("skipping alternate placement {:?} of {}: location has no scene", alt, location.name);
            continue
        };
        bytes.extend_from_slice(&override_key(scene, alt, policy)?);
        bytes.extend_from_slice(&override_key(scene, primary, policy)?);
    }
    Ok(bytes)
}
