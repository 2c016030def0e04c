//! Groups collectible locations by scene and room setup.

use {
    std::ops::RangeInclusive,
    indexmap::IndexMap,
    log::debug,
    serde::Serialize,
    ootr::{
        Location,
        Placement,
    },
    crate::{
        Error,
        Field,
        OverflowPolicy,
    },
};

/// The scene IDs which can contain collectibles. Other scenes are never included in the table.
pub const SCENES: RangeInclusive<u8> = 0..=100;

/// A room number combined with a scene setup number, as `room + (setup << 6)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RoomSetup(pub u16);

impl RoomSetup {
    pub fn new(room: u8, setup: u8) -> Self {
        Self(u16::from(room) + (u16::from(setup) << 6))
    }

    fn of(placement: Placement, policy: OverflowPolicy) -> Result<Self, Error> {
        // the key itself is built from the unmasked values, Truncate only affects how it's written
        policy.fit(Field::Room, placement.room.into(), 6)?;
        policy.fit(Field::Setup, placement.setup.into(), 6)?;
        Ok(Self::new(placement.room, placement.setup))
    }
}

/// Maps scene IDs to the highest flag used in each of their room setups.
///
/// Both levels keep insertion order, which determines the layout of the flags. Scenes are inserted in ascending order, room setups in the order they're first seen in the location list.
pub type SceneFlagTable = IndexMap<u8, IndexMap<RoomSetup, u8>>;

/// A collectible which can also appear as the actor identified by `alt`, which should count as the one identified by `primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AltEntry<'a> {
    pub location: &'a Location,
    pub alt: Placement,
    pub primary: Placement,
}

/// Builds the [`SceneFlagTable`] and the list of alternate placements.
///
/// Only locations of one of the [`ootr::CollectibleKind`]s in one of the [`SCENES`] are considered.
/// Alternates are listed by scene, then in location list order.
pub fn collectible_flag_table(locations: &[Location], policy: OverflowPolicy) -> Result<(SceneFlagTable, Vec<AltEntry<'_>>), Error> {
    let mut scene_flags = SceneFlagTable::default();
    let mut alt_list = Vec::default();
    for scene in SCENES {
        let mut room_setups = IndexMap::<RoomSetup, u8>::default();
        for location in locations.iter().filter(|location| location.scene == Some(scene)) {
            let Some(spec) = location.collectible_placement() else { continue };
            let primary = spec.primary();
            alt_list.extend(spec.alternates().iter().map(|&alt| AltEntry { location, alt, primary }));
            let max_flag = room_setups.entry(RoomSetup::of(primary, policy)?).or_insert(primary.flag);
            *max_flag = (*max_flag).max(primary.flag);
        }
        if room_setups.is_empty() { continue }
        debug!("scene 0x{:02x}: {} room setups", scene, room_setups.len());
        scene_flags.insert(scene, room_setups);
    }
    Ok((scene_flags, alt_list))
}

#[cfg(test)]
mod tests {
    use {
        ootr::{
            CollectibleKind,
            LocationKind,
            PlacementSpec,
        },
        super::*,
    };

    fn placement(room: u8, setup: u8, flag: u8) -> Placement {
        Placement { room, setup, flag }
    }

    fn location(kind: &str, scene: Option<u8>, default: PlacementSpec) -> Location {
        Location {
            name: format!("{} in {:?}", kind, scene),
            kind: kind.parse().expect("location type parsing is infallible"),
            scene,
            default: Some(default),
        }
    }

    #[test]
    fn single_pot() -> Result<(), Error> {
        let locations = [location("Pot", Some(5), PlacementSpec::Single(placement(3, 1, 10)))];
        let (scene_flags, alt_list) = collectible_flag_table(&locations, OverflowPolicy::Reject)?;
        assert_eq!(scene_flags.len(), 1);
        assert_eq!(scene_flags[&5u8].iter().collect::<Vec<_>>(), [(&RoomSetup(67), &10)]);
        assert!(alt_list.is_empty());
        Ok(())
    }

    #[test]
    fn max_flag_per_room_setup() -> Result<(), Error> {
        let locations = [
            location("Crate", Some(2), PlacementSpec::Single(placement(1, 0, 4))),
            location("SmallCrate", Some(2), PlacementSpec::Single(placement(0, 0, 2))),
            location("Beehive", Some(2), PlacementSpec::Single(placement(1, 0, 12))),
            location("RupeeTower", Some(2), PlacementSpec::Single(placement(1, 0, 7))),
            location("SilverRupee", Some(2), PlacementSpec::Single(placement(1, 2, 0))),
        ];
        let (scene_flags, _) = collectible_flag_table(&locations, OverflowPolicy::Reject)?;
        assert_eq!(scene_flags[&2u8].iter().map(|(&room_setup, &flag)| (room_setup, flag)).collect::<Vec<_>>(), [
            (RoomSetup(1), 12),
            (RoomSetup(0), 2),
            (RoomSetup(129), 0),
        ]);
        Ok(())
    }

    #[test]
    fn only_collectibles_in_known_scenes() -> Result<(), Error> {
        let locations = [
            location("Chest", Some(3), PlacementSpec::Single(placement(0, 0, 1))),
            location("GS Token", Some(3), PlacementSpec::Single(placement(0, 0, 1))),
            location("Pot", Some(101), PlacementSpec::Single(placement(0, 0, 1))),
            location("Pot", Some(0xff), PlacementSpec::Single(placement(0, 0, 1))),
            location("Pot", None, PlacementSpec::WithAlternates { primary: placement(0, 0, 1), alternates: vec![placement(1, 0, 1)] }),
            location("FlyingPot", Some(100), PlacementSpec::Single(placement(4, 0, 1))),
            Location { name: format!("Freestanding without placement"), kind: LocationKind::Collectible(CollectibleKind::Freestanding), scene: Some(7), default: None },
        ];
        let (scene_flags, alt_list) = collectible_flag_table(&locations, OverflowPolicy::Reject)?;
        assert_eq!(scene_flags.keys().copied().collect::<Vec<_>>(), [100]);
        assert!(scene_flags.values().all(|room_setups| !room_setups.is_empty()));
        assert!(alt_list.is_empty());
        Ok(())
    }

    #[test]
    fn alternates_by_scene() -> Result<(), Error> {
        let locations = [
            location("Pot", Some(9), PlacementSpec::WithAlternates { primary: placement(0, 0, 1), alternates: vec![placement(1, 0, 1), placement(2, 0, 3)] }),
            location("Freestanding", Some(2), PlacementSpec::WithAlternates { primary: placement(0, 0, 5), alternates: vec![placement(1, 0, 5)] }),
        ];
        let (scene_flags, alt_list) = collectible_flag_table(&locations, OverflowPolicy::Reject)?;
        assert_eq!(scene_flags.keys().copied().collect::<Vec<_>>(), [2, 9]);
        assert_eq!(alt_list, [
            AltEntry { location: &locations[1], alt: placement(1, 0, 5), primary: placement(0, 0, 5) },
            AltEntry { location: &locations[0], alt: placement(1, 0, 1), primary: placement(0, 0, 1) },
            AltEntry { location: &locations[0], alt: placement(2, 0, 3), primary: placement(0, 0, 1) },
        ]);
        // alternates don't reserve flags
        assert_eq!(scene_flags[&9u8].len(), 1);
        Ok(())
    }

    #[test]
    fn oversized_room() {
        let locations = [location("Pot", Some(5), PlacementSpec::Single(placement(64, 0, 0)))];
        assert_eq!(
            collectible_flag_table(&locations, OverflowPolicy::Reject).map(|(scene_flags, _)| scene_flags),
            Err(Error::OutOfRange { field: Field::Room, value: 64, bits: 6 }),
        );
        let (scene_flags, _) = collectible_flag_table(&locations, OverflowPolicy::Truncate).expect("truncation never fails");
        assert_eq!(scene_flags[&5u8].keys().copied().collect::<Vec<_>>(), [RoomSetup(64)]);
    }
}
