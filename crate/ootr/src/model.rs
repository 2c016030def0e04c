use {
    std::{
        fmt,
        str::FromStr,
    },
    enum_iterator::Sequence,
    serde::{
        Deserialize,
        Serialize,
    },
    serde_plain::{
        derive_deserialize_from_fromstr,
        derive_serialize_from_display,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocationKind {
    Collectible(CollectibleKind),
    /// Any location type which isn't tracked using collectible flags, e.g. `"Chest"` or `"Event"`.
    Other(String),
}

impl LocationKind {
    pub fn is_collectible(&self) -> bool {
        matches!(self, Self::Collectible(_))
    }
}

impl FromStr for LocationKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        Ok(s.parse::<CollectibleKind>().map_or_else(|()| Self::Other(s.to_owned()), Self::Collectible))
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collectible(kind) => write!(f, "{}", kind),
            Self::Other(kind) => f.write_str(kind),
        }
    }
}

derive_deserialize_from_fromstr!(LocationKind, "location type");
derive_serialize_from_display!(LocationKind);

/// The location types whose collected state is stored in the collectible flag table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum CollectibleKind {
    Freestanding,
    Pot,
    FlyingPot,
    Crate,
    SmallCrate,
    Beehive,
    RupeeTower,
    SilverRupee,
}

impl CollectibleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Freestanding => "Freestanding",
            Self::Pot => "Pot",
            Self::FlyingPot => "FlyingPot",
            Self::Crate => "Crate",
            Self::SmallCrate => "SmallCrate",
            Self::Beehive => "Beehive",
            Self::RupeeTower => "RupeeTower",
            Self::SilverRupee => "SilverRupee",
        }
    }
}

impl FromStr for CollectibleKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        Ok(match s {
            "Freestanding" => Self::Freestanding,
            "Pot" => Self::Pot,
            "FlyingPot" => Self::FlyingPot,
            "Crate" => Self::Crate,
            "SmallCrate" => Self::SmallCrate,
            "Beehive" => Self::Beehive,
            "RupeeTower" => Self::RupeeTower,
            "SilverRupee" => Self::SilverRupee,
            _ => return Err(()),
        })
    }
}

impl fmt::Display for CollectibleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

derive_deserialize_from_fromstr!(CollectibleKind, "collectible location type");
derive_serialize_from_display!(CollectibleKind);

/// The identity of a collectible actor: the room it's in, the scene setup it's loaded for, and its flag within that room and setup.
///
/// Represented in JSON as a `[room, setup, flag]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "(u8, u8, u8)", into = "(u8, u8, u8)")]
pub struct Placement {
    pub room: u8,
    pub setup: u8,
    pub flag: u8,
}

impl From<(u8, u8, u8)> for Placement {
    fn from((room, setup, flag): (u8, u8, u8)) -> Self {
        Self { room, setup, flag }
    }
}

impl From<Placement> for (u8, u8, u8) {
    fn from(Placement { room, setup, flag }: Placement) -> Self {
        (room, setup, flag)
    }
}

/// The `default` field of a location.
///
/// Some collectibles appear as different actors depending on the room or setup they're loaded in, e.g. a pot that's visible from two rooms.
/// In JSON these are written as a list of placements, the first of which is the primary one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawPlacementSpec", into = "RawPlacementSpec")]
pub enum PlacementSpec {
    Single(Placement),
    WithAlternates {
        primary: Placement,
        alternates: Vec<Placement>,
    },
}

impl PlacementSpec {
    pub fn primary(&self) -> Placement {
        match *self {
            Self::Single(placement) | Self::WithAlternates { primary: placement, .. } => placement,
        }
    }

    pub fn alternates(&self) -> &[Placement] {
        match self {
            Self::Single(_) => &[],
            Self::WithAlternates { alternates, .. } => alternates,
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum RawPlacementSpec {
    Single(Placement),
    List(Vec<Placement>),
}

impl TryFrom<RawPlacementSpec> for PlacementSpec {
    type Error = &'static str;

    fn try_from(raw: RawPlacementSpec) -> Result<Self, &'static str> {
        Ok(match raw {
            RawPlacementSpec::Single(placement) => Self::Single(placement),
            RawPlacementSpec::List(placements) => {
                let mut placements = placements.into_iter();
                let primary = placements.next().ok_or("empty list of placements")?;
                let alternates = placements.collect::<Vec<_>>();
                if alternates.is_empty() {
                    Self::Single(primary)
                } else {
                    Self::WithAlternates { primary, alternates }
                }
            }
        })
    }
}

impl From<PlacementSpec> for RawPlacementSpec {
    fn from(spec: PlacementSpec) -> Self {
        match spec {
            PlacementSpec::Single(placement) => Self::Single(placement),
            PlacementSpec::WithAlternates { primary, alternates } => Self::List(Some(primary).into_iter().chain(alternates).collect()),
        }
    }
}
