//! Board zones and per-zone storage.
//!
//! ## Zone
//!
//! The fixed set of board compartments. `Zone::ALL` is the display order
//! used by the UI and by image export.
//!
//! ## ZoneMap
//!
//! Exactly one value per zone, backed by an array for O(1) access.
//! Serializes as a map keyed by the lowercase zone names and refuses to
//! deserialize when a zone is missing or an unknown key is present.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::BoardError;

/// A named compartment of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Hand,
    Field,
    Graveyard,
    Banished,
    Extra,
}

impl Zone {
    /// Number of zones on the board.
    pub const COUNT: usize = 5;

    /// All zones in display order.
    pub const ALL: [Zone; Zone::COUNT] = [
        Zone::Hand,
        Zone::Field,
        Zone::Graveyard,
        Zone::Banished,
        Zone::Extra,
    ];

    /// Position of this zone in `Zone::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Zone::Hand => 0,
            Zone::Field => 1,
            Zone::Graveyard => 2,
            Zone::Banished => 3,
            Zone::Extra => 4,
        }
    }

    /// Lowercase name, as shown in zone headings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Zone::Hand => "hand",
            Zone::Field => "field",
            Zone::Graveyard => "graveyard",
            Zone::Banished => "banished",
            Zone::Extra => "extra",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Zone {
    type Err = BoardError;

    /// Parse a zone from its lowercase name.
    ///
    /// ```
    /// use solo_board::core::Zone;
    ///
    /// assert_eq!("graveyard".parse::<Zone>().unwrap(), Zone::Graveyard);
    /// assert!("deck".parse::<Zone>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::ALL
            .into_iter()
            .find(|zone| zone.name() == s)
            .ok_or_else(|| BoardError::UnknownZone(s.to_string()))
    }
}

/// One value per zone with O(1) access.
///
/// ## Example
///
/// ```
/// use solo_board::core::{Zone, ZoneMap};
///
/// let mut counts: ZoneMap<u32> = ZoneMap::with_default();
/// counts[Zone::Field] += 2;
///
/// assert_eq!(counts[Zone::Field], 2);
/// assert_eq!(counts[Zone::Hand], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZoneMap<T> {
    data: [T; Zone::COUNT],
}

impl<T> ZoneMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Zone) -> T) -> Self {
        Self {
            data: Zone::ALL.map(factory),
        }
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a zone's value.
    #[must_use]
    pub fn get(&self, zone: Zone) -> &T {
        &self.data[zone.index()]
    }

    /// Get a mutable reference to a zone's value.
    pub fn get_mut(&mut self, zone: Zone) -> &mut T {
        &mut self.data[zone.index()]
    }

    /// Iterate over (Zone, &T) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Zone, &T)> {
        Zone::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Zone, &mut T) pairs in display order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Zone, &mut T)> {
        Zone::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Transform every value, keeping the zone association.
    pub fn map<U>(&self, mut f: impl FnMut(Zone, &T) -> U) -> ZoneMap<U> {
        ZoneMap {
            data: Zone::ALL.map(|zone| f(zone, self.get(zone))),
        }
    }
}

impl<T: Default> Default for ZoneMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<Zone> for ZoneMap<T> {
    type Output = T;

    fn index(&self, zone: Zone) -> &T {
        self.get(zone)
    }
}

impl<T> IndexMut<Zone> for ZoneMap<T> {
    fn index_mut(&mut self, zone: Zone) -> &mut T {
        self.get_mut(zone)
    }
}

/// Wire shape: every zone is a required field, nothing else is accepted.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ZoneFields<T> {
    hand: T,
    field: T,
    graveyard: T,
    banished: T,
    extra: T,
}

impl<T: Serialize> Serialize for ZoneMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let [hand, field, graveyard, banished, extra] = &self.data;
        ZoneFields {
            hand,
            field,
            graveyard,
            banished,
            extra,
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ZoneMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = ZoneFields::<T>::deserialize(deserializer)?;
        Ok(Self {
            data: [
                fields.hand,
                fields.field,
                fields.graveyard,
                fields.banished,
                fields.extra,
            ],
        })
    }
}
