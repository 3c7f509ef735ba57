use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::error::MapError;
use crate::models::{Coordinates, Direction, RoomInfo};

pub const DEFAULT_ROOM_COUNT: u32 = 500;

/// One slot of the exploration map. `None` means not yet discovered.
///
/// Every field is written out, as `null` when unset, and all nine must be
/// present when a map is loaded back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRoom {
    #[serde(deserialize_with = "required")]
    pub n: Option<u32>,
    #[serde(deserialize_with = "required")]
    pub s: Option<u32>,
    #[serde(deserialize_with = "required")]
    pub e: Option<u32>,
    #[serde(deserialize_with = "required")]
    pub w: Option<u32>,
    #[serde(deserialize_with = "required")]
    pub title: Option<String>,
    #[serde(deserialize_with = "required")]
    pub terrain: Option<String>,
    #[serde(deserialize_with = "required")]
    pub elevation: Option<i64>,
    #[serde(deserialize_with = "required")]
    pub coordinates: Option<Coordinates>,
    #[serde(deserialize_with = "required")]
    pub description: Option<String>,
}

// Using deserialize_with keeps serde from treating a missing Option as None.
fn required<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

impl MapRoom {
    pub fn unexplored() -> Self {
        Self::default()
    }

    pub fn exit(&self, direction: Direction) -> Option<u32> {
        match direction {
            Direction::North => self.n,
            Direction::South => self.s,
            Direction::East => self.e,
            Direction::West => self.w,
        }
    }

    pub fn set_exit(&mut self, direction: Direction, room_id: u32) {
        let slot = match direction {
            Direction::North => &mut self.n,
            Direction::South => &mut self.s,
            Direction::East => &mut self.e,
            Direction::West => &mut self.w,
        };
        *slot = Some(room_id);
    }

    /// Copy the descriptive fields of a server record into this slot.
    pub fn record_info(&mut self, info: &RoomInfo) {
        self.title = Some(info.title.clone());
        self.terrain = Some(info.terrain.clone());
        self.elevation = Some(info.elevation);
        self.coordinates = Some(info.coordinates.clone());
        self.description = Some(info.description.clone());
    }

    pub fn unexplored_exits(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|dir| self.exit(*dir).is_none())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomMap {
    rooms: BTreeMap<u32, MapRoom>,
}

impl RoomMap {
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn get(&self, index: u32) -> Option<&MapRoom> {
        self.rooms.get(&index)
    }

    pub fn get_mut(&mut self, index: u32) -> Option<&mut MapRoom> {
        self.rooms.get_mut(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &MapRoom)> {
        self.rooms.iter().map(|(index, room)| (*index, room))
    }

    /// Connect two rooms both ways: `from --direction--> to` and back.
    pub fn link(&mut self, from: u32, direction: Direction, to: u32) -> Result<(), MapError> {
        if !self.rooms.contains_key(&to) {
            return Err(MapError::MissingKey(to.to_string()));
        }
        self.rooms
            .get_mut(&from)
            .ok_or_else(|| MapError::MissingKey(from.to_string()))?
            .set_exit(direction, to);
        if let Some(target) = self.rooms.get_mut(&to) {
            target.set_exit(direction.opposite(), from);
        }
        Ok(())
    }

    /// Rooms whose title has been recorded.
    pub fn explored_count(&self) -> usize {
        self.rooms.values().filter(|room| room.title.is_some()).count()
    }
}

/// Allocate a map with rooms `0..room_count`, every field unset.
pub fn create_map(room_count: u32) -> RoomMap {
    let rooms = (0..room_count)
        .map(|index| (index, MapRoom::unexplored()))
        .collect();
    RoomMap { rooms }
}

pub fn create_default_map() -> RoomMap {
    create_map(DEFAULT_ROOM_COUNT)
}
