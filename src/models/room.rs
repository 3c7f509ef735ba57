use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

use crate::error::MapError;

/// Fields copied out of a server room record, in lookup order.
pub const ROOM_INFO_FIELDS: [&str; 8] = [
    "room_id",
    "title",
    "coordinates",
    "description",
    "terrain",
    "elevation",
    "exits",
    "items",
];

/// A room as reported by the game server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomInfo {
    pub room_id: u32,
    pub title: String,
    pub coordinates: Coordinates,
    pub description: String,
    pub terrain: String,
    pub elevation: i64,
    pub exits: Exits,
    pub items: Vec<ItemId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinates {
    Triple(Number, Number, Number),
    Pair(Number, Number),
    /// Textual form such as "(60,60)"
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Id(Number),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Exits {
    Labels(Vec<String>),
    Linked(BTreeMap<String, RoomRef>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoomRef {
    Id(u32),
    Label(String),
}

impl RoomInfo {
    /// Direction labels leading out of this room.
    pub fn exit_labels(&self) -> Vec<&str> {
        match &self.exits {
            Exits::Labels(labels) => labels.iter().map(String::as_str).collect(),
            Exits::Linked(links) => links.keys().map(String::as_str).collect(),
        }
    }
}

/// Project the designated fields out of a full room record.
///
/// Keys outside `ROOM_INFO_FIELDS` are dropped. The first designated key the
/// record lacks is reported as `MapError::MissingKey`.
pub fn get_room_info(record: &Value) -> Result<RoomInfo, MapError> {
    let mut room = Map::new();

    for field in ROOM_INFO_FIELDS {
        let value = record
            .get(field)
            .ok_or_else(|| MapError::MissingKey(field.to_string()))?;
        room.insert(field.to_string(), value.clone());
    }

    Ok(serde_json::from_value(Value::Object(room))?)
}
