pub mod error;
pub mod map;
pub mod models;

pub use error::MapError;
pub use map::{
    create_default_map, create_map, identify_directions, json_map, load_or_create, print_map,
    MapRoom, RoomMap, DEFAULT_ROOM_COUNT,
};
pub use models::{get_room_info, Direction, RoomInfo};
