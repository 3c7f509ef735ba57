mod explore;
mod store;
mod types;

pub use explore::identify_directions;
pub use store::{json_map, load_or_create, print_map};
pub use types::{create_default_map, create_map, MapRoom, RoomMap, DEFAULT_ROOM_COUNT};
