pub mod room;
pub mod exit;

pub use room::{get_room_info, Coordinates, Exits, ItemId, RoomInfo, RoomRef, ROOM_INFO_FIELDS};
pub use exit::Direction;
