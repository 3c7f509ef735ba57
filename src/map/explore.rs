use super::types::MapRoom;
use crate::error::MapError;
use crate::models::Direction;

/// Directions from `exits` that have not been explored yet, in input order.
///
/// An exit counts as unexplored while the room holds no neighbour for it.
/// Labels naming no direction slot of the room fail with `MissingKey`.
pub fn identify_directions<S: AsRef<str>>(
    exits: &[S],
    current_room: &MapRoom,
) -> Result<Vec<Direction>, MapError> {
    let mut unvisited = Vec::new();

    for label in exits {
        let direction = Direction::from_key(label.as_ref())?;
        if current_room.exit(direction).is_none() {
            unvisited.push(direction);
        }
    }

    Ok(unvisited)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_directions() {
        let mut room = MapRoom::unexplored();
        room.set_exit(Direction::South, 2);

        let unvisited = identify_directions(&["n", "s", "e", "w"], &room).unwrap();
        assert_eq!(
            unvisited,
            vec![Direction::North, Direction::East, Direction::West]
        );
    }

    #[test]
    fn test_identify_directions_keeps_input_order() {
        let room = MapRoom::unexplored();
        let exits = vec!["w".to_string(), "n".to_string()];
        let unvisited = identify_directions(&exits, &room).unwrap();
        assert_eq!(unvisited, vec![Direction::West, Direction::North]);
    }

    #[test]
    fn test_identify_directions_all_visited() {
        let mut room = MapRoom::unexplored();
        for (id, dir) in Direction::ALL.into_iter().enumerate() {
            room.set_exit(dir, id as u32);
        }
        assert!(identify_directions(&["n", "s", "e", "w"], &room)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_identify_directions_unknown_label() {
        let room = MapRoom::unexplored();
        assert!(matches!(
            identify_directions(&["n", "title"], &room),
            Err(MapError::MissingKey(key)) if key == "title"
        ));
    }

    #[test]
    fn test_identify_directions_requires_exact_keys() {
        let room = MapRoom::unexplored();
        for label in ["north", " N ", "West"] {
            assert!(matches!(
                identify_directions(&[label], &room),
                Err(MapError::MissingKey(key)) if key == label
            ));
        }
    }

    #[test]
    fn test_identify_directions_empty() {
        let room = MapRoom::unexplored();
        let exits: [&str; 0] = [];
        assert!(identify_directions(&exits, &room).unwrap().is_empty());
    }
}
