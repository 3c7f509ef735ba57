use anyhow::{Context, Result};
use mudmap::{load_or_create, DEFAULT_ROOM_COUNT};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mudmap=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let map_file = std::env::var("MAP_FILE")
        .unwrap_or_else(|_| "map.json".to_string());
    let room_count = match std::env::var("ROOM_COUNT") {
        Ok(value) => value.parse::<u32>().context("Invalid ROOM_COUNT")?,
        Err(_) => DEFAULT_ROOM_COUNT,
    };

    let map = load_or_create(&map_file, room_count)
        .with_context(|| format!("Failed to load map file '{}'", map_file))?;
    tracing::info!(
        "Map '{}' has {} rooms, {} explored",
        map_file,
        map.len(),
        map.explored_count()
    );

    // Optional room index: list its unexplored exits
    if let Some(arg) = std::env::args().nth(1) {
        let index = arg
            .parse::<u32>()
            .with_context(|| format!("Invalid room index: {}", arg))?;
        let room = map
            .get(index)
            .with_context(|| format!("Room {} is not in the map", index))?;

        let unexplored: Vec<&str> = room
            .unexplored_exits()
            .iter()
            .map(|dir| dir.name())
            .collect();
        if unexplored.is_empty() {
            println!("Room {}: every exit explored", index);
        } else {
            println!("Room {}: unexplored exits: {}", index, unexplored.join(", "));
        }
    }

    Ok(())
}
