use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use super::types::{create_map, RoomMap};
use crate::error::MapError;

/// Write `data` to `path` as JSON, replacing whatever was there.
pub fn print_map<T, P>(data: &T, path: P) -> Result<(), MapError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    tracing::debug!("Writing map to {}", path.display());

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, data)?;
    writer.flush()?;
    Ok(())
}

/// Read a JSON file written by `print_map`.
pub fn json_map<T, P>(path: P) -> Result<T, MapError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    tracing::debug!("Reading map from {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Load the map at `path`, creating and saving a fresh one on first run.
pub fn load_or_create<P: AsRef<Path>>(path: P, room_count: u32) -> Result<RoomMap, MapError> {
    let path = path.as_ref();

    match json_map::<RoomMap, _>(path) {
        Ok(map) => {
            tracing::debug!("Loaded {} rooms from {}", map.len(), path.display());
            Ok(map)
        }
        Err(MapError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(
                "No map at {}, creating one with {} rooms",
                path.display(),
                room_count
            );
            let map = create_map(room_count);
            print_map(&map, path)?;
            Ok(map)
        }
        Err(e) => Err(e),
    }
}
