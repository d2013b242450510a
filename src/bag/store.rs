use super::{Club, ClubBag};
use crate::error::BagError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

pub const DEFAULT_BAG_PATH: &str = "club_distances.json";

/// Bag file layouts accepted on read. Writes always use the record list.
#[derive(Deserialize)]
#[serde(untagged)]
enum BagFile {
    Records(Vec<Club>),
    Mapping(Map<String, Value>),
}

/// Read a saved bag.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
/// Returns `BagError::Io` if the file cannot be read and
/// `BagError::Malformed` if its contents are not a bag.
pub fn read_bag(path: &Path) -> Result<Option<ClubBag>, BagError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(BagError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };
    let malformed = |message: String| BagError::Malformed {
        path: path.display().to_string(),
        message,
    };
    let parsed: BagFile =
        serde_json::from_str(&contents).map_err(|err| malformed(err.to_string()))?;
    let clubs = match parsed {
        BagFile::Records(records) => records,
        BagFile::Mapping(map) => {
            let mut clubs = Vec::with_capacity(map.len());
            for (name, value) in map {
                let distance = value
                    .as_f64()
                    .ok_or_else(|| malformed(format!("distance for {name} is not a number")))?;
                clubs.push(Club { name, distance });
            }
            clubs
        }
    };
    ClubBag::from_clubs(clubs)
        .map(Some)
        .map_err(|err| malformed(err.to_string()))
}

/// Load the saved bag, falling back to the default bag when nothing usable is
/// on disk. Never fails.
#[must_use]
pub fn load(path: &Path) -> ClubBag {
    match read_bag(path) {
        Ok(Some(bag)) if !bag.is_empty() => {
            debug!(path = %path.display(), clubs = bag.len(), "loaded bag");
            bag
        }
        Ok(Some(_)) => {
            debug!(path = %path.display(), "saved bag is empty, using defaults");
            ClubBag::default()
        }
        Ok(None) => {
            debug!(path = %path.display(), "no saved bag, using defaults");
            ClubBag::default()
        }
        Err(err) => {
            warn!(error = %err, "could not read saved bag, using defaults");
            ClubBag::default()
        }
    }
}

/// Write `bag` to `path` as a JSON list of `{ "name", "distance" }` records,
/// replacing any previous contents.
///
/// # Errors
/// Returns `BagError::Io` if the directory or file cannot be written.
pub fn save(path: &Path, bag: &ClubBag) -> Result<(), BagError> {
    let io_err = |source| BagError::Io {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let serialized = serde_json::to_string_pretty(bag.clubs()).map_err(|err| BagError::Malformed {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    fs::write(path, serialized).map_err(io_err)?;
    info!(path = %path.display(), clubs = bag.len(), "saved bag");
    Ok(())
}
