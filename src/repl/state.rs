use crate::bag::ClubBag;
use crate::config::{Conditions, DistanceSource};
use std::path::PathBuf;

/// Everything a REPL session carries between lines. The bag is owned here and
/// handed to each command explicitly.
#[derive(Debug, Clone)]
pub struct ReplState {
    pub bag: ClubBag,
    pub bag_json: PathBuf,
    pub source: Option<DistanceSource>,
    pub conditions: Conditions,
}

impl ReplState {
    #[must_use]
    pub fn new(
        bag: ClubBag,
        bag_json: PathBuf,
        source: Option<DistanceSource>,
        conditions: Conditions,
    ) -> Self {
        Self {
            bag,
            bag_json,
            source,
            conditions,
        }
    }

    /// Keep a club-based distance source pointing at the club after a rename.
    pub(crate) fn follow_rename(&mut self, old_name: &str, new_name: &str) {
        if let Some(DistanceSource::Club(name)) = &mut self.source
            && *name == old_name
        {
            *name = new_name.to_string();
        }
    }
}
