use crate::error::BagError;
use serde::{Deserialize, Serialize};

pub mod store;

pub use store::{DEFAULT_BAG_PATH, load, read_bag, save};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub name: String,
    pub distance: f64,
}

impl Club {
    /// # Errors
    /// Returns an error if the trimmed name is empty or the distance is not a
    /// positive, finite number.
    pub fn new(name: &str, distance: f64) -> Result<Self, BagError> {
        Ok(Self {
            name: validate_name(name)?,
            distance: validate_distance(distance)?,
        })
    }
}

const DEFAULT_CLUBS: &[(&str, f64)] = &[
    ("Driver", 280.0),
    ("3W", 250.0),
    ("5W", 235.0),
    ("3H", 225.0),
    ("4i", 210.0),
    ("5i", 200.0),
    ("6i", 190.0),
    ("7i", 180.0),
    ("8i", 170.0),
    ("9i", 160.0),
    ("PW", 150.0),
    ("GW", 140.0),
    ("SW", 130.0),
    ("LW", 120.0),
];

/// Ordered list of clubs. Order only matters for display and for breaking
/// ties in [`ClubBag::suggest`]. Names are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubBag {
    clubs: Vec<Club>,
}

impl Default for ClubBag {
    fn default() -> Self {
        Self {
            clubs: DEFAULT_CLUBS
                .iter()
                .map(|(name, distance)| Club {
                    name: (*name).to_string(),
                    distance: *distance,
                })
                .collect(),
        }
    }
}

impl ClubBag {
    #[must_use]
    pub fn empty() -> Self {
        Self { clubs: Vec::new() }
    }

    /// Build a bag from records, folding duplicate names: the later record's
    /// distance wins and the first record's position is kept.
    ///
    /// # Errors
    /// Returns an error if any record has an empty name or a bad distance.
    pub fn from_clubs(clubs: impl IntoIterator<Item = Club>) -> Result<Self, BagError> {
        let mut bag = Self::empty();
        for club in clubs {
            bag.add_club(&club.name, club.distance)?;
        }
        Ok(bag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Club> {
        self.clubs.iter()
    }

    #[must_use]
    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.clubs.iter().map(|club| club.name.clone()).collect()
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Club> {
        let name = name.trim();
        self.clubs.iter().find(|club| club.name == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.clubs.iter().position(|club| club.name == name)
    }

    /// Club whose carry is closest to `adjusted_distance`. Ties go to the club
    /// listed first. A non-finite distance matches nothing.
    #[must_use]
    pub fn suggest(&self, adjusted_distance: f64) -> Option<&Club> {
        if !adjusted_distance.is_finite() {
            return None;
        }
        let mut best: Option<(&Club, f64)> = None;
        for club in &self.clubs {
            let diff = (club.distance - adjusted_distance).abs();
            match best {
                Some((_, best_diff)) if diff >= best_diff => {}
                _ => best = Some((club, diff)),
            }
        }
        best.map(|(club, _)| club)
    }

    /// Append a club, or overwrite the distance of a club with the same name.
    /// Returns the index the club ends up at.
    ///
    /// # Errors
    /// Returns an error if the name is empty or the distance is not positive.
    pub fn add_club(&mut self, name: &str, distance: f64) -> Result<usize, BagError> {
        let club = Club::new(name, distance)?;
        if let Some(index) = self.position(&club.name) {
            self.clubs[index].distance = club.distance;
            return Ok(index);
        }
        self.clubs.push(club);
        Ok(self.clubs.len() - 1)
    }

    /// # Errors
    /// Returns an error if `index` is out of range.
    pub fn remove_club(&mut self, index: usize) -> Result<Club, BagError> {
        self.check_index(index)?;
        Ok(self.clubs.remove(index))
    }

    /// # Errors
    /// Returns an error if `index` is out of range, the name is empty, or
    /// another club already carries the name.
    pub fn rename_club(&mut self, index: usize, name: &str) -> Result<(), BagError> {
        self.check_index(index)?;
        let name = validate_name(name)?;
        if let Some(existing) = self.position(&name)
            && existing != index
        {
            return Err(BagError::DuplicateName(name));
        }
        self.clubs[index].name = name;
        Ok(())
    }

    /// # Errors
    /// Returns an error if `index` is out of range or the distance is not
    /// positive.
    pub fn set_distance(&mut self, index: usize, distance: f64) -> Result<(), BagError> {
        self.check_index(index)?;
        self.clubs[index].distance = validate_distance(distance)?;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), BagError> {
        if index < self.clubs.len() {
            Ok(())
        } else {
            Err(BagError::IndexOutOfRange {
                index,
                len: self.clubs.len(),
            })
        }
    }
}

impl<'a> IntoIterator for &'a ClubBag {
    type Item = &'a Club;
    type IntoIter = std::slice::Iter<'a, Club>;

    fn into_iter(self) -> Self::IntoIter {
        self.clubs.iter()
    }
}

fn validate_name(name: &str) -> Result<String, BagError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(BagError::EmptyName);
    }
    Ok(trimmed.to_string())
}

fn validate_distance(distance: f64) -> Result<f64, BagError> {
    if distance.is_finite() && distance > 0.0 {
        Ok(distance)
    } else {
        Err(BagError::InvalidDistance(distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag_of(entries: &[(&str, f64)]) -> ClubBag {
        ClubBag::from_clubs(entries.iter().map(|(name, distance)| Club {
            name: (*name).to_string(),
            distance: *distance,
        }))
        .unwrap()
    }

    #[test]
    fn default_bag_runs_driver_to_lob_wedge() {
        let bag = ClubBag::default();
        assert_eq!(bag.len(), 14);
        assert_eq!(bag.clubs()[0].name, "Driver");
        assert_eq!(bag.clubs()[0].distance, 280.0);
        assert_eq!(bag.clubs()[13].name, "LW");
    }

    #[test]
    fn suggest_ties_go_to_first_club() {
        let bag = bag_of(&[("A", 150.0), ("B", 150.0)]);
        assert_eq!(bag.suggest(150.0).unwrap().name, "A");

        let reversed = bag_of(&[("B", 150.0), ("A", 150.0)]);
        assert_eq!(reversed.suggest(150.0).unwrap().name, "B");
    }

    #[test]
    fn suggest_equidistant_neighbours_prefers_first() {
        let bag = bag_of(&[("9i", 160.0), ("PW", 150.0)]);
        assert_eq!(bag.suggest(155.0).unwrap().name, "9i");
        assert_eq!(bag.suggest(154.9).unwrap().name, "PW");
    }

    #[test]
    fn suggest_on_empty_bag_is_none() {
        assert!(ClubBag::empty().suggest(150.0).is_none());
    }

    #[test]
    fn suggest_on_non_finite_distance_is_none() {
        let bag = ClubBag::default();
        assert!(bag.suggest(f64::NAN).is_none());
        assert!(bag.suggest(f64::INFINITY).is_none());
        assert!(bag.suggest(f64::NEG_INFINITY).is_none());
    }

    #[test]
    fn add_with_existing_name_overwrites_in_place() {
        let mut bag = bag_of(&[("7i", 180.0), ("8i", 170.0)]);
        let index = bag.add_club(" 7i ", 175.0).unwrap();
        assert_eq!(index, 0);
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.find("7i").unwrap().distance, 175.0);
    }

    #[test]
    fn duplicate_records_fold_to_last_distance() {
        let bag = bag_of(&[("PW", 150.0), ("GW", 140.0), ("PW", 148.0)]);
        assert_eq!(bag.names(), vec!["PW", "GW"]);
        assert_eq!(bag.find("PW").unwrap().distance, 148.0);
    }

    #[test]
    fn mutators_validate_input() {
        let mut bag = bag_of(&[("PW", 150.0), ("GW", 140.0)]);
        assert!(matches!(bag.add_club("  ", 100.0), Err(BagError::EmptyName)));
        assert!(matches!(
            bag.add_club("LW", 0.0),
            Err(BagError::InvalidDistance(_))
        ));
        assert!(matches!(
            bag.set_distance(1, f64::NAN),
            Err(BagError::InvalidDistance(_))
        ));
        assert!(matches!(
            bag.rename_club(1, "PW"),
            Err(BagError::DuplicateName(name)) if name == "PW"
        ));
        assert!(matches!(
            bag.remove_club(2),
            Err(BagError::IndexOutOfRange { index: 2, len: 2 })
        ));
        bag.rename_club(0, "PW").unwrap();
        assert_eq!(bag.names(), vec!["PW", "GW"]);
    }

    #[test]
    fn mutators_apply() {
        let mut bag = bag_of(&[("PW", 150.0), ("GW", 140.0)]);
        bag.rename_club(1, "52deg").unwrap();
        bag.set_distance(1, 138.0).unwrap();
        let removed = bag.remove_club(0).unwrap();
        assert_eq!(removed.name, "PW");
        assert_eq!(bag.clubs(), &[Club::new("52deg", 138.0).unwrap()]);
    }
}
