use anyhow::Result;
use golf_yardage::bag::{self, Club, ClubBag};
use golf_yardage::error::BagError;
use std::fs;

fn sample_bag() -> Result<ClubBag> {
    Ok(ClubBag::from_clubs([
        Club::new("Driver", 262.0)?,
        Club::new("3 Wood", 241.5)?,
        Club::new("7i", 168.0)?,
        Club::new("PW", 132.0)?,
    ])?)
}

#[test]
fn test02_save_then_load_round_trips() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("club_distances.json");
    let bag = sample_bag()?;
    bag::save(&path, &bag)?;
    assert_eq!(bag::load(&path), bag);
    assert_eq!(bag::read_bag(&path)?, Some(bag));
    Ok(())
}

#[test]
fn test02_saved_file_is_a_record_list() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested/dir/bag.json");
    bag::save(&path, &sample_bag()?)?;
    let payload: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    let records = payload.as_array().expect("array");
    assert_eq!(records.len(), 4);
    assert_eq!(records[1]["name"], "3 Wood");
    assert_eq!(records[1]["distance"], 241.5);
    Ok(())
}

#[test]
fn test02_save_overwrites_previous_contents() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bag.json");
    bag::save(&path, &ClubBag::default())?;
    let mut bag = sample_bag()?;
    bag.remove_club(0)?;
    bag::save(&path, &bag)?;
    assert_eq!(bag::load(&path), bag);
    Ok(())
}

#[test]
fn test02_missing_file_loads_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("absent.json");
    assert_eq!(bag::read_bag(&path)?, None);
    assert_eq!(bag::load(&path), ClubBag::default());
    Ok(())
}

#[test]
fn test02_malformed_file_is_reported_then_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bag.json");
    fs::write(&path, "{ not json")?;
    assert!(matches!(
        bag::read_bag(&path),
        Err(BagError::Malformed { .. })
    ));
    assert_eq!(bag::load(&path), ClubBag::default());

    fs::write(&path, r#"[{"club": "PW", "yards": 150}]"#)?;
    assert!(matches!(
        bag::read_bag(&path),
        Err(BagError::Malformed { .. })
    ));
    Ok(())
}

#[test]
fn test02_mapping_file_is_accepted() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bag.json");
    fs::write(&path, r#"{"Driver": 280, "PW": 150}"#)?;
    let bag = bag::load(&path);
    assert_eq!(bag.len(), 2);
    assert_eq!(bag.find("PW").map(|club| club.distance), Some(150.0));
    Ok(())
}

#[test]
fn test02_duplicate_records_keep_last_distance() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bag.json");
    fs::write(
        &path,
        r#"[{"name": "PW", "distance": 150}, {"name": "9i", "distance": 160}, {"name": "PW", "distance": 145}]"#,
    )?;
    let bag = bag::load(&path);
    assert_eq!(bag.names(), vec!["PW", "9i"]);
    assert_eq!(bag.find("PW").map(|club| club.distance), Some(145.0));
    Ok(())
}

#[test]
fn test02_suggest_prefers_first_on_ties() -> Result<()> {
    let bag = ClubBag::from_clubs([Club::new("A", 150.0)?, Club::new("B", 150.0)?])?;
    assert_eq!(bag.suggest(150.0).map(|club| club.name.as_str()), Some("A"));
    assert_eq!(
        ClubBag::default().suggest(157.0).map(|club| club.name.as_str()),
        Some("9i")
    );
    Ok(())
}
