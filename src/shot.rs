use crate::adjust::{AdjustedResult, adjust};
use crate::bag::{Club, ClubBag};
use crate::config::{Conditions, DistanceSource};
use anyhow::{Result, anyhow};
use std::fmt::Write as _;

const BAR_WIDTH: f64 = 40.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ShotReport {
    pub raw_distance: f64,
    pub conditions: Conditions,
    pub result: AdjustedResult,
    pub suggested: Option<Club>,
}

/// Resolve the raw distance and run the adjustment against `bag`.
///
/// # Errors
/// Returns an error if the source names a club that is not in the bag.
pub fn plan_shot(
    bag: &ClubBag,
    source: &DistanceSource,
    conditions: &Conditions,
) -> Result<ShotReport> {
    let raw_distance = match source {
        DistanceSource::Yards(yards) => *yards,
        DistanceSource::Club(name) => {
            bag.find(name)
                .ok_or_else(|| anyhow!("no club named {name} in the bag"))?
                .distance
        }
    };
    let result = adjust(&conditions.with_distance(raw_distance));
    let suggested = bag.suggest(result.adjusted_distance).cloned();
    Ok(ShotReport {
        raw_distance,
        conditions: *conditions,
        result,
        suggested,
    })
}

impl ShotReport {
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Adjusted distance: {:.1} yards (raw {}, wind {} mph @ {}°, elevation {} ft, {})",
            self.result.adjusted_distance,
            format_yards(self.raw_distance),
            self.conditions.wind_speed,
            self.conditions.wind_angle_deg,
            self.conditions.elevation_ft,
            self.conditions.lie,
        );
        match &self.suggested {
            Some(club) => {
                let _ = write!(
                    out,
                    "\nSuggested club: {} ({}y)",
                    club.name,
                    format_yards(club.distance)
                );
            }
            None => out.push_str("\nSuggested club: none (bag is empty)"),
        }
        out
    }
}

/// Carry distances as text bars, with the adjusted distance marked on the
/// suggested club's row.
#[must_use]
pub fn render_carry_table(bag: &ClubBag, report: &ShotReport) -> String {
    let longest = bag
        .iter()
        .map(|club| club.distance)
        .fold(report.result.adjusted_distance, f64::max);
    let scale = if longest > 0.0 { BAR_WIDTH / longest } else { 0.0 };
    let name_width = bag.iter().map(|club| club.name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (index, club) in bag.iter().enumerate() {
        let bar = "#".repeat(bar_len(club.distance, scale));
        let _ = write!(
            out,
            "{:>2}. {:<name_width$} {:>6}  {bar}",
            index + 1,
            club.name,
            format_yards(club.distance),
        );
        let is_pick = report
            .suggested
            .as_ref()
            .is_some_and(|pick| pick.name == club.name);
        if is_pick {
            let marker_at = bar_len(report.result.adjusted_distance, scale);
            let pad = marker_at.saturating_sub(bar.len());
            let _ = write!(
                out,
                "{}* {:.1}y",
                " ".repeat(pad),
                report.result.adjusted_distance
            );
        }
        out.push('\n');
    }
    out
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar_len(distance: f64, scale: f64) -> usize {
    (distance * scale).round().max(0.0) as usize
}

/// Whole yards print without a decimal.
#[must_use]
pub fn format_yards(distance: f64) -> String {
    if distance.fract() == 0.0 {
        format!("{distance:.0}")
    } else {
        format!("{distance:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjust::Lie;

    #[test]
    fn club_source_uses_its_carry() {
        let bag = ClubBag::default();
        let conditions = Conditions {
            lie: Lie::Bunker,
            ..Conditions::default()
        };
        let report =
            plan_shot(&bag, &DistanceSource::Club("PW".to_string()), &conditions).unwrap();
        assert_eq!(report.raw_distance, 150.0);
        assert_eq!(report.result.adjusted_distance, 168.0);
        assert_eq!(report.suggested.unwrap().name, "8i");
    }

    #[test]
    fn unknown_club_is_an_error() {
        let bag = ClubBag::default();
        let err = plan_shot(
            &bag,
            &DistanceSource::Club("1i".to_string()),
            &Conditions::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("1i"));
    }

    #[test]
    fn carry_table_marks_only_the_pick() {
        let bag = ClubBag::default();
        let report = plan_shot(&bag, &DistanceSource::Yards(163.0), &Conditions::default()).unwrap();
        let table = render_carry_table(&bag, &report);
        let marked: Vec<&str> = table.lines().filter(|line| line.contains('*')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("9i"), "{table}");
        assert!(marked[0].ends_with("* 163.0y"), "{table}");
        assert_eq!(table.lines().count(), bag.len());
    }

    #[test]
    fn yards_format() {
        assert_eq!(format_yards(150.0), "150");
        assert_eq!(format_yards(172.5), "172.5");
    }
}
