//! Shot distance adjustment for wind, elevation and lie.
//!
//! Every function here is pure. Unknown lie names never fail; they contribute
//! no penalty.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Multiplier applied to a wind component that carries the ball further.
pub const TAILWIND_FACTOR: f64 = 0.7;
/// Multiplier applied to a wind component that holds the ball up.
pub const HEADWIND_FACTOR: f64 = 0.5;
/// Yards of carry per foot of elevation change.
pub const ELEVATION_YARDS_PER_FOOT: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lie {
    Fairway,
    LightRough,
    Rough,
    HeavyRough,
    Bunker,
    Fringe,
}

impl Lie {
    pub const ALL: [Lie; 6] = [
        Lie::Fairway,
        Lie::LightRough,
        Lie::Rough,
        Lie::HeavyRough,
        Lie::Bunker,
        Lie::Fringe,
    ];

    /// Fraction of the raw distance added to account for the lie.
    #[must_use]
    pub fn penalty(self) -> f64 {
        match self {
            Lie::Fairway => 0.0,
            Lie::Fringe => 0.02,
            Lie::LightRough => 0.05,
            Lie::Rough => 0.07,
            Lie::HeavyRough => 0.10,
            Lie::Bunker => 0.12,
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Lie::Fairway => "Fairway",
            Lie::LightRough => "Light Rough",
            Lie::Rough => "Rough",
            Lie::HeavyRough => "Heavy Rough",
            Lie::Bunker => "Bunker",
            Lie::Fringe => "Fringe",
        }
    }

    /// Exact display-name match ("Light Rough", not "light rough").
    #[must_use]
    pub fn from_display_name(name: &str) -> Option<Lie> {
        Lie::ALL.into_iter().find(|lie| lie.display_name() == name)
    }

    /// Parse "Light Rough", "light_rough", "light-rough" or "lightrough",
    /// ignoring case.
    #[must_use]
    pub fn parse(name: &str) -> Option<Lie> {
        let key: String = name
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != '_' && *ch != '-')
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        Lie::ALL.into_iter().find(|lie| {
            lie.display_name()
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .map(|ch| ch.to_ascii_lowercase())
                .eq(key.chars())
        })
    }
}

impl fmt::Display for Lie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Compass direction the wind is coming from.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
#[value(rename_all = "verbatim")]
pub enum WindDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl WindDirection {
    pub const ALL: [WindDirection; 8] = [
        WindDirection::N,
        WindDirection::NE,
        WindDirection::E,
        WindDirection::SE,
        WindDirection::S,
        WindDirection::SW,
        WindDirection::W,
        WindDirection::NW,
    ];

    #[must_use]
    pub fn degrees(self) -> f64 {
        match self {
            WindDirection::N => 0.0,
            WindDirection::NE => 45.0,
            WindDirection::E => 90.0,
            WindDirection::SE => 135.0,
            WindDirection::S => 180.0,
            WindDirection::SW => 225.0,
            WindDirection::W => 270.0,
            WindDirection::NW => 315.0,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WindDirection::N => "N",
            WindDirection::NE => "NE",
            WindDirection::E => "E",
            WindDirection::SE => "SE",
            WindDirection::S => "S",
            WindDirection::SW => "SW",
            WindDirection::W => "W",
            WindDirection::NW => "NW",
        }
    }

    #[must_use]
    pub fn parse(label: &str) -> Option<WindDirection> {
        WindDirection::ALL
            .into_iter()
            .find(|dir| dir.label().eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionInput {
    pub raw_distance: f64,
    pub wind_speed: f64,
    pub wind_angle_deg: f64,
    pub elevation_ft: f64,
    pub lie: Lie,
}

impl ConditionInput {
    /// Neutral conditions for a shot of `raw_distance` yards.
    #[must_use]
    pub fn calm(raw_distance: f64) -> Self {
        Self {
            raw_distance,
            wind_speed: 0.0,
            wind_angle_deg: 0.0,
            elevation_ft: 0.0,
            lie: Lie::Fairway,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustedResult {
    pub adjusted_distance: f64,
}

/// Along-line wind effect in yards. A positive component helps and is scaled
/// by [`TAILWIND_FACTOR`]; zero or negative is scaled by [`HEADWIND_FACTOR`].
#[must_use]
pub fn wind_adjustment(wind_speed: f64, wind_angle_deg: f64) -> f64 {
    let component = wind_speed * wind_angle_deg.to_radians().cos();
    if component > 0.0 {
        component * TAILWIND_FACTOR
    } else {
        component * HEADWIND_FACTOR
    }
}

#[must_use]
pub fn elevation_adjustment(elevation_ft: f64) -> f64 {
    elevation_ft * ELEVATION_YARDS_PER_FOOT
}

/// Penalty fraction for a lie given by its exact display name. Anything else,
/// including other spellings of a known lie, yields `0.0`.
#[must_use]
pub fn lie_penalty(lie: &str) -> f64 {
    match Lie::from_display_name(lie) {
        Some(lie) => lie.penalty(),
        None => {
            debug!(lie, "unknown lie, no penalty applied");
            0.0
        }
    }
}

/// Round to one decimal place, ties to even.
#[must_use]
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

fn total(raw: f64, wind_speed: f64, wind_angle_deg: f64, elevation_ft: f64, penalty: f64) -> f64 {
    round_tenths(
        raw + elevation_adjustment(elevation_ft)
            + wind_adjustment(wind_speed, wind_angle_deg)
            + raw * penalty,
    )
}

/// Adjusted distance in yards for a lie given by name.
///
/// Total over all numeric inputs; an unknown `lie` adds nothing.
#[must_use]
pub fn compute(raw: f64, wind_speed: f64, wind_angle_deg: f64, elevation_ft: f64, lie: &str) -> f64 {
    total(raw, wind_speed, wind_angle_deg, elevation_ft, lie_penalty(lie))
}

#[must_use]
pub fn adjust(input: &ConditionInput) -> AdjustedResult {
    let adjusted_distance = total(
        input.raw_distance,
        input.wind_speed,
        input.wind_angle_deg,
        input.elevation_ft,
        input.lie.penalty(),
    );
    debug!(?input, adjusted_distance, "adjusted distance");
    AdjustedResult { adjusted_distance }
}
