use crate::adjust::{ConditionInput, Lie};
use crate::bag::DEFAULT_BAG_PATH;
use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

mod cli;
pub(crate) mod parse;

pub use cli::Cli;
pub use parse::{ELEVATION_LIMIT_FT, WIND_SPEED_LIMIT_MPH};

/// Where the raw distance of a shot comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DistanceSource {
    Club(String),
    Yards(f64),
}

/// Course conditions, everything in a [`ConditionInput`] except the distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    pub wind_speed: f64,
    pub wind_angle_deg: f64,
    pub elevation_ft: f64,
    pub lie: Lie,
}

impl Default for Conditions {
    fn default() -> Self {
        Self {
            wind_speed: 0.0,
            wind_angle_deg: 0.0,
            elevation_ft: 0.0,
            lie: Lie::Fairway,
        }
    }
}

impl Conditions {
    #[must_use]
    pub fn with_distance(&self, raw_distance: f64) -> ConditionInput {
        ConditionInput {
            raw_distance,
            wind_speed: self.wind_speed,
            wind_angle_deg: self.wind_angle_deg,
            elevation_ft: self.elevation_ft,
            lie: self.lie,
        }
    }
}

#[derive(Debug)]
pub enum AppMode {
    Repl {
        bag_json: PathBuf,
        source: Option<DistanceSource>,
        conditions: Conditions,
    },
    OneShot {
        bag_json: PathBuf,
        source: DistanceSource,
        conditions: Conditions,
    },
}

/// Load config from CLI and optional TOML file. CLI values win.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid, if a value is
/// out of range, or if one-shot mode has no distance to work from.
pub fn load_config(cli: Cli) -> Result<AppMode> {
    let file_config = read_file_config(&cli)?;

    let bag_json = cli
        .bag_json
        .or(file_config.bag_json)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BAG_PATH));

    let source = match (cli.club, cli.distance) {
        (Some(club), _) => Some(DistanceSource::Club(club)),
        (None, Some(yards)) => Some(DistanceSource::Yards(yards)),
        (None, None) => match (file_config.club, file_config.distance) {
            (Some(club), _) => Some(DistanceSource::Club(club)),
            (None, Some(yards)) => Some(DistanceSource::Yards(yards)),
            (None, None) => None,
        },
    };
    if let Some(DistanceSource::Yards(yards)) = &source {
        parse::check_distance(*yards)?;
    }

    let wind_speed = cli.wind_speed.or(file_config.wind_speed).unwrap_or(0.0);
    let wind_angle_deg = match (cli.wind_from, cli.wind_angle) {
        (Some(direction), _) => direction.degrees(),
        (None, Some(angle)) => parse::check_wind_angle(angle)?,
        (None, None) => match (file_config.wind_from, file_config.wind_angle) {
            (Some(label), _) => parse::parse_wind_from(&label)?.degrees(),
            (None, Some(angle)) => parse::check_wind_angle(angle)?,
            (None, None) => 0.0,
        },
    };
    let elevation_ft = cli.elevation.or(file_config.elevation).unwrap_or(0.0);
    let lie = match cli.lie.or(file_config.lie) {
        Some(value) => parse::parse_lie(&value)?,
        None => Lie::Fairway,
    };
    let conditions = Conditions {
        wind_speed: parse::check_wind_speed(wind_speed)?,
        wind_angle_deg,
        elevation_ft: parse::check_elevation(elevation_ft)?,
        lie,
    };

    if cli.one_shot || file_config.one_shot.unwrap_or(false) {
        let source = source.ok_or_else(|| anyhow!("one-shot mode needs --club or --distance"))?;
        Ok(AppMode::OneShot {
            bag_json,
            source,
            conditions,
        })
    } else {
        Ok(AppMode::Repl {
            bag_json,
            source,
            conditions,
        })
    }
}

fn read_file_config(cli: &Cli) -> Result<cli::FileConfig> {
    match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<cli::FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))
        }
        None => Ok(cli::FileConfig::default()),
    }
}
