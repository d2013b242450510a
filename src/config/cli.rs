use crate::adjust::WindDirection;
use clap::{ArgAction, Parser};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(about = "Adjust a shot's yardage for wind, elevation and lie, and pick a club.")]
pub struct Cli {
    #[arg(long)]
    pub config_toml: Option<PathBuf>,
    /// Saved bag file (JSON).
    #[arg(long)]
    pub bag_json: Option<PathBuf>,
    /// Compute once and exit instead of starting the REPL.
    #[arg(long)]
    pub one_shot: bool,
    /// Take the raw distance from this club's carry.
    #[arg(long, conflicts_with = "distance")]
    pub club: Option<String>,
    /// Raw distance to the target in yards.
    #[arg(long)]
    pub distance: Option<f64>,
    /// Wind speed in mph; negative values flip the direction.
    #[arg(long, allow_hyphen_values = true)]
    pub wind_speed: Option<f64>,
    #[arg(long, value_enum, ignore_case = true, conflicts_with = "wind_angle")]
    pub wind_from: Option<WindDirection>,
    #[arg(long, allow_hyphen_values = true)]
    pub wind_angle: Option<f64>,
    /// Elevation change to the target in feet (uphill positive).
    #[arg(long, allow_hyphen_values = true)]
    pub elevation: Option<f64>,
    #[arg(long)]
    pub lie: Option<String>,
    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FileConfig {
    pub bag_json: Option<PathBuf>,
    #[serde(rename = "one-shot", alias = "one_shot")]
    pub one_shot: Option<bool>,
    pub club: Option<String>,
    pub distance: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_from: Option<String>,
    pub wind_angle: Option<f64>,
    pub elevation: Option<f64>,
    pub lie: Option<String>,
}
