use crate::adjust::{Lie, WindDirection};
use anyhow::{Result, anyhow};

pub const WIND_SPEED_LIMIT_MPH: f64 = 20.0;
pub const ELEVATION_LIMIT_FT: f64 = 100.0;

pub(crate) fn parse_number(value: &str, what: &str) -> Result<f64> {
    let number: f64 = value
        .trim()
        .parse()
        .map_err(|_| anyhow!("{what} must be a number, got {value:?}"))?;
    if !number.is_finite() {
        return Err(anyhow!("{what} must be a finite number, got {value:?}"));
    }
    Ok(number)
}

pub(crate) fn check_distance(distance: f64) -> Result<f64> {
    if distance.is_finite() && distance > 0.0 {
        Ok(distance)
    } else {
        Err(anyhow!("distance must be greater than 0 yards, got {distance}"))
    }
}

pub(crate) fn check_wind_speed(speed: f64) -> Result<f64> {
    if speed.abs() <= WIND_SPEED_LIMIT_MPH {
        Ok(speed)
    } else {
        Err(anyhow!(
            "wind speed must be within ±{WIND_SPEED_LIMIT_MPH} mph, got {speed}"
        ))
    }
}

pub(crate) fn check_elevation(elevation: f64) -> Result<f64> {
    if elevation.abs() <= ELEVATION_LIMIT_FT {
        Ok(elevation)
    } else {
        Err(anyhow!(
            "elevation change must be within ±{ELEVATION_LIMIT_FT} ft, got {elevation}"
        ))
    }
}

/// Finite degrees, folded into [0, 360).
pub(crate) fn check_wind_angle(degrees: f64) -> Result<f64> {
    if degrees.is_finite() {
        Ok(degrees.rem_euclid(360.0))
    } else {
        Err(anyhow!("wind angle must be a finite number of degrees, got {degrees}"))
    }
}

pub(crate) fn parse_lie(value: &str) -> Result<Lie> {
    Lie::parse(value).ok_or_else(|| {
        let known: Vec<&str> = Lie::ALL.iter().map(|lie| lie.display_name()).collect();
        anyhow!("unknown lie {value:?}; expected one of {}", known.join(", "))
    })
}

pub(crate) fn parse_wind_from(value: &str) -> Result<WindDirection> {
    WindDirection::parse(value).ok_or_else(|| {
        let known: Vec<&str> = WindDirection::ALL.iter().map(|dir| dir.label()).collect();
        anyhow!("unknown wind_from {value:?}; expected one of {}", known.join(", "))
    })
}

/// Accept a compass label (`NE`) or a number of degrees.
pub(crate) fn parse_wind_angle(value: &str) -> Result<f64> {
    if let Some(direction) = WindDirection::parse(value) {
        return Ok(direction.degrees());
    }
    parse_number(value, "wind direction")
        .and_then(check_wind_angle)
        .map_err(|_| anyhow!("wind direction must be a compass point (N, NE, ...) or degrees, got {value:?}"))
}
