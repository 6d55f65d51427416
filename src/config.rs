use std::{path::PathBuf, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

use crate::coord::radar::KIND as RADAR_KIND;


#[derive(Debug, Error, PartialEq)]
pub enum LengthError {
    #[error("{0:?} is neither a number nor a percentage")]
    Malformed(String),
}


/// A length given either in pixels or relative to some reference size.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(try_from = "LengthRepr")]
pub enum Length {
    Pixels(f64),
    /// Percentage, `50.0` means half of the reference size.
    Percent(f64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LengthRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<LengthRepr> for Length {
    type Error = LengthError;

    fn try_from(value: LengthRepr) -> Result<Self, Self::Error> {
        match value {
            LengthRepr::Number(px) => Ok(Length::Pixels(px)),
            LengthRepr::Text(s) => s.parse(),
        }
    }
}

impl FromStr for Length {
    type Err = LengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let malformed = || LengthError::Malformed(s.to_string());

        match s {
            "center" | "middle" => return Ok(Length::Percent(50.0)),
            "left" | "top" => return Ok(Length::Percent(0.0)),
            "right" | "bottom" => return Ok(Length::Percent(100.0)),
            _ => {},
        }

        if let Some(percent) = s.strip_suffix('%') {
            let percent = percent.trim().parse().map_err(|_| malformed())?;
            return Ok(Length::Percent(percent));
        }

        s.parse().map(Length::Pixels).map_err(|_| malformed())
    }
}

impl Length {
    /// Resolve to pixels against the size percentages refer to.
    pub fn resolve(&self, reference: f64) -> f64 {
        match *self {
            Length::Pixels(px) => px,
            Length::Percent(percent) => percent / 100.0 * reference,
        }
    }
}


/// Outer radius alone, or `[inner, outer]`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Radius {
    Range([Length; 2]),
    Outer(Length),
}

impl Radius {
    pub fn bounds(&self) -> [Length; 2] {
        match *self {
            Radius::Range(range) => range,
            Radius::Outer(outer) => [Length::Pixels(0.0), outer],
        }
    }
}


#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}


#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct IndicatorConfig {
    pub name: String,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl IndicatorConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min: None,
            max: None,
        }
    }

    pub fn with_min(self, min: f64) -> Self {
        Self { min: Some(min), ..self }
    }

    pub fn with_max(self, max: f64) -> Self {
        Self { max: Some(max), ..self }
    }
}


fn default_center() -> [Length; 2] {
    [Length::Percent(50.0), Length::Percent(50.0)]
}

fn default_radius() -> Radius {
    Radius::Outer(Length::Percent(75.0))
}

fn default_start_angle() -> f64 {
    90.0
}

fn default_split_number() -> usize {
    5
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RadarConfig {
    #[serde(default = "default_center")]
    pub center: [Length; 2],
    #[serde(default = "default_radius")]
    pub radius: Radius,
    /// Degrees, counter-clockwise from the positive x axis.
    #[serde(default = "default_start_angle")]
    pub start_angle: f64,
    #[serde(default = "default_split_number")]
    pub split_number: usize,
    /// Let the extent float away from zero.
    #[serde(default)]
    pub scale: bool,
    pub indicators: Vec<IndicatorConfig>,
}

impl RadarConfig {
    pub fn new(indicators: Vec<IndicatorConfig>) -> Self {
        Self {
            center: default_center(),
            radius: default_radius(),
            start_angle: default_start_angle(),
            split_number: default_split_number(),
            scale: false,
            indicators,
        }
    }
}


fn default_coordinate_system() -> String {
    RADAR_KIND.to_string()
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SeriesConfig {
    pub name: String,
    #[serde(default = "default_coordinate_system")]
    pub coordinate_system: String,
    #[serde(default)]
    pub radar_index: usize,
    /// One row per polygon, one column per indicator.
    pub data: Vec<Vec<f64>>,
}

impl SeriesConfig {
    pub fn new(name: impl Into<String>, data: Vec<Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            coordinate_system: default_coordinate_system(),
            radar_index: 0,
            data,
        }
    }
}


#[derive(Clone, Debug, Deserialize)]
pub struct ChartConfig {
    pub name: String,
    pub outdir: PathBuf,
    pub viewport: Viewport,
    pub radars: Vec<RadarConfig>,
    #[serde(default)]
    pub series: Vec<SeriesConfig>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths() {
        assert_eq!("80%".parse::<Length>(), Ok(Length::Percent(80.0)));
        assert_eq!(" 12.5 % ".parse::<Length>(), Ok(Length::Percent(12.5)));
        assert_eq!("40".parse::<Length>(), Ok(Length::Pixels(40.0)));
        assert_eq!("middle".parse::<Length>(), Ok(Length::Percent(50.0)));
        assert_eq!("bottom".parse::<Length>(), Ok(Length::Percent(100.0)));
        assert!("wide".parse::<Length>().is_err());
        assert!("%".parse::<Length>().is_err());

        assert_eq!(Length::Percent(50.0).resolve(300.0), 150.0);
        assert_eq!(Length::Pixels(42.0).resolve(300.0), 42.0);
    }

    #[test]
    fn radar_defaults() {
        let yaml = "indicators:\n  - name: speed\n  - name: power\n    max: 10\n";
        let radar: RadarConfig = serde_norway::from_str(yaml).unwrap();

        assert_eq!(radar.center, default_center());
        assert_eq!(radar.radius, Radius::Outer(Length::Percent(75.0)));
        assert_eq!(radar.start_angle, 90.0);
        assert_eq!(radar.split_number, 5);
        assert!(!radar.scale);
        assert_eq!(radar.indicators[1], IndicatorConfig::new("power").with_max(10.0));
    }

    #[test]
    fn radius_forms() {
        let radar: RadarConfig = serde_norway::from_str("radius: 120\nindicators: []\n").unwrap();
        assert_eq!(radar.radius.bounds(), [Length::Pixels(0.0), Length::Pixels(120.0)]);

        let radar: RadarConfig = serde_norway::from_str("radius: [10, '80%']\nindicators: []\n").unwrap();
        assert_eq!(radar.radius.bounds(), [Length::Pixels(10.0), Length::Percent(80.0)]);

        let radar: Result<RadarConfig, _> = serde_norway::from_str("radius: huge\nindicators: []\n");
        assert!(radar.is_err());
    }

    #[test]
    fn series_defaults() {
        let series: SeriesConfig = serde_norway::from_str("name: a\ndata: [[1, 2, 3]]\n").unwrap();
        assert_eq!(series.coordinate_system, "radar");
        assert_eq!(series.radar_index, 0);
        assert_eq!(series.data, vec![vec![1.0, 2.0, 3.0]]);
    }
}
