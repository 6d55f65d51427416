pub mod axis_helper;
pub mod radar;

use std::{collections::BTreeMap, fmt::Debug};

use geo::Coord;
use log::{debug, warn};
use thiserror::Error;

use crate::{config::{ChartConfig, Viewport}, data::SeriesData};

use radar::Radar;


#[derive(Debug, Error, PartialEq)]
pub enum CoordError {
    #[error("{operation} is not supported by the {kind} coordinate system")]
    Unsupported {
        kind: &'static str,
        operation: &'static str,
    },
    #[error("No coordinate system is registered as {0:?}")]
    UnknownKind(String),
}

fn unsupported<T>(kind: &'static str, operation: &'static str) -> Result<T, CoordError> {
    warn!("{operation} is not implemented for {kind}");
    Err(CoordError::Unsupported { kind, operation })
}


pub trait CoordinateSystem: Debug {
    /// Tag the system is registered under.
    fn kind(&self) -> &'static str;

    /// Keys series data is addressed by, in axis order.
    fn dimensions(&self) -> &[String];

    /// Recompute the geometry for a new viewport.
    fn resize(&mut self, viewport: Viewport);

    /// Refit the axes against the data of the series bound to this system.
    fn update(&mut self, series: &[SeriesData]);

    fn data_to_point(&self, value: f64, dimension: usize) -> Option<Coord>;

    /// Closest dimension to `point`, and the value that point reads on it.
    fn point_to_data(&self, point: Coord) -> Option<(usize, f64)>;

    fn convert_to_pixel(&self, _value: &[f64]) -> Result<Coord, CoordError> {
        unsupported(self.kind(), "convert_to_pixel")
    }

    fn convert_from_pixel(&self, _pixel: Coord) -> Result<Vec<f64>, CoordError> {
        unsupported(self.kind(), "convert_from_pixel")
    }

    fn contain_point(&self, _point: Coord) -> Result<bool, CoordError> {
        unsupported(self.kind(), "contain_point")
    }

    fn as_radar(&self) -> Option<&Radar> {
        None
    }
}


/// Coordinate systems built for a chart by one factory.
#[derive(Debug, Default)]
pub struct Created {
    pub systems: Vec<Box<dyn CoordinateSystem>>,
    /// For every series of the chart, the index in `systems` it is wired to.
    pub bindings: Vec<Option<usize>>,
}

pub type Factory = fn(&ChartConfig, Viewport) -> Created;


/// Table of coordinate-system factories, keyed by kind.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    factories: BTreeMap<&'static str, Factory>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every coordinate system this crate provides.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(radar::KIND, radar::create);
        registry
    }

    /// Returns the factory previously registered under `kind`, if any.
    pub fn register(&mut self, kind: &'static str, factory: Factory) -> Option<Factory> {
        self.factories.insert(kind, factory)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    pub fn get(&self, kind: &str) -> Result<Factory, CoordError> {
        self.factories
            .get(kind)
            .copied()
            .ok_or_else(|| CoordError::UnknownKind(kind.to_string()))
    }

    pub fn create(&self, kind: &str, chart: &ChartConfig, viewport: Viewport) -> Result<Created, CoordError> {
        Ok(self.get(kind)?(chart, viewport))
    }
}


/// Every coordinate system of a chart together with the series bound to them.
#[derive(Debug)]
pub struct CoordinateSystems {
    systems: Vec<Box<dyn CoordinateSystem>>,
    series: Vec<SeriesData>,
    bindings: Vec<Option<usize>>,
}

impl CoordinateSystems {
    pub fn create(registry: &Registry, chart: &ChartConfig, viewport: Viewport) -> Self {
        let mut systems: Vec<Box<dyn CoordinateSystem>> = vec![];
        let mut bindings = vec![None; chart.series.len()];

        for kind in registry.kinds() {
            let Ok(created) = registry.create(kind, chart, viewport) else {
                continue;
            };

            debug!("Created {} {kind} coordinate system(s)", created.systems.len());

            let offset = systems.len();
            for (binding, created) in bindings.iter_mut().zip(created.bindings) {
                if let Some(i) = created {
                    *binding = Some(offset + i);
                }
            }
            systems.extend(created.systems);
        }

        let series = chart.series
            .iter()
            .zip(&bindings)
            .map(|(config, binding)| {
                let dimensions = binding.map(|i| systems[i].dimensions()).unwrap_or_default();
                SeriesData::new(config, dimensions)
            })
            .collect();

        Self {
            systems,
            series,
            bindings,
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        for system in &mut self.systems {
            system.resize(viewport);
        }
    }

    pub fn update(&mut self) {
        for system in &mut self.systems {
            system.update(&self.series);
        }
    }

    pub fn systems(&self) -> &[Box<dyn CoordinateSystem>] {
        &self.systems
    }

    pub fn series(&self) -> &[SeriesData] {
        &self.series
    }

    /// Coordinate system the series at `series_index` is drawn in.
    pub fn system_of(&self, series_index: usize) -> Option<&dyn CoordinateSystem> {
        let i = (*self.bindings.get(series_index)?)?;
        Some(self.systems[i].as_ref())
    }

    /// Series bound to the system at `system_index`.
    pub fn series_of(&self, system_index: usize) -> impl Iterator<Item = &SeriesData> + '_ {
        self.series
            .iter()
            .zip(&self.bindings)
            .filter(move |(_, binding)| **binding == Some(system_index))
            .map(|(series, _)| series)
    }
}
