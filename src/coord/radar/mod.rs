//! Radar (spider) coordinate system.
//!
//! Indicator axes are spread evenly around a center, counter-clockwise from the
//! start angle. Every axis gets its own extent but all of them share the same
//! number of splits, so the grid rings line up across axes.

mod indicator_axis;

use std::f64::consts::{PI, TAU};

use geo::Coord;
use log::{debug, warn};

use crate::{
    config::{ChartConfig, RadarConfig, Viewport},
    data::SeriesData,
    number::{normalize_radian, round, DEFAULT_PRECISION},
    scale::EMPTY_EXTENT,
};

use super::{axis_helper::{get_scale_extent, nice_scale_extent}, CoordinateSystem, Created};

pub use indicator_axis::IndicatorAxis;

pub const KIND: &str = "radar";


#[derive(Clone, Debug)]
pub struct Radar {
    /// Position among the radars of the chart, series refer to it.
    index: usize,
    model: RadarConfig,
    indicator_axes: Vec<IndicatorAxis>,
    dimensions: Vec<String>,
    pub cx: f64,
    pub cy: f64,
    pub r0: f64,
    pub r: f64,
    /// Radians.
    pub start_angle: f64,
}

impl Radar {
    pub fn new(index: usize, model: RadarConfig, viewport: Viewport) -> Self {
        let indicator_axes: Vec<_> = model.indicators
            .iter()
            .enumerate()
            .map(|(i, indicator)| IndicatorAxis::new(format!("indicator_{i}"), indicator.clone()))
            .collect();

        let dimensions = indicator_axes.iter().map(|axis| axis.dim.clone()).collect();

        let mut radar = Self {
            index,
            model,
            indicator_axes,
            dimensions,
            cx: 0.0,
            cy: 0.0,
            r0: 0.0,
            r: 0.0,
            start_angle: 0.0,
        };

        radar.resize(viewport);
        radar
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn model(&self) -> &RadarConfig {
        &self.model
    }

    pub fn indicator_axes(&self) -> &[IndicatorAxis] {
        &self.indicator_axes
    }

    /// Axis built from the indicator at `indicator_index` of the model.
    pub fn indicator_axis(&self, indicator_index: usize) -> Option<&IndicatorAxis> {
        self.indicator_axes.get(indicator_index)
    }

    pub fn coord_to_point(&self, coord: f64, axis_index: usize) -> Option<Coord> {
        let angle = self.indicator_axes.get(axis_index)?.angle;

        // Screen y grows downwards
        Some(Coord {
            x: self.cx + coord * angle.cos(),
            y: self.cy - coord * angle.sin(),
        })
    }

    fn fit_axes(&mut self, series: &[SeriesData]) {
        for axis in &mut self.indicator_axes {
            axis.scale.set_extent(EMPTY_EXTENT[0], EMPTY_EXTENT[1]);
        }

        let bound = series
            .iter()
            .filter(|s| s.coordinate_system == KIND && s.coordinate_index == self.index);

        for data in bound {
            for axis in &mut self.indicator_axes {
                if let Some(column) = data.map_dimension(&axis.dim) {
                    axis.scale.union_extent_from_data(data, column);
                }
            }
        }

        let split_number = self.model.split_number;
        let split = split_number as f64;

        for axis in &mut self.indicator_axes {
            let raw = get_scale_extent(&axis.scale, axis.model(), self.model.scale);
            let [raw_min, raw_max] = raw.extent;
            let fixed = (axis.model().min, axis.model().max);

            if raw.is_blank() && fixed == (None, None) {
                debug!("{}: no data, keeping the empty extent", axis.dim);
                continue;
            }

            nice_scale_extent(&mut axis.scale, &raw, split_number);

            let scale = &mut axis.scale;
            let Some(mut interval) = scale.interval() else {
                warn!("{}: no interval could be picked for {:?}", axis.dim, raw.extent);
                continue;
            };

            match fixed {
                (Some(min), Some(max)) => {
                    scale.set_extent(min, max);
                    scale.set_interval((max - min) / split);
                },
                (Some(min), None) => loop {
                    let max = min + interval * split;
                    scale.set_extent(min, max);
                    scale.set_interval(interval);

                    interval = increase_interval(interval);

                    if !(max < raw_max && max.is_finite() && raw_max.is_finite()) {
                        break;
                    }
                },
                (None, Some(max)) => loop {
                    let min = max - interval * split;
                    scale.set_extent(min, max);
                    scale.set_interval(interval);

                    interval = increase_interval(interval);

                    if !(min > raw_min && min.is_finite() && raw_min.is_finite()) {
                        break;
                    }
                },
                (None, None) => {
                    let niced_split_number = scale.ticks().len().saturating_sub(1);
                    if niced_split_number > split_number {
                        interval = increase_interval(interval);
                    }

                    let max = (raw_max / interval).ceil() * interval;
                    let min = round(max - interval * split, DEFAULT_PRECISION);
                    scale.set_extent(min, max);
                    scale.set_interval(interval);
                },
            }

            debug!("{}: {:?} fitted to {:?} every {:?}", axis.dim, raw.extent, scale.extent(), scale.interval());
        }
    }
}


/// Next interval on the 1, 2, 5, 10, 20, 50... ladder.
pub fn increase_interval(interval: f64) -> f64 {
    let exp10 = 10f64.powf(interval.log10().floor());
    let mut f = round(interval / exp10, DEFAULT_PRECISION);
    if f == 2.0 {
        f = 5.0;
    } else {
        f *= 2.0;
    }
    f * exp10
}


impl CoordinateSystem for Radar {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    fn resize(&mut self, viewport: Viewport) {
        let Viewport { width, height } = viewport;
        let view_size = width.min(height) / 2.0;

        let [cx, cy] = self.model.center;
        self.cx = cx.resolve(width);
        self.cy = cy.resolve(height);

        self.start_angle = self.model.start_angle * PI / 180.0;

        let [r0, r] = self.model.radius.bounds();
        self.r0 = r0.resolve(view_size);
        self.r = r.resolve(view_size);

        let count = self.indicator_axes.len() as f64;
        for (i, axis) in self.indicator_axes.iter_mut().enumerate() {
            axis.set_extent(self.r0, self.r);
            axis.angle = normalize_radian(self.start_angle + i as f64 * TAU / count);
        }
    }

    fn update(&mut self, series: &[SeriesData]) {
        self.fit_axes(series);
    }

    fn data_to_point(&self, value: f64, dimension: usize) -> Option<Coord> {
        let axis = self.indicator_axes.get(dimension)?;
        self.coord_to_point(axis.data_to_coord(value), dimension)
    }

    fn point_to_data(&self, point: Coord) -> Option<(usize, f64)> {
        let dx = point.x - self.cx;
        let dy = point.y - self.cy;
        let radius = (dx * dx + dy * dy).sqrt();
        let radian = (-dy / radius).atan2(dx / radius);

        let mut closest = None;
        let mut min_diff = f64::INFINITY;
        for (i, axis) in self.indicator_axes.iter().enumerate() {
            let diff = (radian - axis.angle).abs();
            // Ties stay with the lower index
            if diff < min_diff {
                closest = Some(i);
                min_diff = diff;
            }
        }

        let i = closest?;
        Some((i, self.indicator_axes[i].coord_to_data(radius)))
    }

    fn as_radar(&self) -> Option<&Radar> {
        Some(self)
    }
}


/// One radar per configured region, with radar series wired by `radar_index`.
pub fn create(chart: &ChartConfig, viewport: Viewport) -> Created {
    let radars: Vec<_> = chart.radars
        .iter()
        .enumerate()
        .map(|(i, model)| Radar::new(i, model.clone(), viewport))
        .collect();

    let bindings = chart.series
        .iter()
        .map(|series| {
            if series.coordinate_system != KIND {
                return None;
            }
            if series.radar_index >= radars.len() {
                warn!("Series {:?} refers to radar {} which does not exist", series.name, series.radar_index);
                return None;
            }
            Some(series.radar_index)
        })
        .collect();

    Created {
        systems: radars.into_iter().map(|radar| Box::new(radar) as Box<dyn CoordinateSystem>).collect(),
        bindings,
    }
}
