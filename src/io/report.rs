use serde::Serialize;

use crate::coord::{radar::Radar, CoordinateSystem, CoordinateSystems};


#[derive(Debug, Serialize)]
pub struct AxisReport {
    pub dim: String,
    pub name: String,
    /// Degrees.
    pub angle: f64,
    pub extent: [f64; 2],
    pub interval: Option<f64>,
    pub ticks: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct SeriesReport {
    pub name: String,
    /// One closed polygon per data row, in pixels.
    pub polygons: Vec<Vec<[f64; 2]>>,
}

#[derive(Debug, Serialize)]
pub struct RadarReport {
    pub center: [f64; 2],
    pub radius: [f64; 2],
    /// Degrees.
    pub start_angle: f64,
    pub split_number: usize,
    pub axes: Vec<AxisReport>,
    pub series: Vec<SeriesReport>,
}

#[derive(Debug, Serialize)]
pub struct LayoutReport {
    pub name: String,
    pub radars: Vec<RadarReport>,
}


/// Pixel polygon of every row of `rows`, one vertex per axis.
pub fn radar_polygons<'a>(radar: &Radar, rows: impl Iterator<Item = &'a [f64]>) -> Vec<Vec<[f64; 2]>> {
    rows.map(|row| {
        row.iter()
            .enumerate()
            .filter_map(|(i, &value)| radar.data_to_point(value, i))
            .map(|p| p.x_y().into())
            .collect()
    })
    .collect()
}


fn radar_report(radar: &Radar, systems: &CoordinateSystems, system_index: usize) -> RadarReport {
    let axes = radar.indicator_axes()
        .iter()
        .map(|axis| AxisReport {
            dim: axis.dim.clone(),
            name: axis.name.clone(),
            angle: axis.angle.to_degrees(),
            extent: axis.scale.extent(),
            interval: axis.scale.interval(),
            ticks: axis.scale.ticks(),
        })
        .collect();

    let series = systems.series_of(system_index)
        .map(|data| SeriesReport {
            name: data.name.clone(),
            polygons: radar_polygons(radar, data.rows()),
        })
        .collect();

    RadarReport {
        center: [radar.cx, radar.cy],
        radius: [radar.r0, radar.r],
        start_angle: radar.start_angle.to_degrees(),
        split_number: radar.model().split_number,
        axes,
        series,
    }
}


pub fn make_report(name: &str, systems: &CoordinateSystems) -> LayoutReport {
    let radars = systems.systems()
        .iter()
        .enumerate()
        .filter_map(|(i, system)| Some(radar_report(system.as_radar()?, systems, i)))
        .collect();

    LayoutReport {
        name: name.to_string(),
        radars,
    }
}
