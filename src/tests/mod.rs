
use std::path::Path;

use anyhow::{ensure, Result};

use crate::{
    config::{ChartConfig, IndicatorConfig, RadarConfig, SeriesConfig, Viewport},
    coord::{radar::Radar, CoordinateSystem, CoordinateSystems, Registry},
    data::SeriesData,
    io::svg_output::make_svg,
};

pub const OUTDIR: &'_ str = "tmp/test-output/";

pub const E: f64 = 1e-9;

fn ensure_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    ensure!(dir.is_dir(), "{dir:?} should be a directory");
    Ok(())
}

pub fn init_test_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .format_timestamp(None)
        .format_target(false)
        .is_test(true)
        .try_init();
}

pub fn viewport(width: f64, height: f64) -> Viewport {
    Viewport { width, height }
}

pub fn chart(radars: Vec<RadarConfig>, series: Vec<SeriesConfig>) -> ChartConfig {
    ChartConfig {
        name: "test".to_string(),
        outdir: OUTDIR.into(),
        viewport: viewport(400.0, 400.0),
        radars,
        series,
    }
}

/// Lay out the chart and save its overview next to the other test outputs.
pub fn run(name: &str, chart: &ChartConfig) -> Result<CoordinateSystems> {
    init_test_logger();
    ensure_dir(OUTDIR)?;

    let mut systems = CoordinateSystems::create(&Registry::with_builtin(), chart, chart.viewport);
    systems.resize(chart.viewport);
    systems.update();

    let output = Path::new(OUTDIR).join(name).with_extension("svg");
    svg::save(output, &make_svg(&systems, chart.viewport))?;

    Ok(systems)
}

/// Radar with one indicator per entry of `indicators`, fitted against `rows`.
pub fn fit(indicators: Vec<IndicatorConfig>, split_number: usize, rows: Vec<Vec<f64>>) -> Radar {
    init_test_logger();

    let config = RadarConfig {
        split_number,
        ..RadarConfig::new(indicators)
    };

    let mut radar = Radar::new(0, config, viewport(400.0, 400.0));
    let series = SeriesData::new(&SeriesConfig::new("data", rows), radar.dimensions());
    radar.update(&[series]);
    radar
}

/// Leading digit of a positive number.
pub fn leading_digit(x: f64) -> f64 {
    let exp10 = 10f64.powf(x.log10().floor());
    crate::number::round(x / exp10, crate::number::DEFAULT_PRECISION)
}
