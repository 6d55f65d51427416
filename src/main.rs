pub mod config;
pub mod coord;
pub mod data;
pub mod io;
pub mod number;
pub mod scale;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;
use config::{ChartConfig, Viewport};
use coord::{CoordinateSystems, Registry};
use log::{error, info};

use crate::io::{report::make_report, svg_output::make_svg};


#[derive(Parser)]
pub struct Args {
    /// Path to the chart config.
    pub config: PathBuf,

    /// Override the viewport width from the config, in pixels.
    #[arg(long)]
    pub width: Option<f64>,

    /// Override the viewport height from the config, in pixels.
    #[arg(long)]
    pub height: Option<f64>,
}


fn main() {
    if let Err(_) = std::env::var("RUST_LOG") {
        unsafe { std::env::set_var("RUST_LOG", "info") };
    }

    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        error!("{err}");
        std::process::exit(1);
    }
}


fn run(args: Args) -> Result<()> {
    let config: ChartConfig = serde_norway::from_reader(std::fs::File::open(&args.config)?)?;

    if !config.outdir.exists() {
        std::fs::create_dir_all(&config.outdir)?;
    }
    ensure!(config.outdir.is_dir(), "{:?} should be a directory", config.outdir);

    let viewport = Viewport {
        width: args.width.unwrap_or(config.viewport.width),
        height: args.height.unwrap_or(config.viewport.height),
    };

    let registry = Registry::with_builtin();
    let mut systems = CoordinateSystems::create(&registry, &config, viewport);

    info!("Created {} coordinate system(s) for {} series", systems.systems().len(), systems.series().len());

    systems.resize(viewport);
    systems.update();

    info!("Fitted the axes");

    let name = &config.name;

    let report = make_report(name, &systems);
    let output_path = config.outdir.join(format!("{name}.yaml"));
    serde_norway::to_writer(std::fs::File::create(output_path)?, &report)?;

    info!("Produced the layout report");

    let document = make_svg(&systems, viewport);
    let output_path = config.outdir.join(format!("{name}.svg"));
    svg::save(output_path, &document)?;

    info!("Produced the overview SVG");

    Ok(())
}
