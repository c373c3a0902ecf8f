use std::error::Error;
use std::path::Path;

use clap::Parser;
use log::{error, info};

use phong_tracer::{output, Renderer, SceneDescription};

use crate::cli::Args;
use crate::logger::init_logger;

mod cli;
mod logger;

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut description = SceneDescription::load(&args.scene)?;
    if let Some(width) = args.width {
        description.render.width = Some(width);
    }
    if let Some(height) = args.height {
        description.render.height = Some(height);
    }

    let base_dir = args.scene.parent().unwrap_or_else(|| Path::new("."));
    let world = description.build(base_dir)?;
    info!(
        "Image resolution: {}x{}, aspect ratio {:.3}",
        world.config.width, world.config.height, world.config.aspect_ratio
    );

    let renderer = Renderer::new(world.scene, world.camera, world.config)?;
    let frame = if args.serial {
        renderer.render_serial()?
    } else {
        renderer.render()?
    };

    output::save_png(&frame, &args.output)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logger(args.log_level.clone().into());

    run(&args).map_err(|err| {
        error!("{}", err);
        err
    })
}
