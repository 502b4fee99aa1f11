// Imports
use crate::{circle, validators};
use clap::Parser;
use grease_engine::DrawMode;
use std::path::PathBuf;

///    grease-cli{n}{n}
///    This program is free software; you can redistribute it{n}
///    and/or modify it under the terms of the GPL v3 or (at your option){n}
///    any later version.
#[derive(clap::Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
    /// An engine config json file. Missing fields are set to their defaults.
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Generates circle strokes in a new stroke layer and writes the document.{n}
    /// The output format is chosen by the file extension, either `.json` or `.svg`.
    Circle {
        /// The output file.
        #[arg(short = 'o', long)]
        output: PathBuf,
        /// The number of points sampled on each circle.
        #[arg(long, default_value_t = 32)]
        segments: usize,
        /// The number of concentric circle strokes, each one unit larger than the previous.
        #[arg(long, default_value_t = 1)]
        strokes: usize,
        /// The location, as `x,y,z`.
        #[arg(long, value_parser = validators::parse_vector3, allow_hyphen_values = true, default_value = "0,0,0")]
        location: na::Vector3<f64>,
        /// The rotation around the Z axis, in degrees.
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        rotation_z: f64,
        /// The scale, as `x,y,z`.
        #[arg(long, value_parser = validators::parse_vector3, allow_hyphen_values = true, default_value = "1,1,1")]
        scale: na::Vector3<f64>,
        /// The name of the stroke layer.
        #[arg(long, default_value = "Grease")]
        layer: String,
        /// The frame the strokes are placed at.
        #[arg(long, allow_hyphen_values = true, default_value_t = 1)]
        frame: i32,
        /// The stroke color, as `#rrggbb`. Overrides the config.
        #[arg(long)]
        color: Option<String>,
        /// The stroke draw mode. Overrides the config.
        #[arg(long)]
        draw_mode: Option<DrawMode>,
    },
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = circle::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Circle {
            output,
            segments,
            strokes,
            location,
            rotation_z,
            scale,
            layer,
            frame,
            color,
            draw_mode,
        } => {
            let opts = circle::CircleOpts {
                segments,
                strokes,
                location,
                rotation_z_deg: rotation_z,
                scale,
                layer,
                frame,
                color,
                draw_mode,
            };
            println!("Generating..");
            circle::run_circle(&output, config, &opts)?;
            println!("Written to \"{}\"", output.display());
        }
    }

    Ok(())
}
