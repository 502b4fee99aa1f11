// Imports
use crate::validators::{self, OutputFormat};
use anyhow::Context;
use grease_compose::{circle_points, Color, Transform};
use grease_engine::{export, Document, DrawMode, EngineConfig, StrokeLayer};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub(crate) struct CircleOpts {
    pub(crate) segments: usize,
    pub(crate) strokes: usize,
    pub(crate) location: na::Vector3<f64>,
    pub(crate) rotation_z_deg: f64,
    pub(crate) scale: na::Vector3<f64>,
    pub(crate) layer: String,
    pub(crate) frame: i32,
    pub(crate) color: Option<String>,
    pub(crate) draw_mode: Option<DrawMode>,
}

pub(crate) fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    validators::path_is_file(path)?;

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file \"{}\" failed", path.display()))?;
    debug!("loaded config from \"{}\"", path.display());
    EngineConfig::load_from_json(&json)
}

/// Builds a document holding the circle strokes.
pub(crate) fn generate(mut config: EngineConfig, opts: &CircleOpts) -> anyhow::Result<Document> {
    if let Some(color) = opts.color.as_deref() {
        config.default_color = Color::from_hex(color)?;
    }
    if let Some(draw_mode) = opts.draw_mode {
        config.stroke_draw_mode = draw_mode;
    }

    let mut document = Document::new(config);
    document.set_frame_current(opts.frame);

    let stroke_layer = StrokeLayer::new(&mut document, &opts.layer)?;
    let rotation = na::UnitQuaternion::from_axis_angle(
        &na::Vector3::z_axis(),
        opts.rotation_z_deg.to_radians(),
    );

    for i in 0..opts.strokes {
        let key = stroke_layer.create_stroke(&mut document)?;
        let curve = stroke_layer.stroke_curve_mut(&mut document, key)?;

        curve
            .set_points(circle_points(opts.segments, true))
            .context("setting circle stroke points failed")?;
        curve.set_transform(Transform::new(
            opts.location,
            rotation,
            opts.scale * (i + 1) as f64,
        ));
    }

    info!(
        "generated {} circle stroke(s) with {} segments in layer \"{}\"",
        opts.strokes, opts.segments, opts.layer
    );
    Ok(document)
}

pub(crate) fn run_circle(
    output: &Path,
    config: EngineConfig,
    opts: &CircleOpts,
) -> anyhow::Result<()> {
    let format = validators::output_format(output)?;
    let document = generate(config, opts)?;

    let data = match format {
        OutputFormat::Json => document.save_as_json()?,
        OutputFormat::Svg => export::frame_as_svg(&document, opts.frame)?,
    };

    std::fs::write(output, data)
        .with_context(|| format!("writing output file \"{}\" failed", output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> CircleOpts {
        CircleOpts {
            segments: 8,
            strokes: 3,
            location: na::vector![0.0, 0.0, 2.0],
            rotation_z_deg: 90.0,
            scale: na::vector![1.0, 1.0, 1.0],
            layer: String::from("Circles"),
            frame: 4,
            color: Some(String::from("#ff0000")),
            draw_mode: None,
        }
    }

    #[test]
    fn generates_concentric_strokes() {
        let document = generate(EngineConfig::default(), &opts()).unwrap();

        let gp = document.grease_pencil().unwrap();
        let (_, layer) = gp.layer_by_name("Circles").unwrap();
        let frame = layer.frame(4).unwrap();
        assert_eq!(frame.len(), 3);

        for (i, stroke) in frame.strokes().enumerate() {
            let first = stroke.curve().world_positions().next().unwrap();
            // (0, 1, 0) scaled, rotated onto -x and lifted
            let radius = (i + 1) as f64;
            assert!((first - na::point![-radius, 0.0, 2.0]).norm() < 1e-9);
            assert_eq!(stroke.curve().world_positions().count(), 9);
        }

        assert!(gp.color_by_name("Color").unwrap().color.approx_eq(Color::RED));
    }

    #[test]
    fn invalid_color_fails() {
        let opts = CircleOpts {
            color: Some(String::from("#zzz")),
            ..opts()
        };
        assert!(generate(EngineConfig::default(), &opts).is_err());
    }

    #[test]
    fn missing_config_file_fails() {
        assert!(load_config(Some(Path::new("does/not/exist.json"))).is_err());
        assert!(load_config(None).is_ok());
    }
}
