// Imports
use crate::{Document, EngineError};
use grease_compose::ext::Vector3Ext;
use grease_compose::Color;
use itertools::Itertools;
use svg::node::element;
use tracing::{debug, warn};

/// Svg stroke widths are never smaller.
const MIN_STROKE_WIDTH: f64 = 0.1;

/// Exports all strokes of all layers at the frame number as svg.
///
/// The strokes are projected orthographically onto the XY plane, with the Y axis pointing up.
/// Layers are exported as groups from the bottom to the top of the stack, strokes in draw order.
pub fn frame_as_svg(document: &Document, frame_number: i32) -> anyhow::Result<String> {
    let gp = document
        .grease_pencil()
        .ok_or(EngineError::NoGreasePencil)?;
    let config = document.config();

    let mut bounds: Option<(na::Vector3<f64>, na::Vector3<f64>)> = None;
    let mut svg_doc = svg::Document::new();

    for (_, layer) in gp.layers() {
        let Some(frame) = layer.frame(frame_number) else {
            continue;
        };
        let stroke_width =
            (config.svg_base_stroke_width + f64::from(layer.line_change())).max(MIN_STROKE_WIDTH);
        let mut group = element::Group::new().set("id", layer.name());

        for stroke in frame.strokes() {
            let curve = stroke.curve();
            if curve.is_empty() {
                continue;
            }

            let color = match gp.color_by_name(stroke.color_name()) {
                Some(palette_color) => palette_color.color,
                None => {
                    warn!(
                        "color \"{}\" of stroke not found in any palette, exporting it black",
                        stroke.color_name()
                    );
                    Color::BLACK
                }
            };

            let projected = curve
                .world_positions()
                .map(|p| na::vector![p.x, -p.y, 0.0])
                .collect::<Vec<na::Vector3<f64>>>();
            for p in projected.iter() {
                let extended = (
                    p - na::Vector3::repeat(stroke_width * 0.5),
                    p + na::Vector3::repeat(stroke_width * 0.5),
                );
                bounds = Some(match bounds {
                    Some((mins, maxs)) => (mins.mins(&extended.0), maxs.maxs(&extended.1)),
                    None => extended,
                });
            }

            let points = projected
                .iter()
                .map(|p| format!("{:.3},{:.3}", p.x, p.y))
                .join(" ");
            group = group.add(
                element::Polyline::new()
                    .set("points", points)
                    .set("fill", "none")
                    .set("stroke", color.to_css_color_attr())
                    .set("stroke-width", stroke_width)
                    .set("stroke-linecap", "round")
                    .set("stroke-linejoin", "round"),
            );
        }

        svg_doc = svg_doc.add(group);
    }

    let (mins, maxs) = bounds.unwrap_or((na::Vector3::zeros(), na::Vector3::repeat(1.0)));
    debug!("exporting frame {frame_number} as svg with bounds {mins:?} - {maxs:?}");

    svg_doc = svg_doc.set(
        "viewBox",
        (mins.x, mins.y, maxs.x - mins.x, maxs.y - mins.y),
    );

    Ok(svg_doc.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StrokeLayer;
    use grease_compose::circle_points;

    #[test]
    fn one_polyline_per_stroke() {
        let mut document = Document::default();
        let stroke_layer = StrokeLayer::new(&mut document, "Grease").unwrap();
        for i in 0..3_i32 {
            let key = stroke_layer.create_stroke(&mut document).unwrap();
            let curve = stroke_layer.stroke_curve_mut(&mut document, key).unwrap();
            curve.set_points(circle_points(8, true)).unwrap();
            curve.set_location(na::vector![f64::from(i) * 3.0, 0.0, 0.0]);
        }
        // empty strokes are skipped
        stroke_layer.create_stroke(&mut document).unwrap();

        let svg = frame_as_svg(&document, document.frame_current()).unwrap();

        assert_eq!(svg.matches("<polyline").count(), 3);
        assert!(svg.contains("id=\"Grease\""));
        assert!(svg.contains("rgba(000,000,000,1.000)"));
        assert!(svg.contains("viewBox"));
    }

    #[test]
    fn other_frames_are_not_exported() {
        let mut document = Document::default();
        let stroke_layer = StrokeLayer::new(&mut document, "Grease").unwrap();
        let key = stroke_layer.create_stroke(&mut document).unwrap();
        stroke_layer
            .stroke_curve_mut(&mut document, key)
            .unwrap()
            .set_points(circle_points(4, false))
            .unwrap();

        let svg = frame_as_svg(&document, document.frame_current() + 1).unwrap();
        assert_eq!(svg.matches("<polyline").count(), 0);
    }

    #[test]
    fn no_data_block() {
        assert!(frame_as_svg(&Document::default(), 1).is_err());
    }
}
