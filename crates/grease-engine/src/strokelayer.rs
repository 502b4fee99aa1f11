// Imports
use crate::gpencil::{ColorKey, Frame, GreasePencil, LayerKey, PaletteKey, StrokeKey};
use crate::{Document, EngineError, Stroke};
use grease_compose::{PointBuffer, StrokeCurve};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A stroke container in a document: a palette color, a layer and the layer frame at a frame number.
///
/// Strokes are created and deleted through it, each one wraps a [StrokeCurve].
/// The container only holds keys, the data lives in the document it was created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "stroke_layer")]
pub struct StrokeLayer {
    #[serde(rename = "palette")]
    palette: PaletteKey,
    #[serde(rename = "color")]
    color: ColorKey,
    #[serde(rename = "layer")]
    layer: LayerKey,
    #[serde(rename = "frame_number")]
    frame_number: i32,
}

impl StrokeLayer {
    /// Creates a new stroke container named `name`.
    ///
    /// Uses the grease pencil data block of the document or creates one.
    /// Uses its active palette, or creates a palette when there is none, adds a new color to it and renames it to `name`.
    /// Then adds a new layer with a frame at the current frame of the document.
    pub fn new(document: &mut Document, name: &str) -> Result<Self, EngineError> {
        let default_color = document.config().default_color;
        let line_change = document.config().layer_line_change;
        let frame_number = document.frame_current();
        let gp = document.grease_pencil_or_create();

        let palette = match gp.active_palette_key() {
            Some(palette) => palette,
            None => gp.new_palette(name),
        };
        let color = gp
            .palette_mut(palette)
            .ok_or(EngineError::PaletteNotFound)?
            .new_color(default_color);
        gp.rename_palette(palette, name)
            .ok_or(EngineError::PaletteNotFound)?;

        let layer = gp.new_layer(name, line_change);
        gp.layer_mut(layer)
            .ok_or(EngineError::LayerNotFound)?
            .new_frame(frame_number)?;

        debug!("created stroke layer \"{name}\" at frame {frame_number}");

        Ok(Self {
            palette,
            color,
            layer,
            frame_number,
        })
    }

    pub fn palette_key(&self) -> PaletteKey {
        self.palette
    }

    pub fn color_key(&self) -> ColorKey {
        self.color
    }

    pub fn layer_key(&self) -> LayerKey {
        self.layer
    }

    pub fn frame_number(&self) -> i32 {
        self.frame_number
    }

    /// The name of the container color, which new strokes reference.
    pub fn color_name<'d>(&self, document: &'d Document) -> Result<&'d str, EngineError> {
        let gp = document
            .grease_pencil()
            .ok_or(EngineError::NoGreasePencil)?;
        let color = gp
            .palette(self.palette)
            .ok_or(EngineError::PaletteNotFound)?
            .color(self.color)
            .ok_or(EngineError::ColorNotFound)?;
        Ok(color.name.as_str())
    }

    /// Creates a new, empty stroke in the container frame, using the container color.
    ///
    /// Its draw mode and point limit are taken from the document config.
    pub fn create_stroke(&self, document: &mut Document) -> Result<StrokeKey, EngineError> {
        let color_name = self.color_name(document)?.to_string();
        let draw_mode = document.config().stroke_draw_mode;
        let max_points = document.config().max_points_per_stroke;

        let key = self
            .frame_mut(document)?
            .insert_stroke(Stroke::new(color_name, draw_mode, max_points));
        debug!("created stroke {key:?} with draw mode {draw_mode:?}");
        Ok(key)
    }

    /// Removes the stroke from the container frame.
    pub fn delete_stroke(
        &self,
        document: &mut Document,
        key: StrokeKey,
    ) -> Result<Stroke, EngineError> {
        let stroke = self
            .frame_mut(document)?
            .remove_stroke(key)
            .ok_or(EngineError::StrokeNotFound)?;
        debug!("deleted stroke {key:?}");
        Ok(stroke)
    }

    /// The keys of the strokes in the container frame, in draw order.
    pub fn stroke_keys(&self, document: &Document) -> Result<Vec<StrokeKey>, EngineError> {
        Ok(self.frame(document)?.stroke_keys().to_vec())
    }

    pub fn stroke_curve<'d>(
        &self,
        document: &'d Document,
        key: StrokeKey,
    ) -> Result<&'d StrokeCurve<PointBuffer>, EngineError> {
        self.frame(document)?
            .stroke(key)
            .map(Stroke::curve)
            .ok_or(EngineError::StrokeNotFound)
    }

    pub fn stroke_curve_mut<'d>(
        &self,
        document: &'d mut Document,
        key: StrokeKey,
    ) -> Result<&'d mut StrokeCurve<PointBuffer>, EngineError> {
        self.frame_mut(document)?
            .stroke_mut(key)
            .map(Stroke::curve_mut)
            .ok_or(EngineError::StrokeNotFound)
    }

    /// Removes the layer and the color of the container, releasing it.
    ///
    /// The palette itself is kept, other containers may share it.
    pub fn remove_layer(self, document: &mut Document) -> Result<(), EngineError> {
        let gp = document
            .grease_pencil_mut()
            .ok_or(EngineError::NoGreasePencil)?;

        // Nothing is removed unless the layer and the color both exist.
        gp.layer(self.layer).ok_or(EngineError::LayerNotFound)?;
        gp.palette(self.palette)
            .ok_or(EngineError::PaletteNotFound)?
            .color(self.color)
            .ok_or(EngineError::ColorNotFound)?;

        gp.remove_layer(self.layer)
            .ok_or(EngineError::LayerNotFound)?;
        gp.palette_mut(self.palette)
            .ok_or(EngineError::PaletteNotFound)?
            .remove_color(self.color)
            .ok_or(EngineError::ColorNotFound)?;
        Ok(())
    }

    fn grease_pencil<'d>(&self, document: &'d Document) -> Result<&'d GreasePencil, EngineError> {
        document.grease_pencil().ok_or(EngineError::NoGreasePencil)
    }

    fn frame<'d>(&self, document: &'d Document) -> Result<&'d Frame, EngineError> {
        self.grease_pencil(document)?
            .layer(self.layer)
            .ok_or(EngineError::LayerNotFound)?
            .frame(self.frame_number)
            .ok_or(EngineError::FrameNotFound(self.frame_number))
    }

    fn frame_mut<'d>(&self, document: &'d mut Document) -> Result<&'d mut Frame, EngineError> {
        document
            .grease_pencil_mut()
            .ok_or(EngineError::NoGreasePencil)?
            .layer_mut(self.layer)
            .ok_or(EngineError::LayerNotFound)?
            .frame_mut(self.frame_number)
            .ok_or(EngineError::FrameNotFound(self.frame_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrawMode, EngineConfig};
    use approx::assert_relative_eq;
    use grease_compose::{circle_points, CurveError, PointTarget};

    #[test]
    fn creates_data_block_palette_layer_and_frame() {
        let mut document = Document::default();
        document.set_frame_current(7);

        let stroke_layer = StrokeLayer::new(&mut document, "Grease").unwrap();

        let gp = document.grease_pencil().unwrap();
        assert_eq!(gp.name(), "Grease Pencil");
        assert_eq!(gp.palette(stroke_layer.palette_key()).unwrap().name(), "Grease");
        assert_eq!(stroke_layer.color_name(&document).unwrap(), "Color");

        let layer = gp.layer(stroke_layer.layer_key()).unwrap();
        assert_eq!(layer.name(), "Grease");
        assert_eq!(layer.line_change(), 2);
        assert!(layer.frame(7).unwrap().is_empty());
        assert_eq!(stroke_layer.frame_number(), 7);
    }

    #[test]
    fn reuses_data_block_and_active_palette() {
        let mut document = Document::default();
        let first = StrokeLayer::new(&mut document, "Grease").unwrap();
        let second = StrokeLayer::new(&mut document, "Other").unwrap();

        assert_eq!(first.palette_key(), second.palette_key());
        assert_ne!(first.color_key(), second.color_key());

        let gp = document.grease_pencil().unwrap();
        assert_eq!(gp.palettes().count(), 1);
        // the shared palette is renamed by every new container
        assert_eq!(gp.palette(second.palette_key()).unwrap().name(), "Other");
        assert_eq!(second.color_name(&document).unwrap(), "Color.001");
        assert_eq!(gp.layers().count(), 2);
    }

    #[test]
    fn same_name_gets_unique_layer() {
        let mut document = Document::default();
        let first = StrokeLayer::new(&mut document, "Grease").unwrap();
        let second = StrokeLayer::new(&mut document, "Grease").unwrap();

        let gp = document.grease_pencil().unwrap();
        assert_eq!(gp.layer(first.layer_key()).unwrap().name(), "Grease");
        assert_eq!(gp.layer(second.layer_key()).unwrap().name(), "Grease.001");
    }

    #[test]
    fn stroke_lifecycle() {
        let mut document = Document::default();
        let stroke_layer = StrokeLayer::new(&mut document, "Grease").unwrap();

        let key = stroke_layer.create_stroke(&mut document).unwrap();
        let other = stroke_layer.create_stroke(&mut document).unwrap();
        assert_eq!(stroke_layer.stroke_keys(&document).unwrap(), vec![key, other]);

        let curve = stroke_layer.stroke_curve_mut(&mut document, key).unwrap();
        curve.set_points(circle_points(16, true)).unwrap();
        curve.set_location(na::vector![0.0, 0.0, 5.0]);
        curve.set_scale(na::vector![2.0, 2.0, 2.0]);

        let curve = stroke_layer.stroke_curve(&document, key).unwrap();
        assert_eq!(curve.target().len(), 17);
        assert_relative_eq!(
            curve.target()[0].position,
            na::point![0.0, 2.0, 5.0],
            epsilon = 1e-12
        );

        let stroke = stroke_layer.delete_stroke(&mut document, key).unwrap();
        assert_eq!(stroke.color_name(), "Color");
        assert_eq!(stroke.draw_mode(), DrawMode::Space3d);
        assert_eq!(stroke_layer.stroke_keys(&document).unwrap(), vec![other]);

        assert!(matches!(
            stroke_layer.delete_stroke(&mut document, key),
            Err(EngineError::StrokeNotFound)
        ));
        assert!(matches!(
            stroke_layer.stroke_curve(&document, key),
            Err(EngineError::StrokeNotFound)
        ));
    }

    #[test]
    fn stroke_point_limit_from_config() {
        let mut document = Document::new(EngineConfig {
            max_points_per_stroke: Some(4),
            stroke_draw_mode: DrawMode::Space2d,
            ..EngineConfig::default()
        });
        let stroke_layer = StrokeLayer::new(&mut document, "Grease").unwrap();
        let key = stroke_layer.create_stroke(&mut document).unwrap();

        let curve = stroke_layer.stroke_curve_mut(&mut document, key).unwrap();
        curve.set_points(circle_points(3, true)).unwrap();
        assert!(matches!(
            curve.set_points(circle_points(8, false)),
            Err(CurveError::ResourceAllocation { .. })
        ));
        assert_eq!(curve.target().len(), 4);
        assert_eq!(curve.points().len(), 4);

        let frame = document
            .grease_pencil()
            .unwrap()
            .layer(stroke_layer.layer_key())
            .unwrap()
            .frame(stroke_layer.frame_number())
            .unwrap();
        assert_eq!(frame.stroke(key).unwrap().draw_mode(), DrawMode::Space2d);
    }

    #[test]
    fn remove_layer_releases_layer_and_color() {
        let mut document = Document::default();
        let stroke_layer = StrokeLayer::new(&mut document, "Grease").unwrap();
        let key = stroke_layer.create_stroke(&mut document).unwrap();

        stroke_layer.remove_layer(&mut document).unwrap();

        let gp = document.grease_pencil().unwrap();
        assert!(gp.layer(stroke_layer.layer_key()).is_none());
        let palette = gp.palette(stroke_layer.palette_key()).unwrap();
        assert!(palette.color(stroke_layer.color_key()).is_none());

        assert!(matches!(
            stroke_layer.create_stroke(&mut document),
            Err(EngineError::ColorNotFound)
        ));
        assert!(matches!(
            stroke_layer.stroke_curve(&document, key),
            Err(EngineError::LayerNotFound)
        ));
        assert!(matches!(
            stroke_layer.remove_layer(&mut document),
            Err(EngineError::LayerNotFound)
        ));
    }

    #[test]
    fn remove_layer_with_missing_color_keeps_layer() {
        let mut document = Document::default();
        let stroke_layer = StrokeLayer::new(&mut document, "Grease").unwrap();
        document
            .grease_pencil_mut()
            .unwrap()
            .palette_mut(stroke_layer.palette_key())
            .unwrap()
            .remove_color(stroke_layer.color_key())
            .unwrap();

        assert!(matches!(
            stroke_layer.remove_layer(&mut document),
            Err(EngineError::ColorNotFound)
        ));
        assert!(document
            .grease_pencil()
            .unwrap()
            .layer(stroke_layer.layer_key())
            .is_some());
    }

    #[test]
    fn frame_collision_in_foreign_layer_is_independent() {
        let mut document = Document::default();
        let first = StrokeLayer::new(&mut document, "Grease").unwrap();
        let gp = document.grease_pencil_mut().unwrap();

        assert!(matches!(
            gp.layer_mut(first.layer_key()).unwrap().new_frame(1),
            Err(EngineError::FrameExists(1))
        ));
        // a second container at the same frame gets its own layer, so no collision
        assert!(StrokeLayer::new(&mut document, "Grease").is_ok());
    }
}
