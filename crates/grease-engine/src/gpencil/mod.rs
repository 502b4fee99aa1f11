// Modules
pub mod frame;
pub mod layer;
pub mod palette;
pub mod stroke;

// Re-exports
pub use frame::Frame;
pub use layer::Layer;
pub use palette::{Palette, PaletteColor};
pub use stroke::{DrawMode, Stroke};

// Imports
use grease_compose::utils::unique_name;
use serde::{Deserialize, Serialize};
use slotmap::HopSlotMap;
use tracing::debug;

slotmap::new_key_type! {
    pub struct PaletteKey;
    pub struct ColorKey;
    pub struct LayerKey;
    pub struct StrokeKey;
}

/// A grease pencil data block: palettes and a stack of layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "grease_pencil")]
pub struct GreasePencil {
    #[serde(rename = "name")]
    name: String,
    #[serde(rename = "palettes")]
    palettes: HopSlotMap<PaletteKey, Palette>,
    #[serde(rename = "active_palette")]
    active_palette: Option<PaletteKey>,
    #[serde(rename = "layers")]
    layers: HopSlotMap<LayerKey, Layer>,
    /// The stacking order, first is the bottom layer.
    #[serde(rename = "layer_order")]
    layer_order: Vec<LayerKey>,
}

impl GreasePencil {
    pub fn new(name: String) -> Self {
        Self {
            name,
            palettes: HopSlotMap::with_key(),
            active_palette: None,
            layers: HopSlotMap::with_key(),
            layer_order: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a new palette, named uniquely within the data block. It becomes the active palette.
    pub fn new_palette(&mut self, name: &str) -> PaletteKey {
        let name = unique_name(name, |n| self.palettes.values().any(|p| p.name() == n));
        debug!("new palette \"{name}\" in grease pencil \"{}\"", self.name);

        let key = self.palettes.insert(Palette::new(name));
        self.active_palette = Some(key);
        key
    }

    /// Renames the palette, uniquely within the data block. Returns the name it received.
    pub fn rename_palette(&mut self, key: PaletteKey, name: &str) -> Option<String> {
        let name = unique_name(name, |n| {
            self.palettes
                .iter()
                .any(|(k, p)| k != key && p.name() == n)
        });
        self.palettes.get_mut(key)?.set_name(name.clone());
        Some(name)
    }

    pub fn remove_palette(&mut self, key: PaletteKey) -> Option<Palette> {
        let palette = self.palettes.remove(key)?;
        if self.active_palette == Some(key) {
            self.active_palette = self.palettes.keys().next();
        }
        Some(palette)
    }

    pub fn palette(&self, key: PaletteKey) -> Option<&Palette> {
        self.palettes.get(key)
    }

    pub fn palette_mut(&mut self, key: PaletteKey) -> Option<&mut Palette> {
        self.palettes.get_mut(key)
    }

    pub fn active_palette_key(&self) -> Option<PaletteKey> {
        self.active_palette
    }

    pub fn palettes(&self) -> impl Iterator<Item = (PaletteKey, &Palette)> + '_ {
        self.palettes.iter()
    }

    /// Looks up a color by name through all palettes, the active palette first.
    pub fn color_by_name(&self, name: &str) -> Option<&PaletteColor> {
        self.active_palette
            .and_then(|key| self.palettes.get(key))
            .and_then(|p| p.color_by_name(name))
            .or_else(|| self.palettes.values().find_map(|p| p.color_by_name(name)))
    }

    /// Adds a new layer on top of the stack, named uniquely within the data block.
    pub fn new_layer(&mut self, name: &str, line_change: i32) -> LayerKey {
        let name = unique_name(name, |n| self.layers.values().any(|l| l.name() == n));
        debug!("new layer \"{name}\" in grease pencil \"{}\"", self.name);

        let key = self.layers.insert(Layer::new(name, line_change));
        self.layer_order.push(key);
        key
    }

    pub fn remove_layer(&mut self, key: LayerKey) -> Option<Layer> {
        let layer = self.layers.remove(key)?;
        self.layer_order.retain(|&k| k != key);
        debug!("removed layer \"{}\" from grease pencil \"{}\"", layer.name(), self.name);
        Some(layer)
    }

    pub fn layer(&self, key: LayerKey) -> Option<&Layer> {
        self.layers.get(key)
    }

    pub fn layer_mut(&mut self, key: LayerKey) -> Option<&mut Layer> {
        self.layers.get_mut(key)
    }

    pub fn layer_by_name(&self, name: &str) -> Option<(LayerKey, &Layer)> {
        self.layers.iter().find(|(_, l)| l.name() == name)
    }

    /// The layers from the bottom to the top of the stack.
    pub fn layers(&self) -> impl Iterator<Item = (LayerKey, &Layer)> + '_ {
        self.layer_order
            .iter()
            .filter_map(|&key| self.layers.get(key).map(|l| (key, l)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_and_layer_names() {
        let mut gp = GreasePencil::new(String::from("Grease Pencil"));
        let p0 = gp.new_palette("Grease");
        let p1 = gp.new_palette("Grease");
        assert_eq!(gp.palette(p1).unwrap().name(), "Grease.001");
        assert_eq!(gp.active_palette_key(), Some(p1));

        // renaming to its own name keeps it
        assert_eq!(gp.rename_palette(p0, "Grease").unwrap(), "Grease");
        assert_eq!(gp.rename_palette(p1, "Grease").unwrap(), "Grease.001");

        let l0 = gp.new_layer("Grease", 2);
        let l1 = gp.new_layer("Grease", 2);
        assert_eq!(gp.layer(l1).unwrap().name(), "Grease.001");
        assert_eq!(
            gp.layers().map(|(k, _)| k).collect::<Vec<_>>(),
            vec![l0, l1]
        );

        gp.remove_layer(l0).unwrap();
        assert_eq!(gp.layers().count(), 1);
        assert!(gp.layer_by_name("Grease").is_none());
    }

    #[test]
    fn removing_active_palette() {
        let mut gp = GreasePencil::new(String::from("Grease Pencil"));
        let p0 = gp.new_palette("A");
        let p1 = gp.new_palette("B");

        gp.remove_palette(p1).unwrap();
        assert_eq!(gp.active_palette_key(), Some(p0));
        gp.remove_palette(p0).unwrap();
        assert_eq!(gp.active_palette_key(), None);
    }
}
