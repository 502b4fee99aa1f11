// Imports
use super::ColorKey;
use grease_compose::utils::unique_name;
use grease_compose::Color;
use serde::{Deserialize, Serialize};
use slotmap::HopSlotMap;

/// A named color entry of a palette. Strokes reference it by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "palette_color")]
pub struct PaletteColor {
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "color")]
    pub color: Color,
}

/// A named set of colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "palette")]
pub struct Palette {
    #[serde(rename = "name")]
    name: String,
    #[serde(rename = "colors")]
    colors: HopSlotMap<ColorKey, PaletteColor>,
}

impl Palette {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            colors: HopSlotMap::with_key(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Adds a new color, named uniquely within the palette.
    pub fn new_color(&mut self, color: Color) -> ColorKey {
        let name = unique_name("Color", |n| self.color_by_name(n).is_some());
        self.colors.insert(PaletteColor { name, color })
    }

    pub fn remove_color(&mut self, key: ColorKey) -> Option<PaletteColor> {
        self.colors.remove(key)
    }

    pub fn color(&self, key: ColorKey) -> Option<&PaletteColor> {
        self.colors.get(key)
    }

    pub fn color_mut(&mut self, key: ColorKey) -> Option<&mut PaletteColor> {
        self.colors.get_mut(key)
    }

    pub fn color_by_name(&self, name: &str) -> Option<&PaletteColor> {
        self.colors.values().find(|c| c.name == name)
    }

    pub fn colors(&self) -> impl Iterator<Item = (ColorKey, &PaletteColor)> + '_ {
        self.colors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_names_are_unique() {
        let mut palette = Palette::new(String::from("Palette"));
        let first = palette.new_color(Color::BLACK);
        let second = palette.new_color(Color::RED);
        let third = palette.new_color(Color::WHITE);

        assert_eq!(palette.color(first).unwrap().name, "Color");
        assert_eq!(palette.color(second).unwrap().name, "Color.001");
        assert_eq!(palette.color(third).unwrap().name, "Color.002");

        palette.remove_color(first).unwrap();
        let fourth = palette.new_color(Color::BLACK);
        assert_eq!(palette.color(fourth).unwrap().name, "Color");
        assert!(palette.color(first).is_none());
    }
}
