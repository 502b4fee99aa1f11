// Imports
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A rgba color
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(default, rename = "color")]
pub struct Color {
    /// Red, ranging [0.0, 1.0].
    #[serde(rename = "r", with = "crate::serialize::f64_dp3")]
    pub r: f64,
    /// Green, ranging [0.0, 1.0].
    #[serde(rename = "g", with = "crate::serialize::f64_dp3")]
    pub g: f64,
    /// Blue, ranging [0.0, 1.0].
    #[serde(rename = "b", with = "crate::serialize::f64_dp3")]
    pub b: f64,
    /// Alpha, ranging [0.0, 1.0].
    #[serde(rename = "a", with = "crate::serialize::f64_dp3")]
    pub a: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Black color.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// White color.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Red color.
    pub const RED: Self = Self {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// A new color from rgba values.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Parse a color from a hex string in the style `#rrggbb` or `#rgb`. The alpha is set to 1.0.
    pub fn from_hex(hex: &str) -> anyhow::Result<Self> {
        let rgb = palette::Srgb::<u8>::from_str(hex)
            .map_err(|e| anyhow::anyhow!("Parsing color from hex string \"{hex}\" failed, Err: {e:?}"))?
            .into_format::<f64>();

        Ok(Self::new(rgb.red, rgb.green, rgb.blue, 1.0))
    }

    /// Approximate equality.
    pub fn approx_eq(self, other: Self) -> bool {
        approx::relative_eq!(self.r, other.r)
            && approx::relative_eq!(self.g, other.g)
            && approx::relative_eq!(self.b, other.b)
            && approx::relative_eq!(self.a, other.a)
    }

    /// Convert to a css color attribute in the style: `rgba(xxx,xxx,xxx,xxx)`.
    /// The values are 8 bit integers, ranging [0, 255].
    pub fn to_css_color_attr(self) -> String {
        format!(
            "rgba({:03},{:03},{:03},{:.3})",
            (self.r * 255.0) as i32,
            (self.g * 255.0) as i32,
            (self.b * 255.0) as i32,
            ((1000.0 * self.a).round() / 1000.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    use approx::assert_relative_eq;

    #[test]
    fn parse_hex() {
        let color = Color::from_hex("#ff8000").unwrap();
        assert_relative_eq!(color.r, 1.0);
        assert_relative_eq!(color.g, 128.0 / 255.0);
        assert_relative_eq!(color.b, 0.0);
        assert_relative_eq!(color.a, 1.0);

        assert!(Color::from_hex("not a color").is_err());
    }

    #[test]
    fn css_attr() {
        assert_eq!(Color::RED.to_css_color_attr(), "rgba(255,000,000,1.000)");
    }
}
