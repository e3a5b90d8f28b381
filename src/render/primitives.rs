use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, PixelRect};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from 8-bit channels.
    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(ChartError::InvalidData(format!(
                "color `{input}` must be #RRGGBB or #RRGGBBAA"
            )));
        }

        let channel = |offset: usize| -> ChartResult<f64> {
            u8::from_str_radix(&digits[offset..offset + 2], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| ChartError::InvalidData(format!("color `{input}` is not hex")))
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Formats as `#RRGGBB`, appending alpha only when it is not opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let mut hex = format!(
            "#{:02X}{:02X}{:02X}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        );
        if byte(self.alpha) != u8::MAX {
            hex.push_str(&format!("{:02X}", byte(self.alpha)));
        }
        hex
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextVAlign {
    Top,
    Middle,
    Baseline,
}

/// Text direction; `Vertical` reads bottom-to-top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextOrientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size_px: f64,
}

impl FontSpec {
    #[must_use]
    pub fn new(family: impl Into<String>, size_px: f64) -> Self {
        Self {
            family: family.into(),
            size_px,
        }
    }

    #[must_use]
    pub fn sans(size_px: f64) -> Self {
        Self::new("Sans", size_px)
    }
}

/// Open polyline in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylinePrimitive {
    pub points: Vec<PixelPoint>,
    pub color: Color,
    pub stroke_width: f64,
}

impl PolylinePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self.points.len() < 2 {
            return Err(ChartError::InvalidData(
                "polyline needs at least two points".to_owned(),
            ));
        }
        if !self.points.iter().all(|point| point.is_finite()) {
            return Err(ChartError::InvalidData(
                "polyline coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled point marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub center: PixelPoint,
    pub radius: f64,
    pub color: Color,
}

impl CirclePrimitive {
    pub fn validate(self) -> ChartResult<()> {
        if !self.center.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub position: PixelPoint,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
    #[serde(default)]
    pub orientation: TextOrientation,
    pub font: FontSpec,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        position: PixelPoint,
        h_align: TextHAlign,
        v_align: TextVAlign,
        font: FontSpec,
        color: Color,
    ) -> Self {
        Self {
            text: text.into(),
            position,
            h_align,
            v_align,
            orientation: TextOrientation::Horizontal,
            font,
            color,
        }
    }

    #[must_use]
    pub fn vertical(mut self) -> Self {
        self.orientation = TextOrientation::Vertical;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.position.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font.size_px.is_finite() || self.font.size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

pub(crate) fn validate_rect(rect: PixelRect) -> ChartResult<()> {
    let finite = [rect.x, rect.y, rect.width, rect.height]
        .iter()
        .all(|value| value.is_finite());
    if !finite || rect.width < 0.0 || rect.height < 0.0 {
        return Err(ChartError::InvalidData(
            "rect must be finite with non-negative size".to_owned(),
        ));
    }
    Ok(())
}
