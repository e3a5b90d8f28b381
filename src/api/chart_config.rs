use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_MAX_X_LABELS, DEFAULT_Y_TICK_COUNT, Padding, YAxisAnchor};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontSpec};

/// Marker stride targets this many markers per series regardless of length.
pub const DEFAULT_MARKER_TARGET_COUNT: usize = 20;

/// Render-pass configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup; every field has a default so partial JSON documents load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub padding: Padding,
    #[serde(default = "default_max_x_labels")]
    pub max_x_labels: usize,
    #[serde(default = "default_y_tick_count")]
    pub y_tick_count: usize,
    #[serde(default)]
    pub y_axis_anchor: YAxisAnchor,
    #[serde(default = "default_x_axis_title")]
    pub x_axis_title: String,
    #[serde(default = "default_y_axis_title")]
    pub y_axis_title: String,
    #[serde(default)]
    pub style: ChartStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            padding: Padding::default(),
            max_x_labels: default_max_x_labels(),
            y_tick_count: default_y_tick_count(),
            y_axis_anchor: YAxisAnchor::default(),
            x_axis_title: default_x_axis_title(),
            y_axis_title: default_y_axis_title(),
            style: ChartStyle::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_max_x_labels(mut self, max_x_labels: usize) -> Self {
        self.max_x_labels = max_x_labels;
        self
    }

    #[must_use]
    pub fn with_y_tick_count(mut self, y_tick_count: usize) -> Self {
        self.y_tick_count = y_tick_count;
        self
    }

    #[must_use]
    pub fn with_y_axis_anchor(mut self, anchor: YAxisAnchor) -> Self {
        self.y_axis_anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_axis_titles(
        mut self,
        x_axis_title: impl Into<String>,
        y_axis_title: impl Into<String>,
    ) -> Self {
        self.x_axis_title = x_axis_title.into();
        self.y_axis_title = y_axis_title.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.max_x_labels == 0 {
            return Err(ChartError::InvalidData(
                "max_x_labels must be > 0".to_owned(),
            ));
        }
        if self.y_tick_count == 0 {
            return Err(ChartError::InvalidData(
                "y_tick_count must be > 0".to_owned(),
            ));
        }
        let padding = self.padding;
        if [padding.top, padding.right, padding.bottom, padding.left]
            .iter()
            .any(|value| !value.is_finite() || *value < 0.0)
        {
            return Err(ChartError::InvalidData(
                "padding must be finite and >= 0".to_owned(),
            ));
        }
        self.style.validate()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

/// Stroke widths, colors and fonts of the non-series chart elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_axis_stroke_width")]
    pub axis_stroke_width: f64,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default = "default_tick_font")]
    pub tick_font: FontSpec,
    #[serde(default = "default_title_font")]
    pub title_font: FontSpec,
    #[serde(default = "default_series_stroke_width")]
    pub series_stroke_width: f64,
    #[serde(default = "default_marker_radius_px")]
    pub marker_radius_px: f64,
    #[serde(default = "default_marker_target_count")]
    pub marker_target_count: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            axis_color: default_axis_color(),
            axis_stroke_width: default_axis_stroke_width(),
            label_color: default_label_color(),
            tick_font: default_tick_font(),
            title_font: default_title_font(),
            series_stroke_width: default_series_stroke_width(),
            marker_radius_px: default_marker_radius_px(),
            marker_target_count: default_marker_target_count(),
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        self.background_color.validate()?;
        self.axis_color.validate()?;
        self.label_color.validate()?;
        for (name, value) in [
            ("axis_stroke_width", self.axis_stroke_width),
            ("series_stroke_width", self.series_stroke_width),
            ("marker_radius_px", self.marker_radius_px),
            ("tick_font.size_px", self.tick_font.size_px),
            ("title_font.size_px", self.title_font.size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if self.marker_target_count == 0 {
            return Err(ChartError::InvalidData(
                "marker_target_count must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Index stride between point markers for an axis of `axis_len` samples.
    #[must_use]
    pub fn marker_stride(&self, axis_len: usize) -> usize {
        (axis_len / self.marker_target_count.max(1)).max(1)
    }
}

fn default_max_x_labels() -> usize {
    DEFAULT_MAX_X_LABELS
}

fn default_y_tick_count() -> usize {
    DEFAULT_Y_TICK_COUNT
}

fn default_x_axis_title() -> String {
    "Time (days)".to_owned()
}

fn default_y_axis_title() -> String {
    "Indicator values".to_owned()
}

fn default_background_color() -> Color {
    Color::rgb(1.0, 1.0, 1.0)
}

fn default_axis_color() -> Color {
    Color::from_rgb8(0x6B, 0x72, 0x80)
}

fn default_axis_stroke_width() -> f64 {
    1.0
}

fn default_label_color() -> Color {
    Color::from_rgb8(0x37, 0x41, 0x51)
}

fn default_tick_font() -> FontSpec {
    FontSpec::sans(12.0)
}

fn default_title_font() -> FontSpec {
    FontSpec::sans(14.0)
}

fn default_series_stroke_width() -> f64 {
    2.0
}

fn default_marker_radius_px() -> f64 {
    3.0
}

fn default_marker_target_count() -> usize {
    DEFAULT_MARKER_TARGET_COUNT
}
