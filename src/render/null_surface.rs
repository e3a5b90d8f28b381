use crate::core::{PixelPoint, PixelRect};
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, Color, DrawingSurface, PolylinePrimitive, SurfaceSize, TextPrimitive};
use crate::render::primitives::validate_rect;

/// Drawing surface that only validates and counts calls.
///
/// Counters reset on a full clear so they always describe the latest render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NullSurface {
    pub size: SurfaceSize,
    pub clear_count: usize,
    pub line_count: usize,
    pub circle_count: usize,
    pub text_count: usize,
}

impl NullSurface {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: SurfaceSize::new(width, height),
            clear_count: 0,
            line_count: 0,
            circle_count: 0,
            text_count: 0,
        }
    }

    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.clear_count + self.line_count + self.circle_count + self.text_count
    }
}

impl DrawingSurface for NullSurface {
    fn viewport_size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self, rect: PixelRect) -> ChartResult<()> {
        validate_rect(rect)?;
        if rect == PixelRect::new(0.0, 0.0, self.size.width, self.size.height) {
            self.line_count = 0;
            self.circle_count = 0;
            self.text_count = 0;
            self.clear_count = 0;
        }
        self.clear_count += 1;
        Ok(())
    }

    fn stroke_line(&mut self, points: &[PixelPoint], color: Color, width: f64) -> ChartResult<()> {
        PolylinePrimitive {
            points: points.to_vec(),
            color,
            stroke_width: width,
        }
        .validate()?;
        self.line_count += 1;
        Ok(())
    }

    fn fill_circle(&mut self, center: PixelPoint, radius: f64, color: Color) -> ChartResult<()> {
        CirclePrimitive {
            center,
            radius,
            color,
        }
        .validate()?;
        self.circle_count += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        self.text_count += 1;
        Ok(())
    }
}
