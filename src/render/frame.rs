use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, PixelRect};
use crate::error::{ChartError, ChartResult};
use crate::render::primitives::validate_rect;
use crate::render::{
    CirclePrimitive, Color, DrawingSurface, PolylinePrimitive, SurfaceSize, TextPrimitive,
};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear { rect: PixelRect },
    Polyline(PolylinePrimitive),
    Circle(CirclePrimitive),
    Text(TextPrimitive),
}

/// Recording surface: captures the exact draw-call sequence of a render.
///
/// Used for headless rendering, deterministic tests, and deferring the real
/// drawing to a backend through `replay`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub size: SurfaceSize,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn polylines(&self) -> impl Iterator<Item = &PolylinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Polyline(line) => Some(line),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !(self.size.width > 0.0 && self.size.height > 0.0) {
            return Err(ChartError::InvalidViewport {
                width: self.size.width,
                height: self.size.height,
            });
        }

        for command in &self.commands {
            match command {
                DrawCommand::Clear { rect } => validate_rect(*rect)?,
                DrawCommand::Polyline(line) => line.validate()?,
                DrawCommand::Circle(circle) => circle.validate()?,
                DrawCommand::Text(text) => text.validate()?,
            }
        }

        Ok(())
    }

    /// Issues every recorded command against `surface`, in order.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        for command in &self.commands {
            match command {
                DrawCommand::Clear { rect } => surface.clear(*rect)?,
                DrawCommand::Polyline(line) => {
                    surface.stroke_line(&line.points, line.color, line.stroke_width)?;
                }
                DrawCommand::Circle(circle) => {
                    surface.fill_circle(circle.center, circle.radius, circle.color)?;
                }
                DrawCommand::Text(text) => surface.draw_text(text)?,
            }
        }
        Ok(())
    }
}

impl DrawingSurface for RenderFrame {
    fn viewport_size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self, rect: PixelRect) -> ChartResult<()> {
        // A full clear makes everything recorded before it unobservable.
        if rect == PixelRect::new(0.0, 0.0, self.size.width, self.size.height) {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::Clear { rect });
        Ok(())
    }

    fn stroke_line(&mut self, points: &[PixelPoint], color: Color, width: f64) -> ChartResult<()> {
        self.commands.push(DrawCommand::Polyline(PolylinePrimitive {
            points: points.to_vec(),
            color,
            stroke_width: width,
        }));
        Ok(())
    }

    fn fill_circle(&mut self, center: PixelPoint, radius: f64, color: Color) -> ChartResult<()> {
        self.commands.push(DrawCommand::Circle(CirclePrimitive {
            center,
            radius,
            color,
        }));
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        self.commands.push(DrawCommand::Text(text.clone()));
        Ok(())
    }
}
