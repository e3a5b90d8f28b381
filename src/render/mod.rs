mod frame;
mod null_surface;
mod primitives;
mod surface;

pub use frame::{DrawCommand, RenderFrame};
pub use null_surface::NullSurface;
pub use primitives::{
    CirclePrimitive, Color, FontSpec, PolylinePrimitive, TextHAlign, TextOrientation,
    TextPrimitive, TextVAlign,
};
pub use surface::{DrawingSurface, SurfaceSize};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextSurface, CairoRenderStats, CairoSurface};
