//! tumor-chart: line chart engine for tumor-dynamics simulation output.
//!
//! The engine turns a `SeriesSet` (one shared time axis plus any number of
//! possibly-sparse value series) into draw calls on an injected
//! `DrawingSurface`, and hands back the legend and a render report. Data
//! gaps never fail a render; they only reduce what gets drawn.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartConfig, ChartHost, ChartRenderer, RenderIssue, RenderReport, RenderStage};
pub use error::{ChartError, ChartResult};
