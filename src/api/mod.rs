mod chart_config;
mod chart_host;
mod chart_renderer;
mod payload;
mod series_painter;

pub use chart_config::{ChartConfig, ChartStyle, DEFAULT_MARKER_TARGET_COUNT};
pub use chart_host::{ChartHost, HostState, SharedChartHost};
pub use chart_renderer::{ChartRenderer, RenderIssue, RenderReport, RenderStage};
pub use payload::{INDICATOR_SERIES, SeriesSpec, TUMOR_SERIES, TumorDynamicsPayload};
pub use series_painter::paint_series;
