use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{Series, SeriesSet};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Display metadata for one well-known payload series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSpec {
    pub key: &'static str,
    pub label: &'static str,
    color_rgb8: (u8, u8, u8),
}

impl SeriesSpec {
    #[must_use]
    pub const fn color(self) -> Color {
        Color::from_rgb8(self.color_rgb8.0, self.color_rgb8.1, self.color_rgb8.2)
    }
}

/// Series of the multi-series tumor chart, in draw/legend order.
pub const TUMOR_SERIES: [SeriesSpec; 4] = [
    SeriesSpec {
        key: "V",
        label: "V (tumor volume)",
        color_rgb8: (0xEF, 0x44, 0x44),
    },
    SeriesSpec {
        key: "Ns",
        label: "Ns (sensitive cells)",
        color_rgb8: (0x10, 0xB9, 0x81),
    },
    SeriesSpec {
        key: "Nr",
        label: "Nr (resistant cells)",
        color_rgb8: (0xF5, 0x9E, 0x0B),
    },
    SeriesSpec {
        key: "N",
        label: "N (total cells)",
        color_rgb8: (0x3B, 0x82, 0xF6),
    },
];

/// Scalar indicator drawn on its own single-series chart.
pub const INDICATOR_SERIES: SeriesSpec = SeriesSpec {
    key: "indicator",
    label: "Indicator",
    color_rgb8: (0x8B, 0x5C, 0xF6),
};

/// Tumor-dynamics response as delivered by the simulation backend.
///
/// Parsing never fails on shape: a field that is absent or not an array is
/// simply absent, and array entries that are not numbers become missing
/// samples. Only text that is not JSON at all is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TumorDynamicsPayload {
    pub ok: Option<bool>,
    pub time_axis: Option<Vec<Option<f64>>>,
    pub series: IndexMap<String, Vec<Option<f64>>>,
    /// Dose schedule for report consumers; the chart ignores it.
    pub doses: IndexMap<String, Value>,
}

impl TumorDynamicsPayload {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse tumor dynamics json: {e}"))
        })?;
        Ok(Self::from_value(&value))
    }

    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            warn!("tumor dynamics payload is not an object; treating as empty");
            return Self::default();
        };

        let ok = match object.get("ok") {
            None | Some(Value::Null) => None,
            Some(Value::Bool(flag)) => Some(*flag),
            Some(other) => {
                warn!(value = %other, "ignoring non-boolean `ok` flag");
                None
            }
        };

        let time_axis = object.get("t").and_then(|raw| numeric_array("t", raw));

        let mut series = IndexMap::new();
        for spec in TUMOR_SERIES.iter().chain(std::iter::once(&INDICATOR_SERIES)) {
            if let Some(values) = object.get(spec.key).and_then(|raw| numeric_array(spec.key, raw)) {
                series.insert(spec.key.to_owned(), values);
            }
        }

        let doses = match object.get("doses") {
            Some(Value::Object(map)) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            Some(Value::Null) | None => IndexMap::new(),
            Some(_) => {
                warn!("ignoring non-object `doses` field");
                IndexMap::new()
            }
        };

        debug!(
            ok = ?ok,
            time_len = time_axis.as_ref().map_or(0, Vec::len),
            series = series.len(),
            "parsed tumor dynamics payload"
        );

        Self {
            ok,
            time_axis,
            series,
            doses,
        }
    }

    /// `false` only when the backend explicitly flagged the run as failed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.ok != Some(false)
    }

    /// Multi-series chart input: `V`, `Ns`, `Nr`, `N` where present.
    pub fn tumor_series_set(&self) -> ChartResult<SeriesSet> {
        self.series_set_for(&TUMOR_SERIES)
    }

    /// Single-series chart input for the scalar indicator.
    pub fn indicator_series_set(&self) -> ChartResult<SeriesSet> {
        self.series_set_for(std::slice::from_ref(&INDICATOR_SERIES))
    }

    fn series_set_for(&self, specs: &[SeriesSpec]) -> ChartResult<SeriesSet> {
        if !self.is_ok() {
            debug!("payload flagged not ok; yielding empty series set");
            return Ok(SeriesSet::default());
        }

        let time_axis = self
            .time_axis
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|value| value.unwrap_or(f64::NAN))
            .collect();

        let mut set = SeriesSet::new(time_axis);
        for spec in specs {
            if let Some(values) = self.series.get(spec.key) {
                set.push_series(
                    Series::new(spec.key, spec.color(), spec.label).with_values(values.clone()),
                )?;
            }
        }
        Ok(set)
    }
}

fn numeric_array(field: &str, raw: &Value) -> Option<Vec<Option<f64>>> {
    match raw {
        Value::Array(items) => Some(items.iter().map(Value::as_f64).collect()),
        Value::Null => None,
        _ => {
            warn!(field, "expected a numeric array; treating field as absent");
            None
        }
    }
}
