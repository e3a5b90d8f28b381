use std::collections::HashSet;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::domain::Domain;
use crate::core::scale::Scale;

pub const DEFAULT_MAX_X_LABELS: usize = 12;
pub const DEFAULT_Y_TICK_COUNT: usize = 8;

/// One labeled mark on the time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XTick {
    pub value: f64,
    pub pixel_x: f64,
    pub label: String,
}

/// One labeled mark on the value axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YTick {
    pub value: f64,
    pub pixel_y: f64,
    pub label: String,
}

/// Samples the real time axis instead of generating round numbers.
///
/// Walks `time_axis` with stride `max(1, len / max_labels)` and keeps one
/// tick per distinct rounded integer, so irregular sampling never produces
/// two overlapping identical labels. Non-finite entries are skipped.
#[must_use]
pub fn plan_x_ticks(time_axis: &[f64], scale: Scale, max_labels: usize) -> Vec<XTick> {
    let stride = (time_axis.len() / max_labels.max(1)).max(1);
    let mut seen = HashSet::new();
    let mut ticks = Vec::new();

    for &value in time_axis.iter().step_by(stride) {
        if !value.is_finite() {
            continue;
        }
        let rounded = round_half_up(value);
        if !seen.insert(OrderedFloat(rounded)) {
            continue;
        }
        ticks.push(XTick {
            value,
            pixel_x: scale.map_x(value),
            label: format_x_label(rounded),
        });
    }

    ticks
}

/// Evenly spaced ticks from `min_y` to `min_y + y_range`, both inclusive.
#[must_use]
pub fn plan_y_ticks(domain: Domain, scale: Scale, tick_count: usize) -> Vec<YTick> {
    let tick_count = tick_count.max(1);
    // Stepping in half units keeps every intermediate finite.
    let half_step = domain.half_y_range() / tick_count as f64;

    (0..=tick_count)
        .map(|k| {
            let half_value = domain.min_y / 2.0 + half_step * k as f64;
            let value = (2.0 * half_value).clamp(-f64::MAX, f64::MAX);
            YTick {
                value,
                pixel_y: scale.map_y(value),
                label: format_y_label(value),
            }
        })
        .collect()
}

#[must_use]
pub fn format_x_label(rounded: f64) -> String {
    format!("{}", normalize_zero(rounded))
}

#[must_use]
pub fn format_y_label(value: f64) -> String {
    format!("{:.1}", normalize_zero(value))
}

/// Nearest integer with ties toward positive infinity (`-2.5` → `-2`).
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

// `-0.0` would otherwise print as "-0".
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
