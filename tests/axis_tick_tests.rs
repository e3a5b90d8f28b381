use std::collections::HashSet;

use tumor_chart::core::{
    Domain, Viewport, build_scale, format_y_label, plan_x_ticks, plan_y_ticks, round_half_up,
};

fn scale_for(max_x: f64, min_y: f64, max_y: f64) -> tumor_chart::core::Scale {
    build_scale(
        Domain {
            min_x: 0.0,
            max_x,
            min_y,
            max_y,
        },
        Viewport::new(600.0, 400.0),
    )
}

#[test]
fn x_ticks_subsample_the_real_axis_with_stride() {
    let time_axis: Vec<f64> = (0..24).map(f64::from).collect();
    let scale = scale_for(23.0, 0.0, 1.0);

    let ticks = plan_x_ticks(&time_axis, scale, 12);
    let values: Vec<f64> = ticks.iter().map(|tick| tick.value).collect();
    let expected: Vec<f64> = (0..12).map(|i| f64::from(i * 2)).collect();
    assert_eq!(values, expected);
    assert_eq!(ticks[1].label, "2");
    assert_eq!(ticks[1].pixel_x, scale.map_x(2.0));
}

#[test]
fn short_axis_uses_stride_of_one() {
    let ticks = plan_x_ticks(&[0.0, 1.0, 2.0, 3.0], scale_for(3.0, 0.0, 1.0), 12);
    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, ["0", "1", "2", "3"]);
}

#[test]
fn x_ticks_are_deduplicated_by_rounded_value() {
    let time_axis = [0.0, 0.4, 0.6, 1.2, 1.4, 2.5];
    let ticks = plan_x_ticks(&time_axis, scale_for(2.5, 0.0, 1.0), 12);

    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, ["0", "1", "3"]);
    // The first sample of each rounded bucket keeps its exact position.
    assert_eq!(ticks[1].value, 0.6);
    assert_eq!(ticks[2].value, 2.5);
}

#[test]
fn x_ticks_skip_non_finite_entries_and_normalize_negative_zero() {
    let time_axis = [-0.3, f64::NAN, 0.2, f64::INFINITY, 4.0];
    let ticks = plan_x_ticks(&time_axis, scale_for(4.0, 0.0, 1.0), 12);

    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, ["0", "4"]);
}

#[test]
fn half_integer_times_round_toward_positive_infinity() {
    assert_eq!(round_half_up(2.5), 3.0);
    assert_eq!(round_half_up(-2.5), -2.0);
    assert_eq!(round_half_up(-2.6), -3.0);
    assert_eq!(round_half_up(0.49999999999999994), 0.0);

    let time_axis = [-2.5, -2.2, -1.5, 0.0];
    let ticks = plan_x_ticks(&time_axis, scale_for(1.0, 0.0, 1.0), 12);
    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, ["-2", "-1", "0"]);
}

#[test]
fn y_ticks_stay_finite_across_the_full_float_range() {
    let domain = Domain {
        min_x: 0.0,
        max_x: 1.0,
        min_y: -f64::MAX,
        max_y: f64::MAX,
    };
    let scale = build_scale(domain, Viewport::new(600.0, 400.0));
    let ticks = plan_y_ticks(domain, scale, 8);

    assert_eq!(ticks.len(), 9);
    assert_eq!(ticks[0].value, -f64::MAX);
    assert_eq!(ticks[4].value, 0.0);
    assert_eq!(ticks[8].value, f64::MAX);
    assert!(ticks.iter().all(|tick| tick.pixel_y.is_finite()));
    assert_eq!(ticks[0].pixel_y, 340.0);
    assert_eq!(ticks[8].pixel_y, 50.0);
}

#[test]
fn empty_axis_has_no_x_ticks() {
    assert!(plan_x_ticks(&[], scale_for(1.0, 0.0, 1.0), 12).is_empty());
}

#[test]
fn x_tick_labels_are_unique() {
    let time_axis: Vec<f64> = (0..500).map(|i| f64::from(i) * 0.07).collect();
    let ticks = plan_x_ticks(&time_axis, scale_for(35.0, 0.0, 1.0), 12);

    let unique: HashSet<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(unique.len(), ticks.len());
    assert!(ticks.len() <= 13);
}

#[test]
fn y_ticks_cover_min_to_max_inclusive() {
    let domain = Domain {
        min_x: 0.0,
        max_x: 3.0,
        min_y: 10.0,
        max_y: 18.0,
    };
    let scale = build_scale(domain, Viewport::new(600.0, 400.0));
    let ticks = plan_y_ticks(domain, scale, 8);

    assert_eq!(ticks.len(), 9);
    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(
        labels,
        ["10.0", "11.0", "12.0", "13.0", "14.0", "15.0", "16.0", "17.0", "18.0"]
    );
    assert_eq!(ticks[0].pixel_y, 340.0);
    assert_eq!(ticks[8].pixel_y, 50.0);
    assert!(ticks.windows(2).all(|pair| pair[1].pixel_y < pair[0].pixel_y));
}

#[test]
fn flat_domain_y_ticks_span_the_unit_fallback() {
    let domain = Domain {
        min_x: 0.0,
        max_x: 1.0,
        min_y: 2.0,
        max_y: 2.0,
    };
    let scale = build_scale(domain, Viewport::new(600.0, 400.0));
    let ticks = plan_y_ticks(domain, scale, 5);

    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, ["2.0", "2.2", "2.4", "2.6", "2.8", "3.0"]);
}

#[test]
fn y_labels_use_one_fractional_digit() {
    assert_eq!(format_y_label(1234.56), "1234.6");
    assert_eq!(format_y_label(-0.0), "0.0");
    assert_eq!(format_y_label(3.0), "3.0");
}
