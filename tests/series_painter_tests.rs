use tumor_chart::api::{ChartStyle, paint_series};
use tumor_chart::core::{Domain, PixelPoint, Series, Viewport, build_scale};
use tumor_chart::render::{Color, DrawCommand, RenderFrame, SurfaceSize};

fn frame() -> RenderFrame {
    RenderFrame::new(SurfaceSize::new(600.0, 400.0))
}

fn green() -> Color {
    Color::from_rgb8(0x10, 0xB9, 0x81)
}

#[test]
fn missing_sample_is_skipped_not_interpolated() {
    let time_axis = [0.0, 1.0, 2.0];
    let series = Series::new("V", green(), "V").with_values(vec![Some(5.0), Some(f64::NAN), Some(7.0)]);
    let domain = Domain {
        min_x: 0.0,
        max_x: 2.0,
        min_y: 5.0,
        max_y: 7.0,
    };
    let scale = build_scale(domain, Viewport::new(600.0, 400.0));
    let mut frame = frame();

    let drawn = paint_series(&mut frame, &series, &time_axis, scale, &ChartStyle::default())
        .expect("paint");

    assert_eq!(drawn, 2);
    let lines: Vec<_> = frame.polylines().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(
        lines[0].points,
        vec![PixelPoint::new(70.0, 340.0), PixelPoint::new(550.0, 50.0)]
    );
    assert_eq!(lines[0].color, green());
    assert_eq!(lines[0].stroke_width, 2.0);
    assert_eq!(frame.circles().count(), 2);
}

#[test]
fn series_without_valid_points_draws_nothing() {
    let time_axis = [0.0, 1.0, 2.0];
    let series = Series::new("Nr", green(), "Nr").with_values(vec![None, Some(f64::NAN), None]);
    let scale = build_scale(
        Domain {
            min_x: 0.0,
            max_x: 2.0,
            min_y: 0.0,
            max_y: 1.0,
        },
        Viewport::new(600.0, 400.0),
    );
    let mut frame = frame();

    let drawn = paint_series(&mut frame, &series, &time_axis, scale, &ChartStyle::default())
        .expect("paint");

    assert_eq!(drawn, 0);
    assert!(frame.is_empty());
}

#[test]
fn single_valid_point_gets_a_marker_but_no_stroke() {
    let time_axis = [0.0, 1.0];
    let series = Series::new("N", green(), "N").with_values(vec![Some(3.0)]);
    let scale = build_scale(
        Domain {
            min_x: 0.0,
            max_x: 1.0,
            min_y: 3.0,
            max_y: 3.0,
        },
        Viewport::new(600.0, 400.0),
    );
    let mut frame = frame();

    let drawn = paint_series(&mut frame, &series, &time_axis, scale, &ChartStyle::default())
        .expect("paint");

    assert_eq!(drawn, 1);
    assert_eq!(frame.polylines().count(), 0);
    let circles: Vec<_> = frame.circles().collect();
    assert_eq!(circles.len(), 1);
    assert_eq!(circles[0].center, PixelPoint::new(70.0, 340.0));
    assert_eq!(circles[0].radius, 3.0);
}

#[test]
fn markers_follow_a_bounded_stride_over_raw_indices() {
    let time_axis: Vec<f64> = (0..40).map(f64::from).collect();
    let mut values: Vec<Option<f64>> = (0..40).map(|i| Some(f64::from(i % 7))).collect();
    values[2] = None;
    let series = Series::new("V", green(), "V").with_values(values);
    let scale = build_scale(
        Domain {
            min_x: 0.0,
            max_x: 39.0,
            min_y: 0.0,
            max_y: 6.0,
        },
        Viewport::new(600.0, 400.0),
    );
    let mut frame = frame();

    let drawn = paint_series(&mut frame, &series, &time_axis, scale, &ChartStyle::default())
        .expect("paint");

    assert_eq!(drawn, 39);
    // stride = 40 / 20 = 2 -> even indices, minus the missing index 2.
    assert_eq!(frame.circles().count(), 19);
    let line = frame.polylines().next().expect("polyline");
    assert_eq!(line.points.len(), 39);
}

#[test]
fn gaps_are_bridged_within_one_polyline() {
    let time_axis = [0.0, 1.0, 2.0, 3.0, 4.0];
    let series = Series::new("V", green(), "V").with_values(vec![
        Some(1.0),
        None,
        None,
        Some(2.0),
        Some(f64::INFINITY),
    ]);
    let scale = build_scale(
        Domain {
            min_x: 0.0,
            max_x: 4.0,
            min_y: 1.0,
            max_y: 2.0,
        },
        Viewport::new(600.0, 400.0),
    );
    let mut frame = frame();

    let drawn = paint_series(&mut frame, &series, &time_axis, scale, &ChartStyle::default())
        .expect("paint");

    assert_eq!(drawn, 2);
    let polylines: Vec<_> = frame
        .commands
        .iter()
        .filter(|command| matches!(command, DrawCommand::Polyline(_)))
        .collect();
    assert_eq!(polylines.len(), 1);
}
