use std::collections::HashSet;

use proptest::prelude::*;
use tumor_chart::api::{ChartRenderer, RenderIssue};
use tumor_chart::core::{Padding, Series, SeriesSet, Viewport, compute_domain};
use tumor_chart::render::{Color, DrawCommand};

fn sample_value() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        4 => (-10_000.0f64..10_000.0).prop_map(Some),
        2 => prop::num::f64::NORMAL.prop_map(Some),
        1 => Just(Some(f64::MAX)),
        1 => Just(Some(-f64::MAX)),
        1 => Just(Some(f64::NAN)),
        1 => Just(Some(f64::INFINITY)),
        1 => Just(None),
    ]
}

fn series_set_strategy() -> impl Strategy<Value = SeriesSet> {
    (
        prop::collection::vec(
            prop_oneof![
                7 => 0.0f64..1_000.0,
                2 => prop::num::f64::NORMAL,
                1 => Just(f64::MAX),
                1 => Just(f64::NAN),
            ],
            0..60,
        ),
        prop::collection::vec(prop::collection::vec(sample_value(), 0..60), 1..4),
    )
        .prop_map(|(time_axis, columns)| {
            let mut set = SeriesSet::new(time_axis);
            for (index, values) in columns.into_iter().enumerate() {
                let series = Series::new(
                    format!("s{index}"),
                    Color::rgb(0.1 * index as f64, 0.4, 0.6),
                    format!("series {index}"),
                )
                .with_values(values);
                set.push_series(series).expect("unique ids");
            }
            set
        })
}

proptest! {
    #[test]
    fn rendering_twice_yields_identical_frames(set in series_set_strategy()) {
        let renderer = ChartRenderer::default();
        let viewport = Viewport::new(640.0, 420.0);

        let (first_frame, first_report) = renderer.render_frame(&set, viewport).expect("first");
        let (second_frame, second_report) = renderer.render_frame(&set, viewport).expect("second");

        prop_assert_eq!(first_frame, second_frame);
        prop_assert_eq!(first_report.legend, second_report.legend);
        prop_assert_eq!(first_report.drawn_counts, second_report.drawn_counts);
    }

    #[test]
    fn every_recorded_primitive_is_valid(set in series_set_strategy()) {
        let (frame, report) = ChartRenderer::default()
            .render_frame(&set, Viewport::new(800.0, 500.0))
            .expect("render");

        frame.validate().expect("valid primitives only");
        if compute_domain(&set).is_none() {
            prop_assert!(frame.is_empty());
            prop_assert_eq!(report.issue, Some(RenderIssue::NoPlottableData));
        } else {
            prop_assert!(report.is_rendered());
            prop_assert!(matches!(frame.commands.first(), Some(DrawCommand::Clear { .. })), "first command should be Clear");
        }
    }

    #[test]
    fn x_tick_labels_are_unique(set in series_set_strategy(), max_labels in 1usize..20) {
        let renderer = ChartRenderer::default();
        let renderer = ChartRenderer::new(renderer.config().clone().with_max_x_labels(max_labels))
            .expect("config");
        let (_, report) = renderer
            .render_frame(&set, Viewport::new(900.0, 500.0))
            .expect("render");

        let mut labels = HashSet::new();
        for tick in &report.x_ticks {
            prop_assert!(labels.insert(tick.label.clone()), "duplicate label {}", tick.label);
        }
    }

    #[test]
    fn undersized_viewports_draw_nothing(
        set in series_set_strategy(),
        width in 0.0f64..=120.0,
        height in 0.0f64..=110.0
    ) {
        let viewport = Viewport::new(width, height).with_padding(Padding::default());
        let (frame, report) = ChartRenderer::default()
            .render_frame(&set, viewport)
            .expect("render");

        prop_assert!(frame.is_empty());
        prop_assert_eq!(report.issue, Some(RenderIssue::ViewportTooSmall));
        prop_assert!(report.legend.is_empty());
    }
}
