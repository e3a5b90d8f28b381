use approx::relative_eq;
use proptest::prelude::*;
use tumor_chart::core::{Domain, Padding, Viewport, build_scale};

fn domain_strategy() -> impl Strategy<Value = Domain> {
    (
        0.0f64..500.0,
        1.0f64..5_000.0,
        -1_000_000.0f64..1_000_000.0,
        0.001f64..1_000_000.0,
    )
        .prop_map(|(min_x, x_span, min_y, y_span)| Domain {
            min_x,
            max_x: min_x + x_span,
            min_y,
            max_y: min_y + y_span,
        })
}

fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    (
        200.0f64..4_000.0,
        200.0f64..3_000.0,
        0.0f64..80.0,
        0.0f64..80.0,
        0.0f64..80.0,
        0.0f64..80.0,
    )
        .prop_map(|(width, height, top, right, bottom, left)| {
            Viewport::new(width, height).with_padding(Padding::new(top, right, bottom, left))
        })
}

proptest! {
    #[test]
    fn plot_area_corners_map_to_domain_extremes(
        domain in domain_strategy(),
        viewport in viewport_strategy()
    ) {
        let scale = build_scale(domain, viewport);
        let padding = viewport.padding;

        prop_assert_eq!(scale.map_x(0.0), padding.left);
        prop_assert!(relative_eq!(
            scale.map_x(domain.max_x),
            padding.left + viewport.chart_width(),
            epsilon = 1e-9,
            max_relative = 1e-12
        ));
        prop_assert_eq!(scale.map_y(domain.min_y), viewport.height - padding.bottom);
        prop_assert!(relative_eq!(
            scale.map_y(domain.max_y),
            padding.top,
            epsilon = 1e-6,
            max_relative = 1e-9
        ));
    }

    #[test]
    fn map_x_increases_and_map_y_decreases(
        domain in domain_strategy(),
        viewport in viewport_strategy(),
        a in 0.0f64..1.0,
        b in 0.0f64..1.0
    ) {
        prop_assume!((a - b).abs() > 1e-3);
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let scale = build_scale(domain, viewport);

        let x_low = domain.max_x * low;
        let x_high = domain.max_x * high;
        prop_assert!(scale.map_x(x_low) < scale.map_x(x_high));

        let y_low = domain.min_y + (domain.max_y - domain.min_y) * low;
        let y_high = domain.min_y + (domain.max_y - domain.min_y) * high;
        prop_assert!(scale.map_y(y_low) > scale.map_y(y_high));
    }

    #[test]
    fn flat_and_zero_domains_stay_finite(
        value in -1_000.0f64..1_000.0,
        viewport in viewport_strategy()
    ) {
        let domain = Domain { min_x: 0.0, max_x: 0.0, min_y: value, max_y: value };
        let scale = build_scale(domain, viewport);

        prop_assert_eq!(scale.map_x(0.0), viewport.padding.left);
        prop_assert!(scale.map_point(0.0, value).is_finite());
        prop_assert_eq!(scale.map_y(value), viewport.height - viewport.padding.bottom);
    }
}
