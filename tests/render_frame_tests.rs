use tumor_chart::ChartError;
use tumor_chart::api::ChartRenderer;
use tumor_chart::core::{PixelPoint, PixelRect, Series, SeriesSet, Viewport};
use tumor_chart::render::{
    Color, DrawingSurface, FontSpec, NullSurface, RenderFrame, SurfaceSize, TextHAlign,
    TextPrimitive, TextVAlign,
};

fn sample_set() -> SeriesSet {
    SeriesSet::new(vec![0.0, 2.0, 4.0, 6.0])
        .with_series(Series::new("V", Color::rgb(1.0, 0.0, 0.0), "V").with_numbers(&[1.0, 4.0, 2.0, 3.0]))
        .expect("V")
}

#[test]
fn color_hex_parsing_and_formatting() {
    let color = Color::from_hex("#3B82F6").expect("hex");
    assert_eq!(color, Color::from_rgb8(0x3B, 0x82, 0xF6));
    assert_eq!(color.to_hex(), "#3B82F6");

    let translucent = Color::from_hex("10B98180").expect("hex with alpha");
    assert_eq!(translucent.to_hex(), "#10B98180");

    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#GG0000").is_err());
    assert!(Color::from_hex("#ééé").is_err());
}

#[test]
fn replaying_a_frame_reproduces_the_same_calls() {
    let (frame, _) = ChartRenderer::default()
        .render_frame(&sample_set(), Viewport::new(600.0, 400.0))
        .expect("render");

    let mut copy = RenderFrame::new(frame.size);
    frame.replay(&mut copy).expect("replay");
    assert_eq!(copy, frame);

    let mut counter = NullSurface::new(600.0, 400.0);
    frame.replay(&mut counter).expect("replay into null surface");
    assert_eq!(counter.total_calls(), frame.commands.len());
    assert_eq!(counter.line_count, 3);
    assert_eq!(counter.circle_count, 4);
}

#[test]
fn null_surface_counts_match_render_output() {
    let mut surface = NullSurface::new(600.0, 400.0);
    let report = ChartRenderer::default()
        .render_to_surface(&mut surface, &sample_set())
        .expect("render");

    assert!(report.is_rendered());
    assert_eq!(surface.clear_count, 1);
    assert_eq!(surface.line_count, 3);
    assert_eq!(surface.circle_count, 4);
    assert_eq!(surface.text_count, 4 + 9 + 2);

    ChartRenderer::default()
        .render_to_surface(&mut surface, &sample_set())
        .expect("render again");
    assert_eq!(surface.line_count, 3);
}

#[test]
fn validation_rejects_invalid_primitives() {
    let mut frame = RenderFrame::new(SurfaceSize::new(100.0, 100.0));
    frame
        .stroke_line(
            &[PixelPoint::new(0.0, 0.0), PixelPoint::new(f64::NAN, 1.0)],
            Color::rgb(0.0, 0.0, 0.0),
            1.0,
        )
        .expect("recording never fails");
    assert!(matches!(frame.validate(), Err(ChartError::InvalidData(_))));

    let mut surface = NullSurface::new(100.0, 100.0);
    let text = TextPrimitive::new(
        "",
        PixelPoint::new(1.0, 1.0),
        TextHAlign::Left,
        TextVAlign::Top,
        FontSpec::sans(12.0),
        Color::rgb(0.0, 0.0, 0.0),
    );
    assert!(surface.draw_text(&text).is_err());
    assert!(surface.fill_circle(PixelPoint::new(1.0, 1.0), 0.0, Color::rgb(0.0, 0.0, 0.0)).is_err());
    assert!(surface.clear(PixelRect::new(0.0, 0.0, -1.0, 5.0)).is_err());

    let empty = RenderFrame::new(SurfaceSize::new(0.0, 10.0));
    assert!(matches!(
        empty.validate(),
        Err(ChartError::InvalidViewport { .. })
    ));
}
