use glam::DVec3;
use segment_chart::ChartError;
use segment_chart::api::{ChartConfig, ChartRenderer};
use segment_chart::core::{AxisMarkers, AxisSegment, SpacingConvention};
use segment_chart::render::PositionBuffer;

fn config() -> ChartConfig {
    ChartConfig::new(
        AxisSegment::new(DVec3::new(0.0, 0.0, 1.0), DVec3::new(10.0, 0.0, 1.0)),
        AxisSegment::new(DVec3::new(0.0, 0.0, 1.0), DVec3::new(0.0, 6.0, 1.0)),
    )
}

#[test]
fn manipulate_spaces_each_axis_along_its_own_segment() {
    let mut chart = ChartRenderer::<PositionBuffer>::create(config()).expect("chart init");
    chart.set_axis_markers(AxisMarkers::with_counts(4, 3));

    chart.manipulate_points().expect("manipulate");

    let markers = chart.axis_markers();
    assert_eq!(
        markers.x,
        vec![
            DVec3::new(2.5, 0.0, 1.0),
            DVec3::new(5.0, 0.0, 1.0),
            DVec3::new(7.5, 0.0, 1.0),
            DVec3::new(10.0, 0.0, 1.0),
        ]
    );
    assert_eq!(
        markers.y,
        vec![
            DVec3::new(0.0, 2.0, 1.0),
            DVec3::new(0.0, 4.0, 1.0),
            DVec3::new(0.0, 6.0, 1.0),
        ]
    );
}

#[test]
fn manipulate_honors_exclude_end_convention() {
    let mut chart = ChartRenderer::<PositionBuffer>::create(
        config().with_spacing_convention(SpacingConvention::ExcludeEnd),
    )
    .expect("chart init");
    chart.set_axis_markers(AxisMarkers::with_counts(1, 2));

    chart.manipulate_points().expect("manipulate");

    let markers = chart.axis_markers();
    assert_eq!(markers.x, vec![DVec3::new(5.0, 0.0, 1.0)]);
    assert_eq!(
        markers.y,
        vec![DVec3::new(0.0, 2.0, 1.0), DVec3::new(0.0, 4.0, 1.0)]
    );
}

#[test]
fn axis_without_markers_is_skipped() {
    let mut chart = ChartRenderer::<PositionBuffer>::create(config()).expect("chart init");
    chart.set_axis_markers(AxisMarkers::with_counts(4, 0));

    chart.manipulate_points().expect("manipulate x only");

    let markers = chart.axis_markers();
    let xs: Vec<f64> = markers.x.iter().map(|marker| marker.x).collect();
    assert_eq!(xs, vec![2.5, 5.0, 7.5, 10.0]);
    assert!(markers.y.is_empty());

    chart.set_axis_markers(AxisMarkers::with_counts(0, 2));
    chart.manipulate_points().expect("manipulate y only");
    assert_eq!(
        chart.axis_markers().y,
        vec![DVec3::new(0.0, 3.0, 1.0), DVec3::new(0.0, 6.0, 1.0)]
    );
}

#[test]
fn manipulate_without_any_markers_is_rejected() {
    let mut chart = ChartRenderer::<PositionBuffer>::create(config()).expect("chart init");

    let err = chart.manipulate_points().expect_err("no markers at all");
    assert!(matches!(err, ChartError::InvalidConfiguration(_)));
    assert_eq!(chart.axis_markers(), &AxisMarkers::default());
}

#[test]
fn manipulate_does_not_touch_line_or_data() {
    let mut chart =
        ChartRenderer::with_target(PositionBuffer::default(), config()).expect("chart init");
    chart.set_axis_markers(AxisMarkers::with_counts(2, 2));

    chart.manipulate_points().expect("manipulate");

    assert!(chart.points().is_empty());
    assert_eq!(chart.target().expect("target").write_count, 0);
}
