use glam::DVec3;
use segment_chart::api::{ChartConfig, ChartRenderer};
use segment_chart::core::{AxisMarkers, AxisSegment, DataPoint};
use segment_chart::render::{GizmoRecorder, PositionBuffer};

#[test]
fn chart_smoke_flow() {
    let config = ChartConfig::new(
        AxisSegment::new(DVec3::ZERO, DVec3::new(10.0, 0.0, 0.0)),
        AxisSegment::new(DVec3::ZERO, DVec3::new(0.0, 10.0, 0.0)),
    )
    .with_recalculate_bounds(true);
    let mut chart =
        ChartRenderer::with_target(PositionBuffer::default(), config).expect("chart init");

    chart
        .set_data(vec![DataPoint::new(1.0, 1.0), DataPoint::new(2.0, 4.0)])
        .expect("set data");
    chart.render_chart().expect("render");
    chart.add_data(DataPoint::new(4.0, 2.0)).expect("add");

    chart.set_axis_markers(AxisMarkers::with_counts(4, 4));
    chart.manipulate_points().expect("manipulate");

    let mut gizmos = GizmoRecorder::default();
    chart.debug_draw(&mut gizmos).expect("debug draw");

    assert_eq!(chart.points().len(), 3);
    assert_eq!(chart.config().bounds.max_x, 4.0);
    assert_eq!(chart.target().expect("target").positions().len(), 3);
    assert_eq!(chart.axis_markers().x.last(), Some(&DVec3::new(10.0, 0.0, 0.0)));
    assert_eq!(gizmos.cubes.len(), 4);

    let last = chart.target().expect("target").positions()[2];
    assert!(last.abs_diff_eq(DVec3::new(10.0, 5.0, 0.0), 1e-9));
}
