use super::*;

fn coordinator(regions: &[(f64, f64)], max_scroll: f64) -> SnapCoordinator {
    SnapCoordinator::with_default_tolerance(
        regions.iter().map(|&(s, e)| PinnedRegion::new(s, e)),
        max_scroll,
    )
    .unwrap()
}

#[test]
fn no_regions_or_zero_max_scroll_disables_snapping() {
    assert!(SnapCoordinator::with_default_tolerance(Vec::new(), 1000.0).is_none());
    assert!(
        SnapCoordinator::with_default_tolerance([PinnedRegion::new(0.0, 100.0)], 0.0).is_none()
    );
}

#[test]
fn free_scroll_outside_all_ranges_is_unchanged() {
    let c = coordinator(&[(200.0, 400.0), (600.0, 800.0)], 1000.0);
    for v in [0.0, 0.1, 0.17, 0.43, 0.5, 0.57, 0.83, 1.0] {
        assert_eq!(c.snap(v), v, "v={v}");
    }
}

#[test]
fn inside_single_range_snaps_to_center() {
    let c = coordinator(&[(200.0, 400.0), (600.0, 800.0)], 1000.0);
    for v in [0.2, 0.25, 0.3, 0.39, 0.4] {
        assert!((c.snap(v) - 0.3).abs() < 1e-12, "v={v}");
    }
    assert!((c.snap(0.79) - 0.7).abs() < 1e-12);
}

#[test]
fn tolerance_engages_just_outside_boundaries() {
    let c = coordinator(&[(200.0, 400.0)], 1000.0);
    assert!((c.snap(0.185) - 0.3).abs() < 1e-12);
    assert!((c.snap(0.415) - 0.3).abs() < 1e-12);
    assert_eq!(c.snap(0.175), 0.175);
    assert_eq!(c.snap(0.425), 0.425);
}

#[test]
fn overlapping_ranges_pick_nearest_center() {
    // centers 0.3 and 0.5
    let c = coordinator(&[(300.0, 700.0), (100.0, 500.0)], 1000.0);
    assert_eq!(c.ranges()[0].start, 0.1);

    let out = c.snap_with_index(0.35);
    assert!((out.target - 0.3).abs() < 1e-12);
    assert_eq!(out.range_index, Some(0));

    let out = c.snap_with_index(0.45);
    assert!((out.target - 0.5).abs() < 1e-12);
    assert_eq!(out.range_index, Some(1));
}

#[test]
fn equidistant_centers_resolve_to_first_by_start() {
    // centers 0.25 and 0.75, probe 0.5 is inside both
    let c = coordinator(&[(500.0, 1000.0), (0.0, 500.0)], 1000.0);
    let out = c.snap_with_index(0.5);
    assert_eq!(out.range_index, Some(0));
    assert_eq!(out.target, 0.25);
}

#[test]
fn non_finite_input_passes_through() {
    let c = coordinator(&[(0.0, 1000.0)], 1000.0);
    assert!(c.snap(f64::NAN).is_nan());
    assert_eq!(c.snap_with_index(f64::INFINITY).range_index, None);
}

#[test]
fn settle_duration_scales_with_distance() {
    let settle = SnapSettle::default();
    let secs = |d: f64| settle.duration_for(d).as_secs_f64();
    assert!((secs(0.0) - 0.2).abs() < 1e-9);
    assert!((secs(5.0) - 0.6).abs() < 1e-9);
    assert!((secs(f64::NAN) - 0.6).abs() < 1e-9);
    let mid = settle.duration_for(-0.5).as_secs_f64();
    assert!((mid - 0.4).abs() < 1e-9);
}

#[test]
fn settle_config_fills_defaults() {
    let s: SnapSettle = serde_json::from_value(serde_json::json!({ "ease": "Linear" })).unwrap();
    assert_eq!(s.ease, Ease::Linear);
    assert_eq!(s.max_duration_s, 0.6);
}

#[test]
fn settle_position_follows_the_ease() {
    let settle = SnapSettle {
        ease: Ease::InOutQuad,
        min_duration_s: 0.4,
        max_duration_s: 0.4,
        delay_s: 0.0,
    };
    assert_eq!(settle.position_at(Duration::ZERO, 0.1, 0.3), 0.1);
    assert!((settle.position_at(Duration::from_millis(200), 0.1, 0.3) - 0.2).abs() < 1e-12);
    // quarter time on an in-out quad covers an eighth of the distance
    assert!((settle.position_at(Duration::from_millis(100), 0.0, 0.8) - 0.1).abs() < 1e-12);
    assert_eq!(settle.position_at(Duration::from_secs(5), 0.1, 0.3), 0.3);
}

#[test]
fn zero_length_settle_jumps_to_target() {
    let settle = SnapSettle {
        min_duration_s: 0.0,
        max_duration_s: 0.0,
        ..SnapSettle::default()
    };
    assert_eq!(settle.position_at(Duration::ZERO, 0.1, 0.3), 0.3);
}

#[test]
fn settle_curve_spans_endpoints() {
    let settle = SnapSettle::default();
    let curve = settle.curve(0.12, 0.2, 5);
    assert_eq!(curve.len(), 5);
    assert!((curve[0] - 0.12).abs() < 1e-12);
    assert!((curve[4] - 0.2).abs() < 1e-9);
    assert!(curve.windows(2).all(|w| w[0] <= w[1]));
    assert!(settle.curve(0.12, 0.2, 0).is_empty());
    assert_eq!(settle.curve(0.12, 0.2, 1), vec![0.2]);
}
