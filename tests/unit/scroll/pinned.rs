use super::*;

#[test]
fn normalizes_against_max_scroll() {
    let r = PinnedRange::normalize(PinnedRegion::new(1000.0, 3000.0), 4000.0).unwrap();
    assert_eq!(r.start, 0.25);
    assert_eq!(r.end, 0.75);
    assert_eq!(r.center, 0.5);
}

#[test]
fn zero_or_invalid_max_scroll_yields_none() {
    let region = PinnedRegion::new(0.0, 10.0);
    assert!(PinnedRange::normalize(region, 0.0).is_none());
    assert!(PinnedRange::normalize(region, -5.0).is_none());
    assert!(PinnedRange::normalize(region, f64::NAN).is_none());
    assert!(PinnedRange::normalize(PinnedRegion::new(f64::INFINITY, 1.0), 10.0).is_none());
}

#[test]
fn inverted_and_overflowing_regions_keep_ordering() {
    let r = PinnedRange::normalize(PinnedRegion::new(800.0, 200.0), 1000.0).unwrap();
    assert_eq!((r.start, r.end), (0.2, 0.8));
    assert!(r.start <= r.center && r.center <= r.end);

    let r = PinnedRange::normalize(PinnedRegion::new(900.0, 1500.0), 1000.0).unwrap();
    assert_eq!(r.end, 1.0);
    assert!((r.center - 0.95).abs() < 1e-12);
}

#[test]
fn contains_is_inclusive_with_tolerance() {
    let r = PinnedRange {
        start: 0.25,
        end: 0.5,
        center: 0.375,
    };
    assert!(r.contains(0.25, 0.0));
    assert!(r.contains(0.5, 0.0));
    assert!(r.contains(0.24, 0.02));
    assert!(!r.contains(0.2, 0.02));
}
