use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::from_len(FrameIndex(2), 3).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_rejects_overflowing_end() {
    assert!(FrameRange::from_len(FrameIndex(u64::MAX), 1).is_err());
    assert!(FrameRange::from_len(FrameIndex(u64::MAX), 0).is_ok());
}

#[test]
fn frame_range_local_offsets() {
    let r = FrameRange::from_len(FrameIndex(180), 150).unwrap();
    assert_eq!(r.end, FrameIndex(330));
    assert_eq!(r.local(FrameIndex(180)), Some(0));
    assert_eq!(r.local(FrameIndex(329)), Some(149));
    assert_eq!(r.local(FrameIndex(330)), None);
}

#[test]
fn fps_seconds_round_to_frames() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.secs_to_frames_round(6.0), 180);
    assert_eq!(fps.secs_to_frames_round(0.5), 15);
    assert_eq!(fps.secs_to_frames_round(-1.0), 0);

    let ntsc = Fps::new(30000, 1001).unwrap();
    assert_eq!(ntsc.secs_to_frames_round(1.001), 30);
}

#[test]
fn fps_rejects_zero() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}
