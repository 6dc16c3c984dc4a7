use fractalview_core::{wheel_factor, GestureSession, ViewportState};

#[test]
fn wheel_zoom_scenario() {
    let mut state = ViewportState::new();
    state.resize(400, 300);

    // Positive deltaY zooms out to 1.1, then negative deltaY brings it to
    // 1.1 * 0.9 = 0.99.
    if let Some(f) = wheel_factor(120.0) {
        state.zoom_by(f);
    }
    assert!((state.scale - 1.1).abs() < 1e-12);

    if let Some(f) = wheel_factor(-120.0) {
        state.zoom_by(f);
    }
    assert!((state.scale - 0.99).abs() < 1e-12);
}

#[test]
fn scale_stays_positive_under_any_event_sequence() {
    let mut state = ViewportState::new();
    state.resize(640, 480);
    let mut session = GestureSession::new();

    // A long mixed barrage of zoom-in wheel events and closing pinches.
    for i in 0..1000 {
        if let Some(f) = wheel_factor(-1.0) {
            state.zoom_by(f);
        }
        if let Some(f) = session.pinch_factor(1000.0 - i as f64) {
            state.zoom_by(f);
        }
        assert!(state.scale > 0.0, "scale collapsed at event {i}");
    }

    // And back out the other way.
    for _ in 0..1000 {
        if let Some(f) = wheel_factor(1.0) {
            state.zoom_by(f);
        }
        assert!(state.scale.is_finite() && state.scale > 0.0);
    }
}

#[test]
fn drag_and_pinch_touch_disjoint_state() {
    let mut state = ViewportState::new();
    state.resize(400, 300);
    state.scale = 2.0;
    let mut session = GestureSession::new();

    // One two-finger event carrying both a drag sample and a pinch sample.
    session.drag_delta((0.0, 0.0));
    session.pinch_factor(100.0);

    let scale_before = state.scale;
    let (dx, dy) = session.drag_delta((10.0, 0.0));
    state.pan_by(dx, dy);
    assert_eq!(state.offset, (20.0, 0.0));
    assert_eq!(state.scale, scale_before);

    let offset_before = state.offset;
    if let Some(f) = session.pinch_factor(90.0) {
        state.zoom_by(f);
    }
    assert_eq!(state.offset, offset_before);
    assert!(state.scale < scale_before);
}

#[test]
fn accumulated_pan_is_stable_over_many_frames() {
    let mut state = ViewportState::new();
    state.resize(400, 300);
    let mut session = GestureSession::new();

    // Thousands of one-pixel drag increments reported cumulatively.
    for i in 1..=4000 {
        let (dx, dy) = session.drag_delta((i as f64, 0.0));
        state.pan_by(dx, dy);
    }
    assert!((state.offset.0 - 4000.0).abs() < 1e-9);
    assert_eq!(state.offset.1, 0.0);
}
