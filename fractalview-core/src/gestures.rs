//! Converts raw gesture signals into incremental pan/zoom updates.
//!
//! Platform gesture APIs report *cumulative* values since gesture start
//! (drag offset, pinch distance). [`GestureSession`] keeps the last seen
//! cumulative sample so each event contributes exactly its delta, no
//! matter how often the platform repeats or batches events.

/// Scale multiplier for one wheel notch away from the user (zoom out).
pub const WHEEL_ZOOM_OUT: f64 = 1.1;
/// Scale multiplier for one wheel notch toward the user (zoom in).
pub const WHEEL_ZOOM_IN: f64 = 0.9;
/// Scale multiplier while a pinch is closing.
pub const PINCH_ZOOM_IN: f64 = 0.952;
/// Scale multiplier while a pinch is opening.
pub const PINCH_ZOOM_OUT: f64 = 1.05;

/// Per-gesture bookkeeping. Create (or [`begin`](Self::begin)) when a
/// gesture starts; drop or reset when it ends. Not persisted across
/// gestures.
#[derive(Clone, Debug, Default)]
pub struct GestureSession {
    last_drag: Option<(f64, f64)>,
    last_pinch: Option<f64>,
}

impl GestureSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget prior samples; the next drag/pinch event becomes a baseline.
    pub fn begin(&mut self) {
        *self = Self::default();
    }

    /// Feed a cumulative drag offset, get the device-pixel delta since the
    /// previous sample. The first sample of a gesture yields (0, 0), and a
    /// repeated sample yields (0, 0) again.
    pub fn drag_delta(&mut self, cumulative: (f64, f64)) -> (f64, f64) {
        if !cumulative.0.is_finite() || !cumulative.1.is_finite() {
            return (0.0, 0.0);
        }
        let delta = match self.last_drag {
            Some(prev) => (cumulative.0 - prev.0, cumulative.1 - prev.1),
            None => (0.0, 0.0),
        };
        self.last_drag = Some(cumulative);
        delta
    }

    /// Feed a cumulative pinch distance, get the scale factor to apply, if
    /// any. The first sample only establishes the baseline. A closing
    /// pinch zooms in, anything else zooms out.
    pub fn pinch_factor(&mut self, distance: f64) -> Option<f64> {
        if !distance.is_finite() || distance < 0.0 {
            return None;
        }
        let factor = self.last_pinch.map(|prev| {
            if prev > distance {
                PINCH_ZOOM_IN
            } else {
                PINCH_ZOOM_OUT
            }
        });
        self.last_pinch = Some(distance);
        factor
    }
}

/// Scale factor for one wheel event, from the sign of its deltaY.
/// Zero (horizontal scroll) applies no zoom.
pub fn wheel_factor(delta_y: f64) -> Option<f64> {
    if delta_y > 0.0 {
        Some(WHEEL_ZOOM_OUT)
    } else if delta_y < 0.0 {
        Some(WHEEL_ZOOM_IN)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_drag_sample_is_baseline() {
        let mut session = GestureSession::new();
        assert_eq!(session.drag_delta((30.0, 40.0)), (0.0, 0.0));
        assert_eq!(session.drag_delta((35.0, 38.0)), (5.0, -2.0));
    }

    #[test]
    fn repeated_drag_sample_yields_zero() {
        let mut session = GestureSession::new();
        session.drag_delta((10.0, 10.0));
        session.drag_delta((12.0, 14.0));
        assert_eq!(session.drag_delta((12.0, 14.0)), (0.0, 0.0));
    }

    #[test]
    fn begin_resets_baseline() {
        let mut session = GestureSession::new();
        session.drag_delta((100.0, 100.0));
        session.begin();
        // New gesture starts from scratch; no carry-over delta.
        assert_eq!(session.drag_delta((0.0, 0.0)), (0.0, 0.0));
    }

    #[test]
    fn pinch_first_sample_sets_baseline_only() {
        let mut session = GestureSession::new();
        assert_eq!(session.pinch_factor(120.0), None);
        assert_eq!(session.pinch_factor(100.0), Some(PINCH_ZOOM_IN));
        assert_eq!(session.pinch_factor(130.0), Some(PINCH_ZOOM_OUT));
    }

    #[test]
    fn pinch_rejects_degenerate_samples() {
        let mut session = GestureSession::new();
        assert_eq!(session.pinch_factor(f64::NAN), None);
        assert_eq!(session.pinch_factor(-1.0), None);
        // Baseline untouched by rejected samples.
        assert_eq!(session.pinch_factor(50.0), None);
    }

    #[test]
    fn wheel_direction() {
        assert_eq!(wheel_factor(3.0), Some(WHEEL_ZOOM_OUT));
        assert_eq!(wheel_factor(-3.0), Some(WHEEL_ZOOM_IN));
        assert_eq!(wheel_factor(0.0), None);
    }
}
