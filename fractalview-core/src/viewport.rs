use crate::params::Parameters;
use serde::{Deserialize, Serialize};

/// Mutable state of one mounted viewport.
///
/// - `offset`: accumulated pan in device pixels, before scaling.
/// - `scale`: zoom factor, strictly positive; larger values show more of
///   the plane per pixel.
/// - `size`: viewport dimensions in device pixels.
///
/// Single writer (the controller); the render loop reads a snapshot each
/// frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub offset: (f64, f64),
    pub scale: f64,
    pub size: (u32, u32),
    pub params: Parameters,
}

impl ViewportState {
    pub fn new() -> Self {
        Self {
            offset: (0.0, 0.0),
            scale: 1.0,
            size: (0, 0),
            params: Parameters::default(),
        }
    }

    /// Update viewport dimensions. Callers must treat a size change as
    /// invalidating any pixel buffer sized for the old dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    /// Whether there is anything to render at all. A hidden viewport
    /// reports (0, 0) and short-circuits the frame loop.
    pub fn is_renderable(&self) -> bool {
        self.size.0 > 0 && self.size.1 > 0
    }

    /// Apply a settings record from the menu.
    ///
    /// Switching fractal returns the view to the canonical position:
    /// scale 1, offset (0, 0).
    pub fn apply_params(&mut self, params: Parameters) {
        if params.fractal != self.params.fractal {
            self.scale = 1.0;
            self.offset = (0.0, 0.0);
        }
        self.params = params;
    }

    /// Pan by a device-pixel delta. The delta is pre-multiplied by the
    /// current scale so panning speed tracks the visible plane extent.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.offset.0 += dx * self.scale;
        self.offset.1 += dy * self.scale;
    }

    /// Multiply the scale by `factor`. Non-finite or non-positive factors
    /// are rejected, so `scale` can never reach zero or flip sign.
    pub fn zoom_by(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.scale *= factor;
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Fractal;

    #[test]
    fn defaults() {
        let state = ViewportState::new();
        assert_eq!(state.offset, (0.0, 0.0));
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.size, (0, 0));
        assert!(!state.is_renderable());
    }

    #[test]
    fn pan_scales_with_zoom() {
        let mut state = ViewportState::new();
        state.scale = 2.0;
        state.pan_by(10.0, -5.0);
        assert_eq!(state.offset, (20.0, -10.0));
    }

    #[test]
    fn pan_ignores_non_finite_deltas() {
        let mut state = ViewportState::new();
        state.pan_by(f64::NAN, 1.0);
        state.pan_by(1.0, f64::INFINITY);
        assert_eq!(state.offset, (0.0, 0.0));
    }

    #[test]
    fn zoom_rejects_degenerate_factors() {
        let mut state = ViewportState::new();
        state.zoom_by(0.0);
        state.zoom_by(-1.0);
        state.zoom_by(f64::NAN);
        assert_eq!(state.scale, 1.0);
    }

    #[test]
    fn fractal_switch_resets_view() {
        let mut state = ViewportState::new();
        state.scale = 3.4;
        state.offset = (120.0, -40.0);

        let mut params = state.params;
        params.fractal = Fractal::Julia;
        state.apply_params(params);

        assert_eq!(state.scale, 1.0);
        assert_eq!(state.offset, (0.0, 0.0));
        assert_eq!(state.params.fractal, Fractal::Julia);
    }

    #[test]
    fn non_fractal_param_change_keeps_view() {
        let mut state = ViewportState::new();
        state.scale = 2.5;
        state.offset = (7.0, 9.0);

        let mut params = state.params;
        params.grid = true;
        state.apply_params(params);

        assert_eq!(state.scale, 2.5);
        assert_eq!(state.offset, (7.0, 9.0));
    }
}
