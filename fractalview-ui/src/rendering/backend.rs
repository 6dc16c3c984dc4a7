use fractalview_core::ViewportState;

/// Uniform contract over the two rendering implementations. The
/// controller schedules frames against exactly one backend at a time;
/// the other stays mounted but receives no calls.
pub trait RenderBackend {
    /// Render one frame against a state snapshot. Returns false when the
    /// frame was skipped (stale buffer, unconfigured surface, zero-area
    /// viewport); a skipped frame leaves the display untouched.
    fn render_step(&mut self, state: &ViewportState, time_ms: f64) -> bool;

    /// React to new viewport dimensions by rebuilding whatever resources
    /// are sized to the old ones.
    fn resize(&mut self, width: u32, height: u32);
}
