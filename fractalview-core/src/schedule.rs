use crate::params::RenderMode;

/// Frame-loop phase. The driver owning the actual animation-frame handle
/// steps this machine; the transitions themselves are pure so the loop
/// policy is testable without a display.
///
/// `Stopped` is terminal: a torn-down viewport never schedules again, and
/// a fresh state machine comes with a fresh viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FramePhase {
    Idle,
    Armed,
    Stopped,
}

impl FramePhase {
    /// Arm one callback. Re-arming while armed is allowed (the driver
    /// cancels the outstanding callback first). No-op once stopped.
    pub fn arm(self) -> FramePhase {
        match self {
            FramePhase::Idle | FramePhase::Armed => FramePhase::Armed,
            FramePhase::Stopped => FramePhase::Stopped,
        }
    }

    /// Phase after one callback ran: continuous modes stay armed,
    /// single-shot modes fall back to idle.
    pub fn after_frame(self, mode: RenderMode) -> FramePhase {
        match self {
            FramePhase::Armed => {
                if mode.is_continuous() {
                    FramePhase::Armed
                } else {
                    FramePhase::Idle
                }
            }
            other => other,
        }
    }

    /// Teardown. Terminal.
    pub fn stop(self) -> FramePhase {
        FramePhase::Stopped
    }

    pub fn is_armed(self) -> bool {
        self == FramePhase::Armed
    }

    pub fn is_stopped(self) -> bool {
        self == FramePhase::Stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_mode_is_single_shot() {
        let phase = FramePhase::Idle.arm();
        assert!(phase.is_armed());
        assert_eq!(phase.after_frame(RenderMode::Frame), FramePhase::Idle);
        assert_eq!(phase.after_frame(RenderMode::None), FramePhase::Idle);
    }

    #[test]
    fn continuous_modes_rearm() {
        let phase = FramePhase::Idle.arm();
        assert_eq!(phase.after_frame(RenderMode::Pixels), FramePhase::Armed);
        assert_eq!(phase.after_frame(RenderMode::Rows), FramePhase::Armed);
        assert_eq!(phase.after_frame(RenderMode::Columns), FramePhase::Armed);
    }

    #[test]
    fn stopped_is_terminal() {
        let phase = FramePhase::Armed.stop();
        assert!(phase.is_stopped());
        assert_eq!(phase.arm(), FramePhase::Stopped);
        assert_eq!(phase.after_frame(RenderMode::Pixels), FramePhase::Stopped);
    }

    #[test]
    fn idle_unaffected_by_frame_completion() {
        assert_eq!(
            FramePhase::Idle.after_frame(RenderMode::Pixels),
            FramePhase::Idle
        );
    }
}
