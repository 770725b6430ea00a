//! Frame clock
//!
//! Turns host timestamps into clamped simulation steps.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_DT, MIN_FRAME_DT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameClock {
    /// Last timestamp seen (milliseconds)
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start measuring from `now_ms` (after a resume or reset)
    pub fn restart(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    /// Seconds since the previous call, clamped to one 60 Hz frame.
    ///
    /// Returns `None` when the frame should be skipped: on the first call,
    /// when time went backwards, or when the step is negligible.
    pub fn advance(&mut self, now_ms: f64) -> Option<f32> {
        let previous = self.last_ms.replace(now_ms)?;
        clamp_delta(((now_ms - previous) / 1000.0) as f32)
    }
}

/// Clamp a raw step in seconds; `None` means no-op frame
pub fn clamp_delta(dt: f32) -> Option<f32> {
    if !dt.is_finite() {
        return None;
    }
    let dt = dt.min(MAX_FRAME_DT);
    if dt < MIN_FRAME_DT {
        log::trace!("skipping frame, dt = {dt}");
        None
    } else {
        Some(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_skipped() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(1000.0), None);
        assert_eq!(clock.advance(1010.0), Some(0.01));
    }

    #[test]
    fn test_long_gap_is_clamped() {
        let mut clock = FrameClock::new();
        clock.restart(0.0);
        // Tab suspended for five seconds
        assert_eq!(clock.advance(5000.0), Some(MAX_FRAME_DT));
    }

    #[test]
    fn test_tiny_and_negative_steps_skip() {
        let mut clock = FrameClock::new();
        clock.restart(100.0);
        assert_eq!(clock.advance(100.05), None);
        assert_eq!(clock.advance(90.0), None);
        // Measures from the latest timestamp, not the earlier one
        assert_eq!(clock.advance(100.0), Some(0.01));
    }

    #[test]
    fn test_clamp_delta_rejects_nan() {
        assert_eq!(clamp_delta(f32::NAN), None);
        assert_eq!(clamp_delta(-1.0), None);
        assert_eq!(clamp_delta(0.005), Some(0.005));
    }
}
