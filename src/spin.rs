// Throttled auto-rotation for the structure viewer. The host calls `frame`
// from its animation loop and applies any returned angle to the viewer.

pub struct AutoSpin {
    spinning: bool,
    step_degrees: f64,
    min_frame_ms: f64,
    last_frame_ms: f64,
}

impl AutoSpin {
    pub fn new(step_degrees: f64, min_frame_ms: f64) -> AutoSpin {
        AutoSpin {
            spinning: false,
            step_degrees,
            min_frame_ms,
            last_frame_ms: 0.0,
        }
    }

    pub fn start(&mut self, now_ms: f64) {
        self.spinning = true;
        self.last_frame_ms = now_ms;
    }

    pub fn stop(&mut self) {
        self.spinning = false;
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// Degrees to rotate about the y axis this frame, if any.
    pub fn frame(&mut self, now_ms: f64) -> Option<f64> {
        if !self.spinning {
            return None;
        }
        if now_ms - self.last_frame_ms >= self.min_frame_ms {
            self.last_frame_ms = now_ms;
            Some(self.step_degrees)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_spin_never_rotates() {
        let mut spin = AutoSpin::new(0.5, 16.0);
        assert_eq!(spin.frame(1000.0), None);
    }

    #[test]
    fn throttles_to_min_frame_interval() {
        let mut spin = AutoSpin::new(0.5, 16.0);
        spin.start(0.0);
        assert_eq!(spin.frame(8.0), None);
        assert_eq!(spin.frame(16.0), Some(0.5));
        assert_eq!(spin.frame(30.0), None);
        assert_eq!(spin.frame(32.5), Some(0.5));
    }

    #[test]
    fn restart_resets_reference_time() {
        let mut spin = AutoSpin::new(0.5, 16.0);
        spin.start(0.0);
        spin.stop();
        assert_eq!(spin.frame(100.0), None);
        spin.start(100.0);
        assert!(spin.is_spinning());
        assert_eq!(spin.frame(110.0), None);
        assert_eq!(spin.frame(116.0), Some(0.5));
    }
}
