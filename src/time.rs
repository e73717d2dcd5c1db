//! Platform-agnostic time utilities
//!
//! Provides a unified way to get elapsed time in seconds since app start.

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

#[cfg(not(all(target_arch = "wasm32", feature = "wasm")))]
pub fn now_seconds() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// Turns per-frame timestamps into clamped frame deltas.
///
/// The first tick yields 0. A long gap (hidden tab, debugger pause) is
/// capped at `max_dt` so the globe does not jump.
#[derive(Clone, Debug)]
pub struct FrameClock {
    last: Option<f64>,
    max_dt: f64,
}

impl FrameClock {
    /// A negative or NaN `max_dt` is treated as 0
    pub fn new(max_dt: f64) -> Self {
        Self {
            last: None,
            max_dt: max_dt.max(0.0),
        }
    }

    /// Seconds since the previous tick
    pub fn tick(&mut self, now: f64) -> f64 {
        let dt = match self.last {
            Some(last) => (now - last).clamp(0.0, self.max_dt),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }
}

/// FPS counter over the last 60 frames
pub struct FpsCounter {
    frames: Vec<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(60),
        }
    }

    pub fn tick(&mut self, now: f64) {
        self.frames.push(now);
        if self.frames.len() > 60 {
            self.frames.remove(0);
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.first(), self.frames.last()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.frames.len() < 2 || elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / elapsed
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new(0.25);
        assert_eq!(clock.tick(12.0), 0.0);
        assert!((clock.tick(12.016) - 0.016).abs() < 1e-9);
    }

    #[test]
    fn gaps_are_clamped() {
        let mut clock = FrameClock::new(0.25);
        clock.tick(1.0);
        assert_eq!(clock.tick(30.0), 0.25);
        // Clock going backwards never yields a negative step
        assert_eq!(clock.tick(29.0), 0.0);
    }

    #[test]
    fn negative_cap_never_panics() {
        let mut clock = FrameClock::new(-1.0);
        clock.tick(1.0);
        assert_eq!(clock.tick(2.0), 0.0);
        assert_eq!(clock.tick(3.0), 0.0);
    }

    #[test]
    fn fps_from_steady_frames() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.fps(), 0.0);
        for i in 0..=60 {
            fps.tick(i as f64 / 60.0);
        }
        assert!((fps.fps() - 60.0).abs() < 1e-6);
    }
}
