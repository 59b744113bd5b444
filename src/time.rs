//! Frame timing for hosts that drive the engine.
//!
//! The engine itself has no notion of wall-clock time: one `compute()` is
//! one integration step. [`FrameClock`] tracks frames and FPS on the host
//! side, and [`ReadbackThrottle`] rate-limits CPU readbacks.
//!
//! # Example
//!
//! ```ignore
//! use sape::time::{FrameClock, ReadbackThrottle};
//!
//! let mut clock = FrameClock::new();
//! let mut throttle = ReadbackThrottle::default();
//!
//! // In your frame loop:
//! clock.tick();
//! if !clock.is_paused() {
//!     engine.compute();
//! }
//! if throttle.tick() {
//!     let positions = engine.read_positions()?;
//! }
//! ```

use std::time::{Duration, Instant};

/// Frame counter and timer.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
    /// Scaled time accumulated over unpaused frames.
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
    paused: bool,
    fixed_delta: Option<f32>,
    time_scale: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
            paused: false,
            fixed_delta: None,
            time_scale: 1.0,
        }
    }

    /// Advance one frame. Call once per rendered frame.
    ///
    /// Returns `(elapsed, delta)` in scaled seconds. Paused frames are not
    /// counted and report a zero delta.
    pub fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();
        let raw_delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if self.paused {
            self.delta_secs = 0.0;
            return (self.elapsed_secs, self.delta_secs);
        }

        self.delta_secs = self.fixed_delta.unwrap_or(raw_delta) * self.time_scale;
        self.elapsed_secs += self.delta_secs;
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        (self.elapsed_secs, self.delta_secs)
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Unpaused frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second, refreshed twice a second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Wall-clock time since the clock was created or reset.
    pub fn wall_time(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.last_frame = Instant::now();
            self.paused = false;
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Report a constant delta instead of measured frame time.
    /// `None` restores measured timing.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }

    /// Set time scale multiplier. Negative values clamp to 0.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    pub fn reset(&mut self) {
        let fixed_delta = self.fixed_delta;
        let time_scale = self.time_scale;
        *self = Self::new();
        self.fixed_delta = fixed_delta;
        self.time_scale = time_scale;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Fires once every `n` ticks.
///
/// Readback stalls the pipeline, so hosts read positions at a fraction of
/// the frame rate. The default of 6 gives about 10 Hz at 60 fps.
#[derive(Debug, Clone)]
pub struct ReadbackThrottle {
    interval: u32,
    counter: u32,
}

impl ReadbackThrottle {
    pub const DEFAULT_INTERVAL: u32 = 6;

    /// Throttle firing every `interval` ticks. An interval of 0 is treated
    /// as 1.
    pub fn every(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            counter: 0,
        }
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Count one frame. Returns `true` on every `interval`-th call.
    pub fn tick(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.interval {
            self.counter = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

impl Default for ReadbackThrottle {
    fn default() -> Self {
        Self::every(Self::DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_new() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);
        assert!(!clock.is_paused());
        assert_eq!(clock.time_scale(), 1.0);
    }

    #[test]
    fn test_clock_tick() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(10));
        let (elapsed, delta) = clock.tick();

        assert!(elapsed > 0.0);
        assert!(delta > 0.0);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn test_clock_pause() {
        let mut clock = FrameClock::new();
        clock.tick();

        clock.pause();
        let elapsed_before = clock.elapsed();
        thread::sleep(Duration::from_millis(10));
        clock.tick();

        assert_eq!(clock.elapsed(), elapsed_before);
        assert_eq!(clock.delta(), 0.0);
        assert_eq!(clock.frame(), 1);

        clock.resume();
        clock.tick();
        assert_eq!(clock.frame(), 2);
    }

    #[test]
    fn test_time_scale_clamps() {
        let mut clock = FrameClock::new();
        clock.set_time_scale(2.0);
        assert_eq!(clock.time_scale(), 2.0);

        clock.set_time_scale(-1.0);
        assert_eq!(clock.time_scale(), 0.0);
    }

    #[test]
    fn test_fixed_delta_is_scaled() {
        let mut clock = FrameClock::new();
        clock.set_fixed_delta(Some(1.0 / 60.0));
        clock.set_time_scale(0.5);

        thread::sleep(Duration::from_millis(20));
        clock.tick();
        clock.tick();

        assert!((clock.delta() - 0.5 / 60.0).abs() < 1e-6);
        assert!((clock.elapsed() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_throttle_fires_every_n() {
        let mut throttle = ReadbackThrottle::every(3);
        let fired: Vec<bool> = (0..7).map(|_| throttle.tick()).collect();
        assert_eq!(fired, [false, false, true, false, false, true, false]);
    }

    #[test]
    fn test_throttle_defaults() {
        assert_eq!(ReadbackThrottle::default().interval(), 6);
        let mut every_frame = ReadbackThrottle::every(0);
        assert!(every_frame.tick());
        assert!(every_frame.tick());
    }
}
