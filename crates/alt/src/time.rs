//! Time unit conversions and a simple stopwatch.

use std::time::Instant;

pub const S_TO_MS: f64 = 1e3;
pub const S_TO_US: f64 = 1e6;
pub const S_TO_NS: f64 = 1e9;

pub const MS_TO_S: f64 = 1e-3;
pub const MS_TO_US: f64 = 1e3;
pub const MS_TO_NS: f64 = 1e6;

pub const US_TO_S: f64 = 1e-6;
pub const US_TO_MS: f64 = 1e-3;
pub const US_TO_NS: f64 = 1e3;

pub const NS_TO_S: f64 = 1e-9;
pub const NS_TO_MS: f64 = 1e-6;
pub const NS_TO_US: f64 = 1e-3;

/// Measures time elapsed since construction or the last [`reset`](Self::reset).
///
/// A fresh timer already counts from its creation, but reports
/// [`is_valid`](Self::is_valid) `false` until it has been reset once.
///
/// ```rust
/// use alt::ElapsedTimer;
///
/// let mut timer = ElapsedTimer::new();
/// assert!(!timer.is_valid());
/// timer.reset();
/// assert!(timer.is_valid());
/// assert!(timer.elapsed_ms() >= 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ElapsedTimer {
    reference: Instant,
    valid: bool,
}

pub type ETimer = ElapsedTimer;

impl ElapsedTimer {
    pub fn new() -> Self {
        Self {
            reference: Instant::now(),
            valid: false,
        }
    }

    /// Restarts the measurement and marks the timer valid.
    pub fn reset(&mut self) {
        self.valid = true;
        self.reference = Instant::now();
    }

    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_nanos() * NS_TO_S
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_nanos() * NS_TO_MS
    }

    pub fn elapsed_us(&self) -> f64 {
        self.elapsed_nanos() * NS_TO_US
    }

    pub fn elapsed_ns(&self) -> f64 {
        self.elapsed_nanos()
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    fn elapsed_nanos(&self) -> f64 {
        self.reference.elapsed().as_nanos() as f64
    }
}

impl Default for ElapsedTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_conversions_are_inverse() {
        for product in [S_TO_MS * MS_TO_S, US_TO_NS * NS_TO_US, S_TO_NS * NS_TO_S] {
            assert!((product - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_timer_measures_sleep() {
        let mut timer = ETimer::default();
        timer.reset();
        std::thread::sleep(Duration::from_millis(20));
        let ms = timer.elapsed_ms();
        assert!(ms >= 19.9, "elapsed {}ms", ms);
        assert!(timer.elapsed_us() >= 19.9 * MS_TO_US);
        assert!(timer.elapsed_s() < 60.0);
    }

    #[test]
    fn test_reset_restarts() {
        let mut timer = ElapsedTimer::new();
        std::thread::sleep(Duration::from_millis(10));
        let before = timer.elapsed_ns();
        timer.reset();
        assert!(timer.elapsed_ns() < before);
    }
}
