// Refresh rate and display mode values

use std::fmt;
use std::time::Duration;

/// Display refresh rate as an exact ratio
///
/// Kept as `numerator / denominator` exactly as the display reports it
/// (e.g. `60000/1001` for 59.94 Hz). The ratio is never reduced, so
/// `60/1` and `120/2` compare unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RefreshRate {
    pub numerator: u32,
    pub denominator: u32,
}

impl RefreshRate {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Refresh rate in Hz. Returns 0.0 when the denominator is zero.
    pub fn hz(&self) -> f64 {
        if self.denominator == 0 {
            return 0.0;
        }
        self.numerator as f64 / self.denominator as f64
    }

    /// Duration of one refresh interval (`denominator / numerator` seconds)
    ///
    /// `None` if either side of the ratio is zero.
    pub fn frame_interval(&self) -> Option<Duration> {
        if self.numerator == 0 || self.denominator == 0 {
            return None;
        }
        let nanos = self.denominator as u128 * 1_000_000_000 / self.numerator as u128;
        Some(Duration::from_nanos(nanos as u64))
    }

    /// The pair as handed back over the C ABI.
    pub fn as_pair(&self) -> (u32, u32) {
        (self.numerator, self.denominator)
    }
}

impl fmt::Display for RefreshRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Current timing mode of a display output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayMode {
    /// Width (pixels)
    pub width: u32,
    /// Height (pixels)
    pub height: u32,
    pub refresh_rate: RefreshRate,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} @ {} ({:.3} Hz)",
            self.width,
            self.height,
            self.refresh_rate,
            self.refresh_rate.hz()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_is_not_reduced() {
        let ntsc = RefreshRate::new(60000, 1001);
        assert_eq!(ntsc.as_pair(), (60000, 1001));
        assert_ne!(RefreshRate::new(60, 1), RefreshRate::new(120, 2));
        assert_eq!(ntsc.to_string(), "60000/1001");
    }

    #[test]
    fn test_hz() {
        let hz = RefreshRate::new(60000, 1001).hz();
        assert!((hz - 59.94).abs() < 0.001, "got {}", hz);
        assert_eq!(RefreshRate::new(144, 0).hz(), 0.0);
    }

    #[test]
    fn test_frame_interval() {
        let interval = RefreshRate::new(60, 1).frame_interval().unwrap();
        assert_eq!(interval, Duration::from_nanos(16_666_666));

        let interval = RefreshRate::new(60000, 1001).frame_interval().unwrap();
        assert_eq!(interval, Duration::from_nanos(16_683_333));

        assert!(RefreshRate::new(0, 1).frame_interval().is_none());
        assert!(RefreshRate::new(60, 0).frame_interval().is_none());
    }

    #[test]
    fn test_mode_display() {
        let mode = DisplayMode {
            width: 2560,
            height: 1440,
            refresh_rate: RefreshRate::new(144, 1),
        };
        assert_eq!(mode.to_string(), "2560x1440 @ 144/1 (144.000 Hz)");
    }
}
