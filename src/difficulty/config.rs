/// Constants driving a difficulty calculation.
///
/// The defaults reproduce osu!catch star ratings; other values are mostly
/// useful for experiments and tests.
///
/// # Example
///
/// ```
/// use rosu_catch::{Beatmap, Difficulty, DifficultyConfig};
///
/// let config = DifficultyConfig {
///     section_len: 400.0,
///     ..DifficultyConfig::default()
/// };
///
/// let attrs = Difficulty::new()
///     .config(config)
///     .calculate(&Beatmap::default())
///     .unwrap();
///
/// assert_eq!(attrs.stars, 0.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DifficultyConfig {
    /// Length of a strain section in milliseconds, measured in the
    /// rate-adjusted timebase.
    pub section_len: f64,
    /// Multiplier applied to the square root of the movement difficulty.
    pub star_scaling_factor: f64,
    /// Preempt values used to derive the approach rate.
    pub preempt: PreemptRange,
}

impl DifficultyConfig {
    pub const DEFAULT: Self = Self {
        section_len: 750.0,
        star_scaling_factor: 0.145,
        preempt: PreemptRange::DEFAULT,
    };
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Preempt times in milliseconds for approach rate 0, 5, and 10.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PreemptRange {
    pub min: f64,
    pub mid: f64,
    pub max: f64,
}

impl PreemptRange {
    pub const DEFAULT: Self = Self {
        min: 1800.0,
        mid: 1200.0,
        max: 450.0,
    };

    /// Maps a preempt time back onto the approach rate scale.
    ///
    /// Preempt times beyond the range extrapolate linearly, e.g. HT on AR 0
    /// results in a negative approach rate.
    pub fn inverse(&self, preempt: f64) -> f64 {
        if preempt > self.mid {
            -(preempt - self.min) / ((self.min - self.mid) / 5.0)
        } else {
            -(preempt - self.mid) / ((self.mid - self.max) / 5.0) + 5.0
        }
    }
}

impl Default for PreemptRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_breakpoints_are_exact() {
        let range = PreemptRange::DEFAULT;

        assert_eq!(range.inverse(1800.0), 0.0);
        assert_eq!(range.inverse(1200.0), 5.0);
        assert_eq!(range.inverse(450.0), 10.0);
    }

    #[test]
    fn inverse_extrapolates() {
        let range = PreemptRange::DEFAULT;

        assert!(range.inverse(2400.0) < 0.0);
        assert!(range.inverse(300.0) > 10.0);
    }
}
