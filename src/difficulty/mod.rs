use crate::{
    catch::{self, CatchDifficultyAttributes, CatchStrains},
    model::{beatmap::Beatmap, mode::GameMode, mods::GameMods},
};

use self::{config::DifficultyConfig, error::DifficultyResult};

pub use self::error::DifficultyError;

pub mod config;
pub mod error;

#[cfg(any(feature = "async_tokio", feature = "async_std"))]
mod spawn;

/// Difficulty calculator on osu!catch maps.
///
/// # Example
///
/// ```
/// use rosu_catch::{Beatmap, Difficulty, model::hit_object::HitObject};
///
/// let map = Beatmap {
///     hit_objects: vec![
///         HitObject::fruit(64.0, 0.0),
///         HitObject::fruit(448.0, 300.0),
///         HitObject::fruit(64.0, 600.0),
///     ],
///     ..Beatmap::default()
/// };
///
/// let attrs = Difficulty::new()
///     .mods(64) // DT
///     .calculate(&map)
///     .unwrap();
///
/// assert!(attrs.stars > 0.0);
/// assert_eq!(attrs.max_combo(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[must_use]
pub struct Difficulty {
    mods: GameMods,
    passed_objects: Option<u32>,
    clock_rate: Option<f64>,
    ar: Option<ModsDependent>,
    cs: Option<ModsDependent>,
    config: DifficultyConfig,
}

/// A beatmap attribute that may or may not already account for mods.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModsDependent {
    pub value: f32,
    pub with_mods: bool,
}

impl ModsDependent {
    pub const fn new(value: f32) -> Self {
        Self {
            value,
            with_mods: false,
        }
    }
}

impl Difficulty {
    /// Create a new difficulty calculator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify mods.
    ///
    /// Accepted types are
    /// - `u32`: legacy bit values
    /// - [`GameMods`], e.g. to add custom rate adjustments
    ///
    /// See [https://github.com/ppy/osu-api/wiki#mods](https://github.com/ppy/osu-api/wiki#mods)
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        Self {
            mods: mods.into(),
            ..self
        }
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    ///
    /// Only the first `passed_objects` hitobjects of the map are considered.
    pub fn passed_objects(self, passed_objects: u32) -> Self {
        Self {
            passed_objects: Some(passed_objects),
            ..self
        }
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise, multiplied with all
    /// custom rate adjustments.
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate),
            ..self
        }
    }

    /// Override a beatmap's set AR.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub fn ar(self, ar: f32, with_mods: bool) -> Self {
        Self {
            ar: Some(ModsDependent {
                value: ar.clamp(-20.0, 20.0),
                with_mods,
            }),
            ..self
        }
    }

    /// Override a beatmap's set CS.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    ///
    /// The value is clamped between 0 and 10.
    pub fn cs(self, cs: f32, with_mods: bool) -> Self {
        Self {
            cs: Some(ModsDependent {
                value: cs.clamp(0.0, 10.0),
                with_mods,
            }),
            ..self
        }
    }

    /// Use custom constants for the calculation.
    pub fn config(self, config: DifficultyConfig) -> Self {
        Self { config, ..self }
    }

    /// Perform the difficulty calculation.
    pub fn calculate(&self, map: &Beatmap) -> DifficultyResult<CatchDifficultyAttributes> {
        let res = self
            .validate(map)
            .map(|()| catch::difficulty::difficulty(self, map));

        #[cfg(feature = "tracing")]
        match res {
            Ok(ref attrs) => tracing::debug!(
                stars = attrs.stars,
                max_combo = attrs.max_combo(),
                clock_rate = attrs.clock_rate,
                "Calculated osu!catch difficulty"
            ),
            Err(ref err) => tracing::error!("Failed to calculate difficulty: {err}"),
        }

        res
    }

    /// Perform the difficulty calculation but instead of evaluating the skill
    /// strains, return them as is.
    ///
    /// Suitable to plot the difficulty of a map over time.
    pub fn strains(&self, map: &Beatmap) -> DifficultyResult<CatchStrains> {
        self.validate(map)?;

        Ok(catch::strains::strains(self, map))
    }

    fn validate(&self, map: &Beatmap) -> DifficultyResult<()> {
        if map.mode != GameMode::Catch {
            return Err(DifficultyError::IncompatibleMode(map.mode));
        }

        let clock_rate = self.get_clock_rate();

        if !clock_rate.is_finite() || clock_rate <= 0.0 {
            return Err(DifficultyError::InvalidClockRate(clock_rate));
        }

        let section_len = self.config.section_len;

        if !section_len.is_finite() || section_len <= 0.0 {
            return Err(DifficultyError::InvalidSectionLength(section_len));
        }

        Ok(())
    }

    pub(crate) const fn get_mods(&self) -> &GameMods {
        &self.mods
    }

    pub(crate) fn get_clock_rate(&self) -> f64 {
        self.clock_rate.unwrap_or_else(|| self.mods.clock_rate())
    }

    pub(crate) fn get_passed_objects(&self) -> usize {
        self.passed_objects.map_or(usize::MAX, |n| n as usize)
    }

    pub(crate) const fn get_ar(&self) -> Option<ModsDependent> {
        self.ar
    }

    pub(crate) const fn get_cs(&self) -> Option<ModsDependent> {
        self.cs
    }

    pub(crate) const fn get_config(&self) -> &DifficultyConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use crate::model::hit_object::HitObject;

    use super::*;

    #[test]
    fn rejects_other_modes() {
        let map = Beatmap {
            mode: GameMode::Taiko,
            ..Beatmap::default()
        };

        let err = Difficulty::new().calculate(&map).unwrap_err();

        assert_eq!(err, DifficultyError::IncompatibleMode(GameMode::Taiko));
    }

    #[test]
    fn rejects_invalid_clock_rates() {
        let map = Beatmap::default();

        for clock_rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let res = Difficulty::new().clock_rate(clock_rate).calculate(&map);

            assert!(
                matches!(res, Err(DifficultyError::InvalidClockRate(_))),
                "{clock_rate} was accepted"
            );
        }

        let mods = GameMods::from(64).rate_adjust(-2.0);
        let res = Difficulty::new().mods(mods).strains(&map);

        assert!(matches!(res, Err(DifficultyError::InvalidClockRate(_))));
    }

    #[test]
    fn rejects_invalid_section_len() {
        let config = DifficultyConfig {
            section_len: 0.0,
            ..DifficultyConfig::default()
        };

        let err = Difficulty::new()
            .config(config)
            .calculate(&Beatmap::default())
            .unwrap_err();

        assert_eq!(err, DifficultyError::InvalidSectionLength(0.0));
    }

    #[test]
    fn custom_clock_rate_overrides_mods() {
        let difficulty = Difficulty::new().mods(64).clock_rate(1.2);

        assert!((difficulty.get_clock_rate() - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn attributes_keep_mods() {
        let map = Beatmap {
            hit_objects: vec![HitObject::fruit(0.0, 0.0)],
            ..Beatmap::default()
        };

        let mods = GameMods::from(16).rate_adjust(1.1);
        let attrs = Difficulty::new().mods(mods.clone()).calculate(&map).unwrap();

        assert_eq!(attrs.mods, mods);
        assert!((attrs.clock_rate - 1.1).abs() < f64::EPSILON);
    }
}
