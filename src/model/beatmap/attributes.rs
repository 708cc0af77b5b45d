use crate::{
    difficulty::{config::PreemptRange, ModsDependent},
    model::mods::GameMods,
    Difficulty,
};

use super::Beatmap;

/// Summary struct for a [`Beatmap`]'s attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct BeatmapAttributes {
    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The circle size.
    pub cs: f64,
    /// The health drain rate
    pub hp: f64,
    /// The clock rate with respect to mods.
    pub clock_rate: f64,
    /// The hit windows for approach rate.
    pub hit_windows: HitWindows,
}

/// AR hit window
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitWindows {
    /// Hit window for approach rate i.e. `TimePreempt` in milliseconds.
    pub ar: f64,
}

/// A builder for [`BeatmapAttributes`] and [`HitWindows`].
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct BeatmapAttributesBuilder {
    ar: ModsDependent,
    od: ModsDependent,
    cs: ModsDependent,
    hp: ModsDependent,
    mods: GameMods,
    clock_rate: Option<f64>,
    preempt: PreemptRange,
}

impl BeatmapAttributesBuilder {
    /// Create a new [`BeatmapAttributesBuilder`].
    ///
    /// All attributes are set to `5.0`.
    pub const fn new() -> Self {
        Self {
            ar: ModsDependent::new(5.0),
            od: ModsDependent::new(5.0),
            cs: ModsDependent::new(5.0),
            hp: ModsDependent::new(5.0),
            mods: GameMods::new(),
            clock_rate: None,
            preempt: PreemptRange::DEFAULT,
        }
    }

    /// Use the given [`Beatmap`]'s attributes.
    pub fn map(self, map: &Beatmap) -> Self {
        Self {
            ar: ModsDependent::new(map.ar),
            od: ModsDependent::new(map.od),
            cs: ModsDependent::new(map.cs),
            hp: ModsDependent::new(map.hp),
            ..self
        }
    }

    /// Specify the approach rate.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub fn ar(self, ar: f32, with_mods: bool) -> Self {
        Self {
            ar: ModsDependent {
                value: ar,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the overall difficulty.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub fn od(self, od: f32, with_mods: bool) -> Self {
        Self {
            od: ModsDependent {
                value: od,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the circle size.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub fn cs(self, cs: f32, with_mods: bool) -> Self {
        Self {
            cs: ModsDependent {
                value: cs,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the drain rate.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub fn hp(self, hp: f32, with_mods: bool) -> Self {
        Self {
            hp: ModsDependent {
                value: hp,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the mods.
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        Self {
            mods: mods.into(),
            ..self
        }
    }

    /// Specify a custom clock rate.
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate),
            ..self
        }
    }

    /// Specify the preempt values for approach rate 0, 5, and 10.
    pub fn preempt(self, preempt: PreemptRange) -> Self {
        Self { preempt, ..self }
    }

    /// Specify all settings through [`Difficulty`].
    pub fn difficulty(self, difficulty: &Difficulty) -> Self {
        Self {
            ar: difficulty.get_ar().unwrap_or(self.ar),
            cs: difficulty.get_cs().unwrap_or(self.cs),
            mods: difficulty.get_mods().clone(),
            clock_rate: Some(difficulty.get_clock_rate()),
            preempt: difficulty.get_config().preempt,
            ..self
        }
    }

    fn get_clock_rate(&self) -> f64 {
        self.clock_rate.unwrap_or_else(|| self.mods.clock_rate())
    }

    fn mod_mult(&self, value: f32) -> f32 {
        if self.mods.hr() {
            (value * 1.4).min(10.0)
        } else if self.mods.ez() {
            value * 0.5
        } else {
            value
        }
    }

    /// Calculate the AR hit window.
    pub fn hit_windows(&self) -> HitWindows {
        let clock_rate = self.get_clock_rate();
        let ar_clock_rate = if self.ar.with_mods { 1.0 } else { clock_rate };

        let raw_ar = if self.ar.with_mods {
            self.ar.value
        } else {
            self.mod_mult(self.ar.value)
        };

        let PreemptRange { min, mid, max } = self.preempt;
        let preempt = difficulty_range(f64::from(raw_ar), min, mid, max) / ar_clock_rate;

        HitWindows { ar: preempt }
    }

    /// Calculate the [`BeatmapAttributes`].
    pub fn build(&self) -> BeatmapAttributes {
        let clock_rate = self.get_clock_rate();

        // HP
        let mut hp = self.hp.value;

        if !self.hp.with_mods {
            hp *= self.mods.od_ar_hp_multiplier() as f32;
        }

        hp = hp.min(10.0);

        // OD
        let od = if self.od.with_mods {
            self.od.value
        } else {
            self.mod_mult(self.od.value)
        };

        // CS
        let mut cs = self.cs.value;

        if !self.cs.with_mods {
            if self.mods.hr() {
                cs *= 1.3;
            } else if self.mods.ez() {
                cs *= 0.5;
            }
        }

        // The catcher vanishes around CS 12
        cs = cs.clamp(0.0, 10.0);

        let hit_windows = self.hit_windows();
        let ar = self.preempt.inverse(hit_windows.ar);

        BeatmapAttributes {
            ar,
            od: f64::from(od),
            cs: f64::from(cs),
            hp: f64::from(hp),
            clock_rate,
            hit_windows,
        }
    }
}

impl From<&Beatmap> for BeatmapAttributesBuilder {
    fn from(map: &Beatmap) -> Self {
        Self::new().map(map)
    }
}

impl Default for BeatmapAttributesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a difficulty setting within 0 to 10 onto a value between `min` and
/// `max`, passing through `mid` at 5.
pub fn difficulty_range(difficulty: f64, min: f64, mid: f64, max: f64) -> f64 {
    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid - (mid - min) * (5.0 - difficulty) / 5.0
    } else {
        mid
    }
}
