use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::util::mods::Mods;

macro_rules! forward_mods_fn {
    ( $fn_name:ident, $name:literal ) => {
        #[doc = concat!("Check whether `", $name, "` is enabled.")]
        pub fn $fn_name(&self) -> bool {
            self.bits.$fn_name()
        }
    };
}

/// Collection of game mods.
///
/// This type can be created through its `From<u32>` implementation, taking
/// the mods' legacy bit values, and extended with custom rate adjustments.
/// All speed changes are combined multiplicatively.
///
/// # Example
///
/// ```
/// use rosu_catch::GameMods;
///
/// // HDDT with an additional rate of 1.1
/// let mods = GameMods::from(8 + 64).rate_adjust(1.1);
///
/// assert!((mods.clock_rate() - 1.65).abs() < 1e-10);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct GameMods {
    bits: u32,
    rate_adjusts: Vec<f64>,
}

impl GameMods {
    /// No mods.
    pub const fn new() -> Self {
        Self {
            bits: 0,
            rate_adjusts: Vec::new(),
        }
    }

    /// Add a custom clock rate on top of the current mods.
    #[must_use]
    pub fn rate_adjust(mut self, rate: f64) -> Self {
        self.rate_adjusts.push(rate);

        self
    }

    /// The legacy bit values of the mods.
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// The custom rate adjustments in the order they were added.
    pub fn rate_adjusts(&self) -> &[f64] {
        &self.rate_adjusts
    }

    /// Returns the combined clock rate of all speed-changing mods.
    ///
    /// The value is not validated; see [`Difficulty::calculate`].
    ///
    /// [`Difficulty::calculate`]: crate::Difficulty::calculate
    pub fn clock_rate(&self) -> f64 {
        self.rate_adjusts
            .iter()
            .fold(self.bits.clock_rate(), |rate, adjust| rate * adjust)
    }

    pub(crate) fn od_ar_hp_multiplier(&self) -> f64 {
        self.bits.od_ar_hp_multiplier()
    }

    /// Check whether [`HardRock`](https://osu.ppy.sh/wiki/Gameplay/Game_modifier/Hard_Rock) is enabled.
    pub fn hr(&self) -> bool {
        self.bits.hr()
    }

    /// Check whether [`Easy`](https://osu.ppy.sh/wiki/Gameplay/Game_modifier/Easy) is enabled.
    pub fn ez(&self) -> bool {
        self.bits.ez()
    }

    /// Check whether [`DoubleTime`](https://osu.ppy.sh/wiki/Gameplay/Game_modifier/Double_Time)
    /// or `Nightcore` is enabled.
    pub fn dt(&self) -> bool {
        self.bits.dt() || self.bits.nc()
    }

    /// Check whether [`HalfTime`](https://osu.ppy.sh/wiki/Gameplay/Game_modifier/Half_Time) is enabled.
    pub fn ht(&self) -> bool {
        self.bits.ht()
    }

    forward_mods_fn!(nf, "NoFail");
    forward_mods_fn!(td, "TouchDevice");
    forward_mods_fn!(hd, "Hidden");
    forward_mods_fn!(rx, "Relax");
    forward_mods_fn!(fl, "Flashlight");
    forward_mods_fn!(so, "SpunOut");
}

impl Debug for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut acronyms = String::with_capacity(8);

        for (bits, acronym) in [
            (u32::NF, "NF"),
            (u32::EZ, "EZ"),
            (u32::TD, "TD"),
            (u32::HD, "HD"),
            (u32::HR, "HR"),
            (u32::DT, "DT"),
            (u32::RX, "RX"),
            (u32::HT, "HT"),
            (u32::NC, "NC"),
            (u32::FL, "FL"),
            (u32::SO, "SO"),
        ] {
            if self.bits & bits != 0 {
                acronyms.push_str(acronym);
            }
        }

        if acronyms.is_empty() {
            acronyms.push_str("NM");
        }

        if self.rate_adjusts.is_empty() {
            f.write_str(&acronyms)
        } else {
            write!(f, "{acronyms}{:?}", self.rate_adjusts)
        }
    }
}

impl From<u32> for GameMods {
    fn from(bits: u32) -> Self {
        Self {
            bits,
            rate_adjusts: Vec::new(),
        }
    }
}

impl From<&GameMods> for GameMods {
    fn from(mods: &GameMods) -> Self {
        mods.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_adjusts_multiply() {
        let mods = GameMods::from(u32::HT).rate_adjust(2.0).rate_adjust(0.5);

        assert!((mods.clock_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn checks_bits() {
        let mods = GameMods::from(1 + 8 + 512);

        assert!(mods.nf() && mods.hd() && mods.dt());
        assert!(!mods.td() && !mods.rx() && !mods.fl() && !mods.so());
    }

    #[test]
    fn debug_lists_acronyms() {
        assert_eq!(format!("{:?}", GameMods::new()), "NM");
        assert_eq!(format!("{:?}", GameMods::from(8 + 16)), "HDHR");
        assert_eq!(format!("{:?}", GameMods::from(64).rate_adjust(1.2)), "DT[1.2]");
    }
}
