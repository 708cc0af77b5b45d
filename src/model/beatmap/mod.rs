use crate::{model::mode::GameMode, Difficulty};

pub use self::attributes::{
    difficulty_range, BeatmapAttributes, BeatmapAttributesBuilder, HitWindows,
};

use super::hit_object::HitObject;

mod attributes;

/// All beatmap data that is relevant for difficulty calculation.
///
/// Decoding `.osu` files is not part of this crate; the hitobjects are
/// expected to be sorted by their start time already.
#[derive(Clone, Debug, PartialEq)]
pub struct Beatmap {
    // General
    pub mode: GameMode,

    // Difficulty
    pub ar: f32,
    pub cs: f32,
    pub hp: f32,
    pub od: f32,

    // HitObjects
    pub hit_objects: Vec<HitObject>,
}

impl Beatmap {
    /// Returns a [`BeatmapAttributesBuilder`] to calculate modified beatmap
    /// attributes.
    pub fn attributes(&self) -> BeatmapAttributesBuilder {
        BeatmapAttributesBuilder::new().map(self)
    }

    /// Shorthand for `Difficulty::new().calculate(map)` without mods.
    ///
    /// Only fails if the map is not an osu!catch map.
    pub fn stars(&self) -> Result<f64, crate::DifficultyError> {
        Difficulty::new().calculate(self).map(|attrs| attrs.stars)
    }
}

impl Default for Beatmap {
    fn default() -> Self {
        Self {
            mode: GameMode::Catch,
            ar: 5.0,
            cs: 5.0,
            hp: 5.0,
            od: 5.0,
            hit_objects: Vec::new(),
        }
    }
}
