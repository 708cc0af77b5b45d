use crate::{
    catch::difficulty::{skills::SkillKind, DifficultyValues},
    model::beatmap::Beatmap,
    Difficulty,
};

/// The result of calculating the strains on a osu!catch map.
///
/// Suitable to plot the difficulty of a map over time.
#[derive(Clone, Debug, PartialEq)]
pub struct CatchStrains {
    /// Time between two strains in ms, measured in the rate-adjusted
    /// timebase.
    pub section_len: f64,
    /// Strain peaks of the movement skill.
    pub movement: Vec<f64>,
}

impl CatchStrains {
    /// Default time between two strains in ms.
    ///
    /// Only applies if [`DifficultyConfig::section_len`] was not changed; see
    /// [`CatchStrains::section_len`] for the value that was actually used.
    ///
    /// [`DifficultyConfig::section_len`]: crate::DifficultyConfig::section_len
    pub const SECTION_LEN: f64 = 750.0;
}

pub fn strains(difficulty: &Difficulty, map: &Beatmap) -> CatchStrains {
    let DifficultyValues { skills, .. } = DifficultyValues::calculate(difficulty, map);

    let movement = skills
        .into_iter()
        .find(|skill| skill.kind() == SkillKind::Movement)
        .map_or_else(Vec::new, |skill| skill.into_current_strain_peaks().into_vec());

    CatchStrains {
        section_len: difficulty.get_config().section_len,
        movement,
    }
}
