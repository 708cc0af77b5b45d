use crate::util::strains_vec::StrainsVec;

use self::{movement::Movement, strain::StrainDecaySkill};

use super::object::CatchDifficultyObject;

pub mod movement;
pub mod strain;

/// All skills that contribute to the osu!catch star rating.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SkillKind {
    Movement,
}

impl SkillKind {
    pub const ALL: [Self; 1] = [Self::Movement];
}

/// A skill's state throughout a single calculation.
#[derive(Clone, Debug, PartialEq)]
pub enum Skill {
    Movement(Movement),
}

impl Skill {
    pub fn new(kind: SkillKind, clock_rate: f64, section_len: f64) -> Self {
        match kind {
            SkillKind::Movement => Self::Movement(Movement::new(clock_rate, section_len)),
        }
    }

    pub const fn kind(&self) -> SkillKind {
        match self {
            Self::Movement(_) => SkillKind::Movement,
        }
    }

    pub fn process(&mut self, curr: &CatchDifficultyObject<'_>) {
        match self {
            Self::Movement(movement) => movement.process(curr),
        }
    }

    pub fn into_current_strain_peaks(self) -> StrainsVec {
        match self {
            Self::Movement(movement) => movement.into_current_strain_peaks(),
        }
    }

    pub fn difficulty_value(self) -> f64 {
        match self {
            Self::Movement(movement) => movement.difficulty_value(),
        }
    }
}
