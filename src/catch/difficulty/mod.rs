use std::cmp;

use crate::{
    catch::{
        attributes::{CatchDifficultyAttributes, ObjectCount},
        catcher::Catcher,
    },
    model::beatmap::Beatmap,
    Difficulty,
};

use self::{
    object::CatchDifficultyObjects,
    skills::{Skill, SkillKind},
};

pub mod object;
pub mod skills;

pub fn difficulty(difficulty: &Difficulty, map: &Beatmap) -> CatchDifficultyAttributes {
    let DifficultyValues { skills, mut attrs } = DifficultyValues::calculate(difficulty, map);

    let movement = skills
        .into_iter()
        .filter(|skill| skill.kind() == SkillKind::Movement)
        .map(Skill::difficulty_value)
        .sum::<f64>();

    attrs.stars = movement.sqrt() * difficulty.get_config().star_scaling_factor;

    attrs
}

/// Skills after processing all relevant objects alongside the attributes
/// that don't depend on them.
pub struct DifficultyValues {
    pub skills: Vec<Skill>,
    pub attrs: CatchDifficultyAttributes,
}

impl DifficultyValues {
    pub fn calculate(difficulty: &Difficulty, map: &Beatmap) -> Self {
        let take = cmp::min(difficulty.get_passed_objects(), map.hit_objects.len());
        let hit_objects = &map.hit_objects[..take];

        let clock_rate = difficulty.get_clock_rate();
        let section_len = difficulty.get_config().section_len;

        let map_attrs = map.attributes().difficulty(difficulty).build();

        let mut attrs = CatchDifficultyAttributes {
            ar: map_attrs.ar,
            clock_rate,
            mods: difficulty.get_mods().clone(),
            ..Default::default()
        };

        attrs.set_object_count(&ObjectCount::new(hit_objects));

        let mut skills: Vec<_> = SkillKind::ALL
            .into_iter()
            .map(|kind| Skill::new(kind, clock_rate, section_len))
            .collect();

        let half_catcher_width = Catcher::half_catcher_width(map_attrs.cs as f32);

        for curr in CatchDifficultyObjects::new(hit_objects, clock_rate, half_catcher_width) {
            for skill in skills.iter_mut() {
                skill.process(&curr);
            }
        }

        Self { skills, attrs }
    }
}
