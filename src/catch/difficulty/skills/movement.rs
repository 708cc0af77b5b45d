use crate::catch::difficulty::object::CatchDifficultyObject;

use super::strain::{StrainDecaySkill, StrainState};

/// Strain caused by moving the catcher between objects.
#[derive(Clone, Debug, PartialEq)]
pub struct Movement {
    clock_rate: f64,
    last_player_pos: Option<f32>,
    last_dist_moved: f32,
    last_strain_time: f64,
    strain: StrainState,
}

impl Movement {
    const ABSOLUTE_PLAYER_POSITIONING_ERROR: f32 = 16.0;
    const NORMALIZED_HITOBJECT_RADIUS: f32 = CatchDifficultyObject::NORMALIZED_HITOBJECT_RADIUS;
    const DIRECTION_CHANGE_BONUS: f64 = 21.0;

    pub fn new(clock_rate: f64, section_len: f64) -> Self {
        Self {
            clock_rate,
            last_player_pos: None,
            last_dist_moved: 0.0,
            last_strain_time: 0.0,
            strain: StrainState::new(section_len),
        }
    }
}

impl StrainDecaySkill for Movement {
    const SKILL_MULTIPLIER: f64 = 850.0;
    const STRAIN_DECAY_BASE: f64 = 0.2;
    const DECAY_WEIGHT: f64 = 0.94;

    fn strain_state(&self) -> &StrainState {
        &self.strain
    }

    fn strain_state_mut(&mut self) -> &mut StrainState {
        &mut self.strain
    }

    fn into_strain_state(self) -> StrainState {
        self.strain
    }

    fn strain_value_of(&mut self, curr: &CatchDifficultyObject<'_>) -> f64 {
        let last_player_pos = self.last_player_pos.unwrap_or(curr.last_normalized_pos);

        let term = Self::NORMALIZED_HITOBJECT_RADIUS - Self::ABSOLUTE_PLAYER_POSITIONING_ERROR;
        let player_pos =
            last_player_pos.clamp(curr.normalized_pos - term, curr.normalized_pos + term);

        let dist_moved = player_pos - last_player_pos;

        let weighted_strain_time = curr.strain_time + 13.0 + (3.0 / self.clock_rate);

        let mut dist_addition = f64::from(dist_moved.abs()).powf(1.3) / 510.0;
        let sqrt_strain = weighted_strain_time.sqrt();

        if dist_moved.abs() > 0.1 {
            if self.last_dist_moved.abs() > 0.1
                && dist_moved.signum() != self.last_dist_moved.signum()
            {
                let bonus_factor = f64::from(dist_moved.abs().min(50.0) / 50.0);
                let anti_flow_factor =
                    f64::from(self.last_dist_moved.abs().min(70.0) / 70.0).max(0.38);

                dist_addition += Self::DIRECTION_CHANGE_BONUS
                    / (self.last_strain_time + 16.0).sqrt()
                    * bonus_factor
                    * anti_flow_factor
                    * (1.0 - (weighted_strain_time / 1000.0).powf(3.0)).max(0.0);
            }

            dist_addition += 12.5
                * f64::from(dist_moved.abs().min(Self::NORMALIZED_HITOBJECT_RADIUS * 2.0))
                / f64::from(Self::NORMALIZED_HITOBJECT_RADIUS * 6.0)
                / sqrt_strain;
        }

        self.last_player_pos = Some(player_pos);
        self.last_dist_moved = dist_moved;
        self.last_strain_time = curr.strain_time;

        dist_addition / weighted_strain_time
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        catch::difficulty::object::CatchDifficultyObjects, model::hit_object::HitObject,
    };

    use super::*;

    const HALF_CATCHER_WIDTH: f32 = 41.0;

    fn movement_after(hit_objects: &[HitObject], clock_rate: f64) -> Movement {
        let mut movement = Movement::new(clock_rate, 750.0);

        for curr in CatchDifficultyObjects::new(hit_objects, clock_rate, HALF_CATCHER_WIDTH) {
            movement.process(&curr);
        }

        movement
    }

    fn zigzag(n: usize, spacing: f64) -> Vec<HitObject> {
        (0..n)
            .map(|i| {
                let x = if i % 2 == 0 { 32.0 } else { 480.0 };

                HitObject::fruit(x, i as f64 * spacing)
            })
            .collect()
    }

    #[test]
    fn standing_still_has_no_strain() {
        let hit_objects: Vec<_> = (0..20)
            .map(|i| HitObject::fruit(256.0, f64::from(i) * 100.0))
            .collect();

        let movement = movement_after(&hit_objects, 1.0);

        assert!(movement.strain_state().current_strain().abs() < f64::EPSILON);
        assert!(movement.difficulty_value().abs() < f64::EPSILON);
    }

    #[test]
    fn small_offsets_within_catcher_are_free() {
        let hit_objects = vec![
            HitObject::fruit(256.0, 0.0),
            HitObject::fruit(266.0, 200.0),
            HitObject::fruit(256.0, 400.0),
        ];

        assert!(movement_after(&hit_objects, 1.0).difficulty_value().abs() < f64::EPSILON);
    }

    #[test]
    fn faster_patterns_are_harder() {
        let values: Vec<_> = [600.0, 400.0, 250.0, 150.0, 80.0]
            .into_iter()
            .map(|spacing| movement_after(&zigzag(32, spacing), 1.0).difficulty_value())
            .collect();

        assert!(values[0] > 0.0);
        assert!(values.windows(2).all(|w| w[0] < w[1]), "{values:?}");
    }

    #[test]
    fn direction_changes_add_strain() {
        let straight = [
            HitObject::fruit(32.0, 0.0),
            HitObject::fruit(212.0, 200.0),
            HitObject::fruit(392.0, 400.0),
        ];

        // Same first movement, shorter second movement but reversed
        let back_and_forth = [
            HitObject::fruit(212.0, 0.0),
            HitObject::fruit(392.0, 200.0),
            HitObject::fruit(212.0, 400.0),
        ];

        let straight = movement_after(&straight, 1.0).difficulty_value();
        let back_and_forth = movement_after(&back_and_forth, 1.0).difficulty_value();

        assert!(back_and_forth > straight, "{back_and_forth} <= {straight}");
    }

    #[test]
    fn strain_peaks_cover_all_sections() {
        let movement = movement_after(&zigzag(16, 200.0), 1.0);

        // Objects span 200ms to 3000ms
        assert_eq!(movement.into_current_strain_peaks().len(), 4);
    }
}
