use crate::{catch::difficulty::object::CatchDifficultyObject, util::strains_vec::StrainsVec};

/// Strain of a skill over time, recorded as the highest value per section.
#[derive(Clone, Debug, PartialEq)]
pub struct StrainState {
    section_len: f64,
    current_strain: f64,
    current_section_peak: f64,
    current_section_end: Option<f64>,
    prev_start_time: Option<f64>,
    strain_peaks: StrainsVec,
}

impl StrainState {
    pub fn new(section_len: f64) -> Self {
        Self {
            section_len,
            current_strain: 0.0,
            current_section_peak: 0.0,
            current_section_end: None,
            prev_start_time: None,
            strain_peaks: StrainsVec::with_capacity(256),
        }
    }

    pub const fn current_strain(&self) -> f64 {
        self.current_strain
    }

    /// All saved section peaks plus the peak of the currently open section.
    pub fn into_current_strain_peaks(self) -> StrainsVec {
        let mut strain_peaks = self.strain_peaks;
        strain_peaks.push(self.current_section_peak);

        strain_peaks
    }
}

/// A skill whose strain decays exponentially between objects.
///
/// Implementors only provide the strain of a single object; sectioning and
/// decay are handled by the provided methods.
pub trait StrainDecaySkill: Sized {
    const SKILL_MULTIPLIER: f64;
    const STRAIN_DECAY_BASE: f64;
    const DECAY_WEIGHT: f64 = 0.9;

    fn strain_state(&self) -> &StrainState;

    fn strain_state_mut(&mut self) -> &mut StrainState;

    fn into_strain_state(self) -> StrainState;

    fn strain_value_of(&mut self, curr: &CatchDifficultyObject<'_>) -> f64;

    fn strain_decay(ms: f64) -> f64 {
        strain_decay(ms, Self::STRAIN_DECAY_BASE)
    }

    fn process(&mut self, curr: &CatchDifficultyObject<'_>) {
        let state = self.strain_state_mut();
        let section_len = state.section_len;

        // * The first object doesn't generate a strain, so we begin with an incremented section end
        let mut section_end = *state
            .current_section_end
            .get_or_insert_with(|| (curr.start_time / section_len).ceil() * section_len);

        while curr.start_time > section_end {
            state.strain_peaks.push(state.current_section_peak);

            let prev_start_time = state.prev_start_time.unwrap_or(0.0);
            state.current_section_peak =
                state.current_strain * Self::strain_decay(section_end - prev_start_time);

            section_end += section_len;
        }

        state.current_section_end = Some(section_end);

        let strain_value = self.strain_value_of(curr);

        let state = self.strain_state_mut();
        state.current_strain *= Self::strain_decay(curr.delta_time);
        state.current_strain += strain_value * Self::SKILL_MULTIPLIER;
        state.current_section_peak = state.current_section_peak.max(state.current_strain);
        state.prev_start_time = Some(curr.start_time);
    }

    fn into_current_strain_peaks(self) -> StrainsVec {
        self.into_strain_state().into_current_strain_peaks()
    }

    fn difficulty_value(self) -> f64 {
        difficulty_value(self.into_current_strain_peaks(), Self::DECAY_WEIGHT)
    }
}

/// Weighted sum of the section peaks, sorted from highest to lowest, so that
/// sustained difficulty outweighs short spikes.
pub fn difficulty_value(current_strain_peaks: StrainsVec, decay_weight: f64) -> f64 {
    let mut difficulty = 0.0;
    let mut weight = 1.0;

    // * Sections with 0 strain are excluded to avoid worst-case time complexity of the following sort (e.g. /b/2351871).
    // * These sections will not contribute to the difficulty.
    let mut peaks = current_strain_peaks;

    for strain in peaks.sorted_non_zero_iter() {
        difficulty += strain * weight;
        weight *= decay_weight;
    }

    difficulty
}

pub fn strain_decay(ms: f64, strain_decay_base: f64) -> f64 {
    f64::powf(strain_decay_base, ms / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peaks_are_weighted_by_rank() {
        let mut peaks = StrainsVec::with_capacity(4);

        for peak in [1.0, 0.0, 4.0, 2.0] {
            peaks.push(peak);
        }

        let value = difficulty_value(peaks, 0.5);

        assert!((value - (4.0 + 2.0 * 0.5 + 1.0 * 0.25)).abs() < 1e-10);
    }

    #[test]
    fn no_peaks_no_difficulty() {
        let state = StrainState::new(750.0);

        assert!(difficulty_value(state.into_current_strain_peaks(), 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn decay_halves_every_second() {
        assert!((strain_decay(1000.0, 0.5) - 0.5).abs() < f64::EPSILON);
        assert!((strain_decay(0.0, 0.5) - 1.0).abs() < f64::EPSILON);
    }
}
