/// Dimensions of the catcher.
pub struct Catcher;

const AREA_CATCHER_SIZE: f32 = 106.75;

impl Catcher {
    /// Fraction of the catcher's width that can actually catch objects.
    pub const ALLOWED_CATCH_RANGE: f32 = 0.8;

    /// Width of the area in which the catcher catches objects, based on the
    /// circle size.
    pub fn calculate_catch_width(cs: f32) -> f32 {
        Self::calculate_catch_width_by_scale(Self::calculate_scale(cs))
    }

    /// Half the catch width which is used to normalize horizontal distances.
    pub fn half_catcher_width(cs: f32) -> f32 {
        Self::calculate_catch_width(cs) * 0.5
    }

    fn calculate_catch_width_by_scale(scale: f32) -> f32 {
        AREA_CATCHER_SIZE * scale.abs() * Self::ALLOWED_CATCH_RANGE
    }

    fn calculate_scale(cs: f32) -> f32 {
        1.0 - 0.7 * (cs - 5.0) / 5.0
    }
}
