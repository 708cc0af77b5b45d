use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
};

use crate::model::mode::GameMode;

/// `Result<_, DifficultyError>`
pub type DifficultyResult<T> = Result<T, DifficultyError>;

/// Anything that prevents a difficulty calculation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DifficultyError {
    /// The [`Beatmap`](crate::Beatmap) is not an osu!catch map.
    IncompatibleMode(GameMode),
    /// The clock rate of the mods or the custom clock rate is not a positive
    /// finite number.
    InvalidClockRate(f64),
    /// The section length of the [`DifficultyConfig`] is not a positive finite
    /// number.
    ///
    /// [`DifficultyConfig`]: crate::DifficultyConfig
    InvalidSectionLength(f64),
}

impl Display for DifficultyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::IncompatibleMode(mode) => {
                write!(f, "cannot calculate osu!catch difficulty on {mode} map")
            }
            Self::InvalidClockRate(clock_rate) => {
                write!(f, "clock rate must be positive and finite, got {clock_rate}")
            }
            Self::InvalidSectionLength(section_len) => {
                write!(f, "section length must be positive and finite, got {section_len}")
            }
        }
    }
}

impl StdError for DifficultyError {}
