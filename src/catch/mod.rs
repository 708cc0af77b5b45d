pub use self::{attributes::CatchDifficultyAttributes, catcher::Catcher, strains::CatchStrains};

mod attributes;
mod catcher;
pub(crate) mod strains;

/// Difficulty objects and skills of the osu!catch star rating.
pub mod difficulty;
