use std::fmt::{Display, Formatter, Result as FmtResult};

/// The ruleset a [`Beatmap`] is meant to be played in.
///
/// [`Beatmap`]: crate::model::beatmap::Beatmap
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameMode {
    Osu,
    Taiko,
    #[default]
    Catch,
    Mania,
}

impl GameMode {
    /// The ruleset's id as used in `.osu` files and the osu!api.
    pub const fn id(self) -> u8 {
        match self {
            Self::Osu => 0,
            Self::Taiko => 1,
            Self::Catch => 2,
            Self::Mania => 3,
        }
    }
}

impl From<u8> for GameMode {
    fn from(id: u8) -> Self {
        match id {
            1 => Self::Taiko,
            2 => Self::Catch,
            3 => Self::Mania,
            _ => Self::Osu,
        }
    }
}

impl Display for GameMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Osu => "osu!standard",
            Self::Taiko => "osu!taiko",
            Self::Catch => "osu!catch",
            Self::Mania => "osu!mania",
        };

        f.write_str(name)
    }
}
