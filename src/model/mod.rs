/// Beatmap related types.
pub mod beatmap;

/// Hitobject related types.
pub mod hit_object;

/// Gamemode related types.
pub mod mode;

/// Gamemods related types.
pub mod mods;
