pub mod mods;
pub mod strains_vec;
