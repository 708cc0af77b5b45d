use crate::model::{
    hit_object::{HitObject, HitObjectKind, NestedObjectKind},
    mods::GameMods,
};

/// The result of a difficulty calculation on an osu!catch map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatchDifficultyAttributes {
    /// The final star rating
    pub stars: f64,
    /// The approach rate.
    pub ar: f64,
    /// The amount of fruits, including the fruits of juice streams.
    pub n_fruits: u32,
    /// The amount of droplets.
    pub n_droplets: u32,
    /// The amount of tiny droplets.
    pub n_tiny_droplets: u32,
    /// The clock rate that was used for the calculation.
    pub clock_rate: f64,
    /// The mods that were used for the calculation.
    pub mods: GameMods,
}

impl CatchDifficultyAttributes {
    /// Return the maximum combo.
    ///
    /// Tiny droplets and banana showers don't give combo.
    pub const fn max_combo(&self) -> u32 {
        self.n_fruits + self.n_droplets
    }

    pub(crate) const fn set_object_count(&mut self, count: &ObjectCount) {
        self.n_fruits = count.fruits;
        self.n_droplets = count.droplets;
        self.n_tiny_droplets = count.tiny_droplets;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectCount {
    pub fruits: u32,
    pub droplets: u32,
    pub tiny_droplets: u32,
}

impl ObjectCount {
    pub fn new(hit_objects: &[HitObject]) -> Self {
        let mut count = Self::default();

        for h in hit_objects {
            match h.kind {
                HitObjectKind::Fruit => count.fruits += 1,
                HitObjectKind::JuiceStream(ref stream) => {
                    for nested in stream.nested_objects.iter() {
                        match nested.kind {
                            NestedObjectKind::Fruit => count.fruits += 1,
                            NestedObjectKind::Droplet => count.droplets += 1,
                            NestedObjectKind::TinyDroplet => count.tiny_droplets += 1,
                        }
                    }
                }
                HitObjectKind::BananaShower(_) => {}
            }
        }

        count
    }
}
