/// A parsed osu!catch hitobject.
///
/// Positions are in osu!pixels on the 512px wide playfield, times are in
/// milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    pub x: f32,
    pub start_time: f64,
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Create a new fruit.
    pub const fn fruit(x: f32, start_time: f64) -> Self {
        Self {
            x,
            start_time,
            kind: HitObjectKind::Fruit,
        }
    }

    /// Create a new juice stream.
    ///
    /// The nested objects are expected to be sorted by their start time.
    pub const fn juice_stream(x: f32, start_time: f64, nested_objects: Vec<NestedObject>) -> Self {
        Self {
            x,
            start_time,
            kind: HitObjectKind::JuiceStream(JuiceStream { nested_objects }),
        }
    }

    /// Create a new banana shower.
    pub const fn banana_shower(start_time: f64, end_time: f64) -> Self {
        Self {
            x: 256.0,
            start_time,
            kind: HitObjectKind::BananaShower(BananaShower { end_time }),
        }
    }
}

/// Additional data for a [`HitObject`].
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    Fruit,
    JuiceStream(JuiceStream),
    BananaShower(BananaShower),
}

/// A path that releases fruits, droplets, and tiny droplets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JuiceStream {
    pub nested_objects: Vec<NestedObject>,
}

impl JuiceStream {
    /// Iterator over all nested objects that count towards the combo, i.e.
    /// everything but tiny droplets.
    pub fn palpable_objects(&self) -> impl Iterator<Item = &NestedObject> {
        self.nested_objects.iter().filter(|nested| !nested.is_tiny())
    }
}

/// A timed object released by a [`JuiceStream`].
#[derive(Clone, Debug, PartialEq)]
pub struct NestedObject {
    pub x: f32,
    pub start_time: f64,
    pub kind: NestedObjectKind,
}

impl NestedObject {
    /// Create a nested fruit, i.e. a juice stream's head, repeat, or tail.
    pub const fn fruit(x: f32, start_time: f64) -> Self {
        Self {
            x,
            start_time,
            kind: NestedObjectKind::Fruit,
        }
    }

    /// Create a droplet.
    pub const fn droplet(x: f32, start_time: f64) -> Self {
        Self {
            x,
            start_time,
            kind: NestedObjectKind::Droplet,
        }
    }

    /// Create a tiny droplet.
    pub const fn tiny_droplet(x: f32, start_time: f64) -> Self {
        Self {
            x,
            start_time,
            kind: NestedObjectKind::TinyDroplet,
        }
    }

    /// Whether the object is a tiny droplet.
    pub const fn is_tiny(&self) -> bool {
        matches!(self.kind, NestedObjectKind::TinyDroplet)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NestedObjectKind {
    Fruit,
    Droplet,
    TinyDroplet,
}

/// A shower of bananas. Irrelevant for the star rating.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BananaShower {
    pub end_time: f64,
}
