use rosu_catch::{
    model::hit_object::{HitObject, NestedObject},
    Beatmap,
};

// False positive
#[allow(unused)]
pub use self::mods::*;

/// Bit values for mods
mod mods {
    #![allow(unused)]

    pub const NM: u32 = 0;
    pub const EZ: u32 = 1 << 1;
    pub const HD: u32 = 1 << 3;
    pub const HR: u32 = 1 << 4;
    pub const DT: u32 = 1 << 6;
    pub const HT: u32 = 1 << 8;
    pub const NC: u32 = 1 << 9;
}

#[track_caller]
#[allow(unused)]
pub fn assert_eq_float<F: Float>(a: F, b: F) {
    assert!((a - b).abs() < F::EPSILON, "{a} != {b}");
}

#[track_caller]
#[allow(unused)]
pub fn assert_close(a: f64, b: f64, tolerance: f64) {
    assert!((a - b).abs() < tolerance, "{a} != {b} (tolerance {tolerance})");
}

/// Trait to provide flexibility in the `assert_eq_float` function.
#[allow(unused)]
pub trait Float:
    Copy + std::fmt::Display + std::ops::Sub<Output = Self> + PartialOrd + Sized
{
    const EPSILON: Self;

    fn abs(self) -> Self;
}

macro_rules! impl_float {
    ( $( $ty:ty )* ) => {
        $(
            impl Float for $ty {
                const EPSILON: Self = Self::EPSILON;

                fn abs(self) -> Self {
                    self.abs()
                }
            }
        )*
    }
}

impl_float!(f32 f64);

/// An osu!catch map with default settings.
#[allow(unused)]
pub fn map(hit_objects: Vec<HitObject>) -> Beatmap {
    Beatmap {
        hit_objects,
        ..Beatmap::default()
    }
}

/// Fruits alternating between both edges of the playfield.
#[allow(unused)]
pub fn zigzag(n: usize, spacing: f64) -> Beatmap {
    let hit_objects = (0..n)
        .map(|i| {
            let x = if i % 2 == 0 { 32.0 } else { 480.0 };

            HitObject::fruit(x, i as f64 * spacing)
        })
        .collect();

    map(hit_objects)
}

/// Fruits followed by a juice stream and a banana shower.
#[allow(unused)]
pub fn mixed() -> Beatmap {
    map(vec![
        HitObject::fruit(64.0, 500.0),
        HitObject::fruit(448.0, 800.0),
        HitObject::juice_stream(
            96.0,
            1100.0,
            vec![
                NestedObject::fruit(96.0, 1100.0),
                NestedObject::tiny_droplet(128.0, 1150.0),
                NestedObject::droplet(160.0, 1200.0),
                NestedObject::tiny_droplet(192.0, 1250.0),
                NestedObject::droplet(224.0, 1300.0),
                NestedObject::tiny_droplet(256.0, 1350.0),
                NestedObject::fruit(288.0, 1400.0),
            ],
        ),
        HitObject::fruit(480.0, 1700.0),
        HitObject::banana_shower(2000.0, 3000.0),
        HitObject::fruit(32.0, 3300.0),
        HitObject::fruit(400.0, 3500.0),
    ])
}
