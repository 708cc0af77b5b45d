use std::{iter::FusedIterator, slice::Iter};

use crate::model::hit_object::{HitObject, HitObjectKind, NestedObject};

/// Timing and position of a hitobject relative to the previous relevant
/// hitobject.
#[derive(Clone, Debug, PartialEq)]
pub struct CatchDifficultyObject<'a> {
    pub idx: usize,
    pub base: PalpableRef<'a>,
    pub last_object: &'a HitObject,
    pub start_time: f64,
    pub delta_time: f64,
    pub normalized_pos: f32,
    pub last_normalized_pos: f32,
    pub strain_time: f64,
}

impl<'a> CatchDifficultyObject<'a> {
    pub const NORMALIZED_HITOBJECT_RADIUS: f32 = 41.0;
    pub const MIN_STRAIN_TIME: f64 = 40.0;

    pub fn new(
        base: PalpableRef<'a>,
        last_object: &'a HitObject,
        clock_rate: f64,
        scaling_factor: f32,
        idx: usize,
    ) -> Self {
        let normalized_pos = base.x() * scaling_factor;
        let last_normalized_pos = last_object.x * scaling_factor;

        let start_time = base.start_time() / clock_rate;
        let delta_time = (base.start_time() - last_object.start_time) / clock_rate;
        let strain_time = delta_time.max(Self::MIN_STRAIN_TIME);

        Self {
            idx,
            base,
            last_object,
            start_time,
            delta_time,
            normalized_pos,
            last_normalized_pos,
            strain_time,
        }
    }

    /// Normalized horizontal distance to the previous relevant hitobject.
    pub fn normalized_dist(&self) -> f32 {
        (self.normalized_pos - self.last_normalized_pos).abs()
    }
}

/// The object a [`CatchDifficultyObject`] originates from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PalpableRef<'a> {
    Fruit(&'a HitObject),
    Nested(&'a NestedObject),
}

impl PalpableRef<'_> {
    pub const fn x(&self) -> f32 {
        match self {
            Self::Fruit(h) => h.x,
            Self::Nested(nested) => nested.x,
        }
    }

    pub const fn start_time(&self) -> f64 {
        match self {
            Self::Fruit(h) => h.start_time,
            Self::Nested(nested) => nested.start_time,
        }
    }
}

/// Lazily creates [`CatchDifficultyObject`]s for a map's hitobjects.
///
/// Fruits and all non-tiny nested objects of juice streams produce an
/// object; banana showers and the very first hitobject don't. Nested objects
/// are measured against the hitobject preceding their juice stream.
pub struct CatchDifficultyObjects<'a> {
    hit_objects: Iter<'a, HitObject>,
    last_object: Option<&'a HitObject>,
    pending: Option<PendingNested<'a>>,
    clock_rate: f64,
    scaling_factor: f32,
    idx: usize,
}

struct PendingNested<'a> {
    nested_objects: Iter<'a, NestedObject>,
    last_object: &'a HitObject,
}

impl<'a> CatchDifficultyObjects<'a> {
    /// `half_catcher_width` determines the normalization of horizontal
    /// positions and `clock_rate` scales all times.
    pub fn new(hit_objects: &'a [HitObject], clock_rate: f64, half_catcher_width: f32) -> Self {
        Self {
            hit_objects: hit_objects.iter(),
            last_object: None,
            pending: None,
            clock_rate,
            scaling_factor: CatchDifficultyObject::NORMALIZED_HITOBJECT_RADIUS
                / half_catcher_width,
            idx: 0,
        }
    }

    fn create(&mut self, base: PalpableRef<'a>, last_object: &'a HitObject) -> CatchDifficultyObject<'a> {
        let idx = self.idx;
        self.idx += 1;

        CatchDifficultyObject::new(base, last_object, self.clock_rate, self.scaling_factor, idx)
    }
}

impl<'a> Iterator for CatchDifficultyObjects<'a> {
    type Item = CatchDifficultyObject<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pending) = self.pending.as_mut() {
                let last_object = pending.last_object;

                if let Some(nested) = pending.nested_objects.find(|nested| !nested.is_tiny()) {
                    return Some(self.create(PalpableRef::Nested(nested), last_object));
                }

                self.pending = None;
            }

            let hit_object = self.hit_objects.next()?;

            let Some(last_object) = self.last_object.replace(hit_object) else {
                continue;
            };

            match hit_object.kind {
                HitObjectKind::Fruit => {
                    return Some(self.create(PalpableRef::Fruit(hit_object), last_object));
                }
                HitObjectKind::JuiceStream(ref stream) => {
                    self.pending = Some(PendingNested {
                        nested_objects: stream.nested_objects.iter(),
                        last_object,
                    });
                }
                HitObjectKind::BananaShower(_) => {}
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self
            .pending
            .as_ref()
            .map_or(0, |pending| pending.nested_objects.len());

        // Juice streams make the upper bound unknown
        (0, (pending == 0 && self.hit_objects.len() == 0).then_some(0))
    }
}

impl FusedIterator for CatchDifficultyObjects<'_> {}
