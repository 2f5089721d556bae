//! Key frames
//!
//! A [`KeyFrame`] is a point in time carrying target values for one or more
//! properties. A [`KeyframeTrack`] is the time-ordered view of a single
//! property, which is what actually gets sampled during playback.

use smallvec::SmallVec;

use crate::easing::Easing;

/// A target value for one property at a key frame
#[derive(Clone, Debug, PartialEq)]
pub struct KeyValue<K> {
    /// Property being animated
    pub target: K,
    /// Value the property reaches at this key frame
    pub value: f32,
    /// Easing used on the segment that ends at this key frame
    pub easing: Easing,
}

/// A point in time with the values properties should reach there
#[derive(Clone, Debug, PartialEq)]
pub struct KeyFrame<K> {
    /// Time from timeline start in milliseconds
    pub time_ms: u32,
    pub values: SmallVec<[KeyValue<K>; 4]>,
}

impl<K> KeyFrame<K> {
    /// Create an empty key frame at the given time
    pub fn at(time_ms: u32) -> Self {
        Self {
            time_ms,
            values: SmallVec::new(),
        }
    }

    /// Builder: reach `value` with linear interpolation
    pub fn value(self, target: K, value: f32) -> Self {
        self.eased(target, value, Easing::Linear)
    }

    /// Builder: reach `value` using `easing`
    pub fn eased(mut self, target: K, value: f32, easing: Easing) -> Self {
        self.values.push(KeyValue {
            target,
            value,
            easing,
        });
        self
    }
}

/// A single point on a track
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackPoint {
    pub time_ms: u32,
    pub value: f32,
    pub easing: Easing,
}

/// Time-ordered key values of a single property
#[derive(Clone, Debug, Default)]
pub struct KeyframeTrack {
    points: SmallVec<[TrackPoint; 4]>,
}

impl KeyframeTrack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point, keeping the track ordered by time.
    ///
    /// Points sharing a time keep their insertion order.
    pub fn insert(&mut self, time_ms: u32, value: f32, easing: Easing) {
        let idx = self.points.partition_point(|p| p.time_ms <= time_ms);
        self.points.insert(
            idx,
            TrackPoint {
                time_ms,
                value,
                easing,
            },
        );
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn point(mut self, time_ms: u32, value: f32, easing: Easing) -> Self {
        self.insert(time_ms, value, easing);
        self
    }

    /// Sample the track at `time_ms`
    ///
    /// Holds the first value before the first point and the last value after
    /// the last point. An empty track samples as `0.0`.
    pub fn sample(&self, time_ms: f32) -> f32 {
        let Some(first) = self.points.first() else {
            return 0.0;
        };
        if time_ms <= first.time_ms as f32 {
            return first.value;
        }

        for pair in self.points.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            if time_ms > to.time_ms as f32 {
                continue;
            }
            let span = (to.time_ms - from.time_ms) as f32;
            if span <= 0.0 {
                return to.value;
            }
            let local = (time_ms - from.time_ms as f32) / span;
            return from.value + (to.value - from.value) * to.easing.apply(local);
        }

        self.points.last().map_or(first.value, |p| p.value)
    }

    /// Time of the first point, if any
    pub fn start_ms(&self) -> Option<u32> {
        self.points.first().map(|p| p.time_ms)
    }

    /// Time of the last point (0 for an empty track)
    pub fn duration_ms(&self) -> u32 {
        self.points.last().map_or(0, |p| p.time_ms)
    }

    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
