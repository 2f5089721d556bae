//! Timeline playback over key frames
//!
//! A timeline owns a set of [`KeyFrame`]s that may target any number of
//! properties. On [`Timeline::play`] the frames are split into one
//! [`KeyframeTrack`] per property; a property whose first key frame comes
//! after 0 ms starts from the value it had when playback began.

use std::fmt::Debug;

use slotmap::{new_key_type, SlotMap};
use tracing::{debug, trace};

use crate::easing::Easing;
use crate::keyframe::{KeyFrame, KeyframeTrack};

new_key_type! {
    pub struct TrackId;
}

/// A property track resolved at play time
struct TimelineTrack<K> {
    target: K,
    track: KeyframeTrack,
}

/// Plays key frames for many properties on a shared clock
pub struct Timeline<K> {
    frames: Vec<KeyFrame<K>>,
    tracks: SlotMap<TrackId, TimelineTrack<K>>,
    current_time: f32,
    duration_ms: u32,
    playing: bool,
}

impl<K: Copy + PartialEq + Debug> Timeline<K> {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            tracks: SlotMap::with_key(),
            current_time: 0.0,
            duration_ms: 0,
            playing: false,
        }
    }

    /// Replace all key frames. Stops playback.
    pub fn set_key_frames(&mut self, frames: impl IntoIterator<Item = KeyFrame<K>>) {
        self.frames = frames.into_iter().collect();
        // Stable, so values at the same time keep their declared order
        self.frames.sort_by_key(|f| f.time_ms);
        self.duration_ms = self.frames.last().map_or(0, |f| f.time_ms);
        self.tracks = SlotMap::with_key();
        self.current_time = 0.0;
        self.playing = false;
    }

    /// Start playback from time 0
    ///
    /// `initial` supplies the current value of properties that have no key
    /// frame at 0 ms.
    pub fn play(&mut self, initial: impl Fn(K) -> f32) {
        let mut tracks: SlotMap<TrackId, TimelineTrack<K>> = SlotMap::with_key();

        for frame in &self.frames {
            for kv in &frame.values {
                let id = match find_track(&tracks, kv.target) {
                    Some(id) => id,
                    None => tracks.insert(TimelineTrack {
                        target: kv.target,
                        track: KeyframeTrack::new(),
                    }),
                };
                tracks[id].track.insert(frame.time_ms, kv.value, kv.easing);
            }
        }

        for entry in tracks.values_mut() {
            if entry.track.start_ms().is_some_and(|start| start > 0) {
                entry.track.insert(0, initial(entry.target), Easing::Linear);
            }
        }

        debug!(
            tracks = tracks.len(),
            duration_ms = self.duration_ms,
            "timeline started"
        );

        self.tracks = tracks;
        self.current_time = 0.0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advance the timeline by `dt_ms` milliseconds
    ///
    /// Returns `true` on the tick that completes playback. Negative or
    /// non-finite steps are dropped without moving the clock.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.playing {
            return false;
        }
        if !dt_ms.is_finite() || dt_ms < 0.0 {
            debug!(dt_ms, "ignoring invalid timeline step");
            return false;
        }

        self.current_time += dt_ms;
        trace!(time_ms = self.current_time, "timeline tick");

        if self.current_time >= self.duration_ms as f32 {
            self.current_time = self.duration_ms as f32;
            self.playing = false;
            debug!(duration_ms = self.duration_ms, "timeline finished");
            return true;
        }

        false
    }

    /// Current value of a property, if the timeline animates it
    pub fn value(&self, target: K) -> Option<f32> {
        let id = find_track(&self.tracks, target)?;
        Some(self.tracks[id].track.sample(self.current_time))
    }

    /// Current values of every animated property, in first-appearance order
    pub fn values(&self) -> impl Iterator<Item = (K, f32)> + '_ {
        self.tracks
            .values()
            .map(|entry| (entry.target, entry.track.sample(self.current_time)))
    }

    pub fn current_time_ms(&self) -> f32 {
        self.current_time
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Playback progress from 0.0 to 1.0
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return if self.playing { 0.0 } else { 1.0 };
        }
        (self.current_time / self.duration_ms as f32).clamp(0.0, 1.0)
    }
}

impl<K: Copy + PartialEq + Debug> Default for Timeline<K> {
    fn default() -> Self {
        Self::new()
    }
}

fn find_track<K: PartialEq>(tracks: &SlotMap<TrackId, TimelineTrack<K>>, target: K) -> Option<TrackId> {
    tracks
        .iter()
        .find(|(_, entry)| entry.target == target)
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Prop {
        Height,
        Offset,
    }

    fn frames() -> Vec<KeyFrame<Prop>> {
        vec![
            KeyFrame::at(0).value(Prop::Height, 20.0),
            KeyFrame::at(500).value(Prop::Height, 50.0).value(Prop::Offset, -30.0),
            KeyFrame::at(1000).value(Prop::Height, 20.0),
        ]
    }

    #[test]
    fn test_implicit_start_value() {
        let mut timeline = Timeline::new();
        timeline.set_key_frames(frames());
        timeline.play(|prop| match prop {
            Prop::Height => 999.0,
            Prop::Offset => 10.0,
        });

        // Height has a key frame at 0 so the supplied value is ignored
        assert_eq!(timeline.value(Prop::Height), Some(20.0));
        assert_eq!(timeline.value(Prop::Offset), Some(10.0));

        timeline.tick(250.0);
        assert!((timeline.value(Prop::Height).unwrap() - 35.0).abs() < 1e-4);
        assert!((timeline.value(Prop::Offset).unwrap() + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_holds_after_last_key_frame() {
        let mut timeline = Timeline::new();
        timeline.set_key_frames(frames());
        timeline.play(|_| 0.0);

        timeline.tick(750.0);
        assert_eq!(timeline.value(Prop::Offset), Some(-30.0));
        assert!((timeline.value(Prop::Height).unwrap() - 35.0).abs() < 1e-4);
    }

    #[test]
    fn test_finish_fires_once() {
        let mut timeline = Timeline::new();
        timeline.set_key_frames(frames());
        timeline.play(|_| 0.0);

        let mut finished = 0;
        for _ in 0..100 {
            if timeline.tick(16.0) {
                finished += 1;
            }
        }

        assert_eq!(finished, 1);
        assert!(!timeline.is_playing());
        assert_eq!(timeline.current_time_ms(), 1000.0);
        assert_eq!(timeline.progress(), 1.0);
        assert_eq!(timeline.value(Prop::Height), Some(20.0));
    }

    #[test]
    fn test_frames_sorted_by_time() {
        let mut timeline = Timeline::new();
        let mut shuffled = frames();
        shuffled.reverse();
        timeline.set_key_frames(shuffled);

        assert_eq!(timeline.duration_ms(), 1000);

        timeline.play(|_| 0.0);
        timeline.tick(250.0);
        assert!((timeline.value(Prop::Height).unwrap() - 35.0).abs() < 1e-4);
    }

    #[test]
    fn test_replacing_frames_stops_playback() {
        let mut timeline = Timeline::new();
        timeline.set_key_frames(frames());
        timeline.play(|_| 0.0);
        timeline.tick(100.0);
        assert!(timeline.is_playing());

        timeline.set_key_frames(vec![KeyFrame::at(200).value(Prop::Offset, 1.0)]);
        assert!(!timeline.is_playing());
        assert!(!timeline.tick(500.0));
        assert_eq!(timeline.value(Prop::Offset), None);
    }

    #[test]
    fn test_empty_timeline_finishes_immediately() {
        let mut timeline: Timeline<Prop> = Timeline::new();
        timeline.play(|_| 0.0);
        assert!(timeline.tick(16.0));
        assert_eq!(timeline.values().count(), 0);
    }

    #[test]
    fn test_values_in_first_appearance_order() {
        let mut timeline = Timeline::new();
        timeline.set_key_frames(frames());
        timeline.play(|_| 0.0);

        let targets: Vec<Prop> = timeline.values().map(|(prop, _)| prop).collect();
        assert_eq!(targets, vec![Prop::Height, Prop::Offset]);
    }

    #[test]
    fn test_invalid_steps_do_not_stall_playback() {
        let mut timeline = Timeline::new();
        timeline.set_key_frames(frames());
        timeline.play(|_| 0.0);
        timeline.tick(100.0);

        for dt in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -50.0] {
            assert!(!timeline.tick(dt));
            assert_eq!(timeline.current_time_ms(), 100.0);
            assert!(timeline.is_playing());
        }

        assert!(timeline.tick(900.0));
        assert!(!timeline.is_playing());
        assert_eq!(timeline.value(Prop::Height), Some(20.0));
    }
}
