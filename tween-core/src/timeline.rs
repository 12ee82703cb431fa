/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Composite of tweens that always run in the same direction.

use log::debug;

use crate::props::Props;
use crate::tween::Tween;

struct Track<T> {
    target: T,
    tween: Tween,
}

/// A group of tweens, each bound to a target of type `T`, driven as one
/// animation: [`Timeline::play`] and [`Timeline::reverse`] always apply to
/// every track.
pub struct Timeline<T> {
    tracks: Vec<Track<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    pub fn with_track(mut self, target: T, tween: Tween) -> Self {
        self.push(target, tween);
        self
    }

    pub fn push(&mut self, target: T, tween: Tween) {
        self.tracks.push(Track { target, tween });
    }

    pub fn play(&mut self) {
        debug!("timeline play ({} tracks)", self.tracks.len());
        self.tracks.iter_mut().for_each(|t| t.tween.play());
    }

    pub fn reverse(&mut self) {
        debug!("timeline reverse ({} tracks)", self.tracks.len());
        self.tracks.iter_mut().for_each(|t| t.tween.reverse());
    }

    pub fn pause(&mut self) {
        self.tracks.iter_mut().for_each(|t| t.tween.pause());
    }

    /// Advance every track by `dt` seconds. Returns `true` if any rendered
    /// value changed.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.tracks
            .iter_mut()
            .fold(false, |changed, t| t.tween.tick(dt) || changed)
    }

    pub fn is_active(&self) -> bool {
        self.tracks.iter().any(|t| t.tween.is_active())
    }

    /// Duration of the longest track, in seconds.
    pub fn duration(&self) -> f64 {
        self.tracks
            .iter()
            .map(|t| t.tween.duration())
            .fold(0.0, f64::max)
    }

    /// Current value of every track, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = (&T, Props)> + '_ {
        self.tracks.iter().map(|t| (&t.target, t.tween.value()))
    }

    pub fn tweens(&self) -> impl Iterator<Item = &Tween> + '_ {
        self.tracks.iter().map(|t| &t.tween)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
