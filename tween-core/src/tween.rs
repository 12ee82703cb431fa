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

//! A single paused-at-creation tween from a captured start state to a
//! target state.

use log::trace;
use serde::Deserialize;

use crate::color::Rgba;
use crate::ease::Ease;
use crate::error::{Result, TweenError};
use crate::props::Props;

/// Target description of a tween. Properties left unset keep the start
/// value of the element the tween is built against.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweenVars {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    /// Any notation accepted by [`Rgba::parse`].
    #[serde(default)]
    pub color: Option<String>,
    /// Duration in seconds.
    pub duration: f64,
    #[serde(default)]
    pub ease: Ease,
}

impl TweenVars {
    pub fn new(duration: f64) -> Self {
        Self {
            x: None,
            y: None,
            color: None,
            duration,
            ease: Ease::default(),
        }
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Interpolates [`Props`] over `duration` seconds.
///
/// The playhead moves forward after [`Tween::play`] and backward after
/// [`Tween::reverse`]; either call keeps the current position, so flipping
/// direction mid-flight retraces the same curve.
#[derive(Debug, Clone)]
pub struct Tween {
    start: Props,
    end: Props,
    duration: f64,
    ease: Ease,
    time: f64,
    reversed: bool,
    paused: bool,
}

impl Tween {
    /// Build a tween that is paused at time zero.
    pub fn new(start: Props, vars: &TweenVars) -> Result<Self> {
        if !vars.duration.is_finite() || vars.duration <= 0.0 {
            return Err(TweenError::InvalidDuration(vars.duration));
        }
        let color = match &vars.color {
            Some(color) => Rgba::parse(color)?,
            None => start.color,
        };
        let end = Props {
            x: vars.x.unwrap_or(start.x),
            y: vars.y.unwrap_or(start.y),
            color,
        };
        Ok(Self {
            start,
            end,
            duration: vars.duration,
            ease: vars.ease,
            time: 0.0,
            reversed: false,
            paused: true,
        })
    }

    /// Run towards the end state from the current playhead.
    pub fn play(&mut self) {
        self.reversed = false;
        self.paused = false;
        trace!("tween play at {:.3}s", self.time);
    }

    /// Run towards the start state from the current playhead.
    pub fn reverse(&mut self) {
        self.reversed = true;
        self.paused = false;
        trace!("tween reverse at {:.3}s", self.time);
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Advance the playhead by `dt` seconds in the current direction.
    /// Returns `true` when the rendered value changed.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.paused || !dt.is_finite() || dt <= 0.0 {
            return false;
        }
        let before = self.time;
        self.time = if self.reversed {
            (self.time - dt).max(0.0)
        } else {
            (self.time + dt).min(self.duration)
        };
        self.time != before
    }

    /// Whether further ticks can still move the playhead.
    pub fn is_active(&self) -> bool {
        if self.paused {
            return false;
        }
        if self.reversed {
            self.time > 0.0
        } else {
            self.time < self.duration
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.time / self.duration
    }

    pub fn end(&self) -> &Props {
        &self.end
    }

    /// Current interpolated properties.
    pub fn value(&self) -> Props {
        Props::lerp(&self.start, &self.end, self.ease.apply(self.progress()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Translation;

    fn start() -> Props {
        Props::new(Translation { x: 0.0, y: -24.0 }, Rgba::rgb(20, 20, 20))
    }

    fn raffle_vars() -> TweenVars {
        TweenVars::new(0.4).x(12.0).color("#ff8c42")
    }

    #[test]
    fn test_created_paused_at_zero() {
        let mut tween = Tween::new(start(), &raffle_vars()).unwrap();
        assert!(tween.is_paused());
        assert!(!tween.is_active());
        assert_eq!(tween.time(), 0.0);
        assert!(!tween.tick(0.1), "paused tween must not move");
        assert_eq!(tween.value(), start());
    }

    #[test]
    fn test_unset_properties_keep_start_values() {
        let tween = Tween::new(start(), &raffle_vars()).unwrap();
        assert_eq!(tween.end().x, 12.0);
        assert_eq!(tween.end().y, -24.0);
        assert_eq!(tween.end().color, Rgba::rgb(255, 140, 66));
    }

    #[test]
    fn test_play_reaches_end_within_duration() {
        let mut tween = Tween::new(start(), &raffle_vars()).unwrap();
        tween.play();
        for _ in 0..25 {
            tween.tick(1.0 / 60.0);
        }
        assert!(!tween.is_active());
        assert_eq!(tween.progress(), 1.0);
        let v = tween.value();
        assert!((v.x - 12.0).abs() < 1e-9);
        assert_eq!(v.color, Rgba::rgb(255, 140, 66));
        assert!(!tween.tick(1.0 / 60.0), "finished tween stays put");
    }

    #[test]
    fn test_reverse_mid_flight_returns_to_start() {
        let mut tween = Tween::new(start(), &raffle_vars()).unwrap();
        tween.play();
        tween.tick(0.1);
        let mid = tween.value();
        assert!(mid.x > 0.0 && mid.x < 12.0);

        tween.reverse();
        assert!(tween.is_active());
        assert!(tween.tick(0.05));
        assert!(tween.value().x < mid.x);
        tween.tick(1.0);
        assert_eq!(tween.time(), 0.0);
        assert_eq!(tween.value(), start());
        assert!(!tween.is_active());
    }

    #[test]
    fn test_pause_holds_playhead() {
        let mut tween = Tween::new(start(), &raffle_vars()).unwrap();
        tween.play();
        tween.tick(0.1);
        tween.pause();
        assert!(!tween.is_active());
        assert!(!tween.tick(0.1));
        assert_eq!(tween.time(), 0.1);
        tween.play();
        assert!(tween.tick(0.1));
        assert!((tween.time() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_reverse_from_rest_is_noop() {
        let mut tween = Tween::new(start(), &raffle_vars()).unwrap();
        tween.reverse();
        assert!(!tween.is_active());
        assert!(!tween.tick(0.2));
    }

    #[test]
    fn test_rejects_bad_inputs() {
        assert_eq!(
            Tween::new(start(), &TweenVars::new(0.0)).unwrap_err(),
            TweenError::InvalidDuration(0.0)
        );
        assert!(matches!(
            Tween::new(start(), &TweenVars::new(f64::NAN)),
            Err(TweenError::InvalidDuration(_))
        ));
        assert!(matches!(
            Tween::new(start(), &TweenVars::new(0.3).color("orange-ish")),
            Err(TweenError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_ignores_non_positive_dt() {
        let mut tween = Tween::new(start(), &raffle_vars()).unwrap();
        tween.play();
        assert!(!tween.tick(0.0));
        assert!(!tween.tick(-1.0));
        assert!(!tween.tick(f64::INFINITY));
        assert_eq!(tween.time(), 0.0);
    }

    #[test]
    fn test_vars_deserialize_camel_case() {
        let vars: TweenVars =
            serde_json::from_str(r##"{"y": 0, "color": "#901090", "duration": 0.3}"##).unwrap();
        assert_eq!(vars, TweenVars::new(0.3).y(0.0).color("#901090"));

        let vars: TweenVars =
            serde_json::from_str(r#"{"x": 4, "duration": 1, "ease": "none"}"#).unwrap();
        assert_eq!(vars.ease, Ease::Linear);
    }
}
