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

//! `requestAnimationFrame` pump for a [`LogoTimeline`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use log::trace;
use web_sys::window;

use super::style;
use super::LogoTimeline;

/// Frame gaps longer than this (tab in background, debugger pause) count
/// as [`ADJUSTED_LAG_S`] so the animation resumes instead of jumping.
const LAG_THRESHOLD_S: f64 = 0.5;
const ADJUSTED_LAG_S: f64 = 0.033;

/// Drives a shared timeline one animation frame at a time while it has
/// work left, then goes idle until [`FrameLoop::start`] is called again.
///
/// Dropping the loop cancels any pending frame.
pub struct FrameLoop {
    inner: Rc<Inner>,
}

struct Inner {
    timeline: Rc<RefCell<LogoTimeline>>,
    /// Frame currently scheduled. Cancelled when dropped.
    pending: RefCell<Option<AnimationFrame>>,
    /// Time in ms (`performance.now()` base) the timeline was last advanced to.
    last_ts: Cell<Option<f64>>,
}

impl FrameLoop {
    pub fn new(timeline: Rc<RefCell<LogoTimeline>>) -> Self {
        Self {
            inner: Rc::new(Inner {
                timeline,
                pending: RefCell::new(None),
                last_ts: Cell::new(None),
            }),
        }
    }

    /// Make sure a frame is scheduled. No-op while one is already pending,
    /// otherwise the run is timed from now.
    pub fn start(&self) {
        if self.is_running() {
            return;
        }
        self.inner.last_ts.set(now_ms());
        schedule(&self.inner);
    }

    pub fn is_running(&self) -> bool {
        self.inner.pending.borrow().is_some()
    }
}

fn schedule(inner: &Rc<Inner>) {
    let weak = Rc::downgrade(inner);
    let frame = request_animation_frame(move |ts| {
        if let Some(inner) = weak.upgrade() {
            inner.frame(ts);
        }
    });
    *inner.pending.borrow_mut() = Some(frame);
}

fn now_ms() -> Option<f64> {
    window()?.performance().map(|p| p.now())
}

impl Inner {
    fn frame(self: &Rc<Self>, ts: f64) {
        // The handle of the frame being run; dropped once this frame is done.
        let _fired = self.pending.borrow_mut().take();

        let dt = self
            .last_ts
            .get()
            .map(|last| {
                let gap = ((ts - last) / 1000.0).max(0.0);
                if gap > LAG_THRESHOLD_S {
                    ADJUSTED_LAG_S
                } else {
                    gap
                }
            })
            .unwrap_or(0.0);
        self.last_ts.set(Some(ts));

        let active = {
            let mut timeline = self.timeline.borrow_mut();
            timeline.tick(dt);
            for (el, props) in timeline.values() {
                style::apply(el, &props);
            }
            timeline.is_active()
        };

        if active {
            schedule(self);
        } else {
            trace!("logo timeline idle");
            self.last_ts.set(None);
        }
    }
}
