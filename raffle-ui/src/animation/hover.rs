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

//! Scoped hover listeners on the logo container.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use log::debug;
use web_sys::HtmlElement;

use super::frame_loop::FrameLoop;
use super::LogoTimeline;

/// Owns the `mouseenter`/`mouseleave` listeners and the timeline they drive.
///
/// Entering plays every track forward, leaving reverses them, both from the
/// current playhead. Dropping the binding removes the listeners and stops
/// the frame loop.
pub struct HoverBinding {
    _listeners: [EventListener; 2],
    timeline: Rc<RefCell<LogoTimeline>>,
    frames: Rc<FrameLoop>,
}

impl HoverBinding {
    pub fn attach(target: &HtmlElement, timeline: LogoTimeline) -> Self {
        let timeline = Rc::new(RefCell::new(timeline));
        let frames = Rc::new(FrameLoop::new(timeline.clone()));

        let on_enter = {
            let timeline = timeline.clone();
            let frames = frames.clone();
            EventListener::new(target, "mouseenter", move |_| {
                timeline.borrow_mut().play();
                frames.start();
            })
        };
        let on_leave = {
            let timeline = timeline.clone();
            let frames = frames.clone();
            EventListener::new(target, "mouseleave", move |_| {
                timeline.borrow_mut().reverse();
                frames.start();
            })
        };
        debug!("hover binding attached to .{}", target.class_name());

        Self {
            _listeners: [on_enter, on_leave],
            timeline,
            frames,
        }
    }

    pub fn timeline(&self) -> Rc<RefCell<LogoTimeline>> {
        self.timeline.clone()
    }

    pub fn is_animating(&self) -> bool {
        self.frames.is_running()
    }
}
