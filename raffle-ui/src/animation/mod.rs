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

//! Browser side of the logo animation.
//!
//! `tween-core` knows nothing about the DOM. This module captures start
//! states from computed styles, writes interpolated values back as inline
//! styles, pumps the timeline from `requestAnimationFrame`, and binds the
//! hover listeners that play and reverse it.

pub mod frame_loop;
pub mod hover;
pub mod style;

use tween_core::{Result, Timeline, Tween};
use web_sys::HtmlElement;

use crate::constants::LogoAnimationConfig;

/// Both label tracks of the logo, keyed by the element they animate.
pub type LogoTimeline = Timeline<HtmlElement>;

/// Build the paused logo timeline. Start states are read from the labels'
/// current computed style, so this must run after the stylesheet applied.
pub fn build_timeline(
    raffle: &HtmlElement,
    capybara: &HtmlElement,
    config: &LogoAnimationConfig,
) -> Result<LogoTimeline> {
    let raffle_tween = Tween::new(style::capture_start(raffle), &config.raffle)?;
    let capybara_tween = Tween::new(style::capture_start(capybara), &config.capybara)?;
    Ok(Timeline::new()
        .with_track(raffle.clone(), raffle_tween)
        .with_track(capybara.clone(), capybara_tween))
}
