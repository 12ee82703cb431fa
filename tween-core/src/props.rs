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

use crate::color::Rgba;
use crate::transform::Translation;

/// The set of properties a tween animates on its target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Props {
    /// Horizontal translation in CSS pixels.
    pub x: f64,
    /// Vertical translation in CSS pixels.
    pub y: f64,
    pub color: Rgba,
}

impl Props {
    pub fn new(translation: Translation, color: Rgba) -> Self {
        Self {
            x: translation.x,
            y: translation.y,
            color,
        }
    }

    pub fn lerp(from: &Props, to: &Props, t: f64) -> Props {
        let t = t.clamp(0.0, 1.0);
        Props {
            x: from.x + (to.x - from.x) * t,
            y: from.y + (to.y - from.y) * t,
            color: Rgba::lerp(from.color, to.color, t),
        }
    }

    /// CSS `transform` value for this translation.
    pub fn transform_css(&self) -> String {
        format!("translate({}px, {}px)", round_px(self.x), round_px(self.y))
    }
}

// Sub-pixel precision beyond a thousandth only produces style churn.
fn round_px(v: f64) -> f64 {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
