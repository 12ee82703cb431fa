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

//! Reading and writing the animated CSS properties.

use log::warn;
use tween_core::{Props, Rgba, Translation};
use web_sys::{window, CssStyleDeclaration, HtmlElement};

const TRANSFORM: &str = "transform";
const COLOR: &str = "color";

/// Capture the element's resting state from its computed style.
///
/// Anything that cannot be read or parsed falls back to the neutral value
/// (no translation, black text) so a broken stylesheet never blocks the
/// hover binding.
pub fn capture_start(el: &HtmlElement) -> Props {
    let Some(computed) = computed_style(el) else {
        return Props::default();
    };

    let transform = computed.get_property_value(TRANSFORM).unwrap_or_default();
    let translation = Translation::parse_transform(&transform).unwrap_or_else(|e| {
        warn!("{e}; assuming no translation for .{}", el.class_name());
        Translation::default()
    });

    let color = computed.get_property_value(COLOR).unwrap_or_default();
    let color = Rgba::parse(&color).unwrap_or_else(|e| {
        warn!("{e}; assuming default color for .{}", el.class_name());
        Rgba::default()
    });

    Props::new(translation, color)
}

/// Write `props` to the element's inline style.
pub fn apply(el: &HtmlElement, props: &Props) {
    let style = el.style();
    if let Err(e) = style.set_property(TRANSFORM, &props.transform_css()) {
        warn!("failed to set transform: {e:?}");
    }
    if let Err(e) = style.set_property(COLOR, &props.color.to_string()) {
        warn!("failed to set color: {e:?}");
    }
}

/// Drop any inline values left by a previous timeline so the next capture
/// sees the stylesheet again.
pub fn clear(el: &HtmlElement) {
    let style = el.style();
    let _ = style.remove_property(TRANSFORM);
    let _ = style.remove_property(COLOR);
}

fn computed_style(el: &HtmlElement) -> Option<CssStyleDeclaration> {
    window()?.get_computed_style(el).ok().flatten()
}
