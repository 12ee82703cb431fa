// SPDX-License-Identifier: MIT OR Apache-2.0

use log::{debug, warn};
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use tween_core::TweenVars;
use wasm_bindgen::JsValue;
use web_sys::window;

pub const LOGO_CLASS: &str = "head_logo";
pub const MARK_CLASS: &str = "head-text";
pub const CAPYBARA_CLASS: &str = "head_capybara";
pub const RAFFLE_CLASS: &str = "head_raffle";

pub const MARK_TEXT: &str = "0x";
pub const CAPYBARA_TEXT: &str = "Capybara";
pub const RAFFLE_TEXT: &str = " Raffle";

/// Horizontal nudge applied to the "Raffle" label on hover, in px.
pub const RAFFLE_SHIFT_PX: f64 = 12.0;
pub const RAFFLE_HOVER_COLOR: &str = "#ff8c42";
pub const RAFFLE_DURATION_S: f64 = 0.4;

/// The "Capybara" label rests displaced by the stylesheet and drops to
/// this offset on hover, in px.
pub const CAPYBARA_REST_Y_PX: f64 = 0.0;
pub const CAPYBARA_HOVER_COLOR: &str = "#901090";
pub const CAPYBARA_DURATION_S: f64 = 0.3;

/// Hover targets for both labels. Each track may be overridden
/// independently through `window.__APP_CONFIG.logoAnimation`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogoAnimationConfig {
    pub raffle: TweenVars,
    pub capybara: TweenVars,
}

impl Default for LogoAnimationConfig {
    fn default() -> Self {
        Self {
            raffle: TweenVars::new(RAFFLE_DURATION_S)
                .x(RAFFLE_SHIFT_PX)
                .color(RAFFLE_HOVER_COLOR),
            capybara: TweenVars::new(CAPYBARA_DURATION_S)
                .y(CAPYBARA_REST_Y_PX)
                .color(CAPYBARA_HOVER_COLOR),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "logoAnimation")]
    #[serde(default)]
    pub logo_animation: LogoAnimationConfig,
}

/// Read `window.__APP_CONFIG`. A page without one gets the defaults.
pub fn app_config() -> Result<RuntimeConfig, String> {
    let Some(win) = window() else {
        return Ok(RuntimeConfig::default());
    };
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        debug!("window.__APP_CONFIG missing, using built-in logo animation");
        return Ok(RuntimeConfig::default());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

pub fn logo_animation() -> LogoAnimationConfig {
    match app_config() {
        Ok(config) => config.logo_animation,
        Err(e) => {
            warn!("{e}; using built-in logo animation");
            LogoAnimationConfig::default()
        }
    }
}
