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

//! Site header logo: "0x" mark plus two labels that animate on hover.

use log::{debug, warn};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::hover::HoverBinding;
use crate::animation::{build_timeline, style};
use crate::constants::{
    logo_animation, LogoAnimationConfig, CAPYBARA_CLASS, CAPYBARA_TEXT, LOGO_CLASS, MARK_CLASS,
    MARK_TEXT, RAFFLE_CLASS, RAFFLE_TEXT,
};

#[derive(Properties, PartialEq, Clone)]
pub struct HeadProps {
    /// Hover targets for the two labels. Defaults to the runtime config,
    /// falling back to the built-in values.
    #[prop_or_else(logo_animation)]
    pub animation: LogoAnimationConfig,
}

impl Default for HeadProps {
    fn default() -> Self {
        Self {
            animation: logo_animation(),
        }
    }
}

/// Hover-animated header logo.
///
/// The timeline and its listeners are created once after the first render
/// and released when the component unmounts (or when `animation` changes).
#[function_component(Head)]
pub fn head(props: &HeadProps) -> Html {
    let container_ref = use_node_ref();
    let capybara_ref = use_node_ref();
    let raffle_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let capybara_ref = capybara_ref.clone();
        let raffle_ref = raffle_ref.clone();
        use_effect_with(props.animation.clone(), move |animation| {
            let binding = bind_hover(&container_ref, &capybara_ref, &raffle_ref, animation);

            // Cleanup on unmount or when the animation config changes
            move || {
                drop(binding);
            }
        });
    }

    html! {
        <div ref={container_ref} class={LOGO_CLASS}>
            <h1 class={MARK_CLASS}>{ MARK_TEXT }</h1>
            <h1 ref={capybara_ref} class={CAPYBARA_CLASS}>{ CAPYBARA_TEXT }</h1>
            <h1 ref={raffle_ref} class={RAFFLE_CLASS}>{ RAFFLE_TEXT }</h1>
        </div>
    }
}

/// Build the timeline against the rendered labels and attach the hover
/// listeners. Returns `None`, after logging, when an element is missing.
pub fn bind_hover(
    container: &NodeRef,
    capybara: &NodeRef,
    raffle: &NodeRef,
    animation: &LogoAnimationConfig,
) -> Option<HoverBinding> {
    let (Some(container), Some(capybara), Some(raffle)) = (
        container.cast::<HtmlElement>(),
        capybara.cast::<HtmlElement>(),
        raffle.cast::<HtmlElement>(),
    ) else {
        debug!("logo elements not rendered, skipping hover binding");
        return None;
    };

    style::clear(&raffle);
    style::clear(&capybara);

    let timeline = match build_timeline(&raffle, &capybara, animation) {
        Ok(timeline) => timeline,
        Err(e) => {
            warn!("invalid logo animation ({e}), using built-in values");
            build_timeline(&raffle, &capybara, &LogoAnimationConfig::default()).ok()?
        }
    };

    Some(HoverBinding::attach(&container, timeline))
}
