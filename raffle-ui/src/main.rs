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

use log::Level;
use raffle_ui::components::head::Head;
use yew::prelude::*;

#[function_component(App)]
fn app_component() -> Html {
    html! {
        <header class="site-header">
            <Head />
        </header>
    }
}

fn main() {
    let level = if cfg!(feature = "debugAssertions") {
        Level::Debug
    } else {
        Level::Info
    };
    // A second init only happens under hot reload; keep the first logger.
    let _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
