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

//! Platform-independent tween engine.
//!
//! A [`Tween`] interpolates a small set of visual properties ([`Props`]: a
//! translation and a text color) from a captured start state towards a
//! target described by [`TweenVars`]. Tweens are created paused and are
//! driven by an external clock through [`Tween::tick`]. A [`Timeline`]
//! groups several tweens that are always played and reversed together.

pub mod color;
pub mod ease;
pub mod error;
pub mod props;
pub mod timeline;
pub mod transform;
pub mod tween;

pub use color::Rgba;
pub use ease::Ease;
pub use error::{Result, TweenError};
pub use props::Props;
pub use timeline::Timeline;
pub use transform::Translation;
pub use tween::{Tween, TweenVars};
