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

//! Extraction of the translation part of a computed CSS `transform`.

use crate::error::{Result, TweenError};

/// A 2D translation in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

impl Translation {
    /// Parse `none`, `matrix(..)`, `matrix3d(..)` and `translate(..)`.
    ///
    /// Browsers resolve every transform to one of the matrix forms in
    /// `getComputedStyle`; `translate` is accepted for inline styles.
    pub fn parse_transform(input: &str) -> Result<Self> {
        let s = input.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Self::default());
        }
        let invalid = || TweenError::InvalidTransform(input.to_string());
        let (name, args) = s
            .strip_suffix(')')
            .and_then(|rest| rest.split_once('('))
            .ok_or_else(invalid)?;
        let values = args
            .split(',')
            .map(|v| parse_length(v.trim()))
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(invalid)?;

        match (name.trim().to_ascii_lowercase().as_str(), values.len()) {
            ("matrix", 6) => Ok(Self {
                x: values[4],
                y: values[5],
            }),
            ("matrix3d", 16) => Ok(Self {
                x: values[12],
                y: values[13],
            }),
            ("translate", 1) => Ok(Self {
                x: values[0],
                y: 0.0,
            }),
            ("translate", 2) => Ok(Self {
                x: values[0],
                y: values[1],
            }),
            _ => Err(invalid()),
        }
    }
}

fn parse_length(value: &str) -> Option<f64> {
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}
