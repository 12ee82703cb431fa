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

//! Easing curves, named after the GSAP eases designers already use.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::TweenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Ease {
    Linear,
    #[default]
    Power1Out,
    Power2Out,
    Power3Out,
    Power1InOut,
    Power2InOut,
}

impl Ease {
    /// Map linear progress to eased progress. Input is clamped to `[0, 1]`
    /// so both endpoints are exact.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power1InOut => in_out(t, 2),
            Ease::Power2InOut => in_out(t, 3),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Ease::Linear => "none",
            Ease::Power1Out => "power1.out",
            Ease::Power2Out => "power2.out",
            Ease::Power3Out => "power3.out",
            Ease::Power1InOut => "power1.inOut",
            Ease::Power2InOut => "power2.inOut",
        }
    }
}

fn in_out(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        2f64.powi(power - 1) * t.powi(power)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(power) / 2.0
    }
}

impl FromStr for Ease {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "linear" => Ok(Ease::Linear),
            // GSAP treats a bare power name as its ".out" variant.
            "power1" | "power1.out" => Ok(Ease::Power1Out),
            "power2" | "power2.out" => Ok(Ease::Power2Out),
            "power3" | "power3.out" => Ok(Ease::Power3Out),
            "power1.inout" => Ok(Ease::Power1InOut),
            "power2.inout" => Ok(Ease::Power2InOut),
            _ => Err(TweenError::UnknownEase(s.to_string())),
        }
    }
}

impl TryFrom<String> for Ease {
    type Error = TweenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 6] = [
        Ease::Linear,
        Ease::Power1Out,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::Power1InOut,
        Ease::Power2InOut,
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{ease} at 0");
            assert_eq!(ease.apply(1.0), 1.0, "{ease} at 1");
            assert_eq!(ease.apply(-3.0), 0.0, "{ease} below range");
            assert_eq!(ease.apply(4.0), 1.0, "{ease} above range");
        }
    }

    #[test]
    fn test_curves_are_monotonic() {
        for ease in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = ease.apply(i as f64 / 100.0);
                assert!(v >= prev, "{ease} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_out_curves_lead_linear() {
        assert!((Ease::Power1Out.apply(0.5) - 0.75).abs() < 1e-12);
        assert!((Ease::Power2Out.apply(0.5) - 0.875).abs() < 1e-12);
        assert!((Ease::Power1InOut.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("power1.out".parse::<Ease>().unwrap(), Ease::Power1Out);
        assert_eq!("power2.inOut".parse::<Ease>().unwrap(), Ease::Power2InOut);
        assert_eq!("none".parse::<Ease>().unwrap(), Ease::Linear);
        assert_eq!("power3".parse::<Ease>().unwrap(), Ease::Power3Out);
        assert!(matches!(
            "elastic.out".parse::<Ease>(),
            Err(TweenError::UnknownEase(_))
        ));
        for ease in ALL {
            assert_eq!(ease.name().parse::<Ease>().unwrap(), ease);
        }
    }

    #[test]
    fn test_deserialize_from_string() {
        let ease: Ease = serde_json::from_str("\"power2.out\"").unwrap();
        assert_eq!(ease, Ease::Power2Out);
        assert!(serde_json::from_str::<Ease>("\"bounce\"").is_err());
    }
}
