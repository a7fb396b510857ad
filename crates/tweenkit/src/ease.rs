//! Easing table: pure closed-form remappings of normalized time to progress.
//!
//! Formulas follow the classic Penner equations with exact boundary snapping
//! (expo/elastic return exactly 0/1 near the endpoints, elastic amplitude is
//! clamped to >= 1, InOut back scales the overshoot by 1.525).

use serde::{Deserialize, Serialize};

const PI: f32 = std::f32::consts::PI;
const PI_OVER_2: f32 = 1.570_796_4;
const TWO_PI: f32 = 6.283_185_5;

/// Default back overshoot / elastic amplitude.
pub const DEFAULT_OVERSHOOT: f32 = 1.70158;
/// Default elastic period.
pub const DEFAULT_PERIOD: f32 = 0.3;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Ease {
    #[default]
    Linear,
    InSine,
    OutSine,
    InOutSine,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InBack,
    OutBack,
    InOutBack,
    InElastic,
    OutElastic,
    InOutElastic,
    InBounce,
    OutBounce,
    InOutBounce,
}

impl Ease {
    /// Every supported kind, in declaration order. Handy for exhaustive tests
    /// and tooling that enumerates the table.
    pub const ALL: [Ease; 31] = [
        Ease::Linear,
        Ease::InSine,
        Ease::OutSine,
        Ease::InOutSine,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
        Ease::InQuint,
        Ease::OutQuint,
        Ease::InOutQuint,
        Ease::InExpo,
        Ease::OutExpo,
        Ease::InOutExpo,
        Ease::InCirc,
        Ease::OutCirc,
        Ease::InOutCirc,
        Ease::InBack,
        Ease::OutBack,
        Ease::InOutBack,
        Ease::InElastic,
        Ease::OutElastic,
        Ease::InOutElastic,
        Ease::InBounce,
        Ease::OutBounce,
        Ease::InOutBounce,
    ];
}

#[inline]
fn approximately(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

/// Evaluate `ease` at `time` over `duration` with default overshoot/period.
#[inline]
pub fn evaluate(ease: Ease, time: f32, duration: f32) -> f32 {
    evaluate_with(ease, time, duration, DEFAULT_OVERSHOOT, DEFAULT_PERIOD)
}

/// Evaluate `ease` at `time` over `duration`.
///
/// Returns eased progress, 0 at time 0 and 1 at time == duration. Back and
/// elastic kinds exceed [0, 1] transiently by design; everything else stays
/// inside. `overshoot_or_amplitude` parametrizes back/elastic, `period`
/// parametrizes elastic only.
pub fn evaluate_with(
    ease: Ease,
    time: f32,
    duration: f32,
    overshoot_or_amplitude: f32,
    period: f32,
) -> f32 {
    let mut t = time;
    let d = duration;
    let mut s = overshoot_or_amplitude;
    let mut p = period;
    match ease {
        Ease::Linear => t / d,

        Ease::InSine => -(t / d * PI_OVER_2).cos() + 1.0,
        Ease::OutSine => (t / d * PI_OVER_2).sin(),
        Ease::InOutSine => -0.5 * ((PI * t / d).cos() - 1.0),

        Ease::InQuad => {
            t /= d;
            t * t
        }
        Ease::OutQuad => {
            t /= d;
            -t * (t - 2.0)
        }
        Ease::InOutQuad => {
            t /= d * 0.5;
            if t < 1.0 {
                0.5 * t * t
            } else {
                t -= 1.0;
                -0.5 * (t * (t - 2.0) - 1.0)
            }
        }

        Ease::InCubic => {
            t /= d;
            t * t * t
        }
        Ease::OutCubic => {
            t = t / d - 1.0;
            t * t * t + 1.0
        }
        Ease::InOutCubic => {
            t /= d * 0.5;
            if t < 1.0 {
                0.5 * t * t * t
            } else {
                t -= 2.0;
                0.5 * (t * t * t + 2.0)
            }
        }

        Ease::InQuart => {
            t /= d;
            t * t * t * t
        }
        Ease::OutQuart => {
            t = t / d - 1.0;
            -(t * t * t * t - 1.0)
        }
        Ease::InOutQuart => {
            t /= d * 0.5;
            if t < 1.0 {
                0.5 * t * t * t * t
            } else {
                t -= 2.0;
                -0.5 * (t * t * t * t - 2.0)
            }
        }

        Ease::InQuint => {
            t /= d;
            t * t * t * t * t
        }
        Ease::OutQuint => {
            t = t / d - 1.0;
            t * t * t * t * t + 1.0
        }
        Ease::InOutQuint => {
            t /= d * 0.5;
            if t < 1.0 {
                0.5 * t * t * t * t * t
            } else {
                t -= 2.0;
                0.5 * (t * t * t * t * t + 2.0)
            }
        }

        Ease::InExpo => {
            if approximately(t, 0.0) {
                0.0
            } else {
                (2.0f32).powf(10.0 * (t / d - 1.0))
            }
        }
        Ease::OutExpo => {
            if approximately(t, d) {
                1.0
            } else {
                -(2.0f32).powf(-10.0 * t / d) + 1.0
            }
        }
        Ease::InOutExpo => {
            if approximately(t, 0.0) {
                return 0.0;
            }
            if approximately(t, d) {
                return 1.0;
            }
            t /= d * 0.5;
            if t < 1.0 {
                0.5 * (2.0f32).powf(10.0 * (t - 1.0))
            } else {
                t -= 1.0;
                0.5 * (-(2.0f32).powf(-10.0 * t) + 2.0)
            }
        }

        Ease::InCirc => {
            t /= d;
            -((1.0 - t * t).sqrt() - 1.0)
        }
        Ease::OutCirc => {
            t = t / d - 1.0;
            (1.0 - t * t).sqrt()
        }
        Ease::InOutCirc => {
            t /= d * 0.5;
            if t < 1.0 {
                -0.5 * ((1.0 - t * t).sqrt() - 1.0)
            } else {
                t -= 2.0;
                0.5 * ((1.0 - t * t).sqrt() + 1.0)
            }
        }

        Ease::InBack => {
            t /= d;
            t * t * ((s + 1.0) * t - s)
        }
        Ease::OutBack => {
            t = t / d - 1.0;
            t * t * ((s + 1.0) * t + s) + 1.0
        }
        Ease::InOutBack => {
            t /= d * 0.5;
            s *= 1.525;
            if t < 1.0 {
                0.5 * (t * t * ((s + 1.0) * t - s))
            } else {
                t -= 2.0;
                0.5 * (t * t * ((s + 1.0) * t + s) + 2.0)
            }
        }

        Ease::InElastic => {
            if approximately(t, 0.0) {
                return 0.0;
            }
            t /= d;
            if approximately(t, 1.0) {
                return 1.0;
            }
            if approximately(p, 0.0) {
                p = d * 0.3;
            }
            let s1 = if s < 1.0 {
                s = 1.0;
                p / 4.0
            } else {
                p / TWO_PI * (1.0 / s).asin()
            };
            t -= 1.0;
            -(s * (2.0f32).powf(10.0 * t) * ((t * d - s1) * TWO_PI / p).sin())
        }
        Ease::OutElastic => {
            if approximately(t, 0.0) {
                return 0.0;
            }
            t /= d;
            if approximately(t, 1.0) {
                return 1.0;
            }
            if approximately(p, 0.0) {
                p = d * 0.3;
            }
            let s2 = if s < 1.0 {
                s = 1.0;
                p / 4.0
            } else {
                p / TWO_PI * (1.0 / s).asin()
            };
            s * (2.0f32).powf(-10.0 * t) * ((t * d - s2) * TWO_PI / p).sin() + 1.0
        }
        Ease::InOutElastic => {
            if approximately(t, 0.0) {
                return 0.0;
            }
            t /= d * 0.5;
            if approximately(t, 2.0) {
                return 1.0;
            }
            if approximately(p, 0.0) {
                p = d * 0.450_000_02;
            }
            let s3 = if s < 1.0 {
                s = 1.0;
                p / 4.0
            } else {
                p / TWO_PI * (1.0 / s).asin()
            };
            if t < 1.0 {
                t -= 1.0;
                -0.5 * (s * (2.0f32).powf(10.0 * t) * ((t * d - s3) * TWO_PI / p).sin())
            } else {
                t -= 1.0;
                s * (2.0f32).powf(-10.0 * t) * ((t * d - s3) * TWO_PI / p).sin() * 0.5 + 1.0
            }
        }

        Ease::InBounce => ease_in_bounce(t, d),
        Ease::OutBounce => ease_out_bounce(t, d),
        Ease::InOutBounce => {
            if t < d * 0.5 {
                ease_in_bounce(t * 2.0, d) * 0.5
            } else {
                ease_out_bounce(t * 2.0 - d, d) * 0.5 + 0.5
            }
        }
    }
}

fn ease_in_bounce(time: f32, duration: f32) -> f32 {
    1.0 - ease_out_bounce(duration - time, duration)
}

fn ease_out_bounce(time: f32, duration: f32) -> f32 {
    let mut t = time / duration;
    if t < 1.0 / 2.75 {
        7.5625 * t * t
    } else if t < 2.0 / 2.75 {
        t -= 1.5 / 2.75;
        7.5625 * t * t + 0.75
    } else if t < 2.5 / 2.75 {
        t -= 2.25 / 2.75;
        7.5625 * t * t + 0.9375
    } else {
        t -= 2.625 / 2.75;
        7.5625 * t * t + 0.984375
    }
}
