//! Interpolation strategies bound into a tween.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::interp::{lerp_f32, lerp_vec2, lerp_vec3, lerp_vec4, nlerp_quat, quat_from_euler_deg, slerp_quat};
use crate::value::Value;

/// How a tween blends its start/end values into the value it applies.
///
/// A tween with no plugin never applies anything (null dependency => skip
/// effect); a plugin fed value kinds it does not understand fails soft and
/// returns the start value unchanged.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Plugin {
    /// Component-wise lerp for Scalar/Vec2/Vec3/Color; NLERP for Quat pairs.
    #[default]
    Lerp,
    /// Shortest-arc SLERP between Quat endpoints.
    SlerpQuat,
    /// Vec3 euler-degree endpoints, slerped in quaternion space; emits a Quat.
    EulerToQuat,
}

impl Plugin {
    /// Blend `start` toward `end` at eased progress `t`.
    pub fn evaluate(&self, start: &Value, end: &Value, t: f32) -> Value {
        match self {
            Plugin::Lerp => match (start, end) {
                (Value::Scalar(a), Value::Scalar(b)) => Value::Scalar(lerp_f32(*a, *b, t)),
                (Value::Vec2(a), Value::Vec2(b)) => Value::Vec2(lerp_vec2(*a, *b, t)),
                (Value::Vec3(a), Value::Vec3(b)) => Value::Vec3(lerp_vec3(*a, *b, t)),
                (Value::Quat(a), Value::Quat(b)) => Value::Quat(nlerp_quat(*a, *b, t)),
                (Value::Color(a), Value::Color(b)) => Value::Color(lerp_vec4(*a, *b, t)),
                _ => kind_mismatch(self, start, end),
            },
            Plugin::SlerpQuat => match (start, end) {
                (Value::Quat(a), Value::Quat(b)) => Value::Quat(slerp_quat(*a, *b, t)),
                _ => kind_mismatch(self, start, end),
            },
            Plugin::EulerToQuat => match (start, end) {
                (Value::Vec3(a), Value::Vec3(b)) => {
                    let qa = quat_from_euler_deg(*a);
                    let qb = quat_from_euler_deg(*b);
                    Value::Quat(slerp_quat(qa, qb, t))
                }
                _ => kind_mismatch(self, start, end),
            },
        }
    }
}

fn kind_mismatch(plugin: &Plugin, start: &Value, end: &Value) -> Value {
    debug!(
        "{plugin:?} cannot blend {:?} -> {:?}, passing start through",
        start.kind(),
        end.kind()
    );
    start.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    #[test]
    fn lerp_midpoint() {
        let v = Plugin::Lerp.evaluate(&Value::Scalar(0.0), &Value::Scalar(10.0), 0.5);
        assert_eq!(v, Value::Scalar(5.0));
    }

    #[test]
    fn kind_mismatch_fails_soft() {
        let start = Value::Vec3([1.0, 2.0, 3.0]);
        let end = Value::Scalar(10.0);
        assert_ne!(start.kind(), end.kind());
        let v = Plugin::Lerp.evaluate(&start, &end, 0.5);
        assert_eq!(v, start);
        assert_eq!(v.kind(), ValueKind::Vec3);
        let v = Plugin::SlerpQuat.evaluate(&start, &end, 0.5);
        assert_eq!(v, start);
    }

    #[test]
    fn euler_endpoints_emit_quats() {
        let v = Plugin::EulerToQuat.evaluate(
            &Value::Vec3([0.0, 0.0, 0.0]),
            &Value::Vec3([0.0, 0.0, 90.0]),
            1.0,
        );
        match v {
            Value::Quat(q) => {
                let r = std::f32::consts::FRAC_1_SQRT_2;
                assert!((q[2] - r).abs() < 1e-5 && (q[3] - r).abs() < 1e-5, "q={q:?}");
            }
            other => panic!("expected quat, got {other:?}"),
        }
    }
}
