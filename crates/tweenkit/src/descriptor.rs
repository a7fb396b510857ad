//! Plain-data tween descriptors.
//!
//! A descriptor is the serializable half of a tween: timing, ease, looping,
//! and the end value. The live half (getter/setter closures over the target)
//! is supplied at spawn time as a [`Binding`](crate::Binding). Descriptors are
//! what authoring layers persist and load back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ease::Ease;
use crate::tween::SequenceTag;
use crate::value::Value;

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("descriptor json parse error: {0}")]
    Parse(String),
    #[error("duration must be finite and > 0, got {0}")]
    InvalidDuration(f32),
    #[error("end value has non-finite components")]
    NonFiniteEndValue,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TweenDescriptor {
    pub end: Value,
    #[serde(default = "default_duration")]
    pub duration: f32,
    #[serde(default)]
    pub ease: Ease,
    /// 0 = no loop, -1 = infinite, >0 = fixed cycle count.
    #[serde(default)]
    pub loop_count: i32,
    #[serde(default = "default_auto_kill")]
    pub auto_kill: bool,
    /// Placement when spawned into a sequence.
    #[serde(default = "default_tag")]
    pub tag: SequenceTag,
    #[serde(default)]
    pub is_from: bool,
}

fn default_duration() -> f32 {
    1.0
}

fn default_auto_kill() -> bool {
    true
}

fn default_tag() -> SequenceTag {
    SequenceTag::Append
}

impl TweenDescriptor {
    pub fn new(end: Value, duration: f32) -> Self {
        Self {
            end,
            duration,
            ease: Ease::Linear,
            loop_count: 0,
            auto_kill: true,
            tag: SequenceTag::Append,
            is_from: false,
        }
    }

    /// Basic invariants: finite positive duration, finite end components.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(DescriptorError::InvalidDuration(self.duration));
        }
        if !self.end.is_finite() {
            return Err(DescriptorError::NonFiniteEndValue);
        }
        Ok(())
    }
}

/// Parse and validate a descriptor from JSON.
pub fn parse_descriptor_json(s: &str) -> Result<TweenDescriptor, DescriptorError> {
    let desc: TweenDescriptor =
        serde_json::from_str(s).map_err(|e| DescriptorError::Parse(e.to_string()))?;
    desc.validate()?;
    Ok(desc)
}
