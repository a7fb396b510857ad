//! tweenkit: engine-agnostic tween/sequence scheduling core.
//!
//! A [`TweenContext`] owns an active set of tweens plus kind-segregated free
//! stacks; the host loop calls [`TweenContext::update`] once per frame with
//! its delta time. Tweens mutate external state through caller-supplied
//! [`Binding`] closures, so the core never touches a scene graph or any other
//! host-owned structure.
//!
//! Single-threaded and cooperative by design: all advancement happens
//! synchronously inside `update`, and cancellation (`kill`) takes effect
//! within the same call.

pub mod binding;
pub mod config;
pub mod context;
pub mod descriptor;
pub mod ease;
pub mod ids;
pub mod interp;
pub mod plugin;
pub mod tween;
pub mod value;

pub use binding::{Binding, TweenGetter, TweenSetter};
pub use config::Config;
pub use context::TweenContext;
pub use descriptor::{parse_descriptor_json, DescriptorError, TweenDescriptor};
pub use ease::{evaluate, evaluate_with, Ease, DEFAULT_OVERSHOOT, DEFAULT_PERIOD};
pub use ids::TweenId;
pub use plugin::Plugin;
pub use tween::{SequenceTag, TweenState};
pub use value::{Value, ValueKind};
