//! Frame-ticked timers built on the tweenkit easing table.
//!
//! Same driving model as the tween context: a [`TimerContext`] owns every
//! timer, the host loop calls [`TimerContext::update`] once per frame, and
//! timers count down toward zero, stopping themselves on expiry.

pub mod context;
pub mod timer;

pub use context::{TimerContext, TimerId};
pub use timer::Timer;
