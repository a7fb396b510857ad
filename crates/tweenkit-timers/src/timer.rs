//! Timer instances: a countdown base with repeating, conditional, and eased
//! variants.

use std::fmt;

use tweenkit::ease::{self, Ease};

type Callback = Box<dyn FnMut()>;

#[inline]
fn fire(slot: &mut Option<Callback>) {
    if let Some(cb) = slot.as_mut() {
        cb();
    }
}

pub(crate) enum TimerKind {
    Countdown,
    /// Reloads on expiry; max_repeats of -1 repeats forever.
    Repeating {
        max_repeats: i32,
        repeat_count: i32,
        on_repeat: Option<Callback>,
    },
    /// Counts down only while the predicate holds; edge transitions fire
    /// on_condition_met / on_condition_lost.
    Conditional {
        condition: Box<dyn FnMut() -> bool>,
        was_met: bool,
        on_condition_met: Option<Callback>,
        on_condition_lost: Option<Callback>,
    },
    /// Countdown whose progress is remapped through the easing table.
    Eased { ease: Ease },
}

pub struct Timer {
    pub(crate) current: f32,
    pub(crate) init: f32,
    pub(crate) running: bool,
    pub(crate) on_start: Option<Callback>,
    pub(crate) on_stop: Option<Callback>,
    pub(crate) kind: TimerKind,
}

impl Timer {
    pub(crate) fn new(value: f32, kind: TimerKind) -> Self {
        Self {
            current: 0.0,
            init: value,
            running: false,
            on_start: None,
            on_stop: None,
            kind,
        }
    }

    #[inline]
    pub fn current_time(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Remaining fraction, clamped to [0, 1]. Runs 1 -> 0 as time elapses.
    pub fn progress(&self) -> f32 {
        if self.init <= 0.0 {
            return 0.0;
        }
        (self.current / self.init).clamp(0.0, 1.0)
    }

    /// Progress remapped through the timer's ease; identical to `progress`
    /// for non-eased kinds.
    pub fn eased_progress(&self) -> f32 {
        match &self.kind {
            TimerKind::Eased { ease: kind } => ease::evaluate(*kind, self.progress(), 1.0),
            _ => self.progress(),
        }
    }

    pub fn is_finished(&self) -> bool {
        match &self.kind {
            TimerKind::Repeating {
                max_repeats,
                repeat_count,
                ..
            } => *max_repeats > 0 && repeat_count >= max_repeats,
            _ => self.current <= 0.0,
        }
    }

    /// Reload to the initial time and start running; fires on_start on the
    /// stopped -> running transition.
    pub(crate) fn start(&mut self) {
        self.current = self.init;
        if !self.running {
            self.running = true;
            fire(&mut self.on_start);
        }
    }

    pub(crate) fn stop(&mut self) {
        if self.running {
            self.running = false;
            fire(&mut self.on_stop);
        }
    }

    pub(crate) fn pause(&mut self) {
        self.running = false;
    }

    pub(crate) fn resume(&mut self) {
        self.running = true;
    }

    pub(crate) fn reset(&mut self) {
        self.current = self.init;
        match &mut self.kind {
            TimerKind::Repeating { repeat_count, .. } => *repeat_count = 0,
            TimerKind::Conditional { was_met, .. } => *was_met = false,
            _ => {}
        }
    }

    pub(crate) fn reset_with(&mut self, new_time: f32) {
        self.init = new_time;
        self.reset();
    }

    pub(crate) fn tick(&mut self, dt: f32) {
        if !self.running {
            return;
        }
        match &mut self.kind {
            TimerKind::Countdown | TimerKind::Eased { .. } => {
                if self.current > 0.0 {
                    self.current -= dt;
                }
                if self.current <= 0.0 {
                    self.stop();
                }
            }
            TimerKind::Repeating {
                max_repeats,
                repeat_count,
                on_repeat,
            } => {
                self.current -= dt;
                if self.current <= 0.0 {
                    *repeat_count += 1;
                    fire(on_repeat);
                    if *max_repeats > 0 && *repeat_count >= *max_repeats {
                        self.stop();
                    } else {
                        self.current = self.init;
                    }
                }
            }
            TimerKind::Conditional {
                condition,
                was_met,
                on_condition_met,
                on_condition_lost,
            } => {
                let met = condition();
                if met != *was_met {
                    if met {
                        fire(on_condition_met);
                    } else {
                        fire(on_condition_lost);
                    }
                    *was_met = met;
                }
                if met && self.current > 0.0 {
                    self.current -= dt;
                }
                if self.current <= 0.0 {
                    self.stop();
                }
            }
        }
    }
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            TimerKind::Countdown => "Countdown",
            TimerKind::Repeating { .. } => "Repeating",
            TimerKind::Conditional { .. } => "Conditional",
            TimerKind::Eased { .. } => "Eased",
        };
        f.debug_struct("Timer")
            .field("kind", &kind)
            .field("current", &self.current)
            .field("init", &self.init)
            .field("running", &self.running)
            .finish()
    }
}
