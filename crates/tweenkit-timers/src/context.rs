//! TimerContext: an owned registry of timers ticked once per frame.

use log::trace;

use tweenkit::ease::Ease;

use crate::timer::{Timer, TimerKind};

/// Handle to a timer owned by a [`TimerContext`]. Ids are monotonic and never
/// reused; operations on a removed timer are silent no-ops.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TimerId(pub u32);

struct TimerEntry {
    id: TimerId,
    timer: Timer,
}

/// Explicit owner for all timers; the host loop calls [`TimerContext::update`]
/// once per frame. Single-threaded, like the tween context.
#[derive(Default)]
pub struct TimerContext {
    next_id: u32,
    timers: Vec<TimerEntry>,
}

impl TimerContext {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- factories ----------------------------------------------------

    pub fn countdown(&mut self, value: f32) -> TimerId {
        self.insert(Timer::new(value, TimerKind::Countdown))
    }

    /// `max_repeats` of -1 repeats forever.
    pub fn repeating(&mut self, value: f32, max_repeats: i32) -> TimerId {
        self.insert(Timer::new(
            value,
            TimerKind::Repeating {
                max_repeats,
                repeat_count: 0,
                on_repeat: None,
            },
        ))
    }

    /// Counts down only while `condition` returns true.
    pub fn conditional(&mut self, value: f32, condition: impl FnMut() -> bool + 'static) -> TimerId {
        self.insert(Timer::new(
            value,
            TimerKind::Conditional {
                condition: Box::new(condition),
                was_met: false,
                on_condition_met: None,
                on_condition_lost: None,
            },
        ))
    }

    pub fn eased(&mut self, value: f32, ease: Ease) -> TimerId {
        self.insert(Timer::new(value, TimerKind::Eased { ease }))
    }

    // ---- operations (silent no-ops for dead ids) -------------------------

    pub fn start(&mut self, id: TimerId) {
        if let Some(t) = self.find_mut(id) {
            t.start();
        }
    }

    pub fn stop(&mut self, id: TimerId) {
        if let Some(t) = self.find_mut(id) {
            t.stop();
        }
    }

    pub fn pause(&mut self, id: TimerId) {
        if let Some(t) = self.find_mut(id) {
            t.pause();
        }
    }

    pub fn resume(&mut self, id: TimerId) {
        if let Some(t) = self.find_mut(id) {
            t.resume();
        }
    }

    pub fn reset(&mut self, id: TimerId) {
        if let Some(t) = self.find_mut(id) {
            t.reset();
        }
    }

    pub fn reset_with(&mut self, id: TimerId, new_time: f32) {
        if let Some(t) = self.find_mut(id) {
            t.reset_with(new_time);
        }
    }

    /// Drop a timer entirely.
    pub fn remove(&mut self, id: TimerId) {
        if let Some(idx) = self.timers.iter().position(|e| e.id == id) {
            self.timers.swap_remove(idx);
            trace!("timer removed ({} left)", self.timers.len());
        }
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    // ---- callbacks ------------------------------------------------------

    pub fn on_timer_start(&mut self, id: TimerId, cb: impl FnMut() + 'static) {
        if let Some(t) = self.find_mut(id) {
            t.on_start = Some(Box::new(cb));
        }
    }

    pub fn on_timer_stop(&mut self, id: TimerId, cb: impl FnMut() + 'static) {
        if let Some(t) = self.find_mut(id) {
            t.on_stop = Some(Box::new(cb));
        }
    }

    pub fn on_repeat(&mut self, id: TimerId, cb: impl FnMut() + 'static) {
        if let Some(t) = self.find_mut(id) {
            if let TimerKind::Repeating { on_repeat, .. } = &mut t.kind {
                *on_repeat = Some(Box::new(cb));
            }
        }
    }

    pub fn on_condition_met(&mut self, id: TimerId, cb: impl FnMut() + 'static) {
        if let Some(t) = self.find_mut(id) {
            if let TimerKind::Conditional {
                on_condition_met, ..
            } = &mut t.kind
            {
                *on_condition_met = Some(Box::new(cb));
            }
        }
    }

    pub fn on_condition_lost(&mut self, id: TimerId, cb: impl FnMut() + 'static) {
        if let Some(t) = self.find_mut(id) {
            if let TimerKind::Conditional {
                on_condition_lost, ..
            } = &mut t.kind
            {
                *on_condition_lost = Some(Box::new(cb));
            }
        }
    }

    // ---- frame tick -------------------------------------------------------

    /// Tick every running timer by `dt` seconds, in reverse registration
    /// order so a timer stopping itself mid-walk stays safe.
    pub fn update(&mut self, dt: f32) {
        for entry in self.timers.iter_mut().rev() {
            entry.timer.tick(dt);
        }
    }

    // ---- introspection ------------------------------------------------

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn is_running(&self, id: TimerId) -> Option<bool> {
        self.find(id).map(|t| t.is_running())
    }

    pub fn is_finished(&self, id: TimerId) -> Option<bool> {
        self.find(id).map(|t| t.is_finished())
    }

    pub fn current_time(&self, id: TimerId) -> Option<f32> {
        self.find(id).map(|t| t.current_time())
    }

    pub fn progress(&self, id: TimerId) -> Option<f32> {
        self.find(id).map(|t| t.progress())
    }

    pub fn eased_progress(&self, id: TimerId) -> Option<f32> {
        self.find(id).map(|t| t.eased_progress())
    }

    // ---- internals -----------------------------------------------------

    fn insert(&mut self, timer: Timer) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.timers.push(TimerEntry { id, timer });
        id
    }

    fn find(&self, id: TimerId) -> Option<&Timer> {
        self.timers.iter().find(|e| e.id == id).map(|e| &e.timer)
    }

    fn find_mut(&mut self, id: TimerId) -> Option<&mut Timer> {
        self.timers
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.timer)
    }
}
