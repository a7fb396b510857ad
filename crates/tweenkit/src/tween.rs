//! Tween/sequence state machine.
//!
//! A tween is either a leaf value interpolator or a composite sequence of
//! owned children; both share the same lifecycle
//! (Ready -> Playing <-> Pause -> Complete) and loop bookkeeping. Registry and
//! pool bookkeeping live in [`TweenContext`](crate::TweenContext); everything
//! here is pure state transition driven by `update(dt)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::binding::Binding;
use crate::ease::{self, Ease, DEFAULT_OVERSHOOT, DEFAULT_PERIOD};
use crate::value::Value;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum TweenState {
    #[default]
    Ready,
    Playing,
    Pause,
    Complete,
}

/// How a tween participates in a sequence. `None` means top-level.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum SequenceTag {
    #[default]
    None,
    Append,
    Join,
    Wait,
}

type Callback = Box<dyn FnMut()>;

#[derive(Default)]
pub(crate) struct Callbacks {
    pub on_start: Option<Callback>,
    pub on_play: Option<Callback>,
    pub on_update: Option<Callback>,
    pub on_complete: Option<Callback>,
    pub on_rewind: Option<Callback>,
}

#[inline]
fn fire(slot: &mut Option<Callback>) {
    if let Some(cb) = slot.as_mut() {
        cb();
    }
}

pub(crate) struct ValueTween {
    pub start: Value,
    pub end: Value,
    /// Target value captured from the getter at the first application after a
    /// reset; interpolation runs captured -> end.
    pub captured: Option<Value>,
    pub is_from: bool,
    pub binding: Binding,
}

pub(crate) struct SequenceTween {
    pub children: Vec<Tween>,
    pub cursor: usize,
}

impl SequenceTween {
    /// Start the child at the cursor plus the following run of Join children.
    fn start_current_group(&mut self) {
        if self.cursor >= self.children.len() {
            return;
        }
        let current = &mut self.children[self.cursor];
        if current.state != TweenState::Playing && current.state != TweenState::Complete {
            current.play();
        }
        let mut next = self.cursor + 1;
        while next < self.children.len() && self.children[next].tag == SequenceTag::Join {
            let joined = &mut self.children[next];
            if joined.state != TweenState::Playing && joined.state != TweenState::Complete {
                joined.play();
            }
            next += 1;
        }
    }

    /// Move the cursor past the current group once every member is Complete.
    fn advance_cursor(&mut self) {
        if self.cursor >= self.children.len() {
            return;
        }
        let mut all_completed = self.children[self.cursor].state == TweenState::Complete;
        let mut next = self.cursor + 1;
        while next < self.children.len() && self.children[next].tag == SequenceTag::Join {
            all_completed &= self.children[next].state == TweenState::Complete;
            next += 1;
        }
        if all_completed {
            self.cursor = next;
        }
    }
}

pub(crate) enum TweenKind {
    Value(ValueTween),
    Sequence(SequenceTween),
}

pub struct Tween {
    pub(crate) elapsed: f32,
    pub(crate) duration: f32,
    pub(crate) state: TweenState,
    pub(crate) ease: Ease,
    pub(crate) overshoot: f32,
    pub(crate) period: f32,
    pub(crate) auto_kill: bool,
    pub(crate) played_once: bool,
    pub(crate) tag: SequenceTag,
    /// 0 = no loop, -1 = infinite, >0 = fixed cycle count.
    pub(crate) loop_count: i32,
    pub(crate) current_loop: i32,
    pub(crate) is_looping: bool,
    pub(crate) callbacks: Callbacks,
    pub(crate) kind: TweenKind,
}

impl Tween {
    pub(crate) fn new_value() -> Self {
        Self::with_kind(TweenKind::Value(ValueTween {
            start: Value::default(),
            end: Value::default(),
            captured: None,
            is_from: true,
            binding: Binding::empty(),
        }))
    }

    pub(crate) fn new_sequence() -> Self {
        Self::with_kind(TweenKind::Sequence(SequenceTween {
            children: Vec::new(),
            cursor: 0,
        }))
    }

    fn with_kind(kind: TweenKind) -> Self {
        Self {
            elapsed: 0.0,
            duration: 0.0,
            state: TweenState::Ready,
            ease: Ease::Linear,
            overshoot: DEFAULT_OVERSHOOT,
            period: DEFAULT_PERIOD,
            auto_kill: true,
            played_once: false,
            tag: SequenceTag::None,
            loop_count: 0,
            current_loop: 0,
            is_looping: false,
            callbacks: Callbacks::default(),
            kind,
        }
    }

    #[inline]
    pub fn state(&self) -> TweenState {
        self.state
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn is_sequence(&self) -> bool {
        matches!(self.kind, TweenKind::Sequence(_))
    }

    pub(crate) fn play(&mut self) {
        if self.state != TweenState::Complete {
            if !self.played_once {
                self.played_once = true;
                fire(&mut self.callbacks.on_start);
            }
            if self.state != TweenState::Playing {
                self.state = TweenState::Playing;
                fire(&mut self.callbacks.on_play);
            }
        }
        if let TweenKind::Sequence(seq) = &mut self.kind {
            for child in &mut seq.children {
                if child.state == TweenState::Pause {
                    child.play();
                }
            }
        }
    }

    pub(crate) fn pause(&mut self) {
        if self.state == TweenState::Playing {
            self.state = TweenState::Pause;
        }
        if let TweenKind::Sequence(seq) = &mut self.kind {
            for child in &mut seq.children {
                if child.state == TweenState::Playing {
                    child.pause();
                }
            }
        }
    }

    pub(crate) fn replay(&mut self) {
        self.reset();
        self.state = TweenState::Playing;
    }

    pub(crate) fn rewind(&mut self) {
        self.reset();
    }

    /// Back to Ready with elapsed/loop counters zeroed; fires on_rewind.
    pub(crate) fn reset(&mut self) {
        self.elapsed = 0.0;
        self.state = TweenState::Ready;
        self.current_loop = 0;
        match &mut self.kind {
            TweenKind::Value(v) => v.captured = None,
            TweenKind::Sequence(seq) => {
                seq.cursor = 0;
                for child in seq.children.iter_mut().rev() {
                    child.reset();
                }
            }
        }
        fire(&mut self.callbacks.on_rewind);
    }

    pub(crate) fn set_loop(&mut self, count: i32) {
        self.loop_count = count;
        self.current_loop = 0;
        self.is_looping = count != 0;
        if let TweenKind::Sequence(seq) = &mut self.kind {
            for child in &mut seq.children {
                child.set_loop(count);
            }
        }
    }

    pub(crate) fn set_auto_kill(&mut self, auto_kill: bool) {
        self.auto_kill = auto_kill;
        if let TweenKind::Sequence(seq) = &mut self.kind {
            for child in &mut seq.children {
                child.set_auto_kill(auto_kill);
            }
        }
    }

    pub(crate) fn set_ease(&mut self, ease: Ease) {
        self.set_ease_with(ease, DEFAULT_OVERSHOOT, DEFAULT_PERIOD);
    }

    pub(crate) fn set_ease_with(&mut self, ease: Ease, overshoot: f32, period: f32) {
        self.ease = ease;
        self.overshoot = overshoot;
        self.period = period;
        if let TweenKind::Sequence(seq) = &mut self.kind {
            for child in &mut seq.children {
                child.set_ease_with(ease, overshoot, period);
            }
        }
    }

    /// Swap direction: start takes the configured end, end takes the target's
    /// current value read through the getter.
    pub(crate) fn set_from(&mut self) {
        if let TweenKind::Value(v) = &mut self.kind {
            v.is_from = true;
            v.start = v.end.clone();
            if let Some(current) = v.binding.read() {
                v.end = current;
            }
        }
    }

    pub(crate) fn set_to(&mut self) {
        if let TweenKind::Value(v) = &mut self.kind {
            v.is_from = false;
        }
    }

    pub(crate) fn update(&mut self, dt: f32) {
        if self.state != TweenState::Playing {
            return;
        }
        if self.is_sequence() {
            self.update_sequence(dt);
        } else {
            self.update_value(dt);
        }
    }

    fn update_value(&mut self, dt: f32) {
        self.elapsed += dt;
        let t = if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let progress = ease::evaluate_with(self.ease, t, 1.0, self.overshoot, self.period);
        if let TweenKind::Value(v) = &mut self.kind {
            if v.binding.plugin.is_some() && v.binding.setter.is_some() {
                if v.captured.is_none() {
                    v.captured = v.binding.read();
                }
                if let Some(base) = v.captured.clone() {
                    let end = v.end.clone();
                    v.binding.apply(&base, &end, progress);
                }
            }
        }
        fire(&mut self.callbacks.on_update);
        if self.elapsed >= self.duration {
            self.complete();
        }
    }

    fn update_sequence(&mut self, dt: f32) {
        {
            let TweenKind::Sequence(seq) = &mut self.kind else {
                return;
            };
            if seq.children.is_empty() {
                return;
            }
            for child in &mut seq.children {
                if child.state == TweenState::Playing {
                    child.update(dt);
                }
            }
            if seq.cursor < seq.children.len() {
                seq.start_current_group();
                seq.advance_cursor();
                return;
            }
        }
        self.complete();
    }

    /// Completion honoring loop continuation: extra cycles reset elapsed time
    /// (and a sequence's cursor/children) and stay Playing, firing on_complete
    /// once per cycle.
    fn complete(&mut self) {
        if self.is_looping && self.should_continue_looping() {
            self.current_loop += 1;
            self.elapsed = 0.0;
            if let TweenKind::Sequence(seq) = &mut self.kind {
                seq.cursor = 0;
                for child in &mut seq.children {
                    child.reset();
                }
            }
            self.state = TweenState::Playing;
            fire(&mut self.callbacks.on_complete);
            return;
        }
        self.state = TweenState::Complete;
        fire(&mut self.callbacks.on_complete);
    }

    fn should_continue_looping(&self) -> bool {
        if self.loop_count == -1 {
            return true;
        }
        self.current_loop < self.loop_count - 1
    }

    /// Full wipe before the instance goes back to its pool, so no callbacks,
    /// bindings, or children leak into the next reuse cycle.
    pub(crate) fn clear(&mut self) {
        self.elapsed = 0.0;
        self.duration = 0.0;
        self.state = TweenState::Ready;
        self.ease = Ease::Linear;
        self.overshoot = DEFAULT_OVERSHOOT;
        self.period = DEFAULT_PERIOD;
        self.auto_kill = true;
        self.played_once = false;
        self.tag = SequenceTag::None;
        self.loop_count = 0;
        self.current_loop = 0;
        self.is_looping = false;
        self.callbacks = Callbacks::default();
        match &mut self.kind {
            TweenKind::Value(v) => {
                v.start = Value::default();
                v.end = Value::default();
                v.captured = None;
                v.is_from = true;
                v.binding = Binding::empty();
            }
            TweenKind::Sequence(seq) => {
                seq.children.clear();
                seq.cursor = 0;
            }
        }
    }
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct(if self.is_sequence() { "Sequence" } else { "Tween" });
        dbg.field("state", &self.state)
            .field("elapsed", &self.elapsed)
            .field("duration", &self.duration)
            .field("ease", &self.ease)
            .field("tag", &self.tag)
            .field("loop_count", &self.loop_count)
            .field("current_loop", &self.current_loop)
            .field("auto_kill", &self.auto_kill);
        if let TweenKind::Sequence(seq) = &self.kind {
            dbg.field("children", &seq.children.len())
                .field("cursor", &seq.cursor);
        }
        dbg.finish()
    }
}
