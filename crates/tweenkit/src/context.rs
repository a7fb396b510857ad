//! TweenContext: owned active-set registry plus kind-segregated pools.
//!
//! The context replaces any ambient static state: callers create one, keep it
//! alive for the life of the host loop, and pass `update(dt)` a frame delta
//! once per tick. All API calls are expected on that same logical thread; no
//! locking is used or needed.
//!
//! Ownership rules:
//! - An active top-level tween lives in the registry, addressed by TweenId.
//! - Appending/joining a tween into a sequence moves it out of the registry;
//!   the sequence drives it directly from then on.
//! - Kill (or auto-kill on completion) wipes the instance and pushes it onto
//!   the free stack for its kind; ids are never reused, so stale handles
//!   degrade to silent no-ops.

use log::{debug, trace};

use crate::binding::Binding;
use crate::config::Config;
use crate::descriptor::TweenDescriptor;
use crate::ease::Ease;
use crate::ids::{IdAllocator, TweenId};
use crate::tween::{SequenceTag, Tween, TweenKind, TweenState};
use crate::value::Value;

struct ActiveEntry {
    id: TweenId,
    tween: Tween,
}

pub struct TweenContext {
    ids: IdAllocator,
    active: Vec<ActiveEntry>,
    pool_tweens: Vec<Tween>,
    pool_sequences: Vec<Tween>,
}

impl Default for TweenContext {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl TweenContext {
    pub fn new(cfg: Config) -> Self {
        Self {
            ids: IdAllocator::new(),
            active: Vec::with_capacity(cfg.initial_active_capacity),
            pool_tweens: Vec::with_capacity(cfg.initial_pool_capacity),
            pool_sequences: Vec::with_capacity(cfg.initial_pool_capacity),
        }
    }

    // ---- factories ----------------------------------------------------

    /// Create a value tween interpolating toward `end` over `duration`
    /// seconds, registered in Ready state with linear ease.
    pub fn tween_value(&mut self, binding: Binding, end: Value, duration: f32) -> TweenId {
        let mut t = self.acquire_value();
        t.duration = duration;
        if let TweenKind::Value(v) = &mut t.kind {
            v.start = binding.read().unwrap_or_else(|| end.clone());
            v.end = end;
            v.binding = binding;
        }
        self.register(t)
    }

    /// Create an empty sequence, registered in Ready state.
    pub fn sequence(&mut self) -> TweenId {
        let t = self.acquire_sequence();
        self.register(t)
    }

    /// Instantiate a tween from a plain-data descriptor plus a live binding.
    pub fn spawn(&mut self, desc: &TweenDescriptor, binding: Binding) -> TweenId {
        let id = self.tween_value(binding, desc.end.clone(), desc.duration);
        if let Some(entry) = self.find_mut(id) {
            entry.tween.set_ease(desc.ease);
            if desc.loop_count != 0 {
                entry.tween.set_loop(desc.loop_count);
            }
            entry.tween.set_auto_kill(desc.auto_kill);
            if desc.is_from {
                entry.tween.set_from();
            }
        }
        id
    }

    /// Instantiate from a descriptor directly into a sequence, honoring the
    /// descriptor's sequence tag (Wait descriptors insert a pure delay and
    /// ignore the binding).
    pub fn spawn_into(&mut self, seq: TweenId, desc: &TweenDescriptor, binding: Binding) {
        match desc.tag {
            SequenceTag::Wait => self.wait(seq, desc.duration),
            SequenceTag::Join => {
                let id = self.spawn(desc, binding);
                self.join(seq, id);
            }
            _ => {
                let id = self.spawn(desc, binding);
                self.append(seq, id);
            }
        }
    }

    // ---- sequence composition ------------------------------------------

    /// Move `child` out of the registry and run it after everything already
    /// in the sequence. Adds the child's duration to the sequence's.
    pub fn append(&mut self, seq: TweenId, child: TweenId) {
        self.insert_child(seq, child, SequenceTag::Append);
    }

    /// Move `child` out of the registry and run it concurrently with the
    /// preceding Append child. Degrades to append when the sequence is empty.
    pub fn join(&mut self, seq: TweenId, child: TweenId) {
        self.insert_child(seq, child, SequenceTag::Join);
    }

    /// Insert a pure delay at the end of the sequence.
    pub fn wait(&mut self, seq: TweenId, duration: f32) {
        if !self.is_sequence(seq) {
            return;
        }
        let mut t = self.acquire_value();
        t.duration = duration.max(0.0);
        t.tag = SequenceTag::Wait;
        if let Some(entry) = self.find_mut(seq) {
            entry.tween.duration += t.duration;
            if let TweenKind::Sequence(s) = &mut entry.tween.kind {
                s.children.push(t);
            }
        }
    }

    fn insert_child(&mut self, seq: TweenId, child: TweenId, tag: SequenceTag) {
        if seq == child || !self.is_sequence(seq) {
            return;
        }
        let Some(mut t) = self.take(child) else { return };
        if let Some(entry) = self.find_mut(seq) {
            if let TweenKind::Sequence(s) = &mut entry.tween.kind {
                let effective = if tag == SequenceTag::Join && s.children.is_empty() {
                    SequenceTag::Append
                } else {
                    tag
                };
                t.tag = effective;
                if effective == SequenceTag::Append {
                    entry.tween.duration += t.duration;
                }
                s.children.push(t);
            }
        }
    }

    // ---- lifecycle operations (silent no-ops for dead ids) --------------

    pub fn play(&mut self, id: TweenId) {
        if let Some(e) = self.find_mut(id) {
            e.tween.play();
        }
    }

    pub fn pause(&mut self, id: TweenId) {
        if let Some(e) = self.find_mut(id) {
            e.tween.pause();
        }
    }

    /// Reset to time zero and start playing, regardless of prior state.
    pub fn replay(&mut self, id: TweenId) {
        if let Some(e) = self.find_mut(id) {
            e.tween.replay();
        }
    }

    /// Reset to time zero without auto-playing.
    pub fn rewind(&mut self, id: TweenId) {
        if let Some(e) = self.find_mut(id) {
            e.tween.rewind();
        }
    }

    /// Force-complete the tween and return it (and, for a sequence, all of
    /// its children) to the free stacks.
    pub fn kill(&mut self, id: TweenId) {
        if let Some(entry) = self.take(id) {
            self.retire(entry);
        }
    }

    pub fn kill_all(&mut self) {
        while let Some(entry) = self.active.pop() {
            self.retire(entry.tween);
        }
    }

    pub fn set_loop(&mut self, id: TweenId, count: i32) {
        if let Some(e) = self.find_mut(id) {
            e.tween.set_loop(count);
        }
    }

    pub fn set_ease(&mut self, id: TweenId, ease: Ease) {
        if let Some(e) = self.find_mut(id) {
            e.tween.set_ease(ease);
        }
    }

    pub fn set_ease_with(&mut self, id: TweenId, ease: Ease, overshoot: f32, period: f32) {
        if let Some(e) = self.find_mut(id) {
            e.tween.set_ease_with(ease, overshoot, period);
        }
    }

    pub fn set_auto_kill(&mut self, id: TweenId, auto_kill: bool) {
        if let Some(e) = self.find_mut(id) {
            e.tween.set_auto_kill(auto_kill);
        }
    }

    pub fn from(&mut self, id: TweenId) {
        if let Some(e) = self.find_mut(id) {
            e.tween.set_from();
        }
    }

    pub fn to(&mut self, id: TweenId) {
        if let Some(e) = self.find_mut(id) {
            e.tween.set_to();
        }
    }

    // ---- lifecycle callbacks --------------------------------------------

    pub fn on_start(&mut self, id: TweenId, cb: impl FnMut() + 'static) {
        if let Some(e) = self.find_mut(id) {
            e.tween.callbacks.on_start = Some(Box::new(cb));
        }
    }

    pub fn on_play(&mut self, id: TweenId, cb: impl FnMut() + 'static) {
        if let Some(e) = self.find_mut(id) {
            e.tween.callbacks.on_play = Some(Box::new(cb));
        }
    }

    pub fn on_update(&mut self, id: TweenId, cb: impl FnMut() + 'static) {
        if let Some(e) = self.find_mut(id) {
            e.tween.callbacks.on_update = Some(Box::new(cb));
        }
    }

    pub fn on_complete(&mut self, id: TweenId, cb: impl FnMut() + 'static) {
        if let Some(e) = self.find_mut(id) {
            e.tween.callbacks.on_complete = Some(Box::new(cb));
        }
    }

    pub fn on_rewind(&mut self, id: TweenId, cb: impl FnMut() + 'static) {
        if let Some(e) = self.find_mut(id) {
            e.tween.callbacks.on_rewind = Some(Box::new(cb));
        }
    }

    // ---- frame tick -----------------------------------------------------

    /// Advance every active tween by `dt` seconds, then unregister and pool
    /// any that completed with auto-kill set. Iterates in reverse so removal
    /// stays safe mid-walk.
    pub fn update(&mut self, dt: f32) {
        let mut i = self.active.len();
        while i > 0 {
            i -= 1;
            let entry = &mut self.active[i];
            entry.tween.update(dt);
            if entry.tween.state == TweenState::Complete && entry.tween.auto_kill {
                let entry = self.active.swap_remove(i);
                self.retire(entry.tween);
            }
        }
    }

    /// Drop everything: active tweens and both pools.
    pub fn clear(&mut self) {
        self.active.clear();
        self.pool_tweens.clear();
        self.pool_sequences.clear();
    }

    // ---- introspection ---------------------------------------------------

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn state(&self, id: TweenId) -> Option<TweenState> {
        self.find(id).map(|e| e.tween.state)
    }

    pub fn elapsed(&self, id: TweenId) -> Option<f32> {
        self.find(id).map(|e| e.tween.elapsed)
    }

    pub fn duration(&self, id: TweenId) -> Option<f32> {
        self.find(id).map(|e| e.tween.duration)
    }

    pub fn is_active(&self, id: TweenId) -> bool {
        self.find(id).is_some()
    }

    pub fn pooled_tweens(&self) -> usize {
        self.pool_tweens.len()
    }

    pub fn pooled_sequences(&self) -> usize {
        self.pool_sequences.len()
    }

    // ---- internals ---------------------------------------------------------

    fn acquire_value(&mut self) -> Tween {
        match self.pool_tweens.pop() {
            Some(t) => {
                trace!("tween reused from pool ({} left)", self.pool_tweens.len());
                t
            }
            None => Tween::new_value(),
        }
    }

    fn acquire_sequence(&mut self) -> Tween {
        match self.pool_sequences.pop() {
            Some(t) => {
                trace!("sequence reused from pool ({} left)", self.pool_sequences.len());
                t
            }
            None => Tween::new_sequence(),
        }
    }

    fn register(&mut self, tween: Tween) -> TweenId {
        if self.active.len() == self.active.capacity() {
            debug!("tween registry at capacity {}, growing", self.active.capacity());
        }
        let id = self.ids.alloc();
        self.active.push(ActiveEntry { id, tween });
        id
    }

    fn find(&self, id: TweenId) -> Option<&ActiveEntry> {
        self.active.iter().find(|e| e.id == id)
    }

    fn find_mut(&mut self, id: TweenId) -> Option<&mut ActiveEntry> {
        self.active.iter_mut().find(|e| e.id == id)
    }

    /// Remove from the registry by value; absent ids are a silent no-op.
    fn take(&mut self, id: TweenId) -> Option<Tween> {
        let idx = self.active.iter().position(|e| e.id == id)?;
        Some(self.active.swap_remove(idx).tween)
    }

    /// Force-complete, wipe, and pool an instance (recursively for sequence
    /// children). The instance must already be out of the registry.
    fn retire(&mut self, mut tween: Tween) {
        tween.state = TweenState::Complete;
        let children = match &mut tween.kind {
            TweenKind::Sequence(seq) => {
                seq.cursor = 0;
                std::mem::take(&mut seq.children)
            }
            TweenKind::Value(_) => Vec::new(),
        };
        for child in children {
            self.retire(child);
        }
        tween.clear();
        if tween.is_sequence() {
            self.pool_sequences.push(tween);
            trace!("sequence returned to pool ({})", self.pool_sequences.len());
        } else {
            self.pool_tweens.push(tween);
            trace!("tween returned to pool ({})", self.pool_tweens.len());
        }
    }

    fn is_sequence(&self, id: TweenId) -> bool {
        self.find(id).map(|e| e.tween.is_sequence()).unwrap_or(false)
    }
}
