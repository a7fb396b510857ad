use std::cell::Cell;
use std::rc::Rc;

use tweenkit::{Binding, Plugin, TweenContext, TweenState, Value};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn scalar_binding(target: &Rc<Cell<f32>>) -> Binding {
    let g = target.clone();
    let s = target.clone();
    Binding::new(
        move || Value::Scalar(g.get()),
        move |v| {
            if let Value::Scalar(x) = v {
                s.set(x);
            }
        },
        Plugin::Lerp,
    )
}

/// it should read 5.0 halfway through a linear 0 -> 10 tween over 2s
#[test]
fn linear_midpoint() {
    let mut ctx = TweenContext::default();
    let target = Rc::new(Cell::new(0.0f32));
    let id = ctx.tween_value(scalar_binding(&target), Value::Scalar(10.0), 2.0);

    ctx.play(id);
    ctx.update(1.0);

    approx(target.get(), 5.0, 1e-5);
    assert_eq!(ctx.state(id), Some(TweenState::Playing));
}

/// it should complete at full duration and auto-kill back to the pool
#[test]
fn completes_and_auto_kills() {
    let mut ctx = TweenContext::default();
    let target = Rc::new(Cell::new(0.0f32));
    let id = ctx.tween_value(scalar_binding(&target), Value::Scalar(10.0), 2.0);

    ctx.play(id);
    ctx.update(1.0);
    ctx.update(1.0);

    approx(target.get(), 10.0, 1e-5);
    assert_eq!(ctx.state(id), None);
    assert_eq!(ctx.active_count(), 0);
    assert_eq!(ctx.pooled_tweens(), 1);
}

#[test]
fn auto_kill_disabled_keeps_complete_tween_registered() {
    let mut ctx = TweenContext::default();
    let target = Rc::new(Cell::new(0.0f32));
    let id = ctx.tween_value(scalar_binding(&target), Value::Scalar(10.0), 1.0);

    ctx.set_auto_kill(id, false);
    ctx.play(id);
    ctx.update(1.0);

    assert_eq!(ctx.state(id), Some(TweenState::Complete));
    assert_eq!(ctx.pooled_tweens(), 0);
}

#[test]
fn pause_freezes_and_play_resumes() {
    let mut ctx = TweenContext::default();
    let target = Rc::new(Cell::new(0.0f32));
    let id = ctx.tween_value(scalar_binding(&target), Value::Scalar(10.0), 2.0);

    ctx.play(id);
    ctx.update(0.5);
    ctx.pause(id);
    let frozen = target.get();
    ctx.update(0.5);
    ctx.update(0.5);
    assert_eq!(target.get(), frozen);
    assert_eq!(ctx.state(id), Some(TweenState::Pause));

    ctx.play(id);
    ctx.update(0.5);
    assert!(target.get() > frozen);
}

/// it should replay from any prior state, elapsed back at zero
#[test]
fn replay_resets_from_complete_pause_and_playing() {
    let mut ctx = TweenContext::default();
    let target = Rc::new(Cell::new(0.0f32));
    let id = ctx.tween_value(scalar_binding(&target), Value::Scalar(10.0), 1.0);
    ctx.set_auto_kill(id, false);

    // From Complete.
    ctx.play(id);
    ctx.update(1.0);
    assert_eq!(ctx.state(id), Some(TweenState::Complete));
    ctx.replay(id);
    assert_eq!(ctx.state(id), Some(TweenState::Playing));
    assert_eq!(ctx.elapsed(id), Some(0.0));

    // From Pause.
    ctx.update(0.25);
    ctx.pause(id);
    ctx.replay(id);
    assert_eq!(ctx.state(id), Some(TweenState::Playing));
    assert_eq!(ctx.elapsed(id), Some(0.0));

    // From Playing.
    ctx.update(0.25);
    ctx.replay(id);
    assert_eq!(ctx.state(id), Some(TweenState::Playing));
    assert_eq!(ctx.elapsed(id), Some(0.0));
}

#[test]
fn rewind_resets_without_playing() {
    let mut ctx = TweenContext::default();
    let target = Rc::new(Cell::new(0.0f32));
    let id = ctx.tween_value(scalar_binding(&target), Value::Scalar(10.0), 1.0);

    let rewinds = Rc::new(Cell::new(0u32));
    let r = rewinds.clone();
    ctx.on_rewind(id, move || r.set(r.get() + 1));

    ctx.play(id);
    ctx.update(0.5);
    ctx.rewind(id);

    assert_eq!(ctx.state(id), Some(TweenState::Ready));
    assert_eq!(ctx.elapsed(id), Some(0.0));
    assert_eq!(rewinds.get(), 1);

    // Does not advance until played again.
    ctx.update(0.5);
    assert_eq!(ctx.elapsed(id), Some(0.0));
}

/// it should fire on_start once per lifetime but on_play per resume
#[test]
fn callback_cadence() {
    let mut ctx = TweenContext::default();
    let target = Rc::new(Cell::new(0.0f32));
    let id = ctx.tween_value(scalar_binding(&target), Value::Scalar(10.0), 2.0);

    let starts = Rc::new(Cell::new(0u32));
    let plays = Rc::new(Cell::new(0u32));
    let completes = Rc::new(Cell::new(0u32));
    let (s, p, c) = (starts.clone(), plays.clone(), completes.clone());
    ctx.on_start(id, move || s.set(s.get() + 1));
    ctx.on_play(id, move || p.set(p.get() + 1));
    ctx.on_complete(id, move || c.set(c.get() + 1));
    ctx.set_auto_kill(id, false);

    ctx.play(id);
    ctx.pause(id);
    ctx.play(id);
    ctx.play(id); // already playing, no transition
    ctx.update(2.0);

    assert_eq!(starts.get(), 1);
    assert_eq!(plays.get(), 2);
    assert_eq!(completes.get(), 1);
}

/// it should skip value application entirely when the binding is empty
#[test]
fn empty_binding_no_ops() {
    let mut ctx = TweenContext::default();
    let id = ctx.tween_value(Binding::empty(), Value::Scalar(10.0), 1.0);

    ctx.play(id);
    ctx.update(0.5);
    ctx.update(0.5);

    // Still completes on schedule.
    assert_eq!(ctx.state(id), None);
    assert_eq!(ctx.pooled_tweens(), 1);
}

/// it should capture the interpolation base at the first update, not at creation
#[test]
fn start_value_captured_at_first_update() {
    let mut ctx = TweenContext::default();
    let target = Rc::new(Cell::new(0.0f32));
    let id = ctx.tween_value(scalar_binding(&target), Value::Scalar(10.0), 2.0);

    target.set(4.0); // moved externally before the tween first applies
    ctx.play(id);
    ctx.update(1.0);

    approx(target.get(), 7.0, 1e-5); // lerp(4, 10, 0.5)
}

#[test]
fn kill_is_immediate_and_silent() {
    let mut ctx = TweenContext::default();
    let target = Rc::new(Cell::new(0.0f32));
    let id = ctx.tween_value(scalar_binding(&target), Value::Scalar(10.0), 2.0);

    let completes = Rc::new(Cell::new(0u32));
    let c = completes.clone();
    ctx.on_complete(id, move || c.set(c.get() + 1));

    ctx.play(id);
    ctx.update(0.5);
    ctx.kill(id);

    assert_eq!(ctx.state(id), None);
    assert_eq!(ctx.pooled_tweens(), 1);
    // Kill force-completes without firing on_complete.
    assert_eq!(completes.get(), 0);
}

#[test]
fn ops_on_dead_ids_are_no_ops() {
    let mut ctx = TweenContext::default();
    let target = Rc::new(Cell::new(0.0f32));
    let id = ctx.tween_value(scalar_binding(&target), Value::Scalar(10.0), 1.0);
    ctx.kill(id);

    ctx.play(id);
    ctx.pause(id);
    ctx.replay(id);
    ctx.set_loop(id, 3);
    ctx.kill(id); // double kill
    ctx.update(1.0);

    assert_eq!(ctx.state(id), None);
    assert_eq!(ctx.pooled_tweens(), 1);
    assert_eq!(target.get(), 0.0);
}
