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

/// it should hand out a fresh id on reuse and keep the old id dead
#[test]
fn reuse_allocates_fresh_id() {
    let mut ctx = TweenContext::default();
    let target = Rc::new(Cell::new(0.0f32));

    let first = ctx.tween_value(scalar_binding(&target), Value::Scalar(1.0), 0.5);
    ctx.kill(first);
    assert_eq!(ctx.pooled_tweens(), 1);

    let second = ctx.tween_value(scalar_binding(&target), Value::Scalar(2.0), 0.5);
    assert_ne!(first, second);
    assert_eq!(ctx.pooled_tweens(), 0);

    assert!(!ctx.is_active(first));
    assert_eq!(ctx.state(first), None);
    assert!(ctx.is_active(second));
    assert_eq!(ctx.state(second), Some(TweenState::Ready));
}

/// it should wipe callbacks and settings before an instance is reused
#[test]
fn reuse_carries_no_stale_state() {
    let mut ctx = TweenContext::default();
    let target = Rc::new(Cell::new(0.0f32));

    let first = ctx.tween_value(scalar_binding(&target), Value::Scalar(10.0), 1.0);
    let completes = Rc::new(Cell::new(0u32));
    let c = completes.clone();
    ctx.on_complete(first, move || c.set(c.get() + 1));
    ctx.set_loop(first, -1);
    ctx.set_auto_kill(first, false);
    ctx.kill(first);
    assert_eq!(completes.get(), 0);

    // Same instance comes back from the pool with default settings.
    let second = ctx.tween_value(scalar_binding(&target), Value::Scalar(4.0), 1.0);
    ctx.play(second);
    ctx.update(0.5);
    ctx.update(0.5);
    ctx.update(0.5);

    approx(target.get(), 4.0, 1e-5);
    // Completed and auto-killed: the infinite loop and the old on_complete
    // did not survive the round trip.
    assert_eq!(ctx.state(second), None);
    assert_eq!(completes.get(), 0);
    assert_eq!(ctx.pooled_tweens(), 1);
}

/// it should no-op ops addressed to a dead id even after its slot is reused
#[test]
fn dead_id_stays_dead_after_reuse() {
    let mut ctx = TweenContext::default();
    let target = Rc::new(Cell::new(0.0f32));

    let first = ctx.tween_value(scalar_binding(&target), Value::Scalar(10.0), 1.0);
    ctx.kill(first);
    let second = ctx.tween_value(scalar_binding(&target), Value::Scalar(10.0), 1.0);

    // Operating through the stale handle must not touch the reused instance.
    ctx.play(first);
    ctx.update(0.5);
    assert_eq!(target.get(), 0.0);
    assert_eq!(ctx.state(second), Some(TweenState::Ready));
}

#[test]
fn kill_all_pools_every_kind() {
    let mut ctx = TweenContext::default();
    let target = Rc::new(Cell::new(0.0f32));

    let _t = ctx.tween_value(scalar_binding(&target), Value::Scalar(1.0), 1.0);
    let seq = ctx.sequence();
    let child = ctx.tween_value(scalar_binding(&target), Value::Scalar(2.0), 1.0);
    ctx.append(seq, child);

    ctx.kill_all();
    assert_eq!(ctx.active_count(), 0);
    assert_eq!(ctx.pooled_sequences(), 1);
    assert_eq!(ctx.pooled_tweens(), 2);
}
