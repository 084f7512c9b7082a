//! Drives the widget with a scripted drag and prints what a renderer would
//! see at each step.
//!
//! Run with `cargo run --example scripted_drag -p lockpattern_view`. Set
//! `RUST_LOG=debug` to watch the state-machine transitions.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use lockpattern_core::{Insets, PatternStyle, Secret};
use lockpattern_view::{PatternLockView, ResetScheduler, ResetToken};

/// Captures the armed token so the script can fire it by hand in place of a
/// real timer.
#[derive(Default)]
struct ScriptedScheduler {
    pending: Mutex<Option<ResetToken>>,
}

impl ResetScheduler for ScriptedScheduler {
    fn schedule(&self, delay: Duration, token: ResetToken) {
        println!("  [host] reset scheduled in {}ms", delay.as_millis());
        *self.pending.lock().unwrap() = Some(token);
    }

    fn cancel(&self, _token: ResetToken) {
        *self.pending.lock().unwrap() = None;
    }
}

fn paint(view: &PatternLockView, label: &str) {
    let Some(model) = view.render_model() else {
        println!("{label}: no layout yet");
        return;
    };
    let lit: Vec<_> = model
        .dots
        .iter()
        .filter(|d| d.status != lockpattern_core::DotStatus::Normal)
        .map(|d| format!("{}:{:?}", d.index, d.status))
        .collect();
    println!(
        "{label}: {} segments, trailing {}, lit dots [{}]",
        model.segments.len(),
        if model.trailing.is_some() { "yes" } else { "no" },
        lit.join(", "),
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let scheduler = Arc::new(ScriptedScheduler::default());
    let mut view = PatternLockView::new(
        PatternStyle {
            outer_dot_radius: 40.0,
            inner_dot_radius: 10.0,
            ..Default::default()
        },
        Secret::new("1235").unwrap(),
        scheduler.clone(),
    )
    .expect("valid style");

    view.set_unlock_listener(|success, code| {
        println!("  [host] unlock event: success={success} code={code}");
    });
    view.resize(300.0, 300.0, Insets::ZERO).expect("valid surface");

    // Drag 1 -> 2 -> 3 -> 5, the configured secret.
    view.on_pointer_down(50.0, 50.0);
    paint(&view, "down on dot 1");
    for (x, y) in [(150.0, 50.0), (250.0, 50.0), (150.0, 150.0)] {
        view.on_pointer_move(x, y);
    }
    paint(&view, "after moves");
    view.on_pointer_up();
    paint(&view, "released");

    // The "timer" fires.
    let token = scheduler.pending.lock().unwrap().take().expect("armed");
    view.on_reset_elapsed(token);
    paint(&view, "after reset");
}
