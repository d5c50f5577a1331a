use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;

#[test]
fn new_switch_is_running() {
    assert!(PollSwitch::new().is_running());
}

#[test]
fn stop_turns_switch_off() {
    let switch = PollSwitch::default();
    switch.stop();
    assert!(!switch.is_running());
}

#[test]
fn clones_share_state() {
    let switch = PollSwitch::new();
    let handle = switch.clone();
    handle.stop();
    assert!(!switch.is_running());
}

#[test]
fn stop_is_idempotent() {
    let switch = PollSwitch::new();
    switch.stop();
    switch.stop();
    assert!(!switch.is_running());
}

// =============================================================
// poll_loop
// =============================================================

#[test]
fn first_tick_fires_before_any_sleep() {
    let switch = PollSwitch::new();
    let order = RefCell::new(Vec::new());
    let ticks = block_on(poll_loop(
        Duration::from_secs(5),
        &switch,
        |_| {
            order.borrow_mut().push("sleep");
            switch.stop();
            async {}
        },
        || order.borrow_mut().push("tick"),
    ));
    assert_eq!(ticks, 1);
    assert_eq!(*order.borrow(), ["tick", "sleep"]);
}

#[test]
fn ticks_once_per_interval_until_stopped() {
    let switch = PollSwitch::new();
    let sleeps = RefCell::new(Vec::new());
    let ticks = Cell::new(0);
    let fired = block_on(poll_loop(
        Duration::from_secs(5),
        &switch,
        |interval| {
            sleeps.borrow_mut().push(interval);
            if sleeps.borrow().len() == 3 {
                switch.stop();
            }
            async {}
        },
        || ticks.set(ticks.get() + 1),
    ));
    assert_eq!(fired, 3);
    assert_eq!(ticks.get(), 3);
    assert_eq!(*sleeps.borrow(), vec![Duration::from_secs(5); 3]);
}

#[test]
fn stopped_switch_never_ticks() {
    let switch = PollSwitch::new();
    switch.stop();
    let ticks = Cell::new(0);
    let fired = block_on(poll_loop(Duration::from_secs(5), &switch, |_| async {}, || ticks.set(ticks.get() + 1)));
    assert_eq!(fired, 0);
    assert_eq!(ticks.get(), 0);
}
