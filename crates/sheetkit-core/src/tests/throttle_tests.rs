use super::*;
use crate::clock::ManualClock;
use std::cell::RefCell;
use std::rc::Rc;

fn recording_action(calls: &Rc<RefCell<Vec<u64>>>) -> impl FnMut(u64) {
    let calls = Rc::clone(calls);
    move |at| calls.borrow_mut().push(at)
}

#[test]
fn throttle_invokes_first_call_and_after_interval_only() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut throttled = throttle(recording_action(&calls), 1000);

    assert!(throttled.call_at(0, 0u64));
    assert!(!throttled.call_at(200, 200u64));
    assert!(throttled.call_at(1100, 1100u64));

    assert_eq!(*calls.borrow(), vec![0, 1100]);
}

#[test]
fn interval_is_measured_from_last_successful_invocation() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut throttled = throttle(recording_action(&calls), 100);

    for t in [0, 50, 99, 100, 150, 199, 201] {
        throttled.call_at(t, t);
    }

    // 150 and 199 are within 100ms of the run at 100; 201 is not.
    assert_eq!(*calls.borrow(), vec![0, 100, 201]);
    assert_eq!(throttled.last_invocation_ms(), Some(201));
}

#[test]
fn call_reads_the_injected_clock() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let clock = ManualClock::new(5_000);
    let mut throttled = Throttled::with_clock(recording_action(&calls), 1000, clock.clone());

    assert!(throttled.call(1u64));
    clock.advance(999);
    assert!(!throttled.call(2u64));
    clock.advance(1);
    assert!(throttled.call(3u64));

    assert_eq!(*calls.borrow(), vec![1, 3]);
}

#[test]
fn reset_allows_an_immediate_call() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut throttled = throttle(recording_action(&calls), 1000);

    throttled.call_at(10, 10u64);
    throttled.reset();
    assert!(throttled.call_at(20, 20u64));
    assert_eq!(*calls.borrow(), vec![10, 20]);
}

#[test]
fn clock_going_backwards_keeps_suppressing() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut throttled = throttle(recording_action(&calls), 1000);

    throttled.call_at(2_000, 1u64);
    assert!(!throttled.call_at(1_500, 2u64));
    assert_eq!(*calls.borrow(), vec![1]);
}
