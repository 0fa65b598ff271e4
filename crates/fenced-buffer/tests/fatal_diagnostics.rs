//! Bounds violations and allocation failures under the default (abort)
//! policy. Each test re-runs itself in a child process, performs the fatal
//! operation there, and checks the child's exit status and stderr.

use fenced_buffer::{at, at_mut, BoundedBuffer, OwnedBuffer};
use fenced_test_utils::fatal_child;

#[test]
fn overflow_aborts_with_range() {
    if fatal_child::is_child("overflow_aborts_with_range") {
        let buf: OwnedBuffer<i32> = BoundedBuffer::new(3);
        let _value = at!(buf, 3);
        unreachable!("access past the end returned");
    }
    let outcome = fatal_child::run("overflow_aborts_with_range");
    outcome.assert_bounds_abort(3, 3);
    assert!(outcome.stderr.contains("index [3] is out of range [0-2]"));
}

#[test]
fn empty_buffer_aborts_on_any_index() {
    if fatal_child::is_child("empty_buffer_aborts_on_any_index") {
        let mut buf: OwnedBuffer<u64> = BoundedBuffer::new(0);
        *at_mut!(buf, 0) = 1;
        unreachable!("access into empty buffer returned");
    }
    let outcome = fatal_child::run("empty_buffer_aborts_on_any_index");
    outcome.assert_bounds_abort(0, 0);
    assert!(outcome.stderr.contains("(buffer is empty)"));
}

#[test]
fn negative_index_aborts_like_overflow() {
    if fatal_child::is_child("negative_index_aborts_like_overflow") {
        let buf: OwnedBuffer<i32> = BoundedBuffer::new(4);
        let _value = at!(buf, -1);
        unreachable!("negative access returned");
    }
    let outcome = fatal_child::run("negative_index_aborts_like_overflow");
    outcome.assert_bounds_abort(-1, 4);
}

#[test]
fn macro_diagnostic_names_file_and_function() {
    if fatal_child::is_child("macro_diagnostic_names_file_and_function") {
        let buf: OwnedBuffer<i32> = BoundedBuffer::new(2);
        let _value = at!(buf, 7);
        unreachable!();
    }
    let outcome = fatal_child::run("macro_diagnostic_names_file_and_function");
    outcome.assert_bounds_abort(7, 2);
    assert!(outcome.stderr.contains("fatal_diagnostics.rs:"));
    assert!(outcome
        .stderr
        .contains("function: fatal_diagnostics::macro_diagnostic_names_file_and_function"));
}

#[test]
fn operator_diagnostic_names_caller_function() {
    if fatal_child::is_child("operator_diagnostic_names_caller_function") {
        let buf: OwnedBuffer<i32> = BoundedBuffer::new(2);
        let _value = buf[2];
        unreachable!();
    }
    let outcome = fatal_child::run("operator_diagnostic_names_caller_function");
    outcome.assert_bounds_abort(2, 2);
    assert!(outcome.stderr.contains("fatal_diagnostics.rs:"));
    assert!(
        outcome
            .stderr
            .contains("function: fatal_diagnostics::operator_diagnostic_names_caller_function"),
        "{}",
        outcome.stderr
    );
}

#[test]
fn method_diagnostic_names_caller_function() {
    if fatal_child::is_child("method_diagnostic_names_caller_function") {
        let mut buf: OwnedBuffer<u8> = BoundedBuffer::new(4);
        buf.set(4, 1);
        unreachable!();
    }
    let outcome = fatal_child::run("method_diagnostic_names_caller_function");
    outcome.assert_bounds_abort(4, 4);
    assert!(
        outcome
            .stderr
            .contains("function: fatal_diagnostics::method_diagnostic_names_caller_function"),
        "{}",
        outcome.stderr
    );
}

#[test]
fn wrapped_region_violation_aborts() {
    if fatal_child::is_child("wrapped_region_violation_aborts") {
        let mut backing = [0u8; 10];
        let view = BoundedBuffer::wrap(&mut backing);
        let _value = view.get(10);
        unreachable!();
    }
    let outcome = fatal_child::run("wrapped_region_violation_aborts");
    outcome.assert_bounds_abort(10, 10);
}

#[test]
fn unrepresentable_allocation_aborts() {
    if fatal_child::is_child("unrepresentable_allocation_aborts") {
        let _buf: OwnedBuffer<u64> = BoundedBuffer::new(usize::MAX / 2);
        unreachable!("allocation of usize::MAX / 2 u64s succeeded");
    }
    let outcome = fatal_child::run("unrepresentable_allocation_aborts");
    assert!(outcome.aborted(), "{outcome:?}");
    assert!(outcome.stderr.contains("allocation failed"));
    assert!(outcome.stderr.contains("capacity overflow"));
    assert!(outcome.stderr.contains("fatal_diagnostics.rs:"));
    assert!(outcome
        .stderr
        .contains("function: fatal_diagnostics::unrepresentable_allocation_aborts"));
}
