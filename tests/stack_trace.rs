// tests/stack_trace.rs

mod common;
use crate::common::builders::numbered_chain;

use gerror::{MAX_STACK_SIZE, StackTrace, TaggedError};

#[test]
fn captured_trace_is_bounded_and_non_empty() {
    let err = TaggedError::new("ErrTrace", "trace me");

    assert!(!err.stack_trace().is_empty());
    assert!(err.stack_trace().len() <= MAX_STACK_SIZE);
    assert_eq!(err.stack_trace().as_bytes().len(), err.stack_trace().len());
}

#[test]
fn deep_recursion_is_truncated_to_bound() {
    fn recurse(depth: usize) -> TaggedError {
        if depth == 0 {
            TaggedError::new("ErrDeep", "bottom of recursion")
        } else {
            let err = recurse(depth - 1);
            std::hint::black_box(err)
        }
    }

    let err = recurse(200);
    let len = err.stack_trace().len();
    assert!(len <= MAX_STACK_SIZE);
    // 200 frames render far past the bound, so the capture must have been cut.
    assert!(len > MAX_STACK_SIZE - 4, "trace of {len} bytes was not truncated");
}

#[test]
fn each_level_of_a_chain_has_its_own_trace() {
    let err = numbered_chain(2, "bottom");

    let mut traces = vec![err.stack_trace().clone()];
    let mut current = err.cause();
    while let Some(cause) = current {
        let tagged = cause
            .downcast_ref::<TaggedError>()
            .expect("chain levels are tagged");
        traces.push(tagged.stack_trace().clone());
        current = tagged.cause();
    }

    assert_eq!(traces.len(), 3);
    assert!(traces.iter().all(|t| !t.is_empty() && t.len() <= MAX_STACK_SIZE));
}

#[test]
fn from_text_keeps_short_traces_verbatim() {
    let trace = StackTrace::from_text("0: main\n1: start");

    assert_eq!(trace.as_str(), "0: main\n1: start");
    assert_eq!(trace.to_string(), "0: main\n1: start");
}

#[test]
fn from_text_truncates_long_traces() {
    let trace = StackTrace::from_text("x".repeat(MAX_STACK_SIZE * 2));

    assert_eq!(trace.len(), MAX_STACK_SIZE);
}

#[test]
fn truncation_respects_char_boundaries() {
    // 'é' is two bytes; one leading ASCII byte pushes every boundary to an odd offset.
    let text = format!("a{}", "é".repeat(MAX_STACK_SIZE));
    let trace = StackTrace::from_text(text);

    assert_eq!(trace.len(), MAX_STACK_SIZE - 1);
    assert!(trace.as_str().ends_with('é'));
}

#[test]
fn empty_text_stays_empty() {
    let trace = StackTrace::from_text(String::new());

    assert!(trace.is_empty());
    assert_eq!(format!("{trace:?}"), "StackTrace { len: 0 }");
}
