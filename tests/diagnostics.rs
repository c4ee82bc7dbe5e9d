// tests/diagnostics.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use ddcci_bridge::diag::mock::MemorySink;
use ddcci_bridge::diag::{Diagnostics, strip_trailing_newline};

#[test]
fn log_writes_prefixed_message_when_enabled() {
    let sink = MemorySink::new();
    let diag = Diagnostics::with_flag(true, Arc::new(sink.clone()));

    diag.log("hello");

    assert_eq!(sink.lines(), vec!["LOGGING: hello".to_string()]);
}

#[test]
fn log_is_a_noop_when_disabled() {
    let sink = MemorySink::new();
    let diag = Diagnostics::with_flag(false, Arc::new(sink.clone()));

    diag.log("hello");
    diag.log("");
    diag.log("multi\nline\n");

    assert!(sink.lines().is_empty());
}

#[test]
fn flag_is_read_on_every_call() {
    let flag = Arc::new(AtomicBool::new(false));
    let sink = MemorySink::new();

    let accessor = {
        let flag = Arc::clone(&flag);
        Arc::new(move || flag.load(Ordering::SeqCst)) as Arc<dyn Fn() -> bool + Send + Sync>
    };
    let diag = Diagnostics::new(accessor, Arc::new(sink.clone()));

    diag.log("dropped");
    flag.store(true, Ordering::SeqCst);
    diag.log("kept");

    assert_eq!(sink.lines(), vec!["LOGGING: kept".to_string()]);
}

#[test]
fn strip_trailing_newline_removes_exactly_one() {
    assert_eq!(strip_trailing_newline("abc\n"), "abc");
    assert_eq!(strip_trailing_newline("abc\n\n"), "abc\n");
    assert_eq!(strip_trailing_newline("abc"), "abc");
}

#[test]
fn strip_trailing_newline_leaves_interior_newlines() {
    assert_eq!(strip_trailing_newline("a\nb\n"), "a\nb");
    assert_eq!(strip_trailing_newline("a\nb"), "a\nb");
    assert_eq!(strip_trailing_newline(""), "");
    assert_eq!(strip_trailing_newline("\n"), "");
    assert_eq!(strip_trailing_newline("\n\n"), "\n");
}
