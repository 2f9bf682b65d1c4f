//! Concurrency tests for shared sinks
//!
//! These tests verify:
//! - Records written from many threads never interleave
//! - Derived handlers on different threads share one sink safely
//! - No records are lost under concurrent load

use rust_log_renderer::prelude::*;
use rust_log_renderer::attrs;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const RECORDS_PER_THREAD: usize = 500;

#[test]
fn test_concurrent_records_do_not_interleave() {
    let sink = MemorySink::new();
    let handler = Handler::new(
        sink.clone(),
        HandlerOptions::default().with_template("{{.Level}} {{.Message}}"),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let handler = handler.with_attrs(attrs!["thread" => t]);
            thread::spawn(move || {
                for i in 0..RECORDS_PER_THREAD {
                    handler
                        .handle(&Record::new(LogLevel::Info, "tick").attr("seq", i))
                        .expect("write to memory sink");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    let content = sink.contents();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * RECORDS_PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        let parts: Vec<&str> = line.split(' ').collect();
        assert_eq!(parts.len(), 4, "interleaved line: {line:?}");
        assert_eq!(parts[0], "INFO");
        assert_eq!(parts[1], "tick");
        assert!(parts[2].starts_with("thread="));
        assert!(parts[3].starts_with("seq="));
        assert!(seen.insert(line.to_string()), "duplicate line: {line:?}");
    }
}

#[test]
fn test_multiline_records_stay_contiguous() {
    let sink = MemorySink::new();
    let handler = Arc::new(Handler::new(
        sink.clone(),
        HandlerOptions::default()
            .with_template("BEGIN {{.Message}}")
            .with_attr_format(AttrFormat::MultiLine),
    ));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let handler = Arc::clone(&handler);
            thread::spawn(move || {
                for _ in 0..100 {
                    let record = Record::new(LogLevel::Info, format!("t{}", t))
                        .attr("a", t)
                        .attr("b", t)
                        .attr("c", t);
                    handler.handle(&record).expect("write to memory sink");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    let content = sink.contents();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * 100 * 4);

    for chunk in lines.chunks(4) {
        let t = chunk[0].strip_prefix("BEGIN t").expect("record header first");
        assert_eq!(chunk[1], format!("a={}", t));
        assert_eq!(chunk[2], format!("b={}", t));
        assert_eq!(chunk[3], format!("c={}", t));
    }
}

#[test]
fn test_concurrent_derivation_leaves_root_untouched() {
    let sink = MemorySink::new();
    let root = Handler::new(
        sink.clone(),
        HandlerOptions::default().with_template("{{.Message}}"),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let root = root.clone();
            thread::spawn(move || {
                let mut derived = root.with_group(format!("g{}", t));
                for i in 0..50 {
                    derived = derived.with_attrs(attrs!["i" => i]);
                }
                derived.attrs().len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("derivation thread panicked"), 50);
    }

    assert!(root.attrs().is_empty());
    assert_eq!(root.group(), None);
    assert!(sink.is_empty());
}
