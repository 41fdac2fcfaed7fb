//! Shared fixtures: counting sources and a log capture.

use layer_rail::traits::Source;
use layer_rail::{LayeredError, Outcome};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A source that always answers the same way and counts its invocations.
pub struct Counting {
    name: &'static str,
    succeed_with: Option<&'static str>,
    calls: Arc<AtomicUsize>,
}

impl Counting {
    pub fn ok(name: &'static str, value: &'static str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (Self { name, succeed_with: Some(value), calls: calls.clone() }, calls)
    }

    pub fn failing(name: &'static str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (Self { name, succeed_with: None, calls: calls.clone() }, calls)
    }
}

impl Source<str> for Counting {
    type Output = String;

    fn fetch(&self, request: &str) -> Outcome<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.succeed_with {
            Some(value) => Outcome::success(format!("{value}:{request}")),
            None => Outcome::failure(LayeredError::source(self.name, format!("{} failed for {request}", self.name))),
        }
    }

    fn name(&self) -> &str {
        self.name
    }
}

pub fn calls(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}

/// In-memory writer for `tracing_subscriber::fmt`.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a subscriber writing every event at `DEBUG` and above into the returned capture.
pub fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, CapturedLogs) {
    with_captured_logs_at(tracing::Level::DEBUG, f)
}

/// Same as [`with_captured_logs`], keeping only events at `level` and above.
pub fn with_captured_logs_at<T>(level: tracing::Level, f: impl FnOnce() -> T) -> (T, CapturedLogs) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    (value, logs)
}
