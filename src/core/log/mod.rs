use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

static LOG_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Queue operation recorded by a log entry
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Op {
    Enqueue,
    Dequeue,
}

/// Outcome of a queue operation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum State {
    Committed, // enqueue applied to the container
    Delivered, // dequeue completed (item or empty)
    Failed,    // enqueue rejected before touching the container
}

/// Log entry recording an operation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry<T> {
    pub seq: u64,
    pub op: Op,
    pub item: Option<T>, // snapshot of the item, None for empty dequeues and rejections
    pub state: State,
}

impl<T: std::fmt::Debug> Display for LogEntry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogEntry {{ seq: {}, op: {:?}, item: {:?}, state: {:?} }}",
            self.seq, self.op, self.item, self.state,
        )
    }
}

/// Logger storing all entries for one shared queue
#[derive(Clone, Debug)]
pub struct Logger<T> {
    pub(crate) entries: Vec<LogEntry<T>>,
}

impl<T: Clone> Logger<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Log an operation
    pub fn log(&mut self, op: Op, item: Option<T>, state: State) {
        // --- Negative-space assertion: state must match operation ---
        match op {
            Op::Enqueue => assert!(
                matches!(state, State::Committed | State::Failed),
                "Enqueue must end Committed or Failed"
            ),
            Op::Dequeue => assert!(
                matches!(state, State::Delivered),
                "Dequeue must result in Delivered"
            ),
        }

        let seq = LOG_ID_COUNTER.fetch_add(1, Ordering::SeqCst);

        // --- Log entry insertion ---
        let before = self.entries.len();
        self.entries.push(LogEntry { seq, op, item, state });

        // --- Negative-space assertion: log length increased exactly by 1 ---
        assert_eq!(
            self.entries.len(),
            before + 1,
            "Logger must increase by exactly one entry"
        );
    }
}

/// Append entries to a file as NDJSON, one JSON object per line
pub fn append_logs<T: Serialize>(log: &Vec<LogEntry<T>>, path: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)?;

    for entry in log {
        let json = serde_json::to_string(entry)?;
        writeln!(file, "{}", json)?;
    }
    Ok(())
}

/// Thread-safe wrapper
pub type SafeLogger<T> = Arc<Mutex<Logger<T>>>;
