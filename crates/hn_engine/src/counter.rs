use std::sync::atomic::{AtomicI64, Ordering};

/// Countdown signal shared by the pool's workers.
///
/// Starts at a target and is done once it reaches zero or below. The pool
/// keeps two: stories still needed, and workers still running.
#[derive(Debug)]
pub struct Countdown {
    remaining: AtomicI64,
}

impl Countdown {
    pub fn new(start: usize) -> Self {
        Self {
            remaining: AtomicI64::new(i64::try_from(start).unwrap_or(i64::MAX)),
        }
    }

    /// Count down by one. Returns `true` for exactly one caller: the one
    /// whose decrement made the countdown done.
    pub fn decrement(&self) -> bool {
        self.remaining.fetch_sub(1, Ordering::AcqRel) == 1
    }

    pub fn is_done(&self) -> bool {
        self.remaining() <= 0
    }

    pub fn remaining(&self) -> i64 {
        self.remaining.load(Ordering::Acquire)
    }
}
