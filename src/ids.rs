use std::sync::atomic::{AtomicU64, Ordering};

/// Source of opaque record identifiers shared by the user and product stores.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Monotonic counter plus a random suffix, e.g. `1a-9f04c2e1`.
///
/// The counter alone guarantees uniqueness for the life of the process; the
/// suffix keeps callers from reading any order into the id.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let suffix: u32 = rand::random();
        format!("{:x}-{:08x}", n, suffix)
    }
}
