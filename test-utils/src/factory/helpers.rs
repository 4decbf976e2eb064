use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Returns a process-wide unique number for default field values.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Base of the individual Steam ID range.
pub const STEAM_ID_BASE: u64 = 76_561_197_960_265_728;
