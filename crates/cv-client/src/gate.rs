//! Stale-response guard.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

/// High-water mark over dispatch sequence numbers.
///
/// A user can fire a second request before the first resolves; without a
/// guard the slower reply would overwrite the newer result. `accept`
/// returns true only for sequence numbers above everything seen so far, so
/// exactly the freshest reply gets rendered. The gate lives with whoever
/// renders: pair it with [`crate::DispatchReply::seq`] wherever requests
/// can overlap.
///
/// ```
/// use cv_client::ResponseGate;
///
/// let gate = ResponseGate::new();
/// // requests 1 and 2 in flight; 2 resolves first
/// assert!(gate.accept(2)); // render
/// assert!(!gate.accept(1)); // drop, a newer reply already landed
/// ```
#[derive(Debug, Default)]
pub struct ResponseGate {
    latest: AtomicU64,
}

impl ResponseGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&self, seq: u64) -> bool {
        let prev = self.latest.fetch_max(seq, Ordering::AcqRel);
        let fresh = seq > prev;
        if !fresh {
            debug!(seq, latest = prev, "discarding stale cycle response");
        }
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_increasing_sequences() {
        let gate = ResponseGate::new();
        assert!(gate.accept(1));
        assert!(gate.accept(2));
        assert!(gate.accept(3));
    }

    #[test]
    fn rejects_stale_and_duplicate_sequences() {
        let gate = ResponseGate::new();
        assert!(gate.accept(2));
        assert!(!gate.accept(1));
        assert!(!gate.accept(2));
        assert!(gate.accept(5));
        assert!(!gate.accept(4));
    }

    #[test]
    fn interleaved_replies_keep_only_the_freshest() {
        let gate = ResponseGate::new();
        // requests 1..=3 in flight; replies land 3, 1, 2
        assert!(gate.accept(3));
        assert!(!gate.accept(1));
        assert!(!gate.accept(2));
    }
}
