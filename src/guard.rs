//! Submission Guard
//!
//! Only the newest submission may touch the page. Each submit takes a
//! ticket; an older chain notices it was superseded at its next await point
//! and stops without writing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct SubmissionGuard {
    latest: Arc<AtomicU64>,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submission, superseding any in flight
    pub fn begin(&self) -> Ticket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            id,
            latest: Arc::clone(&self.latest),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Ticket {
    id: u64,
    latest: Arc<AtomicU64>,
}

impl Ticket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_ticket_wins() {
        let guard = SubmissionGuard::new();
        let first = guard.begin();
        assert!(first.is_current());

        let second = guard.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.id() > first.id());
    }

    #[test]
    fn test_clones_share_sequence() {
        let guard = SubmissionGuard::new();
        let ticket = guard.begin();
        guard.clone().begin();
        assert!(!ticket.is_current());
    }
}
