// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Leadership handoff coordinator for the acceptor pool: exactly one thread is ever the
//! leader blocked in `accept`.

use std::sync::{Condvar, Mutex};

/// Guards the "exactly one leader" invariant with a boolean under a mutex/condvar, per
/// §4.11. A worker calls [`LeaderFollower::become_leader`] before `accept`ing, and
/// [`LeaderFollower::resign_leadership`] immediately after — whether `accept` succeeded
/// or failed — so the next follower can take over before this thread does any
/// potentially long parsing or dispatch work.
pub struct LeaderFollower {
    leader_present: Mutex<bool>,
    leadership_changed: Condvar,
}

impl LeaderFollower {
    pub fn new() -> Self {
        Self {
            leader_present: Mutex::new(false),
            leadership_changed: Condvar::new(),
        }
    }

    /// Blocks until this thread may become leader, then marks leadership taken.
    pub fn become_leader(&self) {
        let mut leader_present = self.leader_present.lock().unwrap();
        while *leader_present {
            leader_present = self.leadership_changed.wait(leader_present).unwrap();
        }
        *leader_present = true;
    }

    /// Releases leadership and wakes one waiting follower.
    pub fn resign_leadership(&self) {
        let mut leader_present = self.leader_present.lock().unwrap();
        *leader_present = false;
        self.leadership_changed.notify_one();
    }
}

impl Default for LeaderFollower {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn only_one_thread_holds_leadership_at_a_time() {
        let coordinator = Arc::new(LeaderFollower::new());
        let concurrent_leaders = Arc::new(AtomicUsize::new(0));
        let max_observed = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let coordinator = Arc::clone(&coordinator);
                let concurrent_leaders = Arc::clone(&concurrent_leaders);
                let max_observed = Arc::clone(&max_observed);
                thread::spawn(move || {
                    for _ in 0..50 {
                        coordinator.become_leader();
                        let now = concurrent_leaders.fetch_add(1, Ordering::SeqCst) + 1;
                        max_observed.fetch_max(now, Ordering::SeqCst);
                        concurrent_leaders.fetch_sub(1, Ordering::SeqCst);
                        coordinator.resign_leadership();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(max_observed.load(Ordering::SeqCst), 1);
    }
}
