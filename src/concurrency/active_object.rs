// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! One thread, one queue, one handler — jobs are processed strictly in FIFO order.

use super::queue::BlockingQueue;
use std::sync::Arc;
use std::thread;

/// A running Active Object: a detached worker thread draining `queue` through `handler`,
/// one job at a time, for the lifetime of the process.
///
/// Dropping an `ActiveObject` does not stop its thread — per §4.10, these are created at
/// startup and never joined. Keeping the handle around only lets callers `submit` more
/// work.
pub struct ActiveObject<J> {
    queue: Arc<BlockingQueue<J>>,
}

impl<J: Send + 'static> ActiveObject<J> {
    /// Spawns the worker thread and returns a handle that can submit jobs to it.
    pub fn spawn<H>(thread_name: &str, handler: H) -> Self
    where
        H: Fn(J) + Send + 'static,
    {
        let queue = Arc::new(BlockingQueue::new());
        let worker_queue = Arc::clone(&queue);
        thread::Builder::new()
            .name(thread_name.to_string())
            .spawn(move || loop {
                let job = worker_queue.pop();
                handler(job);
            })
            .expect("failed to spawn active object worker thread");

        Self { queue }
    }

    /// Enqueues a job for the worker thread to process in FIFO order.
    pub fn submit(&self, job: J) {
        self.queue.push(job);
    }
}
