//! Running measurements on the primary thread.
//!
//! Some content can only be measured on the thread that owns the rendering
//! engine. A [`PrimaryQueue`] lives on that thread and runs jobs when it is
//! drained; any other thread holding a [`PrimaryHandle`] can submit a job and
//! block until its result comes back. A job submitted from the primary thread
//! itself runs inline, so the primary thread never waits on its own queue.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, ThreadId};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Failure to hand a job to the primary thread.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RendezvousError {
    /// The primary queue was dropped before the job ran.
    #[error("primary thread queue is no longer accepting work")]
    Disconnected,
}

/// Job queue owned by the primary thread.
///
/// Must be drained on the thread that created it; handles compare against
/// that thread to decide whether to run inline.
pub struct PrimaryQueue {
    thread: ThreadId,
    sender: Sender<Job>,
    receiver: Receiver<Job>,
}

impl PrimaryQueue {
    /// Create a queue bound to the calling thread.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            thread: thread::current().id(),
            sender,
            receiver,
        }
    }

    /// A handle other threads can submit work through.
    pub fn handle(&self) -> PrimaryHandle {
        PrimaryHandle {
            thread: self.thread,
            sender: self.sender.clone(),
        }
    }

    /// Run every job queued so far. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            match self.receiver.try_recv() {
                Ok(job) => {
                    job();
                    ran += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        if ran > 0 {
            debug!(jobs = ran, "ran primary thread jobs");
        }
        ran
    }

    /// Wait up to `timeout` for a job, then run it and everything queued
    /// behind it. Returns how many ran.
    pub fn run_next(&self, timeout: Duration) -> usize {
        match self.receiver.recv_timeout(timeout) {
            Ok(job) => {
                job();
                1 + self.run_pending()
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => 0,
        }
    }
}

impl Default for PrimaryQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable, sendable handle to a [`PrimaryQueue`].
#[derive(Clone)]
pub struct PrimaryHandle {
    thread: ThreadId,
    sender: Sender<Job>,
}

impl PrimaryHandle {
    /// True when called on the queue's thread.
    pub fn is_primary_thread(&self) -> bool {
        thread::current().id() == self.thread
    }

    /// Run `f` on the primary thread and return its result.
    ///
    /// Runs inline when already on the primary thread. Otherwise blocks until
    /// the primary thread drains its queue. Cannot be cancelled.
    ///
    /// # Errors
    ///
    /// [`RendezvousError::Disconnected`] when the queue is dropped before the
    /// job runs.
    pub fn run_sync<R, F>(&self, f: F) -> Result<R, RendezvousError>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        if self.is_primary_thread() {
            return Ok(f());
        }

        let (reply_tx, reply_rx) = mpsc::channel();
        let job: Job = Box::new(move || {
            // The caller may have gone away; nothing to report to then.
            let _ = reply_tx.send(f());
        });
        self.sender
            .send(job)
            .map_err(|_| RendezvousError::Disconnected)?;
        reply_rx.recv().map_err(|_| RendezvousError::Disconnected)
    }
}
