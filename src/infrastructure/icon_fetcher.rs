//! ThreadedIconFetcher - Background icon lookups on a single worker thread
//!
//! Requests are queued from the UI thread and served in order by one worker.
//! Finished lookups go back over a channel; the UI thread drains it with
//! [`ThreadedIconFetcher::process_results`] and hands each result to the
//! controller that owns the ticket. Results never touch history from the
//! worker thread.
//!
//! Each controller gets its own [`IconFetcherHandle`], so clearing the queue
//! for one tab leaves other tabs' requests alone.

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, error, trace};
use parking_lot::{Condvar, Mutex};

use crate::application::ports::{IconFetcher, IconResult};
use crate::domain::value_objects::{EntryTicket, ShellLocation};

/// Looks up the icon for a location. Runs on the worker thread.
pub trait IconSource: Send + 'static {
    fn icon_index(&mut self, location: &ShellLocation) -> Option<i32>;
}

impl<F> IconSource for F
where
    F: FnMut(&ShellLocation) -> Option<i32> + Send + 'static,
{
    fn icon_index(&mut self, location: &ShellLocation) -> Option<i32> {
        self(location)
    }
}

struct Job {
    owner: u64,
    location: ShellLocation,
    ticket: EntryTicket,
}

#[derive(Default)]
struct Queue {
    jobs: VecDeque<Job>,
    shutdown: bool,
}

#[derive(Default)]
struct Shared {
    queue: Mutex<Queue>,
    available: Condvar,
    next_owner: AtomicU64,
}

/// Queues lookups on behalf of one owner (usually one tab)
#[derive(Clone)]
pub struct IconFetcherHandle {
    shared: Arc<Shared>,
    owner: u64,
}

impl IconFetcherHandle {
    /// Number of lookups waiting for this owner
    pub fn pending(&self) -> usize {
        self.shared
            .queue
            .lock()
            .jobs
            .iter()
            .filter(|job| job.owner == self.owner)
            .count()
    }
}

impl IconFetcher for IconFetcherHandle {
    fn queue_icon_task(&self, location: &ShellLocation, ticket: EntryTicket) {
        let mut queue = self.shared.queue.lock();
        if queue.shutdown {
            return;
        }

        queue.jobs.push_back(Job {
            owner: self.owner,
            location: location.clone(),
            ticket,
        });
        self.shared.available.notify_one();
    }

    fn clear_queue(&self) {
        let mut queue = self.shared.queue.lock();
        let before = queue.jobs.len();
        queue.jobs.retain(|job| job.owner != self.owner);
        debug!("Cleared {} queued icon lookups", before - queue.jobs.len());
    }
}

/// Owns the worker thread and the result channel
pub struct ThreadedIconFetcher {
    shared: Arc<Shared>,
    results: Receiver<IconResult>,
    worker: Option<JoinHandle<()>>,
}

impl ThreadedIconFetcher {
    pub fn new(source: impl IconSource) -> io::Result<Self> {
        Self::spawn(source, None)
    }

    /// Fetcher that calls `wake` after each result is posted, so an event
    /// loop can schedule a call to `process_results`
    pub fn with_wake(source: impl IconSource, wake: impl Fn() + Send + 'static) -> io::Result<Self> {
        Self::spawn(source, Some(Box::new(wake)))
    }

    fn spawn(source: impl IconSource, wake: Option<Box<dyn Fn() + Send>>) -> io::Result<Self> {
        let shared = Arc::new(Shared::default());
        let (result_tx, result_rx) = channel();

        let worker_shared = Arc::clone(&shared);
        let worker = thread::Builder::new()
            .name("icon-fetcher".to_string())
            .spawn(move || run_worker(worker_shared, source, result_tx, wake))?;

        Ok(Self {
            shared,
            results: result_rx,
            worker: Some(worker),
        })
    }

    /// A new handle with its own queue ownership
    pub fn handle(&self) -> IconFetcherHandle {
        IconFetcherHandle {
            shared: Arc::clone(&self.shared),
            owner: self.shared.next_owner.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Drain finished lookups without blocking
    pub fn process_results(&self) -> Vec<IconResult> {
        self.results.try_iter().collect()
    }

    /// Block until one result arrives or `timeout` passes
    pub fn wait_for_result(&self, timeout: Duration) -> Option<IconResult> {
        match self.results.recv_timeout(timeout) {
            Ok(result) => Some(result),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Stop the worker. Queued lookups are dropped; a running one finishes.
    pub fn shutdown(&mut self) {
        {
            let mut queue = self.shared.queue.lock();
            queue.shutdown = true;
            queue.jobs.clear();
        }
        self.shared.available.notify_all();

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("Icon fetcher worker panicked");
            }
        }
    }
}

impl Drop for ThreadedIconFetcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_worker(
    shared: Arc<Shared>,
    mut source: impl IconSource,
    results: Sender<IconResult>,
    wake: Option<Box<dyn Fn() + Send>>,
) {
    debug!("Icon fetcher worker started");

    loop {
        let job = {
            let mut queue = shared.queue.lock();
            loop {
                if queue.shutdown {
                    debug!("Icon fetcher worker stopping");
                    return;
                }
                if let Some(job) = queue.jobs.pop_front() {
                    break job;
                }
                shared.available.wait(&mut queue);
            }
        };

        let Some(icon_index) = source.icon_index(&job.location) else {
            trace!("No icon for {}", job.location);
            continue;
        };

        let result = IconResult {
            ticket: job.ticket,
            icon_index,
        };
        if results.send(result).is_err() {
            return;
        }
        if let Some(wake) = &wake {
            wake();
        }
    }
}
