//! One-shot delayed tasks
//!
//! A `Scheduler` owns one timer thread holding a deadline-ordered heap and
//! one worker thread that runs due tasks in firing order. Both threads are
//! started by the first `schedule` call and exit once the scheduler is
//! dropped; tasks that have not fired by then are cancelled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::io;
use std::sync::mpsc::{channel, Sender};
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread;
use std::time::{Duration, Instant};

/// Deadline used when `now + delay` does not fit in an `Instant` (100 years)
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

type Job = Box<dyn FnOnce() + Send + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Waiting,
    Cancelled,
    Running,
    Finished,
}

#[derive(Debug)]
struct TaskState {
    phase: Mutex<Phase>,
    wake: Condvar,
}

impl TaskState {
    fn new() -> Self {
        Self {
            phase: Mutex::new(Phase::Waiting),
            wake: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Phase> {
        self.phase.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Move `from` to `to`; false if the task was in another phase
    fn transition(&self, from: Phase, to: Phase) -> bool {
        let mut phase = self.lock();
        if *phase != from {
            return false;
        }
        *phase = to;
        self.wake.notify_all();
        true
    }
}

/// Cancellation handle for a scheduled task
#[derive(Debug, Clone)]
pub struct TaskHandle {
    state: Arc<TaskState>,
    fire_at: Instant,
}

impl TaskHandle {
    /// Cancel the task if it has not started.
    ///
    /// Returns `true` when this call prevented the task from running.
    pub fn cancel(&self) -> bool {
        self.state.transition(Phase::Waiting, Phase::Cancelled)
    }

    /// Task ran to completion or was cancelled
    pub fn is_finished(&self) -> bool {
        matches!(*self.state.lock(), Phase::Finished | Phase::Cancelled)
    }

    pub fn fire_at(&self) -> Instant {
        self.fire_at
    }

    /// Block until the task finishes or is cancelled, up to `timeout`.
    ///
    /// Returns `false` on timeout.
    pub fn wait(&self, timeout: Duration) -> bool {
        let deadline = deadline_after(timeout);
        let mut phase = self.state.lock();
        while !matches!(*phase, Phase::Finished | Phase::Cancelled) {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            phase = self
                .state
                .wake
                .wait_timeout(phase, deadline - now)
                .unwrap_or_else(|e| e.into_inner())
                .0;
        }
        true
    }
}

/// `now + delay`, saturating at a far-future deadline instead of overflowing
fn deadline_after(delay: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(delay)
        .or_else(|| now.checked_add(FAR_FUTURE))
        .unwrap_or(now)
}

struct Entry {
    fire_at: Instant,
    seq: u64,
    state: Arc<TaskState>,
    job: Job,
}

// Reversed so that `BinaryHeap` pops the earliest deadline first; `seq`
// keeps tasks with equal deadlines in scheduling order.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .fire_at
            .cmp(&self.fire_at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at == other.fire_at && self.seq == other.seq
    }
}

impl Eq for Entry {}

#[derive(Default)]
struct Queue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
    started: bool,
    closed: bool,
}

#[derive(Default)]
struct Shared {
    queue: Mutex<Queue>,
    wake: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Queue> {
        self.queue.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Runs tasks once after a delay, using two threads however many are queued
#[derive(Default)]
pub struct Scheduler {
    shared: Arc<Shared>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` once after `delay`.
    ///
    /// Fails only if the background threads cannot be started.
    pub fn schedule<F>(&self, delay: Duration, task: F) -> io::Result<TaskHandle>
    where
        F: FnOnce() + Send + 'static,
    {
        let fire_at = deadline_after(delay);
        let state = Arc::new(TaskState::new());

        let mut queue = self.shared.lock();
        if !queue.started {
            self.start()?;
            queue.started = true;
        }
        let seq = queue.next_seq;
        queue.next_seq += 1;
        queue.heap.push(Entry {
            fire_at,
            seq,
            state: Arc::clone(&state),
            job: Box::new(task),
        });
        drop(queue);
        self.shared.wake.notify_all();

        Ok(TaskHandle { state, fire_at })
    }

    fn start(&self) -> io::Result<()> {
        let (worker_tx, worker_rx) = channel::<(Job, Arc<TaskState>)>();
        thread::Builder::new()
            .name("mirror-copy".to_string())
            .spawn(move || {
                for (job, state) in worker_rx {
                    job();
                    state.transition(Phase::Running, Phase::Finished);
                }
            })?;

        let shared = Arc::clone(&self.shared);
        thread::Builder::new()
            .name("mirror-timer".to_string())
            .spawn(move || run_timer(&shared, &worker_tx))?;
        Ok(())
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        let mut queue = self.shared.lock();
        queue.closed = true;
        for entry in queue.heap.drain() {
            entry.state.transition(Phase::Waiting, Phase::Cancelled);
        }
        drop(queue);
        self.shared.wake.notify_all();
    }
}

/// Hand due tasks to the worker, then sleep until the next deadline
fn run_timer(shared: &Shared, worker: &Sender<(Job, Arc<TaskState>)>) {
    let mut queue = shared.lock();
    loop {
        if queue.closed {
            return;
        }

        let now = Instant::now();
        while queue.heap.peek().is_some_and(|entry| entry.fire_at <= now) {
            let Some(Entry { state, job, .. }) = queue.heap.pop() else {
                break;
            };
            if !state.transition(Phase::Waiting, Phase::Running) {
                continue;
            }
            if let Err(returned) = worker.send((job, state)) {
                let (_, state) = returned.0;
                state.transition(Phase::Running, Phase::Cancelled);
            }
        }

        let next = queue.heap.peek().map(|entry| entry.fire_at);
        queue = match next {
            Some(fire_at) => {
                shared
                    .wake
                    .wait_timeout(queue, fire_at.saturating_duration_since(now))
                    .unwrap_or_else(|e| e.into_inner())
                    .0
            }
            None => shared.wake.wait(queue).unwrap_or_else(|e| e.into_inner()),
        };
    }
}
