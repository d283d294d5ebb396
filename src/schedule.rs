use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::{Duration, Instant};

type TimerCallback = Arc<dyn Fn() + Send + Sync>;

struct Registration {
    generation: u64,
    interval: Duration,
    callback: TimerCallback,
}

struct State {
    // (deadline, key, generation); generation mismatches mark heap entries
    // left over from a replaced registration.
    heap: BinaryHeap<Reverse<(Instant, &'static str, u64)>>,
    registrations: HashMap<&'static str, Registration>,
    next_generation: u64,
}

struct Inner {
    state: Mutex<State>,
    condvar: Condvar,
}

/// Keyed repeating timers serviced by a single background thread. At most one
/// registration lives per key; registering again replaces the previous one.
/// Fires are inexact: a callback that runs long pushes later fires back.
#[derive(Clone)]
pub struct RefreshScheduler {
    inner: Arc<Inner>,
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshScheduler {
    pub fn new() -> Self {
        let inner = Arc::new(Inner {
            state: Mutex::new(State {
                heap: BinaryHeap::new(),
                registrations: HashMap::new(),
                next_generation: 1,
            }),
            condvar: Condvar::new(),
        });
        let thread_inner = inner.clone();
        thread::spawn(move || Self::run(thread_inner));
        Self { inner }
    }

    /// Register `callback` to fire after `delay` and every `interval`
    /// thereafter. An existing registration under `key` is replaced; its
    /// queued deadline is discarded when it surfaces.
    pub fn register_repeating(
        &self,
        key: &'static str,
        delay: Duration,
        interval: Duration,
        callback: impl Fn() + Send + Sync + 'static,
    ) {
        let mut state = self.inner.state.lock().unwrap();
        let generation = state.next_generation;
        state.next_generation += 1;
        state.registrations.insert(
            key,
            Registration {
                generation,
                interval,
                callback: Arc::new(callback),
            },
        );
        state.heap.push(Reverse((Instant::now() + delay, key, generation)));
        self.inner.condvar.notify_one();
    }

    /// Keys of the currently live registrations.
    pub fn active_keys(&self) -> Vec<&'static str> {
        self.inner
            .state
            .lock()
            .unwrap()
            .registrations
            .keys()
            .copied()
            .collect()
    }

    /// Interval of the live registration under `key`, if any.
    pub fn interval_for(&self, key: &str) -> Option<Duration> {
        self.inner
            .state
            .lock()
            .unwrap()
            .registrations
            .get(key)
            .map(|r| r.interval)
    }

    fn run(inner: Arc<Inner>) {
        let mut state = inner.state.lock().unwrap();
        loop {
            while state.heap.peek().is_none() {
                state = inner.condvar.wait(state).unwrap();
            }
            let now = Instant::now();
            if let Some(Reverse((deadline, key, generation))) = state.heap.peek().copied() {
                if deadline <= now {
                    state.heap.pop();
                    let fire = match state.registrations.get(key) {
                        Some(reg) if reg.generation == generation => {
                            let next = now + reg.interval;
                            let callback = reg.callback.clone();
                            state.heap.push(Reverse((next, key, generation)));
                            Some(callback)
                        }
                        // Stale entry from a replaced registration.
                        _ => None,
                    };
                    if let Some(callback) = fire {
                        drop(state);
                        callback();
                        state = inner.state.lock().unwrap();
                    }
                } else {
                    let wait = deadline.saturating_duration_since(now);
                    let res = inner.condvar.wait_timeout(state, wait).unwrap();
                    state = res.0;
                }
            }
        }
    }
}
