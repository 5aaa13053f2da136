//! Debounce
//!
//! Defers an action until input has been quiet for a fixed window.
//! Each call replaces the pending timer, so only the last call fires.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Timer source. Dropping a handle cancels its task.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setTimeout`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

pub struct Debouncer<T, S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    action: Rc<dyn Fn(T)>,
    pending: RefCell<Option<S::Handle>>,
}

impl<T: 'static, S: Scheduler> Debouncer<T, S> {
    pub fn new(scheduler: S, delay_ms: u32, action: impl Fn(T) + 'static) -> Self {
        Self {
            scheduler,
            delay_ms,
            action: Rc::new(action),
            pending: RefCell::new(None),
        }
    }

    /// Schedule `value`, superseding any call still waiting
    pub fn call(&self, value: T) {
        let action = self.action.clone();
        let handle = self
            .scheduler
            .schedule(self.delay_ms, Box::new(move || action(value)));
        // Replacing drops (and cancels) the previous timer
        self.pending.replace(Some(handle));
    }

    /// Drop the pending call, if any
    pub fn cancel(&self) {
        self.pending.replace(None);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Virtual clock for driving schedulers in tests

    use super::Scheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Task {
        id: u64,
        due: u64,
        run: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        tasks: Vec<Task>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    pub struct ManualHandle {
        id: u64,
        clock: Rc<RefCell<Clock>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.clock.borrow_mut().tasks.retain(|t| t.id != self.id);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + u64::from(delay_ms);
            clock.tasks.push(Task { id, due, run: task });
            ManualHandle { id, clock: self.clock.clone() }
        }
    }

    impl ManualScheduler {
        /// Move time forward, running every task that falls due
        pub fn advance(&self, ms: u64) {
            let target = self.clock.borrow().now + ms;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let due_index = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due <= target)
                        .min_by_key(|(_, t)| (t.due, t.id))
                        .map(|(i, _)| i);
                    due_index.map(|i| {
                        let task = clock.tasks.remove(i);
                        clock.now = task.due;
                        task
                    })
                };
                match next {
                    Some(task) => (task.run)(),
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }

        pub fn pending(&self) -> usize {
            self.clock.borrow().tasks.len()
        }
    }
}
