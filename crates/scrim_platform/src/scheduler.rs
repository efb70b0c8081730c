//! Deferred execution on the UI thread
//!
//! Some hosts slow down noticeably when root overflow is mutated
//! synchronously from an event callback, so the lock controller defers
//! those writes by one scheduling tick. [`UiScheduler`] is the seam the
//! host supplies for that; [`TaskQueue`] is a ready-made implementation
//! for hosts that pump a frame loop.

use std::cell::RefCell;
use std::rc::Rc;

/// A deferred unit of work
pub type UiTask = Box<dyn FnOnce()>;

/// Schedules work onto the next UI tick
///
/// Deferral is fire-and-forget: tasks cannot be cancelled or awaited, and
/// there is no ordering guarantee relative to other work deferred for the
/// same tick.
pub trait UiScheduler {
    /// Run `task` on the next UI tick
    fn defer(&self, task: UiTask);
}

/// Shared handle to the host scheduler
///
/// Uses Rc since UI is single-threaded.
pub type SharedUiScheduler = Rc<dyn UiScheduler>;

/// A host-pumped task queue
///
/// `defer` enqueues; the host calls [`TaskQueue::run_pending`] once per
/// tick to drain the current batch. Tasks deferred while draining land in
/// the next batch, preserving next-tick semantics for re-entrant deferral.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use scrim_platform::{TaskQueue, UiScheduler};
///
/// let queue = Rc::new(TaskQueue::new());
/// queue.defer(Box::new(|| println!("next tick")));
/// assert_eq!(queue.run_pending(), 1);
/// ```
#[derive(Default)]
pub struct TaskQueue {
    pending: RefCell<Vec<UiTask>>,
}

impl TaskQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks waiting for the next tick
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Drain and run the current batch
    ///
    /// Returns how many tasks ran. Tasks that `defer` more work during the
    /// drain are left queued for the following tick.
    pub fn run_pending(&self) -> usize {
        let batch = std::mem::take(&mut *self.pending.borrow_mut());
        let count = batch.len();
        for task in batch {
            task();
        }
        count
    }
}

impl UiScheduler for TaskQueue {
    fn defer(&self, task: UiTask) {
        self.pending.borrow_mut().push(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_defer_then_drain() {
        let queue = TaskQueue::new();
        let ran = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let ran = Rc::clone(&ran);
            queue.defer(Box::new(move || ran.set(ran.get() + 1)));
        }

        assert_eq!(queue.pending_count(), 3);
        assert_eq!(queue.run_pending(), 3);
        assert_eq!(ran.get(), 3);
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn test_reentrant_defer_lands_in_next_batch() {
        let queue = Rc::new(TaskQueue::new());
        let ran = Rc::new(Cell::new(false));

        let inner_queue = Rc::clone(&queue);
        let inner_ran = Rc::clone(&ran);
        queue.defer(Box::new(move || {
            let inner_ran = Rc::clone(&inner_ran);
            inner_queue.defer(Box::new(move || inner_ran.set(true)));
        }));

        // First drain runs only the outer task
        assert_eq!(queue.run_pending(), 1);
        assert!(!ran.get());
        assert_eq!(queue.pending_count(), 1);

        // Second drain runs the re-deferred task
        assert_eq!(queue.run_pending(), 1);
        assert!(ran.get());
    }

    #[test]
    fn test_drain_on_empty_queue() {
        let queue = TaskQueue::new();
        assert_eq!(queue.run_pending(), 0);
    }
}
