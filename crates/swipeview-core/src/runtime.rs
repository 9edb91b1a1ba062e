use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::platform::{Clock, TickScheduler};
use crate::registration::TaskRegistration;

pub type TaskId = u64;

struct DelayedTask {
    id: TaskId,
    due_millis: u64,
    callback: Box<dyn FnOnce(u64) + 'static>,
}

struct RuntimeInner {
    scheduler: Rc<dyn TickScheduler>,
    clock: Rc<dyn Clock>,
    // Sorted by due time; tasks with equal due time keep posting order.
    tasks: RefCell<VecDeque<DelayedTask>>,
    next_task_id: Cell<TaskId>,
}

impl RuntimeInner {
    fn post_delayed(&self, delay_millis: u64, callback: Box<dyn FnOnce(u64) + 'static>) -> TaskId {
        let id = self.next_task_id.get();
        self.next_task_id.set(id + 1);
        let due_millis = self.clock.now_millis().saturating_add(delay_millis);
        {
            let mut tasks = self.tasks.borrow_mut();
            let index = tasks
                .iter()
                .position(|task| task.due_millis > due_millis)
                .unwrap_or(tasks.len());
            tasks.insert(
                index,
                DelayedTask {
                    id,
                    due_millis,
                    callback,
                },
            );
        }
        self.scheduler.schedule_tick();
        id
    }

    fn cancel_task(&self, id: TaskId) {
        let mut tasks = self.tasks.borrow_mut();
        if let Some(index) = tasks.iter().position(|task| task.id == id) {
            tasks.remove(index);
            log::trace!("cancelled task {id}");
        }
    }

    fn is_task_pending(&self, id: TaskId) -> bool {
        self.tasks.borrow().iter().any(|task| task.id == id)
    }

    fn run_due_tasks(&self) -> usize {
        let now = self.clock.now_millis();
        // Collect first: callbacks may post or cancel tasks. Work posted while
        // draining runs on the next call, never in this one.
        let due: Vec<DelayedTask> = {
            let mut tasks = self.tasks.borrow_mut();
            let split = tasks
                .iter()
                .position(|task| task.due_millis > now)
                .unwrap_or(tasks.len());
            tasks.drain(..split).collect()
        };
        let count = due.len();
        for task in due {
            (task.callback)(now);
        }
        count
    }
}

/// Owner of the task queue. Lives on the UI thread for the widget's lifetime.
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(scheduler: Rc<dyn TickScheduler>, clock: Rc<dyn Clock>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner {
                scheduler,
                clock,
                tasks: RefCell::new(VecDeque::new()),
                next_task_id: Cell::new(1),
            }),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn now_millis(&self) -> u64 {
        self.inner.clock.now_millis()
    }

    /// Runs every task whose due time has passed and returns how many ran.
    pub fn run_due_tasks(&self) -> usize {
        self.inner.run_due_tasks()
    }

    pub fn has_pending_tasks(&self) -> bool {
        !self.inner.tasks.borrow().is_empty()
    }

    pub fn pending_task_count(&self) -> usize {
        self.inner.tasks.borrow().len()
    }

    /// Due time of the earliest queued task, if any.
    pub fn next_deadline_millis(&self) -> Option<u64> {
        self.inner.tasks.borrow().front().map(|task| task.due_millis)
    }
}

/// Weak, cloneable access to a [`Runtime`].
///
/// Posting through a handle whose runtime is gone returns an inactive
/// registration and the callback is dropped.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn post(&self, callback: impl FnOnce(u64) + 'static) -> TaskRegistration {
        self.post_delayed(0, callback)
    }

    pub fn post_delayed(
        &self,
        delay_millis: u64,
        callback: impl FnOnce(u64) + 'static,
    ) -> TaskRegistration {
        match self.inner.upgrade() {
            Some(inner) => {
                let id = inner.post_delayed(delay_millis, Box::new(callback));
                TaskRegistration::new(self.clone(), id)
            }
            None => {
                log::debug!("runtime dropped; task not posted");
                TaskRegistration::inactive(self.clone())
            }
        }
    }

    pub fn cancel_task(&self, id: TaskId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_task(id);
        }
    }

    pub fn is_task_pending(&self, id: TaskId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.is_task_pending(id))
            .unwrap_or(false)
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl std::fmt::Debug for RuntimeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}
