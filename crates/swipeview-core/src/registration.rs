use crate::runtime::{RuntimeHandle, TaskId};

/// Handle to a queued task.
///
/// Dropping the registration cancels the task if it has not run yet, so
/// owners keep it alive for as long as the work should stay scheduled.
#[must_use = "dropping a TaskRegistration cancels the task"]
pub struct TaskRegistration {
    runtime: RuntimeHandle,
    id: Option<TaskId>,
}

impl TaskRegistration {
    pub(crate) fn new(runtime: RuntimeHandle, id: TaskId) -> Self {
        Self {
            runtime,
            id: Some(id),
        }
    }

    pub(crate) fn inactive(runtime: RuntimeHandle) -> Self {
        Self { runtime, id: None }
    }

    pub fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Whether the task is still waiting in the queue.
    pub fn is_pending(&self) -> bool {
        self.id
            .map(|id| self.runtime.is_task_pending(id))
            .unwrap_or(false)
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_task(id);
        }
    }
}

impl Drop for TaskRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_task(id);
        }
    }
}

impl std::fmt::Debug for TaskRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskRegistration")
            .field("id", &self.id)
            .finish()
    }
}
