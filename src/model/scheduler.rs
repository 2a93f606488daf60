use fnv::FnvHashMap;

/// Handle of a scheduled task; pass it back to cancel or complete the task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u32);

/// Book-keeping for pending one-shot tasks (timed node removals).
///
/// `H` is whatever the platform needs to cancel a task, e.g. a timer handle
/// plus the node to remove. A task leaves the registry exactly once: either
/// when it fires (`complete`), when it is cancelled (`cancel`), or when the
/// whole registry is drained on teardown.
#[derive(Debug)]
pub struct TaskRegistry<H> {
    next_id: u32,
    pending: FnvHashMap<TaskId, H>,
}

impl<H> Default for TaskRegistry<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: FnvHashMap::default(),
        }
    }
}

impl<H> TaskRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve an id before the platform timer exists, so the timer's
    /// callback can refer to it.
    pub fn allocate(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn insert(&mut self, id: TaskId, handle: H) {
        self.pending.insert(id, handle);
    }

    /// The task fired. Returns its handle if it was still pending; `None`
    /// means it was already cancelled and the callback must do nothing.
    pub fn complete(&mut self, id: TaskId) -> Option<H> {
        self.pending.remove(&id)
    }

    /// Cancel one task, returning its handle so the caller can clear the
    /// platform timer. Cancelling twice is a no-op.
    pub fn cancel(&mut self, id: TaskId) -> Option<H> {
        self.pending.remove(&id)
    }

    /// Remove every pending task, ordered by id.
    pub fn drain(&mut self) -> Vec<H> {
        let mut all: Vec<(TaskId, H)> = self.pending.drain().collect();
        all.sort_by_key(|(id, _)| *id);
        all.into_iter().map(|(_, h)| h).collect()
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
