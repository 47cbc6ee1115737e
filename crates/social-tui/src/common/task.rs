/// Identifies one spawned request. Results carrying a stale id are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Auth,
    Feed,
    Delete,
    Upload,
    MediaDiscovery,
}

impl TaskKind {
    pub const ALL: [TaskKind; 5] = [
        TaskKind::Auth,
        TaskKind::Feed,
        TaskKind::Delete,
        TaskKind::Upload,
        TaskKind::MediaDiscovery,
    ];

    /// Network requests block user interaction until they finish.
    pub fn blocks_input(self) -> bool {
        !matches!(self, TaskKind::MediaDiscovery)
    }
}

/// Task lifecycle state (stored in AppState, mutated only by reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, id: TaskId) {
        self.active = Some(id);
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub auth: TaskState,
    pub feed: TaskState,
    pub delete: TaskState,
    pub upload: TaskState,
    pub media_discovery: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::Auth => &self.auth,
            TaskKind::Feed => &self.feed,
            TaskKind::Delete => &self.delete,
            TaskKind::Upload => &self.upload,
            TaskKind::MediaDiscovery => &self.media_discovery,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Auth => &mut self.auth,
            TaskKind::Feed => &mut self.feed,
            TaskKind::Delete => &mut self.delete,
            TaskKind::Upload => &mut self.upload,
            TaskKind::MediaDiscovery => &mut self.media_discovery,
        }
    }

    /// True while any request that blocks input is in flight.
    pub fn is_busy(&self) -> bool {
        TaskKind::ALL
            .into_iter()
            .filter(|kind| kind.blocks_input())
            .any(|kind| self.state(kind).is_running())
    }

    pub fn is_any_running(&self) -> bool {
        TaskKind::ALL
            .into_iter()
            .any(|kind| self.state(kind).is_running())
    }

    /// Forgets every in-flight task so their results are ignored.
    pub fn clear_all(&mut self) {
        *self = Tasks::default();
    }
}
