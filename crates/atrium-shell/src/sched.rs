//! Deterministic task scheduler.
//!
//! The source scheduled bare timers (a 1-second clock interval, one-shot
//! popup closes, toast fade/remove pairs). Here every timer is a typed
//! task against an injected millisecond clock: the host reports time via
//! [`Scheduler::advance_to`] and executes whatever actions came due. Tasks
//! fire in due order, ties broken by scheduling order, and there is no
//! cancellation (the source never cancels).

/// Identifier handed back when scheduling.
pub type TaskId = u64;

/// What a fired task asks the controller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Close a startup popup window.
    ClosePopup(String),
    /// Refresh the taskbar clock readout.
    UpdateClock,
    /// Begin fading a toast node.
    FadeToast(String),
    /// Detach a toast node.
    RemoveToast(String),
}

/// One-shot or repeating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Every(u64),
}

#[derive(Debug, Clone)]
struct Task {
    id: TaskId,
    due_ms: u64,
    repeat: Repeat,
    action: TaskAction,
}

/// Ordered task list over injected time.
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<Task>,
    next_id: TaskId,
    now_ms: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last time reported via [`advance_to`](Self::advance_to).
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of armed tasks.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Arm a one-shot task `delay_ms` from now.
    pub fn schedule_once(&mut self, delay_ms: u64, action: TaskAction) -> TaskId {
        self.push(self.now_ms + delay_ms, Repeat::Once, action)
    }

    /// Arm a repeating task firing every `period_ms`, first at
    /// now + period. A zero period degenerates to a one-shot.
    pub fn schedule_every(&mut self, period_ms: u64, action: TaskAction) -> TaskId {
        if period_ms == 0 {
            return self.schedule_once(0, action);
        }
        self.push(self.now_ms + period_ms, Repeat::Every(period_ms), action)
    }

    /// Advance to `now_ms` and return every action that came due, in
    /// (due time, scheduling order) order. Repeating tasks fire once per
    /// elapsed period and re-arm; one-shots are dropped. Time never moves
    /// backwards.
    pub fn advance_to(&mut self, now_ms: u64) -> Vec<TaskAction> {
        if now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
        let now = self.now_ms;
        let mut fired = Vec::new();
        loop {
            let Some(pos) = self
                .tasks
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due_ms <= now)
                .min_by_key(|(_, t)| (t.due_ms, t.id))
                .map(|(pos, _)| pos)
            else {
                return fired;
            };
            let task = &mut self.tasks[pos];
            fired.push(task.action.clone());
            match task.repeat {
                Repeat::Once => {
                    self.tasks.remove(pos);
                },
                Repeat::Every(period) => {
                    task.due_ms += period;
                },
            }
        }
    }

    fn push(&mut self, due_ms: u64, repeat: Repeat, action: TaskAction) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            due_ms,
            repeat,
            action,
        });
        id
    }
}
