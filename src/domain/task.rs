use super::enums::TaskTag;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn one() -> u32 {
    1
}

/// A user-defined task tracked in pomodoros
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    /// Planned number of focus sessions (always at least 1)
    #[serde(default = "one")]
    pub estimated_pomos: u32,
    /// Focus sessions credited so far; may exceed the estimate
    #[serde(default)]
    pub completed_pomos: u32,
    #[serde(default)]
    pub tag: TaskTag,
}

impl Task {
    pub fn new(title: String, estimated_pomos: u32, tag: TaskTag) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            completed: false,
            estimated_pomos: estimated_pomos.max(1),
            completed_pomos: 0,
            tag,
        }
    }

    /// Progress string like "2/4"
    pub fn pomo_progress(&self) -> String {
        format!("{}/{}", self.completed_pomos, self.estimated_pomos)
    }

    pub fn is_over_estimate(&self) -> bool {
        self.completed_pomos > self.estimated_pomos
    }
}

/// Ordered task list (newest first) plus the task the timer is crediting
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    active_id: Option<Uuid>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            active_id: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Tasks to list, optionally hiding completed ones
    pub fn visible(&self, show_completed: bool) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| show_completed || !t.completed)
            .collect()
    }

    /// Create a task at the top of the list. Blank titles are rejected.
    pub fn add(&mut self, title: &str, estimated_pomos: u32, tag: TaskTag) -> Option<Uuid> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let task = Task::new(title.to_string(), estimated_pomos, tag);
        let id = task.id;
        self.tasks.insert(0, task);
        Some(id)
    }

    pub fn toggle_complete(&mut self, id: Uuid) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Update a task in place. A blank title leaves the task untouched.
    pub fn edit(&mut self, id: Uuid, title: &str, estimated_pomos: u32, tag: TaskTag) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        match self.get_mut(id) {
            Some(task) => {
                task.title = title.to_string();
                task.estimated_pomos = estimated_pomos.max(1);
                task.tag = tag;
                true
            }
            None => false,
        }
    }

    /// Remove a task, clearing the active reference if it pointed here
    pub fn delete(&mut self, id: Uuid) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        if self.active_id == Some(id) {
            self.active_id = None;
        }
        Some(self.tasks.remove(index))
    }

    pub fn active_id(&self) -> Option<Uuid> {
        self.active_id
    }

    pub fn active(&self) -> Option<&Task> {
        self.active_id.and_then(|id| self.get(id))
    }

    /// Select the task the timer credits; selecting the active task again clears it
    pub fn set_active(&mut self, id: Uuid) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.active_id = if self.active_id == Some(id) { None } else { Some(id) };
        true
    }

    /// Add one finished pomodoro to the active task, if any
    pub fn credit_pomodoro(&mut self) -> Option<Uuid> {
        let id = self.active_id?;
        let task = self.get_mut(id)?;
        task.completed_pomos = task.completed_pomos.saturating_add(1);
        Some(id)
    }
}
