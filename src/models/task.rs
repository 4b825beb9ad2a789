use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn default_created_at() -> DateTime<Utc> {
    Utc::now()
}

/// A unit of work on the board. `status` always names the column the task
/// currently lives in; persisted entries written by older variants may lack
/// `id`/`created_at`, which `ensure_id` backfills on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
    #[serde(default = "default_created_at")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(name: String, description: String, status: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            status,
            created_at: Utc::now(),
        }
    }

    // Legacy entries carry no id; give them one so moves and deletes can
    // match on identity instead of (name, description).
    pub fn ensure_id(mut self) -> Self {
        if self.id.is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
        self
    }

    pub fn update_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn update_description(&mut self, description: String) {
        self.description = description;
    }

    pub fn update_status(&mut self, status: String) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::Task;

    #[test]
    fn new_tasks_get_distinct_ids() {
        let a = Task::new("a".to_string(), String::new(), "Not started".to_string());
        let b = Task::new("a".to_string(), String::new(), "Not started".to_string());
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn legacy_entry_without_id_deserializes_and_backfills() {
        let json = r#"{"name":"Write spec","description":"","status":"Not started"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "");
        let task = task.ensure_id();
        assert!(!task.id.is_empty());
        assert_eq!(task.name, "Write spec");
        assert_eq!(task.status, "Not started");
    }
}
