use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::core::services::logging;
use crate::models::{Task, DEFAULT_COLUMNS};

/// Key holding the ordered list of column names.
pub const COLUMNS_KEY: &str = "boardStatuses";

/// Key holding one column's ordered task list.
pub fn tasks_key(column: &str) -> String {
    format!("tasks-{column}")
}

/// Minimal capability over the browser's key-value storage. Hooks and
/// services take this instead of touching `localStorage` directly, so the
/// same logic runs against [`MemoryStore`] in tests.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

pub type StoreHandle = Rc<dyn KeyValueStore>;

/// `window.localStorage`, the real store for the running app.
pub struct BrowserStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                logging::error(&format!("Failed to write {key} to localStorage"));
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store double.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Decode a serialized task list. An absent value and malformed JSON both
/// come back as an empty list; the parse failure is logged and swallowed.
/// Shared between store reads and notifier payloads so both degrade the
/// same way.
pub fn decode_tasks(raw: Option<&str>, column: &str) -> Vec<Task> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<Task>>(raw) {
        Ok(tasks) => tasks.into_iter().map(Task::ensure_id).collect(),
        Err(e) => {
            logging::error(&format!("Error loading tasks for column {column}: {e}"));
            Vec::new()
        }
    }
}

/// Load the task list for one column.
pub fn load_tasks(store: &dyn KeyValueStore, column: &str) -> Vec<Task> {
    decode_tasks(store.get(&tasks_key(column)).as_deref(), column)
}

/// Write-through of a column's full task list.
pub fn save_tasks(store: &dyn KeyValueStore, column: &str, tasks: &[Task]) {
    match serde_json::to_string(tasks) {
        Ok(raw) => store.set(&tasks_key(column), &raw),
        Err(e) => logging::error(&format!("Failed to serialize tasks for column {column}: {e}")),
    }
}

/// Clearing a column removes its key entirely rather than writing `[]`.
pub fn clear_tasks(store: &dyn KeyValueStore, column: &str) {
    store.remove(&tasks_key(column));
}

/// Decode a serialized membership list. The three defaults are always
/// present in the result; any that a stored list is missing are re-inserted
/// ahead of it in canonical order.
pub fn decode_columns(raw: Option<&str>) -> Vec<String> {
    let stored: Vec<String> = match raw {
        Some(raw) => match serde_json::from_str(raw) {
            Ok(names) => names,
            Err(e) => {
                logging::error(&format!("Error loading column list: {e}"));
                Vec::new()
            }
        },
        None => Vec::new(),
    };
    ensure_defaults(stored)
}

/// Load column membership.
pub fn load_columns(store: &dyn KeyValueStore) -> Vec<String> {
    decode_columns(store.get(COLUMNS_KEY).as_deref())
}

pub fn save_columns(store: &dyn KeyValueStore, columns: &[String]) {
    match serde_json::to_string(columns) {
        Ok(raw) => store.set(COLUMNS_KEY, &raw),
        Err(e) => logging::error(&format!("Failed to serialize column list: {e}")),
    }
}

fn ensure_defaults(stored: Vec<String>) -> Vec<String> {
    let mut columns: Vec<String> = DEFAULT_COLUMNS
        .iter()
        .filter(|name| !stored.iter().any(|s| s == *name))
        .map(|name| name.to_string())
        .collect();
    for name in stored {
        if !columns.contains(&name) {
            columns.push(name);
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    #[test]
    fn absent_key_loads_as_empty_list() {
        let store = MemoryStore::new();
        assert!(load_tasks(&store, "Not started").is_empty());
    }

    #[test]
    fn malformed_json_loads_as_empty_list() {
        let store = MemoryStore::new();
        store.set(&tasks_key("Not started"), "{not json");
        assert!(load_tasks(&store, "Not started").is_empty());
    }

    #[test]
    fn saved_tasks_round_trip_through_the_store() {
        let store = MemoryStore::new();
        let tasks = vec![Task::new(
            "Write spec".to_string(),
            String::new(),
            "Not started".to_string(),
        )];
        save_tasks(&store, "Not started", &tasks);
        assert_eq!(load_tasks(&store, "Not started"), tasks);
    }

    #[test]
    fn clearing_removes_the_key_instead_of_writing_an_empty_list() {
        let store = MemoryStore::new();
        save_tasks(
            &store,
            "Completed",
            &[
                Task::new("a".to_string(), String::new(), "Completed".to_string()),
                Task::new("b".to_string(), String::new(), "Completed".to_string()),
            ],
        );
        clear_tasks(&store, "Completed");
        assert_eq!(store.get(&tasks_key("Completed")), None);
        assert!(load_tasks(&store, "Completed").is_empty());
    }

    #[test]
    fn column_list_defaults_when_absent() {
        let store = MemoryStore::new();
        assert_eq!(
            load_columns(&store),
            vec!["Not started", "In progress", "Completed"]
        );
    }

    #[test]
    fn stored_column_order_survives_and_missing_defaults_are_restored() {
        let store = MemoryStore::new();
        save_columns(
            &store,
            &["In progress".to_string(), "Backlog".to_string()],
        );
        assert_eq!(
            load_columns(&store),
            vec!["Not started", "Completed", "In progress", "Backlog"]
        );
    }

    #[test]
    fn legacy_task_entries_are_given_ids_on_load() {
        let store = MemoryStore::new();
        store.set(
            &tasks_key("Not started"),
            r#"[{"name":"Write spec","description":"","status":"Not started"}]"#,
        );
        let tasks = load_tasks(&store, "Not started");
        assert_eq!(tasks.len(), 1);
        assert!(!tasks[0].id.is_empty());
    }
}
