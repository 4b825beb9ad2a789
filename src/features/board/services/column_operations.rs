use crate::core::services::storage::{self, KeyValueStore};
use crate::models::is_default_column;

/// Append a new column name to the membership list. Blank names and exact
/// (case-sensitive) duplicates are silent no-ops. Writes through and returns
/// the new membership list.
pub fn add_column(
    store: &dyn KeyValueStore,
    current: &[String],
    name: &str,
) -> Option<Vec<String>> {
    let name = name.trim();
    if name.is_empty() || current.iter().any(|c| c == name) {
        return None;
    }
    let mut columns = current.to_vec();
    columns.push(name.to_string());
    storage::save_columns(store, &columns);
    Some(columns)
}

/// Remove a column from the membership list. The three defaults are never
/// removable. Removing a column also discards its persisted task list.
pub fn remove_column(
    store: &dyn KeyValueStore,
    current: &[String],
    name: &str,
) -> Option<Vec<String>> {
    if is_default_column(name) || !current.iter().any(|c| c == name) {
        return None;
    }
    let columns: Vec<String> = current.iter().filter(|c| *c != name).cloned().collect();
    storage::save_columns(store, &columns);
    storage::clear_tasks(store, name);
    Some(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::storage::{load_columns, load_tasks, save_tasks, tasks_key, MemoryStore};
    use crate::core::services::KeyValueStore;
    use crate::models::Task;

    fn defaults() -> Vec<String> {
        vec![
            "Not started".to_string(),
            "In progress".to_string(),
            "Completed".to_string(),
        ]
    }

    #[test]
    fn default_columns_are_never_removable() {
        let store = MemoryStore::new();
        for name in ["Not started", "In progress", "Completed"] {
            assert!(remove_column(&store, &defaults(), name).is_none());
        }
        assert_eq!(load_columns(&store), defaults());
    }

    #[test]
    fn blank_and_duplicate_names_are_rejected() {
        let store = MemoryStore::new();
        assert!(add_column(&store, &defaults(), "  ").is_none());
        assert!(add_column(&store, &defaults(), "In progress").is_none());
        assert_eq!(load_columns(&store), defaults());
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let store = MemoryStore::new();
        let columns = add_column(&store, &defaults(), "in progress").unwrap();
        assert!(columns.iter().any(|c| c == "in progress"));
    }

    #[test]
    fn added_column_is_appended_and_persisted() {
        let store = MemoryStore::new();
        let columns = add_column(&store, &defaults(), "Backlog").unwrap();
        assert_eq!(columns.last().map(String::as_str), Some("Backlog"));
        assert_eq!(load_columns(&store), columns);
    }

    #[test]
    fn removing_a_column_discards_its_task_list() {
        let store = MemoryStore::new();
        let columns = add_column(&store, &defaults(), "Backlog").unwrap();
        save_tasks(
            &store,
            "Backlog",
            &[Task::new("a".to_string(), String::new(), "Backlog".to_string())],
        );

        let columns = remove_column(&store, &columns, "Backlog").unwrap();
        assert_eq!(columns, defaults());
        assert_eq!(store.get(&tasks_key("Backlog")), None);
        assert!(load_tasks(&store, "Backlog").is_empty());
    }
}
