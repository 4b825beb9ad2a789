use crate::core::services::logging;
use crate::core::services::storage::{self, KeyValueStore};
use crate::models::Task;

/// Append a new task to `column`. A name that trims to empty is a silent
/// no-op. Writes through and returns the column's new list.
pub fn add_task(
    store: &dyn KeyValueStore,
    column: &str,
    current: &[Task],
    name: &str,
    description: &str,
) -> Option<Vec<Task>> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let mut tasks = current.to_vec();
    tasks.push(Task::new(
        name.to_string(),
        description.trim().to_string(),
        column.to_string(),
    ));
    storage::save_tasks(store, column, &tasks);
    Some(tasks)
}

/// Remove the entry at `index`. Out of range is a defined no-op.
pub fn delete_task(
    store: &dyn KeyValueStore,
    column: &str,
    current: &[Task],
    index: usize,
) -> Option<Vec<Task>> {
    if index >= current.len() {
        return None;
    }
    let mut tasks = current.to_vec();
    tasks.remove(index);
    storage::save_tasks(store, column, &tasks);
    Some(tasks)
}

/// Remove `task_id` from a column's persisted list, by id. Used for the
/// source side of a cross-column move; the source column component picks the
/// change up through the notifier rather than being called directly.
pub fn remove_by_id(
    store: &dyn KeyValueStore,
    column: &str,
    task_id: &str,
) -> Option<Vec<Task>> {
    let current = storage::load_tasks(store, column);
    let tasks: Vec<Task> = current.iter().filter(|t| t.id != task_id).cloned().collect();
    if tasks.len() == current.len() {
        logging::warn(&format!(
            "Task {task_id} not found in column {column} during move"
        ));
        return None;
    }
    storage::save_tasks(store, column, &tasks);
    Some(tasks)
}

/// Cross-column move, invoked by the receiving column. `current` is the
/// receiver's in-memory list. Appends the task with its status rewritten,
/// persists the receiver, then rewrites the source column's persisted list.
/// Returns the receiver's new list and, when the task was actually found at
/// the source, the source's new list.
pub fn accept_task(
    store: &dyn KeyValueStore,
    target_column: &str,
    current: &[Task],
    task: Task,
    from_column: &str,
) -> (Vec<Task>, Option<Vec<Task>>) {
    if from_column == target_column {
        return (current.to_vec(), None);
    }
    let mut moved = task;
    moved.update_status(target_column.to_string());

    let mut target = current.to_vec();
    target.push(moved.clone());
    storage::save_tasks(store, target_column, &target);

    let source = remove_by_id(store, from_column, &moved.id);
    (target, source)
}

/// Result of an edit-dialog submission.
pub enum EditOutcome {
    /// The task stayed in its column; the new list for that column.
    SameColumn(Vec<Task>),
    /// The task changed status; new lists for both ends of the move.
    Moved {
        source: Vec<Task>,
        target_column: String,
        target: Vec<Task>,
    },
}

/// Apply an edit to any field of a task, including its status. An empty name
/// is a silent no-op; a status naming no existing column is rejected with a
/// logged diagnostic and no mutation.
pub fn apply_edit(
    store: &dyn KeyValueStore,
    column: &str,
    current: &[Task],
    task_id: &str,
    name: &str,
    description: &str,
    new_status: &str,
) -> Option<EditOutcome> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let Some(position) = current.iter().position(|t| t.id == task_id) else {
        logging::warn(&format!("Task {task_id} not found in column {column} during edit"));
        return None;
    };

    if new_status == column {
        let mut tasks = current.to_vec();
        tasks[position].update_name(name.to_string());
        tasks[position].update_description(description.trim().to_string());
        storage::save_tasks(store, column, &tasks);
        return Some(EditOutcome::SameColumn(tasks));
    }

    if !storage::load_columns(store).iter().any(|c| c == new_status) {
        logging::error(&format!(
            "Rejected move of task {task_id} to non-existent column {new_status}"
        ));
        return None;
    }

    let mut moved = current[position].clone();
    moved.update_name(name.to_string());
    moved.update_description(description.trim().to_string());
    moved.update_status(new_status.to_string());

    let mut target = storage::load_tasks(store, new_status);
    target.push(moved);
    storage::save_tasks(store, new_status, &target);

    let source: Vec<Task> = current
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != position)
        .map(|(_, t)| t.clone())
        .collect();
    storage::save_tasks(store, column, &source);

    Some(EditOutcome::Moved {
        source,
        target_column: new_status.to_string(),
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::storage::{load_tasks, tasks_key, MemoryStore};
    use crate::core::services::KeyValueStore;

    #[test]
    fn add_task_with_blank_name_is_a_no_op() {
        let store = MemoryStore::new();
        assert!(add_task(&store, "Not started", &[], "   ", "desc").is_none());
        assert_eq!(store.get(&tasks_key("Not started")), None);
    }

    #[test]
    fn added_task_is_appended_and_written_through() {
        let store = MemoryStore::new();
        let tasks = add_task(&store, "Not started", &[], "Write spec", "").unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Write spec");
        assert_eq!(tasks[0].status, "Not started");
        // in-memory result and persisted list converge
        assert_eq!(load_tasks(&store, "Not started"), tasks);
    }

    #[test]
    fn delete_out_of_range_is_a_no_op() {
        let store = MemoryStore::new();
        let tasks = add_task(&store, "Not started", &[], "a", "").unwrap();
        assert!(delete_task(&store, "Not started", &tasks, 1).is_none());
        assert_eq!(load_tasks(&store, "Not started"), tasks);
    }

    #[test]
    fn delete_removes_exactly_the_indexed_entry() {
        let store = MemoryStore::new();
        let tasks = add_task(&store, "Not started", &[], "a", "").unwrap();
        let tasks = add_task(&store, "Not started", &tasks, "b", "").unwrap();
        let tasks = delete_task(&store, "Not started", &tasks, 0).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "b");
        assert_eq!(load_tasks(&store, "Not started"), tasks);
    }

    #[test]
    fn move_keeps_the_total_count_and_rewrites_status() {
        let store = MemoryStore::new();
        let source = add_task(&store, "Not started", &[], "Write spec", "").unwrap();
        let task = source[0].clone();

        let (target, new_source) = accept_task(&store, "In progress", &[], task, "Not started");
        let new_source = new_source.unwrap();

        assert_eq!(target.len() + new_source.len(), 1);
        assert_eq!(target[0].status, "In progress");
        assert_eq!(target[0].name, "Write spec");
        assert!(load_tasks(&store, "Not started").is_empty());
        assert_eq!(load_tasks(&store, "In progress"), target);
    }

    #[test]
    fn duplicate_name_tasks_move_independently() {
        let store = MemoryStore::new();
        let source = add_task(&store, "Not started", &[], "dup", "").unwrap();
        let source = add_task(&store, "Not started", &source, "dup", "").unwrap();
        let first = source[0].clone();

        let (_, new_source) = accept_task(&store, "Completed", &[], first.clone(), "Not started");
        let new_source = new_source.unwrap();

        // only the dragged instance left its column
        assert_eq!(new_source.len(), 1);
        assert_ne!(new_source[0].id, first.id);
    }

    #[test]
    fn stale_move_source_is_reported_but_target_keeps_the_task() {
        let store = MemoryStore::new();
        let task = Task::new("ghost".to_string(), String::new(), "Not started".to_string());
        let (target, source) = accept_task(&store, "In progress", &[], task, "Not started");
        assert_eq!(target.len(), 1);
        assert!(source.is_none());
    }

    #[test]
    fn edit_in_place_rewrites_name_and_description() {
        let store = MemoryStore::new();
        let tasks = add_task(&store, "Not started", &[], "old", "old desc").unwrap();
        let id = tasks[0].id.clone();

        let outcome =
            apply_edit(&store, "Not started", &tasks, &id, "new", "new desc", "Not started");
        let Some(EditOutcome::SameColumn(tasks)) = outcome else {
            panic!("expected in-place edit");
        };
        assert_eq!(tasks[0].name, "new");
        assert_eq!(tasks[0].description, "new desc");
        assert_eq!(load_tasks(&store, "Not started"), tasks);
    }

    #[test]
    fn edit_to_unknown_column_is_rejected_without_mutation() {
        let store = MemoryStore::new();
        let tasks = add_task(&store, "Not started", &[], "a", "").unwrap();
        let id = tasks[0].id.clone();

        assert!(apply_edit(&store, "Not started", &tasks, &id, "a", "", "Nowhere").is_none());
        assert_eq!(load_tasks(&store, "Not started"), tasks);
    }

    #[test]
    fn edit_to_another_column_moves_the_task() {
        let store = MemoryStore::new();
        let tasks = add_task(&store, "Not started", &[], "Write spec", "").unwrap();
        let id = tasks[0].id.clone();

        let outcome = apply_edit(
            &store,
            "Not started",
            &tasks,
            &id,
            "Write spec",
            "",
            "In progress",
        );
        let Some(EditOutcome::Moved { source, target_column, target }) = outcome else {
            panic!("expected a move");
        };
        assert!(source.is_empty());
        assert_eq!(target_column, "In progress");
        assert_eq!(target[0].status, "In progress");
        assert!(load_tasks(&store, "Not started").is_empty());
        assert_eq!(load_tasks(&store, "In progress"), target);
    }
}
