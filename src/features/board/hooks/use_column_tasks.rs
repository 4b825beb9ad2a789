use leptos::prelude::*;

use crate::core::services::storage::{self, tasks_key};
use crate::core::services::{sync, StoreHandle};
use crate::features::board::services::{self, drag, DragPayload, EditOutcome};
use crate::models::Task;

/// Per-column state manager: the column's task list signal plus every
/// mutation the column UI can perform. Each mutation updates in-memory
/// state, writes through to the store, then publishes on the column's topic
/// (always in that order).
pub struct ColumnTasksHook {
    pub tasks: ReadSignal<Vec<Task>>,
    pub add_task: Box<dyn Fn(String, String) + 'static>,
    pub delete_task: Box<dyn Fn(usize) + 'static>,
    pub clear_tasks: Box<dyn Fn() + 'static>,
    /// In-memory hover reorder during a drag; nothing is persisted until the
    /// gesture ends in a drop.
    pub hover_reorder: Box<dyn Fn(usize, usize) + 'static>,
    /// Persist the current (drag-reordered) list; same-column drop.
    pub persist_order: Box<dyn Fn() + 'static>,
    /// Cross-column drop onto this column.
    pub accept_drop: Box<dyn Fn(DragPayload) + 'static>,
    /// Edit any field of a task, including its status (which moves it).
    pub apply_edit: Box<dyn Fn(String, String, String, String) + 'static>,
    /// Re-read the persisted list, reverting unpersisted hover reorders
    /// after an abandoned drag.
    pub reload: Box<dyn Fn() + 'static>,
}

pub fn use_column_tasks(store: StoreHandle, column: String) -> ColumnTasksHook {
    // Initialize directly from the store before first render
    let tasks = RwSignal::new(storage::load_tasks(store.as_ref(), &column));

    // Observe this column's topic so sibling components and other windows
    // reach us without a shared parent store. The emitting component hears
    // its own publish too; re-setting the post-mutation value is harmless.
    {
        let column_for_sub = column.clone();
        let subscription = sync::subscribe(tasks_key(&column), move |new_value| {
            let updated = storage::decode_tasks(new_value.as_deref(), &column_for_sub);
            let _ = tasks.try_set(updated);
        });
        if let Some(subscription) = subscription {
            // Dropped when this column unmounts, detaching the listeners
            StoredValue::new_local(subscription);
        }
    }

    let add_task = {
        let store = store.clone();
        let column = column.clone();
        Box::new(move |name: String, description: String| {
            let current = tasks.get_untracked();
            if let Some(next) =
                services::add_task(store.as_ref(), &column, &current, &name, &description)
            {
                tasks.set(next.clone());
                sync::publish_tasks(&column, &next);
            }
        }) as Box<dyn Fn(String, String) + 'static>
    };

    let delete_task = {
        let store = store.clone();
        let column = column.clone();
        Box::new(move |index: usize| {
            let current = tasks.get_untracked();
            if let Some(next) = services::delete_task(store.as_ref(), &column, &current, index) {
                tasks.set(next.clone());
                sync::publish_tasks(&column, &next);
            }
        }) as Box<dyn Fn(usize) + 'static>
    };

    let clear_tasks = {
        let store = store.clone();
        let column = column.clone();
        Box::new(move || {
            tasks.set(Vec::new());
            storage::clear_tasks(store.as_ref(), &column);
            sync::publish(&tasks_key(&column), None);
        }) as Box<dyn Fn() + 'static>
    };

    let hover_reorder = Box::new(move |from: usize, to: usize| {
        tasks.update(|list| *list = drag::reorder(list, from, to));
    }) as Box<dyn Fn(usize, usize) + 'static>;

    let persist_order = {
        let store = store.clone();
        let column = column.clone();
        Box::new(move || {
            let current = tasks.get_untracked();
            storage::save_tasks(store.as_ref(), &column, &current);
            sync::publish_tasks(&column, &current);
        }) as Box<dyn Fn() + 'static>
    };

    let accept_drop = {
        let store = store.clone();
        let column = column.clone();
        Box::new(move |payload: DragPayload| {
            let current = tasks.get_untracked();
            let (target, source) = services::accept_task(
                store.as_ref(),
                &column,
                &current,
                payload.task,
                &payload.from_column,
            );
            tasks.set(target.clone());
            sync::publish_tasks(&column, &target);
            // The source column learns of its own change through the notifier
            if let Some(source_list) = source {
                sync::publish_tasks(&payload.from_column, &source_list);
            }
        }) as Box<dyn Fn(DragPayload) + 'static>
    };

    let apply_edit = {
        let store = store.clone();
        let column = column.clone();
        Box::new(
            move |task_id: String, name: String, description: String, new_status: String| {
                let current = tasks.get_untracked();
                match services::apply_edit(
                    store.as_ref(),
                    &column,
                    &current,
                    &task_id,
                    &name,
                    &description,
                    &new_status,
                ) {
                    Some(EditOutcome::SameColumn(next)) => {
                        tasks.set(next.clone());
                        sync::publish_tasks(&column, &next);
                    }
                    Some(EditOutcome::Moved {
                        source,
                        target_column,
                        target,
                    }) => {
                        tasks.set(source.clone());
                        sync::publish_tasks(&column, &source);
                        sync::publish_tasks(&target_column, &target);
                    }
                    None => {}
                }
            },
        ) as Box<dyn Fn(String, String, String, String) + 'static>
    };

    let reload = {
        let store = store.clone();
        let column = column.clone();
        Box::new(move || {
            tasks.set(storage::load_tasks(store.as_ref(), &column));
        }) as Box<dyn Fn() + 'static>
    };

    ColumnTasksHook {
        tasks: tasks.read_only(),
        add_task,
        delete_task,
        clear_tasks,
        hover_reorder,
        persist_order,
        accept_drop,
        apply_edit,
        reload,
    }
}
