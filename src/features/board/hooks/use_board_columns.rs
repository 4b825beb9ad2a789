use leptos::prelude::*;

use crate::core::services::storage::{self, tasks_key, COLUMNS_KEY};
use crate::core::services::{sync, StoreHandle};
use crate::features::board::services;

/// Board membership manager: the ordered column-name list plus add/remove.
pub struct BoardColumnsHook {
    pub columns: ReadSignal<Vec<String>>,
    pub add_column: Box<dyn Fn(String) + 'static>,
    pub remove_column: Box<dyn Fn(String) + 'static>,
}

pub fn use_board_columns(store: StoreHandle) -> BoardColumnsHook {
    let columns = RwSignal::new(storage::load_columns(store.as_ref()));

    // Membership changes made in another window arrive on the same bus,
    // under the membership key as topic
    {
        let subscription = sync::subscribe(COLUMNS_KEY.to_string(), move |new_value| {
            let _ = columns.try_set(storage::decode_columns(new_value.as_deref()));
        });
        if let Some(subscription) = subscription {
            StoredValue::new_local(subscription);
        }
    }

    let add_column = {
        let store = store.clone();
        Box::new(move |name: String| {
            let current = columns.get_untracked();
            if let Some(next) = services::add_column(store.as_ref(), &current, &name) {
                columns.set(next.clone());
                sync::publish_columns(&next);
            }
        }) as Box<dyn Fn(String) + 'static>
    };

    let remove_column = {
        let store = store.clone();
        Box::new(move |name: String| {
            let current = columns.get_untracked();
            if let Some(next) = services::remove_column(store.as_ref(), &current, &name) {
                columns.set(next.clone());
                sync::publish_columns(&next);
                // The removed column's task list is gone too
                sync::publish(&tasks_key(&name), None);
            }
        }) as Box<dyn Fn(String) + 'static>
    };

    BoardColumnsHook {
        columns: columns.read_only(),
        add_column,
        remove_column,
    }
}
