use leptos::prelude::*;
use leptos::html::Dialog;
use std::rc::Rc;

use crate::components::ColumnModal;
use crate::core::services::StoreHandle;
use crate::features::board::components::StatusColumn;
use crate::features::board::hooks::{use_board_columns, BoardColumnsHook};

#[component]
pub fn Board() -> impl IntoView {
    let store = use_context::<StoreHandle>().expect("store context");

    let BoardColumnsHook {
        columns,
        add_column,
        remove_column,
    } = use_board_columns(store.clone());
    let add_column: Rc<dyn Fn(String) + 'static> = Rc::from(add_column);
    let remove_column: Rc<dyn Fn(String) + 'static> = Rc::from(remove_column);

    let column_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let open_column_modal = move |_| {
        if let Some(dialog) = column_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    };

    view! {
        <div class="kanban-page">
            <header class="kanban-header">
                <h1>"Task Board"</h1>
                <div class="kanban-actions">
                    <button class="btn-primary" on:click=open_column_modal>"🞦 ADD COLUMN"</button>
                </div>
            </header>

            <div class="kanban-board">
                // Keyed on the column name so surviving columns keep their
                // state when membership changes
                <For
                    each=move || columns.get()
                    key=|name| name.clone()
                    children=move |name: String| {
                        view! {
                            <StatusColumn
                                name=name
                                store=store.clone()
                                columns=columns
                                on_remove=remove_column.clone()
                            />
                        }
                    }
                />
            </div>

            <ColumnModal on_create=add_column dialog_ref=column_dialog_ref />
        </div>
    }
}
