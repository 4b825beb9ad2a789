use leptos::prelude::*;
use leptos::ev;
use leptos::html::Dialog;
use std::rc::Rc;

use crate::components::{EditTaskModal, TaskModal};
use crate::core::services::StoreHandle;
use crate::features::board::components::TaskCard;
use crate::features::board::hooks::{use_column_tasks, ColumnTasksHook};
use crate::features::board::services::DragPayload;
use crate::models::{color_hint, is_default_column, Task};

#[component]
pub fn StatusColumn(
    #[prop(into)] name: String,
    store: StoreHandle,
    #[prop(into)] columns: ReadSignal<Vec<String>>,
    on_remove: Rc<dyn Fn(String) + 'static>,
) -> impl IntoView {
    let ColumnTasksHook {
        tasks,
        add_task,
        delete_task,
        clear_tasks,
        hover_reorder,
        persist_order,
        accept_drop,
        apply_edit,
        reload,
    } = use_column_tasks(store, name.clone());

    // Shared across per-card closures, which are re-created on every render
    let delete_task: Rc<dyn Fn(usize) + 'static> = Rc::from(delete_task);
    let hover_reorder: Rc<dyn Fn(usize, usize) + 'static> = Rc::from(hover_reorder);
    let reload: Rc<dyn Fn() + 'static> = Rc::from(reload);
    let add_task: Rc<dyn Fn(String, String) + 'static> = Rc::from(add_task);
    let apply_edit: Rc<dyn Fn(String, String, String, String) + 'static> = Rc::from(apply_edit);
    let clear_tasks: Rc<dyn Fn() + 'static> = Rc::from(clear_tasks);

    let drag_state =
        use_context::<RwSignal<Option<DragPayload>>>().expect("drag context");

    let add_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let edit_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let (editing_task, set_editing_task) = signal::<Option<Task>>(None);

    let open_add_modal = move |_| {
        if let Some(dialog) = add_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    };

    // The edit modal mounts per request and opens itself; see EditTaskModal
    let open_edit = Rc::new(move |task: Task| {
        set_editing_task.set(Some(task));
    }) as Rc<dyn Fn(Task) + 'static>;

    let handle_remove = {
        let name = name.clone();
        let on_remove = on_remove.clone();
        move |_| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message(
                        "Remove this column? Its tasks will be discarded.",
                    )
                    .unwrap_or(false)
                })
                .unwrap_or(false);
            if confirmed {
                on_remove(name.clone());
            }
        }
    };

    // Drop surface for the whole column: a drop from a sibling card in the
    // same column commits the hover reorder, one from another column moves
    // the task here. Either way the gesture's payload is consumed.
    let handle_drop = {
        let name = name.clone();
        move |ev: ev::DragEvent| {
            ev.prevent_default();
            let Some(payload) = drag_state.get_untracked() else {
                return;
            };
            drag_state.set(None);
            if payload.from_column == name {
                persist_order();
            } else {
                accept_drop(payload);
            }
        }
    };

    let is_default = is_default_column(&name);
    let color = color_hint(&name);
    let column_for_cards = name.clone();
    let column_for_add = name.clone();

    view! {
        <div class="kanban-column">
            <div class="column-header">
                <span class="column-chip" style=format!("background-color: {color}")></span>
                <h3>{name.clone()}</h3>
                <span class="task-count">{move || tasks.with(Vec::len)}</span>
                <div class="column-actions">
                    <button class="action-btn add-btn" title="Add task" on:click=open_add_modal>"🞦"</button>
                    {move || {
                        (!tasks.with(Vec::is_empty)).then(|| {
                            let clear_tasks = clear_tasks.clone();
                            let handle_clear = move |_| {
                                let confirmed = web_sys::window()
                                    .map(|w| {
                                        w.confirm_with_message("Clear every task in this column?")
                                            .unwrap_or(false)
                                    })
                                    .unwrap_or(false);
                                if confirmed {
                                    clear_tasks();
                                }
                            };
                            view! {
                                <button class="action-btn clear-btn" title="Clear column" on:click=handle_clear>"⌫"</button>
                            }
                        })
                    }}
                    {(!is_default).then(|| view! {
                        <button class="action-btn remove-btn" title="Remove column" on:click=handle_remove>"🞮"</button>
                    })}
                </div>
            </div>
            <div
                class="column-content"
                on:dragover=move |ev: ev::DragEvent| ev.prevent_default()
                on:drop=handle_drop
            >
                {move || {
                    tasks
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, task)| {
                            view! {
                                <TaskCard
                                    task=task
                                    index=index
                                    column=column_for_cards.clone()
                                    on_open=open_edit.clone()
                                    on_delete=delete_task.clone()
                                    on_hover_reorder=hover_reorder.clone()
                                    on_drag_abandoned=reload.clone()
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <TaskModal
                column=column_for_add
                on_create=add_task.clone()
                dialog_ref=add_dialog_ref
            />

            {move || {
                if let Some(task) = editing_task.get() {
                    view! {
                        <EditTaskModal
                            task=task
                            columns=columns
                            on_edit=apply_edit.clone()
                            dialog_ref=edit_dialog_ref
                        />
                    }
                    .into_any()
                } else {
                    view! {}.into_any()
                }
            }}
        </div>
    }
}
