use leptos::prelude::*;
use leptos::{ev, html::Dialog};
use std::rc::Rc;

use crate::models::Task;

/// Edit dialog for every task field, including its status. Picking another
/// status moves the task to that column on save. The modal is mounted per
/// edit request and opens itself once its dialog node exists.
#[component]
pub fn EditTaskModal(
    #[prop(into)] task: Task,
    #[prop(into)] columns: ReadSignal<Vec<String>>,
    on_edit: Rc<dyn Fn(String, String, String, String) + 'static>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (name, set_name) = signal(task.name.clone());
    let (description, set_description) = signal(task.description.clone());
    let (status, set_status) = signal(task.status.clone());

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    });

    let task_id = task.id.clone();

    let handle_submit = {
        let on_edit = on_edit.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            on_edit(
                task_id.clone(),
                name.get_untracked(),
                description.get_untracked(),
                status.get_untracked(),
            );
            if let Some(dialog) = dialog_ref.get() {
                dialog.close();
            }
        }
    };

    // Canceling puts the fields back to the task's stored values
    let close_modal = {
        let task_name = task.name.clone();
        let task_description = task.description.clone();
        let task_status = task.status.clone();
        move |_| {
            if let Some(dialog) = dialog_ref.get() {
                dialog.close();
            }
            set_name.set(task_name.clone());
            set_description.set(task_description.clone());
            set_status.set(task_status.clone());
        }
    };
    let close_modal_x = close_modal.clone();

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"EDIT TASK"</h3>
                    <button type="button" class="modal-close" on:click=close_modal_x>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"NAME"</label>
                        <input
                            type="text"
                            placeholder="Task name..."
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            prop:value=move || name.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"DESCRIPTION"</label>
                        <textarea
                            placeholder="Task description..."
                            rows="4"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label>"STATUS"</label>
                        <select
                            on:change=move |ev| set_status.set(event_target_value(&ev))
                            prop:value=move || status.get()
                        >
                            {move || {
                                columns
                                    .get()
                                    .into_iter()
                                    .map(|column| {
                                        let value = column.clone();
                                        view! {
                                            <option
                                                value=value.clone()
                                                selected=move || status.get() == value
                                            >
                                                {column}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"SAVE CHANGES"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
