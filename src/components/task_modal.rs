use leptos::prelude::*;
use leptos::{ev, html::Dialog};
use std::rc::Rc;

#[component]
pub fn TaskModal(
    #[prop(into)] column: String,
    on_create: Rc<dyn Fn(String, String) + 'static>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let handle_submit = {
        let on_create = on_create.clone();
        move |ev: ev::SubmitEvent| {
            // Prevent the default form submission behavior (page reload)
            ev.prevent_default();

            // A name that trims to empty never creates a task; the `required`
            // attribute below keeps the submit disabled in the common case
            on_create(name.get_untracked(), description.get_untracked());

            // Reset form fields to empty state after submission
            set_name.set(String::new());
            set_description.set(String::new());

            if let Some(dialog) = dialog_ref.get() {
                dialog.close();
            }
        }
    };

    // Handler for closing the modal without submitting (cancel button or close X)
    let close_modal = move |_| {
        set_name.set(String::new());
        set_description.set(String::new());
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{format!("ADD TASK - {column}")}</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
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
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"CANCEL"</button>
                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || name.with(|n| n.trim().is_empty())
                        >
                            "CREATE"
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
