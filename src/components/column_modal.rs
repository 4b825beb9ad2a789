use leptos::prelude::*;
use leptos::{ev, html::Dialog};
use std::rc::Rc;

/// Board-level dialog for adding a status column. Blank names and exact
/// duplicates are dropped by the membership manager, so submitting one
/// simply closes the dialog without changing the board.
#[component]
pub fn ColumnModal(
    on_create: Rc<dyn Fn(String) + 'static>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());

    let handle_submit = {
        let on_create = on_create.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            on_create(name.get_untracked());
            set_name.set(String::new());
            if let Some(dialog) = dialog_ref.get() {
                dialog.close();
            }
        }
    };

    let close_modal = move |_| {
        set_name.set(String::new());
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"ADD COLUMN"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"NAME"</label>
                        <input
                            type="text"
                            placeholder="Column name..."
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            prop:value=move || name.get()
                            required
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"CREATE"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
