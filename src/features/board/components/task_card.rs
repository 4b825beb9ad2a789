use leptos::prelude::*;
use leptos::ev;
use std::rc::Rc;
use wasm_bindgen::JsCast;

use crate::features::board::services::{decide_reorder, DragPayload, ReorderAction};
use crate::models::Task;

#[component]
pub fn TaskCard(
    #[prop(into)] task: Task,
    index: usize,
    #[prop(into)] column: String,
    on_open: Rc<dyn Fn(Task) + 'static>,
    on_delete: Rc<dyn Fn(usize) + 'static>,
    on_hover_reorder: Rc<dyn Fn(usize, usize) + 'static>,
    on_drag_abandoned: Rc<dyn Fn() + 'static>,
) -> impl IntoView {
    let drag_state =
        use_context::<RwSignal<Option<DragPayload>>>().expect("drag context");

    let handle_drag_start = {
        let task = task.clone();
        let column = column.clone();
        move |ev: ev::DragEvent| {
            // A plain-text payload gives the browser something to render as
            // the drag image; the real state travels through the signal.
            if let Some(data_transfer) = ev.data_transfer() {
                let _ = data_transfer.set_data("text/plain", &task.id);
            }
            drag_state.set(Some(DragPayload {
                task: task.clone(),
                from_column: column.clone(),
                from_index: index,
            }));
        }
    };

    // In-column hover reordering: compare the pointer to this card's vertical
    // midpoint and splice the dragged task past it. Nothing is persisted
    // until the gesture ends in a drop.
    let handle_drag_over = {
        let column = column.clone();
        let on_hover_reorder = on_hover_reorder.clone();
        move |ev: ev::DragEvent| {
            ev.prevent_default();
            let Some(mut payload) = drag_state.get_untracked() else {
                return;
            };
            if payload.from_column != column || payload.from_index == index {
                return;
            }
            let Some(midpoint) = ev
                .current_target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .map(|card| {
                    let rect = card.get_bounding_client_rect();
                    rect.top() + rect.height() / 2.0
                })
            else {
                return;
            };
            if let ReorderAction::Move { to } =
                decide_reorder(payload.from_index, index, ev.client_y() as f64, midpoint)
            {
                on_hover_reorder(payload.from_index, to);
                payload.from_index = to;
                drag_state.set(Some(payload));
            }
        }
    };

    // Fires after any drop. A payload still in the signal means the release
    // landed outside every drop surface; revert the unpersisted hover moves.
    let handle_drag_end = {
        let task_id = task.id.clone();
        let on_drag_abandoned = on_drag_abandoned.clone();
        move |_ev: ev::DragEvent| {
            let abandoned = drag_state
                .get_untracked()
                .is_some_and(|payload| payload.task.id == task_id);
            if abandoned {
                drag_state.set(None);
                on_drag_abandoned();
            }
        }
    };

    let handle_click = {
        let task = task.clone();
        let on_open = on_open.clone();
        move |_| on_open(task.clone())
    };

    let handle_delete = {
        let on_delete = on_delete.clone();
        move |e: ev::MouseEvent| {
            e.stop_propagation();
            on_delete(index);
        }
    };

    view! {
        <div
            class="task-card clickable"
            draggable="true"
            on:dragstart=handle_drag_start
            on:dragover=handle_drag_over
            on:dragend=handle_drag_end
            on:click=handle_click
        >
            <div class="task-content">
                <h4>{task.name.clone()}</h4>
                {(!task.description.is_empty()).then(|| view! {
                    <p>{task.description.clone()}</p>
                })}
            </div>
            <button class="task-delete-btn" title="Delete task" on:click=handle_delete>"🞮"</button>
        </div>
    }
}
