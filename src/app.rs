use leptos::prelude::*;
use std::rc::Rc;

use crate::core::services::{BrowserStore, StoreHandle};
use crate::features::board::services::DragPayload;
use crate::pages::Board;

#[component]
pub fn App() -> impl IntoView {
    // Every column talks to the persisted store through this handle; tests
    // swap in an in-memory double at the same seam
    let store: StoreHandle = Rc::new(BrowserStore);
    provide_context(store);

    // One drag gesture at a time, shared by every card and drop surface
    let drag_state: RwSignal<Option<DragPayload>> = RwSignal::new(None);
    provide_context(drag_state);

    view! {
        <main class="app">
            <Board />
        </main>
    }
}
