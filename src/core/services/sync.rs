//! Cross-component notifier: one publish/subscribe bus whose topic is the
//! storage key. Same-window delivery rides an application `CustomEvent` on
//! `window`; cross-window delivery is the browser's native `storage` event,
//! which fires on its own whenever another tab writes the key.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::core::services::logging;
use crate::core::services::storage::{tasks_key, COLUMNS_KEY};
use crate::models::Task;

/// Name of the same-window event mirroring the native storage signal.
pub const SYNC_EVENT: &str = "board-sync";

/// Serialize and publish a column's post-mutation task list. Callers must
/// have updated their own state and the store before publishing.
pub fn publish_tasks(column: &str, tasks: &[Task]) {
    match serde_json::to_string(tasks) {
        Ok(raw) => publish(&tasks_key(column), Some(&raw)),
        Err(e) => logging::error(&format!("Failed to serialize tasks for column {column}: {e}")),
    }
}

/// Serialize and publish the board's post-mutation membership list.
pub fn publish_columns(columns: &[String]) {
    match serde_json::to_string(columns) {
        Ok(raw) => publish(COLUMNS_KEY, Some(&raw)),
        Err(e) => logging::error(&format!("Failed to serialize column list: {e}")),
    }
}

/// Publish an update for one key; `new_value` is `None` when the key was
/// removed. The event detail carries `{ key, newValue }`, matching what a
/// native storage event delivers to other windows.
pub fn publish(key: &str, new_value: Option<&str>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let detail = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&detail, &JsValue::from_str("key"), &JsValue::from_str(key));
    let value = match new_value {
        Some(v) => JsValue::from_str(v),
        None => JsValue::NULL,
    };
    let _ = js_sys::Reflect::set(&detail, &JsValue::from_str("newValue"), &value);

    let init = web_sys::CustomEventInit::new();
    init.set_detail(&detail);
    match web_sys::CustomEvent::new_with_event_init_dict(SYNC_EVENT, &init) {
        Ok(event) => {
            let _ = window.dispatch_event(&event);
        }
        Err(_) => logging::error("Failed to construct board sync event"),
    }
}

/// Listener registration for one topic. Dropping the guard detaches both
/// listeners, so a column stops observing its key when it unmounts.
pub struct SyncSubscription {
    custom: Closure<dyn FnMut(web_sys::CustomEvent)>,
    storage: Closure<dyn FnMut(web_sys::StorageEvent)>,
}

/// Observe every update published for `topic`, from this window or another.
/// The callback receives the new serialized value, `None` for a removal.
pub fn subscribe(
    topic: String,
    on_update: impl Fn(Option<String>) + 'static,
) -> Option<SyncSubscription> {
    let window = web_sys::window()?;
    let on_update: Rc<dyn Fn(Option<String>)> = Rc::new(on_update);

    let custom = {
        let topic = topic.clone();
        let on_update = on_update.clone();
        Closure::<dyn FnMut(web_sys::CustomEvent)>::new(move |event: web_sys::CustomEvent| {
            let detail = event.detail();
            let key = js_sys::Reflect::get(&detail, &JsValue::from_str("key"))
                .ok()
                .and_then(|v| v.as_string());
            if key.as_deref() != Some(topic.as_str()) {
                return;
            }
            let new_value = js_sys::Reflect::get(&detail, &JsValue::from_str("newValue"))
                .ok()
                .and_then(|v| v.as_string());
            on_update(new_value);
        })
    };

    let storage = {
        let topic = topic.clone();
        let on_update = on_update.clone();
        Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |event: web_sys::StorageEvent| {
            if event.key().as_deref() != Some(topic.as_str()) {
                return;
            }
            on_update(event.new_value());
        })
    };

    let attached = window
        .add_event_listener_with_callback(SYNC_EVENT, custom.as_ref().unchecked_ref())
        .and_then(|_| {
            window.add_event_listener_with_callback("storage", storage.as_ref().unchecked_ref())
        });
    if attached.is_err() {
        logging::error(&format!("Failed to attach sync listeners for {topic}"));
        return None;
    }

    Some(SyncSubscription { custom, storage })
}

impl Drop for SyncSubscription {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback(SYNC_EVENT, self.custom.as_ref().unchecked_ref());
            let _ = window
                .remove_event_listener_with_callback("storage", self.storage.as_ref().unchecked_ref());
        }
    }
}
