//! Click listeners for column headers and table rows.
//!
//! Listeners only pull the sort key or row name out of the event and hand it
//! to a callback; they never touch dashboard state themselves.

use super::markup::{HEADER_KEY_ATTR, ROW_NAME_ATTR};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, MouseEvent};

/// Callback receiving a header key or a row name.
pub type ClickHandler = Rc<dyn Fn(&str)>;

type Listener = Closure<dyn FnMut(MouseEvent)>;

/// Registered listeners, removed again when dropped.
#[derive(Default)]
pub struct EventBindings {
    listeners: Vec<(EventTarget, Listener)>,
}

impl EventBindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Call `handler` with the header's `data-key` whenever it is clicked.
    pub fn bind_header(&mut self, th: &Element, handler: ClickHandler) -> Result<(), JsValue> {
        let Some(key) = th.get_attribute(HEADER_KEY_ATTR) else {
            return Ok(());
        };
        let listener = Listener::new(move |_event: MouseEvent| handler(&key));
        self.listen(th, listener)
    }

    /// Call `handler` with the clicked row's record name.
    ///
    /// A single delegated listener on the table body survives re-rendering
    /// of the rows.
    pub fn bind_rows(&mut self, table_body: &Element, handler: ClickHandler) -> Result<(), JsValue> {
        let listener = Listener::new(move |event: MouseEvent| {
            if let Some(name) = clicked_row_name(&event) {
                handler(&name);
            }
        });
        self.listen(table_body, listener)
    }

    fn listen(&mut self, target: &EventTarget, listener: Listener) -> Result<(), JsValue> {
        target.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
        self.listeners.push((target.clone(), listener));
        Ok(())
    }
}

impl Drop for EventBindings {
    fn drop(&mut self) {
        for (target, listener) in self.listeners.drain(..) {
            target
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                .ok();
        }
    }
}

/// Record name of the `<tr data-name>` enclosing the event target.
fn clicked_row_name(event: &MouseEvent) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let row = target.closest(&format!("tr[{ROW_NAME_ATTR}]")).ok()??;
    row.get_attribute(ROW_NAME_ATTR)
}
