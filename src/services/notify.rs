// ============================================================================
// NOTIFICATION SINK - transient success/error toasts
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;

use crate::utils::constants::TOAST_DISMISS_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// CSS class suffix on the toast element.
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// Fire-and-forget side channel for user-facing feedback. Callers never
/// look at the outcome.
pub trait NotificationSink {
    fn notify(&self, message: &str, severity: Severity);
}

/// Renders toasts into a `#toast-container` div, creating it on first use.
/// Each toast removes itself after [`TOAST_DISMISS_MS`].
pub struct ToastNotifier;

impl ToastNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for ToastNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        if let Err(e) = show_toast(message, severity) {
            log::error!("❌ Failed to show toast: {:?}", e);
        }
    }
}

fn show_toast(message: &str, severity: Severity) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let container = match document.get_element_by_id("toast-container") {
        Some(container) => container,
        None => {
            let container = document.create_element("div")?;
            container.set_id("toast-container");
            document
                .body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .append_child(&container)?;
            container
        }
    };

    let toast = document.create_element("div")?;
    toast.set_class_name(&format!("toast {}", severity.class()));
    toast.set_text_content(Some(message));
    container.append_child(&toast)?;

    let handle = toast.clone();
    Timeout::new(TOAST_DISMISS_MS, move || {
        handle.remove();
    })
    .forget();

    Ok(())
}

/// Sink that keeps every message in memory instead of touching the DOM.
/// Clones share the same buffer.
#[derive(Clone, Default)]
pub struct RecordingSink {
    messages: Rc<RefCell<Vec<(String, Severity)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(String, Severity)> {
        self.messages.borrow().clone()
    }

    pub fn last(&self) -> Option<(String, Severity)> {
        self.messages.borrow().last().cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages
            .borrow_mut()
            .push((message.to_string(), severity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_messages_in_order() {
        let sink = RecordingSink::new();
        sink.notify("first", Severity::Success);
        sink.notify("second", Severity::Error);

        assert_eq!(
            sink.messages(),
            vec![
                ("first".to_string(), Severity::Success),
                ("second".to_string(), Severity::Error),
            ]
        );
        assert_eq!(sink.last(), Some(("second".to_string(), Severity::Error)));
    }

    #[test]
    fn recording_sink_clones_share_the_buffer() {
        let sink = RecordingSink::new();
        let other = sink.clone();
        sink.notify("shared", Severity::Success);
        assert_eq!(other.messages().len(), 1);
    }
}
