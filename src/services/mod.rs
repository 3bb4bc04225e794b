pub mod confirm;
pub mod notify;

pub use confirm::{BrowserConfirm, ConfirmDialog, ScriptedConfirm};
pub use notify::{NotificationSink, RecordingSink, Severity, ToastNotifier};
