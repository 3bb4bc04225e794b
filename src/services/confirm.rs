// ============================================================================
// CONFIRM DIALOG - synchronous yes/no gate for destructive actions
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Blocking yes/no question. The answer decides whether a destructive
/// action runs at all; a `false` aborts before any mutation.
pub trait ConfirmDialog {
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm` based dialog. Denies when the window or the call
/// itself is unavailable.
pub struct BrowserConfirm;

impl BrowserConfirm {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserConfirm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmDialog for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Dialog with a pre-set answer, recording every prompt it was shown.
/// Clones share both the answer and the prompt log.
#[derive(Clone)]
pub struct ScriptedConfirm {
    answer: Rc<Cell<bool>>,
    prompts: Rc<RefCell<Vec<String>>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: Rc::new(Cell::new(answer)),
            prompts: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn set_answer(&self, answer: bool) {
        self.answer.set(answer);
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl ConfirmDialog for ScriptedConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_confirm_returns_its_answer_and_logs_prompts() {
        let dialog = ScriptedConfirm::answering(true);
        assert!(dialog.confirm("Proceed?"));

        dialog.set_answer(false);
        assert!(!dialog.confirm("Still sure?"));

        assert_eq!(
            dialog.prompts(),
            vec!["Proceed?".to_string(), "Still sure?".to_string()]
        );
    }
}
