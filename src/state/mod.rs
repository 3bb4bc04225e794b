// ============================================================================
// STATE MODULE - shared app state behind Rc<RefCell>
// ============================================================================

pub mod app_state;

pub use app_state::*;
