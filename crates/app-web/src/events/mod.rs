pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_pointer_handlers, wire_resize};

use crate::SharedSession;
use app_core::Session;

/// Run `f` against the session unless another handler already holds it, in
/// which case the event is dropped.
pub fn with_session(session: &SharedSession, label: &str, f: impl FnOnce(&mut Session)) {
    match session.try_borrow_mut() {
        Ok(mut s) => f(&mut s),
        Err(_) => log::debug!("[events] session busy; dropped {}", label),
    }
}
