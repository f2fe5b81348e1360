//! Thread-local hand-off from JavaScript entry points into the mounted app.
//!
//! Exported functions such as `addToComparison` can run before Yew has
//! rendered (inline handlers on server markup), so events raised without a
//! listener are queued and replayed when one registers.

use crate::PropertyId;
use std::cell::RefCell;
use std::rc::Rc;

/// Requests originating outside the Yew tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Compare(PropertyId),
    Uncompare(PropertyId),
    ShowProperty(PropertyId),
    ScheduleViewing(PropertyId),
    GoToPage(String),
}

type Listener = Rc<dyn Fn(AppEvent)>;

thread_local! {
    static LISTENER: RefCell<Option<Listener>> = RefCell::new(None);
    static PENDING: RefCell<Vec<AppEvent>> = RefCell::new(Vec::new());
}

/// Route events to `listener`, replaying anything queued so far.
pub fn set_listener(listener: impl Fn(AppEvent) + 'static) {
    let listener: Listener = Rc::new(listener);
    LISTENER.with(|slot| *slot.borrow_mut() = Some(listener.clone()));

    let queued = PENDING.with(|q| std::mem::take(&mut *q.borrow_mut()));
    if !queued.is_empty() {
        log::debug!("replaying {} queued app events", queued.len());
    }
    for event in queued {
        listener(event);
    }
}

/// Detach the current listener; later events queue again.
pub fn clear_listener() {
    LISTENER.with(|slot| slot.borrow_mut().take());
}

pub fn dispatch(event: AppEvent) {
    // Clone out of the slot so a listener may dispatch or re-register.
    let listener = LISTENER.with(|slot| slot.borrow().clone());
    match listener {
        Some(listener) => listener(event),
        None => PENDING.with(|q| q.borrow_mut().push(event)),
    }
}
