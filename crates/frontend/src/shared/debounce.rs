use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Runs only the last of a burst of calls, `delay_ms` after it was made.
#[derive(Clone, Copy)]
pub struct Debouncer {
    pending: StoredValue<Option<Timeout>, LocalStorage>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            pending: StoredValue::new_local(None),
            delay_ms,
        }
    }

    pub fn run(&self, f: impl FnOnce() + 'static) {
        // Dropping the previous Timeout cancels it.
        self.pending.set_value(Some(Timeout::new(self.delay_ms, f)));
    }

    pub fn cancel(&self) {
        self.pending.set_value(None);
    }
}
