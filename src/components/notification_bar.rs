use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use leptos::prelude::*;

use crate::models::AppStore;

const DISMISS_AFTER_MS: u32 = 3000;

/// Displays transient notifications (non-modal).
#[component]
pub fn NotificationBar() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore context missing");

    // Dropping a Timeout cancels it, so replacing the slot resets the timer
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    Effect::new(move |_| {
        let timeout = store
            .notification
            .get()
            .map(|_| Timeout::new(DISMISS_AFTER_MS, move || store.clear_notification()));
        pending.replace(timeout);
    });

    view! {
        <Show when=move || store.notification.get().is_some()>
            <div class="notification-bar">
                {move || store.notification.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
