//! Toast notification and the `notify` helper used by forms and admin flows.

use gallery::consts::NOTICE_HIDE_MS;
use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};
use crate::util::timers;

/// Show a toast, replacing any current one, and hide it after a few seconds.
pub fn notify(notices: RwSignal<NoticeState>, kind: NoticeKind, message: impl Into<String>) {
    let mut id = 0;
    notices.update(|n| id = n.show(kind, message));
    timers::after(NOTICE_HIDE_MS, move || {
        notices.update(|n| {
            n.expire(id);
        });
    });
}

/// Bottom-corner toast bound to the shared `NoticeState`.
#[component]
pub fn Notification() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let current = move || notices.with(|n| n.current().cloned());

    view! {
        <Show when=move || current().is_some()>
            {move || {
                current()
                    .map(|notice| {
                        view! {
                            <div class=format!("notification show {}", notice.kind.class()) role="status">
                                <span>{notice.message}</span>
                                <button
                                    class="notification__close"
                                    title="Dismiss"
                                    on:click=move |_| notices.update(NoticeState::dismiss)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
