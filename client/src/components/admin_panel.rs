//! Hidden admin panel for adding works, plus the password login flow.
//!
//! The panel is reached with Ctrl+Shift+A (see `pages::home`). A verified
//! token opens it directly; otherwise the browser prompt asks for the
//! password first.

use gallery::forms::WorkDraft;
use gallery::work::Category;
use leptos::html::Form;
use leptos::prelude::*;

use crate::app::CatalogReload;
use crate::components::notification::notify;
use crate::state::admin::AdminState;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::util::{admin_token, dom};

const LOGIN_PROMPT: &str = "Admin password:";

/// Ask for the admin password and exchange it for a session token.
pub fn prompt_login(admin: RwSignal<AdminState>, notices: RwSignal<NoticeState>) {
    let Some(password) = dom::prompt(LOGIN_PROMPT).filter(|p| !p.is_empty()) else {
        return;
    };
    admin.update(|a| a.busy = true);
    leptos::task::spawn_local(async move {
        match crate::net::api::admin_login(&password).await {
            Ok(resp) => {
                admin_token::save(&resp.token);
                admin.update(|a| a.logged_in(resp.token));
                notify(notices, NoticeKind::Success, "Signed in");
            }
            Err(e) => {
                admin.update(|a| a.busy = false);
                let message = if e == "invalid password" {
                    "Wrong password".to_owned()
                } else {
                    format!("Could not reach the server: {e}")
                };
                notify(notices, NoticeKind::Error, message);
            }
        }
    });
}

#[component]
pub fn AdminPanel() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let reload = expect_context::<CatalogReload>();
    let form_ref = NodeRef::<Form>::new();

    let title = RwSignal::new(String::new());
    let category = RwSignal::new(Category::KNOWN[0].as_str().to_owned());
    let description = RwSignal::new(String::new());
    let link = RwSignal::new(String::new());

    let open = move || admin.with(|a| a.panel_open);
    let close = move || admin.update(AdminState::close_panel);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if admin.with_untracked(|a| a.busy) {
            return;
        }
        let Some(token) = admin.with_untracked(|a| a.bearer().map(str::to_owned)) else {
            notify(notices, NoticeKind::Error, "Sign in required");
            return;
        };
        let draft = WorkDraft {
            title: title.get_untracked(),
            category: category.get_untracked(),
            description: description.get_untracked(),
            link: Some(link.get_untracked()),
        };
        if let Err(e) = draft.validate() {
            notify(notices, NoticeKind::Error, e.to_string());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(form) = form_ref.get_untracked() else {
                return;
            };
            let data = match web_sys::FormData::new_with_form(&form) {
                Ok(data) => data,
                Err(e) => {
                    log::warn!("admin form could not be read: {e:?}");
                    return;
                }
            };
            admin.update(|a| a.busy = true);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_work(&token, &data).await;
                admin.update(|a| a.busy = false);
                match result {
                    Ok(()) => {
                        notify(notices, NoticeKind::Success, "Work added");
                        form.reset();
                        title.set(String::new());
                        description.set(String::new());
                        link.set(String::new());
                        admin.update(AdminState::close_panel);
                        reload.run();
                    }
                    Err(e) => {
                        log::warn!("add work failed: {e}");
                        notify(notices, NoticeKind::Error, "Could not add the work");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, form_ref, reload);
        }
    };

    let on_logout = move |_| {
        let mut revoked = None;
        admin.update(|a| revoked = a.logout());
        let Some(token) = revoked else {
            return;
        };
        admin_token::clear();
        notify(notices, NoticeKind::Info, "Signed out");
        leptos::task::spawn_local(async move {
            crate::net::api::admin_logout(&token).await;
        });
    };

    view! {
        <div class="admin-modal" class:active=open on:click=move |_| close()>
            <div class="admin-modal__content" on:click=|ev| ev.stop_propagation()>
                <button class="admin-modal__close" aria-label="Close" on:click=move |_| close()>
                    "×"
                </button>
                <h3>"Add work"</h3>
                <form node_ref=form_ref class="admin-form" on:submit=on_submit>
                    <input
                        class="form-input"
                        type="text"
                        name="title"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <select
                        class="form-input"
                        name="category"
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        {Category::KNOWN
                            .into_iter()
                            .map(|c| {
                                let value = c.as_str().to_owned();
                                let label = c.label().to_owned();
                                view! { <option value=value>{label}</option> }
                            })
                            .collect_view()}
                    </select>
                    <textarea
                        class="form-input"
                        name="description"
                        rows="4"
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <input
                        class="form-input"
                        type="url"
                        name="link"
                        placeholder="Link (optional)"
                        prop:value=move || link.get()
                        on:input=move |ev| link.set(event_target_value(&ev))
                    />
                    <input class="form-input" type="file" name="image" accept="image/*"/>
                    <button class="btn btn-primary" type="submit" disabled=move || admin.with(|a| a.busy)>
                        <Show when=move || admin.with(|a| a.busy) fallback=|| "Add work">
                            <span class="loading-dots"><span></span><span></span><span></span></span>
                        </Show>
                    </button>
                </form>
                <button class="btn btn-outline admin-logout" on:click=on_logout>
                    "Sign out"
                </button>
            </div>
        </div>
    }
}
