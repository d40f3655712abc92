//! Single-page portfolio.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home route owns page-level orchestration: the startup catalog fetch
//! and admin token check (run concurrently), the window scroll and admin
//! shortcut listeners, the preloader timer and the body scroll lock. Sections
//! render from the shared state signals provided by `App`.

use gallery::consts::PRELOADER_HIDE_MS;
use gallery::error::LoadError;
use gallery::work::WorkItem;
use leptos::prelude::*;

use crate::app::CatalogReload;
use crate::components::about::{About, Skills};
use crate::components::admin_panel::AdminPanel;
use crate::components::chrome::{Preloader, ScrollProgress};
use crate::components::contact_form::ContactSection;
use crate::components::cursor::Cursor;
use crate::components::hero::Hero;
use crate::components::lightbox::Lightbox;
use crate::components::notification::Notification;
use crate::components::site_header::SiteHeader;
use crate::components::works_section::WorksSection;
use crate::state::admin::AdminState;
use crate::state::gallery::GalleryState;
use crate::state::notice::NoticeState;
use crate::state::ui::{UiState, body_scroll_locked};
use crate::util::{dom, timers};

/// Install a catalog result and log when the built-in works are shown.
fn install_catalog(gallery: RwSignal<GalleryState>, fetched: Result<Vec<WorkItem>, LoadError>) {
    gallery.update(|g| g.apply_load(fetched));
    if let Some(reason) = gallery.with_untracked(|g| g.fallback.clone()) {
        log::warn!("showing built-in works: {reason}");
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let admin = expect_context::<RwSignal<AdminState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    provide_context(CatalogReload(Callback::new(move |()| {
        gallery.update(|g| g.loading = true);
        leptos::task::spawn_local(async move {
            install_catalog(gallery, crate::net::api::fetch_works().await);
        });
    })));

    // Startup: catalog and stored admin token, concurrently.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        admin.set(AdminState::with_stored_token(crate::util::admin_token::load()));
        let pending = admin.with_untracked(|a| a.pending_token().map(str::to_owned));
        leptos::task::spawn_local(async move {
            let verify = async {
                match &pending {
                    Some(token) => crate::net::api::verify_admin(token).await,
                    None => None,
                }
            };
            let (works, verified) = futures::join!(crate::net::api::fetch_works(), verify);
            install_catalog(gallery, works);
            if let Some(valid) = verified {
                admin.update(|a| a.apply_verification(valid));
                if !valid {
                    crate::util::admin_token::clear();
                }
            }
        });
    });

    timers::after(PRELOADER_HIDE_MS, move || ui.update(UiState::hide_preloader));

    #[cfg(feature = "hydrate")]
    {
        let sync_scroll = move || {
            if let Some((y, document_height, viewport)) = dom::scroll_metrics() {
                ui.update(|u| u.on_scroll(y, document_height, viewport));
            }
        };
        sync_scroll();
        let scroll = window_event_listener(leptos::ev::scroll, move |_| sync_scroll());

        let shortcut = window_event_listener(leptos::ev::keydown, move |ev| {
            if !crate::state::admin::is_admin_shortcut(ev.ctrl_key(), ev.shift_key(), &ev.key()) {
                return;
            }
            ev.prevent_default();
            let mut action = None;
            admin.update(|a| action = Some(a.shortcut()));
            if action == Some(crate::state::admin::ShortcutAction::PromptLogin) {
                crate::components::admin_panel::prompt_login(admin, notices);
            }
        });

        on_cleanup(move || {
            scroll.remove();
            shortcut.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (admin, notices);

    Effect::new(move || {
        let menu_open = ui.with(|u| u.menu_open);
        let overlay = gallery.with(|g| g.lightbox.is_mounted());
        dom::set_body_scroll_locked(body_scroll_locked(menu_open, overlay));
    });

    view! {
        <Preloader/>
        <Cursor/>
        <ScrollProgress/>
        <SiteHeader/>
        <main>
            <Hero/>
            <About/>
            <WorksSection/>
            <Skills/>
            <ContactSection/>
        </main>
        <footer class="footer">
            <div class="container">
                <p>"© Portfolio. Design, video and web."</p>
            </div>
        </footer>
        <Lightbox/>
        <AdminPanel/>
        <Notification/>
    }
}
