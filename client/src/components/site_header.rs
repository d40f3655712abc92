//! Fixed site header with section navigation and the mobile menu.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dom;

/// Telegram bot that takes orders; every "write me" button points here.
pub const TELEGRAM_URL: &str = "https://t.me/your_portfolio_bot";

/// In-page sections, `(href, label)`.
pub const NAV_LINKS: &[(&str, &str)] =
    &[("#home", "Home"), ("#works", "Works"), ("#skills", "Skills"), ("#contact", "Contact")];

/// Smooth-scroll click handler for in-page anchors; also closes the mobile menu.
fn on_anchor_click(ui: RwSignal<UiState>, href: &'static str) -> impl Fn(leptos::ev::MouseEvent) + 'static {
    move |ev| {
        if dom::scroll_to_anchor(href) {
            ev.prevent_default();
        }
        ui.update(UiState::close_menu);
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let scrolled = move || ui.with(|u| u.scrolled);
    let menu_open = move || ui.with(|u| u.menu_open);

    view! {
        <header class="header" class:scrolled=scrolled>
            <nav class="nav container">
                <a href="#home" class="logo" on:click=on_anchor_click(ui, "#home")>
                    "folio"<span class="logo__dot">"."</span>
                </a>
                <ul class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| {
                            view! {
                                <li>
                                    <a href=href on:click=on_anchor_click(ui, href)>{label}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <a href=TELEGRAM_URL target="_blank" rel="noopener" class="btn btn-primary nav-cta telegram-link">
                    "Order"
                </a>
                <button
                    class="menu-toggle"
                    class:active=menu_open
                    aria-label="Menu"
                    on:click=move |_| {
                        ui.update(|u| {
                            u.toggle_menu();
                        });
                    }
                >
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>
        <div class="mobile-menu" class:active=menu_open>
            <ul class="mobile-nav-links">
                {NAV_LINKS
                    .iter()
                    .map(|&(href, label)| {
                        view! {
                            <li>
                                <a href=href on:click=on_anchor_click(ui, href)>{label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <a href=TELEGRAM_URL target="_blank" rel="noopener" class="btn btn-primary telegram-link">
                "Write in Telegram"
            </a>
        </div>
    }
}
