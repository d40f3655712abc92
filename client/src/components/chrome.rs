//! Page chrome overlays: preloader and scroll progress bar.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn Preloader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <div class="preloader" class:hidden=move || !ui.with(|u| u.preloader_visible)>
            <div class="preloader__ring"></div>
        </div>
    }
}

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <div class="scroll-progress" style:width=move || format!("{:.2}%", ui.with(|u| u.scroll_progress))></div>
    }
}
