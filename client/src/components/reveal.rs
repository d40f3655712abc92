//! Scroll-reveal wrapper.
//!
//! Re-checks its position whenever the shared scroll offset changes and flips
//! to `revealed` once its top edge is inside the viewport margin. Revealing is
//! one-way.

use leptos::html::Div;
use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn Reveal(
    #[prop(optional, into)] class: String,
    /// Called once, when the wrapper first reveals.
    #[prop(optional)]
    on_reveal: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let node = NodeRef::<Div>::new();
    let revealed = RwSignal::new(false);

    Effect::new(move || {
        ui.with(|u| u.scroll_y);
        if revealed.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(element) = node.get() else {
                return;
            };
            let Some(viewport) = crate::util::dom::viewport_height() else {
                return;
            };
            if gallery::motion::should_reveal(crate::util::dom::element_top(&element), viewport) {
                revealed.set(true);
                if let Some(cb) = on_reveal {
                    cb.run(());
                }
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = on_reveal;

    view! {
        <div node_ref=node class=format!("reveal {class}") class:revealed=move || revealed.get()>
            {children()}
        </div>
    }
}
