//! Custom cursor: a dot and a trailing ring eased toward the pointer.
//!
//! The pointer position is sampled from `mousemove`; a 16 ms loop moves both
//! followers toward it. Hovering a link, button or card enlarges the ring.

use leptos::prelude::*;

/// Elements that put the cursor in its hover state.
#[cfg(feature = "hydrate")]
const INTERACTIVE_SELECTOR: &str = "a, button, .work-card, input, textarea, select";

#[component]
pub fn Cursor() -> impl IntoView {
    let dot = RwSignal::new((0.0_f64, 0.0_f64));
    let ring = RwSignal::new((0.0_f64, 0.0_f64));
    let hovering = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use gallery::consts::{CURSOR_EASE, FOLLOWER_EASE, FRAME_MS};
        use gallery::motion::Follower;
        use wasm_bindgen::JsCast;

        let pointer = RwSignal::new((0.0_f64, 0.0_f64));
        let on_move = window_event_listener(leptos::ev::mousemove, move |ev| {
            pointer.set((f64::from(ev.client_x()), f64::from(ev.client_y())));
        });
        let on_over = window_event_listener(leptos::ev::mouseover, move |ev| {
            let interactive = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
                .is_some();
            hovering.set(interactive);
        });

        let mut dot_follower = Follower::new(CURSOR_EASE);
        let mut ring_follower = Follower::new(FOLLOWER_EASE);
        let frames = crate::util::timers::every(FRAME_MS, move || {
            let (x, y) = pointer.get_untracked();
            dot_follower.step(x, y);
            ring_follower.step(x, y);
            dot.set((dot_follower.x, dot_follower.y));
            ring.set((ring_follower.x, ring_follower.y));
            true
        });

        on_cleanup(move || {
            frames.stop();
            on_move.remove();
            on_over.remove();
        });
    }

    let translate = |(x, y): (f64, f64)| format!("translate3d({x:.1}px, {y:.1}px, 0)");

    view! {
        <div class="cursor" class:hover=move || hovering.get() style:transform=move || translate(dot.get())></div>
        <div class="cursor-follower" class:hover=move || hovering.get() style:transform=move || translate(ring.get())></div>
    }
}
